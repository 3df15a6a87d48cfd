//! Source snapshot model.
//!
//! A serializable mirror of the design tool's plugin-API node tree. Every
//! capability field is optional so partial exports (REST snapshots, hand-made
//! fixtures) still deserialize; defaults are applied by the copiers, not here.

use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use prism_core::paint::{Effect, Paint};
use prism_core::style::{
    Constraints, FontName, Guide, LayoutAlign, LayoutGrid, LetterSpacing, LineHeight, SizingMode,
    StrokeAlign, StrokeCap, StrokeJoin, TextAutoResize, TextCase, TextDecoration,
};
use prism_core::Transform;

/// Wire spelling of the design tool's "mixed" marker.
pub const MIXED: &str = "<mixed>";

// ───────────────────────────────────────────────────────────────────
// Mixable
// ───────────────────────────────────────────────────────────────────

/// A value that the source may report as mixed across an aggregate
/// (e.g. a text run with several font sizes).
#[derive(Clone, Debug, PartialEq)]
pub enum Mixable<T> {
    Value(T),
    Mixed,
}

impl<T> Mixable<T> {
    pub fn is_mixed(&self) -> bool {
        matches!(self, Mixable::Mixed)
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            Mixable::Value(v) => Some(v),
            Mixable::Mixed => None,
        }
    }
}

impl<T> From<T> for Mixable<T> {
    fn from(value: T) -> Self {
        Mixable::Value(value)
    }
}

impl<T: Serialize> Serialize for Mixable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Mixable::Value(v) => v.serialize(serializer),
            Mixable::Mixed => serializer.serialize_str(MIXED),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Mixable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Strings are inspected first so string-typed values (style ids,
        // enum tags) still reach `T` when they are not the marker.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr<T> {
            Text(String),
            Other(T),
        }

        match Repr::<T>::deserialize(deserializer)? {
            Repr::Text(s) if s == MIXED => Ok(Mixable::Mixed),
            Repr::Text(s) => T::deserialize(s.into_deserializer()).map(Mixable::Value),
            Repr::Other(v) => Ok(Mixable::Value(v)),
        }
    }
}

// ───────────────────────────────────────────────────────────────────
// Source enums
// ───────────────────────────────────────────────────────────────────

/// Closed classification of the raw `type` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Frame,
    Group,
    Component,
    ComponentSet,
    Instance,
    Rectangle,
    Ellipse,
    Line,
    Vector,
    Text,
    Polygon,
    Star,
    BooleanOperation,
    Slice,
    Other,
}

impl SourceKind {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "FRAME" => SourceKind::Frame,
            "GROUP" => SourceKind::Group,
            "COMPONENT" => SourceKind::Component,
            "COMPONENT_SET" => SourceKind::ComponentSet,
            "INSTANCE" => SourceKind::Instance,
            "RECTANGLE" => SourceKind::Rectangle,
            "ELLIPSE" => SourceKind::Ellipse,
            "LINE" => SourceKind::Line,
            "VECTOR" => SourceKind::Vector,
            "TEXT" => SourceKind::Text,
            "POLYGON" | "REGULAR_POLYGON" => SourceKind::Polygon,
            "STAR" => SourceKind::Star,
            "BOOLEAN_OPERATION" => SourceKind::BooleanOperation,
            "SLICE" => SourceKind::Slice,
            _ => SourceKind::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceBlendMode {
    PassThrough,
    Normal,
    Darken,
    Multiply,
    LinearBurn,
    ColorBurn,
    Lighten,
    Screen,
    LinearDodge,
    ColorDodge,
    Overlay,
    SoftLight,
    HardLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceLayoutMode {
    None,
    Horizontal,
    Vertical,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourcePrimaryAlign {
    Min,
    Center,
    Max,
    SpaceBetween,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceCounterAlign {
    Min,
    Center,
    Max,
    Baseline,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceTextAlign {
    Left,
    Center,
    Right,
    Justified,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceTextAlignVertical {
    Top,
    Center,
    Bottom,
    #[serde(other)]
    Unknown,
}

// ───────────────────────────────────────────────────────────────────
// Capability groups
// ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceBlend {
    pub opacity: Option<f64>,
    pub blend_mode: Option<SourceBlendMode>,
    pub is_mask: Option<bool>,
    pub effects: Vec<Effect>,
    pub effect_style_id: Option<String>,
    /// Absent in non-context exports; only an explicit `false` hides a node.
    pub visible: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceGeometry {
    pub fills: Option<Mixable<Vec<Paint>>>,
    pub strokes: Vec<Paint>,
    pub stroke_weight: Option<f64>,
    pub stroke_miter_limit: Option<f64>,
    pub stroke_align: Option<StrokeAlign>,
    pub stroke_cap: Option<Mixable<StrokeCap>>,
    pub stroke_join: Option<Mixable<StrokeJoin>>,
    pub dash_pattern: Vec<f64>,
    pub fill_style_id: Option<Mixable<String>>,
    pub stroke_style_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceLayout {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<f64>,
    pub layout_align: Option<LayoutAlign>,
    pub layout_grow: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceCorner {
    pub corner_radius: Option<Mixable<f64>>,
    pub corner_smoothing: Option<f64>,
    pub top_left_radius: Option<f64>,
    pub top_right_radius: Option<f64>,
    pub bottom_right_radius: Option<f64>,
    pub bottom_left_radius: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceFrame {
    pub layout_mode: Option<SourceLayoutMode>,
    pub primary_axis_sizing_mode: Option<SizingMode>,
    pub counter_axis_sizing_mode: Option<SizingMode>,
    pub primary_axis_align_items: Option<SourcePrimaryAlign>,
    pub counter_axis_align_items: Option<SourceCounterAlign>,
    pub padding_left: Option<f64>,
    pub padding_right: Option<f64>,
    pub padding_top: Option<f64>,
    pub padding_bottom: Option<f64>,
    pub item_spacing: Option<f64>,
    pub layout_grids: Vec<LayoutGrid>,
    pub grid_style_id: Option<String>,
    pub clips_content: Option<bool>,
    pub guides: Vec<Guide>,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceText {
    pub text_align_horizontal: Option<SourceTextAlign>,
    pub text_align_vertical: Option<SourceTextAlignVertical>,
    pub paragraph_indent: Option<f64>,
    pub paragraph_spacing: Option<f64>,
    pub font_size: Option<Mixable<f64>>,
    pub font_name: Option<Mixable<FontName>>,
    pub text_case: Option<Mixable<TextCase>>,
    pub text_decoration: Option<Mixable<TextDecoration>>,
    pub text_style_id: Option<Mixable<String>>,
    pub letter_spacing: Option<Mixable<LetterSpacing>>,
    pub line_height: Option<Mixable<LineHeight>>,
    pub text_auto_resize: Option<TextAutoResize>,
    pub characters: Option<String>,
}

// ───────────────────────────────────────────────────────────────────
// SourceNode
// ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Raw type string, e.g. `"FRAME"`.
    #[serde(rename = "type", default)]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub absolute_transform: Transform,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SourceNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_component_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Constraints>,

    #[serde(flatten)]
    pub blend: SourceBlend,
    #[serde(flatten)]
    pub geometry: SourceGeometry,
    #[serde(flatten)]
    pub layout: SourceLayout,
    #[serde(flatten)]
    pub corner: SourceCorner,
    #[serde(flatten)]
    pub frame: SourceFrame,
    #[serde(flatten)]
    pub text: SourceText,
}

impl SourceNode {
    /// Bare node of the given raw type. Mostly useful for fixtures.
    pub fn new(id: impl Into<String>, name: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            node_type: node_type.into(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn kind(&self) -> SourceKind {
        SourceKind::from_raw(&self.node_type)
    }

    /// Explicitly hidden. A missing flag means visible.
    pub fn is_hidden(&self) -> bool {
        self.blend.visible == Some(false)
    }

    /// Declares a horizontal or vertical layout mode.
    pub fn is_auto_layout(&self) -> bool {
        matches!(
            self.frame.layout_mode,
            Some(SourceLayoutMode::Horizontal | SourceLayoutMode::Vertical)
        )
    }
}
