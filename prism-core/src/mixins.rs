//! Capability bundles ("mixins") and the traits that expose them.
//!
//! Each node variant owns the bundles it supports as plain fields and
//! implements the matching trait. Code that only cares about one capability
//! (the copiers in `prism-convert`, the heuristics) is written against the
//! trait, never against a concrete variant.
//!
//! | Variant   | Blend | Geometry | Corner | Layout | Constraint | Frame | Text | Children |
//! |-----------|:-----:|:--------:|:------:|:------:|:----------:|:-----:|:----:|:--------:|
//! | Group     |   ✓   |          |        |   ✓    |            |       |      |    ✓     |
//! | Frame     |   ✓   |    ✓     |   ✓    |   ✓    |     ✓      |   ✓   |      |    ✓     |
//! | Rectangle |   ✓   |    ✓     |   ✓    |   ✓    |     ✓      |       |      |          |
//! | Ellipse   |   ✓   |    ✓     |   ✓    |   ✓    |            |       |      |          |
//! | Line      |   ✓   |    ✓     |        |   ✓    |     ✓      |       |      |          |
//! | Text      |   ✓   |    ✓     |        |   ✓    |     ✓      |       |  ✓   |          |

use serde::{Deserialize, Serialize};

use crate::geometry::{CornerRadius, EdgeInsets};
use crate::node::Node;
use crate::paint::{BlendMode, Effect, Paint};
use crate::style::{
    Axis, Constraints, CrossAxisAlignment, FontName, Guide, LayoutAlign, LayoutGrid, LayoutGrow,
    LetterSpacing, LineHeight, MainAxisAlignment, SizingMode, StrokeAlign, StrokeCap, StrokeJoin,
    TextAlign, TextAlignVertical, TextAutoResize, TextCase, TextDecoration,
};

// ───────────────────────────────────────────────────────────────────
// Bundles
// ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Blend {
    pub opacity: f64,
    pub blend_mode: BlendMode,
    pub is_mask: bool,
    pub effects: Vec<Effect>,
    pub effect_style_id: Option<String>,
    pub visible: bool,
}

impl Default for Blend {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            blend_mode: BlendMode::PassThrough,
            is_mask: false,
            effects: Vec::new(),
            effect_style_id: None,
            visible: true,
        }
    }
}

/// Fills and strokes. `fills` is `None` when the source reported a mixed
/// value that cannot be recovered.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Geometry {
    pub fills: Option<Vec<Paint>>,
    pub strokes: Vec<Paint>,
    pub stroke_weight: f64,
    pub stroke_miter_limit: f64,
    pub stroke_align: StrokeAlign,
    pub stroke_cap: Option<StrokeCap>,
    pub stroke_join: Option<StrokeJoin>,
    pub dash_pattern: Vec<f64>,
    pub fill_style_id: Option<String>,
    pub stroke_style_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Corner {
    pub corner_radius: Option<CornerRadius>,
    pub corner_smoothing: Option<f64>,
}

/// Position and size relative to the parent, plus auto-layout child behavior.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Layout {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// In degrees.
    pub rotation: f64,
    pub layout_align: LayoutAlign,
    pub layout_grow: LayoutGrow,
}

/// Container layout. Fields marked "axis-driven" only carry a value while
/// `layout_mode` is set.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameLayout {
    pub layout_mode: Option<Axis>,
    /// Axis-driven.
    pub primary_axis_sizing_mode: Option<SizingMode>,
    /// Axis-driven.
    pub counter_axis_sizing_mode: Option<SizingMode>,
    /// Axis-driven.
    pub main_axis_alignment: Option<MainAxisAlignment>,
    /// Axis-driven.
    pub cross_axis_alignment: Option<CrossAxisAlignment>,
    /// Axis-driven.
    pub item_spacing: Option<f64>,
    pub padding: EdgeInsets,
    pub layout_grids: Vec<LayoutGrid>,
    pub grid_style_id: Option<String>,
    pub clips_content: bool,
    pub guides: Vec<Guide>,
    /// Set when the layout was inferred from child geometry rather than
    /// declared by the source.
    pub layout_inferred: bool,
}

impl FrameLayout {
    pub fn is_auto_layout(&self) -> bool {
        self.layout_mode.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Typography {
    pub text_align_horizontal: TextAlign,
    pub text_align_vertical: TextAlignVertical,
    pub paragraph_indent: f64,
    pub paragraph_spacing: f64,
    pub font_size: Option<f64>,
    pub font_name: Option<FontName>,
    pub text_case: Option<TextCase>,
    pub text_decoration: Option<TextDecoration>,
    pub text_style_id: Option<String>,
    pub letter_spacing: Option<LetterSpacing>,
    pub line_height: Option<LineHeight>,
    pub text_auto_resize: TextAutoResize,
    pub characters: String,
}

// ───────────────────────────────────────────────────────────────────
// Capability traits
// ───────────────────────────────────────────────────────────────────

pub trait BlendMixin {
    fn blend(&self) -> &Blend;
    fn blend_mut(&mut self) -> &mut Blend;
}

pub trait GeometryMixin {
    fn geometry(&self) -> &Geometry;
    fn geometry_mut(&mut self) -> &mut Geometry;
}

pub trait CornerMixin {
    fn corner(&self) -> &Corner;
    fn corner_mut(&mut self) -> &mut Corner;
}

pub trait LayoutMixin {
    fn layout(&self) -> &Layout;
    fn layout_mut(&mut self) -> &mut Layout;
}

pub trait ConstraintMixin {
    fn constraints(&self) -> &Option<Constraints>;
    fn constraints_mut(&mut self) -> &mut Option<Constraints>;
}

pub trait FrameLayoutMixin {
    fn frame_layout(&self) -> &FrameLayout;
    fn frame_layout_mut(&mut self) -> &mut FrameLayout;
}

pub trait TextMixin {
    fn typography(&self) -> &Typography;
    fn typography_mut(&mut self) -> &mut Typography;
}

pub trait ChildrenMixin {
    fn children(&self) -> &[Node];
    fn children_mut(&mut self) -> &mut Vec<Node>;
}

/// Blend + geometry + layout: what every drawable shape carries.
pub trait DefaultShapeMixin: BlendMixin + GeometryMixin + LayoutMixin {}

impl<T: BlendMixin + GeometryMixin + LayoutMixin> DefaultShapeMixin for T {}

/// Implements a capability trait for each listed variant by borrowing one of
/// its fields.
macro_rules! impl_mixin {
    ($mixin:ident { $get:ident, $get_mut:ident } => $field:ident: $ty:ty; $($node:ty),+ $(,)?) => {
        $(
            impl $crate::mixins::$mixin for $node {
                #[inline]
                fn $get(&self) -> &$ty {
                    &self.$field
                }

                #[inline]
                fn $get_mut(&mut self) -> &mut $ty {
                    &mut self.$field
                }
            }
        )+
    };
}

pub(crate) use impl_mixin;
