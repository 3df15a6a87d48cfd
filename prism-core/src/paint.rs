//! Paints, effects and blend modes.
//!
//! Field names follow the design tool's export format (camelCase, uppercase
//! enum tags) so fills and effects can be copied verbatim from a snapshot.

use serde::{Deserialize, Serialize};

use crate::geometry::{Transform, Vector};

fn one() -> f64 {
    1.0
}

fn yes() -> bool {
    true
}

/// RGBA color, each channel in `0.0..=1.0`. Alpha defaults to opaque because
/// solid paints export plain RGB.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "one")]
    pub a: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

// ───────────────────────────────────────────────────────────────────
// Blend mode
// ───────────────────────────────────────────────────────────────────

/// Normalized blend mode. `PassThrough` is the sentinel for "no explicit
/// mode"; unrecognized values deserialize to it as well.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlendMode {
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
    #[default]
    #[serde(other)]
    PassThrough,
}

// ───────────────────────────────────────────────────────────────────
// Paint
// ───────────────────────────────────────────────────────────────────

/// Fill or stroke paint, tagged by `type`. Paint kinds without a model here
/// (video, emoji, ...) deserialize to `Unknown` and never render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Paint {
    Solid(SolidPaint),
    GradientLinear(GradientPaint),
    GradientRadial(GradientPaint),
    GradientAngular(GradientPaint),
    GradientDiamond(GradientPaint),
    Image(ImagePaint),
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolidPaint {
    pub color: Color,
    #[serde(default = "one")]
    pub opacity: f64,
    #[serde(default = "yes")]
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<BlendMode>,
}

impl SolidPaint {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            opacity: 1.0,
            visible: true,
            blend_mode: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub position: f64,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientPaint {
    #[serde(default)]
    pub gradient_stops: Vec<ColorStop>,
    #[serde(default)]
    pub gradient_transform: Transform,
    #[serde(default = "one")]
    pub opacity: f64,
    #[serde(default = "yes")]
    pub visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScaleMode {
    Fit,
    Crop,
    Tile,
    #[default]
    #[serde(other)]
    Fill,
}

/// Image fill. Only the reference is kept; decoding is someone else's job.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePaint {
    #[serde(default)]
    pub image_hash: Option<String>,
    #[serde(default)]
    pub scale_mode: ScaleMode,
    #[serde(default = "one")]
    pub opacity: f64,
    #[serde(default = "yes")]
    pub visible: bool,
}

impl Paint {
    pub fn is_visible(&self) -> bool {
        match self {
            Paint::Solid(p) => p.visible,
            Paint::GradientLinear(p)
            | Paint::GradientRadial(p)
            | Paint::GradientAngular(p)
            | Paint::GradientDiamond(p) => p.visible,
            Paint::Image(p) => p.visible,
            Paint::Unknown => false,
        }
    }

    pub fn opacity(&self) -> f64 {
        match self {
            Paint::Solid(p) => p.opacity,
            Paint::GradientLinear(p)
            | Paint::GradientRadial(p)
            | Paint::GradientAngular(p)
            | Paint::GradientDiamond(p) => p.opacity,
            Paint::Image(p) => p.opacity,
            Paint::Unknown => 0.0,
        }
    }

    pub fn as_image(&self) -> Option<&ImagePaint> {
        match self {
            Paint::Image(image) => Some(image),
            _ => None,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Paint::Image(_))
    }

    /// Solid color with the paint opacity folded into alpha.
    pub fn solid_color(&self) -> Option<Color> {
        match self {
            Paint::Solid(p) => Some(p.color.with_alpha(p.color.a * p.opacity)),
            _ => None,
        }
    }
}

// ───────────────────────────────────────────────────────────────────
// Effects
// ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectType {
    DropShadow,
    InnerShadow,
    LayerBlur,
    BackgroundBlur,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Effect {
    #[serde(rename = "type")]
    pub effect_type: EffectType,
    #[serde(default = "yes")]
    pub visible: bool,
    #[serde(default)]
    pub radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<Vector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spread: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<BlendMode>,
}

impl Effect {
    pub fn is_shadow(&self) -> bool {
        matches!(self.effect_type, EffectType::DropShadow | EffectType::InnerShadow)
    }
}

/// Shadow derived from a visible drop/inner shadow effect.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxShadow {
    pub color: Color,
    pub offset: Vector,
    pub blur_radius: f64,
    pub spread_radius: f64,
    pub inset: bool,
}

impl BoxShadow {
    /// `None` for hidden effects and non-shadow effects.
    pub fn from_effect(effect: &Effect) -> Option<Self> {
        if !effect.visible || !effect.is_shadow() {
            return None;
        }
        Some(Self {
            color: effect.color.unwrap_or_default(),
            offset: effect.offset.unwrap_or_default(),
            blur_radius: effect.radius,
            spread_radius: effect.spread.unwrap_or(0.0),
            inset: effect.effect_type == EffectType::InnerShadow,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_deserializes_by_tag() {
        let paint: Paint = serde_json::from_str(
            r#"{"type":"SOLID","color":{"r":1.0,"g":0.0,"b":0.0},"opacity":0.5}"#,
        )
        .unwrap();
        assert!(paint.is_visible());
        assert_eq!(paint.solid_color(), Some(Color::rgb(1.0, 0.0, 0.0).with_alpha(0.5)));

        let image: Paint =
            serde_json::from_str(r#"{"type":"IMAGE","imageHash":"abc","visible":false}"#).unwrap();
        assert!(image.is_image());
        assert!(!image.is_visible());
        assert_eq!(image.as_image().and_then(|i| i.image_hash.as_deref()), Some("abc"));
    }

    #[test]
    fn test_unsupported_paint_kind_is_inert() {
        let paints: Vec<Paint> = serde_json::from_str(
            r#"[{"type":"VIDEO","videoHash":"v"},{"type":"EMOJI"},{"type":"SOLID","color":{"r":0,"g":0,"b":1}}]"#,
        )
        .unwrap();
        assert_eq!(paints[0], Paint::Unknown);
        assert_eq!(paints[1], Paint::Unknown);
        assert!(!paints[0].is_visible());
        assert!(!paints[0].is_image());
        assert!(paints[0].solid_color().is_none());
        assert!(paints[2].is_visible());
    }

    #[test]
    fn test_unknown_blend_mode_falls_back_to_pass_through() {
        let mode: BlendMode = serde_json::from_str(r#""PLUS_DARKER""#).unwrap();
        assert_eq!(mode, BlendMode::PassThrough);
        let mode: BlendMode = serde_json::from_str(r#""MULTIPLY""#).unwrap();
        assert_eq!(mode, BlendMode::Multiply);
    }

    #[test]
    fn test_box_shadow_only_from_visible_shadows() {
        let blur = Effect {
            effect_type: EffectType::LayerBlur,
            visible: true,
            radius: 4.0,
            color: None,
            offset: None,
            spread: None,
            blend_mode: None,
        };
        assert!(BoxShadow::from_effect(&blur).is_none());

        let hidden = Effect { effect_type: EffectType::DropShadow, visible: false, ..blur.clone() };
        assert!(BoxShadow::from_effect(&hidden).is_none());

        let inner = Effect {
            effect_type: EffectType::InnerShadow,
            spread: Some(2.0),
            offset: Some(Vector { x: 1.0, y: 3.0 }),
            ..blur
        };
        let shadow = BoxShadow::from_effect(&inner).unwrap();
        assert!(shadow.inset);
        assert_eq!(shadow.spread_radius, 2.0);
        assert_eq!(shadow.offset.y, 3.0);
    }
}
