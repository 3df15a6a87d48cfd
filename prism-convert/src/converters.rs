//! Enum and value mappings from source spelling to normalized values.
//!
//! Every mapping is total: unknown source values resolve to a documented
//! fallback and are logged.

use prism_core::paint::BlendMode;
use prism_core::style::{Axis, CrossAxisAlignment, LayoutGrow, MainAxisAlignment, TextAlign, TextAlignVertical};
use prism_core::{CornerRadii, CornerRadius};

use crate::source::{
    Mixable, SourceBlendMode, SourceCorner, SourceCounterAlign, SourceLayoutMode,
    SourcePrimaryAlign, SourceTextAlign, SourceTextAlignVertical,
};

/// Unknown modes fall back to `PassThrough`.
pub fn blend_mode(mode: SourceBlendMode) -> BlendMode {
    match mode {
        SourceBlendMode::PassThrough => BlendMode::PassThrough,
        SourceBlendMode::Normal => BlendMode::Normal,
        SourceBlendMode::Darken => BlendMode::Darken,
        SourceBlendMode::Multiply => BlendMode::Multiply,
        SourceBlendMode::LinearBurn => BlendMode::LinearBurn,
        SourceBlendMode::ColorBurn => BlendMode::ColorBurn,
        SourceBlendMode::Lighten => BlendMode::Lighten,
        SourceBlendMode::Screen => BlendMode::Screen,
        SourceBlendMode::LinearDodge => BlendMode::LinearDodge,
        SourceBlendMode::ColorDodge => BlendMode::ColorDodge,
        SourceBlendMode::Overlay => BlendMode::Overlay,
        SourceBlendMode::SoftLight => BlendMode::SoftLight,
        SourceBlendMode::HardLight => BlendMode::HardLight,
        SourceBlendMode::Difference => BlendMode::Difference,
        SourceBlendMode::Exclusion => BlendMode::Exclusion,
        SourceBlendMode::Hue => BlendMode::Hue,
        SourceBlendMode::Saturation => BlendMode::Saturation,
        SourceBlendMode::Color => BlendMode::Color,
        SourceBlendMode::Luminosity => BlendMode::Luminosity,
        SourceBlendMode::Unknown => {
            log::warn!("unsupported blend mode, using PASS_THROUGH");
            BlendMode::PassThrough
        }
    }
}

/// `NONE` (or no mode at all) means the frame does not use auto-layout.
pub fn layout_mode(mode: Option<SourceLayoutMode>) -> Option<Axis> {
    match mode? {
        SourceLayoutMode::None => None,
        SourceLayoutMode::Horizontal => Some(Axis::Horizontal),
        SourceLayoutMode::Vertical => Some(Axis::Vertical),
        SourceLayoutMode::Unknown => {
            log::warn!("unsupported layout mode, treating frame as fixed");
            None
        }
    }
}

pub fn main_axis_alignment(align: SourcePrimaryAlign) -> Option<MainAxisAlignment> {
    match align {
        SourcePrimaryAlign::Min => Some(MainAxisAlignment::Start),
        SourcePrimaryAlign::Center => Some(MainAxisAlignment::Center),
        SourcePrimaryAlign::Max => Some(MainAxisAlignment::End),
        SourcePrimaryAlign::SpaceBetween => Some(MainAxisAlignment::SpaceBetween),
        SourcePrimaryAlign::Unknown => {
            log::warn!("unsupported primary axis alignment, leaving unset");
            None
        }
    }
}

pub fn cross_axis_alignment(align: SourceCounterAlign) -> Option<CrossAxisAlignment> {
    match align {
        SourceCounterAlign::Min => Some(CrossAxisAlignment::Start),
        SourceCounterAlign::Center => Some(CrossAxisAlignment::Center),
        SourceCounterAlign::Max => Some(CrossAxisAlignment::End),
        SourceCounterAlign::Baseline => Some(CrossAxisAlignment::Baseline),
        SourceCounterAlign::Unknown => {
            log::warn!("unsupported counter axis alignment, leaving unset");
            None
        }
    }
}

pub fn text_align(align: SourceTextAlign) -> TextAlign {
    match align {
        SourceTextAlign::Left => TextAlign::Left,
        SourceTextAlign::Center => TextAlign::Center,
        SourceTextAlign::Right => TextAlign::Right,
        SourceTextAlign::Justified => TextAlign::Justify,
        SourceTextAlign::Unknown => {
            log::warn!("unsupported horizontal text alignment, using left");
            TextAlign::Left
        }
    }
}

pub fn text_align_vertical(align: SourceTextAlignVertical) -> TextAlignVertical {
    match align {
        SourceTextAlignVertical::Top => TextAlignVertical::Top,
        SourceTextAlignVertical::Center => TextAlignVertical::Center,
        SourceTextAlignVertical::Bottom => TextAlignVertical::Bottom,
        SourceTextAlignVertical::Unknown => {
            log::warn!("unsupported vertical text alignment, using top");
            TextAlignVertical::Top
        }
    }
}

/// 0 (or absent) is fixed, 1 is stretch. Anything else is an upstream value
/// this engine does not know; it is reported and treated as fixed.
pub fn layout_grow(grow: Option<f64>) -> LayoutGrow {
    match grow {
        None => LayoutGrow::Fixed,
        Some(v) if v == 0.0 => LayoutGrow::Fixed,
        Some(v) if v == 1.0 => LayoutGrow::Stretch,
        Some(v) => {
            log::error!("layout grow value {v} not supported, using fixed");
            LayoutGrow::Fixed
        }
    }
}

/// Drop the mixed marker. The marker carries no recoverable data for
/// `field`, so it becomes `None`.
pub fn unmix<T: Clone>(field: &str, value: Option<&Mixable<T>>) -> Option<T> {
    match value? {
        Mixable::Value(v) => Some(v.clone()),
        Mixable::Mixed => {
            log::warn!("{field} is mixed and cannot be recovered, leaving unset");
            None
        }
    }
}

/// Resolve the corner radius from the scalar and the per-corner fields.
///
/// A mixed scalar is recoverable through the per-corner values and yields
/// [`CornerRadius::Mixed`]; a missing scalar falls back to the per-corner
/// values alone.
pub fn corner_radius(corner: &SourceCorner) -> Option<CornerRadius> {
    let per_corner = [
        corner.top_left_radius,
        corner.top_right_radius,
        corner.bottom_right_radius,
        corner.bottom_left_radius,
    ];
    let radii = per_corner.iter().any(Option::is_some).then(|| CornerRadii {
        top_left: corner.top_left_radius.unwrap_or(0.0),
        top_right: corner.top_right_radius.unwrap_or(0.0),
        bottom_right: corner.bottom_right_radius.unwrap_or(0.0),
        bottom_left: corner.bottom_left_radius.unwrap_or(0.0),
    });

    match &corner.corner_radius {
        Some(Mixable::Value(r)) => Some(CornerRadius::Uniform(*r)),
        Some(Mixable::Mixed) => match radii {
            Some(radii) => Some(CornerRadius::Mixed(radii)),
            None => {
                log::warn!("corner radius is mixed without per-corner values, leaving unset");
                None
            }
        },
        None => radii.map(CornerRadius::from_radii),
    }
}
