//! Capability copiers.
//!
//! One function per capability, written against the capability trait so any
//! variant that carries the bundle can be filled. Copiers are total over
//! optional fields and idempotent: applying one twice yields the same state.

use prism_core::geometry::EdgeInsets;
use prism_core::{
    BlendMixin, ConstraintMixin, CornerMixin, DefaultShapeMixin, FrameLayoutMixin, GeometryMixin,
    LayoutMixin, TextMixin,
};

use crate::converters;
use crate::source::{SourceBlend, SourceCorner, SourceFrame, SourceGeometry, SourceLayout, SourceNode, SourceText};

pub fn copy_blend<T: BlendMixin>(target: &mut T, source: &SourceBlend) {
    let blend = target.blend_mut();
    blend.opacity = source.opacity.unwrap_or(1.0);
    blend.blend_mode = source
        .blend_mode
        .map(converters::blend_mode)
        .unwrap_or_default();
    blend.is_mask = source.is_mask.unwrap_or(false);
    blend.effects = source.effects.clone();
    blend.effect_style_id = source.effect_style_id.clone();
    blend.visible = source.visible.unwrap_or(true);
}

pub fn copy_geometry<T: GeometryMixin>(target: &mut T, source: &SourceGeometry) {
    let geometry = target.geometry_mut();
    geometry.fills = converters::unmix("fills", source.fills.as_ref());
    geometry.strokes = source.strokes.clone();
    geometry.stroke_weight = source.stroke_weight.unwrap_or(0.0);
    geometry.stroke_miter_limit = source.stroke_miter_limit.unwrap_or(0.0);
    geometry.stroke_align = source.stroke_align.unwrap_or_default();
    geometry.stroke_cap = converters::unmix("strokeCap", source.stroke_cap.as_ref());
    geometry.stroke_join = converters::unmix("strokeJoin", source.stroke_join.as_ref());
    geometry.dash_pattern = source.dash_pattern.clone();
    geometry.fill_style_id = converters::unmix("fillStyleId", source.fill_style_id.as_ref());
    geometry.stroke_style_id = source.stroke_style_id.clone();
}

pub fn copy_layout<T: LayoutMixin>(target: &mut T, source: &SourceLayout) {
    let layout = target.layout_mut();
    layout.x = source.x.unwrap_or(0.0);
    layout.y = source.y.unwrap_or(0.0);
    layout.width = source.width.unwrap_or(0.0);
    layout.height = source.height.unwrap_or(0.0);
    layout.rotation = source.rotation.unwrap_or(0.0);
    layout.layout_align = source.layout_align.unwrap_or_default();
    layout.layout_grow = converters::layout_grow(source.layout_grow);
}

/// Blend, then geometry, then layout.
pub fn copy_default_shape<T: DefaultShapeMixin>(target: &mut T, source: &SourceNode) {
    copy_blend(target, &source.blend);
    copy_geometry(target, &source.geometry);
    copy_layout(target, &source.layout);
}

pub fn copy_corner<T: CornerMixin>(target: &mut T, source: &SourceCorner) {
    let corner = target.corner_mut();
    corner.corner_radius = converters::corner_radius(source);
    corner.corner_smoothing = source.corner_smoothing;
}

pub fn copy_constraint<T: ConstraintMixin>(target: &mut T, source: &SourceNode) {
    *target.constraints_mut() = source.constraints;
}

/// Axis-driven fields are only filled while the source declares a layout
/// mode; padding always defaults each edge to 0.
pub fn copy_frame<T: FrameLayoutMixin>(target: &mut T, source: &SourceFrame) {
    let frame = target.frame_layout_mut();
    frame.layout_mode = converters::layout_mode(source.layout_mode);

    if frame.layout_mode.is_some() {
        frame.primary_axis_sizing_mode = source.primary_axis_sizing_mode;
        frame.counter_axis_sizing_mode = source.counter_axis_sizing_mode;
        frame.main_axis_alignment = source
            .primary_axis_align_items
            .and_then(converters::main_axis_alignment);
        frame.cross_axis_alignment = source
            .counter_axis_align_items
            .and_then(converters::cross_axis_alignment);
        frame.item_spacing = source.item_spacing;
    } else {
        frame.primary_axis_sizing_mode = None;
        frame.counter_axis_sizing_mode = None;
        frame.main_axis_alignment = None;
        frame.cross_axis_alignment = None;
        frame.item_spacing = None;
    }

    frame.padding = EdgeInsets::new(
        source.padding_top.unwrap_or(0.0),
        source.padding_right.unwrap_or(0.0),
        source.padding_bottom.unwrap_or(0.0),
        source.padding_left.unwrap_or(0.0),
    );
    frame.layout_grids = source.layout_grids.clone();
    frame.grid_style_id = source.grid_style_id.clone();
    frame.clips_content = source.clips_content.unwrap_or(false);
    frame.guides = source.guides.clone();
    frame.layout_inferred = false;
}

pub fn copy_text<T: TextMixin>(target: &mut T, source: &SourceText) {
    let text = target.typography_mut();
    text.text_align_horizontal = source
        .text_align_horizontal
        .map(converters::text_align)
        .unwrap_or_default();
    text.text_align_vertical = source
        .text_align_vertical
        .map(converters::text_align_vertical)
        .unwrap_or_default();
    text.paragraph_indent = source.paragraph_indent.unwrap_or(0.0);
    text.paragraph_spacing = source.paragraph_spacing.unwrap_or(0.0);
    text.font_size = converters::unmix("fontSize", source.font_size.as_ref());
    text.font_name = converters::unmix("fontName", source.font_name.as_ref());
    text.text_case = converters::unmix("textCase", source.text_case.as_ref());
    text.text_decoration = converters::unmix("textDecoration", source.text_decoration.as_ref());
    text.text_style_id = converters::unmix("textStyleId", source.text_style_id.as_ref());
    text.letter_spacing = converters::unmix("letterSpacing", source.letter_spacing.as_ref());
    text.line_height = converters::unmix("lineHeight", source.line_height.as_ref());
    text.text_auto_resize = source.text_auto_resize.unwrap_or_default();
    text.characters = source.characters.clone().unwrap_or_default();
}
