//! Auto-layout inference.
//!
//! A frame without a declared layout mode whose children sit in a clean row
//! or column (ordered along the axis, evenly spaced, sharing an edge or
//! center on the cross axis) is given the equivalent auto-layout fields.
//! Children are never moved, reordered or removed.

use prism_core::style::{Axis, CrossAxisAlignment, MainAxisAlignment, SizingMode};
use prism_core::{Aabb, Node, NodeKind};

/// Layout fields derived from child geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InferredLayout {
    pub axis: Axis,
    pub item_spacing: f64,
    pub main_axis_alignment: MainAxisAlignment,
    pub cross_axis_alignment: CrossAxisAlignment,
}

/// Projection of a box onto one axis.
#[derive(Clone, Copy)]
struct Span {
    start: f64,
    end: f64,
}

impl Span {
    fn center(&self) -> f64 {
        (self.start + self.end) * 0.5
    }
}

fn main_span(b: &Aabb, axis: Axis) -> Span {
    match axis {
        Axis::Horizontal => Span { start: b.min_x, end: b.max_x },
        Axis::Vertical => Span { start: b.min_y, end: b.max_y },
    }
}

fn cross_span(b: &Aabb, axis: Axis) -> Span {
    match axis {
        Axis::Horizontal => Span { start: b.min_y, end: b.max_y },
        Axis::Vertical => Span { start: b.min_x, end: b.max_x },
    }
}

fn all_close(values: impl Iterator<Item = f64>, tolerance: f64) -> bool {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    max - min <= tolerance
}

/// Try to read `children` as a row (`Horizontal`) or column (`Vertical`)
/// inside `container`.
pub fn detect(container: &Aabb, children: &[Aabb], axis: Axis, tolerance: f64) -> Option<InferredLayout> {
    if children.len() < 2 {
        return None;
    }

    let spans: Vec<Span> = children.iter().map(|b| main_span(b, axis)).collect();
    let gaps: Vec<f64> = spans.windows(2).map(|w| w[1].start - w[0].end).collect();
    if gaps.iter().any(|gap| *gap < -tolerance) {
        return None;
    }
    if !all_close(gaps.iter().copied(), tolerance) {
        return None;
    }
    let item_spacing = (gaps.iter().sum::<f64>() / gaps.len() as f64).max(0.0);

    let cross: Vec<Span> = children.iter().map(|b| cross_span(b, axis)).collect();
    let cross_axis_alignment = if all_close(cross.iter().map(|s| s.start), tolerance) {
        CrossAxisAlignment::Start
    } else if all_close(cross.iter().map(Span::center), tolerance) {
        CrossAxisAlignment::Center
    } else if all_close(cross.iter().map(|s| s.end), tolerance) {
        CrossAxisAlignment::End
    } else {
        return None;
    };

    let outer = main_span(container, axis);
    let leading = spans[0].start - outer.start;
    let trailing = outer.end - spans[spans.len() - 1].end;
    let main_axis_alignment = if (leading - trailing).abs() <= tolerance && leading > tolerance {
        MainAxisAlignment::Center
    } else if leading <= trailing {
        MainAxisAlignment::Start
    } else {
        MainAxisAlignment::End
    };

    Some(InferredLayout {
        axis,
        item_spacing,
        main_axis_alignment,
        cross_axis_alignment,
    })
}

/// Infer auto-layout for a frame that declares none. Rows are tried before
/// columns. Anything that is not a frame, already has a layout mode, or has
/// fewer than two children is returned unchanged.
pub fn infer_auto_layout(mut node: Node, tolerance: f64) -> Node {
    let container = node.bounds();
    let children: Vec<Aabb> = node.children().iter().map(Node::bounds).collect();
    let name = node.to_string();

    let NodeKind::Frame(frame) = &mut node.kind else {
        return node;
    };
    if frame.frame.layout_mode.is_some() || children.len() < 2 {
        return node;
    }

    let Some(inferred) = [Axis::Horizontal, Axis::Vertical]
        .into_iter()
        .find_map(|axis| detect(&container, &children, axis, tolerance))
    else {
        log::debug!("no auto-layout pattern in {name}");
        return node;
    };

    log::debug!(
        "inferred {:?} auto-layout for {name} (spacing {})",
        inferred.axis,
        inferred.item_spacing
    );

    let layout = &mut frame.frame;
    layout.layout_mode = Some(inferred.axis);
    layout.item_spacing = Some(inferred.item_spacing);
    layout.main_axis_alignment = Some(inferred.main_axis_alignment);
    layout.cross_axis_alignment = Some(inferred.cross_axis_alignment);
    layout.primary_axis_sizing_mode = Some(SizingMode::Fixed);
    layout.counter_axis_sizing_mode = Some(SizingMode::Fixed);
    layout.layout_inferred = true;
    node
}
