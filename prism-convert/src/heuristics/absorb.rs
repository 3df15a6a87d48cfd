//! Rectangle-background absorption.
//!
//! Designers often draw a container's background as a plain rectangle at the
//! bottom of the stack. When that rectangle spans the whole container it is
//! folded into the container's own fills and removed from `children`.

use prism_core::{
    BlendMixin, FrameNode, Geometry, Node, NodeKind, NodeType, Paint, RectangleNode,
};

/// Index of the child that would be absorbed, if any.
///
/// Only the bottom-most child (index 0) is considered, and only when at
/// least one other child remains after absorption.
pub fn background_candidate(node: &Node, tolerance: f64) -> Option<usize> {
    if !matches!(node.kind, NodeKind::Group(_) | NodeKind::Frame(_)) {
        return None;
    }
    let children = node.children();
    if children.len() < 2 {
        return None;
    }

    let first = &children[0];
    let NodeKind::Rectangle(rect) = &first.kind else {
        return None;
    };
    if first.origin == NodeType::Vector {
        // placeholder, not a drawn rectangle
        return None;
    }

    let blend = first.blend();
    if blend.is_mask || !blend.effects.is_empty() || (blend.opacity - 1.0).abs() > f64::EPSILON {
        return None;
    }
    if rect.geometry.strokes.iter().any(Paint::is_visible) {
        return None;
    }
    if rect.layout.rotation.abs() > f64::EPSILON {
        return None;
    }

    first.bounds().covers(&node.bounds(), tolerance).then_some(0)
}

/// Absorb a background rectangle into `node`.
///
/// A frame keeps its type and gains the rectangle's fills (appended after
/// its own), corner radius and fill style. A group has no geometry, so it is
/// promoted to a frame first. No-op when there is no candidate.
///
/// `children_count` keeps the source count.
pub fn absorb_background(mut node: Node, tolerance: f64) -> Node {
    let Some(index) = background_candidate(&node, tolerance) else {
        return node;
    };
    let Some(children) = node.children_mut() else {
        return node;
    };
    let background = children.remove(index);
    let NodeKind::Rectangle(rect) = background.kind else {
        return node;
    };

    log::debug!(
        "absorbing background \"{}\" into {} ({})",
        background.name,
        node,
        node.node_type()
    );

    if let NodeKind::Frame(frame) = &mut node.kind {
        paint_background(frame, rect);
        return node;
    }

    let kind = std::mem::replace(&mut node.kind, NodeKind::Group(Default::default()));
    match kind {
        NodeKind::Group(group) => {
            let mut frame = FrameNode {
                blend: group.blend,
                layout: group.layout,
                children: group.children,
                ..FrameNode::default()
            };
            paint_background(&mut frame, rect);
            node.with_kind(NodeKind::Frame(frame))
        }
        other => {
            node.kind = other;
            node
        }
    }
}

fn paint_background(frame: &mut FrameNode, rect: RectangleNode) {
    let Geometry { fills, fill_style_id, .. } = rect.geometry;

    let mut merged = frame.geometry.fills.take().unwrap_or_default();
    merged.extend(fills.unwrap_or_default());
    frame.geometry.fills = Some(merged);

    if frame.geometry.fill_style_id.is_none() {
        frame.geometry.fill_style_id = fill_style_id;
    }
    if rect.corner.corner_radius.is_some() {
        frame.corner.corner_radius = rect.corner.corner_radius;
    }
    if rect.corner.corner_smoothing.is_some() {
        frame.corner.corner_smoothing = rect.corner.corner_smoothing;
    }
}
