//! Background absorption and auto-layout inference, end to end.

mod common;

use common::{at, container, rect, run, run_with, solid, text, tree};
use prism_convert::ConvertConfig;
use prism_core::style::{Axis, CrossAxisAlignment, MainAxisAlignment, SizingMode};
use prism_core::{CornerRadius, NodeType, Paint};
use serde_json::json;

fn fill_reds(fills: &[Paint]) -> Vec<f64> {
    fills.iter().filter_map(Paint::solid_color).map(|c| c.r).collect()
}

// ───────────────────────────────────────────────────────────────────
// Rectangle-background absorption
// ───────────────────────────────────────────────────────────────────

#[test]
fn test_frame_absorbs_spanning_rectangle() {
    let mut bg = rect("bg", 0.0, 0.0, 200.0, 100.0);
    bg["cornerRadius"] = json!(8);
    bg["fillStyleId"] = json!("S:surface");

    let mut frame = container(
        "FRAME",
        "card",
        200.0,
        100.0,
        vec![bg, text("title", 16.0, 16.0, 100.0, 20.0), text("body", 16.0, 50.0, 100.0, 20.0)],
    );
    frame["fills"] = json!([solid(0.5, 0.5, 0.5)]);

    let output = run(&tree(frame));
    let card = &output.nodes[0];

    assert_eq!(card.node_type(), NodeType::Frame);
    assert!(card.find("bg").is_none());
    assert_eq!(card.children().len(), 2);
    // own fills first, background after
    assert_eq!(fill_reds(card.fills()), [0.5, 1.0]);
    assert_eq!(card.corner().and_then(|c| c.corner_radius), Some(CornerRadius::Uniform(8.0)));
    assert_eq!(
        card.geometry().and_then(|g| g.fill_style_id.as_deref()),
        Some("S:surface")
    );
}

#[test]
fn test_children_count_not_updated_by_absorption() {
    let frame = container(
        "FRAME",
        "card",
        200.0,
        100.0,
        vec![rect("bg", 0.0, 0.0, 200.0, 100.0), text("a", 0.0, 0.0, 10.0, 10.0)],
    );
    let output = run(&tree(frame));
    let card = &output.nodes[0];

    assert_eq!(card.children().len(), 1);
    assert_eq!(card.children_count, 2);
}

#[test]
fn test_group_with_background_is_promoted_to_frame() {
    let group = container(
        "GROUP",
        "badge",
        80.0,
        24.0,
        vec![rect("pill", 0.5, 0.0, 79.5, 24.0), text("label", 8.0, 4.0, 40.0, 16.0), text("count", 52.0, 4.0, 20.0, 16.0)],
    );
    let output = run(&tree(group));
    let badge = &output.nodes[0];

    assert_eq!(badge.node_type(), NodeType::Frame);
    assert_eq!(badge.origin, NodeType::Group);
    assert_eq!(badge.id, "badge");
    assert_eq!(badge.children().len(), 2);
    assert!(badge.has_visible_fills());
    for child in badge.children() {
        let parent = child.parent.as_ref().unwrap();
        assert_eq!(parent.id, "badge");
        assert_eq!(parent.node_type, NodeType::Frame);
    }
    // groups only absorb; layout is never inferred for them
    assert_eq!(badge.frame_layout().unwrap().layout_mode, None);
}

#[test]
fn test_rectangle_that_does_not_qualify_stays() {
    let smaller = rect("inset", 10.0, 10.0, 180.0, 80.0);

    let mut translucent = rect("veil", 0.0, 0.0, 200.0, 100.0);
    translucent["opacity"] = json!(0.5);

    let mut shadowed = rect("raised", 0.0, 0.0, 200.0, 100.0);
    shadowed["effects"] = json!([{ "type": "DROP_SHADOW", "radius": 4, "color": { "r": 0, "g": 0, "b": 0, "a": 0.2 } }]);

    let mut stroked = rect("outlined", 0.0, 0.0, 200.0, 100.0);
    stroked["strokes"] = json!([solid(0.0, 0.0, 0.0)]);

    let mut masked = rect("mask", 0.0, 0.0, 200.0, 100.0);
    masked["isMask"] = json!(true);

    let mut icon = common::shape("VECTOR", "icon", 0.0, 0.0, 200.0, 100.0);
    icon["fills"] = json!([solid(0.0, 1.0, 0.0)]);

    for candidate in [smaller, translucent, shadowed, stroked, masked, icon] {
        let name = candidate["name"].as_str().unwrap().to_string();
        let frame = container("FRAME", "card", 200.0, 100.0, vec![candidate, text("t", 20.0, 20.0, 10.0, 10.0)]);
        let output = run(&tree(frame));
        assert!(output.nodes[0].find(&name).is_some(), "{name} should not be absorbed");
    }
}

#[test]
fn test_lone_background_is_kept() {
    let frame = container("FRAME", "swatch", 50.0, 50.0, vec![rect("fill", 0.0, 0.0, 50.0, 50.0)]);
    let output = run(&tree(frame));
    assert_eq!(output.nodes[0].children().len(), 1);
}

#[test]
fn test_absorption_can_be_disabled() {
    let frame = container(
        "FRAME",
        "card",
        200.0,
        100.0,
        vec![rect("bg", 0.0, 0.0, 200.0, 100.0), text("a", 0.0, 0.0, 10.0, 10.0)],
    );
    let config = ConvertConfig { absorb_backgrounds: false, ..ConvertConfig::default() };
    let output = run_with(&tree(frame), config);
    assert!(output.nodes[0].find("bg").is_some());
}

// ───────────────────────────────────────────────────────────────────
// Auto-layout inference
// ───────────────────────────────────────────────────────────────────

#[test]
fn test_row_inferred_for_frame_without_layout_mode() {
    let mut frame = container(
        "FRAME",
        "toolbar",
        300.0,
        40.0,
        vec![
            text("a", 0.0, 10.0, 80.0, 20.0),
            text("b", 100.0, 10.0, 80.0, 20.0),
            text("c", 200.0, 10.0, 80.0, 20.0),
        ],
    );
    frame["layoutMode"] = json!("NONE");

    let output = run(&tree(frame));
    let toolbar = &output.nodes[0];
    let layout = toolbar.frame_layout().unwrap();

    assert_eq!(layout.layout_mode, Some(Axis::Horizontal));
    assert_eq!(layout.item_spacing, Some(20.0));
    assert_eq!(layout.cross_axis_alignment, Some(CrossAxisAlignment::Start));
    assert_eq!(layout.main_axis_alignment, Some(MainAxisAlignment::Start));
    assert_eq!(layout.primary_axis_sizing_mode, Some(SizingMode::Fixed));
    assert!(layout.layout_inferred);

    let order: Vec<&str> = toolbar.children().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(order, ["a", "b", "c"]);
}

#[test]
fn test_column_inferred_after_absorption() {
    let frame = container(
        "FRAME",
        "list",
        100.0,
        200.0,
        vec![
            rect("bg", 0.0, 0.0, 100.0, 200.0),
            text("one", 30.0, 40.0, 40.0, 50.0),
            text("two", 20.0, 110.0, 60.0, 50.0),
        ],
    );
    let output = run(&tree(frame));
    let list = &output.nodes[0];
    let layout = list.frame_layout().unwrap();

    assert_eq!(list.children().len(), 2);
    assert_eq!(layout.layout_mode, Some(Axis::Vertical));
    assert_eq!(layout.cross_axis_alignment, Some(CrossAxisAlignment::Center));
    assert_eq!(layout.main_axis_alignment, Some(MainAxisAlignment::Center));
}

#[test]
fn test_scattered_children_leave_layout_fields_absent() {
    let frame = container(
        "FRAME",
        "canvas",
        400.0,
        400.0,
        vec![text("a", 10.0, 10.0, 30.0, 30.0), text("b", 200.0, 300.0, 50.0, 10.0)],
    );
    let output = run(&tree(frame));
    let layout = output.nodes[0].frame_layout().unwrap();

    assert_eq!(layout.layout_mode, None);
    assert_eq!(layout.item_spacing, None);
    assert_eq!(layout.main_axis_alignment, None);
    assert_eq!(layout.cross_axis_alignment, None);
    assert!(!layout.layout_inferred);
}

#[test]
fn test_declared_layout_is_not_overridden() {
    let mut frame = container(
        "FRAME",
        "stack",
        100.0,
        200.0,
        vec![text("a", 0.0, 0.0, 100.0, 40.0), text("b", 0.0, 60.0, 100.0, 40.0)],
    );
    frame["layoutMode"] = json!("HORIZONTAL");
    frame["itemSpacing"] = json!(4);

    let output = run(&tree(frame));
    let layout = output.nodes[0].frame_layout().unwrap();
    assert_eq!(layout.layout_mode, Some(Axis::Horizontal));
    assert_eq!(layout.item_spacing, Some(4.0));
    assert!(!layout.layout_inferred);
}

#[test]
fn test_inference_uses_absolute_positions_and_can_be_disabled() {
    let mut frame = container(
        "FRAME",
        "nested",
        200.0,
        50.0,
        vec![text("a", 0.0, 0.0, 50.0, 50.0), text("b", 75.0, 0.0, 50.0, 50.0)],
    );
    frame["absoluteTransform"] = at(1000.0, 500.0);
    frame["children"][0]["absoluteTransform"] = at(1000.0, 500.0);
    frame["children"][1]["absoluteTransform"] = at(1075.0, 500.0);

    let source = tree(frame);
    let output = run(&source);
    let layout = output.nodes[0].frame_layout().unwrap();
    assert_eq!(layout.layout_mode, Some(Axis::Horizontal));
    assert_eq!(layout.item_spacing, Some(25.0));

    let config = ConvertConfig { infer_auto_layout: false, ..ConvertConfig::default() };
    let output = run_with(&source, config);
    assert_eq!(output.nodes[0].frame_layout().unwrap().layout_mode, None);
}
