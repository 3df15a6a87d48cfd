//! Snapshot builders shared by the integration tests.

#![allow(dead_code)]

use prism_convert::{ConvertConfig, ConvertOutput, Converter, IgnoreConvention, SourceNode, SourceTree};
use serde_json::{json, Value};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a tree from one root object or an array of roots.
pub fn tree(value: Value) -> SourceTree {
    let roots: Vec<SourceNode> = match value {
        Value::Array(_) => serde_json::from_value(value).unwrap(),
        other => vec![serde_json::from_value(other).unwrap()],
    };
    SourceTree::new(roots)
}

pub fn run(tree: &SourceTree) -> ConvertOutput {
    run_with(tree, ConvertConfig::default())
}

pub fn run_with(tree: &SourceTree, config: ConvertConfig) -> ConvertOutput {
    init_logger();
    let filter = IgnoreConvention::default();
    Converter::new(tree, &filter)
        .with_config(config)
        .convert(tree.roots(), None)
}

pub fn at(x: f64, y: f64) -> Value {
    json!([[1.0, 0.0, x], [0.0, 1.0, y]])
}

pub fn solid(r: f64, g: f64, b: f64) -> Value {
    json!({ "type": "SOLID", "color": { "r": r, "g": g, "b": b } })
}

/// Node of `kind` placed at absolute (`x`, `y`); local position equals
/// absolute position in these fixtures.
pub fn shape(kind: &str, id: &str, x: f64, y: f64, w: f64, h: f64) -> Value {
    json!({
        "id": id,
        "name": id,
        "type": kind,
        "x": x, "y": y, "width": w, "height": h,
        "absoluteTransform": at(x, y),
    })
}

pub fn rect(id: &str, x: f64, y: f64, w: f64, h: f64) -> Value {
    let mut node = shape("RECTANGLE", id, x, y, w, h);
    node["fills"] = json!([solid(1.0, 0.0, 0.0)]);
    node
}

pub fn text(id: &str, x: f64, y: f64, w: f64, h: f64) -> Value {
    let mut node = shape("TEXT", id, x, y, w, h);
    node["characters"] = json!(id);
    node
}

pub fn container(kind: &str, id: &str, w: f64, h: f64, children: Vec<Value>) -> Value {
    let mut node = shape(kind, id, 0.0, 0.0, w, h);
    node["children"] = Value::Array(children);
    node
}
