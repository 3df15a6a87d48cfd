use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use prism_convert::{convert, SourceNode, SourceTree};
use serde_json::{json, Value};

fn rect(id: usize, x: f64, y: f64) -> Value {
    json!({
        "id": format!("r:{id}"),
        "name": format!("Rect {id}"),
        "type": "RECTANGLE",
        "width": 40, "height": 40,
        "absoluteTransform": [[1, 0, x], [0, 1, y]],
        "fills": [{ "type": "SOLID", "color": { "r": 0.2, "g": 0.4, "b": 0.8 } }],
        "cornerRadius": 4,
    })
}

fn build(root: Value) -> SourceTree {
    let root: SourceNode = serde_json::from_value(root).unwrap();
    SourceTree::new(vec![root])
}

/// One frame holding `n` evenly spaced rectangles in a row, plus a spanning
/// background, so both heuristics run.
fn wide_tree(n: usize) -> SourceTree {
    let mut children = vec![json!({
        "id": "bg", "name": "bg", "type": "RECTANGLE",
        "width": n as f64 * 50.0, "height": 40,
        "absoluteTransform": [[1, 0, 0], [0, 1, 0]],
        "fills": [{ "type": "SOLID", "color": { "r": 1, "g": 1, "b": 1 } }],
    })];
    children.extend((0..n).map(|i| rect(i, i as f64 * 50.0, 0.0)));
    build(json!({
        "id": "root", "name": "Row", "type": "FRAME",
        "width": n as f64 * 50.0, "height": 40,
        "absoluteTransform": [[1, 0, 0], [0, 1, 0]],
        "children": children,
    }))
}

/// `depth` nested groups, each holding a rectangle and the next group.
fn deep_tree(depth: usize) -> SourceTree {
    let mut node = rect(depth, 0.0, 0.0);
    for level in (0..depth).rev() {
        node = json!({
            "id": format!("g:{level}"),
            "name": format!("Group {level}"),
            "type": "GROUP",
            "children": [rect(level, 0.0, 0.0), node],
        });
    }
    build(node)
}

/// Benchmark: convert a frame with N children
fn bench_convert_wide(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_wide_frame");

    for count in [100, 1_000] {
        let tree = wide_tree(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &tree, |b, tree| {
            b.iter(|| convert(tree, tree.roots(), None));
        });
    }

    group.finish();
}

/// Benchmark: convert N levels of nested groups
fn bench_convert_deep(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_deep_groups");

    for depth in [10, 100] {
        let tree = deep_tree(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &tree, |b, tree| {
            b.iter(|| convert(tree, tree.roots(), None));
        });
    }

    group.finish();
}

/// Benchmark: parse a snapshot from JSON text
fn bench_parse_snapshot(c: &mut Criterion) {
    let text = serde_json::to_string(&wide_tree(1_000).roots()[0]).unwrap();
    c.bench_function("parse_snapshot_1000", |b| {
        b.iter(|| SourceTree::from_json(&text).unwrap());
    });
}

criterion_group!(benches, bench_convert_wide, bench_convert_deep, bench_parse_snapshot);
criterion_main!(benches);
