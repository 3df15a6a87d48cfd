//! Normalized scene-graph nodes.
//!
//! A [`Node`] carries identity, provenance and tree position; its
//! [`NodeKind`] carries the capability bundles of the concrete variant. The
//! capability set of a variant is fixed by its struct: a [`TextNode`] has no
//! frame layout and can never gain one.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Transform;
use crate::hierarchy::{hierarchy_index, OriginTree};
use crate::mixins::{
    impl_mixin, Blend, BlendMixin, ChildrenMixin, Corner, FrameLayout, Geometry, Layout,
    LayoutMixin, Typography,
};
use crate::reference::{NodeReference, ParentRef};
use crate::style::Constraints;

// ───────────────────────────────────────────────────────────────────
// Node type
// ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Group,
    Component,
    VariantSet,
    Instance,
    Text,
    Frame,
    Ellipse,
    Rectangle,
    Line,
    Vector,
    Image,
    Unknown,
}

impl NodeType {
    /// Map a raw source type string to its normalized type. Total: anything
    /// unrecognized is `Unknown`.
    pub fn from_origin(raw: &str) -> Self {
        match raw {
            "GROUP" => NodeType::Group,
            "COMPONENT" => NodeType::Component,
            "COMPONENT_SET" => NodeType::VariantSet,
            "INSTANCE" => NodeType::Instance,
            "TEXT" => NodeType::Text,
            "FRAME" => NodeType::Frame,
            "ELLIPSE" => NodeType::Ellipse,
            "RECTANGLE" => NodeType::Rectangle,
            "LINE" => NodeType::Line,
            "VECTOR" | "STAR" | "POLYGON" | "REGULAR_POLYGON" | "BOOLEAN_OPERATION" => {
                NodeType::Vector
            }
            "IMAGE" => NodeType::Image,
            _ => NodeType::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Group => "group",
            NodeType::Component => "component",
            NodeType::VariantSet => "variant_set",
            NodeType::Instance => "instance",
            NodeType::Text => "text",
            NodeType::Frame => "frame",
            NodeType::Ellipse => "ellipse",
            NodeType::Rectangle => "rectangle",
            NodeType::Line => "line",
            NodeType::Vector => "vector",
            NodeType::Image => "image",
            NodeType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    #[error("node '{name}' (origin {origin}) has no identifier")]
    MissingId { name: String, origin: String },
}

// ───────────────────────────────────────────────────────────────────
// Variants
// ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupNode {
    pub blend: Blend,
    pub layout: Layout,
    pub children: Vec<Node>,
}

/// Frame, component, instance and variant-set sources all land here.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameNode {
    pub blend: Blend,
    pub geometry: Geometry,
    pub corner: Corner,
    pub layout: Layout,
    pub constraints: Option<Constraints>,
    pub frame: FrameLayout,
    pub children: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct RectangleNode {
    pub blend: Blend,
    pub geometry: Geometry,
    pub corner: Corner,
    pub layout: Layout,
    pub constraints: Option<Constraints>,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct EllipseNode {
    pub blend: Blend,
    pub geometry: Geometry,
    pub corner: Corner,
    pub layout: Layout,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct LineNode {
    pub blend: Blend,
    pub geometry: Geometry,
    pub layout: Layout,
    pub constraints: Option<Constraints>,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct TextNode {
    pub blend: Blend,
    pub geometry: Geometry,
    pub layout: Layout,
    pub constraints: Option<Constraints>,
    pub text: Typography,
}

impl_mixin!(BlendMixin { blend, blend_mut } => blend: Blend;
    GroupNode, FrameNode, RectangleNode, EllipseNode, LineNode, TextNode);
impl_mixin!(LayoutMixin { layout, layout_mut } => layout: Layout;
    GroupNode, FrameNode, RectangleNode, EllipseNode, LineNode, TextNode);
impl_mixin!(GeometryMixin { geometry, geometry_mut } => geometry: Geometry;
    FrameNode, RectangleNode, EllipseNode, LineNode, TextNode);
impl_mixin!(CornerMixin { corner, corner_mut } => corner: Corner;
    FrameNode, RectangleNode, EllipseNode);
impl_mixin!(ConstraintMixin { constraints, constraints_mut } => constraints: Option<Constraints>;
    FrameNode, RectangleNode, LineNode, TextNode);
impl_mixin!(FrameLayoutMixin { frame_layout, frame_layout_mut } => frame: FrameLayout;
    FrameNode);
impl_mixin!(TextMixin { typography, typography_mut } => text: Typography;
    TextNode);

impl ChildrenMixin for GroupNode {
    fn children(&self) -> &[Node] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }
}

impl ChildrenMixin for FrameNode {
    fn children(&self) -> &[Node] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Group(GroupNode),
    Frame(FrameNode),
    Rectangle(RectangleNode),
    Ellipse(EllipseNode),
    Line(LineNode),
    Text(TextNode),
}

impl NodeKind {
    /// Normalized type of a node of this kind. Frame-family nodes keep the
    /// component/instance/variant-set type of their origin.
    pub fn node_type(&self, origin: NodeType) -> NodeType {
        match self {
            NodeKind::Group(_) => NodeType::Group,
            NodeKind::Frame(_) => match origin {
                NodeType::Component | NodeType::Instance | NodeType::VariantSet => origin,
                _ => NodeType::Frame,
            },
            NodeKind::Rectangle(_) => NodeType::Rectangle,
            NodeKind::Ellipse(_) => NodeType::Ellipse,
            NodeKind::Line(_) => NodeType::Line,
            NodeKind::Text(_) => NodeType::Text,
        }
    }
}

// ───────────────────────────────────────────────────────────────────
// Node
// ───────────────────────────────────────────────────────────────────

/// Construction input. Everything but `id` may be empty.
#[derive(Clone, Debug, Default)]
pub struct NodeProps {
    pub id: String,
    pub name: String,
    pub parent: Option<ParentRef>,
    /// Raw source type string.
    pub origin: String,
    pub origin_parent_id: Option<String>,
    pub absolute_transform: Transform,
    pub children_count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    node_type: NodeType,
    pub origin: NodeType,
    pub origin_raw: String,
    pub origin_parent_id: Option<String>,
    pub parent: Option<ParentRef>,
    /// Child count of the source node. Not updated by rewrites.
    pub children_count: usize,
    pub hierarchy_index: usize,
    pub absolute_transform: Transform,
    /// Master component of an instance, whatever variant it converted to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_component: Option<NodeReference>,
    pub kind: NodeKind,
}

impl Node {
    /// Build a node with no children attached yet. The hierarchy index is
    /// computed here, against the original tree.
    pub fn new(props: NodeProps, kind: NodeKind, tree: &dyn OriginTree) -> Result<Self, NodeError> {
        if props.id.is_empty() {
            return Err(NodeError::MissingId {
                name: props.name,
                origin: props.origin,
            });
        }

        let origin = NodeType::from_origin(&props.origin);
        let hierarchy_index = hierarchy_index(
            &props.id,
            props.origin_parent_id.as_deref(),
            props.parent.as_ref(),
            tree,
        );

        Ok(Self {
            node_type: kind.node_type(origin),
            id: props.id,
            name: props.name,
            origin,
            origin_raw: props.origin,
            origin_parent_id: props.origin_parent_id,
            parent: props.parent,
            children_count: props.children_count,
            hierarchy_index,
            absolute_transform: props.absolute_transform,
            main_component: None,
            kind,
        })
    }

    #[inline]
    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    /// Replace the variant, keeping identity, provenance and transform.
    /// Children moved into the new variant get their back-references
    /// refreshed.
    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.node_type = kind.node_type(self.origin);
        self.kind = kind;
        self.adopt_children();
        self
    }

    /// Point every direct child's `parent` at this node.
    pub fn adopt_children(&mut self) {
        let link = self.as_parent();
        if let Some(children) = self.children_mut() {
            for child in children.iter_mut() {
                child.parent = Some(link.clone());
            }
        }
    }

    pub fn as_parent(&self) -> ParentRef {
        ParentRef::of(self)
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        match &self.kind {
            NodeKind::Group(_) => None,
            NodeKind::Frame(n) => Some(&n.geometry),
            NodeKind::Rectangle(n) => Some(&n.geometry),
            NodeKind::Ellipse(n) => Some(&n.geometry),
            NodeKind::Line(n) => Some(&n.geometry),
            NodeKind::Text(n) => Some(&n.geometry),
        }
    }

    pub fn geometry_mut(&mut self) -> Option<&mut Geometry> {
        match &mut self.kind {
            NodeKind::Group(_) => None,
            NodeKind::Frame(n) => Some(&mut n.geometry),
            NodeKind::Rectangle(n) => Some(&mut n.geometry),
            NodeKind::Ellipse(n) => Some(&mut n.geometry),
            NodeKind::Line(n) => Some(&mut n.geometry),
            NodeKind::Text(n) => Some(&mut n.geometry),
        }
    }

    pub fn corner(&self) -> Option<&Corner> {
        match &self.kind {
            NodeKind::Frame(n) => Some(&n.corner),
            NodeKind::Rectangle(n) => Some(&n.corner),
            NodeKind::Ellipse(n) => Some(&n.corner),
            _ => None,
        }
    }

    pub fn constraints(&self) -> Option<&Constraints> {
        match &self.kind {
            NodeKind::Frame(n) => n.constraints.as_ref(),
            NodeKind::Rectangle(n) => n.constraints.as_ref(),
            NodeKind::Line(n) => n.constraints.as_ref(),
            NodeKind::Text(n) => n.constraints.as_ref(),
            NodeKind::Group(_) | NodeKind::Ellipse(_) => None,
        }
    }

    pub fn frame_layout(&self) -> Option<&FrameLayout> {
        self.as_frame().map(|f| &f.frame)
    }

    pub fn typography(&self) -> Option<&Typography> {
        match &self.kind {
            NodeKind::Text(n) => Some(&n.text),
            _ => None,
        }
    }

    pub fn as_frame(&self) -> Option<&FrameNode> {
        match &self.kind {
            NodeKind::Frame(frame) => Some(frame),
            _ => None,
        }
    }

    pub fn as_frame_mut(&mut self) -> Option<&mut FrameNode> {
        match &mut self.kind {
            NodeKind::Frame(frame) => Some(frame),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&GroupNode> {
        match &self.kind {
            NodeKind::Group(group) => Some(group),
            _ => None,
        }
    }

    #[inline]
    pub fn main_component(&self) -> Option<&NodeReference> {
        self.main_component.as_ref()
    }

    /// Direct children; empty for leaf variants.
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Group(n) => n.children(),
            NodeKind::Frame(n) => n.children(),
            _ => &[],
        }
    }

    /// `None` for leaf variants.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match &mut self.kind {
            NodeKind::Group(n) => Some(n.children_mut()),
            NodeKind::Frame(n) => Some(n.children_mut()),
            _ => None,
        }
    }

    /// Attach converted children. Ignored (and logged) on leaf variants.
    pub fn set_children(&mut self, children: Vec<Node>) {
        match self.children_mut() {
            Some(slot) => *slot = children,
            None if children.is_empty() => {}
            None => log::warn!(
                "node {} ({}) cannot hold children, dropping {}",
                self,
                self.node_type,
                children.len()
            ),
        }
    }
}

impl BlendMixin for Node {
    fn blend(&self) -> &Blend {
        match &self.kind {
            NodeKind::Group(n) => n.blend(),
            NodeKind::Frame(n) => n.blend(),
            NodeKind::Rectangle(n) => n.blend(),
            NodeKind::Ellipse(n) => n.blend(),
            NodeKind::Line(n) => n.blend(),
            NodeKind::Text(n) => n.blend(),
        }
    }

    fn blend_mut(&mut self) -> &mut Blend {
        match &mut self.kind {
            NodeKind::Group(n) => n.blend_mut(),
            NodeKind::Frame(n) => n.blend_mut(),
            NodeKind::Rectangle(n) => n.blend_mut(),
            NodeKind::Ellipse(n) => n.blend_mut(),
            NodeKind::Line(n) => n.blend_mut(),
            NodeKind::Text(n) => n.blend_mut(),
        }
    }
}

impl LayoutMixin for Node {
    fn layout(&self) -> &Layout {
        match &self.kind {
            NodeKind::Group(n) => n.layout(),
            NodeKind::Frame(n) => n.layout(),
            NodeKind::Rectangle(n) => n.layout(),
            NodeKind::Ellipse(n) => n.layout(),
            NodeKind::Line(n) => n.layout(),
            NodeKind::Text(n) => n.layout(),
        }
    }

    fn layout_mut(&mut self) -> &mut Layout {
        match &mut self.kind {
            NodeKind::Group(n) => n.layout_mut(),
            NodeKind::Frame(n) => n.layout_mut(),
            NodeKind::Rectangle(n) => n.layout_mut(),
            NodeKind::Ellipse(n) => n.layout_mut(),
            NodeKind::Line(n) => n.layout_mut(),
            NodeKind::Text(n) => n.layout_mut(),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.name)
    }
}
