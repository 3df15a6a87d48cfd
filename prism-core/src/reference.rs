use serde::{Deserialize, Serialize};

use crate::mixins::LayoutMixin;
use crate::node::{Node, NodeType};

/// Lightweight, JSON-exportable reference to a node: identity plus essential
/// geometry. Used for master-component links and for logging.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeReference {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub origin: NodeType,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub absolute_x: f64,
    pub absolute_y: f64,
}

impl NodeReference {
    pub fn of(node: &Node) -> Self {
        let layout = node.layout();
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            node_type: node.node_type(),
            origin: node.origin,
            x: layout.x,
            y: layout.y,
            width: layout.width,
            height: layout.height,
            absolute_x: node.absolute_x(),
            absolute_y: node.absolute_y(),
        }
    }
}

/// Non-owning back-reference from a child to its parent.
///
/// Carries just enough to answer the read queries a child needs (parent type
/// for variant checks, parent index for hierarchy computation). Resolve the
/// full parent through the tree root with [`Node::find`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRef {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub hierarchy_index: usize,
}

impl ParentRef {
    pub fn of(node: &Node) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            node_type: node.node_type(),
            hierarchy_index: node.hierarchy_index,
        }
    }
}
