//! Derived, read-only queries on a normalized node.
//!
//! Nothing here is stored: every accessor is recomputed from the node's
//! current state, so results stay correct after heuristic rewrites.

use crate::geometry::Aabb;
use crate::mixins::{BlendMixin, LayoutMixin};
use crate::node::{Node, NodeType};
use crate::paint::{BoxShadow, Color, ImagePaint, Paint};
use crate::reference::NodeReference;

impl Node {
    // ─── Position ────────────────────────────────────────────────────

    #[inline]
    pub fn absolute_x(&self) -> f64 {
        self.absolute_transform.translate_x()
    }

    #[inline]
    pub fn absolute_y(&self) -> f64 {
        self.absolute_transform.translate_y()
    }

    /// Absolute bounding box, ignoring rotation.
    pub fn bounds(&self) -> Aabb {
        let layout = self.layout();
        Aabb::from_rect(self.absolute_x(), self.absolute_y(), layout.width, layout.height)
    }

    // ─── Effects ─────────────────────────────────────────────────────

    /// Visible drop and inner shadows, in declaration order.
    pub fn shadows(&self) -> Vec<BoxShadow> {
        self.blend().effects.iter().filter_map(BoxShadow::from_effect).collect()
    }

    pub fn primary_shadow(&self) -> Option<BoxShadow> {
        self.blend().effects.iter().find_map(BoxShadow::from_effect)
    }

    // ─── Classification ──────────────────────────────────────────────

    pub fn is_component(&self) -> bool {
        matches!(
            self.node_type(),
            NodeType::Component | NodeType::Instance | NodeType::VariantSet
        )
    }

    pub fn is_instance(&self) -> bool {
        self.node_type() == NodeType::Instance
    }

    pub fn is_master_component(&self) -> bool {
        self.node_type() == NodeType::Component
    }

    /// A master component living directly under a variant set.
    pub fn is_variant(&self) -> bool {
        self.is_master_component()
            && self
                .parent
                .as_ref()
                .is_some_and(|p| p.node_type == NodeType::VariantSet)
    }

    /// Names of every variant in this node's variant set, itself included.
    /// The set is resolved through `root`; empty when this is not a variant
    /// or the set is not part of `root`'s tree.
    pub fn variant_names(&self, root: &Node) -> Vec<String> {
        if !self.is_variant() {
            return Vec::new();
        }
        let Some(set) = self.parent.as_ref().and_then(|p| root.find(&p.id)) else {
            log::debug!("variant set of {self} not reachable from {root}");
            return Vec::new();
        };
        set.children().iter().map(|v| v.name.clone()).collect()
    }

    pub fn has_variant(&self, root: &Node) -> bool {
        !self.variant_names(root).is_empty()
    }

    // ─── Tree position ───────────────────────────────────────────────

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    /// Every node under this one in pre-order, optionally led by the node
    /// itself. A leaf with `include_this` yields `[self]`.
    pub fn grandchildren(&self, include_this: bool) -> Vec<&Node> {
        let mut out = Vec::new();
        if include_this {
            out.push(self);
        }
        let mut stack: Vec<&Node> = self.children().iter().rev().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children().iter().rev());
        }
        out
    }

    /// Depth-first search for `id`, including this node.
    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id == id {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(id))
    }

    // ─── Fills ───────────────────────────────────────────────────────

    /// Own fills. Empty for groups and for unrecoverable mixed fills.
    pub fn fills(&self) -> &[Paint] {
        self.geometry()
            .and_then(|g| g.fills.as_deref())
            .unwrap_or(&[])
    }

    pub fn has_fills(&self) -> bool {
        !self.fills().is_empty()
    }

    pub fn visible_fills(&self) -> Vec<&Paint> {
        self.fills().iter().filter(|p| p.is_visible()).collect()
    }

    pub fn has_visible_fills(&self) -> bool {
        self.fills().iter().any(Paint::is_visible)
    }

    /// First visible fill of this node, or for containers the first visible
    /// fill found in pre-order over the node and its descendants.
    pub fn primary_fill(&self) -> Option<&Paint> {
        self.grandchildren(true)
            .into_iter()
            .find_map(|node| node.fills().iter().find(|p| p.is_visible()))
    }

    /// Color of the first visible solid fill, paint opacity folded into
    /// alpha. Own fills only.
    pub fn primary_color(&self) -> Option<Color> {
        self.fills()
            .iter()
            .filter(|p| p.is_visible())
            .find_map(Paint::solid_color)
    }

    // ─── Images ──────────────────────────────────────────────────────

    /// Own fills only; descendants are not inspected.
    pub fn has_image(&self) -> bool {
        self.fills().iter().any(Paint::is_image)
    }

    pub fn images(&self) -> Vec<&ImagePaint> {
        self.fills().iter().filter_map(Paint::as_image).collect()
    }

    pub fn primary_image(&self) -> Option<&ImagePaint> {
        self.fills()
            .iter()
            .filter(|p| p.is_visible())
            .find_map(Paint::as_image)
    }

    /// False when this node or any descendant carries an image fill.
    pub fn vector_exportable(&self) -> bool {
        !self.has_image() && self.children().iter().all(Node::vector_exportable)
    }

    // ─── Snippets ────────────────────────────────────────────────────

    pub fn snippet(&self) -> NodeReference {
        NodeReference::of(self)
    }

    pub fn snippet_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.snippet())
    }
}
