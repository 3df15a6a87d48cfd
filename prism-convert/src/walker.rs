//! Type dispatcher and tree walker.
//!
//! ```text
//!  &[SourceNode] ──▸ filter ──▸ classify ──▸ copy capabilities ──▸ Node
//!                                  │                                │
//!                                  │ frame / group                  │
//!                                  ▼                                ▼
//!                            convert children ──▸ absorb ──▸ infer layout
//! ```
//!
//! The walk is depth-first and single-threaded. Each source node produces at
//! most one output node; dispatch reports what happened as an [`Outcome`].

use std::fmt;

use prism_core::{
    BlendMixin, CornerRadius, EllipseNode, FrameNode, GroupNode, LineNode, Node, NodeKind,
    NodeProps, NodeReference, NodeType, ParentRef, RectangleNode, TextNode,
};

use crate::config::ConvertConfig;
use crate::copy::{
    copy_blend, copy_constraint, copy_corner, copy_default_shape, copy_frame, copy_layout,
    copy_text,
};
use crate::document::{DocumentLookup, SourceDocument};
use crate::error::{ConvertError, ConvertOutput};
use crate::filter::{IgnoreConvention, NameFilter};
use crate::heuristics::{absorb_background, infer_auto_layout};
use crate::source::{SourceKind, SourceNode};

// ───────────────────────────────────────────────────────────────────
// Outcome
// ───────────────────────────────────────────────────────────────────

/// Why a source node produced no output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropReason {
    /// Name matched the ignore convention.
    Ignored,
    /// Explicitly hidden.
    Hidden,
    /// Kind has no normalized counterpart.
    Unsupported(SourceKind),
    /// Single-child group whose only child was itself dropped.
    EmptyGroup,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::Ignored => f.write_str("ignored by name"),
            DropReason::Hidden => f.write_str("hidden"),
            DropReason::Unsupported(kind) => write!(f, "unsupported kind {kind:?}"),
            DropReason::EmptyGroup => f.write_str("collapsed group with no output"),
        }
    }
}

/// Result of dispatching one source node.
#[derive(Debug)]
pub enum Outcome {
    Emitted(Node),
    Dropped(DropReason),
}

impl Outcome {
    pub fn into_node(self) -> Option<Node> {
        match self {
            Outcome::Emitted(node) => Some(node),
            Outcome::Dropped(_) => None,
        }
    }
}

// ───────────────────────────────────────────────────────────────────
// Converter
// ───────────────────────────────────────────────────────────────────

/// Converts source subtrees into normalized nodes.
///
/// The converter holds no per-call state: every `convert` call produces an
/// independent tree and the document is only ever read.
pub struct Converter<'a> {
    document: &'a dyn SourceDocument,
    filter: &'a dyn NameFilter,
    config: ConvertConfig,
}

impl<'a> Converter<'a> {
    pub fn new(document: &'a dyn SourceDocument, filter: &'a dyn NameFilter) -> Self {
        Self {
            document,
            filter,
            config: ConvertConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ConvertConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    // ---------------------------------------------------------------
    // Entry points
    // ---------------------------------------------------------------

    /// Convert `sources`, in order, as children of `parent` (`None` for
    /// roots). Filtered and unsupported nodes are left out; construction
    /// errors anywhere in the batch are collected without stopping it.
    pub fn convert(&self, sources: &[SourceNode], parent: Option<&Node>) -> ConvertOutput {
        let parent = parent.map(Node::as_parent);
        let mut errors = Vec::new();
        let nodes = self.convert_children(sources, parent.as_ref(), &mut errors);
        if !errors.is_empty() {
            log::warn!("conversion finished with {} error(s)", errors.len());
        }
        ConvertOutput { nodes, errors }
    }

    /// Convert one source node. `Ok(None)` when it was filtered or is
    /// unsupported. Errors from descendants are logged and the descendant is
    /// left out; only the node's own construction error is returned.
    pub fn convert_single(&self, source: &SourceNode, parent: Option<&Node>) -> Result<Option<Node>, ConvertError> {
        let parent = parent.map(Node::as_parent);
        let mut errors = Vec::new();
        let outcome = self.dispatch(source, parent.as_ref(), &mut errors)?;
        for err in &errors {
            log::warn!("descendant of '{}' skipped: {err}", source.name);
        }
        Ok(outcome.into_node())
    }

    /// Filter, classify and build one source node. Construction errors of
    /// descendants are pushed to `errors`; the node's own is returned.
    pub fn dispatch(
        &self,
        source: &SourceNode,
        parent: Option<&ParentRef>,
        errors: &mut Vec<ConvertError>,
    ) -> Result<Outcome, ConvertError> {
        if self.filter.should_ignore(&source.name) {
            return Ok(self.dropped(source, DropReason::Ignored));
        }
        if source.is_hidden() {
            return Ok(self.dropped(source, DropReason::Hidden));
        }

        let kind = source.kind();
        let node = match kind {
            SourceKind::Rectangle => {
                let mut shape = RectangleNode::default();
                copy_default_shape(&mut shape, source);
                copy_corner(&mut shape, &source.corner);
                copy_constraint(&mut shape, source);
                self.build(source, parent, 0, NodeKind::Rectangle(shape))?
            }
            SourceKind::Ellipse => {
                let mut shape = EllipseNode::default();
                copy_default_shape(&mut shape, source);
                copy_corner(&mut shape, &source.corner);
                self.build(source, parent, 0, NodeKind::Ellipse(shape))?
            }
            SourceKind::Line => {
                let mut line = LineNode::default();
                copy_default_shape(&mut line, source);
                copy_blend(&mut line, &source.blend);
                copy_constraint(&mut line, source);
                self.build(source, parent, 0, NodeKind::Line(line))?
            }
            SourceKind::Text => {
                let mut text = TextNode::default();
                copy_default_shape(&mut text, source);
                copy_text(&mut text, &source.text);
                copy_constraint(&mut text, source);
                self.build(source, parent, 0, NodeKind::Text(text))?
            }
            SourceKind::Vector => self.vector_placeholder(source, parent)?,
            SourceKind::Frame | SourceKind::Component | SourceKind::Instance => {
                self.convert_frame(source, parent, errors)?
            }
            SourceKind::ComponentSet if self.config.convert_variant_sets => {
                self.convert_frame(source, parent, errors)?
            }
            SourceKind::Group => return self.convert_group(source, parent, errors),
            SourceKind::ComponentSet
            | SourceKind::Polygon
            | SourceKind::Star
            | SourceKind::BooleanOperation
            | SourceKind::Slice
            | SourceKind::Other => return Ok(self.dropped(source, DropReason::Unsupported(kind))),
        };

        Ok(Outcome::Emitted(node))
    }

    // ---------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------

    fn convert_children(
        &self,
        sources: &[SourceNode],
        parent: Option<&ParentRef>,
        errors: &mut Vec<ConvertError>,
    ) -> Vec<Node> {
        let mut nodes = Vec::with_capacity(sources.len());
        for source in sources {
            match self.dispatch(source, parent, errors) {
                Ok(Outcome::Emitted(node)) => nodes.push(node),
                Ok(Outcome::Dropped(_)) => {}
                Err(err) => {
                    log::warn!("failed to convert '{}' ({}): {err}", source.name, source.node_type);
                    errors.push(err);
                }
            }
        }
        nodes
    }

    fn dropped(&self, source: &SourceNode, reason: DropReason) -> Outcome {
        log::debug!("dropping '{}' ({}): {reason}", source.name, source.node_type);
        Outcome::Dropped(reason)
    }

    fn build(
        &self,
        source: &SourceNode,
        parent: Option<&ParentRef>,
        children_count: usize,
        kind: NodeKind,
    ) -> Result<Node, ConvertError> {
        let props = NodeProps {
            id: source.id.clone(),
            name: source.name.clone(),
            parent: parent.cloned(),
            origin: source.node_type.clone(),
            origin_parent_id: source.parent_id.clone(),
            absolute_transform: source.absolute_transform,
            children_count,
        };
        Node::new(props, kind, &DocumentLookup(self.document)).map_err(ConvertError::from)
    }

    /// Vectors are not supported yet; they render as a translucent rounded
    /// rectangle so the layout keeps its shape.
    fn vector_placeholder(&self, source: &SourceNode, parent: Option<&ParentRef>) -> Result<Node, ConvertError> {
        let mut shape = RectangleNode::default();
        copy_constraint(&mut shape, source);
        copy_default_shape(&mut shape, source);
        shape.corner.corner_radius = Some(CornerRadius::Uniform(self.config.vector_placeholder_radius));
        shape.blend_mut().opacity = self.config.vector_placeholder_opacity;
        log::debug!("vector '{}' converted to placeholder rectangle", source.name);
        self.build(source, parent, 0, NodeKind::Rectangle(shape))
    }

    /// Frames, components and instances. A frame with no layout mode and no
    /// children is just a rectangle; an instance keeps its master reference
    /// either way.
    fn convert_frame(
        &self,
        source: &SourceNode,
        parent: Option<&ParentRef>,
        errors: &mut Vec<ConvertError>,
    ) -> Result<Node, ConvertError> {
        if !source.is_auto_layout() && source.children.is_empty() {
            let mut shape = RectangleNode::default();
            copy_default_shape(&mut shape, source);
            copy_corner(&mut shape, &source.corner);
            copy_constraint(&mut shape, source);
            let mut node = self.build(source, parent, 0, NodeKind::Rectangle(shape))?;
            node.main_component = self.main_component(source);
            return Ok(node);
        }

        let mut frame = FrameNode::default();
        copy_default_shape(&mut frame, source);
        copy_frame(&mut frame, &source.frame);
        copy_corner(&mut frame, &source.corner);
        copy_constraint(&mut frame, source);

        let mut node = self.build(source, parent, source.children.len(), NodeKind::Frame(frame))?;
        node.main_component = self.main_component(source);
        let children = self.convert_children(&source.children, Some(&node.as_parent()), errors);
        node.set_children(children);

        if self.config.absorb_backgrounds {
            node = absorb_background(node, self.config.background_tolerance);
        }
        if self.config.infer_auto_layout {
            node = infer_auto_layout(node, self.config.layout_tolerance);
        }
        Ok(node)
    }

    /// Single-child groups dissolve into their child, which is converted
    /// against the group's own parent. Other groups convert their children
    /// and may absorb a background.
    fn convert_group(
        &self,
        source: &SourceNode,
        parent: Option<&ParentRef>,
        errors: &mut Vec<ConvertError>,
    ) -> Result<Outcome, ConvertError> {
        if let [only] = source.children.as_slice() {
            log::debug!("group '{}' has a single child, collapsing", source.name);
            return Ok(match self.dispatch(only, parent, errors)? {
                Outcome::Dropped(_) => self.dropped(source, DropReason::EmptyGroup),
                emitted => emitted,
            });
        }

        let mut group = GroupNode::default();
        copy_layout(&mut group, &source.layout);
        copy_blend(&mut group, &source.blend);

        let mut node = self.build(source, parent, source.children.len(), NodeKind::Group(group))?;
        let children = self.convert_children(&source.children, Some(&node.as_parent()), errors);
        node.set_children(children);

        if self.config.absorb_backgrounds {
            node = absorb_background(node, self.config.background_tolerance);
        }
        Ok(Outcome::Emitted(node))
    }

    /// Master reference of an instance; `None` for every other kind.
    fn main_component(&self, source: &SourceNode) -> Option<NodeReference> {
        if source.kind() != SourceKind::Instance {
            return None;
        }
        let id = source.main_component_id.as_deref()?;
        match self.document.node_by_id(id) {
            Some(master) => Some(source_reference(master)),
            None => {
                log::warn!("instance '{}': main component '{id}' not found", source.name);
                None
            }
        }
    }
}

/// Snippet of a source node, as if it had been converted in place.
pub fn source_reference(source: &SourceNode) -> NodeReference {
    let origin = NodeType::from_origin(&source.node_type);
    NodeReference {
        id: source.id.clone(),
        name: source.name.clone(),
        node_type: origin,
        origin,
        x: source.layout.x.unwrap_or(0.0),
        y: source.layout.y.unwrap_or(0.0),
        width: source.layout.width.unwrap_or(0.0),
        height: source.layout.height.unwrap_or(0.0),
        absolute_x: source.absolute_transform.translate_x(),
        absolute_y: source.absolute_transform.translate_y(),
    }
}

// ───────────────────────────────────────────────────────────────────
// Module-level helpers
// ───────────────────────────────────────────────────────────────────

/// Batch conversion with the default ignore convention and configuration.
pub fn convert(document: &dyn SourceDocument, sources: &[SourceNode], parent: Option<&Node>) -> ConvertOutput {
    let filter = IgnoreConvention::default();
    Converter::new(document, &filter).convert(sources, parent)
}

/// Single-node conversion with the default ignore convention and
/// configuration.
pub fn convert_single(
    document: &dyn SourceDocument,
    source: &SourceNode,
    parent: Option<&Node>,
) -> Result<Option<Node>, ConvertError> {
    let filter = IgnoreConvention::default();
    Converter::new(document, &filter).convert_single(source, parent)
}
