//! Source-document provider.
//!
//! The converter never walks the source tree by itself to answer identity
//! questions; it asks an injected [`SourceDocument`]. [`SourceTree`] is the
//! in-memory implementation used for snapshots and tests.

use rustc_hash::FxHashMap;

use prism_core::OriginTree;

use crate::error::ConvertError;
use crate::source::SourceNode;

/// Read-only lookup into the original document.
pub trait SourceDocument {
    fn node_by_id(&self, id: &str) -> Option<&SourceNode>;
}

/// Adapter exposing a [`SourceDocument`] to the hierarchy engine.
#[derive(Clone, Copy)]
pub struct DocumentLookup<'a>(pub &'a dyn SourceDocument);

impl OriginTree for DocumentLookup<'_> {
    fn child_position(&self, parent_id: &str, child_id: &str) -> Option<usize> {
        self.0
            .node_by_id(parent_id)?
            .children
            .iter()
            .position(|child| child.id == child_id)
    }
}

// ───────────────────────────────────────────────────────────────────
// SourceTree
// ───────────────────────────────────────────────────────────────────

/// Owned snapshot of one or more root nodes, indexed by id.
///
/// Each id maps to its child-index path from a root, so lookups never clone
/// and the tree stays the single owner of every node.
#[derive(Debug, Default)]
pub struct SourceTree {
    roots: Vec<SourceNode>,
    index: FxHashMap<String, Vec<usize>>,
}

impl SourceTree {
    /// Build from root snapshots. Missing `parentId`s are filled in from
    /// nesting; roots keep whatever parent they were exported with.
    pub fn new(mut roots: Vec<SourceNode>) -> Self {
        for root in roots.iter_mut() {
            link_parents(root);
        }

        let mut index = FxHashMap::default();
        let mut path = Vec::new();
        for (i, root) in roots.iter().enumerate() {
            path.push(i);
            index_node(root, &mut path, &mut index);
            path.pop();
        }

        log::debug!("source tree: {} roots, {} nodes indexed", roots.len(), index.len());
        Self { roots, index }
    }

    /// Parse a snapshot holding either a single root object or an array of
    /// roots. The shape is picked from the first token so parse errors keep
    /// the offending field and its line/column.
    pub fn from_json(json: &str) -> Result<Self, ConvertError> {
        let roots = if json.trim_start().starts_with('[') {
            serde_json::from_str::<Vec<SourceNode>>(json)
        } else {
            serde_json::from_str::<SourceNode>(json).map(|root| vec![root])
        };
        roots.map(Self::new).map_err(ConvertError::Snapshot)
    }

    pub fn roots(&self) -> &[SourceNode] {
        &self.roots
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl SourceDocument for SourceTree {
    fn node_by_id(&self, id: &str) -> Option<&SourceNode> {
        let path = self.index.get(id)?;
        let (first, rest) = path.split_first()?;
        let mut node = self.roots.get(*first)?;
        for &i in rest {
            node = node.children.get(i)?;
        }
        Some(node)
    }
}

fn link_parents(node: &mut SourceNode) {
    let id = node.id.clone();
    for child in node.children.iter_mut() {
        if child.parent_id.as_deref().map_or(true, str::is_empty) {
            child.parent_id = Some(id.clone());
        }
        link_parents(child);
    }
}

fn index_node(node: &SourceNode, path: &mut Vec<usize>, index: &mut FxHashMap<String, Vec<usize>>) {
    if node.id.is_empty() {
        log::warn!("source tree: node '{}' has no id, not indexed", node.name);
    } else if index.contains_key(&node.id) {
        log::warn!("source tree: duplicate id '{}', keeping the first occurrence", node.id);
    } else {
        index.insert(node.id.clone(), path.clone());
    }

    for (i, child) in node.children.iter().enumerate() {
        path.push(i);
        index_node(child, path, index);
        path.pop();
    }
}
