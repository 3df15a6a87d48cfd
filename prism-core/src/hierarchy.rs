//! Hierarchy index computation.
//!
//! A node's hierarchy index is derived from the *original* source tree, not
//! from the normalized tree, so rewrites that collapse or absorb nodes never
//! shift the indices of the nodes that survive:
//!
//! ```text
//! index(root)  = 0
//! index(node)  = index(parent) + position among original siblings + 1
//! ```

use crate::reference::ParentRef;

/// Read-only view of the original source tree.
pub trait OriginTree {
    /// Ordinal of `child_id` among the original children of `parent_id`.
    /// `None` when either node is unknown.
    fn child_position(&self, parent_id: &str, child_id: &str) -> Option<usize>;
}

/// Compute the hierarchy index of node `id`.
///
/// `origin_parent_id` is the node's parent in the source tree; `parent` is the
/// already-converted node it hangs under. Lookup misses resolve to 0 and are
/// logged, never propagated.
pub fn hierarchy_index(
    id: &str,
    origin_parent_id: Option<&str>,
    parent: Option<&ParentRef>,
    tree: &dyn OriginTree,
) -> usize {
    let Some(origin_parent_id) = origin_parent_id.filter(|pid| !pid.is_empty()) else {
        return 0;
    };

    let parent_index = parent.map_or(0, |p| p.hierarchy_index);
    let position = tree.child_position(origin_parent_id, id).unwrap_or_else(|| {
        log::warn!("hierarchy: '{id}' not found under original parent '{origin_parent_id}', using 0");
        0
    });

    parent_index + position + 1
}
