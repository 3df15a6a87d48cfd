use prism_core::{Node, NodeError};

/// Errors surfaced by the converter.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Node construction failed: {0}")]
    Node(#[from] NodeError),

    #[error("Invalid configuration: {0}")]
    Config(serde_json::Error),

    #[error("Invalid source snapshot: {0}")]
    Snapshot(serde_json::Error),
}

/// Result of a batch conversion.
///
/// Construction failures never abort the batch: the failing node is left out
/// of `nodes`, its error lands in `errors`, and its siblings still convert.
#[derive(Debug, Default)]
pub struct ConvertOutput {
    pub nodes: Vec<Node>,
    pub errors: Vec<ConvertError>,
}

impl ConvertOutput {
    /// True when no node failed anywhere in the batch.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Converted nodes, or the first error if anything failed.
    pub fn into_result(self) -> Result<Vec<Node>, ConvertError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(self.nodes),
        }
    }
}
