//! # prism-convert — Design-tree normalization engine
//!
//! Turns a design tool's irregular node tree into the `prism-core` scene
//! graph: every source node is filtered, classified, rebuilt as a node
//! variant with its capabilities copied, and containers are tidied by two
//! structural heuristics.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  &[SourceNode]  ┌──────────────┐   Vec<Node>   ┌──────────────┐
//! │ SourceTree   │ ──────────────▸ │  Converter   │ ────────────▸ │ ConvertOutput│
//! │ (snapshot)   │ ◂── node_by_id ─│  (walker)    │               │ nodes+errors │
//! └──────────────┘                 └──────┬───────┘               └──────────────┘
//!                                         │
//!                          copy::* · heuristics::{absorb, auto_layout}
//! ```
//!
//! ## Modules
//!
//! - [`source`] — serializable snapshot of the design tool's nodes
//! - [`document`] — read-only id lookup over a snapshot
//! - [`filter`] — naming-convention filter
//! - [`converters`] — enum and mixed-value mappings
//! - [`copy`] — one copier per capability
//! - [`walker`] — dispatch and recursion
//! - [`heuristics`] — background absorption, auto-layout inference
//! - [`config`] — tunables
//!
//! ## Example
//!
//! ```
//! use prism_convert::{convert, SourceTree};
//!
//! let tree = SourceTree::from_json(r#"{
//!     "id": "1:1", "name": "Card", "type": "FRAME", "width": 200, "height": 100,
//!     "children": [{ "id": "1:2", "name": "Title", "type": "TEXT", "characters": "Hello" }]
//! }"#).unwrap();
//!
//! let output = convert(&tree, tree.roots(), None);
//! assert!(output.is_clean());
//! assert_eq!(output.nodes[0].children()[0].name, "Title");
//! ```

pub mod config;
pub mod converters;
pub mod copy;
pub mod document;
pub mod error;
pub mod filter;
pub mod heuristics;
pub mod source;
pub mod walker;

// Re-exports for convenience
pub use config::ConvertConfig;
pub use document::{DocumentLookup, SourceDocument, SourceTree};
pub use error::{ConvertError, ConvertOutput};
pub use filter::{IgnoreConvention, NameFilter};
pub use source::{Mixable, SourceKind, SourceNode};
pub use walker::{convert, convert_single, Converter, DropReason, Outcome};
