//! Structural heuristics applied to freshly converted containers.
//!
//! Both heuristics take ownership of a node and hand back its final form. A
//! failed precondition is a normal outcome: the node comes back unchanged.

pub mod absorb;
pub mod auto_layout;

pub use absorb::{absorb_background, background_candidate};
pub use auto_layout::{detect, infer_auto_layout, InferredLayout};
