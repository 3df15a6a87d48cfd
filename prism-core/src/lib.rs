//! # prism-core — Normalized scene-graph model
//!
//! A closed set of node variants, each carrying a fixed bundle of
//! capabilities, plus the structural metadata computed at construction.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   NodeProps + NodeKind   ┌──────────────┐
//! │  converter   │ ───────────────────────▸ │  Node::new   │
//! └──────────────┘                          └──────┬───────┘
//!                                                  │ hierarchy_index()
//!                                                  ▼
//!                                           ┌──────────────┐
//!                                           │ OriginTree   │
//!                                           │ (read-only)  │
//!                                           └──────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`node`] — `Node`, `NodeKind` and the per-variant structs
//! - [`mixins`] — capability bundles and their traits
//! - [`hierarchy`] — hierarchy index against the original tree
//! - [`reference`] — lightweight node snippets and parent back-references
//! - [`geometry`], [`paint`], [`style`] — value types
//!
//! Derived accessors (shadows, fills, variants, export checks) live in an
//! `impl Node` block of their own and are always recomputed.

pub mod geometry;
pub mod hierarchy;
pub mod mixins;
pub mod node;
pub mod paint;
pub mod reference;
pub mod style;

mod derived;

// Re-exports for convenience
pub use geometry::{Aabb, CornerRadii, CornerRadius, EdgeInsets, Transform, Vector};
pub use hierarchy::{hierarchy_index, OriginTree};
pub use mixins::{
    Blend, BlendMixin, ChildrenMixin, ConstraintMixin, Corner, CornerMixin, DefaultShapeMixin,
    FrameLayout, FrameLayoutMixin, Geometry, GeometryMixin, Layout, LayoutMixin, TextMixin,
    Typography,
};
pub use node::{
    EllipseNode, FrameNode, GroupNode, LineNode, Node, NodeError, NodeKind, NodeProps, NodeType,
    RectangleNode, TextNode,
};
pub use paint::{BlendMode, BoxShadow, Color, Effect, EffectType, ImagePaint, Paint, SolidPaint};
pub use reference::{NodeReference, ParentRef};
