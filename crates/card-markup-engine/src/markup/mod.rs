//! # Markup Trees
//!
//! The walker consumes markup through the [`MarkupNode`] trait rather than a
//! concrete DOM, so any parser that can answer "name, first child, next
//! sibling, attribute, inner text" can feed it.
//!
//! ## Modules
//!
//! - **`node`**: the `MarkupNode` trait and its `Children` iterator
//! - **`kind`**: `NodeKind`, the closed set of names the walker dispatches on
//! - **`xml`**: `MarkupNode` for `roxmltree` nodes

pub mod kind;
pub mod node;
pub mod xml;

pub use kind::{NodeKind, is_element};
pub use node::{Children, MarkupNode};
