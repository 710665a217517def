//! # List Numbering
//!
//! Ordered lists start at their `start` attribute (default 1) and advance by
//! one per element child. Numbering edge cases never fail a conversion: a bad or
//! overflowing `start` silently becomes 1.

pub mod counter;
pub mod list;

pub use counter::SafeCounter;
pub use list::{ListContext, ListNumberer, Markers, element_child_count};
