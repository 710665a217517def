//! # Styled Runs
//!
//! The output model of a conversion, independent of any UI toolkit.
//!
//! ## Modules
//!
//! - **`types`**: `TextRun`, `LinkRun`, `StyledRun` and `OutputSequence`
//! - **`builder`**: `RunBuilder`, which enforces the no-nested-links rule
//! - **`marker`**: list marker text (`"\n• "`, `"\n5. "`)

pub mod builder;
pub mod marker;
pub mod types;

pub use builder::{NestedLinkError, RunBuilder};
pub use marker::Marker;
pub use types::{LinkRun, OutputSequence, StyledRun, TextRun};
