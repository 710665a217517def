//! Converts the small HTML subset used in card text fields (`p`, `ol`, `ul`,
//! `a`, `strong`, `em` and text) into a flat sequence of styled inline runs,
//! ready for a host UI toolkit to materialize.

pub mod error;
pub mod markdown;
pub mod markup;
pub mod numbering;
pub mod render;
pub mod runs;
pub mod style;
pub mod uri;
pub mod walker;

// Re-export key types for easier usage
pub use error::{ConversionError, ConversionErrorKind, NodePath};
pub use markup::{MarkupNode, NodeKind};
pub use numbering::{ListContext, ListNumberer, SafeCounter};
pub use render::{render_markdown, render_markup};
pub use runs::{LinkRun, Marker, OutputSequence, RunBuilder, StyledRun, TextRun};
pub use style::StyleState;
pub use uri::{UriError, UriResolver, UrlResolver};
pub use walker::{ConvertOptions, Converter, convert};
