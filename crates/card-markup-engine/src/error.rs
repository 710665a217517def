use std::fmt;

use crate::uri::UriError;

/// Why a conversion was aborted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionErrorKind {
    /// A node lacks an attribute it cannot be rendered without (`href` on `a`).
    #[error("missing required attribute `{0}`")]
    MissingAttribute(&'static str),
    /// The URI resolver rejected an `href` value.
    #[error("invalid URI {href:?}: {source}")]
    InvalidUri { href: String, source: UriError },
    /// The node provider reported an inconsistent tree (cycle, shifting children).
    #[error("malformed markup tree: {0}")]
    MalformedTree(String),
    /// Nesting went past [`ConvertOptions::max_depth`](crate::ConvertOptions::max_depth).
    #[error("markup nested deeper than {0} levels")]
    DepthLimitExceeded(usize),
}

/// A failed conversion, carrying the path of the node that failed.
///
/// No partial output accompanies an error: a conversion either produces the
/// whole [`OutputSequence`](crate::OutputSequence) or this.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at {path} (depth {})", .path.depth())]
pub struct ConversionError {
    kind: ConversionErrorKind,
    path: NodePath,
}

impl ConversionError {
    pub(crate) fn at(node_name: &str, kind: ConversionErrorKind) -> Self {
        Self {
            kind,
            path: NodePath::leaf(node_name),
        }
    }

    /// Records an enclosing node while the error travels back up the walk.
    pub(crate) fn within(mut self, ancestor: &str) -> Self {
        self.path.leaf_first.push(ancestor.to_string());
        self
    }

    pub fn kind(&self) -> &ConversionErrorKind {
        &self.kind
    }

    pub fn path(&self) -> &NodePath {
        &self.path
    }
}

/// Names of the failing node and its ancestors, up to the conversion root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePath {
    // Leaf first; ancestors are appended during unwinding.
    leaf_first: Vec<String>,
}

impl NodePath {
    fn leaf(name: &str) -> Self {
        Self {
            leaf_first: vec![name.to_string()],
        }
    }

    /// Name of the node the error was raised on.
    pub fn node_name(&self) -> &str {
        self.leaf_first.first().map(String::as_str).unwrap_or_default()
    }

    /// Distance from the conversion root; the root itself is depth 0.
    pub fn depth(&self) -> usize {
        self.leaf_first.len().saturating_sub(1)
    }

    /// Node names from the root down to the failing node.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.leaf_first.iter().rev().map(String::as_str)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.segments().enumerate() {
            if i > 0 {
                f.write_str(" > ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}
