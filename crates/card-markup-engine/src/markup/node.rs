use std::borrow::Cow;

/// Read-only view of one node in a markup tree owned by an external parser.
///
/// Implementations are expected to be cheap handles (a reference, an index into
/// an arena) so the walker can hold several at once. The walker never mutates
/// the tree and never keeps a node past the end of a conversion.
pub trait MarkupNode: Sized {
    /// Tag name for elements; `#text` for text nodes. Other non-element nodes
    /// should use a `#`-prefixed name too (`#comment`, `#document`).
    fn name(&self) -> &str;

    fn first_child(&self) -> Option<Self>;

    fn next_sibling(&self) -> Option<Self>;

    fn attribute(&self, name: &str) -> Option<Cow<'_, str>>;

    /// Text content: the node's own text for `#text`, concatenated descendant
    /// text for elements.
    fn inner_text(&self) -> Cow<'_, str>;

    /// A value unique to this node within its tree, if the provider has one.
    ///
    /// Used only to detect providers that hand back the same node twice.
    fn identity(&self) -> Option<usize> {
        None
    }

    /// Immediate children in document order.
    fn children(&self) -> Children<Self> {
        Children {
            next: self.first_child(),
        }
    }
}

/// Iterator over a node's children, following `next_sibling` links.
#[derive(Debug, Clone)]
pub struct Children<N> {
    next: Option<N>,
}

impl<N: MarkupNode> Iterator for Children<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let node = self.next.take()?;
        self.next = node.next_sibling();
        Some(node)
    }
}
