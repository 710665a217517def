/// The node names the walker gives meaning to.
///
/// Matching is exact and case-sensitive. Everything else is [`NodeKind::Other`]
/// and is walked as a transparent container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    OrderedList,
    UnorderedList,
    Paragraph,
    Link,
    Strong,
    Emphasis,
    Text,
    Other,
}

impl NodeKind {
    pub const ORDERED_LIST: &'static str = "ol";
    pub const UNORDERED_LIST: &'static str = "ul";
    pub const PARAGRAPH: &'static str = "p";
    pub const LINK: &'static str = "a";
    pub const STRONG: &'static str = "strong";
    pub const EMPHASIS: &'static str = "em";
    pub const TEXT: &'static str = "#text";

    pub fn of(name: &str) -> Self {
        match name {
            Self::ORDERED_LIST => Self::OrderedList,
            Self::UNORDERED_LIST => Self::UnorderedList,
            Self::PARAGRAPH => Self::Paragraph,
            Self::LINK => Self::Link,
            Self::STRONG => Self::Strong,
            Self::EMPHASIS => Self::Emphasis,
            Self::TEXT => Self::Text,
            _ => Self::Other,
        }
    }
}

/// Whether a node name denotes an element, as opposed to text, comments and
/// other `#`-prefixed pseudo-nodes.
pub fn is_element(name: &str) -> bool {
    !name.starts_with('#')
}
