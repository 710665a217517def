use std::borrow::Cow;

use roxmltree::NodeType;

use super::node::MarkupNode;

/// Parsed XML trees are the usual provider: card text is markdown rendered to
/// the HTML subset, which is well-formed XML.
impl<'a, 'input: 'a> MarkupNode for roxmltree::Node<'a, 'input> {
    fn name(&self) -> &str {
        match self.node_type() {
            NodeType::Root => "#document",
            NodeType::Element => self.tag_name().name(),
            NodeType::PI => "#pi",
            NodeType::Comment => "#comment",
            NodeType::Text => "#text",
        }
    }

    fn first_child(&self) -> Option<Self> {
        roxmltree::Node::first_child(self)
    }

    fn next_sibling(&self) -> Option<Self> {
        roxmltree::Node::next_sibling(self)
    }

    fn attribute(&self, name: &str) -> Option<Cow<'_, str>> {
        roxmltree::Node::attribute(self, name).map(Cow::Borrowed)
    }

    fn inner_text(&self) -> Cow<'_, str> {
        if self.is_text() {
            return Cow::Borrowed(self.text().unwrap_or_default());
        }
        self.descendants()
            .filter(|n| n.is_text())
            .filter_map(|n| n.text())
            .collect::<String>()
            .into()
    }

    fn identity(&self) -> Option<usize> {
        usize::try_from(self.id().get()).ok()
    }
}
