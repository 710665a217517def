use std::collections::HashSet;

use log::debug;

use super::counter::SafeCounter;
use crate::markup::{MarkupNode, NodeKind, is_element};
use crate::runs::Marker;

/// Numbering decided for one list node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListContext {
    pub starting_ordinal: u64,
    pub is_ordered: bool,
}

impl ListContext {
    pub const DEFAULT_START: u64 = 1;

    pub const fn ordered(starting_ordinal: u64) -> Self {
        Self {
            starting_ordinal,
            is_ordered: true,
        }
    }

    pub const fn unordered() -> Self {
        Self {
            starting_ordinal: Self::DEFAULT_START,
            is_ordered: false,
        }
    }

    /// Markers for the list's items, in document order.
    ///
    /// Bullets never run out. Ordinals run out only past `u64::MAX`, which the
    /// overflow guard in [`ListNumberer::compute`] keeps out of reach for the
    /// item count it saw.
    pub fn markers(&self) -> Markers {
        Markers {
            ordinals: self
                .is_ordered
                .then(|| SafeCounter::starting_at(self.starting_ordinal)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Markers {
    ordinals: Option<SafeCounter>,
}

impl Iterator for Markers {
    type Item = Marker;

    fn next(&mut self) -> Option<Marker> {
        match &mut self.ordinals {
            None => Some(Marker::Bullet),
            Some(counter) => counter.advance().map(Marker::Ordinal),
        }
    }
}

pub struct ListNumberer;

impl ListNumberer {
    pub const START: &'static str = "start";

    /// Computes the numbering for `ol`/`ul` nodes.
    ///
    /// A `start` attribute that does not parse as `u64`, or that would push the
    /// last item's ordinal past `u64::MAX`, is ignored and numbering begins at 1.
    /// Unordered lists never look at `start`.
    pub fn compute<N: MarkupNode>(list_node: &N) -> ListContext {
        if NodeKind::of(list_node.name()) != NodeKind::OrderedList {
            return ListContext::unordered();
        }

        let Some(raw) = list_node.attribute(Self::START) else {
            return ListContext::ordered(ListContext::DEFAULT_START);
        };

        let Ok(start) = raw.trim().parse::<u64>() else {
            debug!("ignoring unparsable list start {raw:?}");
            return ListContext::ordered(ListContext::DEFAULT_START);
        };

        let items = element_child_count(list_node);
        if items > 0
            && !u64::try_from(items - 1).is_ok_and(|extra| SafeCounter::fits(start, extra))
        {
            debug!("list start {start} overflows across {items} items, numbering from 1");
            return ListContext::ordered(ListContext::DEFAULT_START);
        }

        ListContext::ordered(start)
    }
}

/// Number of immediate element children; stops early if the provider repeats a node.
pub fn element_child_count<N: MarkupNode>(node: &N) -> usize {
    let mut seen = HashSet::new();
    node.children()
        .take_while(|child| child.identity().is_none_or(|id| seen.insert(id)))
        .filter(|child| is_element(child.name()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn context_for(xml: &str) -> ListContext {
        let doc = roxmltree::Document::parse(xml).unwrap();
        ListNumberer::compute(&doc.root_element())
    }

    #[rstest]
    #[case(r#"<ol><li/><li/></ol>"#, 1)]
    #[case(r#"<ol start="5"><li/><li/></ol>"#, 5)]
    #[case(r#"<ol start="0"><li/></ol>"#, 0)]
    #[case(r#"<ol start=" 7 "><li/></ol>"#, 7)]
    #[case(r#"<ol start="abc"><li/></ol>"#, 1)]
    #[case(r#"<ol start="-3"><li/></ol>"#, 1)]
    #[case(r#"<ol start=""><li/></ol>"#, 1)]
    #[case(r#"<ol start="18446744073709551616"><li/></ol>"#, 1)]
    #[case(r#"<ol start="18446744073709551615"><li/></ol>"#, u64::MAX)]
    #[case(r#"<ol start="18446744073709551615"><li/><li/></ol>"#, 1)]
    #[case(r#"<ol start="18446744073709551614"><li/><li/></ol>"#, u64::MAX - 1)]
    #[case(r#"<ol start="18446744073709551614"><li/><li/><li/></ol>"#, 1)]
    #[case(r#"<ol start="18446744073709551615"></ol>"#, u64::MAX)]
    fn ordered_start(#[case] xml: &str, #[case] expected: u64) {
        assert_eq!(context_for(xml), ListContext::ordered(expected));
    }

    #[test]
    fn whitespace_between_items_is_not_counted() {
        let ctx = context_for("<ol start=\"18446744073709551614\">\n  <li/>\n  <li/>\n</ol>");
        assert_eq!(ctx.starting_ordinal, u64::MAX - 1);
    }

    #[test]
    fn unordered_lists_ignore_start() {
        assert_eq!(
            context_for(r#"<ul start="9"><li/></ul>"#),
            ListContext::unordered()
        );
    }

    #[test]
    fn markers_follow_the_context() {
        let ordered: Vec<Marker> = ListContext::ordered(5).markers().take(2).collect();
        assert_eq!(ordered, vec![Marker::Ordinal(5), Marker::Ordinal(6)]);

        let bullets: Vec<Marker> = ListContext::unordered().markers().take(3).collect();
        assert_eq!(bullets, vec![Marker::Bullet; 3]);
    }

    #[test]
    fn markers_stop_at_the_counter_limit() {
        let mut markers = ListContext::ordered(u64::MAX).markers();
        assert_eq!(markers.next(), Some(Marker::Ordinal(u64::MAX)));
        assert_eq!(markers.next(), None);
    }
}
