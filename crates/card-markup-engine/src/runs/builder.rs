use url::Url;

use super::marker::Marker;
use super::types::{LinkRun, OutputSequence, StyledRun, TextRun};
use crate::style::StyleState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("a link run cannot contain another link")]
pub struct NestedLinkError;

/// Accumulates runs in emission order.
///
/// A link is built by filling a separate builder with its children and handing
/// that builder to [`push_link`](Self::push_link).
#[derive(Debug, Clone)]
pub struct RunBuilder<S> {
    runs: Vec<StyledRun<S>>,
}

impl<S> Default for RunBuilder<S> {
    fn default() -> Self {
        Self { runs: Vec::new() }
    }
}

impl<S> RunBuilder<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_text(&mut self, text: impl Into<String>, state: StyleState, base: S) {
        self.runs
            .push(StyledRun::Text(TextRun::new(text, state, base)));
    }

    pub fn push_marker(&mut self, marker: Marker, state: StyleState, base: S) {
        self.push_text(marker.to_string(), state, base);
    }

    pub fn push_link(&mut self, target: Url, children: Self) -> Result<(), NestedLinkError> {
        if children.runs.iter().any(StyledRun::is_link) {
            return Err(NestedLinkError);
        }
        self.runs.push(StyledRun::Link(LinkRun {
            target,
            children: children.runs,
        }));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn finish(self) -> OutputSequence<S> {
        OutputSequence::new(self.runs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn url() -> Url {
        Url::parse("https://example.com/").unwrap()
    }

    #[test]
    fn runs_keep_push_order() {
        let mut builder = RunBuilder::new();
        builder.push_marker(Marker::Ordinal(3), StyleState::PLAIN.with_bold(), 7u8);
        builder.push_text("", StyleState::PLAIN, 7u8);

        let seq = builder.finish();
        let texts: Vec<&str> = seq.text_runs().iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["\n3. ", ""]);
        assert!(seq.text_runs()[0].bold);
        assert_eq!(seq.text_runs()[1].base, 7);
    }

    #[test]
    fn link_takes_the_child_builder() {
        let mut children = RunBuilder::new();
        children.push_text("here", StyleState::PLAIN.with_hyperlink(), ());

        let mut builder = RunBuilder::new();
        builder.push_link(url(), children).unwrap();

        assert_eq!(builder.len(), 1);
        match &builder.finish().runs()[0] {
            StyledRun::Link(link) => {
                assert_eq!(link.target, url());
                assert_eq!(link.children.len(), 1);
            }
            StyledRun::Text(_) => panic!("expected a link run"),
        }
    }

    #[test]
    fn nested_links_are_rejected() {
        let mut inner = RunBuilder::<()>::new();
        inner.push_link(url(), RunBuilder::new()).unwrap();

        let mut outer = RunBuilder::new();
        assert_eq!(outer.push_link(url(), inner), Err(NestedLinkError));
        assert!(outer.is_empty());
    }
}
