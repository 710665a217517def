//! The recursive markup walk.
//!
//! Style flags travel down the recursion by value; runs travel into a
//! [`RunBuilder`]; errors travel up and collect the names of the nodes they
//! pass through.

use std::collections::HashSet;

use log::trace;

use crate::error::{ConversionError, ConversionErrorKind};
use crate::markup::{MarkupNode, NodeKind, is_element};
use crate::numbering::ListNumberer;
use crate::runs::{OutputSequence, RunBuilder};
use crate::style::StyleState;
use crate::uri::{UriResolver, UrlResolver};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Deepest node allowed below the root (the root's children are depth 1).
    /// `None` walks any depth.
    pub max_depth: Option<usize>,
}

/// Converts markup trees into [`OutputSequence`]s.
///
/// A converter holds no per-conversion state, so one instance can serve many
/// conversions, including concurrent ones on different threads.
#[derive(Debug, Clone, Default)]
pub struct Converter<R = UrlResolver> {
    resolver: R,
    options: ConvertOptions,
}

impl Converter<UrlResolver> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: UriResolver> Converter<R> {
    pub fn with_resolver<R2: UriResolver>(self, resolver: R2) -> Converter<R2> {
        Converter {
            resolver,
            options: self.options,
        }
    }

    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    /// Converts the children of `root` into runs carrying `base`.
    ///
    /// `root` itself is a container and produces nothing of its own. The first
    /// error aborts the whole conversion.
    pub fn convert<N, S>(&self, root: &N, base: &S) -> Result<OutputSequence<S>, ConversionError>
    where
        N: MarkupNode,
        S: Clone,
    {
        let mut walk = Walk {
            resolver: &self.resolver,
            max_depth: self.options.max_depth,
            base,
            visited: HashSet::new(),
        };
        if let Some(id) = root.identity() {
            walk.visited.insert(id);
        }

        let mut out = RunBuilder::new();
        walk.children(root, StyleState::PLAIN, 0, &mut out)?;

        let seq = out.finish();
        trace!("converted <{}> into {} runs", root.name(), seq.len());
        Ok(seq)
    }
}

/// Converts with the default resolver and no depth limit.
pub fn convert<N, S>(root: &N, base: &S) -> Result<OutputSequence<S>, ConversionError>
where
    N: MarkupNode,
    S: Clone,
{
    Converter::new().convert(root, base)
}

struct Walk<'c, R, S> {
    resolver: &'c R,
    max_depth: Option<usize>,
    base: &'c S,
    visited: HashSet<usize>,
}

impl<R: UriResolver, S: Clone> Walk<'_, R, S> {
    const HREF: &'static str = "href";

    /// Walks each child of `parent`, which sits at `depth`.
    fn children<N: MarkupNode>(
        &mut self,
        parent: &N,
        state: StyleState,
        depth: usize,
        out: &mut RunBuilder<S>,
    ) -> Result<(), ConversionError> {
        for child in parent.children() {
            self.node(&child, state, depth + 1, out)
                .map_err(|e| e.within(parent.name()))?;
        }
        Ok(())
    }

    fn node<N: MarkupNode>(
        &mut self,
        node: &N,
        state: StyleState,
        depth: usize,
        out: &mut RunBuilder<S>,
    ) -> Result<(), ConversionError> {
        let name = node.name();

        if let Some(limit) = self.max_depth
            && depth > limit
        {
            return Err(ConversionError::at(
                name,
                ConversionErrorKind::DepthLimitExceeded(limit),
            ));
        }
        if let Some(id) = node.identity()
            && !self.visited.insert(id)
        {
            return Err(ConversionError::at(
                name,
                ConversionErrorKind::MalformedTree("node reached twice, the tree has a cycle".into()),
            ));
        }

        match NodeKind::of(name) {
            NodeKind::OrderedList | NodeKind::UnorderedList => self.list(node, state, depth, out),
            NodeKind::Link => self.link(node, state, depth, out),
            NodeKind::Strong => self.children(node, state.with_bold(), depth, out),
            NodeKind::Emphasis => self.children(node, state.with_italic(), depth, out),
            NodeKind::Text => {
                out.push_text(node.inner_text(), state, self.base.clone());
                Ok(())
            }
            NodeKind::Paragraph | NodeKind::Other => self.children(node, state, depth, out),
        }
    }

    /// Element children are items and get a marker; anything else between them
    /// is walked in place without one.
    fn list<N: MarkupNode>(
        &mut self,
        node: &N,
        state: StyleState,
        depth: usize,
        out: &mut RunBuilder<S>,
    ) -> Result<(), ConversionError> {
        let name = node.name();
        let mut markers = ListNumberer::compute(node).markers();

        for item in node.children() {
            if is_element(item.name()) {
                let marker = markers.next().ok_or_else(|| {
                    ConversionError::at(
                        name,
                        ConversionErrorKind::MalformedTree(
                            "list yielded more items than it was numbered for".into(),
                        ),
                    )
                })?;
                out.push_marker(marker, state, self.base.clone());
            }
            self.node(&item, state, depth + 1, out)
                .map_err(|e| e.within(name))?;
        }
        Ok(())
    }

    fn link<N: MarkupNode>(
        &mut self,
        node: &N,
        state: StyleState,
        depth: usize,
        out: &mut RunBuilder<S>,
    ) -> Result<(), ConversionError> {
        let name = node.name();
        let href = node.attribute(Self::HREF).ok_or_else(|| {
            ConversionError::at(name, ConversionErrorKind::MissingAttribute(Self::HREF))
        })?;
        let target = self.resolver.resolve(&href).map_err(|source| {
            ConversionError::at(
                name,
                ConversionErrorKind::InvalidUri {
                    href: href.to_string(),
                    source,
                },
            )
        })?;

        if state.in_hyperlink {
            trace!("flattening link to {target} inside another link");
            return self.children(node, state, depth, out);
        }

        let mut inner = RunBuilder::new();
        self.children(node, state.with_hyperlink(), depth, &mut inner)?;
        out.push_link(target, inner).map_err(|e| {
            ConversionError::at(name, ConversionErrorKind::MalformedTree(e.to_string()))
        })
    }
}
