use std::fmt::Write as _;

use serde::Serialize;
use url::Url;

use crate::style::StyleState;

/// A span of text in one resolved style.
///
/// `base` is the host's opaque text style, copied onto every run unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextRun<S> {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub in_hyperlink: bool,
    pub base: S,
}

impl<S> TextRun<S> {
    pub fn new(text: impl Into<String>, state: StyleState, base: S) -> Self {
        Self {
            text: text.into(),
            bold: state.bold,
            italic: state.italic,
            in_hyperlink: state.in_hyperlink,
            base,
        }
    }

    pub fn state(&self) -> StyleState {
        StyleState {
            bold: self.bold,
            italic: self.italic,
            in_hyperlink: self.in_hyperlink,
        }
    }
}

/// A hyperlink wrapping text runs. Never contains another link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRun<S> {
    pub target: Url,
    pub children: Vec<StyledRun<S>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum StyledRun<S> {
    Text(TextRun<S>),
    Link(LinkRun<S>),
}

impl<S> StyledRun<S> {
    pub fn is_link(&self) -> bool {
        matches!(self, Self::Link(_))
    }

    fn collect_text<'a>(&'a self, out: &mut Vec<&'a TextRun<S>>) {
        match self {
            Self::Text(run) => out.push(run),
            Self::Link(link) => link.children.iter().for_each(|c| c.collect_text(out)),
        }
    }
}

/// The result of converting one markup root, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OutputSequence<S> {
    runs: Vec<StyledRun<S>>,
}

impl<S> OutputSequence<S> {
    pub(crate) fn new(runs: Vec<StyledRun<S>>) -> Self {
        Self { runs }
    }

    pub fn runs(&self) -> &[StyledRun<S>] {
        &self.runs
    }

    pub fn into_runs(self) -> Vec<StyledRun<S>> {
        self.runs
    }

    /// Number of top-level runs; a link counts once.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Every text run, including those inside links, in document order.
    pub fn text_runs(&self) -> Vec<&TextRun<S>> {
        let mut out = Vec::new();
        for run in &self.runs {
            run.collect_text(&mut out);
        }
        out
    }

    /// The runs' text concatenated, as a host without rich text would show it.
    pub fn plain_text(&self) -> String {
        self.text_runs().iter().map(|r| r.text.as_str()).collect()
    }

    /// One line per run, links followed by their indented children.
    ///
    /// Text is shown `Debug`-quoted so markers' newlines stay on one line.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        for run in &self.runs {
            outline_run(&mut out, run, 0);
        }
        out.truncate(out.trim_end_matches('\n').len());
        out
    }
}

fn outline_run<S>(out: &mut String, run: &StyledRun<S>, indent: usize) {
    let pad = "  ".repeat(indent);
    match run {
        StyledRun::Text(text) => {
            let _ = write!(out, "{pad}text {:?}", text.text);
            for (set, flag) in [
                (text.bold, "bold"),
                (text.italic, "italic"),
                (text.in_hyperlink, "link"),
            ] {
                if set {
                    let _ = write!(out, " {flag}");
                }
            }
            out.push('\n');
        }
        StyledRun::Link(link) => {
            let _ = writeln!(out, "{pad}link {}", link.target);
            for child in &link.children {
                outline_run(out, child, indent + 1);
            }
        }
    }
}
