//! Text-field pipeline: source text to markup tree to runs.

use log::warn;

use crate::error::ConversionError;
use crate::markdown;
use crate::runs::{OutputSequence, RunBuilder};
use crate::style::StyleState;
use crate::uri::UriResolver;
use crate::walker::Converter;

/// Element wrapped around a markup fragment so it parses as one document.
pub const ROOT: &str = "root";

/// Converts a markup fragment such as `<p>Hi <strong>there</strong></p>`.
///
/// Markup that is not well-formed XML is shown as a single plain run of the
/// original text rather than failing. Conversion errors (a link without
/// `href`, say) still fail.
pub fn render_markup<R, S>(
    markup: &str,
    base: &S,
    converter: &Converter<R>,
) -> Result<OutputSequence<S>, ConversionError>
where
    R: UriResolver,
    S: Clone,
{
    render_fragment(markup, markup, base, converter)
}

/// Converts markdown card text by way of [`markdown::to_markup`].
pub fn render_markdown<R, S>(
    text: &str,
    base: &S,
    converter: &Converter<R>,
) -> Result<OutputSequence<S>, ConversionError>
where
    R: UriResolver,
    S: Clone,
{
    render_fragment(&markdown::to_markup(text), text, base, converter)
}

fn render_fragment<R, S>(
    fragment: &str,
    source: &str,
    base: &S,
    converter: &Converter<R>,
) -> Result<OutputSequence<S>, ConversionError>
where
    R: UriResolver,
    S: Clone,
{
    let wrapped = format!("<{ROOT}>{fragment}</{ROOT}>");
    match roxmltree::Document::parse(&wrapped) {
        Ok(doc) => converter.convert(&doc.root_element(), base),
        Err(err) => {
            warn!("text is not well-formed markup ({err}), showing it as plain text");
            let mut out = RunBuilder::new();
            out.push_text(source, StyleState::PLAIN, base.clone());
            Ok(out.finish())
        }
    }
}
