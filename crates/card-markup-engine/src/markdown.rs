//! Markdown front end.
//!
//! Card text fields are authored in markdown. [`to_markup`] renders the
//! markdown to exactly the tag subset the walker understands, with no
//! whitespace between block tags, so the walker sees one text node per piece
//! of visible text.

use std::fmt::Write as _;

use html_escape::{encode_double_quoted_attribute, encode_text};
use pulldown_cmark::{Event, LinkType, Parser, Tag, TagEnd};

/// Renders markdown as a markup fragment using `p`, `ol`, `ul`, `li`,
/// `strong`, `em` and `a`.
///
/// Headings become paragraphs, images contribute their alt text, and raw HTML
/// in the source is escaped so it shows up as typed.
pub fn to_markup(markdown: &str) -> String {
    let mut out = String::with_capacity(markdown.len() + markdown.len() / 4);

    for event in Parser::new(markdown) {
        match event {
            Event::Start(tag) => open(&mut out, tag),
            Event::End(tag) => close(&mut out, tag),
            Event::Text(text)
            | Event::Code(text)
            | Event::Html(text)
            | Event::InlineHtml(text) => out.push_str(&encode_text(&*text)),
            Event::SoftBreak => out.push(' '),
            Event::HardBreak => out.push('\n'),
            _ => {}
        }
    }

    out
}

fn open(out: &mut String, tag: Tag<'_>) {
    match tag {
        Tag::Paragraph | Tag::Heading { .. } => out.push_str("<p>"),
        Tag::List(Some(1)) => out.push_str("<ol>"),
        Tag::List(Some(start)) => {
            let _ = write!(out, r#"<ol start="{start}">"#);
        }
        Tag::List(None) => out.push_str("<ul>"),
        Tag::Item => out.push_str("<li>"),
        Tag::Strong => out.push_str("<strong>"),
        Tag::Emphasis => out.push_str("<em>"),
        Tag::Link {
            link_type,
            dest_url,
            ..
        } => {
            // email autolinks carry the bare address
            let scheme = if link_type == LinkType::Email { "mailto:" } else { "" };
            let _ = write!(
                out,
                r#"<a href="{scheme}{}">"#,
                encode_double_quoted_attribute(&*dest_url)
            );
        }
        _ => {}
    }
}

fn close(out: &mut String, tag: TagEnd) {
    match tag {
        TagEnd::Paragraph | TagEnd::Heading(_) => out.push_str("</p>"),
        TagEnd::List(true) => out.push_str("</ol>"),
        TagEnd::List(false) => out.push_str("</ul>"),
        TagEnd::Item => out.push_str("</li>"),
        TagEnd::Strong => out.push_str("</strong>"),
        TagEnd::Emphasis => out.push_str("</em>"),
        TagEnd::Link => out.push_str("</a>"),
        _ => {}
    }
}
