use card_markup_engine::{Converter, render_markdown, render_markup};
use pretty_assertions::assert_eq;
use serde::Serialize;
use serde_json::json;

#[test]
fn fixture_card_body() {
    assert_markdown_fixture("card_body");
}

#[test]
fn fixture_lists() {
    assert_markdown_fixture("lists");
}

#[test]
fn fixture_numbering_overflow() {
    assert_markup_fixture("numbering_overflow");
}

#[test]
fn fixture_links() {
    assert_markup_fixture("links");
}

fn read_fixture(name: &str, ext: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.{ext}",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn assert_markdown_fixture(name: &str) {
    let md = read_fixture(name, "md");
    let seq = render_markdown(&md, &(), &Converter::new()).unwrap();
    insta::assert_snapshot!(name, seq.outline());
}

fn assert_markup_fixture(name: &str) {
    let markup = read_fixture(name, "xml");
    let seq = render_markup(markup.trim_end(), &(), &Converter::new()).unwrap();
    insta::assert_snapshot!(name, seq.outline());
}

/// Both front ends agree when the markdown renders to the same markup.
#[test]
fn markdown_and_markup_agree() {
    let converter = Converter::new();
    let from_md = render_markdown("a **b** [c](https://example.com/)", &(), &converter).unwrap();
    let from_markup = render_markup(
        r#"<p>a <strong>b</strong> <a href="https://example.com/">c</a></p>"#,
        &(),
        &converter,
    )
    .unwrap();
    assert_eq!(from_md, from_markup);
}

#[derive(Debug, Clone, Serialize)]
struct Body {
    font: &'static str,
}

#[test]
fn fixture_links_serializes_for_the_host() {
    let markup = read_fixture("links", "xml");
    let seq = render_markup(markup.trim_end(), &Body { font: "Inter" }, &Converter::new())
        .unwrap();

    let value = serde_json::to_value(&seq).unwrap();
    let runs = seq.into_runs();
    assert_eq!(value.as_array().map(Vec::len), Some(runs.len()));
    assert_eq!(
        value[0],
        json!({ "Text": {
            "text": "See ",
            "bold": false,
            "italic": false,
            "in_hyperlink": false,
            "base": { "font": "Inter" },
        }})
    );
    assert_eq!(
        value[3],
        json!({ "Link": {
            "target": "mailto:team@example.com",
            "children": [{ "Text": {
                "text": "mail",
                "bold": false,
                "italic": true,
                "in_hyperlink": true,
                "base": { "font": "Inter" },
            }}],
        }})
    );
    let first_link = serde_json::to_value(&runs[1]).unwrap();
    assert_eq!(first_link["Link"]["target"], "https://example.com/a");
}
