use litemd_wasm::{render_blocks, render_html};
use serde::Deserialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[derive(Deserialize, Debug)]
struct ArticleResult {
    meta: Meta,
    html: String,
    headings: Vec<HeadingEntry>,
}

#[derive(Deserialize, Debug)]
struct Meta {
    title: Option<String>,
}

#[derive(Deserialize, Debug)]
struct HeadingEntry {
    level: u8,
    slug: String,
    text: String,
}

#[wasm_bindgen_test]
fn render_basic_article() {
    let source = "---\ntitle: My Post\n---\n## Intro\nSome **bold** text.";
    let result = render_html(source, JsValue::NULL).expect("render should succeed");

    let result: ArticleResult = serde_wasm_bindgen::from_value(result).expect("deserialize result");

    assert_eq!(result.meta.title.as_deref(), Some("My Post"));
    assert!(result.html.contains("<h2 id=\"intro\">Intro</h2>"));
    assert!(result.html.contains("<strong>bold</strong>"));

    assert_eq!(result.headings.len(), 1);
    assert_eq!(result.headings[0].level, 2);
    assert_eq!(result.headings[0].slug, "intro");
    assert_eq!(result.headings[0].text, "Intro");
}

#[wasm_bindgen_test]
fn camel_case_config_is_honored() {
    let source = "## Plain";
    let config = serde_wasm_bindgen::to_value(&serde_json::json!({
        "enableHeadingIds": false
    }))
    .unwrap();

    let result = render_html(source, config).expect("render should succeed");
    let result: ArticleResult = serde_wasm_bindgen::from_value(result).expect("deserialize result");

    assert_eq!(result.html, "<h2>Plain</h2>");
}

#[wasm_bindgen_test]
fn autolink_config_wraps_heading() {
    let source = "## Docs";
    let config = serde_wasm_bindgen::to_value(&serde_json::json!({
        "enableHeadingAutolinks": true
    }))
    .unwrap();

    let result = render_html(source, config).expect("render should succeed");
    let result: ArticleResult = serde_wasm_bindgen::from_value(result).expect("deserialize result");

    assert!(result.html.contains("<a href=\"#docs\">Docs</a>"));
}

#[wasm_bindgen_test]
fn blocks_are_tagged_objects() {
    let source = "## Title\n- one\n- two";
    let result = render_blocks(source).expect("scan should succeed");

    let blocks: Vec<serde_json::Value> =
        serde_wasm_bindgen::from_value(result).expect("deserialize blocks");

    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0]["type"], "heading");
    assert_eq!(blocks[0]["level"], 2);
    assert_eq!(blocks[1]["type"], "list");
    assert_eq!(blocks[1]["ordered"], false);
}

#[wasm_bindgen_test]
fn unterminated_frontmatter_errors() {
    let source = "---\ntitle: broken\n";
    assert!(render_html(source, JsValue::NULL).is_err());
}
