//! wasm bindings exposing article rendering to a JS host.
//!
//! The host (the content site) passes the raw article string and an optional
//! config object; blocks or rendered HTML come back as plain JS values.

use litemd_core::scan_blocks;
use litemd_html::{Options, render_article};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

/// Configuration accepted by the render functions.
///
/// Parsed leniently: `null`/`undefined` and unknown shapes fall back to
/// defaults, and camelCase keys from the JS side are accepted.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct RenderConfig {
    #[serde(default, alias = "enableHeadingIds")]
    pub enable_heading_ids: Option<bool>,
    #[serde(default, alias = "enableHeadingAutolinks")]
    pub enable_heading_autolinks: Option<bool>,
}

fn parse_config(config: JsValue) -> RenderConfig {
    if config.is_undefined() || config.is_null() {
        return RenderConfig::default();
    }
    serde_wasm_bindgen::from_value(config).unwrap_or_default()
}

fn build_options(cfg: &RenderConfig) -> Options {
    let defaults = Options::default();
    Options {
        enable_heading_ids: cfg.enable_heading_ids.unwrap_or(defaults.enable_heading_ids),
        enable_heading_autolinks: cfg
            .enable_heading_autolinks
            .unwrap_or(defaults.enable_heading_autolinks),
    }
}

/// Scans a document into its block sequence.
///
/// Returns an array of tagged block objects (`{ type: "heading", ... }`).
/// Never fails on malformed markdown; only serialization errors surface.
#[wasm_bindgen]
pub fn render_blocks(input: &str) -> Result<JsValue, JsError> {
    let blocks = scan_blocks(input);
    serde_wasm_bindgen::to_value(&blocks)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Renders a full article to `{ meta, html, headings }`.
#[wasm_bindgen]
pub fn render_html(input: &str, config: JsValue) -> Result<JsValue, JsError> {
    let cfg = parse_config(config);
    let options = build_options(&cfg);

    let output = render_article(input, &options)
        .map_err(|e| JsError::new(&format!("Frontmatter error: {}", e)))?;

    serde_wasm_bindgen::to_value(&output)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
