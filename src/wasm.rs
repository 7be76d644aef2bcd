//! WASM bindings for in-browser export.
//!
//! The page renders Markdown to HTML itself and passes the markup in; the
//! returned JSON goes straight to the JavaScript typesetter.

use wasm_bindgen::prelude::*;

use crate::dom::parse_html;
use crate::export::{ExportOptions, Exporter, JsonTypesetter, Metadata, OutputAction, SourceList};
use crate::locale::Language;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_js(err: crate::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Export rendered HTML to a JSON document definition with its `fonts` table.
///
/// `language` is a BCP 47 tag such as `navigator.language`. `sources_json`
/// is a JSON array of sources, or empty for none. The creation date is
/// taken from the browser clock.
#[wasm_bindgen]
pub fn export_html(
    html: &str,
    title: &str,
    author: Option<String>,
    language: &str,
    sources_json: &str,
) -> Result<String, JsValue> {
    let sources = if sources_json.trim().is_empty() {
        SourceList::new()
    } else {
        SourceList::from_json(sources_json).map_err(to_js)?
    };

    let mut metadata = Metadata::new(title);
    if let Some(author) = author {
        metadata = metadata.with_author(author);
    }

    let options = ExportOptions::default().with_language(Language::from_tag(language));
    let dom = parse_html(html);
    let mut typesetter = JsonTypesetter::new(Vec::new());
    Exporter::new(options)
        .export_to(&mut typesetter, OutputAction::Render, &dom, &metadata, &sources)
        .map_err(to_js)?;

    String::from_utf8(typesetter.into_inner())
        .map(|json| json.trim_end().to_string())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
