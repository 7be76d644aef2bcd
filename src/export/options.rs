//! Export configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::locale::Language;

/// Printable width of an A4 page between the default margins, in points.
pub const DEFAULT_CONTENT_WIDTH: f32 = 434.0;

/// Knobs for one [`Exporter`](super::Exporter).
///
/// Deserializes from a JSON object with every field optional:
///
/// ```
/// use docdown::export::ExportOptions;
/// use docdown::locale::Language;
///
/// let options = ExportOptions::from_json(r#"{"language": "de", "root_id": "display"}"#).unwrap();
/// assert_eq!(options.language, Language::De);
/// assert_eq!(options.root_id.as_deref(), Some("display"));
/// assert_eq!(options.content_width, 434.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Language of generated labels and the header date.
    pub language: Language,
    /// Id of the element whose children are exported. `None` exports `<body>`.
    pub root_id: Option<String>,
    /// Origin of the page the HTML was rendered on, e.g. `https://notes.example.com`.
    /// Links to `{origin}#x` become internal.
    pub page_origin: Option<String>,
    /// Width of images and horizontal rules, in points.
    pub content_width: f32,
    /// Extra line under the running header.
    pub header_note: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            language: Language::default(),
            root_id: None,
            page_origin: None,
            content_width: DEFAULT_CONTENT_WIDTH,
            header_note: None,
        }
    }
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_root_id(mut self, root_id: impl Into<String>) -> Self {
        self.root_id = Some(root_id.into());
        self
    }

    pub fn with_page_origin(mut self, origin: impl Into<String>) -> Self {
        self.page_origin = Some(origin.into());
        self
    }

    pub fn with_content_width(mut self, width: f32) -> Self {
        self.content_width = width;
        self
    }

    pub fn with_header_note(mut self, note: impl Into<String>) -> Self {
        self.header_note = Some(note.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(ExportOptions::from_json("{}").unwrap(), ExportOptions::default());
    }

    #[test]
    fn test_unknown_language_rejected() {
        assert!(ExportOptions::from_json(r#"{"language": "fr"}"#).is_err());
    }

    #[test]
    fn test_builders() {
        let options = ExportOptions::new()
            .with_page_origin("https://a.example")
            .with_content_width(300.0)
            .with_header_note("draft");
        assert_eq!(options.page_origin.as_deref(), Some("https://a.example"));
        assert_eq!(options.content_width, 300.0);
        assert_eq!(options.header_note.as_deref(), Some("draft"));
    }
}
