//! The complete document definition handed to the typesetting backend.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use super::{Alignment, Content, Margin, Node};
use crate::style::Style;

/// Everything the backend needs to paginate and render one export.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDefinition {
    pub info: DocumentInfo,
    pub default_style: Style,
    pub styles: BTreeMap<String, Style>,
    pub page_size: PageSize,
    pub page_orientation: PageOrientation,
    pub page_margins: Margin,
    pub header: RunningHeader,
    pub footer: PageFooter,
    pub compress: bool,
    /// Named image resources; sources are inlined, so this stays empty.
    pub images: BTreeMap<String, String>,
    pub permissions: Permissions,
    pub content: Vec<Content>,
}

/// PDF metadata dictionary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    pub title: String,
    pub subject: String,
    pub author: String,
    pub creator: String,
    pub creation_date: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PageSize {
    #[default]
    A4,
    A5,
    #[serde(rename = "LETTER")]
    Letter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageOrientation {
    #[default]
    Portrait,
    Landscape,
}

/// Header repeated on every page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunningHeader {
    pub text: String,
    pub margin: Margin,
    pub opacity: f32,
}

/// Footer template; the backend fills in page numbers.
///
/// Serialized as a template string with `{currentPage}` and `{pageCount}`
/// placeholders, since a closure cannot cross the JSON boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageFooter {
    pub template: String,
    pub alignment: Alignment,
    pub margin: Margin,
    pub opacity: f32,
}

impl Default for PageFooter {
    fn default() -> Self {
        Self {
            template: "{currentPage}/{pageCount}".to_string(),
            alignment: Alignment::Right,
            margin: Margin::Axes([40.0, 20.0]),
            opacity: 0.5,
        }
    }
}

impl PageFooter {
    /// Render the footer for one page, e.g. `3/12`.
    pub fn render(&self, current_page: usize, page_count: usize) -> Content {
        let text = self
            .template
            .replace("{currentPage}", &current_page.to_string())
            .replace("{pageCount}", &page_count.to_string());
        Node::text(text)
            .with_alignment(self.alignment)
            .with_margin(self.margin)
            .into()
    }
}

/// What readers of the PDF may do with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    pub annotating: bool,
    pub content_accessibility: bool,
    pub document_assembly: bool,
    pub copying: bool,
    pub modifying: bool,
}

impl Default for Permissions {
    fn default() -> Self {
        Self {
            annotating: true,
            content_accessibility: true,
            document_assembly: true,
            copying: true,
            modifying: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_footer_render() {
        let footer = PageFooter::default();
        let page = footer.render(3, 12);
        assert_eq!(page.plain_text(), "3/12");
        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            json!({"text": "3/12", "alignment": "right", "margin": [40.0, 20.0]})
        );
    }

    #[test]
    fn test_permissions_serialize() {
        assert_eq!(
            serde_json::to_value(Permissions::default()).unwrap(),
            json!({
                "annotating": true,
                "contentAccessibility": true,
                "documentAssembly": true,
                "copying": true,
                "modifying": false,
            })
        );
    }

    #[test]
    fn test_page_setup_serialize() {
        assert_eq!(serde_json::to_value(PageSize::A4).unwrap(), json!("A4"));
        assert_eq!(
            serde_json::to_value(PageOrientation::Portrait).unwrap(),
            json!("portrait")
        );
    }
}
