//! Fixed document sections around the transformed body.

use crate::content::{Body, Content, Node, PageBreak, TocBlock, TocEntry};
use crate::locale::{Language, TextId};
use crate::style::{FIGURES_TOC, MAIN_TOC};

/// Document title, followed by a blank line.
pub fn title(title: &str) -> Content {
    Node::text(format!("{title}\n")).with_style("title").into()
}

fn toc_block(id: &str, label: &str) -> Node {
    Node::new(Body::Toc(TocBlock {
        id: id.to_string(),
        title: Node::text(label).with_style("h1").into(),
    }))
}

/// Table of contents, on its own page.
pub fn table_of_contents(language: Language) -> Content {
    toc_block(MAIN_TOC, language.text(TextId::TableOfContents))
        .with_page_break(PageBreak::After)
        .into()
}

/// List of figures.
///
/// A hidden heading registers the list in the main table of contents, so it
/// shows up there at the same level as the `h1` sections.
pub fn table_of_figures(language: Language) -> Content {
    let label = language.text(TextId::TableOfFigures);
    Content::Sequence(vec![
        Node::text(label)
            .with_style("hidden")
            .with_toc(TocEntry::new(MAIN_TOC).with_style("toc_h1"))
            .into(),
        toc_block(FIGURES_TOC, label)
            .with_toc(TocEntry::new(MAIN_TOC))
            .into(),
    ])
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_title_adds_newline() {
        assert_eq!(
            serde_json::to_value(title("Notes")).unwrap(),
            json!({"text": "Notes\n", "style": "title"})
        );
    }

    #[test]
    fn test_table_of_contents() {
        assert_eq!(
            serde_json::to_value(table_of_contents(Language::De)).unwrap(),
            json!({
                "toc": {"id": "mainToc", "title": {"text": "Inhaltsverzeichnis", "style": "h1"}},
                "pageBreak": "after",
            })
        );
    }

    #[test]
    fn test_table_of_figures() {
        assert_eq!(
            serde_json::to_value(table_of_figures(Language::En)).unwrap(),
            json!([
                {
                    "text": "Table of figures",
                    "style": "hidden",
                    "tocItem": "mainToc",
                    "tocStyle": "toc_h1",
                },
                {
                    "toc": {"id": "lof", "title": {"text": "Table of figures", "style": "h1"}},
                    "tocItem": "mainToc",
                },
            ])
        );
    }
}
