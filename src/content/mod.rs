//! Structured, print-ready document model.
//!
//! [`Content`] is what the export pass produces and what the typesetting
//! backend consumes. It serializes to the JSON shape pdfmake-style engines
//! understand: bare strings for plain text, arrays for sequences, and objects
//! keyed by their body (`text`, `ul`, `ol`, `table`, `image`, `canvas`,
//! `toc`) for everything else.
//!
//! ```
//! use docdown::content::{Content, Node};
//!
//! let para: Content = Node::text(vec![
//!     Content::plain("Hello "),
//!     Node::text("world").bold().into(),
//! ])
//! .into();
//!
//! assert_eq!(
//!     serde_json::to_string(&para).unwrap(),
//!     r#"{"text":["Hello ",{"text":"world","bold":true}]}"#
//! );
//! ```

mod document;

pub use document::{
    DocumentDefinition, DocumentInfo, PageFooter, PageOrientation, PageSize, Permissions,
    RunningHeader,
};

use serde::Serialize;

/// One unit of output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Content {
    /// Unstyled text leaf.
    Plain(String),
    /// Ordered run of content.
    Sequence(Vec<Content>),
    /// Any styled or structured node.
    Node(Box<Node>),
}

impl Content {
    pub fn plain(text: impl Into<String>) -> Self {
        Content::Plain(text.into())
    }

    /// The node, if this content is one.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Content::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Visible text, flattened.
    ///
    /// List items and table rows are separated by newlines, cells by tabs.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Content::Plain(text) => out.push_str(text),
            Content::Sequence(items) => items.iter().for_each(|c| c.collect_text(out)),
            Content::Node(node) => match &node.body {
                Body::Text(content) => content.collect_text(out),
                Body::Unordered(items) | Body::Ordered(items) => {
                    for (i, item) in items.iter().enumerate() {
                        if i > 0 {
                            out.push('\n');
                        }
                        item.collect_text(out);
                    }
                }
                Body::Table(table) => {
                    for (r, row) in table.body.iter().enumerate() {
                        if r > 0 {
                            out.push('\n');
                        }
                        for (c, cell) in row.iter().enumerate() {
                            if c > 0 {
                                out.push('\t');
                            }
                            cell.collect_text(out);
                        }
                    }
                }
                Body::Toc(toc) => toc.title.collect_text(out),
                Body::Image(_) | Body::Canvas(_) => {}
            },
        }
    }
}

impl From<Node> for Content {
    fn from(node: Node) -> Self {
        Content::Node(Box::new(node))
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Plain(text)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Plain(text.to_string())
    }
}

impl From<Vec<Content>> for Content {
    fn from(items: Vec<Content>) -> Self {
        Content::Sequence(items)
    }
}

/// A structured node: a body plus optional attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    #[serde(flatten)]
    pub body: Body,
    #[serde(flatten)]
    pub attrs: Attrs,
}

/// What a node holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Body {
    /// Text run or paragraph.
    #[serde(rename = "text")]
    Text(Content),
    #[serde(rename = "ul")]
    Unordered(Vec<Content>),
    #[serde(rename = "ol")]
    Ordered(Vec<Content>),
    #[serde(rename = "table")]
    Table(Table),
    /// Image source (URL or data URL).
    #[serde(rename = "image")]
    Image(String),
    #[serde(rename = "canvas")]
    Canvas(Vec<Shape>),
    #[serde(rename = "toc")]
    Toc(TocBlock),
}

/// Optional per-node attributes. Unset fields are not serialized.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attrs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(flatten)]
    pub link: Option<LinkTarget>,
    #[serde(flatten)]
    pub toc: Option<TocEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italics: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoration: Option<Decoration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_type: Option<ListType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_break: Option<PageBreak>,
}

/// Where a link points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LinkTarget {
    /// External URL.
    #[serde(rename = "link")]
    External(String),
    /// Anchor id inside the document.
    #[serde(rename = "linkToDestination")]
    Internal(String),
}

/// Registration of a node in a table-of-contents bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TocEntry {
    /// Bucket id (`mainToc`, `lof`).
    pub toc_item: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toc_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toc_margin: Option<Margin>,
}

impl TocEntry {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            toc_item: bucket.into(),
            toc_style: None,
            toc_margin: None,
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.toc_style = Some(style.into());
        self
    }

    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.toc_margin = Some(margin);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Decoration {
    Underline,
    LineThrough,
}

/// List marker override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    /// No bullet (check-box items).
    None,
    Ordered,
    Unordered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageBreak {
    Before,
    After,
}

/// Margin in points: uniform, `[horizontal, vertical]`, or `[left, top, right, bottom]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Margin {
    Uniform(f32),
    Axes([f32; 2]),
    Sides([f32; 4]),
}

/// Table body and page-break behaviour.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub widths: String,
    pub body: Vec<Vec<Content>>,
    /// Rows repeated on every page the table spans.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_rows: Option<usize>,
    /// Rows kept on the same page as the header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_with_header_rows: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dont_break_rows: Option<bool>,
}

impl Table {
    /// Build a table with auto column widths.
    ///
    /// With header rows the header repeats across page breaks and is kept
    /// together; without any, rows are never split across pages.
    pub fn new(body: Vec<Vec<Content>>, header_rows: usize) -> Self {
        let widths = "auto".to_string();
        if header_rows > 0 {
            Self {
                widths,
                body,
                header_rows: Some(header_rows),
                keep_with_header_rows: Some(header_rows),
                dont_break_rows: None,
            }
        } else {
            Self {
                widths,
                body,
                header_rows: None,
                keep_with_header_rows: None,
                dont_break_rows: Some(true),
            }
        }
    }
}

/// Vector drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        #[serde(rename = "lineWidth")]
        line_width: f32,
        #[serde(rename = "lineColor")]
        line_color: String,
    },
}

/// Placeholder the backend expands into a page-numbered index of one bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TocBlock {
    pub id: String,
    pub title: Content,
}

impl Node {
    pub fn new(body: Body) -> Self {
        Self {
            body,
            attrs: Attrs::default(),
        }
    }

    /// A text node.
    pub fn text(content: impl Into<Content>) -> Self {
        Self::new(Body::Text(content.into()))
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.attrs.style = Some(style.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.attrs.id = Some(id.into());
        self
    }

    pub fn with_link(mut self, link: LinkTarget) -> Self {
        self.attrs.link = Some(link);
        self
    }

    pub fn with_toc(mut self, toc: TocEntry) -> Self {
        self.attrs.toc = Some(toc);
        self
    }

    pub fn bold(mut self) -> Self {
        self.attrs.bold = Some(true);
        self
    }

    pub fn italics(mut self) -> Self {
        self.attrs.italics = Some(true);
        self
    }

    pub fn with_decoration(mut self, decoration: Decoration) -> Self {
        self.attrs.decoration = Some(decoration);
        self
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.attrs.font = Some(font.into());
        self
    }

    pub fn with_list_type(mut self, list_type: ListType) -> Self {
        self.attrs.list_type = Some(list_type);
        self
    }

    pub fn with_fill_color(mut self, color: impl Into<String>) -> Self {
        self.attrs.fill_color = Some(color.into());
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.attrs.alignment = Some(alignment);
        self
    }

    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.attrs.margin = Some(margin);
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.attrs.width = Some(width);
        self
    }

    pub fn with_page_break(mut self, page_break: PageBreak) -> Self {
        self.attrs.page_break = Some(page_break);
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn to_json(content: &Content) -> serde_json::Value {
        serde_json::to_value(content).unwrap()
    }

    #[test]
    fn test_plain_and_sequence_serialize_bare() {
        let content = Content::Sequence(vec!["a".into(), Content::plain("b")]);
        assert_eq!(to_json(&content), json!(["a", "b"]));
    }

    #[test]
    fn test_heading_like_node() {
        let node: Content = Node::text("Intro")
            .with_style("h2")
            .with_id("h_intro")
            .with_toc(
                TocEntry::new("mainToc")
                    .with_style("toc_h2")
                    .with_margin(Margin::Sides([20.0, 0.0, 0.0, 0.0])),
            )
            .into();

        assert_eq!(
            to_json(&node),
            json!({
                "text": "Intro",
                "style": "h2",
                "id": "h_intro",
                "tocItem": "mainToc",
                "tocStyle": "toc_h2",
                "tocMargin": [20.0, 0.0, 0.0, 0.0],
            })
        );
    }

    #[test]
    fn test_links_use_distinct_keys() {
        let external: Content = Node::text("site")
            .with_link(LinkTarget::External("https://example.com".into()))
            .into();
        let internal: Content = Node::text("up")
            .with_link(LinkTarget::Internal("h_top".into()))
            .into();

        assert_eq!(
            to_json(&external),
            json!({"text": "site", "link": "https://example.com"})
        );
        assert_eq!(
            to_json(&internal),
            json!({"text": "up", "linkToDestination": "h_top"})
        );
    }

    #[test]
    fn test_list_and_table_bodies() {
        let list: Content = Node::new(Body::Ordered(vec!["one".into()]))
            .with_style("list")
            .with_list_type(ListType::Ordered)
            .into();
        assert_eq!(
            to_json(&list),
            json!({"ol": ["one"], "style": "list", "listType": "ordered"})
        );

        let table: Content = Node::new(Body::Table(Table::new(vec![vec!["x".into()]], 0))).into();
        assert_eq!(
            to_json(&table),
            json!({"table": {"widths": "auto", "body": [["x"]], "dontBreakRows": true}})
        );
    }

    #[test]
    fn test_table_with_header_rows() {
        let table = Table::new(vec![], 2);
        assert_eq!(table.header_rows, Some(2));
        assert_eq!(table.keep_with_header_rows, Some(2));
        assert_eq!(table.dont_break_rows, None);
    }

    #[test]
    fn test_canvas_line() {
        let rule: Content = Node::new(Body::Canvas(vec![Shape::Line {
            x1: 0.0,
            y1: 0.0,
            x2: 10.0,
            y2: 0.0,
            line_width: 0.5,
            line_color: "#BDBDBD".into(),
        }]))
        .into();

        assert_eq!(
            to_json(&rule),
            json!({"canvas": [{
                "type": "line", "x1": 0.0, "y1": 0.0, "x2": 10.0, "y2": 0.0,
                "lineWidth": 0.5, "lineColor": "#BDBDBD"
            }]})
        );
    }

    #[test]
    fn test_plain_text_flattens() {
        let list: Content = Node::new(Body::Unordered(vec![
            Node::text(vec![Content::plain("a"), Node::text("b").bold().into()]).into(),
            "c".into(),
        ]))
        .into();
        assert_eq!(list.plain_text(), "ab\nc");

        let table: Content = Node::new(Body::Table(Table::new(
            vec![vec!["h1".into(), "h2".into()], vec!["d1".into(), "d2".into()]],
            1,
        )))
        .into();
        assert_eq!(table.plain_text(), "h1\th2\nd1\td2");
    }
}
