//! Element → content mapping.
//!
//! [`Transformer`] walks the parsed region recursively and dispatches on
//! [`Tag`]. Every rule yields `Option<Content>`: nodes without renderable
//! content are dropped by the mapping combinators instead of leaving empty
//! placeholders behind. Figure numbers and citation anchors are recorded in
//! the shared [`ExportContext`] as the walk proceeds in document order.

use std::collections::BTreeMap;

use crate::content::{
    Alignment, Body, Content, Decoration, LinkTarget, ListType, Margin, Node, Shape, Table,
    TocEntry,
};
use crate::dom::{Dom, ElementRef, NodeId, NodeRef, Tag};
use crate::error::{Error, Result};
use crate::locale::TextId;
use crate::style::{CODE_FONT, FIGURES_TOC, heading_style};
use crate::util::{caption_from_file_name, is_blank};

use super::anchors::{heading_anchor, resolve_href};
use super::collect::{try_map_present, try_map_present_indexed};
use super::context::ExportContext;
use super::highlight::highlight_children;
use super::options::ExportOptions;

const RULE_COLOR: &str = "#BDBDBD";
const RULE_WIDTH: f32 = 0.5;
const ROW_COLORS: [&str; 2] = ["white", "#f2f2f2"];

/// Task-list marker on an `<li>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CheckMark {
    Checked,
    Unchecked,
}

impl CheckMark {
    fn of(item: &ElementRef<'_>) -> Option<Self> {
        if item.has_class("checked") {
            Some(CheckMark::Checked)
        } else if item.has_class("unchecked") {
            Some(CheckMark::Unchecked)
        } else {
            None
        }
    }

    /// Icon glyph followed by a separating space.
    fn icon(self) -> Vec<Content> {
        let glyph = match self {
            CheckMark::Checked => "\u{f14a}",
            CheckMark::Unchecked => "\u{f0c8}",
        };
        vec![
            Node::text(glyph).with_style("fontawesome").into(),
            Content::plain(" "),
        ]
    }

    /// Prepend the icon to `body` and suppress the bullet.
    fn apply(self, body: Content) -> Node {
        let mut parts = self.icon();
        parts.push(body);
        Node::text(parts).with_list_type(ListType::None)
    }
}

/// Recursive HTML → content transform for one export pass.
pub struct Transformer<'a> {
    dom: &'a Dom,
    ctx: &'a mut ExportContext,
    options: &'a ExportOptions,
}

impl<'a> Transformer<'a> {
    pub fn new(dom: &'a Dom, ctx: &'a mut ExportContext, options: &'a ExportOptions) -> Self {
        Self { dom, ctx, options }
    }

    /// Transform every child of `parent`, dropping absent results.
    pub fn transform_children(&mut self, parent: NodeId) -> Result<Vec<Content>> {
        let dom = self.dom;
        try_map_present(dom.children(parent), |child| self.transform(child))
    }

    /// Transform one node.
    pub fn transform(&mut self, id: NodeId) -> Result<Option<Content>> {
        let dom = self.dom;
        match dom.node(id) {
            NodeRef::Text("") | NodeRef::Other => Ok(None),
            NodeRef::Text(text) => Ok(Some(Content::plain(text))),
            NodeRef::Element(el) => self.element(el),
        }
    }

    fn element(&mut self, el: ElementRef<'a>) -> Result<Option<Content>> {
        let content = match el.tag() {
            Tag::Heading(level) => self.heading(el, level)?,
            Tag::OrderedList => return self.list(el, ListType::Ordered),
            Tag::UnorderedList => return self.list(el, ListType::Unordered),
            Tag::Pre => self.code_block(el, true)?,
            Tag::Code => self.code_block(el, false)?,
            Tag::BlockQuote => Node::text(el.inner_text()).with_style("blockquote").into(),
            Tag::Image => self.image(el),
            Tag::Table => self.table(el)?,
            Tag::Anchor => self.anchor(el)?,
            Tag::Bold => self.inline(el, Node::bold)?,
            Tag::Italic => self.inline(el, Node::italics)?,
            Tag::Underline => self.inline(el, |n| n.with_decoration(Decoration::Underline))?,
            Tag::Strike => self.inline(el, |n| n.with_decoration(Decoration::LineThrough))?,
            Tag::Mark => self.inline(el, |n| n.with_style("mark"))?,
            Tag::Superscript => self.superscript(el),
            Tag::Subscript => Node::text(el.inner_text()).with_style("sub").into(),
            Tag::LineBreak => Node::text("\n").into(),
            Tag::Rule => self.rule(),
            Tag::Other("script" | "style" | "template" | "noscript" | "head") => return Ok(None),
            _ => return self.fallback(el),
        };
        Ok(Some(content))
    }

    /// Flattened text when childless, transformed children otherwise.
    fn text_or_children(&mut self, el: ElementRef<'a>) -> Result<Content> {
        if el.is_childless() {
            Ok(Content::plain(el.inner_text()))
        } else {
            Ok(Content::Sequence(self.transform_children(el.id())?))
        }
    }

    fn heading(&mut self, el: ElementRef<'a>, level: u8) -> Result<Content> {
        let rule = heading_style(level)?;
        let text = self.text_or_children(el)?;
        let mut node = Node::text(text)
            .with_style(rule.style)
            .with_id(heading_anchor(&el.inner_text()));
        if let Some(toc) = rule.toc {
            node = node.with_toc(toc);
        }
        Ok(node.into())
    }

    fn list(&mut self, el: ElementRef<'a>, list_type: ListType) -> Result<Option<Content>> {
        if el.is_childless() {
            return Ok(None);
        }

        // Nested lists are keyed by their item's sibling index and spliced in
        // right after that item.
        let mut nested: BTreeMap<usize, Vec<Content>> = BTreeMap::new();
        let items = try_map_present_indexed(el.element_children(), |index, child| {
            if child.tag() != Tag::ListItem {
                return Ok(None);
            }
            self.list_item(child, index, &mut nested)
                .map(|item| Some((index, item)))
        })?;

        let mut entries = Vec::with_capacity(items.len());
        for (index, item) in items {
            entries.push(item);
            entries.extend(nested.remove(&index).unwrap_or_default());
        }

        let body = match list_type {
            ListType::Ordered => Body::Ordered(entries),
            _ => Body::Unordered(entries),
        };
        Ok(Some(
            Node::new(body)
                .with_style("list")
                .with_list_type(list_type)
                .into(),
        ))
    }

    fn list_item(
        &mut self,
        item: ElementRef<'a>,
        index: usize,
        nested: &mut BTreeMap<usize, Vec<Content>>,
    ) -> Result<Content> {
        let mark = CheckMark::of(&item);

        if item.is_childless() {
            let text = Content::plain(item.inner_text());
            return Ok(match mark {
                Some(mark) => mark.apply(text).into(),
                None => text,
            });
        }

        let dom = self.dom;
        let mut parts = try_map_present(item.children(), |child| match dom.node(child) {
            NodeRef::Text("") | NodeRef::Other => Ok(None),
            NodeRef::Text(text) => Ok(Some(Content::plain(text))),
            NodeRef::Element(el) => match el.tag() {
                Tag::Span | Tag::Paragraph => Ok(Some(Content::plain(el.inner_text()))),
                tag if tag.is_list() => {
                    if let Some(list) = self.transform(child)? {
                        nested.entry(index).or_default().push(list);
                    }
                    Ok(None)
                }
                _ => self.transform(child),
            },
        })?;

        let body = if parts.len() == 1 {
            parts.remove(0)
        } else {
            Content::Sequence(parts)
        };
        let node = match mark {
            Some(mark) => mark.apply(body),
            None => Node::text(body),
        };
        Ok(node.with_style("list").into())
    }

    /// `<pre>` and `<code>`.
    ///
    /// Childless blocks become one monospace leaf. A `<pre>` with children
    /// recurses; a `<code>` with children goes through the highlight mapper.
    fn code_block(&mut self, el: ElementRef<'a>, preformatted: bool) -> Result<Content> {
        if el.is_childless() {
            return Ok(Node::text(el.inner_text())
                .with_style("code")
                .with_font(CODE_FONT)
                .into());
        }
        if preformatted {
            Ok(Content::Sequence(self.transform_children(el.id())?))
        } else {
            Ok(Node::text(highlight_children(self.dom, el.id())).into())
        }
    }

    fn image(&mut self, el: ElementRef<'a>) -> Content {
        let number = self.ctx.figures.next();
        match self.figure(el, number) {
            Ok(figure) => figure,
            Err(err) => {
                log::warn!("figure {number}: falling back to alt text: {err}");
                Node::text(el.attr("alt").unwrap_or_default())
                    .with_style("span")
                    .into()
            }
        }
    }

    fn figure(&self, el: ElementRef<'a>, number: usize) -> Result<Content> {
        let src = el
            .attr("src")
            .filter(|src| !is_blank(src))
            .ok_or(Error::MissingAttribute {
                element: "img",
                attribute: "src",
            })?;

        let caption = figure_caption(el.attr("alt"), el.attr("title"));
        let label = format!(
            "{} {number}: {}",
            self.options.language.text(TextId::Figure),
            caption_from_file_name(&caption)
        );

        Ok(Content::Sequence(vec![
            Node::new(Body::Image(src.to_string()))
                .with_style("image")
                .with_width(self.options.content_width)
                .into(),
            Node::text(label)
                .with_style("image_caption")
                .with_toc(TocEntry::new(FIGURES_TOC))
                .into(),
        ]))
    }

    fn table(&mut self, el: ElementRef<'a>) -> Result<Content> {
        let mut body: Vec<Vec<Content>> = Vec::new();
        let mut header_rows = 0;

        for (row_index, row) in table_rows(el).into_iter().enumerate() {
            let fill = ROW_COLORS[row_index % 2];
            let mut is_header = false;
            let cells: Vec<Content> = try_map_present(row.element_children(), |cell| {
                match cell.tag() {
                    Tag::HeaderCell => is_header = true,
                    Tag::DataCell => {}
                    _ => return Ok(None),
                }
                self.text_or_children(cell).map(|content| {
                    Some(
                        Node::text(content)
                            .with_style(cell.name().to_lowercase())
                            .with_alignment(Alignment::Left)
                            .with_fill_color(fill)
                            .into(),
                    )
                })
            })?;

            if is_header {
                header_rows += 1;
            }
            body.push(cells);
        }

        Ok(Node::new(Body::Table(Table::new(body, header_rows))).into())
    }

    fn anchor(&mut self, el: ElementRef<'a>) -> Result<Content> {
        if !el.is_childless() {
            return Ok(Content::Sequence(self.transform_children(el.id())?));
        }
        let mut node = Node::text(el.inner_text()).with_style("a");
        if let Some(href) = el.attr("href") {
            node = node.with_link(resolve_href(href, self.options.page_origin.as_deref()));
        }
        Ok(node.into())
    }

    /// Bold, italic, underline, strike and mark: styled only at the leaf.
    fn inline(&mut self, el: ElementRef<'a>, apply: impl FnOnce(Node) -> Node) -> Result<Content> {
        if el.is_childless() {
            Ok(apply(Node::text(el.inner_text())).into())
        } else {
            Ok(Content::Sequence(self.transform_children(el.id())?))
        }
    }

    /// `<sup src="id">` is a citation marker; any other `<sup>` is plain.
    fn superscript(&mut self, el: ElementRef<'a>) -> Content {
        match el.attr("src").filter(|src| !is_blank(src)) {
            Some(citation) => {
                let anchor = self.ctx.citations.register_occurrence(citation);
                Node::text(el.inner_text())
                    .with_id(anchor)
                    .with_style("src")
                    .with_link(LinkTarget::Internal(citation.to_string()))
                    .into()
            }
            None => Node::text(el.inner_text()).with_style("sup").into(),
        }
    }

    fn rule(&self) -> Content {
        Node::new(Body::Canvas(vec![Shape::Line {
            x1: 0.0,
            y1: 0.0,
            x2: self.options.content_width,
            y2: 0.0,
            line_width: RULE_WIDTH,
            line_color: RULE_COLOR.to_string(),
        }]))
        .with_margin(Margin::Sides([0.0, 12.0, 0.0, 0.0]))
        .into()
    }

    fn fallback(&mut self, el: ElementRef<'a>) -> Result<Option<Content>> {
        if el.is_childless() {
            let text = el.inner_text();
            if is_blank(&text) {
                return Ok(None);
            }
            return Ok(Some(Node::text(text).into()));
        }

        let mut children = self.transform_children(el.id())?;
        Ok(match children.len() {
            0 => None,
            1 => children.pop(),
            _ => Some(Node::text(children).into()),
        })
    }
}

/// `alt - title` when both are set, otherwise whichever is.
fn figure_caption(alt: Option<&str>, title: Option<&str>) -> String {
    let alt = alt.filter(|s| !is_blank(s));
    let title = title.filter(|s| !is_blank(s));
    match (alt, title) {
        (Some(alt), Some(title)) => format!("{alt} - {title}"),
        (Some(text), None) | (None, Some(text)) => text.to_string(),
        (None, None) => String::new(),
    }
}

/// Rows of a table, looking through `thead`, `tbody` and `tfoot`.
fn table_rows<'a>(table: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    let mut rows = Vec::new();
    for child in table.element_children() {
        match child.tag() {
            Tag::TableRow => rows.push(child),
            Tag::Other("thead" | "tbody" | "tfoot") => rows.extend(
                child
                    .element_children()
                    .filter(|row| row.tag() == Tag::TableRow),
            ),
            _ => {}
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::dom::parse_html;
    use crate::locale::Language;

    fn run(html: &str, options: &ExportOptions) -> (Vec<Content>, ExportContext) {
        let dom = parse_html(html);
        let body = dom.region(None).unwrap();
        let mut ctx = ExportContext::default();
        let content = Transformer::new(&dom, &mut ctx, options)
            .transform_children(body)
            .unwrap();
        (content, ctx)
    }

    fn to_json(html: &str) -> Value {
        serde_json::to_value(run(html, &ExportOptions::default()).0).unwrap()
    }

    #[test]
    fn test_heading_registers_toc() {
        assert_eq!(
            to_json("<h2>Getting Started</h2>"),
            json!([{
                "text": "Getting Started",
                "style": "h2",
                "id": "h_getting_started",
                "tocItem": "mainToc",
                "tocStyle": "toc_h2",
                "tocMargin": [20.0, 0.0, 0.0, 0.0],
            }])
        );
    }

    #[test]
    fn test_deep_heading_has_no_toc() {
        assert_eq!(
            to_json("<h5>Detail <em>here</em></h5>"),
            json!([{
                "text": ["Detail ", {"text": "here", "italics": true}],
                "style": "h5",
                "id": "h_detail_here",
            }])
        );
    }

    #[test]
    fn test_paragraph_single_child_collapses() {
        assert_eq!(to_json("<p>Hello</p>"), json!([{"text": "Hello"}]));
        assert_eq!(
            to_json("<p>Hello <b>world</b></p>"),
            json!([{"text": ["Hello ", {"text": "world", "bold": true}]}])
        );
        assert_eq!(to_json("<div> </div>"), json!([]));
    }

    #[test]
    fn test_empty_list_is_dropped() {
        assert_eq!(to_json("<ul></ul><ol>\n</ol>"), json!([]));
    }

    #[test]
    fn test_plain_list() {
        assert_eq!(
            to_json("<ul><li>one</li><li>two</li></ul>"),
            json!([{"ul": ["one", "two"], "style": "list", "listType": "unordered"}])
        );
    }

    #[test]
    fn test_checkbox_items() {
        assert_eq!(
            to_json(r#"<ul><li class="checked">done</li><li class="unchecked">todo</li></ul>"#),
            json!([{
                "ul": [
                    {"text": [{"text": "\u{f14a}", "style": "fontawesome"}, " ", "done"], "listType": "none"},
                    {"text": [{"text": "\u{f0c8}", "style": "fontawesome"}, " ", "todo"], "listType": "none"},
                ],
                "style": "list",
                "listType": "unordered",
            }])
        );
    }

    #[test]
    fn test_nested_lists_spliced_after_their_item() {
        let html = concat!(
            "<ol><li>a<ul><li>a1</li></ul><ol><li>a2</li></ol></li>",
            "<li>b</li>",
            "<li><b>c</b><ul><li>c1</li></ul></li></ol>",
        );
        assert_eq!(
            to_json(html),
            json!([{
                "ol": [
                    {"text": "a", "style": "list"},
                    {"ul": ["a1"], "style": "list", "listType": "unordered"},
                    {"ol": ["a2"], "style": "list", "listType": "ordered"},
                    "b",
                    {"text": {"text": "c", "bold": true}, "style": "list"},
                    {"ul": ["c1"], "style": "list", "listType": "unordered"},
                ],
                "style": "list",
                "listType": "ordered",
            }])
        );
    }

    #[test]
    fn test_checked_item_with_children() {
        assert_eq!(
            to_json(r#"<ul><li class="checked"><p>ship it</p></li></ul>"#),
            json!([{
                "ul": [{
                    "text": [{"text": "\u{f14a}", "style": "fontawesome"}, " ", "ship it"],
                    "listType": "none",
                    "style": "list",
                }],
                "style": "list",
                "listType": "unordered",
            }])
        );
    }

    #[test]
    fn test_images_are_numbered() {
        let (content, ctx) = run(
            r#"<p><img src="a.png" alt="cat_photo.png"></p><img src="b.png" alt="Dog" title="good boy">"#,
            &ExportOptions::default(),
        );
        assert_eq!(ctx.figures.count(), 2);
        assert_eq!(
            serde_json::to_value(&content).unwrap(),
            json!([
                [
                    {"image": "a.png", "style": "image", "width": 434.0},
                    {"text": "Figure 1: cat photo", "style": "image_caption", "tocItem": "lof"},
                ],
                [
                    {"image": "b.png", "style": "image", "width": 434.0},
                    {"text": "Figure 2: Dog - good boy", "style": "image_caption", "tocItem": "lof"},
                ],
            ])
        );
    }

    #[test]
    fn test_image_without_source_falls_back() {
        let (content, ctx) = run(
            r#"<img alt="missing"><img src="x.png">"#,
            &ExportOptions::default().with_language(Language::De),
        );
        assert_eq!(ctx.figures.count(), 2);
        let value = serde_json::to_value(&content).unwrap();
        assert_eq!(value[0], json!({"text": "missing", "style": "span"}));
        assert_eq!(value[1][1]["text"], json!("Abbildung 2: "));
    }

    #[test]
    fn test_table_headers_and_stripes() {
        let html = concat!(
            "<table><thead><tr><th>Name</th><th>Qty</th></tr></thead>",
            "<tbody><tr><td>Apple</td><td>3</td></tr>",
            "<tr><th>Total</th><td>3</td></tr></tbody></table>",
        );
        let value = to_json(html);
        let table = &value[0]["table"];
        assert_eq!(table["headerRows"], json!(2));
        assert_eq!(table["keepWithHeaderRows"], json!(2));
        assert_eq!(table["dontBreakRows"], Value::Null);
        assert_eq!(
            table["body"][0][0],
            json!({"text": "Name", "style": "th", "alignment": "left", "fillColor": "white"})
        );
        assert_eq!(table["body"][1][1]["fillColor"], json!("#f2f2f2"));
        assert_eq!(table["body"][1][1]["style"], json!("td"));
        assert_eq!(table["body"][2][0]["fillColor"], json!("white"));
    }

    #[test]
    fn test_table_without_headers() {
        let value = to_json("<table><tr><td>x</td></tr></table>");
        assert_eq!(value[0]["table"]["dontBreakRows"], json!(true));
        assert_eq!(value[0]["table"]["headerRows"], Value::Null);
    }

    #[test]
    fn test_links() {
        let options = ExportOptions::default().with_page_origin("https://notes.example.com");
        let (content, _) = run(
            concat!(
                r##"<a href="#intro">Intro</a>"##,
                r#"<a href="https://notes.example.com/#setup">Setup</a>"#,
                r#"<a href="https://rust-lang.org">Rust</a>"#,
                r#"<a href="https://rust-lang.org"><b>bold</b></a>"#,
            ),
            &options,
        );
        assert_eq!(
            serde_json::to_value(&content).unwrap(),
            json!([
                {"text": "Intro", "style": "a", "linkToDestination": "h_intro"},
                {"text": "Setup", "style": "a", "linkToDestination": "h_setup"},
                {"text": "Rust", "style": "a", "link": "https://rust-lang.org"},
                [{"text": "bold", "bold": true}],
            ])
        );
    }

    #[test]
    fn test_code() {
        assert_eq!(
            to_json("<p><code>let x</code></p>"),
            json!([{"text": "let x", "style": "code", "font": "JetBrainsMono"}])
        );
        assert_eq!(
            to_json(r#"<pre><code class="language-rust"><span class="hljs-keyword">fn</span> f</code></pre>"#),
            json!([[{"text": [
                {"text": "fn", "style": "hljs-keyword"},
                {"text": " f", "style": "code"},
            ]}]])
        );
    }

    #[test]
    fn test_citations() {
        let (content, ctx) = run(
            r#"<p>A<sup src="knuth">1</sup> B<sup src="knuth">1</sup><sup>2</sup></p>"#,
            &ExportOptions::default(),
        );
        assert_eq!(ctx.citations.back_references("knuth").len(), 2);
        assert_eq!(
            serde_json::to_value(&content).unwrap(),
            json!([{"text": [
                "A",
                {"text": "1", "id": "knuth_0", "style": "src", "linkToDestination": "knuth"},
                " B",
                {"text": "1", "id": "knuth_1", "style": "src", "linkToDestination": "knuth"},
                {"text": "2", "style": "sup"},
            ]}])
        );
    }

    #[test]
    fn test_simple_leaves() {
        assert_eq!(
            to_json("<p>a<br>b<sub>2</sub><s>x</s><mark>m</mark></p>"),
            json!([{"text": [
                "a",
                {"text": "\n"},
                "b",
                {"text": "2", "style": "sub"},
                {"text": "x", "decoration": "lineThrough"},
                {"text": "m", "style": "mark"},
            ]}])
        );
        assert_eq!(
            to_json("<blockquote><p>wise <em>words</em></p></blockquote>"),
            json!([{"text": "wise words", "style": "blockquote"}])
        );
    }

    #[test]
    fn test_horizontal_rule() {
        assert_eq!(
            to_json("<hr>"),
            json!([{
                "canvas": [{
                    "type": "line", "x1": 0.0, "y1": 0.0, "x2": 434.0, "y2": 0.0,
                    "lineWidth": 0.5, "lineColor": "#BDBDBD",
                }],
                "margin": [0.0, 12.0, 0.0, 0.0],
            }])
        );
    }

    #[test]
    fn test_scripts_are_skipped() {
        assert_eq!(
            to_json("<p>x</p><script>alert(1)</script>"),
            json!([{"text": "x"}])
        );
    }

    #[test]
    fn test_figure_caption() {
        assert_eq!(figure_caption(Some("a"), Some("b")), "a - b");
        assert_eq!(figure_caption(None, Some("b")), "b");
        assert_eq!(figure_caption(Some("a"), Some(" ")), "a");
        assert_eq!(figure_caption(None, None), "");
    }
}
