//! Typed views over arena nodes.
//!
//! The export pass never looks at `NodeData` directly. It asks for a
//! [`NodeRef`] and dispatches on the closed [`Tag`] set.

use super::arena::{Dom, NodeData, NodeId};

/// Element kinds the exporter distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag<'a> {
    /// `h1`-`h6`.
    Heading(u8),
    OrderedList,
    UnorderedList,
    ListItem,
    Pre,
    BlockQuote,
    Image,
    Table,
    TableRow,
    /// `th`.
    HeaderCell,
    /// `td`.
    DataCell,
    Anchor,
    Code,
    /// `b`, `strong`.
    Bold,
    /// `i`, `em`.
    Italic,
    /// `u`, `ins`.
    Underline,
    /// `s`, `del`, `strike`.
    Strike,
    Mark,
    Superscript,
    Subscript,
    LineBreak,
    Rule,
    Span,
    Paragraph,
    /// Anything else, by local name.
    Other(&'a str),
}

impl<'a> Tag<'a> {
    /// Classify an element by its lower-case local name.
    pub fn from_name(name: &'a str) -> Self {
        match name {
            "h1" => Tag::Heading(1),
            "h2" => Tag::Heading(2),
            "h3" => Tag::Heading(3),
            "h4" => Tag::Heading(4),
            "h5" => Tag::Heading(5),
            "h6" => Tag::Heading(6),
            "ol" => Tag::OrderedList,
            "ul" => Tag::UnorderedList,
            "li" => Tag::ListItem,
            "pre" => Tag::Pre,
            "blockquote" => Tag::BlockQuote,
            "img" => Tag::Image,
            "table" => Tag::Table,
            "tr" => Tag::TableRow,
            "th" => Tag::HeaderCell,
            "td" => Tag::DataCell,
            "a" => Tag::Anchor,
            "code" => Tag::Code,
            "b" | "strong" => Tag::Bold,
            "i" | "em" => Tag::Italic,
            "u" | "ins" => Tag::Underline,
            "s" | "del" | "strike" => Tag::Strike,
            "mark" => Tag::Mark,
            "sup" => Tag::Superscript,
            "sub" => Tag::Subscript,
            "br" => Tag::LineBreak,
            "hr" => Tag::Rule,
            "span" => Tag::Span,
            "p" => Tag::Paragraph,
            other => Tag::Other(other),
        }
    }

    /// True for `ol` and `ul`.
    pub fn is_list(self) -> bool {
        matches!(self, Tag::OrderedList | Tag::UnorderedList)
    }
}

/// A node seen through its category.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Element(ElementRef<'a>),
    Text(&'a str),
    /// Comments, doctypes, the document node, or a dangling id.
    Other,
}

impl Dom {
    /// View a node by category.
    pub fn node(&self, id: NodeId) -> NodeRef<'_> {
        match self.get(id).map(|n| &n.data) {
            Some(NodeData::Element { .. }) => NodeRef::Element(ElementRef { dom: self, id }),
            Some(NodeData::Text(text)) => NodeRef::Text(text),
            _ => NodeRef::Other,
        }
    }

    /// View a node as an element, if it is one.
    pub fn element(&self, id: NodeId) -> Option<ElementRef<'_>> {
        match self.node(id) {
            NodeRef::Element(el) => Some(el),
            _ => None,
        }
    }
}

/// Borrowed handle to an element node.
#[derive(Debug, Clone, Copy)]
pub struct ElementRef<'a> {
    dom: &'a Dom,
    id: NodeId,
}

impl<'a> ElementRef<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn dom(&self) -> &'a Dom {
        self.dom
    }

    /// Lower-case local name.
    pub fn name(&self) -> &'a str {
        self.dom.element_name(self.id).unwrap_or_default()
    }

    pub fn tag(&self) -> Tag<'a> {
        Tag::from_name(self.name())
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.dom.attr(self.id, name)
    }

    pub fn classes(&self) -> &'a [String] {
        self.dom.classes(self.id)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.dom.has_class(self.id, class)
    }

    /// All child nodes, text included.
    pub fn children(self) -> impl Iterator<Item = NodeId> + 'a {
        self.dom.children(self.id)
    }

    /// Element children only.
    pub fn element_children(self) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        let dom = self.dom;
        dom.element_children(self.id)
            .map(move |id| ElementRef { dom, id })
    }

    /// True if the element has no element children (text children don't count).
    pub fn is_childless(&self) -> bool {
        !self.dom.has_element_children(self.id)
    }

    pub fn inner_text(&self) -> String {
        self.dom.inner_text(self.id)
    }

    pub fn parent(&self) -> Option<ElementRef<'a>> {
        self.dom.parent(self.id).and_then(|id| self.dom.element(id))
    }
}
