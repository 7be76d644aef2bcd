//! Parsed hypertext input.
//!
//! The Markdown renderer hands over HTML. This module parses it with
//! html5ever into an arena tree and offers the typed views the export pass
//! dispatches on.
//!
//! ```
//! use docdown::dom::{parse_html, NodeRef, Tag};
//!
//! let dom = parse_html("<h1>Title</h1>");
//! let body = dom.region(None).unwrap();
//! let first = dom.children(body).next().unwrap();
//! match dom.node(first) {
//!     NodeRef::Element(el) => assert_eq!(el.tag(), Tag::Heading(1)),
//!     _ => unreachable!(),
//! }
//! ```

mod arena;
mod node_ref;
mod tree_sink;

pub use arena::{Attribute, Children, Dom, Node, NodeData, NodeId};
pub use node_ref::{ElementRef, NodeRef, Tag};
pub use tree_sink::{DomSink, NodeHandle};

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;

use crate::error::{Error, Result};

/// Parse an HTML document or fragment.
///
/// Fragments are fine: the parser wraps them in `html`/`body` the way a
/// browser does.
pub fn parse_html(html: &str) -> Dom {
    let sink = DomSink::new();
    parse_document(sink, ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes())
        .into_dom()
}

/// Parse HTML bytes, detecting the encoding first.
pub fn parse_html_bytes(html: &[u8]) -> Dom {
    let hint = crate::util::extract_xml_encoding(html);
    let text = crate::util::decode_text(html, hint);
    parse_html(&text)
}

impl Dom {
    /// Locate the content region whose children get exported.
    ///
    /// With `root_id`, the element carrying that id is required; its absence
    /// means the page was not set up for export at all. Without it, the
    /// `<body>` element is used (or the document node for exotic input).
    pub fn region(&self, root_id: Option<&str>) -> Result<NodeId> {
        match root_id {
            Some(id) => self
                .get_by_id(id)
                .ok_or_else(|| Error::MissingElement(format!("#{id}"))),
            None => Ok(self.find_by_tag("body").unwrap_or(self.document())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_defaults_to_body() {
        let dom = parse_html("<p>x</p>");
        let region = dom.region(None).unwrap();
        assert_eq!(dom.element_name(region), Some("body"));
    }

    #[test]
    fn test_region_by_id() {
        let dom = parse_html(r#"<nav>menu</nav><div id="display"><p>x</p></div>"#);
        let region = dom.region(Some("display")).unwrap();
        assert_eq!(dom.element_name(region), Some("div"));
        assert_eq!(dom.inner_text(region), "x");
    }

    #[test]
    fn test_missing_region_is_fatal() {
        let dom = parse_html("<p>x</p>");
        let err = dom.region(Some("display")).unwrap_err();
        assert!(matches!(err, Error::MissingElement(ref id) if id == "#display"));
    }

    #[test]
    fn test_parse_html_bytes_windows_1252() {
        let dom = parse_html_bytes(b"<p>Stra\xdfe</p>");
        let p = dom.find_by_tag("p").unwrap();
        assert_eq!(dom.inner_text(p), "Straße");
    }
}
