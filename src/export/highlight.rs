//! Syntax-highlighted code mapping.
//!
//! Walks the span tree highlight.js produces inside `<code>` and turns every
//! leaf into a styled run named after its highlight class.

use crate::content::{Content, Node};
use crate::dom::{Dom, NodeId, NodeRef};
use crate::style::first_syntax_style;

use super::collect::map_present;

const FALLBACK_STYLE: &str = "code";

/// Map one node of a highlighted code tree.
///
/// Leaf elements become `{text, style}` runs. Text nodes borrow the first
/// highlight class of their parent. Nested spans yield sequences, which
/// [`flatten_runs`] removes.
pub fn map_syntax(dom: &Dom, id: NodeId) -> Option<Content> {
    match dom.node(id) {
        NodeRef::Element(el) if el.is_childless() => {
            let style = first_syntax_style(el.classes()).unwrap_or(FALLBACK_STYLE);
            Some(Node::text(el.inner_text()).with_style(style).into())
        }
        NodeRef::Element(el) => Some(Content::Sequence(map_present(el.children(), |child| {
            map_syntax(dom, child)
        }))),
        NodeRef::Text("") => None,
        NodeRef::Text(text) => {
            let style = dom
                .parent(id)
                .and_then(|parent| first_syntax_style(dom.classes(parent)))
                .unwrap_or(FALLBACK_STYLE);
            Some(Node::text(text).with_style(style).into())
        }
        NodeRef::Other => None,
    }
}

/// Splice nested sequences into one flat run list.
pub fn flatten_runs(runs: Vec<Content>) -> Vec<Content> {
    let mut flat = Vec::with_capacity(runs.len());
    push_flat(runs, &mut flat);
    flat
}

fn push_flat(runs: Vec<Content>, out: &mut Vec<Content>) {
    for run in runs {
        match run {
            Content::Sequence(inner) => push_flat(inner, out),
            other => out.push(other),
        }
    }
}

/// Highlighted runs for every child of a `<code>` element, flattened.
pub fn highlight_children(dom: &Dom, code: NodeId) -> Vec<Content> {
    flatten_runs(map_present(dom.children(code), |child| map_syntax(dom, child)))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::dom::parse_html;

    fn highlight(html: &str) -> serde_json::Value {
        let dom = parse_html(html);
        let code = dom.find_by_tag("code").unwrap();
        serde_json::to_value(highlight_children(&dom, code)).unwrap()
    }

    #[test]
    fn test_spans_take_their_class() {
        assert_eq!(
            highlight(r#"<code class="language-rust"><span class="hljs-keyword">fn</span> main</code>"#),
            json!([
                {"text": "fn", "style": "hljs-keyword"},
                {"text": " main", "style": "code"},
            ])
        );
    }

    #[test]
    fn test_nested_spans_are_flattened() {
        assert_eq!(
            highlight(concat!(
                r#"<code><span class="hljs-function">"#,
                r#"<span class="hljs-keyword">def</span> "#,
                r#"<span class="hljs-title">f</span></span></code>"#,
            )),
            json!([
                {"text": "def", "style": "hljs-keyword"},
                {"text": " ", "style": "code"},
                {"text": "f", "style": "hljs-title"},
            ])
        );
    }

    #[test]
    fn test_text_inherits_parent_class() {
        assert_eq!(
            highlight(r#"<code><span class="hljs-string">"a<b>!</b>"</span></code>"#),
            json!([
                {"text": "\"a", "style": "hljs-string"},
                {"text": "!", "style": "code"},
                {"text": "\"", "style": "hljs-string"},
            ])
        );
    }

    #[test]
    fn test_flatten_runs() {
        let runs = vec![
            Content::plain("a"),
            Content::Sequence(vec![Content::Sequence(vec!["b".into()]), "c".into()]),
        ];
        assert_eq!(
            flatten_runs(runs),
            vec![Content::plain("a"), "b".into(), "c".into()]
        );
    }
}
