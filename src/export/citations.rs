//! Citation back-reference tracking.
//!
//! Every `<sup src="...">` marker is one occurrence of a citation. Each
//! occurrence gets its own anchor so the references list can link back to
//! every place the source was used.

use std::collections::HashMap;

use crate::content::{Content, LinkTarget, Node};

/// A "jump back" link to one occurrence of a citation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackReference {
    /// 1-based occurrence number within the citation.
    pub number: usize,
    /// Anchor id stamped on the occurrence.
    pub anchor: String,
}

impl BackReference {
    /// Visible label, e.g. `↑2`.
    pub fn label(&self) -> String {
        format!("↑{}", self.number)
    }

    pub fn to_content(&self) -> Content {
        Node::text(self.label())
            .with_style("src")
            .with_link(LinkTarget::Internal(self.anchor.clone()))
            .into()
    }
}

/// Occurrences per citation id, for one export pass.
#[derive(Debug, Default)]
pub struct CitationTracker {
    occurrences: HashMap<String, Vec<BackReference>>,
    /// Citation ids in first-seen order.
    order: Vec<String>,
}

impl CitationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more occurrence of `citation_id` and return its anchor id.
    ///
    /// The n-th occurrence (0-based) is anchored at `{citation_id}_{n}`.
    pub fn register_occurrence(&mut self, citation_id: &str) -> String {
        let entries = match self.occurrences.get_mut(citation_id) {
            Some(entries) => entries,
            None => {
                self.order.push(citation_id.to_string());
                self.occurrences.entry(citation_id.to_string()).or_default()
            }
        };

        let index = entries.len();
        let anchor = format!("{citation_id}_{index}");
        entries.push(BackReference {
            number: index + 1,
            anchor: anchor.clone(),
        });
        anchor
    }

    /// Back-references recorded for a citation, in occurrence order.
    pub fn back_references(&self, citation_id: &str) -> &[BackReference] {
        self.occurrences
            .get(citation_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Cited ids in the order they were first encountered.
    pub fn cited_ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of distinct citations.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total occurrences across all citations.
    pub fn total_occurrences(&self) -> usize {
        self.occurrences.values().map(Vec::len).sum()
    }

    pub fn clear(&mut self) {
        self.occurrences.clear();
        self.order.clear();
    }
}
