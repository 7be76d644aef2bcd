//! Bibliography entries and the references section.

use serde::{Deserialize, Serialize};

use crate::content::{Body, Content, LinkTarget, Node, PageBreak, TocEntry};
use crate::error::Result;
use crate::locale::{Language, TextId};
use crate::style::MAIN_TOC;

use super::citations::{BackReference, CitationTracker};

/// One bibliography entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    /// Id that `<sup src="...">` markers refer to.
    pub id: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub creation_date: String,
    #[serde(default)]
    pub last_accessed: String,
    #[serde(default)]
    pub link: String,
}

impl Source {
    /// Citation text preceding the link: `author, title, created, accessed, `.
    pub fn citation(&self) -> String {
        format!(
            "{}, {}, {}, {}, ",
            self.author, self.title, self.creation_date, self.last_accessed
        )
    }
}

/// Read access to the document's bibliography.
pub trait SourceRegistry {
    /// All sources, in display order.
    fn sources(&self) -> &[Source];

    fn has_sources(&self) -> bool {
        !self.sources().is_empty()
    }

    fn source(&self, id: &str) -> Option<&Source> {
        self.sources().iter().find(|s| s.id == id)
    }
}

impl SourceRegistry for [Source] {
    fn sources(&self) -> &[Source] {
        self
    }
}

impl SourceRegistry for Vec<Source> {
    fn sources(&self) -> &[Source] {
        self
    }
}

/// An owned, ordered bibliography.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceList {
    sources: Vec<Source>,
}

impl SourceList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON array of sources.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn push(&mut self, source: Source) {
        self.sources.push(source);
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl SourceRegistry for SourceList {
    fn sources(&self) -> &[Source] {
        &self.sources
    }
}

impl From<Vec<Source>> for SourceList {
    fn from(sources: Vec<Source>) -> Self {
        Self { sources }
    }
}

impl FromIterator<Source> for SourceList {
    fn from_iter<I: IntoIterator<Item = Source>>(iter: I) -> Self {
        Self {
            sources: iter.into_iter().collect(),
        }
    }
}

/// Build the references section.
///
/// Returns `None` when the registry is empty. Each entry carries the source
/// id as its anchor, one back-reference per citation occurrence, the
/// citation text and the link. Cited ids missing from the registry are
/// listed after the known sources so their markers still have a target.
pub fn sources_section(
    registry: &(impl SourceRegistry + ?Sized),
    citations: &CitationTracker,
    language: Language,
) -> Option<Content> {
    if !registry.has_sources() {
        return None;
    }

    let heading = Node::text(language.text(TextId::Sources))
        .with_page_break(PageBreak::Before)
        .with_style("h1")
        .with_toc(TocEntry::new(MAIN_TOC).with_style("toc_h1"));

    let known = registry
        .sources()
        .iter()
        .map(|source| source_entry(source, citations));
    let unknown = citations
        .cited_ids()
        .filter(|id| registry.source(id).is_none())
        .map(|id| {
            log::warn!("citation {id:?} has no matching source");
            unknown_entry(id, citations, language)
        });
    let entries: Vec<Content> = known.chain(unknown).collect();

    Some(Content::Sequence(vec![
        heading.into(),
        Node::new(Body::Ordered(entries)).into(),
    ]))
}

fn back_links(id: &str, citations: &CitationTracker) -> Vec<Content> {
    citations
        .back_references(id)
        .iter()
        .map(BackReference::to_content)
        .collect()
}

fn source_entry(source: &Source, citations: &CitationTracker) -> Content {
    let mut parts = back_links(&source.id, citations);
    parts.push(Content::plain(source.citation()));
    parts.push(
        Node::text(source.link.as_str())
            .with_link(LinkTarget::External(source.link.clone()))
            .with_style("a")
            .into(),
    );
    Node::text(parts)
        .with_style("list")
        .with_id(source.id.as_str())
        .into()
}

fn unknown_entry(id: &str, citations: &CitationTracker, language: Language) -> Content {
    let mut parts = back_links(id, citations);
    parts.push(Content::plain(language.text(TextId::UnknownSource)));
    Node::text(parts).with_style("list").with_id(id).into()
}
