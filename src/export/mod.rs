//! HTML → print document export.
//!
//! The [`Exporter`] turns a parsed HTML region into a
//! [`DocumentDefinition`]: a title block, a table of contents, the
//! transformed body, the references section and a list of figures, wrapped
//! in page setup and metadata.
//!
//! # Example
//!
//! ```
//! use chrono::DateTime;
//! use docdown::export::{Exporter, Metadata, SourceList};
//!
//! let created = DateTime::parse_from_rfc3339("2026-10-19T09:00:00+02:00").unwrap();
//! let meta = Metadata::new("Notes").with_author("Ada").with_created(created);
//!
//! let mut exporter = Exporter::default();
//! let doc = exporter
//!     .export_html("<h1>Intro</h1><p>Hello</p>", &meta, &SourceList::new())
//!     .unwrap();
//!
//! assert_eq!(doc.info.title, "Notes");
//! assert_eq!(doc.header.text, "Notes - 10/19/2026");
//! assert_eq!(doc.content.len(), 4);
//! ```
//!
//! Each call to [`Exporter::export`] is one isolated pass: the citation
//! tracker and figure counter are reset first. Passes take `&mut self`, so
//! two passes can never interleave on one exporter.

mod anchors;
mod citations;
mod collect;
mod context;
mod highlight;
mod options;
mod output;
mod sections;
mod sources;
mod transform;

pub use anchors::{ANCHOR_PREFIX, heading_anchor, resolve_href};
pub use citations::{BackReference, CitationTracker};
pub use collect::{map_present, map_present_indexed, try_map_present, try_map_present_indexed};
pub use context::{ExportContext, FigureCounter};
pub use highlight::{flatten_runs, map_syntax};
pub use options::{DEFAULT_CONTENT_WIDTH, ExportOptions};
pub use output::{JsonTypesetter, OutputAction, Typesetter};
pub use sources::{Source, SourceList, SourceRegistry, sources_section};
pub use transform::Transformer;

use chrono::{DateTime, FixedOffset, Local};

use crate::content::{
    Content, DocumentDefinition, DocumentInfo, Margin, PageFooter, PageOrientation, PageSize,
    Permissions, RunningHeader,
};
use crate::dom::{Dom, parse_html};
use crate::error::Result;
use crate::locale::{Language, TextId};
use crate::style::{default_style, fonts, stylesheet};
use crate::util::{centimeters_to_points, is_blank};

/// Who and what a document is.
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    pub title: String,
    pub author: Option<String>,
    /// Creation timestamp; fixed per export so repeated passes match.
    pub created: DateTime<FixedOffset>,
}

impl Metadata {
    /// Metadata stamped with the current local time.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: None,
            created: Local::now().fixed_offset(),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_created(mut self, created: DateTime<FixedOffset>) -> Self {
        self.created = created;
        self
    }

    /// Title, or the localized "Untitled" when blank.
    pub fn display_title(&self, language: Language) -> &str {
        if is_blank(&self.title) {
            language.text(TextId::Untitled)
        } else {
            &self.title
        }
    }

    /// Author, or the localized guest name when unset or blank.
    pub fn display_author(&self, language: Language) -> &str {
        self.author
            .as_deref()
            .filter(|author| !is_blank(author))
            .unwrap_or(language.text(TextId::GuestUser))
    }
}

/// Runs export passes with one configuration.
#[derive(Debug, Default)]
pub struct Exporter {
    options: ExportOptions,
    context: ExportContext,
}

impl Exporter {
    pub fn new(options: ExportOptions) -> Self {
        Self {
            options,
            context: ExportContext::default(),
        }
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Figures numbered by the last pass.
    pub fn figure_count(&self) -> usize {
        self.context.figures.count()
    }

    /// Citations recorded by the last pass.
    pub fn citations(&self) -> &CitationTracker {
        &self.context.citations
    }

    /// Run one export pass over a parsed document.
    pub fn export(
        &mut self,
        dom: &Dom,
        metadata: &Metadata,
        sources: &dyn SourceRegistry,
    ) -> Result<DocumentDefinition> {
        self.context.reset();

        let language = self.options.language;
        let region = dom.region(self.options.root_id.as_deref())?;
        let title = metadata.display_title(language);
        log::debug!("exporting {title:?} ({language})");

        let mut content = vec![
            sections::title(title),
            sections::table_of_contents(language),
        ];
        let body =
            Transformer::new(dom, &mut self.context, &self.options).transform_children(region)?;
        content.extend(body);

        if let Some(section) = sources_section(sources, &self.context.citations, language) {
            content.push(section);
        }
        if self.context.figures.count() > 0 {
            content.push(sections::table_of_figures(language));
        }

        log::debug!(
            "exported {} blocks, {} figures, {} citations ({} occurrences)",
            content.len(),
            self.context.figures.count(),
            self.context.citations.len(),
            self.context.citations.total_occurrences()
        );

        Ok(self.document(title, metadata, content))
    }

    /// Parse `html` and run one export pass over it.
    pub fn export_html(
        &mut self,
        html: &str,
        metadata: &Metadata,
        sources: &dyn SourceRegistry,
    ) -> Result<DocumentDefinition> {
        let dom = parse_html(html);
        self.export(&dom, metadata, sources)
    }

    /// Run one pass and hand the result to a typesetting backend.
    pub fn export_to(
        &mut self,
        typesetter: &mut dyn Typesetter,
        action: OutputAction,
        dom: &Dom,
        metadata: &Metadata,
        sources: &dyn SourceRegistry,
    ) -> Result<()> {
        let document = self.export(dom, metadata, sources)?;
        typesetter.submit(&document, &fonts(), action)
    }

    fn document(
        &self,
        title: &str,
        metadata: &Metadata,
        content: Vec<Content>,
    ) -> DocumentDefinition {
        let language = self.options.language;
        let author = metadata.display_author(language);

        let mut header_text = format!("{title} - {}", language.format_date(&metadata.created));
        if let Some(note) = self.options.header_note.as_deref() {
            header_text.push('\n');
            header_text.push_str(note);
        }

        DocumentDefinition {
            info: DocumentInfo {
                title: title.to_string(),
                subject: title.to_string(),
                author: author.to_string(),
                creator: author.to_string(),
                creation_date: metadata.created,
            },
            default_style: default_style(),
            styles: stylesheet(),
            page_size: PageSize::A4,
            page_orientation: PageOrientation::Portrait,
            page_margins: Margin::Axes([
                centimeters_to_points(3.5),
                centimeters_to_points(2.5),
            ]),
            header: RunningHeader {
                text: header_text,
                margin: Margin::Axes([
                    centimeters_to_points(3.5),
                    centimeters_to_points(0.5),
                ]),
                opacity: 0.5,
            },
            footer: PageFooter::default(),
            compress: true,
            images: Default::default(),
            permissions: Permissions::default(),
            content,
        }
    }
}

/// One-shot export with a fresh [`Exporter`].
pub fn export_html(
    html: &str,
    metadata: &Metadata,
    sources: &dyn SourceRegistry,
    options: ExportOptions,
) -> Result<DocumentDefinition> {
    Exporter::new(options).export_html(html, metadata, sources)
}
