//! # docdown
//!
//! Turns rendered Markdown HTML into a print-ready document definition for
//! pdfmake-style typesetters.
//!
//! ## Features
//!
//! - Headings with stable anchors and a generated table of contents
//! - Numbered figures with captions and a list of figures
//! - Citation markers with back-references from the references section
//! - Task lists, tables with repeating headers, highlighted code
//! - English and German labels
//!
//! ## Quick Start
//!
//! ```
//! use docdown::{Exporter, Metadata, SourceList};
//!
//! let mut exporter = Exporter::default();
//! let doc = exporter
//!     .export_html(
//!         "<h1>Title</h1><p>Hello <b>world</b></p>",
//!         &Metadata::new("Notes"),
//!         &SourceList::new(),
//!     )
//!     .unwrap();
//!
//! let json = serde_json::to_value(&doc.content).unwrap();
//! assert_eq!(json[2]["id"], "h_title");
//! assert_eq!(json[3]["text"][1]["bold"], true);
//! ```
//!
//! ## Layout
//!
//! - [`dom`]: html5ever parsing into an arena tree
//! - [`content`]: the output model and its JSON shape
//! - [`export`]: the transform and the document assembler
//! - [`style`]: named styles, fonts, syntax-highlight classes
//! - [`locale`]: label strings and date formats

pub mod content;
pub mod dom;
pub mod error;
pub mod export;
pub mod locale;
pub mod style;
pub(crate) mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use content::{Content, DocumentDefinition, Node};
pub use error::{Error, Result};
pub use export::{
    ExportOptions, Exporter, JsonTypesetter, Metadata, OutputAction, Source, SourceList,
    SourceRegistry, Typesetter, export_html,
};
pub use locale::Language;
pub use util::caption_from_file_name;
