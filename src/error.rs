//! Error types for docdown operations.

use thiserror::Error;

/// Errors that can occur while exporting a document.
///
/// Nodes that simply contribute nothing are not errors; the transformer
/// reports those as `None`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid heading level: {0} (expected 1-6)")]
    InvalidHeadingLevel(u8),

    #[error("Missing required element: {0}")]
    MissingElement(String),

    #[error("<{element}> is missing required attribute `{attribute}`")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    #[error("Language {0} not supported")]
    UnsupportedLanguage(String),
}

pub type Result<T> = std::result::Result<T, Error>;
