//! Hand-off to the typesetting backend.

use std::io::Write;

use serde::Serialize;

use crate::content::DocumentDefinition;
use crate::error::Result;
use crate::style::FontDictionary;

/// What the backend should do with a finished definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputAction {
    /// Open the system print dialog.
    Print,
    /// Save as `{title}.pdf`.
    Download,
    /// Open in a new window.
    Open,
    /// Render only, e.g. for a preview pane.
    #[default]
    Render,
}

impl OutputAction {
    /// File name offered for downloads.
    pub fn file_name(title: &str) -> String {
        format!("{title}.pdf")
    }
}

/// A page-layout backend that consumes document definitions.
///
/// `fonts` names the files behind every font family the definition uses.
pub trait Typesetter {
    fn submit(
        &mut self,
        document: &DocumentDefinition,
        fonts: &FontDictionary,
        action: OutputAction,
    ) -> Result<()>;
}

/// JSON envelope: the definition's keys plus a top-level `fonts` table.
#[derive(Serialize)]
struct Submission<'a> {
    #[serde(flatten)]
    document: &'a DocumentDefinition,
    fonts: &'a FontDictionary,
}

/// Writes definitions as JSON for an out-of-process backend.
#[derive(Debug)]
pub struct JsonTypesetter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonTypesetter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Typesetter for JsonTypesetter<W> {
    fn submit(
        &mut self,
        document: &DocumentDefinition,
        fonts: &FontDictionary,
        action: OutputAction,
    ) -> Result<()> {
        log::debug!("writing document definition for {action:?}");
        let submission = Submission { document, fonts };
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &submission)?;
        } else {
            serde_json::to_writer(&mut self.writer, &submission)?;
        }
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
