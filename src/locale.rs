//! Localized strings used in exported documents.

use std::fmt;
use std::str::FromStr;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Supported output languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

/// Messages that appear in an exported document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextId {
    Sources,
    Figure,
    TableOfContents,
    TableOfFigures,
    Untitled,
    GuestUser,
    UnknownSource,
}

impl Language {
    /// Pick a language from a BCP 47 tag such as `de-AT`.
    ///
    /// Anything mentioning German gets German; everything else English.
    pub fn from_tag(tag: &str) -> Self {
        if tag.to_ascii_lowercase().contains("de") {
            Language::De
        } else {
            Language::En
        }
    }

    /// Parse an exact language code.
    pub fn parse(code: &str) -> Result<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "de" => Ok(Language::De),
            _ => Err(Error::UnsupportedLanguage(code.to_string())),
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }

    /// Look up a message.
    pub fn text(self, id: TextId) -> &'static str {
        match self {
            Language::En => match id {
                TextId::Sources => "References",
                TextId::Figure => "Figure",
                TextId::TableOfContents => "Table of contents",
                TextId::TableOfFigures => "Table of figures",
                TextId::Untitled => "Untitled",
                TextId::GuestUser => "Guest user",
                TextId::UnknownSource => "Unknown source",
            },
            Language::De => match id {
                TextId::Sources => "Einzelnachweise",
                TextId::Figure => "Abbildung",
                TextId::TableOfContents => "Inhaltsverzeichnis",
                TextId::TableOfFigures => "Abbildungsverzeichnis",
                TextId::Untitled => "Unbenannt",
                TextId::GuestUser => "Gastbenutzer",
                TextId::UnknownSource => "Quelle unbekannt",
            },
        }
    }

    /// Short numeric date as the language writes it (`10/19/2026`, `19.10.2026`).
    pub fn format_date<D: Datelike>(self, date: &D) -> String {
        match self {
            Language::En => format!("{}/{}/{}", date.month(), date.day(), date.year()),
            Language::De => format!("{}.{}.{}", date.day(), date.month(), date.year()),
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Language::parse(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(Language::from_tag("de-DE"), Language::De);
        assert_eq!(Language::from_tag("DE"), Language::De);
        assert_eq!(Language::from_tag("en-US"), Language::En);
        assert_eq!(Language::from_tag("fr"), Language::En);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!("de".parse::<Language>().unwrap(), Language::De);
        assert!(matches!(
            Language::parse("fr"),
            Err(Error::UnsupportedLanguage(code)) if code == "fr"
        ));
    }

    #[test]
    fn test_text_lookup() {
        assert_eq!(Language::En.text(TextId::Figure), "Figure");
        assert_eq!(Language::De.text(TextId::Sources), "Einzelnachweise");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(Language::En.format_date(&date), "3/7/2026");
        assert_eq!(Language::De.format_date(&date), "7.3.2026");
    }
}
