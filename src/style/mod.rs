//! Visual style definitions handed to the typesetting backend.
//!
//! The transformer only refers to styles by name. This module owns the
//! name → [`Style`] table, the default style, the font dictionary and the
//! per-level heading rules.

mod syntax;

pub use syntax::{first_syntax_style, syntax_style};

use std::collections::BTreeMap;

use serde::Serialize;

use crate::content::{Decoration, Margin, TocEntry};
use crate::error::{Error, Result};

/// Body text font family.
pub const BODY_FONT: &str = "NotoSans";
/// Monospace font family for code.
pub const CODE_FONT: &str = "JetBrainsMono";
/// Icon font family for check-box glyphs.
pub const ICON_FONT: &str = "FontAwesome";

/// TOC bucket for headings.
pub const MAIN_TOC: &str = "mainToc";
/// TOC bucket for figure captions.
pub const FIGURES_TOC: &str = "lof";

/// Dracula theme colors.
pub mod dracula {
    pub const BACKGROUND: &str = "#282a36";
    pub const FOREGROUND: &str = "#f8f8f2";
    pub const COMMENT: &str = "#6272a4";
    pub const CYAN: &str = "#8be9fd";
    pub const GREEN: &str = "#50fa7b";
    pub const ORANGE: &str = "#ffb86c";
    pub const PINK: &str = "#ff79c6";
    pub const PURPLE: &str = "#bd93f9";
    pub const RED: &str = "#ff5555";
    pub const YELLOW: &str = "#f1fa8c";
    pub const BLUE: &str = "#6d8cf0";
}

/// A named style's properties. Unset fields inherit from the default style.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italics: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoration: Option<Decoration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sup: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_leading_spaces: Option<bool>,
    /// Characters wrapped around the text, e.g. `("(", ")")`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<(String, String)>,
}

impl Style {
    fn sized(font_size: f32) -> Self {
        Self {
            font_size: Some(font_size),
            ..Self::default()
        }
    }

    fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    fn color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    fn margin(mut self, margin: Margin) -> Self {
        self.margin = Some(margin);
        self
    }

    fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

/// Style applied to every node before named styles.
pub fn default_style() -> Style {
    Style {
        font: Some(BODY_FONT.to_string()),
        font_size: Some(12.0),
        line_height: Some(1.2),
        color: Some("#000000".to_string()),
        margin: Some(Margin::Uniform(0.0)),
        ..Style::default()
    }
}

/// The full name → style table, syntax-highlight classes included.
///
/// A `BTreeMap` keeps serialized output stable between runs.
pub fn stylesheet() -> BTreeMap<String, Style> {
    let theme = dracula::BLUE;
    let heading_margin = Margin::Sides([0.0, 10.0, 0.0, 2.0]);
    let minor_heading_margin = Margin::Sides([0.0, 5.0, 0.0, 0.0]);

    let mut styles = BTreeMap::new();
    let mut add = |name: &str, style: Style| {
        styles.insert(name.to_string(), style);
    };

    add(
        "title",
        Style::sized(26.0).bold().color(theme).margin(heading_margin),
    );
    add(
        "h1",
        Style {
            line_height: Some(1.5),
            ..Style::sized(20.0).bold().margin(heading_margin)
        },
    );
    add("h2", Style::sized(16.0).bold().margin(heading_margin));
    add("h3", Style::sized(14.0).bold().margin(minor_heading_margin));
    add("h4", Style::sized(13.0).bold().margin(minor_heading_margin));
    add("h5", Style::sized(12.0).bold().margin(minor_heading_margin));
    add("h6", Style::sized(12.0).bold().margin(minor_heading_margin));
    add("toc_h1", Style::sized(16.0).bold());
    add("toc_h2", Style::sized(15.0).opacity(0.75));
    add("toc_h3", Style::sized(14.0).opacity(0.5));

    add("list", Style::default().margin(Margin::Sides([0.0, 2.0, 0.0, 2.0])));
    add(
        "blockquote",
        Style {
            italics: Some(true),
            ..Style::default()
                .color(dracula::COMMENT)
                .margin(Margin::Sides([20.0, 5.0, 20.0, 5.0]))
        },
    );
    add(
        "code",
        Style {
            font: Some(CODE_FONT.to_string()),
            line_height: Some(1.0),
            preserve_leading_spaces: Some(true),
            ..Style::default().color(dracula::BACKGROUND)
        },
    );
    add("image", Style::default().margin(Margin::Sides([0.0, 10.0, 0.0, 2.0])));
    add(
        "image_caption",
        Style::sized(10.0).opacity(0.5).margin(Margin::Sides([0.0, 0.0, 0.0, 10.0])),
    );
    add("th", Style::default().bold());
    add("td", Style::default());
    add(
        "a",
        Style {
            decoration: Some(Decoration::Underline),
            ..Style::default().color(theme)
        },
    );
    add("span", Style::default());
    add(
        "mark",
        Style {
            background: Some(dracula::YELLOW.to_string()),
            ..Style::default()
        },
    );
    add(
        "sup",
        Style {
            sup: Some(true),
            ..Style::default()
        },
    );
    add(
        "src",
        Style {
            sup: Some(true),
            separator: Some(("(".to_string(), ")".to_string())),
            ..Style::default().color(theme)
        },
    );
    add(
        "sub",
        Style {
            sub: Some(true),
            ..Style::default()
        },
    );
    add(
        "hidden",
        Style {
            color: Some("transparent".to_string()),
            font_size: Some(0.0),
            ..Style::default()
        },
    );
    add(
        "fontawesome",
        Style {
            font: Some(ICON_FONT.to_string()),
            ..Style::default()
        },
    );

    for (class, style) in syntax::syntax_styles() {
        add(class, style);
    }

    styles
}

/// Style name and TOC registration for a heading level.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingStyle {
    pub style: &'static str,
    /// Only levels 1-3 are listed in the table of contents.
    pub toc: Option<TocEntry>,
}

/// Look up the rules for `h1`-`h6`.
///
/// Any other level is a programming error on the caller's side and fails
/// the pass.
pub fn heading_style(level: u8) -> Result<HeadingStyle> {
    let entry = |toc_style: &str| TocEntry::new(MAIN_TOC).with_style(toc_style);
    let (style, toc) = match level {
        1 => ("h1", Some(entry("toc_h1"))),
        2 => (
            "h2",
            Some(entry("toc_h2").with_margin(Margin::Sides([20.0, 0.0, 0.0, 0.0]))),
        ),
        3 => (
            "h3",
            Some(entry("toc_h3").with_margin(Margin::Sides([40.0, 0.0, 0.0, 0.0]))),
        ),
        4 => ("h4", None),
        5 => ("h5", None),
        6 => ("h6", None),
        other => return Err(Error::InvalidHeadingLevel(other)),
    };
    Ok(HeadingStyle { style, toc })
}

/// Font files for one family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontFamily {
    pub normal: String,
    pub bold: String,
    pub italics: String,
    pub bolditalics: String,
}

impl FontFamily {
    fn from_prefix(dir: &str, prefix: &str) -> Self {
        let file = |variant: &str| format!("{dir}/{prefix}-{variant}.ttf");
        Self {
            normal: file("Regular"),
            bold: file("Bold"),
            italics: file("Italic"),
            bolditalics: file("BoldItalic"),
        }
    }
}

/// Font family name to font files.
pub type FontDictionary = BTreeMap<String, FontFamily>;

/// Font dictionary the backend loads before rendering.
pub fn fonts() -> FontDictionary {
    let icon = "font/FontAwesome/fa-solid-900.ttf".to_string();
    BTreeMap::from([
        (
            BODY_FONT.to_string(),
            FontFamily::from_prefix("font/Noto_Sans", "NotoSans"),
        ),
        (
            CODE_FONT.to_string(),
            FontFamily::from_prefix("font/JetBrainsMono", "JetBrainsMono"),
        ),
        (
            ICON_FONT.to_string(),
            FontFamily {
                normal: icon.clone(),
                bold: icon.clone(),
                italics: icon.clone(),
                bolditalics: icon,
            },
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels() {
        let h1 = heading_style(1).unwrap();
        assert_eq!(h1.style, "h1");
        let toc = h1.toc.unwrap();
        assert_eq!(toc.toc_item, MAIN_TOC);
        assert_eq!(toc.toc_style.as_deref(), Some("toc_h1"));
        assert_eq!(toc.toc_margin, None);

        let h3 = heading_style(3).unwrap();
        assert_eq!(
            h3.toc.unwrap().toc_margin,
            Some(Margin::Sides([40.0, 0.0, 0.0, 0.0]))
        );

        for level in 4..=6 {
            assert!(heading_style(level).unwrap().toc.is_none());
        }
    }

    #[test]
    fn test_invalid_heading_level() {
        assert!(matches!(heading_style(0), Err(Error::InvalidHeadingLevel(0))));
        assert!(matches!(heading_style(7), Err(Error::InvalidHeadingLevel(7))));
    }

    #[test]
    fn test_stylesheet_covers_emitted_names() {
        let styles = stylesheet();
        for name in [
            "title", "h1", "h2", "h3", "h4", "h5", "h6", "toc_h1", "toc_h2", "toc_h3", "list",
            "code", "blockquote", "image", "image_caption", "th", "td", "a", "span", "src",
            "sup", "sub", "mark", "hidden", "fontawesome", "hljs-keyword", "hljs-comment",
        ] {
            assert!(styles.contains_key(name), "missing style {name}");
        }
    }

    #[test]
    fn test_style_serialization_omits_unset() {
        let json = serde_json::to_value(&stylesheet()["src"]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "color": dracula::BLUE,
                "sup": true,
                "separator": ["(", ")"],
            })
        );
    }

    #[test]
    fn test_fonts_reference_every_family() {
        let fonts = fonts();
        assert_eq!(fonts.len(), 3);
        assert_eq!(
            fonts[CODE_FONT].bold,
            "font/JetBrainsMono/JetBrainsMono-Bold.ttf"
        );
    }
}
