//! Syntax-highlight class table.
//!
//! highlight.js wraps tokens in `<span class="hljs-...">`. Each known class
//! becomes a named style in the stylesheet, so a highlighted span only has
//! to carry its class name as the style reference.

use super::{Style, dracula, CODE_FONT};

/// `(class, color, bold, italics)`
const TOKENS: &[(&str, Option<&str>, bool, bool)] = &[
    ("hljs-built_in", Some(dracula::CYAN), false, false),
    ("hljs-selector-tag", Some(dracula::CYAN), true, false),
    ("hljs-section", Some(dracula::CYAN), true, false),
    ("hljs-link", Some(dracula::CYAN), false, false),
    ("hljs-keyword", Some(dracula::PINK), true, false),
    ("hljs", Some(dracula::FOREGROUND), false, false),
    ("hljs-subst", Some(dracula::FOREGROUND), false, false),
    ("hljs-title", Some(dracula::GREEN), true, true),
    ("hljs-attr", Some(dracula::GREEN), false, true),
    ("hljs-attribute", Some(dracula::GREEN), false, true),
    ("hljs-meta-keyword", Some(dracula::GREEN), false, true),
    ("hljs-string", Some(dracula::YELLOW), false, false),
    ("hljs-meta", Some(dracula::YELLOW), false, false),
    ("hljs-name", Some(dracula::YELLOW), true, false),
    ("hljs-type", Some(dracula::YELLOW), true, false),
    ("hljs-symbol", Some(dracula::YELLOW), false, false),
    ("hljs-bullet", Some(dracula::YELLOW), false, false),
    ("hljs-addition", Some(dracula::YELLOW), false, false),
    ("hljs-variable", Some(dracula::YELLOW), false, false),
    ("hljs-template-tag", Some(dracula::YELLOW), false, false),
    ("hljs-template-variable", Some(dracula::YELLOW), false, false),
    ("hljs-comment", Some(dracula::COMMENT), false, false),
    ("hljs-quote", Some(dracula::COMMENT), false, false),
    ("hljs-deletion", Some(dracula::COMMENT), false, false),
    ("hljs-doctag", None, true, false),
    ("hljs-strong", None, true, false),
    ("hljs-literal", Some(dracula::PURPLE), true, false),
    ("hljs-number", Some(dracula::PURPLE), false, false),
    ("hljs-emphasis", None, false, true),
];

/// Style name for a highlight class, if the class is known.
pub fn syntax_style(class: &str) -> Option<&'static str> {
    TOKENS
        .iter()
        .find(|(name, ..)| *name == class)
        .map(|(name, ..)| *name)
}

/// First known highlight class in a class list.
pub fn first_syntax_style<S: AsRef<str>>(classes: &[S]) -> Option<&'static str> {
    classes.iter().find_map(|c| syntax_style(c.as_ref()))
}

/// Stylesheet entries for every highlight class, in the monospace font.
pub(super) fn syntax_styles() -> impl Iterator<Item = (&'static str, Style)> {
    TOKENS.iter().map(|&(class, color, bold, italics)| {
        let mut style = Style {
            font: Some(CODE_FONT.to_string()),
            color: color.map(str::to_string),
            ..Style::default()
        };
        if bold {
            style.bold = Some(true);
        }
        if italics {
            style.italics = Some(true);
        }
        (class, style)
    })
}
