//! Heading anchors and link resolution.

use crate::content::LinkTarget;

/// Prefix shared by every heading anchor.
pub const ANCHOR_PREFIX: &str = "h_";

/// Anchor id for a heading's visible text.
///
/// Lower-cases the text and replaces each whitespace run with one `_`.
/// Leading and trailing runs are kept, so `" A "` becomes `h__a_`.
///
/// ```
/// use docdown::export::heading_anchor;
///
/// assert_eq!(heading_anchor("Getting  Started"), "h_getting_started");
/// ```
pub fn heading_anchor(text: &str) -> String {
    let mut anchor = String::with_capacity(ANCHOR_PREFIX.len() + text.len());
    anchor.push_str(ANCHOR_PREFIX);

    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                anchor.push('_');
            }
            in_space = true;
        } else {
            anchor.extend(c.to_lowercase());
            in_space = false;
        }
    }
    anchor
}

/// Decide whether `href` points into this document.
///
/// Fragment-only hrefs and hrefs of the form `{origin}#frag` or
/// `{origin}/#frag` resolve to the heading anchor for the fragment.
/// Everything after the first `#` is the fragment, later `#`s included.
/// Anything else is an external link, kept verbatim.
pub fn resolve_href(href: &str, page_origin: Option<&str>) -> LinkTarget {
    let same_document = href.starts_with('#')
        || page_origin.is_some_and(|origin| {
            href.strip_prefix(origin)
                .is_some_and(|rest| rest.starts_with('#') || rest.starts_with("/#"))
        });

    match href.split_once('#') {
        Some((_, fragment)) if same_document => {
            LinkTarget::Internal(format!("{ANCHOR_PREFIX}{fragment}"))
        }
        _ => LinkTarget::External(href.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://notes.example.com";

    #[test]
    fn test_heading_anchor_collapses_whitespace() {
        assert_eq!(heading_anchor("Intro"), "h_intro");
        assert_eq!(heading_anchor("Über die\tLage"), "h_über_die_lage");
        assert_eq!(heading_anchor(" Padded "), "h__padded_");
        assert_eq!(heading_anchor(""), "h_");
    }

    #[test]
    fn test_fragment_only_is_internal() {
        assert_eq!(
            resolve_href("#intro", None),
            LinkTarget::Internal("h_intro".into())
        );
    }

    #[test]
    fn test_origin_fragments_are_internal() {
        assert_eq!(
            resolve_href("https://notes.example.com#intro", Some(ORIGIN)),
            LinkTarget::Internal("h_intro".into())
        );
        assert_eq!(
            resolve_href("https://notes.example.com/#a#b", Some(ORIGIN)),
            LinkTarget::Internal("h_a#b".into())
        );
    }

    #[test]
    fn test_other_pages_are_external() {
        assert_eq!(
            resolve_href("https://notes.example.com/page#intro", Some(ORIGIN)),
            LinkTarget::External("https://notes.example.com/page#intro".into())
        );
        assert_eq!(
            resolve_href("https://other.org/#x", Some(ORIGIN)),
            LinkTarget::External("https://other.org/#x".into())
        );
        assert_eq!(
            resolve_href("https://notes.example.com#intro", None),
            LinkTarget::External("https://notes.example.com#intro".into())
        );
    }
}
