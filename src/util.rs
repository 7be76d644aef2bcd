//! Small helpers shared across the export pipeline.

use std::borrow::Cow;

/// Points per centimeter (72 pt per inch, 2.54 cm per inch).
const POINTS_PER_CM: f32 = 72.0 / 2.54;

/// Convert a length in centimeters to typographic points.
pub fn centimeters_to_points(cm: f32) -> f32 {
    cm * POINTS_PER_CM
}

/// True if the string is empty or contains only whitespace.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Turn an image caption that is really a file name into readable text.
///
/// Renderers fall back to the file name when an image has no alt text, which
/// makes captions like `Figure 2: network_diagram-v2.png`. When the caption
/// has no spaces and ends in a short extension, the stem is used instead and
/// `_`/`-` separators become spaces. Anything else is returned trimmed.
///
/// ```
/// use docdown::caption_from_file_name;
///
/// assert_eq!(caption_from_file_name("network_diagram.png"), "network diagram");
/// assert_eq!(caption_from_file_name("A cat - on a mat"), "A cat - on a mat");
/// ```
pub fn caption_from_file_name(caption: &str) -> String {
    let caption = caption.trim();
    if caption.contains(char::is_whitespace) {
        return caption.to_string();
    }

    // Strip any directory part of a path or URL
    let name = caption.rsplit(['/', '\\']).next().unwrap_or(caption);

    let Some((stem, ext)) = name.rsplit_once('.') else {
        return caption.to_string();
    };
    let looks_like_extension =
        (1..=4).contains(&ext.len()) && ext.chars().all(|c| c.is_ascii_alphanumeric());
    if stem.is_empty() || !looks_like_extension {
        return caption.to_string();
    }

    stem.split(['_', '-'])
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode HTML bytes to a string.
///
/// UTF-8 is tried first (a BOM is handled by encoding_rs). Malformed input
/// is decoded with the hinted encoding if there is one, otherwise as
/// Windows-1252, so hand-saved exports from old editors still load.
pub fn decode_text<'a>(bytes: &'a [u8], hint_encoding: Option<&str>) -> Cow<'a, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);
    if !malformed {
        return result;
    }

    if let Some(name) = hint_encoding
        && let Some(encoding) = encoding_rs::Encoding::for_label(name.as_bytes())
    {
        let (result, _, _) = encoding.decode(bytes);
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Find the encoding named by a leading `<?xml ... encoding="..."?>` declaration.
///
/// Only the first 100 bytes are inspected.
pub fn extract_xml_encoding(bytes: &[u8]) -> Option<&str> {
    let prefix = &bytes[..bytes.len().min(100)];

    let xml_start = prefix.windows(5).position(|w| w == b"<?xml")?;
    let after_xml = &prefix[xml_start..];

    let enc_pos = after_xml
        .windows(9)
        .position(|w| w.eq_ignore_ascii_case(b"encoding="))?;
    let after_enc = &after_xml[enc_pos + 9..];

    let (&quote, rest) = after_enc.split_first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let value_end = rest.iter().position(|&b| b == quote)?;

    std::str::from_utf8(&rest[..value_end]).ok()
}
