//! Source line attribution for error highlighting

use crate::error::FALLBACK_LINE;

/// 1-based line of the first occurrence of `needle` in `text`
pub fn line_of(text: &str, needle: &str) -> Option<usize> {
    text.find(needle)
        .map(|offset| 1 + text[..offset].bytes().filter(|&b| b == b'\n').count())
}

/// 1-based line where `key` appears in the header text
///
/// Tries `"key":`, then `key:`, then a bare `key` substring.
pub fn find_key_line(header: &str, key: &str) -> Option<usize> {
    let quoted = format!("\"{}\":", key);
    let bare = format!("{}:", key);
    [quoted.as_str(), bare.as_str(), key]
        .into_iter()
        .find_map(|needle| line_of(header, needle))
}

/// Like [`find_key_line`], falling back to the first header content line
pub fn key_line(header: &str, key: &str) -> usize {
    find_key_line(header, key).unwrap_or(FALLBACK_LINE)
}
