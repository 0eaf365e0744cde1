//! Repair of hand-written headers
//!
//! Headers are usually typed by hand and look like JavaScript object literals
//! rather than strict JSON. Two slips are tolerated:
//!
//! - a trailing comma right before a closing `}`
//! - unquoted keys, for the fixed set of [`KNOWN_KEYS`]
//!
//! Both passes skip string literals, so a value such as `"notes": "min: 3mm"`
//! is never rewritten. Line structure is kept intact so parser line numbers
//! still point into the original document.

use crate::model::KNOWN_KEYS;
use std::borrow::Cow;

/// Return the index just past the string literal starting at `start`
///
/// An unterminated string runs to the end of the input.
fn skip_string(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

fn skip_whitespace(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

/// Remove commas that are followed (after optional whitespace) by `}`
///
/// The whitespace itself is kept. Returns the input unchanged when there is
/// nothing to remove.
pub fn strip_trailing_commas(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let mut out: Option<String> = None;
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => i = skip_string(bytes, i),
            b',' => {
                let next = skip_whitespace(bytes, i + 1);
                if bytes.get(next) == Some(&b'}') {
                    let buf = out.get_or_insert_with(|| String::with_capacity(text.len()));
                    buf.push_str(&text[copied..i]);
                    copied = i + 1;
                }
                i += 1;
            }
            _ => i += 1,
        }
    }

    match out {
        None => Cow::Borrowed(text),
        Some(mut buf) => {
            buf.push_str(&text[copied..]);
            Cow::Owned(buf)
        }
    }
}

/// Wrap unquoted known keys in double quotes
///
/// Only an identifier that is one of [`KNOWN_KEYS`], stands outside any string
/// literal, and is followed by `:` (optionally after spaces) is rewritten.
/// Each key is rewritten at most once.
pub fn quote_known_keys(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len() + 2 * KNOWN_KEYS.len());
    let mut quoted = [false; KNOWN_KEYS.len()];
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b == b'"' {
            i = skip_string(bytes, i);
            continue;
        }
        let at_boundary = i == 0 || !is_ident_byte(bytes[i - 1]);
        if !(is_ident_start(b) && at_boundary) {
            i += 1;
            continue;
        }

        let mut end = i + 1;
        while end < bytes.len() && is_ident_byte(bytes[end]) {
            end += 1;
        }
        let ident = &text[i..end];
        let colon = skip_whitespace(bytes, end);

        if bytes.get(colon) == Some(&b':') {
            if let Some(slot) = KNOWN_KEYS.iter().position(|key| *key == ident) {
                if !quoted[slot] {
                    quoted[slot] = true;
                    out.push_str(&text[copied..i]);
                    out.push('"');
                    out.push_str(ident);
                    out.push('"');
                    copied = end;
                }
            }
        }
        i = end;
    }

    out.push_str(&text[copied..]);
    out
}
