//! Canonical document writer
//!
//! Formatting a validated [`Document`] always yields the same text for the
//! same input, and formatting that text again reproduces it byte for byte.

pub mod formatter;

pub use formatter::CanonicalFormatter;

use crate::error::{Error, Result};
use crate::model::Document;
use serde::Serialize;

/// Serialize the header as canonical JSON, without the comment delimiters
pub fn header_json(document: &Document) -> Result<String> {
    let mut buf = Vec::with_capacity(256);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, CanonicalFormatter::new());
    document
        .serialize(&mut ser)
        .map_err(|e| Error::Format(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| Error::Format(e.to_string()))
}

/// Produce the canonical text of a document and its plaintext body
///
/// The result is `/*` + header JSON + `*/`, a newline, then `body` untouched.
pub fn format(document: &Document, body: &str) -> Result<String> {
    let header = header_json(document)?;
    let mut out = String::with_capacity(header.len() + body.len() + 5);
    out.push_str("/*");
    out.push_str(&header);
    out.push_str("*/\n");
    out.push_str(body);
    Ok(out)
}
