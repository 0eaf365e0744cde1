//! IRMF document parsing
//!
//! An IRMF document is a GLSL (or WGSL) shader whose first bytes are a
//! block comment holding a JSON header:
//!
//! ```text
//! /*{
//!   "irmf": "1.0",
//!   "materials": ["PLA"],
//!   "max": [5,5,5],
//!   "min": [-5,-5,-5],
//!   "units": "mm"
//! }*/
//! float sphere(in vec3 xyz) { ... }
//! ```
//!
//! Parsing splits the header from the body, parses the header (repairing
//! common hand-editing slips), decodes the body if it is stored compressed,
//! and finally validates the header into a [`Document`].

pub mod body;
pub mod repair;

use crate::error::{Error, Result};
use crate::model::{Document, Header, ParserConfig};
use crate::validator;
use std::borrow::Cow;
use std::io::Read;

/// Bytes every document must start with
pub const LEADING_DELIMITER: &[u8] = b"/*{";

/// The line ending the header: `}*/` on a line of its own
pub const HEADER_BOUNDARY: &[u8] = b"\n}*/\n";

/// Fragments searched, in order, to guess where an unterminated header ends
const TRAILING_HINTS: [&[u8]; 3] = [b"*/", b"}*", b"}"];

/// 1-based line number of a byte offset
fn line_at(src: &[u8], offset: usize) -> usize {
    1 + src[..offset].iter().filter(|&&b| b == b'\n').count()
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Best-effort line of a header end that is not on a line of its own
///
/// Only the first occurrence of each hint is considered, and only when it
/// lies past line 2; otherwise the error points at line 1.
fn trailing_delimiter_line(src: &[u8]) -> usize {
    TRAILING_HINTS
        .iter()
        .filter_map(|hint| find(src, hint))
        .map(|offset| line_at(src, offset))
        .find(|&line| line > 2)
        .unwrap_or(1)
}

/// Split a document into header text and body bytes
///
/// The header text runs from the opening `{` through the closing `}` and
/// starts on line 1, so JSON parser line numbers are document line numbers.
/// The body is everything after the boundary line.
pub fn split_source(src: &[u8]) -> Result<(Cow<'_, str>, &[u8])> {
    if !src.starts_with(LEADING_DELIMITER) {
        return Err(Error::MissingLeadingDelimiter);
    }
    let Some(end) = find(src, HEADER_BOUNDARY) else {
        let line = trailing_delimiter_line(src);
        tracing::debug!(line, "header boundary not found");
        return Err(Error::MissingTrailingDelimiter { line });
    };

    let header = String::from_utf8_lossy(&src[2..end + 2]);
    let body = &src[end + HEADER_BOUNDARY.len()..];
    Ok((header, body))
}

/// Parse header text into a [`Header`]
///
/// With repair enabled, trailing commas are dropped up front and, if the
/// strict parse still fails, known keys are quoted and the parse is retried
/// once. The error reported is the one from the last attempt.
pub fn parse_header(text: &str, config: &ParserConfig) -> Result<Header> {
    if !config.header_repair() {
        return serde_json::from_str(text).map_err(|e| Error::header_parse(&e));
    }

    let text = repair::strip_trailing_commas(text);
    match serde_json::from_str(&text) {
        Ok(header) => Ok(header),
        Err(first) => {
            tracing::debug!(error = %first, "strict header parse failed, quoting known keys");
            let quoted = repair::quote_known_keys(&text);
            serde_json::from_str(&quoted).map_err(|e| Error::header_parse(&e))
        }
    }
}

/// Parse and validate a document with the default configuration
///
/// Returns the validated document and the plaintext shader body.
pub fn parse_and_validate(src: &[u8]) -> Result<(Document, String)> {
    parse_and_validate_with_config(src, &ParserConfig::default())
}

/// Parse and validate a document
///
/// The steps run in order and the first failure is returned: delimiters,
/// header syntax, body decoding, then the header validation rules.
pub fn parse_and_validate_with_config(
    src: &[u8],
    config: &ParserConfig,
) -> Result<(Document, String)> {
    let (header_text, body) = split_source(src)?;
    let mut header = parse_header(&header_text, config)?;
    let body = body::decode_body(&mut header, body, &header_text, config)?;
    let document = validator::validate(header, &header_text)?;

    tracing::debug!(
        materials = document.materials().len(),
        body = body.len(),
        "parsed IRMF document"
    );
    Ok((document, body))
}

/// Read a whole document from `reader` and parse it
pub fn parse_reader<R: Read>(mut reader: R, config: &ParserConfig) -> Result<(Document, String)> {
    let mut src = Vec::new();
    reader.read_to_end(&mut src)?;
    parse_and_validate_with_config(&src, config)
}
