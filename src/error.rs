//! Error types for IRMF document processing
//!
//! Every error carries a stable error code and, where one can be determined,
//! the 1-based source line the editor should highlight (see [`Error::line`]).
//! No error is fatal: a failed parse leaves any previously accepted document
//! untouched and the caller decides what to display.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: I/O errors
//! - **E2xxx**: Document structure and header syntax errors
//! - **E3xxx**: Header validation errors
//! - **E4xxx**: Shader body decoding errors
//! - **E5xxx**: Unsupported shader synthesis requests
//!
//! ## Common Error Codes
//!
//! - `E1001`: I/O error reading a document
//! - `E2001`: Missing leading `/*{`
//! - `E2002`: Missing trailing `}*/`
//! - `E2003`: Header is not valid JSON, even after repair
//! - `E2004`: Header could not be serialized
//! - `E3001`: Header failed a validation rule
//! - `E4001`: Body could not be decoded
//! - `E4002`: Unknown body encoding tag
//! - `E4003`: Body is not UTF-8 text
//! - `E5001`: Unsupported synthesis request

use crate::model::Encoding;
use std::fmt;
use std::io;
use thiserror::Error;

/// Result type for IRMF operations
pub type Result<T> = std::result::Result<T, Error>;

/// Line reported when a problem cannot be attributed to a specific header key.
///
/// Line 1 holds the opening `/*{`, so line 2 is the first line of header content.
pub const FALLBACK_LINE: usize = 2;

/// Additional context for header syntax errors
///
/// Provides optional supplementary information to help with debugging:
/// - Line and column numbers (when reported by the JSON parser)
/// - A helpful hint for resolving common issues
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorContext {
    /// Line number where the error occurred
    pub line: Option<usize>,

    /// Column number where the error occurred
    pub column: Option<usize>,

    /// A helpful hint for resolving the error
    pub hint: Option<String>,
}

impl ErrorContext {
    /// Create a new empty error context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line number
    pub fn line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Set the column number
    pub fn column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    /// Set the hint
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if let (Some(line), Some(column)) = (self.line, self.column) {
            parts.push(format!("Location: line {}, column {}", line, column));
        } else if let Some(line) = self.line {
            parts.push(format!("Line: {}", line));
        }

        if let Some(ref hint) = self.hint {
            parts.push(format!("Hint: {}", hint));
        }

        if !parts.is_empty() {
            write!(f, "\n{}", parts.join("\n"))
        } else {
            Ok(())
        }
    }
}

/// Which bound array a length check failed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundKey {
    /// The `min` corner of the model bounding box
    Min,
    /// The `max` corner of the model bounding box
    Max,
}

impl BoundKey {
    /// Header key holding this bound
    pub fn key(self) -> &'static str {
        match self {
            BoundKey::Min => "min",
            BoundKey::Max => "max",
        }
    }
}

/// Header validation rules, listed in evaluation order
///
/// Validation stops at the first failing rule; errors are never accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationRule {
    /// `irmf` is not the literal string `"1.0"`
    BadVersion,
    /// Fewer than 1 or more than 16 materials
    MaterialCountOutOfRange,
    /// `max` or `min` does not have exactly 3 components
    BadMinMaxLength(BoundKey),
    /// `units` is missing or empty
    MissingUnits,
    /// `min[axis] >= max[axis]`
    NonIncreasingBounds {
        /// Failing axis (0 = x, 1 = y, 2 = z)
        axis: usize,
    },
}

impl ValidationRule {
    /// Short machine-readable rule name
    pub fn name(&self) -> &'static str {
        match self {
            ValidationRule::BadVersion => "bad-version",
            ValidationRule::MaterialCountOutOfRange => "material-count-out-of-range",
            ValidationRule::BadMinMaxLength(_) => "bad-min/max-length",
            ValidationRule::MissingUnits => "missing-units",
            ValidationRule::NonIncreasingBounds { .. } => "non-increasing-bounds",
        }
    }

    /// Header key searched for when attributing this rule to a source line
    pub fn key(&self) -> &'static str {
        match self {
            ValidationRule::BadVersion => "irmf",
            ValidationRule::MaterialCountOutOfRange => "materials",
            ValidationRule::BadMinMaxLength(bound) => bound.key(),
            ValidationRule::MissingUnits => "units",
            ValidationRule::NonIncreasingBounds { .. } => "min",
        }
    }
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur when processing IRMF documents
#[derive(Error, Debug)]
pub enum Error {
    /// IO error occurred while reading a document
    ///
    /// **Error Code**: E1001
    #[error("[E1001] I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document does not begin with the literal bytes `/*{`
    ///
    /// **Error Code**: E2001
    ///
    /// **Suggestions**:
    /// - The header comment must be the very first thing in the file
    /// - Remove any leading whitespace or byte-order mark
    #[error("[E2001] Unable to find leading \"/*{{\"")]
    MissingLeadingDelimiter,

    /// The header is never closed by a `}*/` line
    ///
    /// **Error Code**: E2002
    ///
    /// **Common Causes**:
    /// - `}*/` is not on a line of its own
    /// - The file ends right after `}*/` without a newline
    #[error("[E2002] Unable to find trailing \"}}*/\" (best guess: line {line})")]
    MissingTrailingDelimiter {
        /// Best-effort line of the unterminated header end
        line: usize,
    },

    /// The header is not valid JSON, even after the repair pass
    ///
    /// **Error Code**: E2003
    ///
    /// **Common Causes**:
    /// - Missing comma between entries
    /// - Unbalanced brackets or braces
    /// - A value of the wrong type (e.g. `"materials": "PLA"`)
    #[error("[E2003] Unable to parse header: {message}{context}")]
    HeaderParse {
        /// Parser message
        message: String,
        /// Location and hint
        context: ErrorContext,
    },

    /// The header could not be written back out
    ///
    /// **Error Code**: E2004
    #[error("[E2004] Unable to format header: {0}")]
    Format(String),

    /// The header failed a validation rule
    ///
    /// **Error Code**: E3001
    #[error("[E3001] Invalid header ({rule}) at line {line}: {message}")]
    Validation {
        /// Rule that failed
        rule: ValidationRule,
        /// 1-based line attributed to the failure
        line: usize,
        /// Human readable description
        message: String,
    },

    /// The encoded shader body could not be decoded
    ///
    /// **Error Code**: E4001
    ///
    /// **Common Causes**:
    /// - Body is not valid base64 (`gzip+base64`)
    /// - Body is not a gzip stream or is truncated
    #[error("[E4001] Unable to decode {encoding} body: {reason}")]
    BodyDecode {
        /// Encoding named by the header
        encoding: Encoding,
        /// Decoder message
        reason: String,
    },

    /// The header names a body encoding this library does not know
    ///
    /// **Error Code**: E4002
    #[error("[E4002] Unsupported body encoding {encoding:?} (expected \"gzip\" or \"gzip+base64\")")]
    UnsupportedEncoding {
        /// Encoding tag found in the header
        encoding: String,
        /// Line of the `encoding` key
        line: usize,
    },

    /// The shader body, plaintext or decoded, is not UTF-8
    ///
    /// **Error Code**: E4003
    #[error("[E4003] Shader body is not valid UTF-8: {0}")]
    BodyText(#[from] std::str::Utf8Error),

    /// Unsupported footer synthesis request
    ///
    /// **Error Code**: E5001
    #[error("[E5001] Unsupported: {0}")]
    Unsupported(String),
}

impl Error {
    /// Create a HeaderParse error from a JSON parser failure
    ///
    /// The JSON parser counts lines from the start of the header text, which
    /// starts on line 1 of the document, so its line numbers are reported as-is.
    pub fn header_parse(err: &serde_json::Error) -> Self {
        let mut context = ErrorContext::new()
            .hint("Check for missing commas, unbalanced brackets and unquoted string values");
        if err.line() > 0 {
            context = context.line(err.line()).column(err.column());
        }
        Error::HeaderParse {
            message: err.to_string(),
            context,
        }
    }

    /// Create a Validation error
    pub fn validation(rule: ValidationRule, line: usize, message: impl Into<String>) -> Self {
        Error::Validation {
            rule,
            line,
            message: message.into(),
        }
    }

    /// Create a BodyDecode error
    pub fn body_decode(encoding: Encoding, reason: impl fmt::Display) -> Self {
        Error::BodyDecode {
            encoding,
            reason: reason.to_string(),
        }
    }

    /// The 1-based source line to highlight, where one can be determined
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::MissingLeadingDelimiter => Some(1),
            Error::MissingTrailingDelimiter { line } => Some(*line),
            Error::HeaderParse { context, .. } => Some(context.line.unwrap_or(FALLBACK_LINE)),
            Error::Validation { line, .. } => Some(*line),
            Error::UnsupportedEncoding { line, .. } => Some(*line),
            Error::Io(_)
            | Error::Format(_)
            | Error::BodyDecode { .. }
            | Error::BodyText(_)
            | Error::Unsupported(_) => None,
        }
    }

    /// The validation rule that failed, for validation errors
    pub fn rule(&self) -> Option<ValidationRule> {
        match self {
            Error::Validation { rule, .. } => Some(*rule),
            _ => None,
        }
    }
}
