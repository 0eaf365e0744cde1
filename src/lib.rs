//! # libirmf
//!
//! A pure Rust implementation of the IRMF (Infinite Resolution Materials
//! Format) shader document model.
//!
//! An IRMF document is a fragment shader whose first bytes are a JSON header
//! inside a block comment. This library reads those documents the way a
//! live editor does:
//!
//! - tolerant header parsing that repairs common hand-editing slips
//! - semantic validation with the source line of each failure
//! - canonical re-formatting (idempotent)
//! - HSV/HSL/RGB color model inference from material names
//! - generation of the GLSL `main()` footer the renderer needs
//! - decoding of `gzip` and `gzip+base64` bodies (feature `encoding`)
//!
//! ## Example
//!
//! ```
//! use libirmf::{Document, ParserConfig, editor};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let src = b"/*{
//!   irmf: \"1.0\",
//!   materials: [\"PLA\"],
//!   max: [5,5,5],
//!   min: [-5,-5,-5],
//!   units: \"mm\",
//! }*/
//! void mainModel4(out vec4 materials, in vec3 xyz) {}
//! ";
//!
//! let (document, _body) = Document::from_bytes(src)?;
//! assert_eq!(document.materials(), ["PLA"]);
//!
//! let compiled = editor::compile(src, &ParserConfig::new())?;
//! assert!(compiled.shader.contains("mainModel4(m, v_xyz.xyz);"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod color;
pub mod editor;
pub mod error;
pub mod model;
pub mod parser;
pub mod shader;
pub mod validator;
pub mod writer;

#[cfg(feature = "cli")]
pub mod cli;

pub use color::{ColorGroups, HslGroup, HsvGroup, RgbGroup, infer_color_groups};
pub use editor::{CompiledShader, compile, update_options};
pub use error::{BoundKey, Error, ErrorContext, Result, ValidationRule};
pub use model::{
    Document, Encoding, FORMAT_VERSION, Header, KNOWN_KEYS, MAX_COLOR_OVERRIDES, MAX_MATERIALS,
    Options, ParserConfig, RESOLUTIONS, Rgba, RuntimeUniforms,
};
pub use parser::{parse_and_validate, parse_and_validate_with_config};
pub use shader::{Bucket, Footer, synthesize_footer};
pub use writer::format;

use std::io::Read;

impl Document {
    /// Parse and validate a document with the default configuration
    ///
    /// Returns the document together with its plaintext shader body.
    pub fn from_bytes(src: &[u8]) -> Result<(Self, String)> {
        parser::parse_and_validate(src)
    }

    /// Parse and validate a document with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use libirmf::{Document, ParserConfig};
    ///
    /// // Unquoted keys are an error in strict mode
    /// let src = b"/*{\n  irmf: \"1.0\"\n}*/\n";
    /// assert!(Document::from_bytes_with_config(src, &ParserConfig::strict()).is_err());
    /// ```
    pub fn from_bytes_with_config(src: &[u8], config: &ParserConfig) -> Result<(Self, String)> {
        parser::parse_and_validate_with_config(src, config)
    }

    /// Read and parse a document from a reader
    ///
    /// ```no_run
    /// use libirmf::{Document, ParserConfig};
    /// use std::fs::File;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let file = File::open("sphere.irmf")?;
    /// let (document, body) = Document::from_reader(file, &ParserConfig::new())?;
    /// println!("{} materials, {} bytes of shader", document.materials().len(), body.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_reader<R: Read>(reader: R, config: &ParserConfig) -> Result<(Self, String)> {
        parser::parse_reader(reader, config)
    }

    /// Canonical text of this document followed by `body`
    pub fn to_canonical(&self, body: &str) -> Result<String> {
        writer::format(self, body)
    }
}
