//! Editor-facing pipeline
//!
//! The editor shell hands over raw document bytes and gets back everything it
//! displays or uploads to the GPU in one call. It also keeps nothing between
//! calls: the "update options" round-trip re-parses the current text.

use crate::color::{ColorGroups, infer_color_groups};
use crate::error::Result;
use crate::model::{Document, ParserConfig, RuntimeUniforms};
use crate::parser::parse_and_validate_with_config;
use crate::shader::{Footer, synthesize_footer};
use crate::writer::format;

/// Result of compiling a document for the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledShader {
    /// The validated header
    pub document: Document,
    /// Plaintext shader body
    pub body: String,
    /// Canonical document text, to replace the editor buffer with
    pub canonical: String,
    /// Color groups inferred from the material names
    pub groups: ColorGroups,
    /// Generated `main()` and helpers
    pub footer: Footer,
    /// Body followed by the footer, ready to compile
    pub shader: String,
}

impl CompiledShader {
    /// Material names that get their own color picker
    pub fn flat_material_names(&self) -> Vec<String> {
        self.footer.flat_material_names(self.document.materials())
    }
}

/// Parse, validate, format and generate the full shader for a document
pub fn compile(src: &[u8], config: &ParserConfig) -> Result<CompiledShader> {
    let (document, body) = parse_and_validate_with_config(src, config)?;
    let canonical = format(&document, &body)?;
    let groups = infer_color_groups(document.materials());
    let footer = synthesize_footer(document.materials().len(), &groups)?;

    let mut shader = String::with_capacity(body.len() + footer.source.len());
    shader.push_str(&body);
    shader.push_str(&footer.source);

    tracing::debug!(
        bytes = src.len(),
        shader = shader.len(),
        "compiled IRMF document"
    );

    Ok(CompiledShader {
        document,
        body,
        canonical,
        groups,
        footer,
        shader,
    })
}

/// Write the renderer's current resolution and colors back into a document
///
/// Returns the new canonical text. The input is left as it was.
pub fn update_options(src: &[u8], uniforms: &RuntimeUniforms, config: &ParserConfig) -> Result<String> {
    let (document, body) = parse_and_validate_with_config(src, config)?;
    let updated = document.with_runtime_uniforms(uniforms);
    format(&updated, &body)
}
