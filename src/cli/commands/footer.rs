//! `irmf footer`
use std::io::Write;
use std::path::Path;

use anyhow::Context;

use crate::{ParserConfig, compile};

/// Print the generated footer, or the whole shader with `full`
pub fn execute<W: Write>(file: &Path, full: bool, config: &ParserConfig, out: &mut W) -> anyhow::Result<()> {
    let src = std::fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let compiled =
        compile(&src, config).with_context(|| format!("Failed to compile {}", file.display()))?;

    let text = if full {
        &compiled.shader
    } else {
        &compiled.footer.source
    };
    out.write_all(text.as_bytes())?;
    Ok(())
}
