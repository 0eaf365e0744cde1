//! `irmf fmt`
use std::io::Write;
use std::path::Path;

use anyhow::Context;

use crate::{ParserConfig, format, parse_and_validate_with_config};

/// Format a document, printing it, rewriting it, or checking it
pub fn execute<W: Write>(
    file: &Path,
    write: bool,
    check: bool,
    config: &ParserConfig,
    out: &mut W,
) -> anyhow::Result<()> {
    let src = std::fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let (document, body) = parse_and_validate_with_config(&src, config)
        .with_context(|| format!("Failed to parse {}", file.display()))?;
    let canonical = format(&document, &body)?;
    let unchanged = canonical.as_bytes() == src.as_slice();

    if check {
        if !unchanged {
            anyhow::bail!("{} is not canonically formatted", file.display());
        }
        writeln!(out, "{}: canonical", file.display())?;
    } else if write {
        if unchanged {
            writeln!(out, "{}: unchanged", file.display())?;
        } else {
            std::fs::write(file, &canonical)
                .with_context(|| format!("Failed to write {}", file.display()))?;
            writeln!(out, "{}: formatted", file.display())?;
        }
    } else {
        out.write_all(canonical.as_bytes())?;
    }
    Ok(())
}
