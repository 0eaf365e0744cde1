//! `irmf check`
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;

use crate::{ParserConfig, parse_and_validate_with_config};

/// Check every file, printing one line per file, and fail if any is invalid
pub fn execute<W: Write>(files: &[PathBuf], config: &ParserConfig, out: &mut W) -> anyhow::Result<()> {
    let mut failed = 0;
    for path in files {
        let src = std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        match parse_and_validate_with_config(&src, config) {
            Ok((document, _)) => writeln!(
                out,
                "{}: ok ({} materials, {})",
                path.display(),
                document.materials().len(),
                document.units()
            )?,
            Err(err) => {
                failed += 1;
                match err.line() {
                    Some(line) => writeln!(out, "{}:{}: {}", path.display(), line, err)?,
                    None => writeln!(out, "{}: {}", path.display(), err)?,
                }
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} documents failed validation", failed, files.len());
    }
    Ok(())
}
