//! `irmf groups`
use std::io::Write;
use std::path::Path;

use anyhow::Context;

use crate::{ParserConfig, compile};

/// Print the color groups and the materials that keep their own color
pub fn execute<W: Write>(file: &Path, config: &ParserConfig, out: &mut W) -> anyhow::Result<()> {
    let src = std::fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let compiled =
        compile(&src, config).with_context(|| format!("Failed to compile {}", file.display()))?;
    let groups = &compiled.groups;

    for (name, g) in &groups.hsv {
        writeln!(out, "hsv {}: h={} s={} v={}", name, g.h, g.s, g.v)?;
    }
    for (name, g) in &groups.hsl {
        writeln!(out, "hsl {}: h={} s={} l={}", name, g.h, g.s, g.l)?;
    }
    for (name, g) in &groups.rgb {
        writeln!(out, "rgb {}: r={} g={} b={}", name, g.r, g.g, g.b)?;
    }
    for (i, name) in compiled.flat_material_names().iter().enumerate() {
        writeln!(out, "u_color{}: {}", i + 1, name)?;
    }
    Ok(())
}
