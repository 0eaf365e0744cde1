//! JSON formatter for canonical headers

use serde_json::ser::{CompactFormatter, Formatter};
use std::io::{self, Write};

/// Pretty-prints objects with two-space indentation but writes every array,
/// and anything nested inside one, on a single line without spaces.
///
/// Integral floats are written without a fractional part, so `[5,5,5]`
/// formats as `[5,5,5]` rather than `[5.0,5.0,5.0]`.
#[derive(Debug, Default)]
pub struct CanonicalFormatter {
    indent: usize,
    has_value: bool,
    array_depth: usize,
}

/// Largest magnitude written as an integer; beyond it `f64` loses integer precision
const MAX_INTEGRAL: f64 = 1e15;

impl CanonicalFormatter {
    /// Create a formatter at indentation level 0
    pub fn new() -> Self {
        Self::default()
    }

    fn in_array(&self) -> bool {
        self.array_depth > 0
    }

    fn write_indent<W: ?Sized + Write>(&self, writer: &mut W) -> io::Result<()> {
        for _ in 0..self.indent {
            writer.write_all(b"  ")?;
        }
        Ok(())
    }
}

impl Formatter for CanonicalFormatter {
    fn write_f64<W: ?Sized + Write>(&mut self, writer: &mut W, value: f64) -> io::Result<()> {
        if value.fract() == 0.0 && value.abs() < MAX_INTEGRAL {
            write!(writer, "{}", value as i64)
        } else {
            CompactFormatter.write_f64(writer, value)
        }
    }

    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.array_depth += 1;
        writer.write_all(b"[")
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.array_depth -= 1;
        writer.write_all(b"]")
    }

    fn begin_array_value<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first { Ok(()) } else { writer.write_all(b",") }
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        Ok(())
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        if !self.in_array() {
            self.indent += 1;
            self.has_value = false;
        }
        writer.write_all(b"{")
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        if !self.in_array() {
            self.indent -= 1;
            if self.has_value {
                writer.write_all(b"\n")?;
                self.write_indent(writer)?;
            }
        }
        writer.write_all(b"}")
    }

    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if self.in_array() {
            return if first { Ok(()) } else { writer.write_all(b",") };
        }
        writer.write_all(if first { b"\n" } else { b",\n" })?;
        self.write_indent(writer)
    }

    fn end_object_key<W: ?Sized + Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        Ok(())
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(if self.in_array() { b":" } else { b": " })
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }
}
