//! Material storage layouts of the model entry point

use std::fmt;

/// How `mainModelN` hands material densities back to `main()`
///
/// The layout depends only on the material count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    /// 1 to 4 materials in a `vec4 m`
    Vec4,
    /// 5 to 9 materials in a `mat3 m`
    Mat3,
    /// 10 to 16 materials in a `mat4 m`
    Mat4,
    /// 17 to 32 materials in `mat4 mA, mB`
    Mat4x2,
    /// 33 to 48 materials in `mat4 mA, mB, mC`
    Mat4x3,
}

/// Matrix names of the multi-matrix layouts, in channel order
const MATRIX_NAMES: [&str; 3] = ["mA", "mB", "mC"];

impl Bucket {
    /// Largest material count any layout supports
    pub const MAX_MATERIALS: usize = 48;

    /// Layout for `material_count` materials, `None` for 0 or more than 48
    pub fn for_count(material_count: usize) -> Option<Self> {
        match material_count {
            1..=4 => Some(Bucket::Vec4),
            5..=9 => Some(Bucket::Mat3),
            10..=16 => Some(Bucket::Mat4),
            17..=32 => Some(Bucket::Mat4x2),
            33..=48 => Some(Bucket::Mat4x3),
            _ => None,
        }
    }

    /// Number of materials the layout holds
    pub fn capacity(self) -> usize {
        match self {
            Bucket::Vec4 => 4,
            Bucket::Mat3 => 9,
            Bucket::Mat4 => 16,
            Bucket::Mat4x2 => 32,
            Bucket::Mat4x3 => 48,
        }
    }

    /// Name of the model function the shader body must define
    pub fn entry_point(self) -> &'static str {
        match self {
            Bucket::Vec4 => "mainModel4",
            Bucket::Mat3 => "mainModel9",
            Bucket::Mat4 => "mainModel16",
            Bucket::Mat4x2 => "mainModel32",
            Bucket::Mat4x3 => "mainModel48",
        }
    }

    /// `(type, name)` of each output variable, in argument order
    pub fn variables(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Bucket::Vec4 => &[("vec4", "m")],
            Bucket::Mat3 => &[("mat3", "m")],
            Bucket::Mat4 => &[("mat4", "m")],
            Bucket::Mat4x2 => &[("mat4", "mA"), ("mat4", "mB")],
            Bucket::Mat4x3 => &[("mat4", "mA"), ("mat4", "mB"), ("mat4", "mC")],
        }
    }

    /// GLSL expression reading material `n` (1-based)
    ///
    /// Returns `None` if `n` is outside the layout.
    pub fn channel_expr(self, n: usize) -> Option<String> {
        if n == 0 || n > self.capacity() {
            return None;
        }
        let i = n - 1;
        let expr = match self {
            Bucket::Vec4 => format!("m.{}", ["x", "y", "z", "w"][i]),
            Bucket::Mat3 => format!("m[{}][{}]", i / 3, i % 3),
            Bucket::Mat4 => format!("m[{}][{}]", i / 4, i % 4),
            Bucket::Mat4x2 | Bucket::Mat4x3 => {
                let cell = i % 16;
                format!("{}[{}][{}]", MATRIX_NAMES[i / 16], cell / 4, cell % 4)
            }
        };
        Some(expr)
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.entry_point())
    }
}
