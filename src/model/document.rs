//! Header and document types

use super::options::{Options, RuntimeUniforms};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// The only IRMF format version this library accepts
pub const FORMAT_VERSION: &str = "1.0";

/// Maximum number of materials in an IRMF 1.0 document
pub const MAX_MATERIALS: usize = 16;

/// Header keys with a defined meaning, in canonical order
///
/// These are also the keys the header repair pass is allowed to quote.
pub const KNOWN_KEYS: [&str; 12] = [
    "author",
    "copyright",
    "date",
    "irmf",
    "materials",
    "max",
    "min",
    "notes",
    "options",
    "title",
    "units",
    "version",
];

/// Read `null` the same as an absent key
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A parsed but not yet validated header
///
/// Every key is optional at this stage so that a missing key is reported by
/// the validator with a line number instead of failing the JSON parse.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Header {
    /// Author
    #[serde(default, deserialize_with = "nullable")]
    pub author: String,
    /// Copyright notice
    #[serde(default, deserialize_with = "nullable")]
    pub copyright: String,
    /// Creation date
    #[serde(default, deserialize_with = "nullable")]
    pub date: String,
    /// IRMF format version (`irmf` key)
    #[serde(rename = "irmf", default, deserialize_with = "nullable")]
    pub format_version: String,
    /// Material names
    #[serde(default, deserialize_with = "nullable")]
    pub materials: Vec<String>,
    /// Upper corner of the model bounding box
    #[serde(default, deserialize_with = "nullable")]
    pub max: Vec<f64>,
    /// Lower corner of the model bounding box
    #[serde(default, deserialize_with = "nullable")]
    pub min: Vec<f64>,
    /// Free-form notes
    #[serde(default, deserialize_with = "nullable")]
    pub notes: String,
    /// Editor options
    #[serde(default)]
    pub options: Option<Options>,
    /// Title
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    /// Units of `min` and `max`
    #[serde(default, deserialize_with = "nullable")]
    pub units: String,
    /// Model version
    #[serde(default, deserialize_with = "nullable")]
    pub version: String,
    /// Unrecognized keys, in source order
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A validated IRMF document header
///
/// A `Document` only exists once every validation rule has passed, so its
/// invariants hold for its whole lifetime: 1 to 16 materials, 3-component
/// bounds with `min < max` on every axis, non-empty units and format version
/// `"1.0"`. Fields are read through accessors; [`Document::with_options`] and
/// [`Document::with_runtime_uniforms`] return new values instead of mutating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    author: String,
    copyright: String,
    date: String,
    #[serde(rename = "irmf")]
    format_version: String,
    materials: Vec<String>,
    max: [f64; 3],
    min: [f64; 3],
    notes: String,
    options: Options,
    title: String,
    units: String,
    version: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Document {
    /// Build a document from a header whose rules were already checked
    pub(crate) fn from_checked(header: Header, min: [f64; 3], max: [f64; 3]) -> Self {
        Self {
            author: header.author,
            copyright: header.copyright,
            date: header.date,
            format_version: header.format_version,
            materials: header.materials,
            max,
            min,
            notes: header.notes,
            options: header.options.unwrap_or_default(),
            title: header.title,
            units: header.units,
            version: header.version,
            extra: header.extra,
        }
    }

    /// Author
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Copyright notice
    pub fn copyright(&self) -> &str {
        &self.copyright
    }

    /// Creation date
    pub fn date(&self) -> &str {
        &self.date
    }

    /// IRMF format version (always `"1.0"`)
    pub fn format_version(&self) -> &str {
        &self.format_version
    }

    /// Material names; material `n` (1-based) is shader channel `n`
    pub fn materials(&self) -> &[String] {
        &self.materials
    }

    /// Upper corner of the model bounding box
    pub fn max(&self) -> [f64; 3] {
        self.max
    }

    /// Lower corner of the model bounding box
    pub fn min(&self) -> [f64; 3] {
        self.min
    }

    /// Free-form notes
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Editor options (empty when the header had none)
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Units of `min` and `max`
    pub fn units(&self) -> &str {
        &self.units
    }

    /// Model version
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Header keys this library does not interpret, in source order
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// A copy of this document with different options
    ///
    /// A document always pairs with a plaintext body, so any `encoding` tag
    /// in `options` is dropped.
    pub fn with_options(&self, mut options: Options) -> Self {
        options.encoding = None;
        Self {
            options,
            ..self.clone()
        }
    }

    /// A copy of this document with resolution and material colors read back
    /// from the renderer
    pub fn with_runtime_uniforms(&self, uniforms: &RuntimeUniforms) -> Self {
        self.with_options(
            self.options
                .with_runtime_uniforms(uniforms, self.materials.len()),
        )
    }
}
