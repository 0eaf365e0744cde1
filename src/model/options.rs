//! Editor options carried in the header's `options` object

use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Number of per-material color overrides (`color1` .. `color16`)
pub const MAX_COLOR_OVERRIDES: usize = 16;

/// Render resolutions the editor accepts; any other value is ignored
pub const RESOLUTIONS: [u32; 7] = [32, 64, 128, 256, 512, 1024, 2048];

/// How the shader body following the header is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Body bytes are a gzip stream
    Gzip,
    /// Body bytes are base64 text of a gzip stream
    GzipBase64,
}

impl Encoding {
    /// Parse an `options.encoding` tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "gzip" => Some(Encoding::Gzip),
            "gzip+base64" => Some(Encoding::GzipBase64),
            _ => None,
        }
    }

    /// The tag as written in a header
    pub fn tag(self) -> &'static str {
        match self {
            Encoding::Gzip => "gzip",
            Encoding::GzipBase64 => "gzip+base64",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A material color override
///
/// Written as `[r, g, b, a]` where `r`, `g` and `b` are 0-255 channel values
/// and `a` is an opacity between 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Opacity (0.0 - 1.0)
    pub a: f64,
}

impl Rgba {
    /// Create a new color
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Convert a shader uniform (`vec4`, every component 0..1) into an override
    ///
    /// Color channels are rounded half-up to the nearest 0-255 step; the opacity
    /// is kept as-is.
    pub fn from_unit(value: [f64; 4]) -> Self {
        Self {
            r: unit_to_channel(value[0]),
            g: unit_to_channel(value[1]),
            b: unit_to_channel(value[2]),
            a: clamp_unit(value[3]),
        }
    }

    /// Convert to a shader uniform value (every component 0..1)
    pub fn to_unit(&self) -> [f64; 4] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
            self.a,
        ]
    }
}

fn unit_to_channel(value: f64) -> u8 {
    channel_from_f64((0.5 + 255.0 * value).floor())
}

fn channel_from_f64(value: f64) -> u8 {
    if value.is_nan() {
        0
    } else {
        value.round().clamp(0.0, 255.0) as u8
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(4))?;
        seq.serialize_element(&self.r)?;
        seq.serialize_element(&self.g)?;
        seq.serialize_element(&self.b)?;
        seq.serialize_element(&self.a)?;
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Hand-edited headers are not always in range; clamp rather than reject.
        let [r, g, b, a] = <[f64; 4]>::deserialize(deserializer)?;
        Ok(Self {
            r: channel_from_f64(r),
            g: channel_from_f64(g),
            b: channel_from_f64(b),
            a: clamp_unit(a),
        })
    }
}

/// Runtime uniform values read back from the renderer
///
/// Used by the "update options" round-trip: the editor's current resolution
/// and material colors are written back into the document's [`Options`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuntimeUniforms {
    /// Current `u_resolution`
    pub resolution: i64,
    /// Current `u_color1`, `u_color2`, ... values, each component 0..1
    pub colors: Vec<[f64; 4]>,
}

/// The header's `options` object
///
/// Known keys are typed; any other key is preserved untouched so that
/// formatting never drops information the author put there.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    /// Requested render resolution, as written
    pub resolution: Option<i64>,
    pub(crate) colors: [Option<Rgba>; MAX_COLOR_OVERRIDES],
    /// Body encoding tag, as written
    pub encoding: Option<String>,
    /// Unrecognized option keys, in source order
    pub extra: Map<String, Value>,
}

impl Options {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// The requested resolution, if it is one the editor supports
    ///
    /// Values outside [`RESOLUTIONS`] are kept in the document but ignored here.
    pub fn accepted_resolution(&self) -> Option<u32> {
        let requested = self.resolution?;
        RESOLUTIONS
            .iter()
            .copied()
            .find(|&res| i64::from(res) == requested)
    }

    /// Color override for 1-based material number `n`
    pub fn color(&self, n: usize) -> Option<Rgba> {
        n.checked_sub(1)
            .and_then(|i| self.colors.get(i))
            .copied()
            .flatten()
    }

    /// Set the color override for 1-based material number `n`
    ///
    /// Returns `false` if `n` is outside `1..=16`.
    pub fn set_color(&mut self, n: usize, color: Rgba) -> bool {
        match n.checked_sub(1).and_then(|i| self.colors.get_mut(i)) {
            Some(slot) => {
                *slot = Some(color);
                true
            }
            None => false,
        }
    }

    /// All present color overrides as `(material number, color)` pairs
    pub fn color_overrides(&self) -> impl Iterator<Item = (usize, Rgba)> + '_ {
        self.colors
            .iter()
            .enumerate()
            .filter_map(|(i, color)| color.map(|c| (i + 1, c)))
    }

    /// The typed body encoding, `Ok(None)` for plaintext
    ///
    /// An empty tag counts as plaintext. An unknown tag is returned as `Err`.
    pub fn body_encoding(&self) -> Result<Option<Encoding>, &str> {
        match self.encoding.as_deref() {
            None | Some("") => Ok(None),
            Some(tag) => Encoding::from_tag(tag).map(Some).ok_or(tag),
        }
    }

    /// Copy of these options updated from runtime uniform values
    ///
    /// Only the first `material_count` colors are read back.
    pub fn with_runtime_uniforms(&self, uniforms: &RuntimeUniforms, material_count: usize) -> Self {
        let mut options = self.clone();
        options.resolution = Some(uniforms.resolution);
        for (i, value) in uniforms.colors.iter().take(material_count).enumerate() {
            options.set_color(i + 1, Rgba::from_unit(*value));
        }
        options
    }

    /// True if no option at all is present
    pub fn is_empty(&self) -> bool {
        self.resolution.is_none()
            && self.encoding.is_none()
            && self.colors.iter().all(Option::is_none)
            && self.extra.is_empty()
    }
}

fn color_key(n: usize) -> String {
    format!("color{}", n)
}

fn take_field<T: DeserializeOwned>(
    map: &mut Map<String, Value>,
    key: &str,
) -> Result<Option<T>, String> {
    match map.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| format!("options.{}: {}", key, e)),
    }
}

impl<'de> Deserialize<'de> for Options {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut map = Map::<String, Value>::deserialize(deserializer)?;

        let resolution = take_field(&mut map, "resolution").map_err(D::Error::custom)?;
        let encoding = take_field(&mut map, "encoding").map_err(D::Error::custom)?;
        let mut colors = [None; MAX_COLOR_OVERRIDES];
        for (i, slot) in colors.iter_mut().enumerate() {
            *slot = take_field(&mut map, &color_key(i + 1)).map_err(D::Error::custom)?;
        }

        Ok(Self {
            resolution,
            colors,
            encoding,
            extra: map,
        })
    }
}

impl Serialize for Options {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(resolution) = self.resolution {
            map.serialize_entry("resolution", &resolution)?;
        }
        for (n, color) in self.color_overrides() {
            map.serialize_entry(&color_key(n), &color)?;
        }
        if let Some(ref encoding) = self.encoding {
            map.serialize_entry("encoding", encoding)?;
        }
        for (key, value) in &self.extra {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
