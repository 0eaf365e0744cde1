//! Full-color material models
//!
//! Material names may carry a one-letter channel suffix. Three materials
//! sharing a base name and covering a complete triplet are combined into one
//! color in the renderer:
//!
//! | Model | Suffixes         |
//! |-------|------------------|
//! | HSV   | `.H` `.S` `.V`   |
//! | HSL   | `.H` `.S` `.L`   |
//! | RGB   | `.R` `.G` `.B`   |
//!
//! With materials `["metal", "PLA.V", "dielectric", "PLA.H", "PLA.S"]` the HSV
//! group `PLA` is `{h: 4, s: 5, v: 2}` (1-based material numbers). An
//! incomplete triplet is not a group; those materials are colored one by one.

use std::collections::BTreeMap;

/// HSV channels of one base name, as 1-based material numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HsvGroup {
    /// Hue
    pub h: usize,
    /// Saturation
    pub s: usize,
    /// Value
    pub v: usize,
}

/// HSL channels of one base name, as 1-based material numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HslGroup {
    /// Hue
    pub h: usize,
    /// Saturation
    pub s: usize,
    /// Lightness
    pub l: usize,
}

/// RGB channels of one base name, as 1-based material numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbGroup {
    /// Red
    pub r: usize,
    /// Green
    pub g: usize,
    /// Blue
    pub b: usize,
}

/// Complete color groups, keyed by base material name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorGroups {
    /// HSV groups
    pub hsv: BTreeMap<String, HsvGroup>,
    /// HSL groups
    pub hsl: BTreeMap<String, HslGroup>,
    /// RGB groups
    pub rgb: BTreeMap<String, RgbGroup>,
}

impl ColorGroups {
    /// True if no material takes part in a full-color model
    pub fn is_empty(&self) -> bool {
        self.hsv.is_empty() && self.hsl.is_empty() && self.rgb.is_empty()
    }

    /// Whether material `n` (1-based) is a channel of any group
    pub fn uses(&self, n: usize) -> bool {
        self.hsv.values().any(|g| [g.h, g.s, g.v].contains(&n))
            || self.hsl.values().any(|g| [g.h, g.s, g.l].contains(&n))
            || self.rgb.values().any(|g| [g.r, g.g, g.b].contains(&n))
    }
}

/// Channel a suffix contributes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    Hue,
    Saturation,
    Value,
    Lightness,
    Red,
    Green,
    Blue,
}

impl Channel {
    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            ".H" => Some(Channel::Hue),
            ".S" => Some(Channel::Saturation),
            ".V" => Some(Channel::Value),
            ".L" => Some(Channel::Lightness),
            ".R" => Some(Channel::Red),
            ".G" => Some(Channel::Green),
            ".B" => Some(Channel::Blue),
            _ => None,
        }
    }
}

/// Channels seen so far for one base name
#[derive(Debug, Default)]
struct Provisional {
    h: Option<usize>,
    s: Option<usize>,
    v: Option<usize>,
    l: Option<usize>,
    r: Option<usize>,
    g: Option<usize>,
    b: Option<usize>,
}

impl Provisional {
    fn set(&mut self, channel: Channel, n: usize) {
        let slot = match channel {
            Channel::Hue => &mut self.h,
            Channel::Saturation => &mut self.s,
            Channel::Value => &mut self.v,
            Channel::Lightness => &mut self.l,
            Channel::Red => &mut self.r,
            Channel::Green => &mut self.g,
            Channel::Blue => &mut self.b,
        };
        *slot = Some(n);
    }

    fn hsv(&self) -> Option<HsvGroup> {
        Some(HsvGroup {
            h: self.h?,
            s: self.s?,
            v: self.v?,
        })
    }

    fn hsl(&self) -> Option<HslGroup> {
        Some(HslGroup {
            h: self.h?,
            s: self.s?,
            l: self.l?,
        })
    }

    fn rgb(&self) -> Option<RgbGroup> {
        Some(RgbGroup {
            r: self.r?,
            g: self.g?,
            b: self.b?,
        })
    }
}

/// Split `name` into base name and channel, if it carries a color suffix
///
/// Names of two bytes or fewer never match, so `.H` alone is a plain material.
fn split_channel(name: &str) -> Option<(&str, Channel)> {
    if name.len() <= 2 {
        return None;
    }
    let (base, suffix) = name.split_at_checked(name.len() - 2)?;
    Channel::from_suffix(suffix).map(|channel| (base, channel))
}

/// Group material names into HSV, HSL and RGB color models
///
/// A later material with the same base name and suffix replaces an earlier
/// one. A base name with `.H`, `.S`, `.V` and `.L` forms both an HSV and an
/// HSL group sharing the hue and saturation channels.
pub fn infer_color_groups<S: AsRef<str>>(materials: &[S]) -> ColorGroups {
    let mut seen: BTreeMap<&str, Provisional> = BTreeMap::new();
    for (i, name) in materials.iter().enumerate() {
        if let Some((base, channel)) = split_channel(name.as_ref()) {
            seen.entry(base).or_default().set(channel, i + 1);
        }
    }

    let mut groups = ColorGroups::default();
    for (base, channels) in &seen {
        if let Some(group) = channels.hsv() {
            groups.hsv.insert(base.to_string(), group);
        }
        if let Some(group) = channels.hsl() {
            groups.hsl.insert(base.to_string(), group);
        }
        if let Some(group) = channels.rgb() {
            groups.rgb.insert(base.to_string(), group);
        }
    }

    tracing::trace!(
        hsv = groups.hsv.len(),
        hsl = groups.hsl.len(),
        rgb = groups.rgb.len(),
        "inferred color groups"
    );
    groups
}
