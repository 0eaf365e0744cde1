//! Shader footer synthesis
//!
//! An IRMF body only defines `mainModelN`. The renderer needs a `main()`
//! that clips to the bounding box, calls the model, and mixes the material
//! densities into one color. This module generates that footer.
//!
//! Materials that take part in an HSV, HSL or RGB group are mixed through
//! the group's color model. Every other material is multiplied by its own
//! `u_colorN` uniform, where `N` counts only those flat materials.

pub mod bucket;
pub mod templates;

pub use bucket::Bucket;

use crate::color::ColorGroups;
use crate::error::{Error, Result};

/// A generated shader footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    /// GLSL to append to the shader body
    pub source: String,
    /// Expression assigned to `out_FragColor`
    pub color_mixer: String,
    /// Material layout of the model entry point
    pub bucket: Bucket,
    /// 1-based numbers of the materials colored by `u_color1`, `u_color2`, ...
    pub flat_channels: Vec<usize>,
}

impl Footer {
    /// Names of the materials with their own color uniform, in uniform order
    ///
    /// These are the entries the editor shows color pickers for.
    pub fn flat_material_names<S: AsRef<str>>(&self, materials: &[S]) -> Vec<String> {
        self.flat_channels
            .iter()
            .filter_map(|&n| materials.get(n - 1))
            .map(|name| name.as_ref().to_string())
            .collect()
    }
}

fn channel(bucket: Bucket, n: usize) -> Result<String> {
    bucket.channel_expr(n).ok_or_else(|| {
        Error::Unsupported(format!(
            "material {} is outside the {} layout",
            n,
            bucket.entry_point()
        ))
    })
}

/// Build the color mixer expression and the list of flat materials
pub fn color_mixer(bucket: Bucket, material_count: usize, groups: &ColorGroups) -> Result<(String, Vec<usize>)> {
    let mut terms = Vec::new();

    for group in groups.hsv.values() {
        terms.push(format!(
            "hsv({},{},{})",
            channel(bucket, group.h)?,
            channel(bucket, group.s)?,
            channel(bucket, group.v)?
        ));
    }
    for group in groups.hsl.values() {
        terms.push(format!(
            "hsl({},{},{})",
            channel(bucket, group.h)?,
            channel(bucket, group.s)?,
            channel(bucket, group.l)?
        ));
    }
    for group in groups.rgb.values() {
        let r = channel(bucket, group.r)?;
        let g = channel(bucket, group.g)?;
        let b = channel(bucket, group.b)?;
        terms.push(format!("vec4({r},{g},{b},max({r},max({g},{b})))"));
    }

    let flat: Vec<usize> = (1..=material_count).filter(|&n| !groups.uses(n)).collect();
    for (i, &n) in flat.iter().enumerate() {
        terms.push(format!("u_color{}*{}", i + 1, channel(bucket, n)?));
    }

    Ok((format!("u_d*({})", terms.join(" + ")), flat))
}

/// Generate the footer for `material_count` materials
///
/// Fails with [`Error::Unsupported`] for 0 or more than 48 materials.
pub fn synthesize_footer(material_count: usize, groups: &ColorGroups) -> Result<Footer> {
    let bucket = Bucket::for_count(material_count).ok_or_else(|| {
        Error::Unsupported(format!(
            "cannot generate a footer for {} materials (expected 1 to {})",
            material_count,
            Bucket::MAX_MATERIALS
        ))
    })?;

    let (color_mixer, flat_channels) = color_mixer(bucket, material_count, groups)?;

    let mut helpers = Vec::new();
    if !groups.hsv.is_empty() {
        helpers.push(templates::HSV_HELPER);
    }
    if !groups.hsl.is_empty() {
        helpers.push(templates::HSL_HELPER);
    }
    let mut source = helpers.join("\n");
    source.push_str(&templates::main_function(bucket, &color_mixer));

    tracing::debug!(
        material_count,
        %bucket,
        flat = flat_channels.len(),
        "synthesized shader footer"
    );

    Ok(Footer {
        source,
        color_mixer,
        bucket,
        flat_channels,
    })
}
