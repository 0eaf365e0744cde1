//! Validation logic for IRMF headers
//!
//! This module turns a parsed [`Header`] into a [`Document`]. The rules are
//! evaluated in a fixed order and the first failure wins:
//!
//! 1. `irmf` must be `"1.0"`
//! 2. 1 to 16 materials
//! 3. `max`, then `min`, must have exactly 3 components
//! 4. `units` must be non-empty
//! 5. `min < max` on every axis
//!
//! Every failure is attributed to the source line of the offending key so the
//! editor can highlight it.

pub mod lines;

use crate::error::{BoundKey, Error, Result, ValidationRule};
use crate::model::{Document, FORMAT_VERSION, Header, MAX_MATERIALS};
use lines::key_line;

const AXES: [&str; 3] = ["x", "y", "z"];

fn fail(header_text: &str, rule: ValidationRule, message: String) -> Error {
    let line = key_line(header_text, rule.key());
    tracing::debug!(rule = rule.name(), line, "header validation failed");
    Error::validation(rule, line, message)
}

/// Validates the format version
pub fn validate_format_version(header: &Header, header_text: &str) -> Result<()> {
    if header.format_version != FORMAT_VERSION {
        return Err(fail(
            header_text,
            ValidationRule::BadVersion,
            format!(
                "unsupported IRMF version: {:?} (only \"{}\" is supported)",
                header.format_version, FORMAT_VERSION
            ),
        ));
    }
    Ok(())
}

/// Validates that there are between 1 and 16 materials
pub fn validate_material_count(header: &Header, header_text: &str) -> Result<()> {
    let count = header.materials.len();
    if count < 1 {
        return Err(fail(
            header_text,
            ValidationRule::MaterialCountOutOfRange,
            "must list at least one material name".to_string(),
        ));
    }
    if count > MAX_MATERIALS {
        return Err(fail(
            header_text,
            ValidationRule::MaterialCountOutOfRange,
            format!(
                "IRMF 1.0 only supports up to {} materials, found {}",
                MAX_MATERIALS, count
            ),
        ));
    }
    Ok(())
}

fn bound_array(header_text: &str, values: &[f64], bound: BoundKey) -> Result<[f64; 3]> {
    <[f64; 3]>::try_from(values).map_err(|_| {
        fail(
            header_text,
            ValidationRule::BadMinMaxLength(bound),
            format!(
                "{} must have exactly 3 values, found {}",
                bound.key(),
                values.len()
            ),
        )
    })
}

/// Validates that `max` and then `min` have exactly 3 components
///
/// Returns the bounds as `(min, max)`.
pub fn validate_bounds_length(header: &Header, header_text: &str) -> Result<([f64; 3], [f64; 3])> {
    let max = bound_array(header_text, &header.max, BoundKey::Max)?;
    let min = bound_array(header_text, &header.min, BoundKey::Min)?;
    Ok((min, max))
}

/// Validates that units are present
pub fn validate_units(header: &Header, header_text: &str) -> Result<()> {
    if header.units.is_empty() {
        return Err(fail(
            header_text,
            ValidationRule::MissingUnits,
            "units are required by IRMF 1.0".to_string(),
        ));
    }
    Ok(())
}

/// Validates that the bounding box has positive extent on every axis
pub fn validate_bounds_order(min: &[f64; 3], max: &[f64; 3], header_text: &str) -> Result<()> {
    for axis in 0..3 {
        // Written as a negated `<` so that NaN bounds are rejected too
        if !(min[axis] < max[axis]) {
            return Err(fail(
                header_text,
                ValidationRule::NonIncreasingBounds { axis },
                format!(
                    "min.{0} ({1}) must be strictly less than max.{0} ({2})",
                    AXES[axis], min[axis], max[axis]
                ),
            ));
        }
    }
    Ok(())
}

/// Validate a parsed header and build the document
///
/// `header_text` is the raw header (from the opening `{` to the closing `}`)
/// and is only used to attribute failures to source lines.
pub fn validate(header: Header, header_text: &str) -> Result<Document> {
    validate_format_version(&header, header_text)?;
    validate_material_count(&header, header_text)?;
    let (min, max) = validate_bounds_length(&header, header_text)?;
    validate_units(&header, header_text)?;
    validate_bounds_order(&min, &max, header_text)?;

    Ok(Document::from_checked(header, min, max))
}
