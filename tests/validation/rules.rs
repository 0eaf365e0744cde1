//! Header validation rules

use crate::common::{document, header};
use libirmf::{BoundKey, Error, ValidationRule, parse_and_validate};

fn rule_of(src: &str) -> ValidationRule {
    let err = parse_and_validate(src.as_bytes()).unwrap_err();
    err.rule()
        .unwrap_or_else(|| panic!("expected a validation error, got {}", err))
}

#[test]
fn test_version_must_be_1_0() {
    for version in ["\"1\"", "\"1.00\"", "\"2.0\"", "\"\""] {
        let src = document(&["PLA"]).replace("\"1.0\"", version);
        assert_eq!(rule_of(&src), ValidationRule::BadVersion, "{}", version);
    }
}

#[test]
fn test_missing_version() {
    let src = document(&["PLA"]).replace("  \"irmf\": \"1.0\",\n", "");
    assert_eq!(rule_of(&src), ValidationRule::BadVersion);
}

#[test]
fn test_material_count_limits() {
    assert_eq!(rule_of(&header(&[])), ValidationRule::MaterialCountOutOfRange);

    let names: Vec<String> = (1..=17).map(|i| format!("m{}", i)).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    assert!(parse_and_validate(header(&refs[..16]).as_bytes()).is_ok());
    assert_eq!(rule_of(&header(&refs)), ValidationRule::MaterialCountOutOfRange);
}

#[test]
fn test_bound_lengths() {
    let src = document(&["PLA"]).replace("\"max\": [1,1,1]", "\"max\": [1,1]");
    assert_eq!(rule_of(&src), ValidationRule::BadMinMaxLength(BoundKey::Max));

    let src = document(&["PLA"]).replace("\"min\": [-1,-1,-1]", "\"min\": [-1,-1,-1,-1]");
    assert_eq!(rule_of(&src), ValidationRule::BadMinMaxLength(BoundKey::Min));

    let src = document(&["PLA"]).replace("  \"min\": [-1,-1,-1],\n", "");
    assert_eq!(rule_of(&src), ValidationRule::BadMinMaxLength(BoundKey::Min));
}

#[test]
fn test_units_required() {
    let src = document(&["PLA"]).replace("\"units\": \"mm\"", "\"units\": null");
    assert_eq!(rule_of(&src), ValidationRule::MissingUnits);
}

#[test]
fn test_degenerate_box_fails_on_x() {
    let src = document(&["PLA"])
        .replace("[1,1,1]", "[0,0,0]")
        .replace("[-1,-1,-1]", "[0,0,0]");
    assert_eq!(
        rule_of(&src),
        ValidationRule::NonIncreasingBounds { axis: 0 }
    );
}

#[test]
fn test_inverted_y() {
    let src = document(&["PLA"]).replace("[1,1,1]", "[1,-2,1]");
    let err = parse_and_validate(src.as_bytes()).unwrap_err();
    assert_eq!(err.rule(), Some(ValidationRule::NonIncreasingBounds { axis: 1 }));
    assert!(err.to_string().contains("min.y (-1) must be strictly less than max.y (-2)"));
}

#[test]
fn test_rule_order() {
    // Empty units and a bad max: the length rule comes first
    let src = document(&["PLA"])
        .replace("\"units\": \"mm\"", "\"units\": \"\"")
        .replace("[1,1,1]", "[1]");
    assert_eq!(rule_of(&src), ValidationRule::BadMinMaxLength(BoundKey::Max));

    // Empty units and inverted bounds: units come first
    let src = document(&["PLA"])
        .replace("\"units\": \"mm\"", "\"units\": \"\"")
        .replace("[1,1,1]", "[-3,-3,-3]");
    assert_eq!(rule_of(&src), ValidationRule::MissingUnits);
}

#[test]
fn test_validation_error_format() {
    let err = parse_and_validate(header(&[]).as_bytes()).unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
    assert!(err.to_string().starts_with("[E3001] Invalid header (material-count-out-of-range)"));
}
