//! Document splitting and header parsing

use crate::common::{SPHERE, document, header};
use libirmf::{Document, Error, ParserConfig, parse_and_validate};

#[test]
fn test_parse_startup_document() {
    let (document, body) = parse_and_validate(SPHERE.as_bytes()).unwrap();

    assert_eq!(document.format_version(), "1.0");
    assert_eq!(document.materials(), ["PLA"]);
    assert_eq!(document.max(), [5.0, 5.0, 5.0]);
    assert_eq!(document.min(), [-5.0, -5.0, -5.0]);
    assert_eq!(document.units(), "mm");
    assert!(document.options().is_empty());
    // The body starts right after the boundary line, blank line included
    assert!(body.starts_with("\nfloat sphere("));
}

#[test]
fn test_body_is_not_trimmed() {
    let src = header(&["PLA"]) + "  \n\n";
    let (_, body) = parse_and_validate(src.as_bytes()).unwrap();
    assert_eq!(body, "  \n\n");
}

#[test]
fn test_leading_delimiter_must_be_first() {
    for src in ["", "/*", " /*{\n}*/\n", "\u{feff}/*{\n}*/\n", "/* {\n}*/\n"] {
        let err = parse_and_validate(src.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MissingLeadingDelimiter), "{:?}", src);
        assert_eq!(err.line(), Some(1));
    }
}

#[test]
fn test_trailing_delimiter_best_guess() {
    // `}*/` with trailing spaces is not the boundary
    let src = "/*{\n  \"irmf\": \"1.0\"\n}*/  \nvoid main() {}\n";
    let err = parse_and_validate(src.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::MissingTrailingDelimiter { line: 3 }));

    // No comment end at all: fall back to the first `}`
    let src = "/*{\n  \"irmf\": \"1.0\",\n  \"notes\": \"x\"\n\n}\nvoid main() {}\n";
    assert_eq!(parse_and_validate(src.as_bytes()).unwrap_err().line(), Some(5));

    // Nothing to go on
    let src = "/*{\n  \"irmf\": \"1.0\"\n";
    assert_eq!(parse_and_validate(src.as_bytes()).unwrap_err().line(), Some(1));

    // A comment end on the first two lines is not trusted
    let src = "/*{\n}*/";
    assert_eq!(parse_and_validate(src.as_bytes()).unwrap_err().line(), Some(1));
}

#[test]
fn test_first_boundary_wins() {
    let src = header(&["PLA"]) + "// }*/\n}*/\nvoid x() {}\n";
    let (_, body) = parse_and_validate(src.as_bytes()).unwrap();
    assert!(body.starts_with("// }*/\n"));
}

#[test]
fn test_header_parse_error_line() {
    let src = "/*{\n  \"irmf\": \"1.0\",\n  \"materials\": [\"PLA\"\n  \"units\": \"mm\"\n}*/\n";
    let err = parse_and_validate(src.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::HeaderParse { .. }));
    assert_eq!(err.line(), Some(4));
    assert!(err.to_string().contains("[E2003]"));
}

#[test]
fn test_wrong_value_type_is_a_parse_error() {
    let src = document(&["PLA"]).replace("\"units\": \"mm\"", "\"units\": 5");
    let err = parse_and_validate(src.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::HeaderParse { .. }));
}

#[test]
fn test_repair_does_not_touch_string_values() {
    let src = "/*{\n  irmf: \"1.0\",\n  notes: \"min: 0, max: 1,}\",\n  materials: [\"PLA\"],\n  max: [1,1,1],\n  min: [0,0,0],\n  units: \"mm\",\n}*/\n";
    let (document, _) = parse_and_validate(src.as_bytes()).unwrap();
    assert_eq!(document.notes(), "min: 0, max: 1,}");
}

#[test]
fn test_unknown_unquoted_key_is_not_repaired() {
    let src = SPHERE.replace("units: \"mm\",", "units: \"mm\",\n  camera: 1,");
    let err = parse_and_validate(src.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::HeaderParse { .. }));
}

#[test]
fn test_strict_config() {
    let config = ParserConfig::strict();
    assert!(Document::from_bytes_with_config(SPHERE.as_bytes(), &config).is_err());
    assert!(Document::from_bytes_with_config(document(&["PLA"]).as_bytes(), &config).is_ok());
}

#[test]
fn test_from_reader() {
    let (document, _) =
        Document::from_reader(SPHERE.as_bytes(), &ParserConfig::default()).unwrap();
    assert_eq!(document.units(), "mm");
}

#[test]
fn test_unknown_keys_preserved() {
    let src = document(&["PLA"]).replace(
        "\"units\": \"mm\"",
        "\"units\": \"mm\",\n  \"zeta\": [1, {\"a\": null}],\n  \"alpha\": \"x\"",
    );
    let (document, _) = parse_and_validate(src.as_bytes()).unwrap();
    let keys: Vec<&String> = document.extra().keys().collect();
    assert_eq!(keys, vec!["zeta", "alpha"]);
}
