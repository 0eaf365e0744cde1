//! Encoded shader bodies

use crate::common::{encoded_document, gzip};
use base64::Engine;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use libirmf::{Encoding, Error, ParserConfig, ValidationRule, parse_and_validate};

const SHADER: &str = "void mainModel4(out vec4 m, in vec3 xyz) {\n  m.x = 1.0;\n}\n";

#[test]
fn test_gzip_body() {
    let src = encoded_document("gzip", &gzip(SHADER));
    let (document, body) = parse_and_validate(&src).unwrap();
    assert_eq!(body, SHADER);
    assert_eq!(document.options().encoding, None);
}

#[test]
fn test_gzip_base64_body() {
    let compressed = gzip(SHADER);
    for encoded in [STANDARD.encode(&compressed), STANDARD_NO_PAD.encode(&compressed)] {
        let src = encoded_document("gzip+base64", format!("{}\n", encoded).as_bytes());
        let (_, body) = parse_and_validate(&src).unwrap();
        assert_eq!(body, SHADER);
    }
}

#[test]
fn test_canonical_form_is_plaintext() {
    let src = encoded_document("gzip", &gzip(SHADER));
    let (document, body) = parse_and_validate(&src).unwrap();
    let text = document.to_canonical(&body).unwrap();
    assert!(!text.contains("encoding"));
    assert!(text.ends_with(SHADER));
    assert!(text.contains("\"options\": {},"));
}

#[test]
fn test_corrupt_bodies() {
    let err = parse_and_validate(&encoded_document("gzip", b"plain text")).unwrap_err();
    assert!(matches!(err, Error::BodyDecode { encoding: Encoding::Gzip, .. }));
    assert_eq!(err.line(), None);

    let err = parse_and_validate(&encoded_document("gzip+base64", b"!!not base64!!")).unwrap_err();
    assert!(matches!(err, Error::BodyDecode { encoding: Encoding::GzipBase64, .. }));
}

#[test]
fn test_unknown_encoding() {
    let err = parse_and_validate(&encoded_document("brotli", b"")).unwrap_err();
    assert!(matches!(err, Error::UnsupportedEncoding { .. }));
    assert_eq!(err.line(), Some(7));
}

#[test]
fn test_decoding_disabled() {
    let config = ParserConfig::new().with_body_decoding(false);
    let src = encoded_document("gzip", &gzip(SHADER));
    let err = libirmf::parse_and_validate_with_config(&src, &config).unwrap_err();
    assert!(matches!(err, Error::BodyDecode { .. }));
}

#[test]
fn test_body_decoded_before_validation() {
    let src = String::from_utf8(encoded_document("gzip", b"garbage"))
        .unwrap()
        .replace("\"mm\"", "\"\"");
    let err = parse_and_validate(src.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::BodyDecode { .. }));
    assert_ne!(err.rule(), Some(ValidationRule::MissingUnits));
}
