//! Canonical formatting

use crate::common::{SPHERE, document};
use libirmf::{Document, Options, parse_and_validate};
use pretty_assertions::assert_eq;

fn canonical(src: &str) -> String {
    let (document, body) = parse_and_validate(src.as_bytes()).unwrap();
    document.to_canonical(&body).unwrap()
}

#[test]
fn test_canonical_startup_document() {
    let text = canonical(SPHERE);
    let expected_header = r#"/*{
  "author": "",
  "copyright": "",
  "date": "",
  "irmf": "1.0",
  "materials": ["PLA"],
  "max": [5,5,5],
  "min": [-5,-5,-5],
  "notes": "",
  "options": {},
  "title": "",
  "units": "mm",
  "version": ""
}*/
"#;
    assert!(text.starts_with(expected_header), "{}", text);
    assert!(text.ends_with(SPHERE.split_once("}*/\n").unwrap().1));
}

#[test]
fn test_canonical_is_idempotent() {
    for src in [SPHERE.to_string(), document(&["a.H", "a.S", "a.V", "b"])] {
        let once = canonical(&src);
        let twice = canonical(&once);
        assert_eq!(once, twice);
    }
}

#[test]
fn test_null_options_become_empty_object() {
    let src = document(&["PLA"]).replace("\"units\": \"mm\"", "\"units\": \"mm\",\n  \"options\": null");
    assert!(canonical(&src).contains("\"options\": {},"));
}

#[test]
fn test_options_keep_key_order_and_extras() {
    let src = document(&["PLA", "metal"]).replace(
        "\"units\": \"mm\"",
        "\"units\": \"mm\",\n  \"options\": {\"camera\": {\"zoom\": 2.5}, \"color2\": [0, 128, 255, 0.5], \"resolution\": 256}",
    );
    let text = canonical(&src);
    assert!(text.contains(
        "  \"options\": {\n    \"resolution\": 256,\n    \"color2\": [0,128,255,0.5],\n    \"camera\": {\n      \"zoom\": 2.5\n    }\n  },\n"
    ));
}

#[test]
fn test_fractional_bounds_kept() {
    let src = document(&["PLA"]).replace("\"max\": [1,1,1]", "\"max\": [1.5, 2.25, 1e3]");
    assert!(canonical(&src).contains("\"max\": [1.5,2.25,1000],"));
}

#[test]
fn test_free_text_fields_in_order() {
    let src = document(&["PLA"]).replace(
        "\"irmf\": \"1.0\",",
        "\"version\": \"2\",\n  \"title\": \"Sphere\",\n  \"author\": \"Ann\",\n  \"irmf\": \"1.0\",",
    );
    let text = canonical(&src);
    let author = text.find("\"author\": \"Ann\"").unwrap();
    let title = text.find("\"title\": \"Sphere\"").unwrap();
    let version = text.find("\"version\": \"2\"").unwrap();
    assert!(author < title && title < version);

    let (document, _) = Document::from_bytes(text.as_bytes()).unwrap();
    assert_eq!(document.author(), "Ann");
}

#[test]
fn test_replaced_options_never_carry_an_encoding() {
    let (document, body) = parse_and_validate(SPHERE.as_bytes()).unwrap();
    let mut options = Options::new();
    options.encoding = Some("gzip".to_string());
    options.resolution = Some(128);
    let updated = document.with_options(options);
    assert_eq!(updated.options().encoding, None);
    assert_eq!(updated.options().resolution, Some(128));

    let text = updated.to_canonical(&body).unwrap();
    assert!(!text.contains("encoding"));

    let (reparsed, reparsed_body) = parse_and_validate(text.as_bytes()).unwrap();
    assert_eq!(reparsed, updated);
    assert_eq!(reparsed_body, body);
}
