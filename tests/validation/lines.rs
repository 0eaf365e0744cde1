//! Line attribution of validation failures

use libirmf::parse_and_validate;
use libirmf::validator::lines::{find_key_line, key_line};

fn failure_line(src: &str) -> usize {
    parse_and_validate(src.as_bytes())
        .unwrap_err()
        .line()
        .unwrap()
}

#[test]
fn test_quoted_key_line() {
    let src = "/*{\n  \"irmf\": \"1.0\",\n  \"materials\": [\"PLA\"],\n  \"max\": [1,1,1],\n  \"min\": [0,0,0],\n\n  \"units\": \"\"\n}*/\n";
    assert_eq!(failure_line(src), 7);
}

#[test]
fn test_bare_key_line() {
    let src = "/*{\n  irmf: \"1.0\",\n  materials: [\"PLA\"],\n  min: [0,0,0],\n  max: [1,1],\n  units: \"mm\",\n}*/\n";
    assert_eq!(failure_line(src), 5);
}

#[test]
fn test_bounds_order_reported_at_min() {
    let src = "/*{\n  \"irmf\": \"1.0\",\n  \"materials\": [\"PLA\"],\n  \"max\": [1,1,1],\n  \"units\": \"mm\",\n  \"min\": [2,0,0]\n}*/\n";
    assert_eq!(failure_line(src), 6);
}

#[test]
fn test_absent_key_falls_back_to_line_2() {
    let src = "/*{\n  \"irmf\": \"1.0\",\n  \"materials\": [\"PLA\"],\n  \"max\": [1,1,1],\n  \"min\": [0,0,0]\n}*/\n";
    assert_eq!(failure_line(src), 2);
}

#[test]
fn test_search_forms_in_priority_order() {
    let text = "{\n  \"notes\": \"units\",\n  units : \"mm\",\n  \"units\": \"cm\"\n}";
    // Quoted key with colon beats the earlier bare forms
    assert_eq!(find_key_line(text, "units"), Some(4));

    let text = "{\n  \"notes\": \"units\",\n  units: \"mm\"\n}";
    assert_eq!(find_key_line(text, "units"), Some(3));

    let text = "{\n  \"notes\": \"units\"\n}";
    assert_eq!(find_key_line(text, "units"), Some(2));
    assert_eq!(key_line("{\n}", "units"), 2);
}
