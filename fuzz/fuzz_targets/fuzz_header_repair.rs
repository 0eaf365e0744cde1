#![no_main]

use libfuzzer_sys::fuzz_target;
use libirmf::parser::repair::{quote_known_keys, strip_trailing_commas};
use libirmf::{ParserConfig, parser::parse_header};

fuzz_target!(|text: &str| {
    // Repair must keep every line where it was
    let newlines = text.matches('\n').count();
    let stripped = strip_trailing_commas(text);
    assert_eq!(stripped.matches('\n').count(), newlines);
    assert_eq!(quote_known_keys(&stripped).matches('\n').count(), newlines);

    let _ = parse_header(text, &ParserConfig::new());
});
