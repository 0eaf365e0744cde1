#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz the whole editor pipeline: split -> repair -> decode -> validate -> format -> footer
    let _ = libirmf::compile(data, &libirmf::ParserConfig::new());

    // Canonical output must always parse back
    if let Ok((document, body)) = libirmf::parse_and_validate(data) {
        let canonical = document.to_canonical(&body).unwrap();
        libirmf::parse_and_validate(canonical.as_bytes()).unwrap();
    }
});
