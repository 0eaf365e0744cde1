#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|materials: Vec<String>| {
    let groups = libirmf::infer_color_groups(&materials);
    if let Ok(footer) = libirmf::synthesize_footer(materials.len(), &groups) {
        assert!(footer.flat_channels.len() <= materials.len());
    }
});
