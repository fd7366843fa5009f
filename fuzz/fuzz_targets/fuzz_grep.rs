#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;
use tabgrep::{FieldSpec, Grep, GrepConfig};

fuzz_target!(|data: &[u8]| {
    // Split the data into patterns and records
    // First 1/4 is the pattern list, rest is input
    let split_point = data.len() / 4;
    let (pattern_bytes, input_bytes) = data.split_at(split_point);

    let pattern_text = match std::str::from_utf8(pattern_bytes) {
        Ok(s) => s,
        Err(_) => return,
    };

    // Limit input sizes to prevent hangs
    if pattern_text.len() > 1000 || input_bytes.len() > 100000 {
        return;
    }

    let patterns: Vec<String> = pattern_text.lines().map(|l| l.to_string()).collect();
    if patterns.is_empty() {
        return;
    }

    // Exercise both matching modes and both header modes
    for (use_regex, no_header_row) in [(false, false), (false, true), (true, false), (true, true)] {
        let config = GrepConfig {
            patterns: patterns.clone(),
            use_regex,
            no_header_row,
            key: FieldSpec::Index(1),
            ..GrepConfig::default()
        };
        let mut grep = match Grep::new(config) {
            Ok(g) => g,
            Err(_) => continue,
        };
        let mut output = Vec::new();
        let _ = grep.run(vec![Cursor::new(input_bytes)], &mut output);
    }
});
