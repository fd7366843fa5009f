#![no_main]

use libfuzzer_sys::fuzz_target;
use tabgrep::PatternSet;

fuzz_target!(|data: &str| {
    // Limit input size to prevent hangs
    if data.len() > 10000 {
        return;
    }

    let patterns: Vec<String> = data.lines().map(|l| l.to_string()).collect();

    // Literal compilation accepts anything; hit testing must not panic
    if let Ok(set) = PatternSet::compile(&patterns, false, false) {
        let _ = set.is_hit(data);
    }
    if let Ok(set) = PatternSet::compile(&patterns, true, false) {
        let _ = set.is_hit(data);
    }

    // Regex compilation may reject the input, but never panic or hang
    if let Ok(set) = PatternSet::compile(&patterns, false, true) {
        let _ = set.is_hit(data);
    }
    if let Ok(set) = PatternSet::compile(&patterns, true, true) {
        let _ = set.is_hit(data);
    }
});
