#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    // Whole-file conversion: header tokenizer, matrix size check, id base
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = tsplib_norm::convert_str(s, Path::new("fuzz.tsp"));
    }
});
