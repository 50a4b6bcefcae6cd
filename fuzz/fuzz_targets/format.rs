#![no_main]

use libfuzzer_sys::fuzz_target;
use rescomp::format::format_source;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Anything the formatter accepts must format to a fixed point
        if let Ok(once) = format_source(s) {
            let twice = format_source(&once).expect("formatted output must parse");
            assert_eq!(once, twice);
        }
    }
});
