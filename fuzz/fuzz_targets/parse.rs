#![no_main]

use libfuzzer_sys::fuzz_target;
use rescomp::diagnostics::line_col;
use rescomp::parser;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Lexer and parser together; recovery must never panic
        let output = parser::parse_source(s);
        for err in &output.errors {
            assert!(err.span.start <= s.len());
            assert_eq!(line_col(s, err.span.start), (err.line, err.column));
        }
    }
});
