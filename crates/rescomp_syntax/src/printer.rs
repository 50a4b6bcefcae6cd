//! Canonical printer for rescomp statements
//!
//! Re-serializes parsed statements to source text. Printing a parsed statement and parsing the
//! result yields the same statement (positions aside), which makes the printer the basis of the
//! formatter and of round-trip tests.
//!
//! Canonical form:
//! - keyword, then every present field in order, separated by spaces
//! - strings and sort keys double-quoted with their content exactly as written
//! - sizes with a lower-case suffix (`32p`, `2f`)
//! - integer arrays without spaces; arrays of arrays always wrapped (`[[5,5][3]]`)
//!
//! Comments are not part of the AST and are not reproduced.

use std::fmt::{self, Write as _};

use crate::ast::{FieldValue, Program, Statement};
use crate::lexer::SORT_KEY_PREFIX;
use rescomp_core::lang::keywords;

/// Layout knobs for printed statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    /// Spaces between consecutive fields (at least one is always written).
    pub field_separator: usize,
    /// Pad keywords to this many columns so first fields line up. `0` disables padding.
    pub keyword_width: usize,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            field_separator: 1,
            keyword_width: 0,
        }
    }
}

/// Print one field value.
pub fn print_value(value: &FieldValue) -> String {
    let mut out = String::new();
    write_value(&mut out, value, " ");
    out
}

/// Print one statement without a line terminator.
pub fn print_statement(stmt: &Statement, options: &PrintOptions) -> String {
    let separator = " ".repeat(options.field_separator.max(1));
    let keyword = keywords::as_str(stmt.kind);
    let mut out = String::new();

    if stmt.fields.is_empty() {
        out.push_str(keyword);
        return out;
    }

    let _ = write!(out, "{:<width$}", keyword, width = options.keyword_width);
    for field in &stmt.fields {
        out.push_str(&separator);
        write_value(&mut out, &field.value, &separator);
    }
    out
}

/// Print every statement on its own line, each terminated by `\n`.
pub fn print_program(program: &Program, options: &PrintOptions) -> String {
    let mut out = String::new();
    for stmt in program {
        out.push_str(&print_statement(stmt, options));
        out.push('\n');
    }
    out
}

fn write_value(out: &mut String, value: &FieldValue, separator: &str) {
    match value {
        FieldValue::Ident(s) => out.push_str(s),
        FieldValue::Str(s) => {
            let _ = write!(out, "\"{s}\"");
        }
        FieldValue::Strs(items) => {
            for (i, s) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(separator);
                }
                let _ = write!(out, "\"{s}\"");
            }
        }
        FieldValue::Int(v) => {
            let _ = write!(out, "{v}");
        }
        FieldValue::Size(size) => {
            let _ = write!(out, "{}", size.value);
            if let Some(suffix) = size.suffix {
                out.push(suffix.as_char());
            }
        }
        FieldValue::IntArray(items) => write_int_array(out, items),
        FieldValue::IntArray2d(rows) => {
            out.push('[');
            for row in rows {
                write_int_array(out, row);
            }
            out.push(']');
        }
        FieldValue::SortKey(key) => {
            let _ = write!(out, "\"{SORT_KEY_PREFIX}{key}\"");
        }
        FieldValue::Enum(e) => out.push_str(e.spelling),
    }
}

fn write_int_array(out: &mut String, items: &[i64]) {
    out.push('[');
    for (i, v) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "{v}");
    }
    out.push(']');
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print_value(self))
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print_statement(self, &PrintOptions::default()))
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print_program(self, &PrintOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    fn reprint(source: &str) -> String {
        let output = parser::parse_source(source);
        assert!(output.errors.is_empty(), "unexpected errors: {:?}", output.errors);
        output.program.to_string()
    }

    #[test]
    fn test_canonical_spacing() {
        insta::assert_snapshot!(
            reprint("SPRITE   hero \"hero.png\"\t4  32P FAST [5][3,3]   BOX\n# gone\nUNGROUP\n"),
            @r#"
        SPRITE hero "hero.png" 4 32p FAST [[5][3,3]] BOX
        UNGROUP
        "#
        );
    }

    #[test]
    fn test_strings_keep_escapes() {
        insta::assert_snapshot!(
            reprint(r#"OBJECTS o "lvl\\a.tmx" "l1" "defs \"x\"" "sortby:y" "T""#),
            @r#"OBJECTS o "lvl\\a.tmx" "l1" "defs \"x\"" "sortby:y" "T""#
        );
    }

    #[test]
    fn test_keyword_alignment() {
        let program = parser::parse_source("BIN d \"d.bin\" 2\nNEAR\nXGM2 m \"a.vgm\" \"b.vgm\"\n").program;
        let options = PrintOptions {
            field_separator: 2,
            keyword_width: 7,
        };
        insta::assert_snapshot!(print_program(&program, &options), @r#"
        BIN      d  "d.bin"  2
        NEAR
        XGM2     m  "a.vgm"  "b.vgm"
        "#);
    }

    #[test]
    fn test_print_value() {
        let stmt = &parser::parse_source("WAV w \"w.wav\" XGM -1").program.statements[0];
        let printed: Vec<String> = stmt.fields.iter().map(|f| print_value(&f.value)).collect();
        assert_eq!(printed, ["w", "\"w.wav\"", "XGM", "-1"]);
    }
}
