//! Resource file formatter
//!
//! Rewrites declaration files in canonical form:
//! - one statement per line, fields separated by single spaces
//! - optional keyword column alignment
//! - a blank line between groups of related resources
//!
//! Comments are carried through as lexer trivia and kept on their lines. Original blank lines are
//! not kept. Sources with any error are refused rather than partially rewritten.

mod config;
mod formatter;

pub use config::FormatConfig;
pub use formatter::Formatter;

use rescomp_syntax::diagnostics::CompileError;
use rescomp_syntax::parser;
use thiserror::Error;

/// Errors that prevent formatting
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("source has {} error(s); fix them before formatting", .0.len())]
    InvalidSource(Vec<CompileError>),
}

/// Format resource declarations with default settings
pub fn format_source(source: &str) -> Result<String, FormatError> {
    format_source_with_config(source, FormatConfig::default())
}

/// Format resource declarations with custom configuration
#[tracing::instrument(skip_all, fields(bytes = source.len()))]
pub fn format_source_with_config(source: &str, config: FormatConfig) -> Result<String, FormatError> {
    let output = parser::parse_source(source);
    if output.has_errors() {
        return Err(FormatError::InvalidSource(output.errors));
    }

    let formatter = Formatter::new(config);
    Ok(formatter.format(&output.program, &output.comments))
}

/// Check if source code is already formatted
pub fn check_formatted(source: &str) -> Result<bool, FormatError> {
    let formatted = format_source(source)?;
    Ok(source == formatted)
}

/// Get the diff between original and formatted source
pub fn format_diff(source: &str) -> Result<Option<String>, FormatError> {
    let formatted = format_source(source)?;
    Ok(line_diff(source, &formatted))
}

/// Simple line-by-line diff, `None` when both texts are equal.
pub fn line_diff(original: &str, formatted: &str) -> Option<String> {
    if original == formatted {
        return None;
    }

    let mut diff = String::new();
    let original_lines: Vec<&str> = original.lines().collect();
    let formatted_lines: Vec<&str> = formatted.lines().collect();

    let max_lines = original_lines.len().max(formatted_lines.len());

    for i in 0..max_lines {
        let orig = original_lines.get(i).unwrap_or(&"");
        let fmt = formatted_lines.get(i).unwrap_or(&"");

        if orig != fmt {
            if !orig.is_empty() {
                diff.push_str(&format!("-{:4} | {}\n", i + 1, orig));
            }
            if !fmt.is_empty() {
                diff.push_str(&format!("+{:4} | {}\n", i + 1, fmt));
            }
        }
    }

    Some(diff)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# title screen
PALETTE   pal_title \"title.png\"
IMAGE title \"title.png\"  BEST ALL 0
TILEMAP level \"level.tmx\" \"ground\" NONE APLIB
SPRITE hero \"hero.png\" 4 4 FAST [[4,4][8]]
XGM2 music \"a.vgm\" \"b.vgm\"
WAV jump \"jump.wav\" PCM
ALIGN
";

    #[test]
    fn test_format_default() {
        insta::assert_snapshot!(format_source(SAMPLE).unwrap(), @r#"
        # title screen
        PALETTE pal_title "title.png"
        IMAGE title "title.png" BEST ALL 0

        TILEMAP level "level.tmx" "ground" NONE APLIB

        SPRITE hero "hero.png" 4 4 FAST [[4,4][8]]

        XGM2 music "a.vgm" "b.vgm"
        WAV jump "jump.wav" PCM

        ALIGN
        "#);
    }

    #[test]
    fn test_format_aligned_without_groups() {
        let config = FormatConfig::new()
            .with_keyword_alignment(true)
            .with_group_separation(false);
        insta::assert_snapshot!(format_source_with_config(SAMPLE, config).unwrap(), @r#"
        # title screen
        PALETTE pal_title "title.png"
        IMAGE   title "title.png" BEST ALL 0
        TILEMAP level "level.tmx" "ground" NONE APLIB
        SPRITE  hero "hero.png" 4 4 FAST [[4,4][8]]
        XGM2    music "a.vgm" "b.vgm"
        WAV     jump "jump.wav" PCM
        ALIGN
        "#);
    }

    #[test]
    fn test_format_is_idempotent() {
        let once = format_source(SAMPLE).unwrap();
        let twice = format_source(&once).unwrap();
        assert_eq!(once, twice);
        assert!(check_formatted(&once).unwrap());
        assert!(!check_formatted(SAMPLE).unwrap());
    }

    #[test]
    fn test_format_keeps_comments() {
        let formatted = format_source("# player graphics\nBITMAP a \"a.png\" // logo\n").unwrap();
        assert_eq!(formatted, "# player graphics\nBITMAP a \"a.png\" // logo\n");
    }

    #[test]
    fn test_comments_stay_with_the_statement_below_them() {
        let source = "\
PALETTE p \"p.png\"   # shared palette

// hero
SPRITE   hero \"hero.png\" 4 4
# end of sprites
";
        insta::assert_snapshot!(format_source(source).unwrap(), @r#"
        PALETTE p "p.png" # shared palette

        // hero
        SPRITE hero "hero.png" 4 4
        # end of sprites
        "#);
        let once = format_source(source).unwrap();
        assert_eq!(format_source(&once).unwrap(), once);
    }

    #[test]
    fn test_comment_only_source() {
        assert_eq!(format_source("  # nothing yet  \n\n").unwrap(), "# nothing yet\n");
    }

    #[test]
    fn test_trailing_newline_toggle() {
        let config = FormatConfig::new().with_trailing_newline(false);
        assert_eq!(format_source_with_config("NEAR\n", config).unwrap(), "NEAR");
        assert_eq!(format_source("").unwrap(), "");
    }

    #[test]
    fn test_format_refuses_invalid_source() {
        let err = format_source("BITMAP a \"a.png\"\nBITMAP b\n").unwrap_err();
        let FormatError::InvalidSource(errors) = &err;
        assert_eq!(errors.len(), 1);
        assert_eq!(err.to_string(), "source has 1 error(s); fix them before formatting");
    }

    #[test]
    fn test_format_diff() {
        assert_eq!(format_diff("NEAR\n").unwrap(), None);
        let diff = format_diff("BIN  d \"d.bin\"\n").unwrap().unwrap();
        assert_eq!(diff, "-   1 | BIN  d \"d.bin\"\n+   1 | BIN d \"d.bin\"\n");
    }
}
