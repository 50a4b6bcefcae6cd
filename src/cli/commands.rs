//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use miette::{NamedSource, Report};
use rescomp_syntax::diagnostics::{CompileError, format_short};
use rescomp_syntax::lexer::{LexOutput, Lexer};
use rescomp_syntax::parser::{self, ParseOutput};

use crate::format::{FormatConfig, FormatError, Formatter, line_diff};

use super::sources::{collect_res_files, read_source};
use super::{CliError, CliResult, ExitCode};

/// Render errors as miette reports against the file they came from.
pub fn render_errors(file_path: &Path, source: &str, errors: &[CompileError]) -> String {
    let name = file_path.display().to_string();
    let mut msg = String::new();
    for err in errors {
        let report = Report::new(err.clone()).with_source_code(NamedSource::new(name.clone(), source.to_string()));
        let _ = writeln!(msg, "{report:?}");
    }
    let _ = write!(msg, "{}: {} error(s)", name, errors.len());
    msg
}

fn parse_checked(file_path: &Path) -> CliResult<(String, ParseOutput)> {
    let source = read_source(file_path)?;
    let output = parser::parse_source(&source);
    if output.has_errors() {
        return Err(CliError::invalid_input(render_errors(file_path, &source, &output.errors)));
    }
    Ok((source, output))
}

/// Parse a file and report every error.
pub fn check_file(file_path: &Path) -> CliResult<ExitCode> {
    let (_, output) = parse_checked(file_path)?;
    println!(
        "✓ {}: {} statement(s)",
        file_path.display(),
        output.program.len()
    );
    Ok(ExitCode::SUCCESS)
}

/// Tokenize and display tokens.
pub fn lex_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let LexOutput { tokens, errors, .. } = Lexer::new(&source).tokenize();

    for tok in &tokens {
        println!("{:?}", tok);
    }
    if !errors.is_empty() {
        return Err(CliError::invalid_input(render_errors(file_path, &source, &errors)));
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and display statements, as canonical text or JSON.
pub fn parse_file(file_path: &Path, json: bool) -> CliResult<ExitCode> {
    let (_, output) = parse_checked(file_path)?;

    if json {
        let text = serde_json::to_string_pretty(&output.program)
            .map_err(|e| CliError::failure(format!("Error serializing AST: {}", e)))?;
        println!("{}", text);
    } else {
        for stmt in &output.program {
            println!("{:>4} | {}", stmt.line, stmt);
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Format one or more resource files.
pub fn format_files(path: &Path, check_mode: bool, diff_mode: bool, align: bool) -> CliResult<ExitCode> {
    let files = collect_res_files(path)?;
    let formatter = Formatter::new(FormatConfig::new().with_keyword_alignment(align));

    let mut needs_formatting = false;
    let mut formatted_count = 0;
    let mut error_count = 0;

    for file_path in &files {
        let source = match read_source(file_path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{}", e);
                error_count += 1;
                continue;
            }
        };

        let output = parser::parse_source(&source);
        if output.has_errors() {
            let name = file_path.display().to_string();
            for err in &output.errors {
                eprintln!("{}", format_short(&name, err));
            }
            eprintln!(
                "Error formatting {}: {}",
                file_path.display(),
                FormatError::InvalidSource(output.errors)
            );
            error_count += 1;
            continue;
        }

        let formatted = formatter.format(&output.program, &output.comments);
        let changed = source != formatted;

        if diff_mode && changed {
            println!("--- {}", file_path.display());
            if let Some(diff) = line_diff(&source, &formatted) {
                print!("{}", diff);
            }
            println!();
        }

        if check_mode {
            if changed {
                println!("Would reformat: {}", file_path.display());
                needs_formatting = true;
            }
        } else if diff_mode {
            if changed {
                needs_formatting = true;
            }
        } else if changed {
            if let Err(e) = fs::write(file_path, &formatted) {
                eprintln!("Error writing {}: {}", file_path.display(), e);
                error_count += 1;
            } else {
                tracing::info!(file = %file_path.display(), "formatted");
                println!("Formatted: {}", file_path.display());
                formatted_count += 1;
            }
        }
    }

    if check_mode || diff_mode {
        if needs_formatting {
            let msg = if diff_mode {
                "need formatting"
            } else {
                "would be reformatted"
            };
            return Err(CliError::failure(format!("\n{} file(s) {}", files.len(), msg)));
        } else {
            println!("✓ {} file(s) already formatted", files.len());
        }
    } else {
        println!("\n✓ {} file(s) formatted, {} error(s)", formatted_count, error_count);
    }

    if error_count > 0 {
        return Err(CliError::new("", ExitCode::FAILURE));
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("rescomp_cmd_{}_{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_check_file_reports_invalid_input() {
        let path = temp_file("bad.res", "BITMAP a \"a.png\"\nSPRITE s \"s.png\" 4\n");
        let err = check_file(&path).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::INVALID_INPUT);
        assert!(err.message.ends_with("1 error(s)"), "got: {}", err.message);
        assert!(err.message.contains("SPRITE statement requires height"));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_check_file_accepts_valid_input() {
        let path = temp_file("good.res", "# sprites\nSPRITE s \"s.png\" 4 4\n");
        assert_eq!(check_file(&path).unwrap(), ExitCode::SUCCESS);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_format_check_mode_does_not_write() {
        let source = "BITMAP   a \"a.png\"\n";
        let path = temp_file("fmt.res", source);
        let err = format_files(&path, true, false, false).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert_eq!(fs::read_to_string(&path).unwrap(), source);

        assert_eq!(format_files(&path, false, false, false).unwrap(), ExitCode::SUCCESS);
        assert_eq!(fs::read_to_string(&path).unwrap(), "BITMAP a \"a.png\"\n");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_format_write_mode_keeps_comments() {
        let path = temp_file("comments.res", "# player graphics\nBITMAP   a \"a.png\" // logo\n");
        assert_eq!(format_files(&path, false, false, false).unwrap(), ExitCode::SUCCESS);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# player graphics\nBITMAP a \"a.png\" // logo\n"
        );
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_render_errors_lists_each_report() {
        let source = "BITMAP a\n";
        let errors = parser::parse_source(source).errors;
        let rendered = render_errors(Path::new("a.res"), source, &errors);
        assert!(rendered.contains("BITMAP statement requires img_file"), "got: {}", rendered);
        assert!(rendered.ends_with("a.res: 1 error(s)"));
    }

    #[test]
    fn test_missing_file_is_failure() {
        let err = check_file(Path::new("no/such/file.res")).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }
}
