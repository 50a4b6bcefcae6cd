//! CLI module for the rescomp front-end
//!
//! This module provides the command-line interface for checking and formatting resource
//! declaration files.
//!
//! ## Commands
//!
//! - `check <file>` - Parse a file and report every error (default action)
//! - `lex <file>` - Print the token stream (debug)
//! - `parse <file> [--json]` - Print the parsed statements
//! - `fmt <file|dir> [--check] [--diff]` - Rewrite files in canonical form
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//! - `sources` - Source file discovery and reading
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod sources;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::version::RESCOMP_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
    /// The input was read but contains declaration errors.
    pub const INVALID_INPUT: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Create an error for input that parsed with errors (exit code 2).
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::INVALID_INPUT)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<sources::SourceError> for CliError {
    fn from(err: sources::SourceError) -> Self {
        CliError::failure(err.to_string())
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Checker and formatter for rescomp resource declarations
#[derive(Parser, Debug)]
#[command(name = "rescomp")]
#[command(version = RESCOMP_VERSION)]
#[command(about = "Checker and formatter for rescomp resource declarations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to check (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a file and report every error
    Check {
        /// Resource file to check
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the token stream (debug)
    Lex {
        /// Resource file to tokenize
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the parsed statements
    Parse {
        /// Resource file to parse
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Print the statements as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rewrite resource files in canonical form
    Fmt {
        /// File or directory to format
        #[arg(value_name = "PATH", default_value = ".")]
        path: PathBuf,
        /// Check formatting without modifying files
        #[arg(long)]
        check: bool,
        /// Show diff of formatting changes
        #[arg(long)]
        diff: bool,
        /// Pad keywords so first fields line up
        #[arg(long)]
        align: bool,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Some(Command::Check { file }) => commands::check_file(&file),
        Some(Command::Lex { file }) => commands::lex_file(&file),
        Some(Command::Parse { file, json }) => commands::parse_file(&file, json),
        Some(Command::Fmt {
            path,
            check,
            diff,
            align,
        }) => commands::format_files(&path, check, diff, align),
        None => {
            // Default: check the file if provided
            if let Some(file) = cli.file {
                commands::check_file(&file)
            } else {
                // No command and no file - show help
                Err(CliError::new("", ExitCode::FAILURE))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
