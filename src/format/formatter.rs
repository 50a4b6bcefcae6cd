//! Program formatter
//!
//! Lays out a parsed [`Program`] using the canonical printer and a [`FormatConfig`].
//!
//! Comments are placed back by line: a comment on a statement's line follows the printed statement,
//! and comment-only lines are emitted before the next statement (or at the end of the file).

use rescomp_core::lang::keywords;
use rescomp_syntax::ast::Program;
use rescomp_syntax::lexer::Comment;
use rescomp_syntax::printer::{self, PrintOptions};

use super::config::FormatConfig;

/// Formats whole programs.
pub struct Formatter {
    config: FormatConfig,
}

impl Formatter {
    /// Create a new formatter with the given config
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    /// Format a program to source text, re-emitting `comments` (in source order) around it.
    pub fn format(&self, program: &Program, comments: &[Comment]) -> String {
        let options = self.print_options(program);
        let mut output = String::new();
        let mut previous = None;
        let mut pending = comments.iter().peekable();

        for stmt in program {
            let category = keywords::category(stmt.kind);
            if self.config.blank_line_between_groups && previous.is_some_and(|p| p != category) {
                output.push('\n');
            }
            previous = Some(category);

            while let Some(comment) = pending.next_if(|c| c.line < stmt.line) {
                output.push_str(&comment.text);
                output.push('\n');
            }

            output.push_str(&printer::print_statement(stmt, &options));
            if let Some(comment) = pending.next_if(|c| c.line == stmt.line) {
                output.push(' ');
                output.push_str(&comment.text);
            }
            output.push('\n');
        }

        for comment in pending {
            output.push_str(&comment.text);
            output.push('\n');
        }

        if !self.config.trailing_newline && output.ends_with('\n') {
            output.pop();
        }
        output
    }

    fn print_options(&self, program: &Program) -> PrintOptions {
        let keyword_width = if self.config.align_keywords {
            program
                .iter()
                .filter(|s| !s.fields.is_empty())
                .map(|s| keywords::as_str(s.kind).len())
                .max()
                .unwrap_or(0)
        } else {
            0
        };
        PrintOptions {
            field_separator: self.config.field_separator,
            keyword_width,
        }
    }
}
