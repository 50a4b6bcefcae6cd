//! Diagnostics and error reporting for rescomp declarations
//!
//! Every problem found while lexing or parsing is a [`CompileError`]. Errors are fatal to the
//! statement they occur in, never to the whole pass: callers receive the recognized statements and
//! the accumulated error list side by side.
//!
//! [`CompileError`] implements [`miette::Diagnostic`], so the CLI can render reports with source
//! highlighting via `miette::Report::new(err).with_source_code(...)`.

use std::fmt;

use miette::{Diagnostic, LabeledSpan, Severity};
use thiserror::Error;

use crate::ast::Span;

/// A lexing or parsing error with location information
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct CompileError {
    pub message: String,
    pub span: Span,
    /// 1-based line.
    pub line: usize,
    /// 1-based column (in characters).
    pub column: usize,
    pub kind: ErrorKind,
    pub notes: Vec<String>,
    pub hints: Vec<String>,
}

impl CompileError {
    pub fn new(kind: ErrorKind, message: String, span: Span, line: usize, column: usize) -> Self {
        Self {
            message,
            span,
            line,
            column,
            kind,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn lexical(message: String, span: Span, line: usize, column: usize) -> Self {
        Self::new(ErrorKind::Lexical, message, span, line, column)
    }

    pub fn syntax(message: String, span: Span, line: usize, column: usize) -> Self {
        Self::new(ErrorKind::Syntax, message, span, line, column)
    }

    pub fn semantic(message: String, span: Span, line: usize, column: usize) -> Self {
        Self::new(ErrorKind::Semantic, message, span, line, column)
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unterminated or malformed token.
    Lexical,
    /// Missing required field, unexpected token, unresolvable statement form.
    Syntax,
    /// Well-formed token with an unacceptable value: integer overflow, spelling outside a closed
    /// vocabulary.
    Semantic,
}

impl ErrorKind {
    /// Stable diagnostic code.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Lexical => "rescomp::lexical",
            ErrorKind::Syntax => "rescomp::syntax",
            ErrorKind::Semantic => "rescomp::semantic",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
            ErrorKind::Semantic => write!(f, "invalid value"),
        }
    }
}

impl Diagnostic for CompileError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn severity(&self) -> Option<Severity> {
        Some(Severity::Error)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.hints.is_empty() && self.notes.is_empty() {
            return None;
        }
        let mut lines: Vec<String> = self.notes.iter().map(|n| format!("note: {n}")).collect();
        lines.extend(self.hints.iter().cloned());
        Some(Box::new(lines.join("\n")))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let len = self.span.end.saturating_sub(self.span.start);
        Some(Box::new(std::iter::once(LabeledSpan::new(
            Some(self.kind.to_string()),
            self.span.start,
            len,
        ))))
    }
}

/// Get 1-based line and column for a byte offset.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let mut line = 1;
    let mut line_start = 0;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            line_start = i + 1;
        }
    }

    let column = source[line_start..offset].chars().count() + 1;
    (line, column)
}

/// Format an error as a single `file:line:col: kind: message` line, for plain-text output.
pub fn format_short(file_name: &str, error: &CompileError) -> String {
    format!(
        "{}:{}:{}: {}: {}",
        file_name, error.line, error.column, error.kind, error.message
    )
}

// ============================================================================
// Error catalog: common errors with helpful explanations
// ============================================================================

/// Constructors for the diagnostics the lexer and parser emit more than once.
pub mod errors {
    use super::*;
    use crate::lexer::Token;
    use rescomp_core::lang::keywords::{self, KeywordId};
    use rescomp_core::lang::vocab::{self, VocabId};

    pub fn unknown_keyword(name: &str, token: &Token) -> CompileError {
        let err = CompileError::syntax(
            format!("Unknown statement keyword '{}'", name),
            token.span,
            token.line,
            token.column,
        );
        match keywords::from_str(&name.to_ascii_uppercase()) {
            Some(id) => err.with_hint(format!(
                "Keywords are case-sensitive; did you mean '{}'?",
                keywords::as_str(id)
            )),
            None => err.with_hint("Every declaration starts with a keyword such as BITMAP, TILESET or SPRITE"),
        }
    }

    pub fn expected_keyword(found: &str, token: &Token) -> CompileError {
        CompileError::syntax(
            format!("Expected a statement keyword, found {}", found),
            token.span,
            token.line,
            token.column,
        )
    }

    pub fn missing_field(keyword: KeywordId, field: &str, expected: &str, found: &str, token: &Token) -> CompileError {
        CompileError::syntax(
            format!(
                "{} statement requires {} ({}), found {}",
                keywords::as_str(keyword),
                field,
                expected,
                found
            ),
            token.span,
            token.line,
            token.column,
        )
    }

    pub fn invalid_enum_value(keyword: KeywordId, field: &str, vocab_id: VocabId, spelling: &str, token: &Token) -> CompileError {
        CompileError::semantic(
            format!(
                "'{}' is not a valid {} for {} in {} statement",
                spelling,
                vocab::name(vocab_id),
                field,
                keywords::as_str(keyword)
            ),
            token.span,
            token.line,
            token.column,
        )
        .with_hint(format!("Expected one of: {}", vocab::expected_list(vocab_id)))
    }

    pub fn unexpected_trailing(keyword: KeywordId, found: &str, expected: &[String], token: &Token) -> CompileError {
        let mut err = CompileError::syntax(
            format!("Unexpected {} in {} statement", found, keywords::as_str(keyword)),
            token.span,
            token.line,
            token.column,
        );
        if !expected.is_empty() {
            err = err.with_note(format!("expected {} or end of line", expected.join(", ")));
        }
        err.with_hint("Optional fields must be given in order; a later one cannot be supplied without the earlier ones")
    }

    pub fn unresolved_form(keyword: KeywordId, token: &Token) -> CompileError {
        let kw = keywords::as_str(keyword);
        CompileError::syntax(
            format!(
                "{} statement on line {} matches neither the image form nor the TMX form",
                kw, token.line
            ),
            token.span,
            token.line,
            token.column,
        )
        .with_note(format!("image form: {kw} name \"image.png\" tileset_id ..."))
        .with_note(format!("TMX form:   {kw} name \"map.tmx\" \"layer\" ..."))
    }

    pub fn integer_overflow(raw: &str, token: &Token) -> CompileError {
        CompileError::semantic(
            format!("Integer literal {} does not fit in a 64-bit signed integer", raw),
            token.span,
            token.line,
            token.column,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col() {
        let source = "BITMAP a \"a.png\"\nTILESET t \"t.png\"\n";
        assert_eq!(line_col(source, 0), (1, 1));
        assert_eq!(line_col(source, 7), (1, 8));
        assert_eq!(line_col(source, 17), (2, 1));
        assert_eq!(line_col(source, 25), (2, 9));
        assert_eq!(line_col(source, 10_000), (3, 1));
    }

    #[test]
    fn test_diagnostic_metadata() {
        let err = CompileError::syntax("boom".to_string(), Span::new(3, 7), 1, 4).with_hint("try again");
        assert_eq!(err.to_string(), "boom");
        assert_eq!(err.code().map(|c| c.to_string()).as_deref(), Some("rescomp::syntax"));
        assert_eq!(err.help().map(|h| h.to_string()).as_deref(), Some("try again"));
        let labels: Vec<_> = err.labels().into_iter().flatten().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 3);
        assert_eq!(labels[0].len(), 4);
    }

    #[test]
    fn test_format_short() {
        let err = CompileError::lexical("Unterminated string".to_string(), Span::new(0, 1), 2, 5);
        assert_eq!(format_short("res.res", &err), "res.res:2:5: lexical error: Unterminated string");
    }
}
