//! Token types for the rescomp lexer.
//!
//! Statement keywords are **registry-backed IDs** (`Keyword(KeywordId)`); everything else carries
//! its lexical payload.
//!
//! ## Notes
//! - There is no dedicated token for enumeration values (`LZ4W`, `ROW`, `-1`): they lex as
//!   identifiers or integers and the grammar classifies them against the vocabulary expected at the
//!   current field position (see `rescomp_core::lang::vocab`).
//! - Integers keep their normalized decimal spelling (sign + digits, separators removed). Conversion
//!   to `i64` happens when the AST is built so overflow is reported against the statement.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use crate::ast::{SizeSuffix, Span};
use rescomp_core::lang::keywords::{self, KeywordId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ========== Statement keywords (ID-based) ==========
    Keyword(KeywordId),

    // ========== Identifiers and Literals ==========
    Ident(String),
    Int(String),
    /// Integer with a sizing suffix (`32p`, `4f`).
    Size { digits: String, suffix: SizeSuffix },
    /// `[1,2,3]`
    IntArray(Vec<String>),
    /// `[1,2][3,4]` or `[[1,2][3,4]]`
    IntArray2d(Vec<Vec<String>>),
    /// String literal content between the quotes, escapes preserved.
    String(String),
    /// String literal of the form `"sortby:<key>"`; carries `<key>`.
    SortKey(String),

    // ========== Layout ==========
    Newline,

    // ========== Special ==========
    /// Placeholder for a line the lexer could not tokenize; the error is already reported.
    Error,
    Eof,
}

/// A token with its kind and source position.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    /// 1-based line.
    pub line: usize,
    /// 1-based column.
    pub column: usize,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span, line: usize, column: usize) -> Self {
        Self {
            kind,
            span,
            line,
            column,
        }
    }
}

/// A `#` or `//` comment, kept beside the token stream rather than in it.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    /// Text from the marker to the end of the line, trailing whitespace removed.
    pub text: String,
    pub span: Span,
    /// 1-based line.
    pub line: usize,
    /// `true` when the comment follows a token on the same line.
    pub trailing: bool,
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
