//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and give the grammar one
//! place to ask “how is this token spelled?” when matching closed vocabularies.

use std::borrow::Cow;

use crate::lexer::{SORT_KEY_PREFIX, Token, TokenKind};
use rescomp_core::lang::keywords::{self, KeywordId};

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return `true` if this token ends a statement.
    pub fn is_terminator(&self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Eof)
    }

    /// Spelling of a bare word: identifier, keyword or plain integer.
    ///
    /// These are the tokens that can spell a member of a closed vocabulary (`LZ4W`, `XGM2`, `-1`).
    pub fn word(&self) -> Option<Cow<'_, str>> {
        match self {
            TokenKind::Ident(s) | TokenKind::Int(s) => Some(Cow::Borrowed(s.as_str())),
            TokenKind::Keyword(id) => Some(Cow::Borrowed(keywords::as_str(*id))),
            _ => None,
        }
    }

    /// Content of a string literal, including one the lexer classified as a sort key.
    ///
    /// A `"sortby:<key>"` literal is still a string wherever the grammar wants plain text.
    pub fn string_content(&self) -> Option<Cow<'_, str>> {
        match self {
            TokenKind::String(s) => Some(Cow::Borrowed(s.as_str())),
            TokenKind::SortKey(key) => Some(Cow::Owned(format!("{SORT_KEY_PREFIX}{key}"))),
            _ => None,
        }
    }

    /// Short human description for diagnostics (“string literal \"a.png\"”, “end of line”).
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Keyword(id) => format!("keyword '{}'", keywords::as_str(*id)),
            TokenKind::Ident(s) => format!("identifier '{}'", s),
            TokenKind::Int(s) => format!("integer {}", s),
            TokenKind::Size { digits, suffix } => format!("size {}{}", digits, suffix.as_char()),
            TokenKind::IntArray(_) => "integer array".to_string(),
            TokenKind::IntArray2d(_) => "integer array of arrays".to_string(),
            TokenKind::String(s) => format!("string literal \"{}\"", s),
            TokenKind::SortKey(s) => format!("sort key \"sortby:{}\"", s),
            TokenKind::Newline => "end of line".to_string(),
            TokenKind::Error => "invalid token".to_string(),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.describe()`.
    pub fn describe(&self) -> String {
        self.kind.describe()
    }
}
