//! String scanning for the rescomp lexer
//!
//! Handles double-quoted string literals and the `"sortby:<key>"` sort-key form.

use super::Lexer;
use super::tokens::{Token, TokenKind};

/// Content prefix that turns a string literal into a sort-key literal.
pub const SORT_KEY_PREFIX: &str = "sortby:";

impl<'a> Lexer<'a> {
    /// Scan a string literal whose opening quote was already consumed.
    ///
    /// The content is kept verbatim: escapes are validated (a backslash must be followed by a
    /// character on the same line) but not decoded.
    pub(super) fn scan_string(&mut self, start: usize) -> Token {
        loop {
            match self.peek() {
                None | Some('\n') => return self.fail(start, "Unterminated string literal"),
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    match self.peek() {
                        None | Some('\n') | Some('\r') => {
                            return self.fail(start, "Malformed escape sequence in string literal");
                        }
                        Some(_) => {
                            self.advance();
                        }
                    }
                }
                Some(_) => {
                    self.advance();
                }
            }
        }

        // Quotes are single-byte, so the content is the span minus both ends.
        let content = &self.source[start + 1..self.current_pos - 1];
        let kind = match content.strip_prefix(SORT_KEY_PREFIX) {
            Some(key) if !key.is_empty() => TokenKind::SortKey(key.to_string()),
            _ => TokenKind::String(content.to_string()),
        };
        self.make_token(kind, start)
    }
}
