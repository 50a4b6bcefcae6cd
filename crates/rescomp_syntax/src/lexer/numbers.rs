//! Integer scanning for the rescomp lexer
//!
//! Handles plain integers (`0`, `1_000`, `-1`) and sized integers (`32p`, `4f`).

use super::tokens::{Token, TokenKind};
use super::{Lexer, is_ident_continue};
use crate::ast::SizeSuffix;

impl<'a> Lexer<'a> {
    /// Scan an integer whose first character (`-` or a digit) was already consumed.
    pub(super) fn scan_number(&mut self, start: usize) -> Token {
        let digits = match self.scan_int_body(start) {
            Ok(digits) => digits,
            Err(message) => return self.fail(start, message),
        };

        // Optional sizing suffix, only when it is not the start of a longer word.
        let suffix = match self.peek().and_then(SizeSuffix::from_char) {
            Some(suffix) if !self.peek_next().is_some_and(is_ident_continue) => {
                self.advance();
                Some(suffix)
            }
            _ => None,
        };

        if self.peek().is_some_and(is_ident_continue) {
            while self.peek().is_some_and(is_ident_continue) {
                self.advance();
            }
            return self.fail(start, "Invalid integer literal");
        }

        let kind = match suffix {
            Some(suffix) => TokenKind::Size { digits, suffix },
            None => TokenKind::Int(digits),
        };
        self.make_token(kind, start)
    }

    /// Read the rest of an integer literal starting at `start` and return its normalized spelling.
    ///
    /// The character at `start` (a digit or `-`) must already be consumed. Used both for standalone
    /// integers and for array elements.
    pub(super) fn scan_int_body(&mut self, start: usize) -> Result<String, &'static str> {
        let mut normalized = String::new();
        let first = self.source[start..].chars().next();
        match first {
            Some('-') => {
                normalized.push('-');
                match self.peek() {
                    Some(c) if c.is_ascii_digit() => {
                        self.advance();
                        normalized.push(c);
                    }
                    _ => return Err("Expected digits after '-'"),
                }
            }
            Some(c) if c.is_ascii_digit() => normalized.push(c),
            _ => return Err("Expected an integer literal"),
        }

        let mut last_was_separator = false;
        let mut misplaced_separator = false;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                normalized.push(c);
                last_was_separator = false;
            } else if c == '_' {
                misplaced_separator |= last_was_separator;
                last_was_separator = true;
            } else {
                break;
            }
            self.advance();
        }
        if misplaced_separator || last_was_separator {
            return Err("Misplaced digit separator in integer literal");
        }

        let magnitude = normalized.trim_start_matches('-');
        if magnitude.len() > 1 && magnitude.starts_with('0') {
            return Err("Invalid leading zero in integer literal");
        }
        Ok(normalized)
    }
}
