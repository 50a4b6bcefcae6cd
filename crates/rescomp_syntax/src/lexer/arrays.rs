//! Integer array scanning for the rescomp lexer
//!
//! Accepted shapes:
//! - `[1,2,3]`: one row
//! - `[1,2][3,4]`: several rows concatenated with no separator
//! - `[[1,2][3,4]]`: rows wrapped in an outer pair (rows may also be comma separated)
//!
//! Whitespace is allowed inside the brackets but not between concatenated rows. The wrapped form is
//! always two-dimensional, even with a single row.

use super::Lexer;
use super::tokens::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Scan an array literal whose opening `[` was already consumed.
    pub(super) fn scan_array(&mut self, start: usize) -> Token {
        self.skip_inline_whitespace();
        let result = if self.peek() == Some('[') {
            self.scan_wrapped_rows().map(TokenKind::IntArray2d)
        } else {
            self.scan_concatenated_rows().map(|mut rows| {
                if rows.len() == 1 {
                    TokenKind::IntArray(rows.remove(0))
                } else {
                    TokenKind::IntArray2d(rows)
                }
            })
        };

        match result {
            Ok(kind) => self.make_token(kind, start),
            Err(message) => self.fail(start, message),
        }
    }

    /// `[a,b][c]...` with the first `[` consumed.
    fn scan_concatenated_rows(&mut self) -> Result<Vec<Vec<String>>, &'static str> {
        let mut rows = vec![self.scan_row()?];
        while self.peek() == Some('[') {
            self.advance();
            rows.push(self.scan_row()?);
        }
        Ok(rows)
    }

    /// `[[a,b][c]]` with the outer `[` consumed, positioned on the first inner `[`.
    fn scan_wrapped_rows(&mut self) -> Result<Vec<Vec<String>>, &'static str> {
        let mut rows = Vec::new();
        loop {
            self.skip_inline_whitespace();
            match self.peek() {
                Some('[') => {
                    self.advance();
                    rows.push(self.scan_row()?);
                }
                Some(',') if !rows.is_empty() => {
                    self.advance();
                }
                Some(']') if !rows.is_empty() => {
                    self.advance();
                    return Ok(rows);
                }
                _ => return Err("Expected '[' or ']' in nested integer array"),
            }
        }
    }

    /// Elements of one row up to and including its closing `]`.
    fn scan_row(&mut self) -> Result<Vec<String>, &'static str> {
        let mut values = Vec::new();
        loop {
            self.skip_inline_whitespace();
            let element_start = self.current_pos;
            // Peek first: a line break must never be consumed here.
            match self.peek() {
                Some(c) if c == '-' || c.is_ascii_digit() => {
                    self.advance();
                    values.push(self.scan_int_body(element_start)?);
                }
                Some(']') if values.is_empty() => {
                    self.advance();
                    return Err("Empty integer array");
                }
                _ => return Err("Expected an integer in array literal"),
            }
            self.skip_inline_whitespace();
            match self.peek() {
                Some(',') => {
                    self.advance();
                }
                Some(']') => {
                    self.advance();
                    return Ok(values);
                }
                _ => return Err("Expected ',' or ']' in integer array"),
            }
        }
    }
}
