//! Lexer for rescomp resource declarations
//!
//! Handles tokenization including:
//! - Statement keywords (BITMAP, TILESET, SPRITE, ...)
//! - Identifiers and literals (string, sort key, integer, sized integer, integer arrays)
//! - Line breaks, which terminate statements
//! - Comments (`#` and `//` to end of line), kept as [`Comment`] trivia outside the token stream
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `strings` - String and sort-key literal scanning
//! - `numbers` - Integer and sized-integer scanning
//! - `arrays` - Integer array scanning
//!
//! ## Error recovery
//!
//! A malformed token does not stop the lexer. The error is recorded, the rest of the line is
//! skipped, and a single [`TokenKind::Error`] token marks the line so the parser can drop the
//! statement without reporting it a second time.

mod arrays;
mod numbers;
mod strings;
pub mod tokens;

pub use strings::SORT_KEY_PREFIX;
pub use tokens::{Comment, Token, TokenKind, keyword_id};

use crate::ast::Span;
use crate::diagnostics::CompileError;

/// Tokens and lexical errors of one input, as produced by [`Lexer::tokenize`].
#[derive(Debug, Clone, PartialEq)]
pub struct LexOutput {
    /// Always ends with an `Eof` token.
    pub tokens: Vec<Token>,
    pub errors: Vec<CompileError>,
    /// Comments in source order.
    pub comments: Vec<Comment>,
}

/// Lexer for rescomp source text.
///
/// Tokens are produced lazily through [`Lexer::next_token`] (or the `Iterator` impl);
/// [`Lexer::tokenize`] drains the whole input.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    line: usize,
    line_start: usize,
    /// No significant token emitted on the current line yet.
    at_line_start: bool,
    finished: bool,
    errors: Vec<CompileError>,
    comments: Vec<Comment>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            line_start: 0,
            at_line_start: true,
            finished: false,
            errors: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Tokenize the entire input.
    ///
    /// The token stream always ends with an `Eof` token, even when errors were reported.
    pub fn tokenize(mut self) -> LexOutput {
        let tokens: Vec<Token> = self.by_ref().collect();
        LexOutput {
            tokens,
            errors: self.errors,
            comments: self.comments,
        }
    }

    /// Lexical errors reported so far.
    pub fn errors(&self) -> &[CompileError] {
        &self.errors
    }

    /// Comments collected so far.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Produce the next significant token, or `None` once `Eof` has been returned.
    pub fn next_token(&mut self) -> Option<Token> {
        while !self.finished {
            if let Some(token) = self.scan_token() {
                if !matches!(token.kind, TokenKind::Newline | TokenKind::Eof) {
                    self.at_line_start = false;
                }
                return Some(token);
            }
        }
        None
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next(); // skip current
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn skip_inline_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c == ' ' || c == '\t' || c == '\r' {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Consume everything up to (not including) the next line break.
    fn skip_to_line_end(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn column_of(&self, offset: usize) -> usize {
        self.source[self.line_start..offset].chars().count() + 1
    }

    fn make_token(&self, kind: TokenKind, start: usize) -> Token {
        Token::new(
            kind,
            Span::new(start, self.current_pos),
            self.line,
            self.column_of(start),
        )
    }

    /// Record a lexical error for the token starting at `start`, skip the rest of the line and
    /// return the `Error` marker token.
    fn fail(&mut self, start: usize, message: &str) -> Token {
        let offending = self.source[start..self.current_pos].to_string();
        let column = self.column_of(start);
        self.skip_to_line_end();
        tracing::debug!(line = self.line, column, %offending, "lexical error, skipping rest of line");
        self.errors.push(CompileError::lexical(
            format!("{}: {}", message, offending),
            Span::new(start, self.current_pos.max(start + 1).min(self.source.len())),
            self.line,
            column,
        ));
        Token::new(TokenKind::Error, Span::new(start, self.current_pos), self.line, column)
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    /// Scan one lexeme. Returns `None` for extras (comments, blank line breaks).
    fn scan_token(&mut self) -> Option<Token> {
        self.skip_inline_whitespace();

        let start = self.current_pos;

        let Some(c) = self.advance() else {
            self.finished = true;
            return Some(self.make_token(TokenKind::Eof, start));
        };

        match c {
            // Comments
            '#' => {
                self.scan_comment(start);
                None
            }
            '/' if self.peek() == Some('/') => {
                self.scan_comment(start);
                None
            }

            // Line breaks terminate statements; blank lines collapse.
            '\n' => {
                let token = (!self.at_line_start).then(|| self.make_token(TokenKind::Newline, start));
                self.line += 1;
                self.line_start = self.current_pos;
                self.at_line_start = true;
                token
            }

            // Literals
            '"' => Some(self.scan_string(start)),
            '[' => Some(self.scan_array(start)),
            '-' if self.peek().is_some_and(|c| c.is_ascii_digit()) => Some(self.scan_number(start)),
            '0'..='9' => Some(self.scan_number(start)),

            // Identifiers and keywords
            _ if is_ident_start(c) => Some(self.scan_identifier(start)),

            _ => Some(self.fail(start, "Unexpected character")),
        }
    }

    fn scan_comment(&mut self, start: usize) {
        self.skip_to_line_end();
        let text = self.source[start..self.current_pos].trim_end();
        self.comments.push(Comment {
            text: text.to_string(),
            span: Span::new(start, start + text.len()),
            line: self.line,
            trailing: !self.at_line_start,
        });
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: usize) -> Token {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[start..self.current_pos];

        // Look up identifier spelling in the keyword registry (no allocation for keywords).
        let kind = match keyword_id(spelling) {
            Some(id) => TokenKind::Keyword(id),
            None => TokenKind::Ident(spelling.to_string()),
        };
        self.make_token(kind, start)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string, failing on any lexical error.
///
/// Use [`Lexer::tokenize`] to keep the tokens of the well-formed lines as well.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<CompileError>> {
    let output = Lexer::new(source).tokenize();
    if output.errors.is_empty() {
        Ok(output.tokens)
    } else {
        Err(output.errors)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::SizeSuffix;
    use rescomp_core::lang::keywords::{self, KeywordId};

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source)
            .unwrap_or_else(|errs| panic!("lex({:?}) failed: {:?}", source, errs))
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn int(s: &str) -> TokenKind {
        TokenKind::Int(s.to_string())
    }

    #[test]
    fn test_keyword_registry_parity() {
        for k in keywords::KEYWORDS {
            let tokens = kinds(k.canonical);
            assert_eq!(
                tokens,
                vec![TokenKind::Keyword(k.id), TokenKind::Eof],
                "keyword {:?} should lex as a single token",
                k.id
            );
        }
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        let tokens = kinds("BITMAP bitmap Bitmap");
        assert_eq!(tokens[0], TokenKind::Keyword(KeywordId::Bitmap));
        assert_eq!(tokens[1], TokenKind::Ident("bitmap".to_string()));
        assert_eq!(tokens[2], TokenKind::Ident("Bitmap".to_string()));
    }

    #[test]
    fn test_statement_line() {
        let tokens = kinds("BITMAP logo \"logo.png\" LZ4W\n");
        assert_eq!(
            tokens,
            vec![
                TokenKind::Keyword(KeywordId::Bitmap),
                TokenKind::Ident("logo".to_string()),
                TokenKind::String("logo.png".to_string()),
                TokenKind::Ident("LZ4W".to_string()),
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_integers() {
        assert_eq!(kinds("0 123 1_000 -1"), vec![int("0"), int("123"), int("1000"), int("-1"), TokenKind::Eof]);
    }

    #[test]
    fn test_leading_zero_rejected() {
        let errors = lex("0123").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("leading zero"), "got: {}", errors[0].message);
        assert!(errors[0].message.contains("0123"));
    }

    #[test]
    fn test_misplaced_separator_rejected() {
        assert!(lex("1__0").is_err());
        assert!(lex("10_").is_err());
        assert!(lex("12ab").is_err());
    }

    #[test]
    fn test_size_literals() {
        let tokens = kinds("32p 4F 8");
        assert_eq!(
            tokens[0],
            TokenKind::Size {
                digits: "32".to_string(),
                suffix: SizeSuffix::Pixels
            }
        );
        assert_eq!(
            tokens[1],
            TokenKind::Size {
                digits: "4".to_string(),
                suffix: SizeSuffix::Frames
            }
        );
        assert_eq!(tokens[2], int("8"));
    }

    #[test]
    fn test_strings_and_sort_keys() {
        let tokens = kinds(r#""a.png" "sortby:x" "sortby:" "say \"hi\"""#);
        assert_eq!(tokens[0], TokenKind::String("a.png".to_string()));
        assert_eq!(tokens[1], TokenKind::SortKey("x".to_string()));
        // An empty key is just a string.
        assert_eq!(tokens[2], TokenKind::String("sortby:".to_string()));
        assert_eq!(tokens[3], TokenKind::String(r#"say \"hi\""#.to_string()));
    }

    #[test]
    fn test_arrays() {
        let tokens = kinds("[1, 2,3] [1,2][3] [[4][5, 6]]");
        assert_eq!(
            tokens[0],
            TokenKind::IntArray(vec!["1".to_string(), "2".to_string(), "3".to_string()])
        );
        assert_eq!(
            tokens[1],
            TokenKind::IntArray2d(vec![vec!["1".to_string(), "2".to_string()], vec!["3".to_string()]])
        );
        assert_eq!(
            tokens[2],
            TokenKind::IntArray2d(vec![vec!["4".to_string()], vec!["5".to_string(), "6".to_string()]])
        );
    }

    #[test]
    fn test_malformed_arrays() {
        assert!(lex("[]").is_err());
        assert!(lex("[1,]").is_err());
        assert!(lex("[1 2]").is_err());
        assert!(lex("[1,2").is_err());
    }

    #[test]
    fn test_comments_are_extras() {
        let tokens = kinds("# header\nBITMAP a \"a.png\" // trailing\n\n// only comment\n");
        assert_eq!(
            tokens,
            vec![
                TokenKind::Keyword(KeywordId::Bitmap),
                TokenKind::Ident("a".to_string()),
                TokenKind::String("a.png".to_string()),
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_comments_are_kept_as_trivia() {
        let output = Lexer::new("# header\nBITMAP a \"a.png\" // trailing \r\n").tokenize();
        assert_eq!(output.comments.len(), 2);
        assert_eq!(output.comments[0].text, "# header");
        assert_eq!((output.comments[0].line, output.comments[0].trailing), (1, false));
        assert_eq!(output.comments[1].text, "// trailing");
        assert_eq!((output.comments[1].line, output.comments[1].trailing), (2, true));
        assert_eq!(output.comments[1].span, Span::new(26, 37));
    }

    #[test]
    fn test_blank_lines_collapse() {
        let tokens = kinds("\n\n  \nUNGROUP\n\n\nNEAR");
        assert_eq!(
            tokens,
            vec![
                TokenKind::Keyword(KeywordId::Ungroup),
                TokenKind::Newline,
                TokenKind::Keyword(KeywordId::Near),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_unterminated_string_recovers_at_next_line() {
        let output = Lexer::new("BITMAP a \"a.png\nBITMAP b \"b.png\"\n").tokenize();
        assert_eq!(output.errors.len(), 1);
        assert!(output.errors[0].message.contains("Unterminated string"));
        assert_eq!(output.errors[0].line, 1);
        assert_eq!(output.errors[0].column, 10);

        let kinds: Vec<_> = output.tokens.iter().map(|t| &t.kind).collect();
        assert_eq!(kinds[2], &TokenKind::Error);
        assert_eq!(kinds[3], &TokenKind::Newline);
        assert_eq!(kinds[4], &TokenKind::Keyword(KeywordId::Bitmap));
        assert_eq!(output.tokens[4].line, 2);
    }

    #[test]
    fn test_malformed_escape() {
        let errors = lex("\"abc\\").unwrap_err();
        assert!(errors[0].message.contains("escape"), "got: {}", errors[0].message);
    }

    #[test]
    fn test_unexpected_character() {
        let errors = lex("BITMAP a @").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Unexpected character"));
        assert_eq!(errors[0].column, 10);
    }

    #[test]
    fn test_unicode_identifier_rejected() {
        let result = lex("π");
        assert!(result.is_err(), "Unicode identifier should produce an error");
    }

    #[test]
    fn test_lazy_iteration_stops_after_eof() {
        let mut lexer = Lexer::new("ALIGN 4");
        assert!(matches!(lexer.next_token().map(|t| t.kind), Some(TokenKind::Keyword(KeywordId::Align))));
        assert_eq!(lexer.next_token().map(|t| t.kind), Some(int("4")));
        assert_eq!(lexer.next_token().map(|t| t.kind), Some(TokenKind::Eof));
        assert_eq!(lexer.next_token(), None);
    }

    #[test]
    fn test_positions() {
        let tokens = lex("ALIGN\n  ALIGN 16").unwrap();
        assert_eq!((tokens[2].line, tokens[2].column), (2, 3));
        assert_eq!((tokens[3].line, tokens[3].column), (2, 9));
        assert_eq!(tokens[3].span, Span::new(14, 16));
    }
}
