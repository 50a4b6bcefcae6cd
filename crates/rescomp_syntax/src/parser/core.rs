/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type, the [`ParseOutput`] it produces and the top-level
/// `parse()` loop.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.

/// Statements recognized in one input plus every error reported on the way.
///
/// ## Notes
/// - A statement with any error is excluded from `program` in full; the remaining statements are
///   still returned. Callers decide from `errors` whether to proceed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<CompileError>,
    /// Comment trivia; only filled when parsing from source text.
    pub comments: Vec<Comment>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Collapse into the strict form used by callers that reject any error.
    pub fn into_result(self) -> Result<Program, Vec<CompileError>> {
        if self.errors.is_empty() {
            Ok(self.program)
        } else {
            Err(self.errors)
        }
    }
}

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass. Its only lookahead is the fixed three-token window used to pick the
///   form of `TILEMAP` / `MAP` statements.
/// - On error it drops the current statement and synchronizes at the next line break.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    errors: Vec<CompileError>,
    /// Returned by lookahead past the end of `tokens`.
    eof: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `rescomp_syntax::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        let eof = match tokens.last() {
            Some(last) => Token::new(TokenKind::Eof, Span::new(last.span.end, last.span.end), last.line, last.column),
            None => Token::new(TokenKind::Eof, Span::default(), 1, 1),
        };
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
            eof,
        }
    }

    /// Parse the entire token stream.
    ///
    /// Every statement is parsed independently: an error is recorded, the rest of its line is
    /// skipped, and parsing resumes with the next line.
    pub fn parse(mut self) -> ParseOutput {
        let mut statements = Vec::new();

        loop {
            self.skip_newlines();
            if self.is_at_end() {
                break;
            }

            // The lexer already reported this line; drop it without a second diagnostic.
            if self.line_has_lex_error() {
                tracing::debug!(line = self.peek().line, "skipping statement with lexical error");
                self.synchronize();
                continue;
            }

            match self.statement() {
                Ok(stmt) => statements.push(stmt),
                Err(e) => {
                    tracing::debug!(line = e.line, kind = %e.kind, "statement rejected");
                    self.errors.push(e);
                    self.synchronize();
                }
            }
        }

        ParseOutput {
            program: Program { statements },
            errors: self.errors,
            comments: Vec::new(),
        }
    }
}
