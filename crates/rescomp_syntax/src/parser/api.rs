// ============================================================================
// Public API
// ============================================================================

/// Parse a token stream, rejecting the whole input if any statement failed.
#[tracing::instrument(skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Program, Vec<CompileError>> {
    Parser::new(tokens).parse().into_result()
}

/// Parse a token stream, keeping every statement that parsed cleanly.
pub fn parse_recovering(tokens: &[Token]) -> ParseOutput {
    Parser::new(tokens).parse()
}

/// Lex and parse source text in one pass.
///
/// Lexical and syntax errors are merged into one list ordered by source position. A statement
/// with a lexical error is reported once, by the lexer. Comments are passed through for tools that
/// rewrite the source.
#[tracing::instrument(skip_all, fields(bytes = source.len()))]
pub fn parse_source(source: &str) -> ParseOutput {
    let LexOutput {
        tokens,
        errors: lex_errors,
        comments,
    } = Lexer::new(source).tokenize();
    let ParseOutput {
        program,
        errors: parse_errors,
        ..
    } = Parser::new(&tokens).parse();

    let mut errors = lex_errors;
    errors.extend(parse_errors);
    errors.sort_by_key(|e| e.span.start);

    tracing::debug!(
        statements = program.len(),
        errors = errors.len(),
        "parsed source"
    );
    ParseOutput {
        program,
        errors,
        comments,
    }
}
