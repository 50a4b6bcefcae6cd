/// Statement parsing.
///
/// A statement is its keyword, the required fields of its shape, then each optional chain in
/// turn. A chain stops at its first field that does not match the next token; later fields of that
/// chain are never attempted. Whatever is left before the line break is an error.
impl<'a> Parser<'a> {
    fn statement(&mut self) -> Result<Statement, CompileError> {
        let keyword_token = self.peek().clone();
        let keyword = match &keyword_token.kind {
            TokenKind::Keyword(id) => *id,
            TokenKind::Ident(name) => return Err(errors::unknown_keyword(name, &keyword_token)),
            other => return Err(errors::expected_keyword(&other.describe(), &keyword_token)),
        };
        self.advance();

        let form = if grammar::has_alternative_forms(keyword) {
            Some(self.resolve_form(keyword, &keyword_token)?)
        } else {
            None
        };
        let shape = grammar::shape(keyword, form).expect("INVARIANT: every keyword form has a registered shape");

        let mut fields = Vec::with_capacity(shape.required.len());
        for spec in shape.required {
            fields.push(self.required_field(keyword, spec)?);
        }

        // Chain positions that failed to match since the last field that did.
        let mut missed: Vec<&FieldSpec> = Vec::new();
        for chain in shape.chains {
            for spec in chain.iter() {
                match self.try_field(spec)? {
                    Some(field) => {
                        missed.clear();
                        fields.push(field);
                    }
                    None => {
                        missed.push(spec);
                        break;
                    }
                }
            }
        }

        self.end_of_statement(keyword, &missed)?;

        let end = fields.last().map_or(keyword_token.span.end, |f| f.span.end);
        Ok(Statement {
            kind: keyword,
            form,
            fields,
            line: keyword_token.line,
            span: Span::new(keyword_token.span.start, end),
        })
    }

    fn required_field(&mut self, keyword: KeywordId, spec: &FieldSpec) -> Result<Field, CompileError> {
        if let Some(field) = self.try_field(spec)? {
            return Ok(field);
        }

        let token = self.peek();
        if let ValueKind::Enum(vocab_id) = spec.kind {
            if let Some(word) = token.kind.word() {
                return Err(errors::invalid_enum_value(keyword, spec.id.as_str(), vocab_id, &word, token));
            }
        }
        Err(errors::missing_field(
            keyword,
            spec.id.as_str(),
            &spec.kind.describe(),
            &token.describe(),
            token,
        ))
    }

    /// Require the line to end here.
    ///
    /// A bare word left where only an enum field could have continued is reported as an invalid
    /// value for that field rather than as stray input.
    fn end_of_statement(&self, keyword: KeywordId, missed: &[&FieldSpec]) -> Result<(), CompileError> {
        let token = self.peek();
        if token.kind.is_terminator() {
            return Ok(());
        }

        if let [spec] = missed {
            if let ValueKind::Enum(vocab_id) = spec.kind {
                if let Some(word) = token.kind.word() {
                    return Err(errors::invalid_enum_value(keyword, spec.id.as_str(), vocab_id, &word, token));
                }
            }
        }

        let expected: Vec<String> = missed
            .iter()
            .map(|spec| format!("{} ({})", spec.id, spec.kind.describe()))
            .collect();
        Err(errors::unexpected_trailing(keyword, &token.describe(), &expected, token))
    }
}
