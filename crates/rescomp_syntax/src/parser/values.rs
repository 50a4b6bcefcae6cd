/// Field value matching.
///
/// This chunk converts the current token into a [`FieldValue`] when its lexical class fits the
/// field, and converts normalized integer spellings into `i64`.
impl<'a> Parser<'a> {
    /// Match the current token against `spec`, consuming it on success.
    ///
    /// ## Returns
    /// - `Ok(None)` when the token does not fit; nothing is consumed.
    /// - `Err(..)` when the token fits but its value does not (integer overflow).
    fn try_field(&mut self, spec: &FieldSpec) -> Result<Option<Field>, CompileError> {
        let token = self.peek().clone();
        let value = match (spec.kind, &token.kind) {
            (ValueKind::Ident | ValueKind::IdentOrStr, TokenKind::Ident(s)) => FieldValue::Ident(s.clone()),
            (ValueKind::SortKey, TokenKind::SortKey(key)) => FieldValue::SortKey(key.clone()),
            (ValueKind::Str | ValueKind::IdentOrStr, TokenKind::String(s)) => FieldValue::Str(s.clone()),
            // A sort-key literal is still a string literal outside the sortby position.
            (ValueKind::Str | ValueKind::IdentOrStr, TokenKind::SortKey(key)) => {
                FieldValue::Str(format!("{SORT_KEY_PREFIX}{key}"))
            }
            (ValueKind::Strs, TokenKind::String(_) | TokenKind::SortKey(_)) => {
                return Ok(Some(self.string_list(spec)));
            }
            (ValueKind::Int | ValueKind::Time, TokenKind::Int(raw)) => FieldValue::Int(to_int(raw, &token)?),
            (ValueKind::Size, TokenKind::Int(raw)) => FieldValue::Size(SizeLiteral {
                value: to_int(raw, &token)?,
                suffix: None,
            }),
            (ValueKind::Size, TokenKind::Size { digits, suffix }) => FieldValue::Size(SizeLiteral {
                value: to_int(digits, &token)?,
                suffix: Some(*suffix),
            }),
            (ValueKind::Time, TokenKind::IntArray(items)) => FieldValue::IntArray(to_ints(items, &token)?),
            (ValueKind::Time, TokenKind::IntArray2d(rows)) => FieldValue::IntArray2d(
                rows.iter()
                    .map(|row| to_ints(row, &token))
                    .collect::<Result<_, _>>()?,
            ),
            (ValueKind::Enum(vocab_id), kind) => {
                match kind.word().and_then(|w| vocab::lookup(vocab_id, &w)) {
                    Some(spelling) => FieldValue::Enum(EnumValue {
                        vocab: vocab_id,
                        spelling,
                    }),
                    None => return Ok(None),
                }
            }
            _ => return Ok(None),
        };

        self.advance();
        Ok(Some(Field {
            name: spec.id,
            value,
            span: token.span,
        }))
    }

    /// Consume one or more consecutive string literals (sort-key spellings included).
    fn string_list(&mut self, spec: &FieldSpec) -> Field {
        let mut items = Vec::new();
        let mut span = self.peek().span;
        while let Some(content) = self.peek().kind.string_content() {
            items.push(content.into_owned());
            span = span.merge(self.peek().span);
            self.advance();
        }
        Field {
            name: spec.id,
            value: FieldValue::Strs(items),
            span,
        }
    }
}

/// Convert a normalized integer spelling (sign and digits only).
fn to_int(raw: &str, token: &Token) -> Result<i64, CompileError> {
    raw.parse::<i64>()
        .map_err(|_| errors::integer_overflow(raw, token))
}

fn to_ints(raw: &[String], token: &Token) -> Result<Vec<i64>, CompileError> {
    raw.iter().map(|r| to_int(r, token)).collect()
}
