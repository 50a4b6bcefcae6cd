/// Form resolution for `TILEMAP` and `MAP`.
///
/// Both keywords accept an image form and a TMX form that share a prefix
/// (`name "file" ...`). The form is decided before any field is read, from a
/// fixed window of three tokens after the keyword:
///
/// | name  | file          | third      | form  |
/// |-------|---------------|------------|-------|
/// | ident | string        | identifier | image |
/// | ident | `*.tmx` string| string     | TMX   |
/// | ident | other string  | string     | image |
///
/// "String" includes `"sortby:..."` spellings. The TMX row only looks at the file extension, so an
/// image-form statement whose tileset is a string literal stays an image form even when its
/// optional fields would also fit the TMX form.
///
/// Anything else cannot start either form and is reported as unresolved.
impl<'a> Parser<'a> {
    fn resolve_form(&self, keyword: KeywordId, keyword_token: &Token) -> Result<Form, CompileError> {
        let name = &self.peek_at(0).kind;
        let file = &self.peek_at(1).kind;
        let third = &self.peek_at(2).kind;

        let form = match (name, file.string_content(), third) {
            (TokenKind::Ident(_), Some(_), TokenKind::Ident(_)) => Form::Image,
            (TokenKind::Ident(_), Some(path), third) if third.string_content().is_some() => {
                if is_tmx_path(&path) {
                    Form::Tmx
                } else {
                    Form::Image
                }
            }
            _ => return Err(errors::unresolved_form(keyword, keyword_token)),
        };
        tracing::trace!(line = keyword_token.line, ?form, "resolved statement form");
        Ok(form)
    }
}

/// Return `true` if `path` names a Tiled map (`.tmx`, any case).
pub fn is_tmx_path(path: &str) -> bool {
    path.rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("tmx"))
}
