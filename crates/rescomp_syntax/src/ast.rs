//! Abstract Syntax Tree definitions for rescomp resource declarations
//!
//! A [`Program`] is the ordered list of [`Statement`]s recognized in one input. Each statement is a
//! keyword tag plus an insertion-ordered list of named [`Field`]s. Only the fields the source
//! actually supplied are present; absent optional fields are never filled with defaults.

use std::fmt;

use rescomp_core::lang::keywords::{self, KeywordId};
use rescomp_core::lang::vocab::{self, VocabId};
use serde::{Serialize, Serializer};

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// A program is the ordered sequence of recognized statements.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }

    /// Iterate over the statements opened by `kind`, in source order.
    pub fn iter_kind(&self, kind: KeywordId) -> impl Iterator<Item = &Statement> {
        self.statements.iter().filter(move |s| s.kind == kind)
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

/// Which of the two shapes a `TILEMAP` / `MAP` statement was parsed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Form {
    /// Built from an image against a tileset reference.
    Image,
    /// Built from a layer of an external `.tmx` map.
    Tmx,
}

/// One resource declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    #[serde(serialize_with = "serialize_keyword")]
    pub kind: KeywordId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<Form>,
    pub fields: Vec<Field>,
    /// 1-based line of the statement keyword.
    pub line: usize,
    pub span: Span,
}

impl Statement {
    /// Look up a field value by name.
    pub fn get(&self, id: FieldId) -> Option<&FieldValue> {
        self.fields.iter().find(|f| f.name == id).map(|f| &f.value)
    }

    pub fn has(&self, id: FieldId) -> bool {
        self.get(id).is_some()
    }

    /// The declared resource name, absent only for directives (`ALIGN`, `UNGROUP`, `NEAR`).
    pub fn name(&self) -> Option<&str> {
        self.str_field(FieldId::Name)
    }

    /// Text of an identifier, string or sort-key field.
    pub fn str_field(&self, id: FieldId) -> Option<&str> {
        match self.get(id)? {
            FieldValue::Ident(s) | FieldValue::Str(s) | FieldValue::SortKey(s) => Some(s),
            _ => None,
        }
    }

    pub fn int_field(&self, id: FieldId) -> Option<i64> {
        match self.get(id)? {
            FieldValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Spelling of an enum-valued field, exactly as accepted from the vocabulary.
    pub fn enum_field(&self, id: FieldId) -> Option<&'static str> {
        match self.get(id)? {
            FieldValue::Enum(EnumValue { spelling, .. }) => Some(*spelling),
            _ => None,
        }
    }

    /// Field names in source order.
    pub fn field_names(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    /// Structural equality ignoring source positions.
    pub fn same_shape(&self, other: &Statement) -> bool {
        self.kind == other.kind
            && self.form == other.form
            && self.fields.len() == other.fields.len()
            && self
                .fields
                .iter()
                .zip(&other.fields)
                .all(|(a, b)| a.name == b.name && a.value == b.value)
    }
}

/// A named field value with its source span.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name: FieldId,
    pub value: FieldValue,
    pub span: Span,
}

/// Field names across all statement shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    File,
    ImgFile,
    TilesetId,
    TmxFile,
    LayerId,
    FieldDefs,
    SortBy,
    DeclType,
    TypeFilter,
    Compression,
    Optimization,
    Ordering,
    Export,
    MapOpt,
    MapBase,
    TsCompression,
    MapCompression,
    Width,
    Height,
    Time,
    Collision,
    OptType,
    OptLevel,
    OptDuplicate,
    Timing,
    Options,
    WavFile,
    Driver,
    OutRate,
    Far,
    Align,
    SizeAlign,
    Fill,
    Value,
}

impl FieldId {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::File => "file",
            FieldId::ImgFile => "img_file",
            FieldId::TilesetId => "tileset_id",
            FieldId::TmxFile => "tmx_file",
            FieldId::LayerId => "layer_id",
            FieldId::FieldDefs => "field_defs",
            FieldId::SortBy => "sortby",
            FieldId::DeclType => "decl_type",
            FieldId::TypeFilter => "type_filter",
            FieldId::Compression => "compression",
            FieldId::Optimization => "optimization",
            FieldId::Ordering => "ordering",
            FieldId::Export => "export",
            FieldId::MapOpt => "map_opt",
            FieldId::MapBase => "map_base",
            FieldId::TsCompression => "ts_compression",
            FieldId::MapCompression => "map_compression",
            FieldId::Width => "width",
            FieldId::Height => "height",
            FieldId::Time => "time",
            FieldId::Collision => "collision",
            FieldId::OptType => "opt_type",
            FieldId::OptLevel => "opt_level",
            FieldId::OptDuplicate => "opt_duplicate",
            FieldId::Timing => "timing",
            FieldId::Options => "options",
            FieldId::WavFile => "wav_file",
            FieldId::Driver => "driver",
            FieldId::OutRate => "out_rate",
            FieldId::Far => "far",
            FieldId::Align => "align",
            FieldId::SizeAlign => "size_align",
            FieldId::Fill => "fill",
            FieldId::Value => "value",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FieldId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Sizing mode selected by the suffix of a sprite dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeSuffix {
    /// `p` / `P`: the dimension is given in pixels.
    Pixels,
    /// `f` / `F`: the dimension is given as a frame count across the sheet.
    Frames,
}

impl SizeSuffix {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'p' | 'P' => Some(SizeSuffix::Pixels),
            'f' | 'F' => Some(SizeSuffix::Frames),
            _ => None,
        }
    }

    /// Canonical (lower-case) suffix character.
    pub fn as_char(self) -> char {
        match self {
            SizeSuffix::Pixels => 'p',
            SizeSuffix::Frames => 'f',
        }
    }
}

/// A sprite dimension: an integer with an optional sizing suffix. No suffix means tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeLiteral {
    pub value: i64,
    pub suffix: Option<SizeSuffix>,
}

/// Parsed field value.
///
/// ## Notes
/// - `Str` holds the literal's content between the quotes, escapes left as written.
/// - `SortKey` holds the key after the `sortby:` prefix.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Ident(String),
    Str(String),
    /// One or more string literals (`XGM2` track list).
    Strs(Vec<String>),
    Int(i64),
    Size(SizeLiteral),
    IntArray(Vec<i64>),
    IntArray2d(Vec<Vec<i64>>),
    SortKey(String),
    Enum(EnumValue),
}

/// A member of a closed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnumValue {
    #[serde(serialize_with = "serialize_vocab")]
    pub vocab: VocabId,
    pub spelling: &'static str,
}

fn serialize_keyword<S: Serializer>(id: &KeywordId, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(keywords::as_str(*id))
}

fn serialize_vocab<S: Serializer>(id: &VocabId, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(vocab::name(*id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bitmap() -> Statement {
        Statement {
            kind: KeywordId::Bitmap,
            form: None,
            fields: vec![
                Field {
                    name: FieldId::Name,
                    value: FieldValue::Ident("logo".to_string()),
                    span: Span::new(7, 11),
                },
                Field {
                    name: FieldId::ImgFile,
                    value: FieldValue::Str("logo.png".to_string()),
                    span: Span::new(12, 22),
                },
            ],
            line: 1,
            span: Span::new(0, 22),
        }
    }

    #[test]
    fn test_field_accessors() {
        let stmt = bitmap();
        assert_eq!(stmt.name(), Some("logo"));
        assert_eq!(stmt.str_field(FieldId::ImgFile), Some("logo.png"));
        assert!(!stmt.has(FieldId::Compression));
        assert_eq!(stmt.int_field(FieldId::Name), None);
    }

    #[test]
    fn test_same_shape_ignores_positions() {
        let a = bitmap();
        let mut b = bitmap();
        b.line = 7;
        b.span = Span::new(100, 122);
        b.fields[0].span = Span::new(0, 0);
        assert!(a.same_shape(&b));
        assert_ne!(a, b);

        b.fields.pop();
        assert!(!a.same_shape(&b));
    }

    #[test]
    fn test_size_suffix_chars() {
        assert_eq!(SizeSuffix::from_char('P'), Some(SizeSuffix::Pixels));
        assert_eq!(SizeSuffix::from_char('f'), Some(SizeSuffix::Frames));
        assert_eq!(SizeSuffix::from_char('t'), None);
        assert_eq!(SizeSuffix::Frames.as_char(), 'f');
    }
}
