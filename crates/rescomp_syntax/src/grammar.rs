//! Statement shapes of the rescomp declaration language.
//!
//! Each [`Shape`] lists the required fields of a statement in order, followed by its cascading
//! optional chains. Within a chain a field is only attempted when the previous one matched, so the
//! optional fields present in a parsed statement always form a prefix of each chain.
//!
//! `TILEMAP` and `MAP` have two shapes each, one per [`Form`]; the parser picks one with a bounded
//! lookahead before reading fields (see `parser/resolver.rs`). `OBJECTS` is the only statement with
//! two independent chains.
//!
//! ## Examples
//! ```rust
//! use rescomp_core::lang::keywords::KeywordId;
//! use rescomp_syntax::ast::{FieldId, Form};
//! use rescomp_syntax::grammar;
//!
//! let shape = grammar::shape(KeywordId::Map, Some(Form::Tmx)).unwrap();
//! assert_eq!(shape.required.len(), 3);
//! assert_eq!(shape.chains[0].last().map(|f| f.id), Some(FieldId::Ordering));
//! ```

use rescomp_core::lang::keywords::KeywordId;
use rescomp_core::lang::vocab::{self, VocabId};

use crate::ast::{FieldId, Form};

/// Lexical class a field value must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Ident,
    Str,
    /// Identifier or string literal (tileset reference in the image forms).
    IdentOrStr,
    /// One or more string literals.
    Strs,
    Int,
    /// Integer with optional `p` / `f` suffix.
    Size,
    /// Integer, integer array, or array of integer arrays.
    Time,
    SortKey,
    Enum(VocabId),
}

impl ValueKind {
    /// Short description for “expected ...” diagnostics.
    pub fn describe(self) -> String {
        match self {
            ValueKind::Ident => "an identifier".to_string(),
            ValueKind::Str => "a string literal".to_string(),
            ValueKind::IdentOrStr => "an identifier or string literal".to_string(),
            ValueKind::Strs => "one or more string literals".to_string(),
            ValueKind::Int => "an integer".to_string(),
            ValueKind::Size => "a size such as 4, 32p or 2f".to_string(),
            ValueKind::Time => "an integer or integer array".to_string(),
            ValueKind::SortKey => "a \"sortby:<field>\" literal".to_string(),
            ValueKind::Enum(id) => format!("one of {}", vocab::expected_list(id)),
        }
    }
}

/// One field position in a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: FieldId,
    pub kind: ValueKind,
}

/// Full field layout of one statement form.
#[derive(Debug, Clone, Copy)]
pub struct Shape {
    pub keyword: KeywordId,
    pub form: Option<Form>,
    pub required: &'static [FieldSpec],
    /// Optional chains, evaluated in sequence.
    pub chains: &'static [&'static [FieldSpec]],
}

impl Shape {
    /// All field positions of this shape in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.required.iter().chain(self.chains.iter().flat_map(|c| c.iter()))
    }
}

const fn f(id: FieldId, kind: ValueKind) -> FieldSpec {
    FieldSpec { id, kind }
}

const NAME: FieldSpec = f(FieldId::Name, ValueKind::Ident);
const COMPRESSION: FieldSpec = f(FieldId::Compression, ValueKind::Enum(VocabId::Compression));
const MAP_BASE: FieldSpec = f(FieldId::MapBase, ValueKind::Int);
const ORDERING: FieldSpec = f(FieldId::Ordering, ValueKind::Enum(VocabId::Ordering));
const MAP_OPT: FieldSpec = f(FieldId::MapOpt, ValueKind::Enum(VocabId::Optimization));
const TS_COMPRESSION: FieldSpec = f(FieldId::TsCompression, ValueKind::Enum(VocabId::Compression));
const MAP_COMPRESSION: FieldSpec = f(FieldId::MapCompression, ValueKind::Enum(VocabId::Compression));
const FAR: FieldSpec = f(FieldId::Far, ValueKind::Enum(VocabId::Far));

const IMAGE_MAP_REQUIRED: &[FieldSpec] = &[
    NAME,
    f(FieldId::ImgFile, ValueKind::Str),
    f(FieldId::TilesetId, ValueKind::IdentOrStr),
];

const TMX_MAP_REQUIRED: &[FieldSpec] = &[
    NAME,
    f(FieldId::TmxFile, ValueKind::Str),
    f(FieldId::LayerId, ValueKind::Str),
];

/// Registry of every statement shape.
pub const SHAPES: &[Shape] = &[
    Shape {
        keyword: KeywordId::Palette,
        form: None,
        required: &[NAME, f(FieldId::File, ValueKind::Str)],
        chains: &[],
    },
    Shape {
        keyword: KeywordId::Bitmap,
        form: None,
        required: &[NAME, f(FieldId::ImgFile, ValueKind::Str)],
        chains: &[&[COMPRESSION]],
    },
    Shape {
        keyword: KeywordId::Tileset,
        form: None,
        required: &[NAME, f(FieldId::File, ValueKind::Str)],
        chains: &[&[
            COMPRESSION,
            f(FieldId::Optimization, ValueKind::Enum(VocabId::Optimization)),
            ORDERING,
            f(FieldId::Export, ValueKind::Enum(VocabId::Export)),
        ]],
    },
    Shape {
        keyword: KeywordId::Tilemap,
        form: Some(Form::Image),
        required: IMAGE_MAP_REQUIRED,
        chains: &[&[COMPRESSION, MAP_OPT, MAP_BASE, ORDERING]],
    },
    Shape {
        keyword: KeywordId::Tilemap,
        form: Some(Form::Tmx),
        required: TMX_MAP_REQUIRED,
        chains: &[&[TS_COMPRESSION, MAP_COMPRESSION, MAP_BASE]],
    },
    Shape {
        keyword: KeywordId::Map,
        form: Some(Form::Image),
        required: IMAGE_MAP_REQUIRED,
        chains: &[&[COMPRESSION, MAP_BASE]],
    },
    Shape {
        keyword: KeywordId::Map,
        form: Some(Form::Tmx),
        required: TMX_MAP_REQUIRED,
        chains: &[&[TS_COMPRESSION, MAP_COMPRESSION, MAP_BASE, ORDERING]],
    },
    Shape {
        keyword: KeywordId::Objects,
        form: None,
        required: &[
            NAME,
            f(FieldId::TmxFile, ValueKind::Str),
            f(FieldId::LayerId, ValueKind::Str),
            f(FieldId::FieldDefs, ValueKind::Str),
        ],
        chains: &[
            &[f(FieldId::SortBy, ValueKind::SortKey)],
            &[
                f(FieldId::DeclType, ValueKind::Str),
                f(FieldId::TypeFilter, ValueKind::Str),
            ],
        ],
    },
    Shape {
        keyword: KeywordId::Image,
        form: None,
        required: &[NAME, f(FieldId::ImgFile, ValueKind::Str)],
        chains: &[&[COMPRESSION, MAP_OPT, MAP_BASE]],
    },
    Shape {
        keyword: KeywordId::Sprite,
        form: None,
        required: &[
            NAME,
            f(FieldId::ImgFile, ValueKind::Str),
            f(FieldId::Width, ValueKind::Size),
            f(FieldId::Height, ValueKind::Size),
        ],
        chains: &[&[
            COMPRESSION,
            f(FieldId::Time, ValueKind::Time),
            f(FieldId::Collision, ValueKind::Enum(VocabId::Collision)),
            f(FieldId::OptType, ValueKind::Enum(VocabId::SpriteOptType)),
            f(FieldId::OptLevel, ValueKind::Enum(VocabId::SpriteOptLevel)),
            f(FieldId::OptDuplicate, ValueKind::Enum(VocabId::SpriteOptDuplicate)),
        ]],
    },
    Shape {
        keyword: KeywordId::Xgm,
        form: None,
        required: &[NAME, f(FieldId::File, ValueKind::Str)],
        chains: &[&[
            f(FieldId::Timing, ValueKind::Enum(VocabId::XgmTiming)),
            f(FieldId::Options, ValueKind::Str),
        ]],
    },
    Shape {
        keyword: KeywordId::Xgm2,
        form: None,
        required: &[NAME, f(FieldId::File, ValueKind::Strs)],
        chains: &[],
    },
    Shape {
        keyword: KeywordId::Wav,
        form: None,
        required: &[
            NAME,
            f(FieldId::WavFile, ValueKind::Str),
            f(FieldId::Driver, ValueKind::Enum(VocabId::WavDriver)),
        ],
        chains: &[&[f(FieldId::OutRate, ValueKind::Int), FAR]],
    },
    Shape {
        keyword: KeywordId::Bin,
        form: None,
        required: &[NAME, f(FieldId::File, ValueKind::Str)],
        chains: &[&[
            f(FieldId::Align, ValueKind::Int),
            f(FieldId::SizeAlign, ValueKind::Int),
            f(FieldId::Fill, ValueKind::Int),
            COMPRESSION,
            FAR,
        ]],
    },
    Shape {
        keyword: KeywordId::Align,
        form: None,
        required: &[],
        chains: &[&[f(FieldId::Value, ValueKind::Int)]],
    },
    Shape {
        keyword: KeywordId::Ungroup,
        form: None,
        required: &[],
        chains: &[],
    },
    Shape {
        keyword: KeywordId::Near,
        form: None,
        required: &[],
        chains: &[],
    },
];

/// Return `true` if the keyword admits an image form and a TMX form.
pub fn has_alternative_forms(keyword: KeywordId) -> bool {
    matches!(keyword, KeywordId::Tilemap | KeywordId::Map)
}

/// Look up the shape of `keyword` in `form` (`None` for single-form keywords).
pub fn shape(keyword: KeywordId, form: Option<Form>) -> Option<&'static Shape> {
    SHAPES.iter().find(|s| s.keyword == keyword && s.form == form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rescomp_core::lang::keywords;

    #[test]
    fn test_every_keyword_has_its_shapes() {
        for k in keywords::KEYWORDS {
            if has_alternative_forms(k.id) {
                assert!(shape(k.id, Some(Form::Image)).is_some(), "{:?} image form", k.id);
                assert!(shape(k.id, Some(Form::Tmx)).is_some(), "{:?} tmx form", k.id);
                assert!(shape(k.id, None).is_none());
            } else {
                assert!(shape(k.id, None).is_some(), "missing shape for {:?}", k.id);
            }
        }
        assert_eq!(SHAPES.len(), 17);
    }

    #[test]
    fn test_field_names_unique_within_shape() {
        for s in SHAPES {
            let mut seen = std::collections::HashSet::new();
            for field in s.fields() {
                assert!(seen.insert(field.id), "{:?} repeats field {:?}", s.keyword, field.id);
            }
        }
    }

    #[test]
    fn test_named_resources_start_with_name() {
        for s in SHAPES {
            let directive = matches!(s.keyword, KeywordId::Align | KeywordId::Ungroup | KeywordId::Near);
            assert_eq!(s.required.first().map(|f| f.id) == Some(FieldId::Name), !directive, "{:?}", s.keyword);
        }
    }

    #[test]
    fn test_objects_has_two_chains() {
        let objects = shape(KeywordId::Objects, None).unwrap();
        assert_eq!(objects.chains.len(), 2);
        assert!(SHAPES.iter().filter(|s| s.chains.len() > 1).all(|s| s.keyword == KeywordId::Objects));
    }
}
