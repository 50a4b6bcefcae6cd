//! Define the statement keyword vocabulary for the rescomp language.
//!
//! Every declaration line opens with one of these reserved words. This module is the single source
//! of truth for them: a stable identifier ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`])
//! that records canonical spellings, categories, provenance, and examples.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `bitmap` is an ordinary identifier.
//! - Some keywords double as enumeration spellings (`XGM`, `XGM2` are also WAV drivers); the parser
//!   resolves that by spelling, see [`crate::lang::vocab`].
//!
//! ## Examples
//! ```rust
//! use rescomp_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("TILESET"), Some(KeywordId::Tileset));
//! assert_eq!(keywords::as_str(KeywordId::Xgm2), "XGM2");
//! assert_eq!(keywords::from_str("tileset"), None);
//! ```

use super::registry::{Example, SinceVersion, Stability};

/// Stable identifier for every statement keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeywordId {
    // Graphics
    Palette,
    Bitmap,
    Tileset,
    Image,

    // Maps
    Tilemap,
    Map,
    Objects,

    // Sprites
    Sprite,

    // Audio
    Xgm,
    Xgm2,
    Wav,

    // Raw data
    Bin,

    // Layout directives
    Align,
    Ungroup,
    Near,
}

/// High-level grouping for documentation and tooling.
///
/// ## Notes
/// - Categories are metadata only; they do not enforce parsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Graphics,
    Map,
    Sprite,
    Audio,
    Binary,
    Directive,
}

impl KeywordCategory {
    /// Human-readable label used in generated docs.
    pub fn label(self) -> &'static str {
        match self {
            KeywordCategory::Graphics => "graphics",
            KeywordCategory::Map => "map",
            KeywordCategory::Sprite => "sprite",
            KeywordCategory::Audio => "audio",
            KeywordCategory::Binary => "binary",
            KeywordCategory::Directive => "directive",
        }
    }
}

/// Metadata for a statement keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub description: &'static str,
    pub since: SinceVersion,
    pub stability: Stability,
    pub examples: &'static [Example],
}

/// Registry of all statement keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(
        KeywordId::Palette,
        "PALETTE",
        KeywordCategory::Graphics,
        "Palette extracted from an image or a .pal file.",
        &[Example {
            code: "PALETTE pal_main \"main.png\"",
            note: None,
        }],
    ),
    info(
        KeywordId::Bitmap,
        "BITMAP",
        KeywordCategory::Graphics,
        "Bitmap image, optionally compressed.",
        &[Example {
            code: "BITMAP logo \"logo.png\" LZ4W",
            note: None,
        }],
    ),
    info(
        KeywordId::Tileset,
        "TILESET",
        KeywordCategory::Graphics,
        "Tileset built from an image, with optional optimisation and ordering.",
        &[Example {
            code: "TILESET ts_bg \"bg.png\" BEST ALL ROW TRUE",
            note: None,
        }],
    ),
    info(
        KeywordId::Image,
        "IMAGE",
        KeywordCategory::Graphics,
        "Image resource: tileset + tilemap + palette in one declaration.",
        &[Example {
            code: "IMAGE title \"title.png\" BEST ALL 0",
            note: None,
        }],
    ),
    info(
        KeywordId::Tilemap,
        "TILEMAP",
        KeywordCategory::Map,
        "Tilemap from an image (against a tileset) or from a TMX layer.",
        &[
            Example {
                code: "TILEMAP level1 \"level1.png\" ts_bg BEST ALL 0 ROW",
                note: Some("Image form."),
            },
            Example {
                code: "TILEMAP level1 \"level1.tmx\" \"ground\" BEST BEST 0",
                note: Some("TMX form."),
            },
        ],
    ),
    info(
        KeywordId::Map,
        "MAP",
        KeywordCategory::Map,
        "Metatile map from an image (against a tileset) or from a TMX layer.",
        &[
            Example {
                code: "MAP world \"world.png\" \"ts_world\" BEST 0",
                note: Some("Image form."),
            },
            Example {
                code: "MAP world \"world.tmx\" \"layer1\" NONE NONE 0 ROW",
                note: Some("TMX form."),
            },
        ],
    ),
    info(
        KeywordId::Objects,
        "OBJECTS",
        KeywordCategory::Map,
        "Object layer extracted from a TMX file.",
        &[Example {
            code: "OBJECTS enemies \"level.tmx\" \"objects\" \"x:f32;y:f32\" \"sortby:x\" \"Enemy\"",
            note: None,
        }],
    ),
    info(
        KeywordId::Sprite,
        "SPRITE",
        KeywordCategory::Sprite,
        "Sprite sheet with frame size, animation timing, collision and optimisation settings.",
        &[Example {
            code: "SPRITE player \"player.png\" 4 4 FAST 5 BOX",
            note: None,
        }],
    ),
    info(
        KeywordId::Xgm,
        "XGM",
        KeywordCategory::Audio,
        "VGM/XGM music track for the XGM driver.",
        &[Example {
            code: "XGM music \"music.vgm\" AUTO",
            note: None,
        }],
    ),
    info(
        KeywordId::Xgm2,
        "XGM2",
        KeywordCategory::Audio,
        "One or more music tracks packed for the XGM2 driver.",
        &[Example {
            code: "XGM2 tracks \"a.vgm\" \"b.vgm\"",
            note: None,
        }],
    ),
    info(
        KeywordId::Wav,
        "WAV",
        KeywordCategory::Audio,
        "PCM sample converted for the selected sound driver.",
        &[Example {
            code: "WAV jump \"jump.wav\" XGM2",
            note: None,
        }],
    ),
    info(
        KeywordId::Bin,
        "BIN",
        KeywordCategory::Binary,
        "Raw binary blob with optional alignment, padding and compression.",
        &[Example {
            code: "BIN table \"table.bin\" 256 2 0 NONE FALSE",
            note: None,
        }],
    ),
    info(
        KeywordId::Align,
        "ALIGN",
        KeywordCategory::Directive,
        "Align the following resource data, optionally to an explicit boundary.",
        &[Example {
            code: "ALIGN 131072",
            note: None,
        }],
    ),
    info(
        KeywordId::Ungroup,
        "UNGROUP",
        KeywordCategory::Directive,
        "Disable resource grouping by type for the rest of the file.",
        &[],
    ),
    info(
        KeywordId::Near,
        "NEAR",
        KeywordCategory::Directive,
        "Force the following resources into the near (non-bank-switched) area.",
        &[],
    ),
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical (upper-case) spelling of the keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is a statement keyword.
/// - `None` otherwise.
///
/// ## Notes
/// - Matching is **case-sensitive**.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    category: KeywordCategory,
    description: &'static str,
    examples: &'static [Example],
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        description,
        since: "3.0",
        stability: Stability::Stable,
        examples,
    }
}
