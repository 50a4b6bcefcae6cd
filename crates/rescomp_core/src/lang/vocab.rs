//! Define the closed value enumerations accepted at enum-valued field positions.
//!
//! Several statement fields (compression, ordering, sprite optimisation, sound driver, ...) accept
//! only a fixed list of spellings. The lexer does not know which list applies at a given position,
//! so it produces ordinary identifier/integer tokens; the grammar asks this registry whether the
//! current token spells a member of the vocabulary expected *there*.
//!
//! ## Notes
//! - Matching is exact and **case-sensitive**; the first listed spelling that matches wins.
//! - Numeric members (`-1`, `0`, ...) are compared against the normalized integer spelling produced
//!   by the lexer.
//! - Spellings are shared between vocabularies (`NONE` is a compression, an optimisation, a
//!   collision and a sprite optimisation type). The vocabulary id disambiguates.
//!
//! ## Examples
//! ```rust
//! use rescomp_core::lang::vocab::{self, VocabId};
//!
//! assert_eq!(vocab::lookup(VocabId::WavDriver, "XGM2"), Some("XGM2"));
//! assert_eq!(vocab::lookup(VocabId::Far, "1"), None);
//! assert_eq!(vocab::name(VocabId::SpriteOptLevel), "optimization level");
//! ```

/// Stable identifier for each closed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VocabId {
    Compression,
    Optimization,
    Ordering,
    Export,
    Far,
    Collision,
    SpriteOptType,
    SpriteOptLevel,
    SpriteOptDuplicate,
    XgmTiming,
    WavDriver,
}

/// Metadata for a vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct VocabInfo {
    pub id: VocabId,
    /// Human-facing name used in diagnostics (“expected a compression value”).
    pub name: &'static str,
    pub spellings: &'static [&'static str],
    pub description: &'static str,
}

/// Registry of all closed vocabularies.
pub const VOCABULARIES: &[VocabInfo] = &[
    VocabInfo {
        id: VocabId::Compression,
        name: "compression",
        spellings: &["-1", "0", "1", "2", "AUTO", "BEST", "NONE", "APLIB", "FAST", "LZ4W"],
        description: "Packer selection. -1/AUTO/BEST pick the smallest result, 0/NONE stores raw data.",
    },
    VocabInfo {
        id: VocabId::Optimization,
        name: "optimization",
        spellings: &["0", "1", "2", "NONE", "ALL", "DUPLICATE"],
        description: "Tile deduplication: none, full (flip-aware), or exact duplicates only.",
    },
    VocabInfo {
        id: VocabId::Ordering,
        name: "ordering",
        spellings: &["ROW", "COLUMN"],
        description: "Tile traversal order when reading the source image.",
    },
    VocabInfo {
        id: VocabId::Export,
        name: "export flag",
        spellings: &["0", "1", "FALSE", "TRUE"],
        description: "Whether the tileset is exported as a standalone resource.",
    },
    VocabInfo {
        id: VocabId::Far,
        name: "far flag",
        spellings: &["FALSE", "TRUE"],
        description: "Whether the resource is placed in the far (bank-switched) area.",
    },
    VocabInfo {
        id: VocabId::Collision,
        name: "collision",
        spellings: &["CIRCLE", "BOX", "NONE"],
        description: "Collision shape generated for each sprite frame.",
    },
    VocabInfo {
        id: VocabId::SpriteOptType,
        name: "optimization type",
        spellings: &["0", "1", "2", "3", "BALANCED", "SPRITE", "TILE", "NONE"],
        description: "What the sprite cutter minimizes: hardware sprites, tiles, or a balance of both.",
    },
    VocabInfo {
        id: VocabId::SpriteOptLevel,
        name: "optimization level",
        spellings: &["0", "1", "2", "3", "FAST", "MEDIUM", "SLOW", "MAX"],
        description: "Effort spent by the sprite cutter.",
    },
    VocabInfo {
        id: VocabId::SpriteOptDuplicate,
        name: "duplicate optimization flag",
        spellings: &["FALSE", "TRUE"],
        description: "Whether identical frames share their tile data.",
    },
    VocabInfo {
        id: VocabId::XgmTiming,
        name: "timing",
        spellings: &["-1", "0", "1", "AUTO", "NTSC", "PAL"],
        description: "Playback timing of an XGM track.",
    },
    VocabInfo {
        id: VocabId::WavDriver,
        name: "driver",
        spellings: &["DEFAULT", "PCM", "DPCM2", "PCM4", "XGM", "XGM2"],
        description: "Sound driver the sample is converted for.",
    },
];

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: VocabId) -> &'static VocabInfo {
    VOCABULARIES
        .iter()
        .find(|v| v.id == id)
        .expect("vocabulary info missing")
}

/// Diagnostic name of a vocabulary.
pub fn name(id: VocabId) -> &'static str {
    info_for(id).name
}

/// Accepted spellings, in match order.
pub fn spellings(id: VocabId) -> &'static [&'static str] {
    info_for(id).spellings
}

/// Match a spelling against a vocabulary.
///
/// ## Returns
/// - The registry's own `'static` spelling when `s` is a member.
/// - `None` otherwise.
pub fn lookup(id: VocabId, s: &str) -> Option<&'static str> {
    spellings(id).iter().copied().find(|candidate| *candidate == s)
}

/// Render the accepted spellings as `A, B or C` for “expected one of” messages.
pub fn expected_list(id: VocabId) -> String {
    let spellings = spellings(id);
    match spellings.split_last() {
        Some((last, [])) => (*last).to_string(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_members_match_normalized_spelling() {
        assert_eq!(lookup(VocabId::Compression, "-1"), Some("-1"));
        assert_eq!(lookup(VocabId::XgmTiming, "-1"), Some("-1"));
        assert_eq!(lookup(VocabId::Optimization, "-1"), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(lookup(VocabId::Ordering, "ROW"), Some("ROW"));
        assert_eq!(lookup(VocabId::Ordering, "row"), None);
    }

    #[test]
    fn test_expected_list() {
        assert_eq!(expected_list(VocabId::Ordering), "ROW or COLUMN");
        assert_eq!(expected_list(VocabId::Collision), "CIRCLE, BOX or NONE");
    }
}
