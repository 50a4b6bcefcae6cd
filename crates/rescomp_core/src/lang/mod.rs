//! rescomp language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: the statement keywords that open
//! every declaration, and the closed enumerations that enum-valued fields draw their spellings from.
//!
//! Callers work with **stable IDs** (`KeywordId`, `VocabId`) and look up spellings/metadata via the
//! registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata for shared use
//!   (diagnostics, docs, formatting).
//!
//! ## Examples
//! ```rust
//! use rescomp_core::lang::keywords::{self, KeywordId};
//! use rescomp_core::lang::vocab::{self, VocabId};
//!
//! assert_eq!(keywords::from_str("SPRITE"), Some(KeywordId::Sprite));
//! assert_eq!(vocab::lookup(VocabId::Compression, "LZ4W"), Some("LZ4W"));
//! assert_eq!(vocab::lookup(VocabId::Ordering, "DIAGONAL"), None);
//! ```
//!
//! ## See also
//! - `cargo run -p rescomp_core --bin generate_syntax_reference` to generate Markdown reference tables.

pub mod keywords;
pub mod registry;
pub mod vocab;
