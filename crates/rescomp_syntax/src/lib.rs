//! Syntax frontend for rescomp resource declarations: lexer, grammar, parser, AST, diagnostics.
//!
//! This crate is dependency-light and intended for reuse by the resource compiler, the formatter
//! and editor tooling.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: it never opens the files a declaration references
//!   and never checks that a referenced tileset exists.
//! - Only the line-anchored dialect is supported: one declaration per line, blank and comment lines
//!   are no-ops.
//! - Vocabulary identity (keywords, closed enumerations) comes from `rescomp_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use rescomp_syntax::parser;
//! use rescomp_core::lang::keywords::KeywordId;
//!
//! let output = parser::parse_source("BITMAP logo \"logo.png\" LZ4W\n");
//! assert!(output.errors.is_empty());
//! assert_eq!(output.program.statements[0].kind, KeywordId::Bitmap);
//! ```
//!
//! ## See also
//! - `rescomp_core::lang` for registry-backed vocabulary.

pub mod ast;
pub mod diagnostics;
pub mod grammar;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod token_helpers;
