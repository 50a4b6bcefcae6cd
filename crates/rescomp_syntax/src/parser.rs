//! Parser for rescomp resource declarations
//!
//! Converts a token stream into a [`Program`] following the statement shapes in [`crate::grammar`].
//! Only the line-anchored dialect is accepted: every statement ends at a line break (or the end of
//! input), and blank or comment-only lines produce nothing.
//!
//! ## Examples
//!
//! ```rust
//! use rescomp_syntax::ast::FieldId;
//! use rescomp_syntax::parser;
//!
//! let output = parser::parse_source("TILESET t \"t.png\" NONE 1\n");
//! let tileset = &output.program.statements[0];
//! assert_eq!(tileset.enum_field(FieldId::Optimization), Some("1"));
//! assert!(!tileset.has(FieldId::Ordering));
//! ```

use crate::ast::*;
use crate::diagnostics::{CompileError, errors};
use crate::grammar::{self, FieldSpec, ValueKind};
use crate::lexer::{Comment, LexOutput, Lexer, SORT_KEY_PREFIX, Token, TokenKind};
use rescomp_core::lang::keywords::KeywordId;
use rescomp_core::lang::vocab;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/resolver.rs");
include!("parser/stmts.rs");
include!("parser/values.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
