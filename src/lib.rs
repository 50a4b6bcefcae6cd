#![forbid(unsafe_code)]
//! rescomp resource declaration front-end
//!
//! Parses the line-oriented declaration files consumed by the SGDK resource compiler (`rescomp`)
//! into a typed, ordered list of statements, and provides the tooling built on top of it: a
//! checker, a canonical formatter and a JSON AST dump.
//!
//! The syntax layer lives in `rescomp_syntax` and is re-exported here; vocabularies live in
//! `rescomp_core`.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a front-end bug (logic error), use
//!   `.expect("INVARIANT: reason")` with a clear explanation.

pub mod cli;
pub mod format;
pub mod version;

pub use rescomp_syntax::ast;
pub use rescomp_syntax::diagnostics;
pub use rescomp_syntax::lexer;
pub use rescomp_syntax::parser;
pub use rescomp_syntax::printer;

pub use format::{FormatConfig, check_formatted, format_diff, format_source, format_source_with_config};
