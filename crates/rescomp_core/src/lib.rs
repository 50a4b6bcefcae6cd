//! Provide the canonical vocabulary of the rescomp resource-declaration language.
//!
//! This crate is intentionally small and dependency-free. It holds the registries that both the
//! syntax frontend and downstream tooling (formatter, docs generator, resource compiler) consult
//! instead of scattering string comparisons across the codebase.
//!
//! ## Notes
//!
//! - This is a “vocabulary core” crate: **no IO**, no global state, and no AST types.
//! - Current scope: statement keywords and the closed value enumerations accepted at enum-valued
//!   field positions (compression, ordering, sprite optimisation, ...).

pub mod lang;
