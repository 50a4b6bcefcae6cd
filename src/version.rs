//! rescomp front-end version information.
//!
//! This module exposes the version as a single constant so the CLI and any embedding tool agree
//! on the same value.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.
//! - Prefer this constant over repeating `env!("CARGO_PKG_VERSION")` in multiple places.

/// The front-end version string (for example, `0.1.0-alpha.1`).
pub const RESCOMP_VERSION: &str = env!("CARGO_PKG_VERSION");
