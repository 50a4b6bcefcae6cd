//! Shareable metadata for `rescomp_core::lang` registries.
//!
//! The `rescomp_core::lang` module is a set of **registry-first** vocabularies: statement keywords
//! and closed value enumerations. This submodule provides the small, dependency-free metadata types
//! reused across all registries.
//!
//! ## Notes
//! - These types are intentionally lightweight and `Copy`-friendly so registries can live in
//!   `const` tables.
//! - Metadata is meant for tooling/docs/diagnostics; enforcement of syntax rules still lives in the
//!   lexer/parser.
//!
//! ## See also
//! - [`crate::lang::keywords`]
//! - [`crate::lang::vocab`]

/// Identify the resource compiler release a vocabulary item is available since.
///
/// ## Examples
/// ```rust
/// use rescomp_core::lang::registry::SinceVersion;
///
/// let since: SinceVersion = "3.0";
/// assert!(!since.is_empty());
/// ```
pub type SinceVersion = &'static str;

/// Describe the lifecycle status of a language vocabulary item.
///
/// ## Notes
/// - This is intended for docs/tooling (e.g. to warn on deprecated spellings), not for
///   feature-gating by itself.
///
/// ## Examples
/// ```rust
/// use rescomp_core::lang::registry::Stability;
///
/// let s = Stability::Stable;
/// assert_eq!(format!("{s:?}"), "Stable");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Deprecated,
}

/// Represent a small example snippet for documentation.
///
/// ## Examples
/// ```rust
/// use rescomp_core::lang::registry::Example;
///
/// let ex = Example {
///     code: "BITMAP logo \"logo.png\" BEST",
///     note: Some("Compressed bitmap."),
/// };
/// assert!(ex.code.starts_with("BITMAP"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub code: &'static str,
    pub note: Option<&'static str>,
}
