//! Query normalization.
//!
//! # Invariants
//! - `normalize_query` is total and idempotent.
//! - Normalized text is lower-case with single inner spaces and no
//!   leading/trailing whitespace.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Normalized query text.
///
/// Only constructible through [`NormalizedQuery::new`], so filter functions
/// can rely on their input already being normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NormalizedQuery(String);

impl NormalizedQuery {
    pub fn new(raw: &str) -> Self {
        Self(normalize_query(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Single-space separated words of the query.
    pub fn tokens(&self) -> Vec<&str> {
        query_tokens(&self.0)
    }

    /// Whether the normalized query occurs in `text` after lower-casing it.
    ///
    /// Always `false` for an empty query.
    pub fn is_contained_in(&self, text: &str) -> bool {
        !self.0.is_empty() && text.to_lowercase().contains(self.0.as_str())
    }
}

/// Lower-cases, collapses whitespace runs to one space and trims.
pub fn normalize_query(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    WHITESPACE_RE.replace_all(&lowered, " ").trim().to_string()
}

/// Splits already-normalized text into its words.
pub fn query_tokens(normalized: &str) -> Vec<&str> {
    normalized
        .split(' ')
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{normalize_query, query_tokens, NormalizedQuery};

    #[test]
    fn normalize_lowercases_collapses_and_trims() {
        assert_eq!(normalize_query("  React \t\n  Native  "), "react native");
        assert_eq!(normalize_query("C++"), "c++");
    }

    #[test]
    fn normalize_blank_input_is_empty() {
        assert_eq!(normalize_query(""), "");
        assert_eq!(normalize_query(" \t\r\n "), "");
        assert!(NormalizedQuery::new("   ").is_empty());
    }

    #[test]
    fn tokens_split_on_single_spaces() {
        assert_eq!(query_tokens("full stack dev"), vec!["full", "stack", "dev"]);
        assert!(query_tokens("").is_empty());
        assert_eq!(NormalizedQuery::new(" a  b ").tokens(), vec!["a", "b"]);
    }

    #[test]
    fn empty_query_is_never_contained() {
        assert!(!NormalizedQuery::new("").is_contained_in("anything"));
        assert!(NormalizedQuery::new("THING").is_contained_in("anything"));
    }
}
