//! Username Value Object
//!
//! A username is a public handle chosen at signup. The legacy contract
//! accepts any string verbatim, so this type carries no validation; the
//! only rule in the system is case-insensitive uniqueness, expressed
//! through the canonical (lowercase) form.
//!
//! # Storage
//! - `original`: the user's input, preserved exactly (display form)
//! - `canonical`: lowercase form for uniqueness checks

use serde::{Deserialize, Serialize};
use std::fmt;

/// Username with a case-preserving display form and a lowercase
/// canonical form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Username {
    /// Original user input (preserves case)
    original: String,
    /// Canonical form (lowercase) for uniqueness
    canonical: String,
}

impl Username {
    /// Create a username from raw input
    pub fn new(input: impl Into<String>) -> Self {
        let original = input.into();
        let canonical = original.to_lowercase();
        Self {
            original,
            canonical,
        }
    }

    /// Get the display form (preserves case)
    #[inline]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Get the canonical (lowercase) form for uniqueness checks
    #[inline]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Check case-insensitive equality against a raw string
    pub fn matches(&self, other: &str) -> bool {
        self.canonical == other.to_lowercase()
    }
}

impl From<String> for Username {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.original
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_display_form() {
        let name = Username::new("DemoPlayer");
        assert_eq!(name.original(), "DemoPlayer");
        assert_eq!(name.to_string(), "DemoPlayer");
    }

    #[test]
    fn test_canonical_is_lowercase() {
        let name = Username::new("DemoPlayer");
        assert_eq!(name.canonical(), "demoplayer");
    }

    #[test]
    fn test_matches_case_insensitively() {
        let name = Username::new("Demo");
        assert!(name.matches("demo"));
        assert!(name.matches("DEMO"));
        assert!(!name.matches("demo2"));
    }

    #[test]
    fn test_no_validation_applied() {
        // Legacy contract: any string is accepted verbatim
        let name = Username::new("  spaces kept  ");
        assert_eq!(name.original(), "  spaces kept  ");
    }
}
