//! Search key type.

use core::fmt;

/// Errors that can occur when parsing a [`SearchKey`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKeyError {
    /// The input is empty or contains only whitespace.
    #[error("search key cannot be blank")]
    Blank,
}

/// A trimmed, non-empty value used as a path key in lookups
/// (a menu item name, an ingredient, a phone number).
///
/// Lookups only accept a `SearchKey`, so a blank key can never reach
/// the network.
///
/// ## Examples
///
/// ```
/// use pizzeria_core::SearchKey;
///
/// assert_eq!(SearchKey::parse("  basil ").unwrap().as_str(), "basil");
/// assert!(SearchKey::parse("").is_err());
/// assert!(SearchKey::parse(" \t ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchKey(String);

impl SearchKey {
    /// Parse a search key, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`SearchKeyError::Blank`] if nothing is left after trimming.
    pub fn parse(input: &str) -> Result<Self, SearchKeyError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(SearchKeyError::Blank);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SearchKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims() {
        let key = SearchKey::parse("  Margherita  ").unwrap();
        assert_eq!(key.as_str(), "Margherita");
    }

    #[test]
    fn test_parse_keeps_inner_whitespace() {
        let key = SearchKey::parse("Quattro Formaggi").unwrap();
        assert_eq!(key.to_string(), "Quattro Formaggi");
    }

    #[test]
    fn test_parse_blank() {
        assert_eq!(SearchKey::parse(""), Err(SearchKeyError::Blank));
        assert_eq!(SearchKey::parse("   \n"), Err(SearchKeyError::Blank));
    }
}
