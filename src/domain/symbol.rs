//! Symbol identifier type with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ticker identifier - newtype for type safety.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors. Tickers are stored uppercase so that lookups
/// against reference tables and external responses never depend on caller
/// casing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new `Symbol` from a ticker string.
    pub fn new(ticker: impl Into<String>) -> Self {
        Self(ticker.into().to_uppercase())
    }

    /// Get the ticker as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
