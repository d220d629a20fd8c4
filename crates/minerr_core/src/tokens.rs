//! Documentation URL tokens
//!
//! Messages embed a base URL and a namespace separator. Both are named
//! configuration values rather than hidden literals: the defaults are the
//! placeholder tokens left in unreleased builds, and release tooling
//! substitutes the real documentation site values.

use serde::{Deserialize, Serialize};

/// Placeholder substituted with the documentation base URL at release time.
pub const BASE_URL_TOKEN: &str = "MINERR_URL";

/// Placeholder substituted with the namespace path separator at release time.
pub const SEPARATOR_TOKEN: &str = "MINERR_SEPARATOR";

/// The base URL and separator embedded in every composed message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlTokens {
    /// Documentation site base, e.g. `https://errors.example.org/1.0/`
    pub base_url: String,

    /// Separator between the module namespace and the error code
    pub separator: String,
}

impl UrlTokens {
    /// Creates tokens with substituted production values
    pub fn new(base_url: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            separator: separator.into(),
        }
    }

    /// Replaces the placeholder tokens in a source string with the
    /// configured values
    pub fn substitute(&self, source: &str) -> String {
        source
            .replace(BASE_URL_TOKEN, &self.base_url)
            .replace(SEPARATOR_TOKEN, &self.separator)
    }
}

impl Default for UrlTokens {
    fn default() -> Self {
        Self {
            base_url: BASE_URL_TOKEN.to_string(),
            separator: SEPARATOR_TOKEN.to_string(),
        }
    }
}
