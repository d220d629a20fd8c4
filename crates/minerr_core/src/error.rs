//! The produced error value

use thiserror::Error;

/// An error carrying a composed diagnostic message.
///
/// The message is the sole payload: it embeds the `[module:code]` identifier,
/// the documentation URL, and any percent-encoded arguments. Instances are
/// created fresh by [`ErrorFactory::error`](crate::ErrorFactory::error) and
/// never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CodedError {
    message: String,
}

impl CodedError {
    pub(crate) fn new(message: String) -> Self {
        Self { message }
    }

    /// The composed diagnostic message
    pub fn message(&self) -> &str {
        &self.message
    }
}
