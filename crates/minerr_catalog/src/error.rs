//! Catalog error types

use thiserror::Error;

/// Errors raised while decoding a catalog document
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unexpected entry at {0}: expected a namespace object or a template string")]
    UnexpectedEntry(String),
}
