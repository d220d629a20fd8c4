//! Error template catalog
//!
//! Factories in `minerr_core` produce compact messages that point at a
//! documentation page; this crate manages the long-form message templates
//! that such a page displays. Templates are registered per namespace (or
//! globally for unscoped codes), carry `{0}`-style interpolation slots, and
//! the whole catalog serializes to a single JSON document keyed by
//! namespace.
//!
//! # Example
//!
//! ```rust
//! use minerr_catalog::ErrorCatalog;
//! use minerr_core::ErrorArg;
//!
//! let mut catalog = ErrorCatalog::new();
//! catalog.register("test", "test2", "The answer is {0}");
//!
//! let rendered = catalog.render(Some("test"), "test2", &[ErrorArg::from(42)]);
//! assert_eq!(rendered.as_deref(), Some("The answer is 42"));
//! ```

pub mod catalog;
pub mod error;
pub mod template;

pub use catalog::ErrorCatalog;
pub use error::CatalogError;
pub use template::interpolate;
