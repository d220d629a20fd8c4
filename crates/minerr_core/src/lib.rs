//! Core error construction - namespaced factories with documentation links
//!
//! This crate provides the building blocks for producing error values whose
//! messages point at a documentation page for the failing module and code:
//! - Error factories scoped to a module namespace
//! - A tagged argument representation with a stable stringification rule
//! - Query-value percent-encoding for arguments embedded in the URL
//! - Named documentation URL tokens with build-time substitution
//!
//! # Example
//!
//! ```rust
//! use minerr_core::{min_err, ErrorArg};
//!
//! let factory = min_err("ngModel");
//! let error = factory.error("nonassign", [ErrorArg::from("a.b.c")]);
//!
//! assert!(error.message().starts_with("[ngModel:nonassign] "));
//! assert!(error.message().ends_with("?p0=a.b.c"));
//! ```

pub mod arg;
pub mod encode;
pub mod error;
pub mod factory;
pub mod tokens;

pub use arg::ErrorArg;
pub use error::CodedError;
pub use factory::{min_err, ErrorFactory};
pub use tokens::UrlTokens;
