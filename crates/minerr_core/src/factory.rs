//! Namespaced error factories
//!
//! A factory captures a module namespace once and produces [`CodedError`]
//! values for that namespace on demand. Construction is pure: a factory
//! holds no mutable state and can be shared freely across threads.
//!
//! # Message format
//!
//! For module `m`, code `c`, and arguments `a0..an`:
//!
//! ```text
//! [m:c] <base_url>m<separator>c?p0=<enc(a0)>&p1=<enc(a1)>...
//! ```
//!
//! The `m:` prefix, the `m<separator>` URL segment, and the query section
//! are each omitted when the factory is unscoped or no arguments are given.

use std::fmt;

use tracing::debug;

use crate::arg::ErrorArg;
use crate::encode::encode_query_value;
use crate::error::CodedError;
use crate::tokens::UrlTokens;

/// A factory producing [`CodedError`] values for one module namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFactory {
    module: Option<String>,
    tokens: UrlTokens,
}

impl ErrorFactory {
    /// Creates a factory scoped to a module namespace
    pub fn scoped(module: impl Into<String>) -> Self {
        Self {
            module: Some(module.into()),
            tokens: UrlTokens::default(),
        }
    }

    /// Creates a factory with no module namespace
    pub fn unscoped() -> Self {
        Self {
            module: None,
            tokens: UrlTokens::default(),
        }
    }

    /// Replaces the documentation URL tokens
    pub fn with_tokens(mut self, tokens: UrlTokens) -> Self {
        self.tokens = tokens;
        self
    }

    /// The module namespace, if any
    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    /// The documentation URL tokens in use
    pub fn tokens(&self) -> &UrlTokens {
        &self.tokens
    }

    /// Builds an error for the given code and arguments.
    ///
    /// The code is any displayable value; each argument is stringified and
    /// percent-encoded into a `p<i>` query parameter in call order.
    pub fn error<C, I>(&self, code: C, args: I) -> CodedError
    where
        C: fmt::Display,
        I: IntoIterator<Item = ErrorArg>,
    {
        let code = code.to_string();
        let mut message = match &self.module {
            Some(module) => format!("[{}:{}] ", module, code),
            None => format!("[{}] ", code),
        };

        message.push_str(&self.tokens.base_url);
        if let Some(module) = &self.module {
            message.push_str(module);
            message.push_str(&self.tokens.separator);
        }
        message.push_str(&code);

        for (position, arg) in args.into_iter().enumerate() {
            let lead = if position == 0 { '?' } else { '&' };
            let encoded = encode_query_value(arg.stringify());
            message.push_str(&format!("{}p{}={}", lead, position, encoded));
        }

        debug!(module = ?self.module, code = %code, "constructed coded error");
        CodedError::new(message)
    }
}

/// Builds an [`ErrorFactory`], scoped when a module name is given.
///
/// ```rust
/// use minerr_core::min_err;
///
/// let scoped = min_err("ngModel");
/// let unscoped = min_err(None);
///
/// assert_eq!(scoped.module(), Some("ngModel"));
/// assert_eq!(unscoped.module(), None);
/// ```
pub fn min_err<'a, M>(module: M) -> ErrorFactory
where
    M: Into<Option<&'a str>>,
{
    match module.into() {
        Some(module) => ErrorFactory::scoped(module),
        None => ErrorFactory::unscoped(),
    }
}

/// Builds a [`CodedError`] from a factory, a code, and any number of
/// arguments convertible into [`ErrorArg`].
///
/// ```rust
/// use minerr_core::min_err;
///
/// let factory = min_err("interpolate");
/// let error = min_err!(factory, "noconcat", "a + b", 2);
///
/// assert!(error.message().starts_with("[interpolate:noconcat] "));
/// assert!(error.message().ends_with("?p0=a%20%2B%20b&p1=2"));
/// ```
#[macro_export]
macro_rules! min_err {
    ($factory:expr, $code:expr $(, $arg:expr)* $(,)?) => {
        $factory.error($code, [$($crate::ErrorArg::from($arg)),*])
    };
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn message_starts_with_bracketed_identifier(
            module in "[a-zA-Z][a-zA-Z0-9]{0,11}",
            code in "[a-zA-Z0-9]{1,11}"
        ) {
            let error = ErrorFactory::scoped(module.as_str()).error(code.as_str(), []);
            let prefix = format!("[{}:{}] ", module, code);

            prop_assert!(error.message().starts_with(&prefix));
        }

        #[test]
        fn parameters_join_in_call_order(
            values in proptest::collection::vec("[a-z]{1,6}", 1..6)
        ) {
            let args: Vec<ErrorArg> =
                values.iter().map(|value| ErrorArg::from(value.as_str())).collect();
            let error = ErrorFactory::unscoped().error("code", args);
            let message = error.message();

            for (position, value) in values.iter().enumerate() {
                let lead = if position == 0 { '?' } else { '&' };
                let parameter = format!("{}p{}={}", lead, position, value);
                prop_assert!(message.contains(&parameter));
            }
        }

        #[test]
        fn encoded_values_never_leak_query_metacharacters(value in ".{0,64}") {
            let error = ErrorFactory::unscoped()
                .error("code", [ErrorArg::from(value.as_str())]);
            let message = error.message();
            let (_, query) = message.split_once("?p0=").expect("query section");

            prop_assert!(!query.contains(' '));
            prop_assert!(!query.contains('&'));
            prop_assert!(!query.contains('='));
        }
    }
}
