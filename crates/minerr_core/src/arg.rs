//! Error arguments and their stringification rule
//!
//! Arguments interpolated into an error message fall into four categories:
//! plain text (passed through unchanged), the absent value (distinct from
//! JSON `null`), callables (represented by their signature text), and
//! everything else (carried as its JSON serialization). Each category
//! stringifies deterministically, so a given argument always produces the
//! same message.

use serde::Serialize;
use serde_json::Value;

/// A single argument interpolated into an error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorArg {
    /// Plain text, stringified as-is with no quoting or escaping
    Text(String),

    /// The absent value; stringifies to the literal `undefined`
    Undefined,

    /// A callable, represented by its signature text; any body following
    /// the first `" {"` is stripped during stringification
    Callable(String),

    /// An already-serialized JSON value
    Json(String),
}

impl ErrorArg {
    /// Creates a callable argument from its signature text
    pub fn callable(signature: impl Into<String>) -> Self {
        ErrorArg::Callable(signature.into())
    }

    /// Serializes an arbitrary value into a JSON argument.
    ///
    /// A value the serializer cannot handle fails here, and the failure
    /// propagates unmodified to the caller. Note that strings serialized
    /// through this constructor are JSON-quoted; use the `From<&str>`
    /// conversion for raw text.
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        Ok(ErrorArg::Json(serde_json::to_string(value)?))
    }

    /// Returns the message-embeddable text form of this argument
    pub fn stringify(&self) -> &str {
        match self {
            ErrorArg::Text(text) => text,
            ErrorArg::Undefined => "undefined",
            ErrorArg::Callable(signature) => match signature.find(" {") {
                Some(body) => &signature[..body],
                None => signature,
            },
            ErrorArg::Json(json) => json,
        }
    }
}

impl From<&str> for ErrorArg {
    fn from(value: &str) -> Self {
        ErrorArg::Text(value.to_string())
    }
}

impl From<String> for ErrorArg {
    fn from(value: String) -> Self {
        ErrorArg::Text(value)
    }
}

impl From<bool> for ErrorArg {
    fn from(value: bool) -> Self {
        ErrorArg::Json(value.to_string())
    }
}

macro_rules! impl_from_integer {
    ($($int:ty),* $(,)?) => {
        $(
            impl From<$int> for ErrorArg {
                fn from(value: $int) -> Self {
                    ErrorArg::Json(value.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl From<f64> for ErrorArg {
    fn from(value: f64) -> Self {
        // Non-finite numbers have no JSON representation and serialize as null.
        if value.is_finite() {
            ErrorArg::Json(value.to_string())
        } else {
            ErrorArg::Json("null".to_string())
        }
    }
}

impl From<f32> for ErrorArg {
    fn from(value: f32) -> Self {
        ErrorArg::from(f64::from(value))
    }
}

impl From<Value> for ErrorArg {
    fn from(value: Value) -> Self {
        match value {
            // A JSON string is still a string: passed through unquoted.
            Value::String(text) => ErrorArg::Text(text),
            other => ErrorArg::Json(other.to_string()),
        }
    }
}

impl<T> From<Option<T>> for ErrorArg
where
    T: Into<ErrorArg>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(present) => present.into(),
            None => ErrorArg::Undefined,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_passes_through_unchanged() {
        assert_eq!(ErrorArg::from("abc").stringify(), "abc");
    }

    #[test]
    fn test_absent_value_stringifies_to_undefined() {
        assert_eq!(ErrorArg::from(Option::<&str>::None).stringify(), "undefined");
    }

    #[test]
    fn test_number_stringifies_to_decimal_text() {
        assert_eq!(ErrorArg::from(42).stringify(), "42");
    }

    #[test]
    fn test_object_stringifies_to_json() {
        assert_eq!(ErrorArg::from(json!({"a": 1})).stringify(), r#"{"a":1}"#);
    }

    #[test]
    fn test_json_null_stringifies_to_null() {
        assert_eq!(ErrorArg::from(json!(null)).stringify(), "null");
    }

    #[test]
    fn test_json_string_is_not_quoted() {
        assert_eq!(ErrorArg::from(json!("abc")).stringify(), "abc");
    }

    #[test]
    fn test_callable_body_is_stripped() {
        let arg = ErrorArg::callable("function (x) { return x; }");
        assert_eq!(arg.stringify(), "function (x)");
    }

    #[test]
    fn test_callable_without_body_is_kept_whole() {
        assert_eq!(ErrorArg::callable("function (x)").stringify(), "function (x)");
    }

    #[test]
    fn test_non_finite_float_stringifies_to_null() {
        assert_eq!(ErrorArg::from(f64::NAN).stringify(), "null");
        assert_eq!(ErrorArg::from(f64::INFINITY).stringify(), "null");
    }

    #[test]
    fn test_from_serialize_quotes_strings() {
        let arg = ErrorArg::from_serialize(&"abc").unwrap();
        assert_eq!(arg.stringify(), r#""abc""#);
    }

    #[test]
    fn test_from_serialize_handles_arrays() {
        let arg = ErrorArg::from_serialize(&vec![1, 2, 3]).unwrap();
        assert_eq!(arg.stringify(), "[1,2,3]");
    }
}
