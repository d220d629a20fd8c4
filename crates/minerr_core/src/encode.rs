//! Query-value percent-encoding

use std::borrow::Cow;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped in a query-parameter value.
///
/// Everything non-alphanumeric is escaped except the marks left bare by the
/// message format: `-` `_` `.` `!` `~` `*` `'` `(` `)`.
pub const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a stringified argument for embedding as a query value
pub fn encode_query_value(raw: &str) -> Cow<'_, str> {
    utf8_percent_encode(raw, QUERY_VALUE).into()
}
