//! Double quoted string handling.
//!
//! Quoted strings use the string literal form of JSON, which is a superset of the `quoted-string`
//! of [RFC 9110](https://httpwg.org/specs/rfc9110.html#quoted.strings) for every character a
//! header value may carry.
use std::borrow::Cow;

use crate::{
    error::{ErrorKind, Result},
    log::debug,
    matches,
    span::quoted_len,
};

/// Remove the quotes of `input` if it is exactly one quoted string.
///
/// Any other input is returned as is.
///
/// # Errors
///
/// Returns error if the quoted string contains an invalid escape sequence or a control
/// character.
///
/// ```
/// assert_eq!(hval::dequote_on_need(r#""foo\"bar""#).unwrap(), r#"foo"bar"#);
/// assert_eq!(hval::dequote_on_need("foobar").unwrap(), "foobar");
/// assert_eq!(hval::dequote_on_need(r#""foo" bar"#).unwrap(), r#""foo" bar"#);
/// ```
pub fn dequote_on_need(input: &str) -> Result<Cow<'_, str>> {
    match dequote(input) {
        Some(ok) => Ok(ok),
        None => Err(ErrorKind::InvalidQuotedString { index: 0 }.into()),
    }
}

/// Quote `input` if it cannot be written as a bare token.
///
/// A token is quoted when it is empty, contains any of `"` `,` `;` `=`, or starts or ends with
/// whitespace.
///
/// ```
/// assert_eq!(hval::enquote_on_need("foo bar"), "foo bar");
/// assert_eq!(hval::enquote_on_need("a,b"), r#""a,b""#);
/// assert_eq!(hval::enquote_on_need(r#"say "hi""#), r#""say \"hi\"""#);
/// ```
pub fn enquote_on_need(input: &str) -> Cow<'_, str> {
    if !is_quote_required(input) {
        return Cow::Borrowed(input);
    }
    match serde_json::to_string(input) {
        Ok(ok) => Cow::Owned(ok),
        Err(_err) => {
            debug!("failed to quote `{input}`: {_err}");
            Cow::Borrowed(input)
        }
    }
}

/// Returns `None` if `input` is one quoted string that fails to decode.
pub(crate) fn dequote(input: &str) -> Option<Cow<'_, str>> {
    if quoted_len(input) != input.len() {
        return Some(Cow::Borrowed(input));
    }
    serde_json::from_str::<String>(input).ok().map(Cow::Owned)
}

fn is_quote_required(input: &str) -> bool {
    input.is_empty()
        || input.starts_with(char::is_whitespace)
        || input.ends_with(char::is_whitespace)
        || input.bytes().any(matches::is_quote_required)
}
