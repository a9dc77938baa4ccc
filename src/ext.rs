//! Extended parameter values, [RFC 8187](https://www.rfc-editor.org/rfc/rfc8187).
//!
//! ```text
//! ext-value     = charset  "'" [ language ] "'" value-chars
//! ```
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::{
    error::{ErrorKind, Result},
    log::trace,
    matches::is_ascii_printable,
};


/// Bytes escaped by `encodeURIComponent`, everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Decoder of bytes in a named charset.
///
/// Used by [`decode_ext_value_with`] for any charset other than UTF-8.
pub trait CharsetDecoder {
    /// Decode `bytes` in `charset`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnsupportedCharset`] if `charset` is not known.
    fn decode(&self, charset: &str, bytes: &[u8]) -> Result<String>;
}

/// Default [`CharsetDecoder`].
///
/// With the `charset` feature, charsets are resolved by their WHATWG encoding label and
/// malformed sequences are replaced with `U+FFFD`. Without it, no charset is supported.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultDecoder;

impl CharsetDecoder for DefaultDecoder {
    #[cfg(feature = "charset")]
    fn decode(&self, charset: &str, bytes: &[u8]) -> Result<String> {
        let Some(encoding) = encoding_rs::Encoding::for_label(charset.as_bytes()) else {
            return Err(ErrorKind::UnsupportedCharset(charset.to_owned()).into());
        };
        let (decoded, _malformed) = encoding.decode_with_bom_removal(bytes);
        Ok(decoded.into_owned())
    }

    #[cfg(not(feature = "charset"))]
    fn decode(&self, charset: &str, _: &[u8]) -> Result<String> {
        Err(ErrorKind::UnsupportedCharset(charset.to_owned()).into())
    }
}

/// Decode an extended parameter value.
///
/// # Errors
///
/// Returns error if the value is not `charset'language'value-chars` with a non-empty charset and
/// value, if any part is not printable ASCII, if the percent encoding is malformed, or if the
/// charset is not supported.
///
/// ```
/// assert_eq!(hval::decode_ext_value("UTF-8'en'%E2%82%AC%20rates").unwrap(), "€ rates");
/// ```
#[inline]
pub fn decode_ext_value(input: &str) -> Result<String> {
    decode_ext_value_with(input, &DefaultDecoder)
}

/// Decode an extended parameter value, using `decoder` for charsets other than UTF-8.
///
/// # Errors
///
/// See [`decode_ext_value`].
pub fn decode_ext_value_with<D: CharsetDecoder + ?Sized>(input: &str, decoder: &D) -> Result<String> {
    let invalid = || ErrorKind::InvalidExtValue(input.to_owned());

    // charset is at least one character, the delimiter is the first `'` after it
    let delimiter = input
        .char_indices()
        .skip(1)
        .find(|&(_, ch)| ch == '\'')
        .map(|(i, _)| i)
        .ok_or_else(invalid)?;
    let charset = &input[..delimiter];
    let (language, encoded) = input[delimiter + 1..].split_once('\'').ok_or_else(invalid)?;

    if encoded.is_empty()
        || !is_ascii_printable(charset)
        || !is_ascii_printable(language)
        || !is_ascii_printable(encoded)
        || !is_percent_encoded(encoded)
    {
        return Err(invalid().into());
    }

    let decoded = percent_decode_str(encoded).decode_utf8().map_err(|_| invalid())?;

    if charset.eq_ignore_ascii_case("utf-8") || charset.eq_ignore_ascii_case("utf8") {
        return Ok(decoded.into_owned());
    }

    trace!("decoding extended value in charset `{charset}`");
    decoder.decode(charset, decoded.as_bytes())
}

/// Result of [`encode_ext_value_on_need`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodeResult {
    /// Whether `value` is encoded.
    pub encoded: bool,
    pub value: String,
}

/// Encode a parameter value as an extended value, if it is not printable ASCII.
///
/// The value is encoded in UTF-8, tagged with `language`, which may be empty.
///
/// # Errors
///
/// Returns error if `language` is not printable ASCII.
///
/// ```
/// let result = hval::encode_ext_value_on_need("€ rates", "en").unwrap();
/// assert!(result.encoded);
/// assert_eq!(result.value, "UTF-8'en'%E2%82%AC%20rates");
///
/// let result = hval::encode_ext_value_on_need("rates", "").unwrap();
/// assert!(!result.encoded);
/// assert_eq!(result.value, "rates");
/// ```
pub fn encode_ext_value_on_need(input: &str, language: &str) -> Result<EncodeResult> {
    if !is_ascii_printable(language) {
        return Err(ErrorKind::InvalidLanguage(language.to_owned()).into());
    }
    if is_ascii_printable(input) {
        return Ok(EncodeResult {
            encoded: false,
            value: input.to_owned(),
        });
    }
    Ok(EncodeResult {
        encoded: true,
        value: format!("UTF-8'{language}'{}", utf8_percent_encode(input, URI_COMPONENT)),
    })
}

/// Every `%` must be followed by two hex digits.
fn is_percent_encoded(input: &str) -> bool {
    let mut bytes = input.as_bytes();
    while let [byte, rest @ ..] = bytes {
        bytes = match (byte, rest) {
            (b'%', [hi, lo, rest @ ..]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => rest,
            (b'%', _) => return false,
            _ => rest,
        };
    }
    true
}
