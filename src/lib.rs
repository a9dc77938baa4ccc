//! HTTP header value splitter, parser and stringifier.
//!
//! Works on a single header value, such as the value of `Accept`, `Cache-Control`, `Link` or
//! `Content-Disposition`, already taken out of a message.
//!
//! - [`split_without_parameter`] splits a comma separated list.
//! - [`split_with_parameter`] splits a list whose elements carry `;` separated parameters.
//! - [`parse`] folds each element into an [`ElementContext`].
//! - [`stringify_from_tokens`] and [`stringify_from_contexts`] write them back.
//!
//! ```
//! use hval::ParseOptions;
//!
//! let contexts = hval::parse_all(
//!     r#"<https://example.com/2>; rel="next", <https://example.com/9>; rel="last""#,
//!     ParseOptions::new(),
//! ).unwrap();
//!
//! assert_eq!(contexts[1].value.as_deref(), Some("<https://example.com/9>"));
//! assert_eq!(contexts[1].parameters.get("rel"), Some("last"));
//!
//! assert_eq!(
//!     hval::stringify_from_contexts(&contexts).unwrap(),
//!     "<https://example.com/2>; rel=next, <https://example.com/9>; rel=last",
//! );
//! ```
//!
//! # Features
//!
//! - `charset` (default), decode [extended values][decode_ext_value] in charsets other than
//!   UTF-8.
//! - `log`, emit diagnostics through the `log` crate.
//! - `serde`, implement `Serialize` and `Deserialize` for the data types.
#![warn(missing_debug_implementations)]

mod log;
mod matches;

mod span;
mod quote;
pub mod split;
pub mod ext;
pub mod context;
mod stringify;
pub mod error;

pub use span::{BracketPair, bracketed_len, bracketed_len_any, quoted_len, whitespace_len};
pub use quote::{dequote_on_need, enquote_on_need};
pub use matches::is_ascii_printable;
pub use split::{Group, Token, split_with_parameter, split_without_parameter};
pub use ext::{CharsetDecoder, EncodeResult, decode_ext_value, decode_ext_value_with, encode_ext_value_on_need};
pub use context::{DuplicateAction, ElementContext, Parameters, ParseOptions, parse, parse_all};
pub use stringify::{stringify_from_contexts, stringify_from_tokens};
pub use error::{Error, ErrorKind, Result};
