//! Header value contexts.
//!
//! A context is the folded view of one [`Group`]: the leading bare token becomes the value and
//! every other token becomes a parameter.
//!
//! ```
//! use hval::ParseOptions;
//!
//! let contexts = hval::parse_all("text/html; Charset=utf-8; q=0.9", ParseOptions::new()).unwrap();
//!
//! assert_eq!(contexts[0].value.as_deref(), Some("text/html"));
//! assert_eq!(contexts[0].parameters.get("charset"), Some("utf-8"));
//! assert_eq!(contexts[0].parameters.get("q"), Some("0.9"));
//! ```
//!
//! # Extended Parameters
//!
//! A parameter key ending with `*` carries an [RFC 8187] extended value. The `*` is removed from
//! the key and the value is decoded. An extended key replaces an earlier plain key of the same
//! name without counting as a duplicate. A plain key after its extended form is a duplicate and
//! follows [`DuplicateAction`].
//!
//! ```
//! use hval::ParseOptions;
//!
//! let input = "attachment; filename=\"EUR rates.txt\"; filename*=UTF-8''%E2%82%AC%20rates.txt";
//! let contexts = hval::parse_all(input, ParseOptions::new()).unwrap();
//!
//! assert_eq!(contexts[0].parameters.get("filename"), Some("€ rates.txt"));
//!
//! let input = "attachment; filename*=UTF-8''%E2%82%AC%20rates.txt; filename=\"EUR rates.txt\"";
//! assert!(hval::parse_all(input, ParseOptions::new()).is_err());
//! ```
//!
//! [RFC 8187]: https://www.rfc-editor.org/rfc/rfc8187
use std::iter::FusedIterator;

use crate::{
    error::{ErrorKind, Result},
    ext::decode_ext_value,
    log::{debug, trace},
    split::{Group, SplitWithParameter, Token, split_with_parameter},
};

mod options;
mod parameters;

pub use options::{DuplicateAction, ParseOptions};
pub use parameters::{Iter, Parameters};


/// Folded view of one comma separated segment of a header value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementContext {
    /// Leading bare token.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub value: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub parameters: Parameters,
}

impl ElementContext {
    /// Create context with a value and no parameters.
    #[inline]
    pub fn new<V: Into<String>>(value: V) -> Self {
        Self {
            value: Some(value.into()),
            parameters: Parameters::new(),
        }
    }

    /// Create context with parameters only.
    #[inline]
    pub fn from_parameters<P: Into<Parameters>>(parameters: P) -> Self {
        Self {
            value: None,
            parameters: parameters.into(),
        }
    }

    /// Add a parameter, replacing an existing one with the same key.
    #[inline]
    pub fn with_parameter<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.parameters.insert(key, value);
        self
    }
}

/// Parse header value into contexts.
///
/// The returned iterator is lazy, see [`split_with_parameter`].
#[inline]
pub fn parse(input: &str, options: ParseOptions) -> Parse<'_> {
    Parse {
        split: split_with_parameter(input),
        options,
        done: false,
    }
}

/// Parse header value into contexts, collecting all of them.
///
/// # Errors
///
/// Returns the first error in the header value.
#[inline]
pub fn parse_all(input: &str, options: ParseOptions) -> Result<Vec<ElementContext>> {
    parse(input, options).collect()
}

/// Iterator returned by [`parse`].
#[derive(Debug, Clone)]
pub struct Parse<'a> {
    split: SplitWithParameter<'a>,
    options: ParseOptions,
    done: bool,
}

impl Iterator for Parse<'_> {
    type Item = Result<ElementContext>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.split.next()?.and_then(|group| fold(group, &self.options));
        self.done = result.is_err();
        Some(result)
    }
}

impl FusedIterator for Parse<'_> {}

fn fold(group: Group, options: &ParseOptions) -> Result<ElementContext> {
    let mut tokens = group.into_iter().peekable();

    let value = match tokens.next_if(Token::is_plain) {
        Some(Token::Plain(value)) => Some(value),
        _ => None,
    };

    let mut parameters = Parameters::new();
    // keys whose stored value comes from the extended form
    let mut extended = Vec::<String>::new();

    for token in tokens {
        let (key, value) = match token {
            Token::Plain(key) => (key, String::new()),
            Token::Pair(key, value) => (key, value),
        };
        let mut key = if options.parameter_keys_case_sensitive {
            key
        } else {
            key.to_lowercase()
        };
        let is_extended = key.ends_with('*');
        let value = if is_extended {
            key.pop();
            decode_ext_value(&value)?
        } else {
            value
        };

        if !parameters.contains_key(&key) {
            if is_extended {
                extended.push(key.clone());
            }
            parameters.insert(key, value);
            continue;
        }

        if is_extended && !extended.contains(&key) {
            trace!("parameter `{key}` replaced by its extended form");
            extended.push(key.clone());
            parameters.insert(key, value);
            continue;
        }

        match options.on_duplicated_key {
            DuplicateAction::Throw => return Err(ErrorKind::DuplicateKey(key).into()),
            DuplicateAction::UseNew => {
                debug!("duplicated parameter `{key}`, using the new value");
                if !is_extended {
                    extended.retain(|k| k != &key);
                }
                parameters.insert(key, value);
            }
            DuplicateAction::UseOld => {
                debug!("duplicated parameter `{key}`, keeping the old value");
            }
        }
    }

    Ok(ElementContext { value, parameters })
}
