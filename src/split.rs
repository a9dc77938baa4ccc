//! Header value tokenizer.
//!
//! # Grammar
//!
//! A header value is a comma separated list of groups. With parameters, a group is a semicolon
//! separated list of elements, where an element is either a bare text or a `key=value` pair.
//!
//! A text runs until the next separator. Double quoted strings and spans enclosed by
//! [`BracketPair`]s are skipped as a whole, so separators inside them never split the text:
//!
//! ```
//! use hval::Token;
//!
//! let groups = hval::split_with_parameter(r#"<https://example.com/?a=1,2>; rel="a;b""#)
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! assert_eq!(groups, [[
//!     Token::from("<https://example.com/?a=1,2>"),
//!     Token::from(("rel", "a;b")),
//! ]]);
//! ```
//!
//! A text that is exactly one quoted string is de-quoted, any other text is kept as is,
//! excluding surrounding whitespace.
//!
//! # Laziness
//!
//! Groups are scanned one at a time as the iterator is pulled. An error is returned when the
//! scan reaches the offending position, after every group before it has been yielded. The
//! iterator is fused after an error.
//!
//! [`BracketPair`]: crate::BracketPair
use std::iter::FusedIterator;

use crate::{
    error::{Error, ErrorKind, Result},
    log::debug,
    matches, quote,
    span::{bracketed_len_any_bytes, quoted_len_bytes, whitespace_len},
};

mod token;

pub use token::{Group, Token};


/// Split header value that has no parameters, separated by `,` only.
///
/// ```
/// let hosts = hval::split_without_parameter("client1, proxy1, proxy2")
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
///
/// assert_eq!(hosts, ["client1", "proxy1", "proxy2"]);
/// ```
#[inline]
pub fn split_without_parameter(input: &str) -> SplitWithoutParameter<'_> {
    SplitWithoutParameter {
        scanner: Scanner::new(input, Mode::WithoutParameter),
    }
}

/// Split header value with parameters, separated by `,`, `;` and `=`.
///
/// ```
/// use hval::Token;
///
/// let groups = hval::split_with_parameter("br;q=1.0, gzip;q=0.8")
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
///
/// assert_eq!(groups, [
///     [Token::from("br"), Token::from(("q", "1.0"))],
///     [Token::from("gzip"), Token::from(("q", "0.8"))],
/// ]);
/// ```
#[inline]
pub fn split_with_parameter(input: &str) -> SplitWithParameter<'_> {
    SplitWithParameter {
        scanner: Scanner::new(input, Mode::WithParameter),
    }
}

// ===== Iterators =====

/// Iterator returned by [`split_without_parameter`].
#[derive(Debug, Clone)]
pub struct SplitWithoutParameter<'a> {
    scanner: Scanner<'a>,
}

impl SplitWithoutParameter<'_> {
    /// Returns the byte offset the next scan starts from.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.scanner.cursor
    }
}

impl Iterator for SplitWithoutParameter<'_> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let group = match self.scanner.next_group()? {
            Ok(group) => group,
            Err(err) => return Some(Err(err)),
        };
        match group.into_iter().next() {
            Some(Token::Plain(text)) => Some(Ok(text)),
            _ => unreachable!("group without parameter is a single bare token"),
        }
    }
}

impl FusedIterator for SplitWithoutParameter<'_> {}

/// Iterator returned by [`split_with_parameter`].
#[derive(Debug, Clone)]
pub struct SplitWithParameter<'a> {
    scanner: Scanner<'a>,
}

impl SplitWithParameter<'_> {
    /// Returns the byte offset the next scan starts from.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.scanner.cursor
    }
}

impl Iterator for SplitWithParameter<'_> {
    type Item = Result<Group>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.scanner.next_group()
    }
}

impl FusedIterator for SplitWithParameter<'_> {}

// ===== Scanner =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    WithoutParameter,
    WithParameter,
}

impl Mode {
    #[inline]
    const fn is_separator(self, byte: u8) -> bool {
        match self {
            Self::WithoutParameter => matches::is_list_separator(byte),
            Self::WithParameter => matches::is_param_separator(byte),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing scanned yet.
    Start,
    /// The previous group ended at a `,` or at the end of input.
    Next,
    /// Input exhausted or an error returned.
    Done,
}

#[derive(Debug, Clone)]
struct Scanner<'a> {
    input: &'a str,
    cursor: usize,
    mode: Mode,
    state: State,
}

impl<'a> Scanner<'a> {
    const fn new(input: &'a str, mode: Mode) -> Self {
        Self {
            input,
            cursor: 0,
            mode,
            state: State::Start,
        }
    }

    fn next_group(&mut self) -> Option<Result<Group>> {
        let result = match self.state {
            State::Done => return None,
            State::Start => self.start(),
            State::Next => self.separate(),
        };
        if let Err(err) = result {
            return Some(Err(self.fail(err)));
        }
        if self.is_eof() {
            self.state = State::Done;
            return None;
        }
        match self.group() {
            Ok(group) => {
                self.state = State::Next;
                Some(Ok(group))
            }
            Err(err) => Some(Err(self.fail(err))),
        }
    }

    fn fail(&mut self, err: ErrorKind) -> Error {
        let err = Error::from(err);
        debug!("header value rejected: {err}");
        self.state = State::Done;
        err
    }

    /// Header value must not start with a separator.
    fn start(&mut self) -> Result<(), ErrorKind> {
        self.skip_whitespace();
        match self.peek() {
            Some(byte) if self.mode.is_separator(byte) => Err(ErrorKind::UnexpectedSeparator {
                separator: byte as char,
                index: self.cursor,
            }),
            _ => Ok(()),
        }
    }

    /// Consume the `,` that ended the previous group, which must be followed by another group.
    fn separate(&mut self) -> Result<(), ErrorKind> {
        if self.peek() == Some(b',') {
            self.cursor += 1;
            self.skip_whitespace();
            if self.is_eof() {
                return Err(ErrorKind::UnexpectedEnd {
                    separator: ',',
                    index: self.cursor,
                });
            }
        }
        Ok(())
    }

    fn group(&mut self) -> Result<Group, ErrorKind> {
        let mut group = Group::new();

        loop {
            let key = self.text()?;
            self.skip_whitespace();

            let Some(byte) = self.peek() else {
                group.push(Token::Plain(key));
                return Ok(group);
            };

            match self.separator(byte)? {
                b',' => {
                    group.push(Token::Plain(key));
                    return Ok(group);
                }
                b';' => {
                    group.push(Token::Plain(key));
                    self.next_element(';')?;
                    continue;
                }
                _ => {}
            }

            // `=`
            self.cursor += 1;
            self.skip_whitespace();
            if self.is_eof() {
                return Err(ErrorKind::UnexpectedEnd {
                    separator: '=',
                    index: self.cursor,
                });
            }

            let value = self.text()?;
            group.push(Token::Pair(key, value));
            self.skip_whitespace();

            let Some(byte) = self.peek() else {
                return Ok(group);
            };

            match self.separator(byte)? {
                b',' => return Ok(group),
                b'=' => {
                    return Err(ErrorKind::UnexpectedSeparator {
                        separator: '=',
                        index: self.cursor,
                    });
                }
                _ => self.next_element(';')?,
            }
        }
    }

    /// Scan one text span and de-quote it.
    fn text(&mut self) -> Result<String, ErrorKind> {
        let index = self.cursor;
        let rest = &self.input[index..];
        let len = self.text_len(rest.as_bytes());
        // trimmed length, spans always end on ASCII
        let len = rest[..len].trim_end().len();
        if len == 0 {
            return Err(ErrorKind::EmptyText { index });
        }
        let text = quote::dequote(&rest[..len])
            .ok_or(ErrorKind::InvalidQuotedString { index })?
            .into_owned();
        self.cursor += len;
        Ok(text)
    }

    /// Returns the length until the next separator, skipping quoted and bracketed spans.
    fn text_len(&self, bytes: &[u8]) -> usize {
        let mut cursor = 0;
        while cursor < bytes.len() {
            if self.mode.is_separator(bytes[cursor]) {
                break;
            }
            let bracketed = bracketed_len_any_bytes(&bytes[cursor..]);
            if bracketed > 0 {
                cursor += bracketed;
                continue;
            }
            let quoted = quoted_len_bytes(&bytes[cursor..]);
            if quoted > 0 {
                cursor += quoted;
                continue;
            }
            cursor += 1;
        }
        cursor
    }

    /// Returns `byte` if it is a separator in current mode.
    fn separator(&self, byte: u8) -> Result<u8, ErrorKind> {
        if self.mode.is_separator(byte) {
            Ok(byte)
        } else {
            Err(ErrorKind::UnexpectedChar {
                found: self.input[self.cursor..].chars().next().unwrap_or(byte as char),
                index: self.cursor,
            })
        }
    }

    /// Consume `separator` which must be followed by another element.
    fn next_element(&mut self, separator: char) -> Result<(), ErrorKind> {
        self.cursor += 1;
        self.skip_whitespace();
        if self.is_eof() {
            return Err(ErrorKind::UnexpectedEnd {
                separator,
                index: self.cursor,
            });
        }
        Ok(())
    }

    #[inline]
    fn skip_whitespace(&mut self) {
        self.cursor += whitespace_len(&self.input[self.cursor..]);
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.cursor).copied()
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.cursor >= self.input.len()
    }
}
