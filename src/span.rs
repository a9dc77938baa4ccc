//! Lexical primitives.
//!
//! Every function takes the remaining input and returns the length in bytes of the span at its
//! start, with `0` meaning no span. Quotes and brackets are ASCII, so a returned length always
//! ends on a char boundary.


/// Pair of brackets that encloses an opaque span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BracketPair {
    open: u8,
    close: u8,
}

impl BracketPair {
    /// `(` and `)`.
    pub const PAREN: Self = Self { open: b'(', close: b')' };
    /// `<` and `>`.
    pub const ANGLE: Self = Self { open: b'<', close: b'>' };
    /// `[` and `]`.
    pub const SQUARE: Self = Self { open: b'[', close: b']' };
    /// `{` and `}`.
    pub const CURLY: Self = Self { open: b'{', close: b'}' };

    /// All recognized pairs.
    pub const ALL: [Self; 4] = [Self::PAREN, Self::ANGLE, Self::SQUARE, Self::CURLY];

    /// Returns the recognized pair of given characters, or `None` if it is not one.
    pub const fn new(open: char, close: char) -> Option<Self> {
        match (open, close) {
            ('(', ')') => Some(Self::PAREN),
            ('<', '>') => Some(Self::ANGLE),
            ('[', ']') => Some(Self::SQUARE),
            ('{', '}') => Some(Self::CURLY),
            _ => None,
        }
    }

    /// Returns the opening character.
    #[inline]
    pub const fn open(&self) -> char {
        self.open as char
    }

    /// Returns the closing character.
    #[inline]
    pub const fn close(&self) -> char {
        self.close as char
    }
}

/// Returns the length of the double quoted string at the start of `input`, quotes included.
///
/// The string ends at the first `"` that is not preceded by `\`. Returns `0` if `input` does not
/// start with `"` or the string is unterminated.
///
/// ```
/// assert_eq!(hval::quoted_len(r#""a\"b" c"#), 6);
/// assert_eq!(hval::quoted_len(r#""open"#), 0);
/// ```
#[inline]
pub fn quoted_len(input: &str) -> usize {
    quoted_len_bytes(input.as_bytes())
}

/// Returns the length of the span enclosed by `pair` at the start of `input`, brackets included.
///
/// Nested brackets of the same pair are counted and quoted strings inside are skipped as a whole.
/// Returns `0` if `input` does not start with the opening bracket or the span is unterminated.
///
/// ```
/// use hval::BracketPair;
///
/// assert_eq!(hval::bracketed_len("<a<b>c>, d", BracketPair::ANGLE), 7);
/// assert_eq!(hval::bracketed_len(r#"(a")"b) c"#, BracketPair::PAREN), 7);
/// ```
#[inline]
pub fn bracketed_len(input: &str, pair: BracketPair) -> usize {
    bracketed_len_bytes(input.as_bytes(), pair)
}

/// Returns the length of the span enclosed by any recognized [`BracketPair`] at the start of
/// `input`.
#[inline]
pub fn bracketed_len_any(input: &str) -> usize {
    bracketed_len_any_bytes(input.as_bytes())
}

/// Returns the length of the leading whitespace of `input`.
#[inline]
pub fn whitespace_len(input: &str) -> usize {
    input.len() - input.trim_start().len()
}

pub(crate) fn quoted_len_bytes(bytes: &[u8]) -> usize {
    let [b'"', ..] = bytes else {
        return 0;
    };
    let mut cursor = 1;
    while cursor < bytes.len() {
        if bytes[cursor] == b'"' && bytes[cursor - 1] != b'\\' {
            return cursor + 1;
        }
        cursor += 1;
    }
    0
}

fn bracketed_len_bytes(bytes: &[u8], pair: BracketPair) -> usize {
    if bytes.first() != Some(&pair.open) {
        return 0;
    }
    let mut cursor = 1;
    let mut depth = 1usize;
    while cursor < bytes.len() {
        let quoted = quoted_len_bytes(&bytes[cursor..]);
        if quoted > 0 {
            cursor += quoted;
            continue;
        }
        let byte = bytes[cursor];
        cursor += 1;
        if byte == pair.open {
            depth += 1;
        } else if byte == pair.close {
            depth -= 1;
            if depth == 0 {
                return cursor;
            }
        }
    }
    0
}

pub(crate) fn bracketed_len_any_bytes(bytes: &[u8]) -> usize {
    BracketPair::ALL
        .into_iter()
        .map(|pair| bracketed_len_bytes(bytes, pair))
        .max()
        .unwrap_or(0)
}
