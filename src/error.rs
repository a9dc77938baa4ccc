//! Error types that can occur while splitting, parsing or stringifying header values.

/// Result type with [`Error`] as the default error.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Header value error.
///
/// Offsets reported by the syntax variants are byte offsets into the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self { kind }
    }
}

impl Error {
    /// Returns the kind of this error.
    #[inline]
    pub const fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the kind of this error, consuming it.
    #[inline]
    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    /// Returns the broad category of this error.
    #[inline]
    pub const fn category(&self) -> Category {
        self.kind.category()
    }

    /// Returns `true` if the input is malformed.
    #[inline]
    pub const fn is_syntax(&self) -> bool {
        matches!(self.category(), Category::Syntax)
    }

    /// Returns `true` if an option value is not recognized.
    #[inline]
    pub const fn is_invalid_option(&self) -> bool {
        matches!(self.category(), Category::InvalidOption)
    }

    /// Returns `true` if a structure given for stringification is empty.
    #[inline]
    pub const fn is_empty_structure(&self) -> bool {
        matches!(self.category(), Category::EmptyStructure)
    }
}

/// Broad category of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    /// Input is malformed.
    Syntax,
    /// Option value is not recognized.
    InvalidOption,
    /// Structure given for stringification is empty.
    EmptyStructure,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Separator found where a text is expected.
    UnexpectedSeparator { separator: char, index: usize },
    /// Character found where a separator is expected.
    UnexpectedChar { found: char, index: usize },
    /// Text span is empty.
    EmptyText { index: usize },
    /// Input ends right after a separator.
    UnexpectedEnd { separator: char, index: usize },
    /// Quoted string is not a valid string literal.
    InvalidQuotedString { index: usize },
    /// Parameter key appears more than once.
    DuplicateKey(String),
    /// Value is not a valid `charset'language'value` extended value.
    InvalidExtValue(String),
    /// Language code is not printable ASCII.
    InvalidLanguage(String),
    /// Charset cannot be decoded.
    UnsupportedCharset(String),
    /// Option value is not recognized.
    InvalidOption(String),
    /// Context at the index has neither value nor parameters.
    EmptyContext(usize),
    /// Context at the index has an empty value.
    EmptyValue(usize),
    /// Group at the index has no token.
    EmptyGroup(usize),
    /// Bare token at the group and element index is empty.
    EmptyToken(usize, usize),
    /// Key at the group and element index is empty.
    EmptyKey(usize, usize),
}

impl ErrorKind {
    pub(crate) const fn category(&self) -> Category {
        use ErrorKind::*;
        match self {
            UnexpectedSeparator { .. }
            | UnexpectedChar { .. }
            | EmptyText { .. }
            | UnexpectedEnd { .. }
            | InvalidQuotedString { .. }
            | DuplicateKey(_)
            | InvalidExtValue(_)
            | InvalidLanguage(_)
            | UnsupportedCharset(_) => Category::Syntax,
            InvalidOption(_) => Category::InvalidOption,
            EmptyContext(_) | EmptyValue(_) | EmptyGroup(_) | EmptyToken(..) | EmptyKey(..) => {
                Category::EmptyStructure
            }
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ErrorKind::*;
        match &self.kind {
            UnexpectedSeparator { separator, index } => {
                write!(f, "unexpected separator `{separator}` at index {index}")
            }
            UnexpectedChar { found, index } => {
                write!(f, "unexpected character `{found}` at index {index}")
            }
            EmptyText { index } => write!(f, "unexpected empty text at index {index}"),
            UnexpectedEnd { separator, index } => {
                write!(f, "unexpected end after separator `{separator}` at index {index}")
            }
            InvalidQuotedString { index } => {
                write!(f, "invalid quoted string at index {index}")
            }
            DuplicateKey(key) => write!(f, "parameter key `{key}` is duplicated"),
            InvalidExtValue(value) => write!(f, "`{value}` is not a valid extended value"),
            InvalidLanguage(code) => write!(f, "`{code}` is not a valid language code"),
            UnsupportedCharset(charset) => write!(f, "unsupported charset `{charset}`"),
            InvalidOption(value) => write!(f, "`{value}` is not a valid duplicated key action"),
            EmptyContext(i) => write!(f, "context [{i}] is empty"),
            EmptyValue(i) => write!(f, "context [{i}] value is empty"),
            EmptyGroup(i) => write!(f, "token group [{i}] is empty"),
            EmptyToken(i, j) => write!(f, "token [{i}][{j}] is empty"),
            EmptyKey(i, j) => write!(f, "element [{i}][{j}] key is empty"),
        }
    }
}
