/// One element of a [`Group`].
///
/// Under the `serde` feature a token is represented as a string or a `[key, value]` array.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(untagged))]
pub enum Token {
    /// Bare text.
    Plain(String),
    /// `key=value` pair.
    Pair(String, String),
}

/// Tokens of one comma separated segment of a header value.
pub type Group = Vec<Token>;

impl Token {
    /// Returns `true` if this is a [`Token::Plain`].
    #[inline]
    pub const fn is_plain(&self) -> bool {
        matches!(self, Self::Plain(_))
    }

    /// Returns `true` if this is a [`Token::Pair`].
    #[inline]
    pub const fn is_pair(&self) -> bool {
        matches!(self, Self::Pair(..))
    }

    /// Returns the text of a bare token, or the key of a pair.
    #[inline]
    pub fn key(&self) -> &str {
        match self {
            Self::Plain(text) => text,
            Self::Pair(key, _) => key,
        }
    }

    /// Returns the value of a pair.
    #[inline]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Plain(_) => None,
            Self::Pair(_, value) => Some(value),
        }
    }
}

impl From<&str> for Token {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Plain(value.to_owned())
    }
}

impl From<String> for Token {
    #[inline]
    fn from(value: String) -> Self {
        Self::Plain(value)
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Token {
    #[inline]
    fn from((key, value): (K, V)) -> Self {
        Self::Pair(key.into(), value.into())
    }
}
