use std::str::FromStr;

use crate::error::{Error, ErrorKind};

/// Options of [`parse`].
///
/// [`parse`]: crate::parse
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default, rename_all = "kebab-case"))]
pub struct ParseOptions {
    /// Whether parameter keys are kept as is instead of converted to lowercase.
    pub parameter_keys_case_sensitive: bool,
    /// Action when a parameter key appears more than once in an element.
    pub on_duplicated_key: DuplicateAction,
}

impl ParseOptions {
    /// Create default options.
    #[inline]
    pub const fn new() -> Self {
        Self {
            parameter_keys_case_sensitive: false,
            on_duplicated_key: DuplicateAction::Throw,
        }
    }

    /// Set whether parameter keys are case sensitive.
    #[inline]
    pub const fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.parameter_keys_case_sensitive = case_sensitive;
        self
    }

    /// Set the action on duplicated parameter keys.
    #[inline]
    pub const fn on_duplicated_key(mut self, action: DuplicateAction) -> Self {
        self.on_duplicated_key = action;
        self
    }
}

/// Action when a parameter key appears more than once in an element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "kebab-case"))]
pub enum DuplicateAction {
    /// Returns [`ErrorKind::DuplicateKey`].
    #[default]
    Throw,
    /// Last value wins.
    UseNew,
    /// First value wins.
    UseOld,
}

impl DuplicateAction {
    /// Returns the option string of this action.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Throw => "throw",
            Self::UseNew => "use-new",
            Self::UseOld => "use-old",
        }
    }
}

impl FromStr for DuplicateAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "throw" => Ok(Self::Throw),
            "use-new" => Ok(Self::UseNew),
            "use-old" => Ok(Self::UseOld),
            _ => Err(ErrorKind::InvalidOption(s.to_owned()).into()),
        }
    }
}

impl std::fmt::Display for DuplicateAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
