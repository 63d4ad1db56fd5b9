//! Extraction options.

use std::fmt;
use std::str::FromStr;

/// Which level-1 heading becomes the document title when there are several.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TitlePolicy {
    /// The first `#` heading is the title; later ones are ignored.
    #[default]
    First,
    /// Each `#` heading replaces the previous one.
    Last,
}

impl fmt::Display for TitlePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Last => f.write_str("last"),
        }
    }
}

/// Error parsing an option from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("unknown title policy '{0}', expected 'first' or 'last'")]
    UnknownTitlePolicy(String),
}

impl FromStr for TitlePolicy {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(Self::First),
            "last" => Ok(Self::Last),
            _ => Err(OptionsError::UnknownTitlePolicy(s.to_string())),
        }
    }
}

/// Options for one extraction pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    pub title_policy: TitlePolicy,
}

impl ExtractOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title_policy: TitlePolicy::First,
        }
    }

    /// Set the title policy.
    #[must_use]
    pub const fn title_policy(mut self, policy: TitlePolicy) -> Self {
        self.title_policy = policy;
        self
    }
}
