use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GreetingError;

/// Language selecting which greeting to produce. "Unspecified" is
/// `Option<Language>::None`, never a sentinel string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "en")]
    English,
}

impl Language {
    pub fn label(self) -> &'static str {
        match self {
            Language::Russian => "Russian",
            Language::English => "English",
        }
    }

    /// Exact match on the two recognized tags. Anything else, including
    /// padded or upper-cased forms, is unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ru" => Some(Language::Russian),
            "en" => Some(Language::English),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Russian => "ru",
            Language::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = GreetingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Language::parse(value).ok_or_else(|| GreetingError::unknown_language(value))
    }
}
