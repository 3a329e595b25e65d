//! Tag - Single normalized keyword attached to a prompt

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// A single keyword. Never empty, never contains '#' or whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    /// Normalize user input into a tag.
    ///
    /// Surrounding whitespace is trimmed and one leading '#' is stripped.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        let keyword = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if keyword.is_empty() {
            return Err(DomainError::Validation("tag must not be empty".to_string()));
        }
        if keyword.contains('#') {
            return Err(DomainError::Validation(format!(
                "tag '{}' must not contain '#'",
                raw
            )));
        }
        if keyword.chars().any(char::is_whitespace) {
            return Err(DomainError::Validation(format!(
                "tag '{}' must be a single keyword",
                raw
            )));
        }

        Ok(Self(keyword.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Tag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Tag {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}
