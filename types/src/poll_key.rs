//! Poll key type — the caller-supplied unique key identifying a poll.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PollKeyError;

/// A validated poll key.
///
/// Slug-shaped: 1 to 64 ASCII lowercase alphanumeric characters, `-` or `_`.
/// Uniqueness across the registry is enforced at poll creation, not here.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PollKey(String);

impl PollKey {
    /// Maximum key length in characters.
    pub const MAX_LEN: usize = 64;

    /// Validate a raw poll key string.
    pub fn parse(raw: impl Into<String>) -> Result<Self, PollKeyError> {
        let s = raw.into();
        if s.is_empty() {
            return Err(PollKeyError::Empty);
        }
        if s.len() > Self::MAX_LEN {
            return Err(PollKeyError::TooLong(s.len()));
        }
        if let Some(c) = s
            .chars()
            .find(|c| !c.is_ascii_lowercase() && !c.is_ascii_digit() && *c != '-' && *c != '_')
        {
            return Err(PollKeyError::Charset(c));
        }
        Ok(Self(s))
    }

    /// Return the raw key string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PollKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_slugs() {
        assert!(PollKey::parse("favourite-language").is_ok());
        assert!(PollKey::parse("poll_2").is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(PollKey::parse(""), Err(PollKeyError::Empty));
    }

    #[test]
    fn rejects_over_max_length() {
        let long = "k".repeat(65);
        assert_eq!(PollKey::parse(long), Err(PollKeyError::TooLong(65)));
        assert!(PollKey::parse("k".repeat(64)).is_ok());
    }

    #[test]
    fn rejects_bad_characters() {
        assert_eq!(PollKey::parse("Poll"), Err(PollKeyError::Charset('P')));
        assert_eq!(PollKey::parse("a/b"), Err(PollKeyError::Charset('/')));
    }
}
