//! Voter address type — the validated identifier for poll creators and voters.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AddressError;

/// A validated account address.
///
/// Caller-supplied address strings pass through [`VoterAddress::parse`] before
/// they are stored as a poll creator or used as a ballot key. A valid address
/// is 3 to 90 ASCII lowercase alphanumeric characters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VoterAddress(String);

impl VoterAddress {
    /// Minimum address length in characters.
    pub const MIN_LEN: usize = 3;
    /// Maximum address length in characters.
    pub const MAX_LEN: usize = 90;

    /// Validate a raw address string.
    pub fn parse(raw: impl Into<String>) -> Result<Self, AddressError> {
        let s = raw.into();
        if s.is_empty() {
            return Err(AddressError::Empty);
        }
        if s.len() < Self::MIN_LEN || s.len() > Self::MAX_LEN {
            return Err(AddressError::Length(s.len()));
        }
        if let Some(c) = s
            .chars()
            .find(|c| !c.is_ascii_lowercase() && !c.is_ascii_digit())
        {
            return Err(AddressError::Charset(c));
        }
        Ok(Self(s))
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VoterAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_lowercase_alphanumeric() {
        let addr = VoterAddress::parse("voter1a").unwrap();
        assert_eq!(addr.as_str(), "voter1a");
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(VoterAddress::parse(""), Err(AddressError::Empty));
    }

    #[test]
    fn rejects_too_short_and_too_long() {
        assert_eq!(VoterAddress::parse("ab"), Err(AddressError::Length(2)));
        let long = "a".repeat(91);
        assert_eq!(VoterAddress::parse(long), Err(AddressError::Length(91)));
    }

    #[test]
    fn length_bounds_are_inclusive() {
        assert!(VoterAddress::parse("abc").is_ok());
        assert!(VoterAddress::parse("a".repeat(90)).is_ok());
    }

    #[test]
    fn rejects_uppercase_and_symbols() {
        assert_eq!(
            VoterAddress::parse("Voter"),
            Err(AddressError::Charset('V'))
        );
        assert_eq!(
            VoterAddress::parse("vo ter"),
            Err(AddressError::Charset(' '))
        );
    }
}
