//! Parse errors for the identifier types.

use thiserror::Error;

/// Why a raw address string failed validation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("address is empty")]
    Empty,

    #[error("address length {0} is outside 3..=90")]
    Length(usize),

    #[error("address contains invalid character {0:?}")]
    Charset(char),
}

/// Why a raw poll key string failed validation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PollKeyError {
    #[error("poll key is empty")]
    Empty,

    #[error("poll key length {0} exceeds 64")]
    TooLong(usize),

    #[error("poll key contains invalid character {0:?}")]
    Charset(char),
}
