use thiserror::Error;

use agora_types::{AddressError, PollKeyError};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("poll key {0} already exists")]
    DuplicateKey(String),

    #[error("poll must have between 1 and 10 options, got {got}")]
    InvalidOptionCount { got: usize },

    #[error("duplicate option label: {0}")]
    DuplicateOption(String),

    #[error("poll {0} not found")]
    PollNotFound(String),

    #[error("poll {poll} has no option {label}")]
    OptionNotFound { poll: String, label: String },

    #[error("voter {voter} has no ballot for poll {poll}")]
    BallotNotFound { voter: String, poll: String },

    #[error("invalid voter address: {0}")]
    InvalidAddress(#[from] AddressError),

    #[error("invalid poll key: {0}")]
    InvalidPollKey(#[from] PollKeyError),

    #[error("storage failure: {0}")]
    Storage(#[from] agora_store::StoreError),
}
