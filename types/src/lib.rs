//! Fundamental types for the agora poll registry.
//!
//! This crate defines the identifier types shared across every other crate in
//! the workspace: validated voter addresses, validated poll keys, and their
//! parse errors.

pub mod address;
pub mod error;
pub mod poll_key;

pub use address::VoterAddress;
pub use error::{AddressError, PollKeyError};
pub use poll_key::PollKey;
