//! Abstract storage trait for the agora poll registry.
//!
//! Every storage backend (LMDB, in-memory for testing) implements this trait.
//! The registry engine depends only on the trait.

pub mod error;
pub mod keys;
pub mod poll;

pub use error::StoreError;
pub use keys::ballot_key;
pub use poll::PollStore;
