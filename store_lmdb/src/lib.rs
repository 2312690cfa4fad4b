//! LMDB storage backend for the agora poll registry.
//!
//! Implements the `PollStore` trait from `agora-store` using the `heed` LMDB
//! bindings. Each logical namespace (polls, ballots) maps to one LMDB
//! database within a single environment; LMDB's native byte ordering of keys
//! provides the lexicographic iteration order `iter_polls` promises.

pub mod error;
pub mod store;

pub use error::LmdbError;
pub use store::LmdbPollStore;
