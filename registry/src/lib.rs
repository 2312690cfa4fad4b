//! Poll registry and ballot ledger.
//!
//! Owns poll definitions, per-voter ballots, and vote-tally arithmetic over
//! an abstract storage backend. Three mutations of state exist: creating a
//! poll, casting a first vote, and changing a vote. Everything else is a
//! read. Two invariants hold at all times:
//! - at most one ballot per (voter, poll) pair;
//! - the sum of a poll's tallies equals the number of distinct voters who
//!   have ever voted on it, maintained incrementally by the vote path rather
//!   than recomputed.
//!
//! The host environment serializes all state-mutating invocations per
//! registry instance, so read-modify-write sequences here never interleave.

pub mod error;
pub mod poll;
pub mod registry;
pub mod requests;

pub use error::RegistryError;
pub use poll::{Ballot, Poll, PollOption, MAX_POLL_OPTIONS};
pub use registry::{PollRegistry, RegistrySummary};
pub use requests::{CastVoteRequest, CreatePollRequest};
