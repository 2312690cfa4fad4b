//! Poll registry storage trait.

use agora_types::{PollKey, VoterAddress};

use crate::StoreError;

/// Trait for storing registry state across its two namespaces: poll records
/// keyed by poll key, and ballot records keyed by the composite (voter, poll)
/// key (see [`crate::keys::ballot_key`]).
///
/// Records are opaque bytes at this layer; the registry engine owns their
/// encoding. Absent keys read back as `None`, never as an error.
pub trait PollStore {
    /// Store a poll record.
    fn put_poll(&self, key: &PollKey, data: &[u8]) -> Result<(), StoreError>;

    /// Get a poll record by key.
    fn get_poll(&self, key: &PollKey) -> Result<Option<Vec<u8>>, StoreError>;

    /// Check whether a poll record exists.
    fn has_poll(&self, key: &PollKey) -> Result<bool, StoreError>;

    /// All poll records, in ascending lexicographic order of their keys.
    fn iter_polls(&self) -> Result<Vec<Vec<u8>>, StoreError>;

    /// Number of stored polls.
    fn poll_count(&self) -> Result<u64, StoreError>;

    /// Store a voter's ballot record for a poll.
    fn put_ballot(
        &self,
        voter: &VoterAddress,
        poll: &PollKey,
        data: &[u8],
    ) -> Result<(), StoreError>;

    /// Get a voter's ballot record for a poll.
    fn get_ballot(
        &self,
        voter: &VoterAddress,
        poll: &PollKey,
    ) -> Result<Option<Vec<u8>>, StoreError>;

    /// Check whether a voter has a ballot for a poll.
    fn has_ballot(&self, voter: &VoterAddress, poll: &PollKey) -> Result<bool, StoreError>;

    /// Number of stored ballots across all polls.
    fn ballot_count(&self) -> Result<u64, StoreError>;

    /// Atomically persist updated poll tallies together with the voter's
    /// ballot. A vote must never land half-applied: either both records are
    /// written or neither is.
    fn put_poll_and_ballot(
        &self,
        key: &PollKey,
        poll_data: &[u8],
        voter: &VoterAddress,
        ballot_data: &[u8],
    ) -> Result<(), StoreError>;
}
