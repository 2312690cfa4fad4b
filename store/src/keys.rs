//! Composite key encoding for the ballots namespace.

use agora_types::{PollKey, VoterAddress};

/// Separator between the voter and poll components of a ballot key.
///
/// Both identifier charsets are printable ASCII, so a NUL byte can never
/// appear inside either component and the encoding is collision-free.
pub const BALLOT_KEY_SEPARATOR: u8 = 0;

/// Encode the composite (voter, poll) key under which a ballot is stored.
///
/// One flat key per ballot keeps the lookup O(1); there is never a reason to
/// scan all ballots to find one voter's entry.
pub fn ballot_key(voter: &VoterAddress, poll: &PollKey) -> Vec<u8> {
    let mut key = Vec::with_capacity(voter.as_str().len() + 1 + poll.as_str().len());
    key.extend_from_slice(voter.as_str().as_bytes());
    key.push(BALLOT_KEY_SEPARATOR);
    key.extend_from_slice(poll.as_str().as_bytes());
    key
}
