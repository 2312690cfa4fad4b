//! Poll and ballot records.

use serde::{Deserialize, Serialize};

use agora_store::StoreError;
use agora_types::{PollKey, VoterAddress};

/// Maximum number of options a poll may carry, bounded by the execution-cost
/// constraints of the host environment.
pub const MAX_POLL_OPTIONS: usize = 10;

/// One labeled option of a poll and its running vote count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOption {
    pub label: String,
    pub tally: u64,
}

/// A poll: a question with a fixed, bounded set of labeled options.
///
/// Options are an ordered sequence with linear lookup by label. With at most
/// [`MAX_POLL_OPTIONS`] entries that beats a map, and it keeps the persisted
/// encoding deterministic.
///
/// Immutable after creation except for the tallies, which only the vote path
/// adjusts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poll {
    /// The registry-unique key this poll is stored under.
    pub key: PollKey,
    /// Who created the poll.
    pub creator: VoterAddress,
    /// The question being asked.
    pub question: String,
    /// Labeled options with their running tallies.
    pub options: Vec<PollOption>,
}

impl Poll {
    /// Build a new poll with every tally at zero.
    ///
    /// Label validation (count bounds, uniqueness) is the registry's job;
    /// this constructor assumes it already happened.
    pub(crate) fn new(
        key: PollKey,
        creator: VoterAddress,
        question: &str,
        option_labels: &[String],
    ) -> Self {
        Self {
            key,
            creator,
            question: question.to_string(),
            options: option_labels
                .iter()
                .map(|label| PollOption {
                    label: label.clone(),
                    tally: 0,
                })
                .collect(),
        }
    }

    /// Whether the poll defines an option with this label.
    pub fn has_option(&self, label: &str) -> bool {
        self.options.iter().any(|o| o.label == label)
    }

    /// The current tally for a label, if the option exists.
    pub fn tally_of(&self, label: &str) -> Option<u64> {
        self.options.iter().find(|o| o.label == label).map(|o| o.tally)
    }

    /// Sum of all option tallies, which equals the number of distinct voters
    /// who have ever voted on this poll.
    pub fn total_votes(&self) -> u64 {
        self.options.iter().map(|o| o.tally).sum()
    }

    pub(crate) fn option_mut(&mut self, label: &str) -> Option<&mut PollOption> {
        self.options.iter_mut().find(|o| o.label == label)
    }

    pub(crate) fn encode(&self) -> Result<Vec<u8>, StoreError> {
        bincode::serialize(self).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    pub(crate) fn decode(bytes: &[u8]) -> Result<Self, StoreError> {
        bincode::deserialize(bytes)
            .map_err(|e| StoreError::Corruption(format!("undecodable poll record: {e}")))
    }
}

/// One voter's current selection for one poll.
///
/// At most one exists per (voter, poll) pair; re-votes overwrite it in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ballot {
    pub voter: VoterAddress,
    pub poll: PollKey,
    /// Label of the currently selected option.
    pub option: String,
}

impl Ballot {
    pub(crate) fn encode(&self) -> Result<Vec<u8>, StoreError> {
        bincode::serialize(self).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    pub(crate) fn decode(bytes: &[u8]) -> Result<Self, StoreError> {
        bincode::deserialize(bytes)
            .map_err(|e| StoreError::Corruption(format!("undecodable ballot record: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_poll() -> Poll {
        Poll::new(
            PollKey::parse("colors").unwrap(),
            VoterAddress::parse("alice").unwrap(),
            "Favourite color?",
            &["Red".to_string(), "Blue".to_string()],
        )
    }

    #[test]
    fn new_poll_has_zero_tallies() {
        let poll = sample_poll();
        assert_eq!(poll.tally_of("Red"), Some(0));
        assert_eq!(poll.tally_of("Blue"), Some(0));
        assert_eq!(poll.total_votes(), 0);
    }

    #[test]
    fn option_lookup_is_exact() {
        let poll = sample_poll();
        assert!(poll.has_option("Red"));
        assert!(!poll.has_option("red"));
        assert_eq!(poll.tally_of("Green"), None);
    }

    #[test]
    fn options_preserve_creation_order() {
        let poll = sample_poll();
        let labels: Vec<&str> = poll.options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Red", "Blue"]);
    }

    #[test]
    fn poll_encode_decode_roundtrip() {
        let mut poll = sample_poll();
        poll.option_mut("Red").unwrap().tally = 3;

        let bytes = poll.encode().unwrap();
        let decoded = Poll::decode(&bytes).unwrap();
        assert_eq!(decoded, poll);
    }

    #[test]
    fn decode_garbage_reports_corruption() {
        let result = Poll::decode(&[0xFF; 3]);
        assert!(matches!(result, Err(StoreError::Corruption(_))));
    }
}
