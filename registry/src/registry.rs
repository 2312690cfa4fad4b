//! The registry engine: create-poll, cast-vote, and read-only queries over
//! an abstract storage backend.

use agora_store::PollStore;
use agora_types::{PollKey, VoterAddress};

use crate::error::RegistryError;
use crate::poll::{Ballot, Poll, MAX_POLL_OPTIONS};

/// Poll registry and ballot ledger over a storage backend.
///
/// The host serializes all state-mutating invocations against one instance,
/// so the check-then-write sequences below never observe a concurrent write.
pub struct PollRegistry<S> {
    store: S,
}

impl<S: PollStore> PollRegistry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create a new poll under a registry-unique key, all tallies at zero.
    pub fn create_poll(
        &self,
        creator: &VoterAddress,
        key: &PollKey,
        question: &str,
        option_labels: &[String],
    ) -> Result<Poll, RegistryError> {
        let count = option_labels.len();
        if count == 0 || count > MAX_POLL_OPTIONS {
            return Err(RegistryError::InvalidOptionCount { got: count });
        }
        for (i, label) in option_labels.iter().enumerate() {
            if option_labels[..i].contains(label) {
                return Err(RegistryError::DuplicateOption(label.clone()));
            }
        }
        if self.store.has_poll(key)? {
            return Err(RegistryError::DuplicateKey(key.to_string()));
        }

        let poll = Poll::new(key.clone(), creator.clone(), question, option_labels);
        self.store.put_poll(key, &poll.encode()?)?;
        tracing::info!(poll = %key, creator = %creator, options = count, "created poll");
        Ok(poll)
    }

    /// Record or change a voter's selection on a poll.
    ///
    /// First vote increments the chosen option's tally and writes a ballot;
    /// a vote change moves one count from the old option to the new one and
    /// rewrites the ballot, committed as a single store write. Re-voting for
    /// the currently selected option leaves every tally unchanged.
    pub fn cast_vote(
        &self,
        voter: &VoterAddress,
        key: &PollKey,
        option_label: &str,
    ) -> Result<(), RegistryError> {
        let mut poll = self.load_poll(key)?;
        if !poll.has_option(option_label) {
            return Err(RegistryError::OptionNotFound {
                poll: key.to_string(),
                label: option_label.to_string(),
            });
        }

        let previous = match self.store.get_ballot(voter, key)? {
            Some(bytes) => Some(Ballot::decode(&bytes)?),
            None => None,
        };

        match previous {
            Some(ballot) if ballot.option == option_label => {
                tracing::debug!(poll = %key, voter = %voter, option = option_label,
                    "re-vote for current selection, tallies unchanged");
            }
            Some(ballot) => {
                decrement(&mut poll, &ballot.option)?;
                increment(&mut poll, option_label)?;
                let updated = Ballot {
                    voter: voter.clone(),
                    poll: key.clone(),
                    option: option_label.to_string(),
                };
                self.store
                    .put_poll_and_ballot(key, &poll.encode()?, voter, &updated.encode()?)?;
                tracing::info!(poll = %key, voter = %voter, from = %ballot.option,
                    to = option_label, "changed vote");
            }
            None => {
                increment(&mut poll, option_label)?;
                let ballot = Ballot {
                    voter: voter.clone(),
                    poll: key.clone(),
                    option: option_label.to_string(),
                };
                self.store
                    .put_poll_and_ballot(key, &poll.encode()?, voter, &ballot.encode()?)?;
                tracing::info!(poll = %key, voter = %voter, option = option_label,
                    "recorded vote");
            }
        }
        Ok(())
    }

    /// The full poll record, current tallies included.
    pub fn get_poll(&self, key: &PollKey) -> Result<Poll, RegistryError> {
        self.load_poll(key)
    }

    /// All stored polls, ordered lexicographically by poll key.
    pub fn list_polls(&self) -> Result<Vec<Poll>, RegistryError> {
        self.store
            .iter_polls()?
            .iter()
            .map(|bytes| Poll::decode(bytes).map_err(RegistryError::from))
            .collect()
    }

    /// A voter's current selection for a poll.
    pub fn get_ballot(
        &self,
        voter: &VoterAddress,
        key: &PollKey,
    ) -> Result<Ballot, RegistryError> {
        match self.store.get_ballot(voter, key)? {
            Some(bytes) => Ok(Ballot::decode(&bytes)?),
            None => Err(RegistryError::BallotNotFound {
                voter: voter.to_string(),
                poll: key.to_string(),
            }),
        }
    }

    /// Registry summary statistics.
    pub fn summary(&self) -> Result<RegistrySummary, RegistryError> {
        Ok(RegistrySummary {
            polls: self.store.poll_count()?,
            ballots: self.store.ballot_count()?,
        })
    }

    fn load_poll(&self, key: &PollKey) -> Result<Poll, RegistryError> {
        match self.store.get_poll(key)? {
            Some(bytes) => Ok(Poll::decode(&bytes)?),
            None => Err(RegistryError::PollNotFound(key.to_string())),
        }
    }
}

/// Summary statistics for the registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrySummary {
    pub polls: u64,
    pub ballots: u64,
}

// Tally adjustments on a loaded poll. The label was validated against the
// poll (or came from a stored ballot), so a miss here means the stored state
// itself is bad: corruption, not a caller error.

fn increment(poll: &mut Poll, label: &str) -> Result<(), RegistryError> {
    let key = poll.key.clone();
    match poll.option_mut(label) {
        Some(option) => {
            option.tally += 1;
            Ok(())
        }
        None => Err(corrupt(&key, label, "tally target missing")),
    }
}

fn decrement(poll: &mut Poll, label: &str) -> Result<(), RegistryError> {
    let key = poll.key.clone();
    match poll.option_mut(label) {
        Some(option) => {
            option.tally = option
                .tally
                .checked_sub(1)
                .ok_or_else(|| corrupt(&key, label, "tally underflow"))?;
            Ok(())
        }
        None => Err(corrupt(&key, label, "ballot references unknown option")),
    }
}

fn corrupt(key: &PollKey, label: &str, what: &str) -> RegistryError {
    RegistryError::Storage(agora_store::StoreError::Corruption(format!(
        "poll {key}: {what}: {label}"
    )))
}
