//! Nullable store — thread-safe in-memory storage for testing.

use agora_store::{ballot_key, PollStore, StoreError};
use agora_types::{PollKey, VoterAddress};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// An in-memory poll + ballot store for testing.
///
/// BTreeMaps keep keys in lexicographic order, so `iter_polls` matches the
/// ordering contract of the real backend.
pub struct NullPollStore {
    polls: Mutex<BTreeMap<String, Vec<u8>>>,
    ballots: Mutex<BTreeMap<Vec<u8>, Vec<u8>>>,
}

impl NullPollStore {
    pub fn new() -> Self {
        Self {
            polls: Mutex::new(BTreeMap::new()),
            ballots: Mutex::new(BTreeMap::new()),
        }
    }
}

impl Default for NullPollStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PollStore for NullPollStore {
    fn put_poll(&self, key: &PollKey, data: &[u8]) -> Result<(), StoreError> {
        self.polls
            .lock()
            .unwrap()
            .insert(key.as_str().to_string(), data.to_vec());
        Ok(())
    }

    fn get_poll(&self, key: &PollKey) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.polls.lock().unwrap().get(key.as_str()).cloned())
    }

    fn has_poll(&self, key: &PollKey) -> Result<bool, StoreError> {
        Ok(self.polls.lock().unwrap().contains_key(key.as_str()))
    }

    fn iter_polls(&self) -> Result<Vec<Vec<u8>>, StoreError> {
        Ok(self.polls.lock().unwrap().values().cloned().collect())
    }

    fn poll_count(&self) -> Result<u64, StoreError> {
        Ok(self.polls.lock().unwrap().len() as u64)
    }

    fn put_ballot(
        &self,
        voter: &VoterAddress,
        poll: &PollKey,
        data: &[u8],
    ) -> Result<(), StoreError> {
        self.ballots
            .lock()
            .unwrap()
            .insert(ballot_key(voter, poll), data.to_vec());
        Ok(())
    }

    fn get_ballot(
        &self,
        voter: &VoterAddress,
        poll: &PollKey,
    ) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self
            .ballots
            .lock()
            .unwrap()
            .get(&ballot_key(voter, poll))
            .cloned())
    }

    fn has_ballot(&self, voter: &VoterAddress, poll: &PollKey) -> Result<bool, StoreError> {
        Ok(self
            .ballots
            .lock()
            .unwrap()
            .contains_key(&ballot_key(voter, poll)))
    }

    fn ballot_count(&self) -> Result<u64, StoreError> {
        Ok(self.ballots.lock().unwrap().len() as u64)
    }

    fn put_poll_and_ballot(
        &self,
        key: &PollKey,
        poll_data: &[u8],
        voter: &VoterAddress,
        ballot_data: &[u8],
    ) -> Result<(), StoreError> {
        // Hold both locks across the two writes so the pair is applied as one.
        let mut polls = self.polls.lock().unwrap();
        let mut ballots = self.ballots.lock().unwrap();
        polls.insert(key.as_str().to_string(), poll_data.to_vec());
        ballots.insert(ballot_key(voter, key), ballot_data.to_vec());
        Ok(())
    }
}

/// A store whose every operation fails with [`StoreError::Backend`].
///
/// Used to test that storage failures propagate to the caller unchanged and
/// abort the invocation.
pub struct FailingStore;

impl FailingStore {
    fn fail<T>() -> Result<T, StoreError> {
        Err(StoreError::Backend("injected failure".into()))
    }
}

impl PollStore for FailingStore {
    fn put_poll(&self, _key: &PollKey, _data: &[u8]) -> Result<(), StoreError> {
        Self::fail()
    }

    fn get_poll(&self, _key: &PollKey) -> Result<Option<Vec<u8>>, StoreError> {
        Self::fail()
    }

    fn has_poll(&self, _key: &PollKey) -> Result<bool, StoreError> {
        Self::fail()
    }

    fn iter_polls(&self) -> Result<Vec<Vec<u8>>, StoreError> {
        Self::fail()
    }

    fn poll_count(&self) -> Result<u64, StoreError> {
        Self::fail()
    }

    fn put_ballot(
        &self,
        _voter: &VoterAddress,
        _poll: &PollKey,
        _data: &[u8],
    ) -> Result<(), StoreError> {
        Self::fail()
    }

    fn get_ballot(
        &self,
        _voter: &VoterAddress,
        _poll: &PollKey,
    ) -> Result<Option<Vec<u8>>, StoreError> {
        Self::fail()
    }

    fn has_ballot(&self, _voter: &VoterAddress, _poll: &PollKey) -> Result<bool, StoreError> {
        Self::fail()
    }

    fn ballot_count(&self) -> Result<u64, StoreError> {
        Self::fail()
    }

    fn put_poll_and_ballot(
        &self,
        _key: &PollKey,
        _poll_data: &[u8],
        _voter: &VoterAddress,
        _ballot_data: &[u8],
    ) -> Result<(), StoreError> {
        Self::fail()
    }
}
