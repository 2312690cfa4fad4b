//! LMDB implementation of the `PollStore` trait.

use std::path::Path;

use heed::types::{Bytes, Str};
use heed::{Database, Env, EnvOpenOptions};

use agora_store::{ballot_key, PollStore, StoreError};
use agora_types::{PollKey, VoterAddress};

use crate::LmdbError;

/// Default LMDB map size: 256 MiB, far beyond what a poll registry needs.
pub const DEFAULT_MAP_SIZE: usize = 256 * 1024 * 1024;

/// LMDB-backed poll + ballot store.
///
/// One environment holding two named databases. `Env` is internally
/// reference-counted, so the store is cheap to clone.
#[derive(Clone)]
pub struct LmdbPollStore {
    env: Env,
    polls: Database<Str, Bytes>,
    ballots: Database<Bytes, Bytes>,
}

impl LmdbPollStore {
    /// Open or create the store environment at the given directory.
    pub fn open(path: &Path) -> Result<Self, LmdbError> {
        Self::open_with_map_size(path, DEFAULT_MAP_SIZE)
    }

    /// Open or create the store with an explicit LMDB map size.
    pub fn open_with_map_size(path: &Path, map_size: usize) -> Result<Self, LmdbError> {
        std::fs::create_dir_all(path)?;
        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(map_size)
                .max_dbs(2)
                .open(path)?
        };
        let mut wtxn = env.write_txn()?;
        let polls = env.create_database(&mut wtxn, Some("polls"))?;
        let ballots = env.create_database(&mut wtxn, Some("ballots"))?;
        wtxn.commit()?;
        tracing::debug!(path = %path.display(), "opened lmdb poll store");
        Ok(Self {
            env,
            polls,
            ballots,
        })
    }
}

fn backend(e: heed::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

impl PollStore for LmdbPollStore {
    fn put_poll(&self, key: &PollKey, data: &[u8]) -> Result<(), StoreError> {
        let mut wtxn = self.env.write_txn().map_err(backend)?;
        self.polls
            .put(&mut wtxn, key.as_str(), data)
            .map_err(backend)?;
        wtxn.commit().map_err(backend)
    }

    fn get_poll(&self, key: &PollKey) -> Result<Option<Vec<u8>>, StoreError> {
        let rtxn = self.env.read_txn().map_err(backend)?;
        let value = self.polls.get(&rtxn, key.as_str()).map_err(backend)?;
        Ok(value.map(|v| v.to_vec()))
    }

    fn has_poll(&self, key: &PollKey) -> Result<bool, StoreError> {
        let rtxn = self.env.read_txn().map_err(backend)?;
        Ok(self
            .polls
            .get(&rtxn, key.as_str())
            .map_err(backend)?
            .is_some())
    }

    fn iter_polls(&self) -> Result<Vec<Vec<u8>>, StoreError> {
        let rtxn = self.env.read_txn().map_err(backend)?;
        let mut values = Vec::new();
        for item in self.polls.iter(&rtxn).map_err(backend)? {
            let (_key, value) = item.map_err(backend)?;
            values.push(value.to_vec());
        }
        Ok(values)
    }

    fn poll_count(&self) -> Result<u64, StoreError> {
        let rtxn = self.env.read_txn().map_err(backend)?;
        self.polls.len(&rtxn).map_err(backend)
    }

    fn put_ballot(
        &self,
        voter: &VoterAddress,
        poll: &PollKey,
        data: &[u8],
    ) -> Result<(), StoreError> {
        let mut wtxn = self.env.write_txn().map_err(backend)?;
        self.ballots
            .put(&mut wtxn, &ballot_key(voter, poll), data)
            .map_err(backend)?;
        wtxn.commit().map_err(backend)
    }

    fn get_ballot(
        &self,
        voter: &VoterAddress,
        poll: &PollKey,
    ) -> Result<Option<Vec<u8>>, StoreError> {
        let rtxn = self.env.read_txn().map_err(backend)?;
        let value = self
            .ballots
            .get(&rtxn, &ballot_key(voter, poll))
            .map_err(backend)?;
        Ok(value.map(|v| v.to_vec()))
    }

    fn has_ballot(&self, voter: &VoterAddress, poll: &PollKey) -> Result<bool, StoreError> {
        let rtxn = self.env.read_txn().map_err(backend)?;
        Ok(self
            .ballots
            .get(&rtxn, &ballot_key(voter, poll))
            .map_err(backend)?
            .is_some())
    }

    fn ballot_count(&self) -> Result<u64, StoreError> {
        let rtxn = self.env.read_txn().map_err(backend)?;
        self.ballots.len(&rtxn).map_err(backend)
    }

    fn put_poll_and_ballot(
        &self,
        key: &PollKey,
        poll_data: &[u8],
        voter: &VoterAddress,
        ballot_data: &[u8],
    ) -> Result<(), StoreError> {
        // One write transaction spanning both databases: the vote either
        // commits in full or not at all.
        let mut wtxn = self.env.write_txn().map_err(backend)?;
        self.polls
            .put(&mut wtxn, key.as_str(), poll_data)
            .map_err(backend)?;
        self.ballots
            .put(&mut wtxn, &ballot_key(voter, key), ballot_data)
            .map_err(backend)?;
        wtxn.commit().map_err(backend)
    }
}
