//! Boundary request shapes.
//!
//! These are the message bodies the host delivers; identifiers inside them
//! are raw strings until `resolve` validates them. The voter identity on a
//! cast-vote never travels in the body; the host supplies the caller's
//! authenticated identifier out of band.

use serde::{Deserialize, Serialize};

use agora_store::PollStore;
use agora_types::{PollKey, VoterAddress};

use crate::error::RegistryError;
use crate::poll::Poll;
use crate::registry::PollRegistry;

/// Request to create a poll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePollRequest {
    pub poll_key: String,
    pub question: String,
    pub options: Vec<String>,
    /// Creator override; absent means the authenticated caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
}

impl CreatePollRequest {
    /// Resolve and validate the identifiers in this request.
    ///
    /// The optional creator collapses to one concrete raw string (the
    /// caller's own address when none was supplied) before validation, so
    /// both spellings share a single code path.
    pub fn resolve(&self, sender: &str) -> Result<(VoterAddress, PollKey), RegistryError> {
        let raw_creator = self.creator.as_deref().unwrap_or(sender);
        let creator = VoterAddress::parse(raw_creator)?;
        let key = PollKey::parse(self.poll_key.as_str())?;
        Ok((creator, key))
    }
}

/// Request to cast or change a vote.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastVoteRequest {
    pub poll_key: String,
    pub option: String,
}

impl CastVoteRequest {
    /// Validate the poll key in this request.
    pub fn resolve(&self) -> Result<PollKey, RegistryError> {
        Ok(PollKey::parse(self.poll_key.as_str())?)
    }
}

impl<S: PollStore> PollRegistry<S> {
    /// Boundary entry point for a create-poll request from `sender`.
    pub fn handle_create_poll(
        &self,
        sender: &str,
        request: &CreatePollRequest,
    ) -> Result<Poll, RegistryError> {
        let (creator, key) = request.resolve(sender)?;
        self.create_poll(&creator, &key, &request.question, &request.options)
    }

    /// Boundary entry point for a cast-vote request from `sender`.
    pub fn handle_cast_vote(
        &self,
        sender: &str,
        request: &CastVoteRequest,
    ) -> Result<(), RegistryError> {
        let voter = VoterAddress::parse(sender)?;
        let key = request.resolve()?;
        self.cast_vote(&voter, &key, &request.option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_json_shape() {
        let json = r#"{
            "poll_key": "favourite-language",
            "question": "What is your favourite programming language?",
            "options": ["Rust", "Go"]
        }"#;
        let request: CreatePollRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.poll_key, "favourite-language");
        assert_eq!(request.options.len(), 2);
        assert_eq!(request.creator, None);
    }

    #[test]
    fn vote_request_json_roundtrip() {
        let request = CastVoteRequest {
            poll_key: "favourite-language".into(),
            option: "Rust".into(),
        };
        let json = serde_json::to_string(&request).unwrap();
        let back: CastVoteRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn absent_creator_defaults_to_sender() {
        let request = CreatePollRequest {
            poll_key: "colors".into(),
            question: "q".into(),
            options: vec!["a".into()],
            creator: None,
        };
        let (creator, _key) = request.resolve("alice").unwrap();
        assert_eq!(creator.as_str(), "alice");
    }

    #[test]
    fn explicit_creator_wins_over_sender() {
        let request = CreatePollRequest {
            poll_key: "colors".into(),
            question: "q".into(),
            options: vec!["a".into()],
            creator: Some("carol".into()),
        };
        let (creator, _key) = request.resolve("alice").unwrap();
        assert_eq!(creator.as_str(), "carol");
    }

    #[test]
    fn invalid_creator_is_rejected_after_defaulting() {
        let request = CreatePollRequest {
            poll_key: "colors".into(),
            question: "q".into(),
            options: vec!["a".into()],
            creator: Some("Not An Address".into()),
        };
        assert!(matches!(
            request.resolve("alice"),
            Err(RegistryError::InvalidAddress(_))
        ));
    }

    #[test]
    fn invalid_poll_key_is_rejected() {
        let request = CastVoteRequest {
            poll_key: "Bad Key!".into(),
            option: "Rust".into(),
        };
        assert!(matches!(
            request.resolve(),
            Err(RegistryError::InvalidPollKey(_))
        ));
    }
}
