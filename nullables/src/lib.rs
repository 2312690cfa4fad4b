//! Nullable storage for deterministic registry testing.
//!
//! The registry engine depends on the `PollStore` trait; this crate provides
//! test-friendly implementations that:
//! - Return deterministic values (ordered iteration, no filesystem)
//! - Can be controlled programmatically (injected failures)
//!
//! Usage: swap the real backend for a nullable in tests.

pub mod store;

pub use store::{FailingStore, NullPollStore};
