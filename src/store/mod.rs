//! Data Store Module
//!
//! The gateway owns no data. Expired records live in an external hosted
//! store, reached through the [`ExpiredDataStore`] seam so handlers can be
//! exercised against a fake.
//!
//! # Components
//! - `ExpiredDataStore`: the single purge operation
//! - `RestStore`: RPC client for a PostgREST-style endpoint

mod rest;

use async_trait::async_trait;
use thiserror::Error;

pub use rest::RestStore;

// == Store Error Enum ==
/// Failure reported while purging expired records.
///
/// The display text is the bare downstream message so it can be surfaced
/// unchanged to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store answered with an error
    #[error("{0}")]
    Rejected(String),

    /// The store could not be reached
    #[error("{0}")]
    Transport(String),
}

/// External store able to delete every record past its retention period.
///
/// A purge that finds nothing to delete succeeds.
#[async_trait]
pub trait ExpiredDataStore: Send + Sync {
    /// Deletes or expires all qualifying records.
    async fn purge_expired(&self) -> Result<(), StoreError>;
}
