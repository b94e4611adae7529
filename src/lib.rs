//! Cleanup Gateway - secret-gated trigger for expired-data purges
//!
//! Accepts a scheduler's HTTP request, checks a shared secret, and asks an
//! external data store to delete every record past its retention period.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use store::{ExpiredDataStore, RestStore, StoreError};
pub use tasks::spawn_purge_task;
