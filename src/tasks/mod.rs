//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Purge schedule: Calls the store's purge at a fixed interval when enabled

mod cleanup;

pub use cleanup::spawn_purge_task;
