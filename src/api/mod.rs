//! API Module
//!
//! HTTP handlers and routing for the cleanup gateway.
//!
//! # Endpoints
//! - `POST /api/cleanup-expired-data` - Purge expired records (secret required)
//! - `GET /api/cleanup-expired-data` - Same, for schedulers that only issue GET
//! - `GET /health` - Health check endpoint

pub mod auth;
pub mod handlers;
pub mod routes;

pub use auth::{verify_cleanup_key, CLEANUP_KEY_HEADER};
pub use handlers::*;
pub use routes::{create_router, CLEANUP_PATH};
