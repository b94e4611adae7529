//! Response DTOs for the cleanup gateway API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Message returned when the purge call succeeds.
pub const CLEANUP_COMPLETED: &str = "Expired data cleanup completed";

/// Response body for a successful cleanup trigger
#[derive(Debug, Clone, Serialize)]
pub struct CleanupResponse {
    /// Always `true`
    pub success: bool,
    /// Completion message
    pub message: String,
}

impl CleanupResponse {
    /// Creates the response for a completed purge
    pub fn completed() -> Self {
        Self {
            success: true,
            message: CLEANUP_COMPLETED.to_string(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
///
/// `details` is omitted from the JSON when absent.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
    /// Underlying failure message, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse without details
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    /// Creates the generic 500 body carrying the underlying message
    pub fn internal(details: impl Into<String>) -> Self {
        Self {
            error: "Internal server error".to_string(),
            details: Some(details.into()),
        }
    }
}
