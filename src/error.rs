//! Error types for the cleanup gateway
//!
//! Provides unified error handling using thiserror. Every failure is turned
//! into a JSON body and status code at the handler boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::store::StoreError;

// == Gateway Error Enum ==
/// Unified error type returned by HTTP handlers.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Cleanup key header missing or wrong
    #[error("Unauthorized")]
    Unauthorized,

    /// The data store reported a failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Any other failure while processing the request
    #[error("{0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            GatewayError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, ErrorResponse::new("Unauthorized"))
            }
            GatewayError::Store(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::internal(err.to_string()),
            ),
            GatewayError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::internal(msg.clone()),
            ),
        };

        (status, Json(body)).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for handlers.
pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    async fn render(err: GatewayError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_unauthorized_response() {
        let (status, body) = render(GatewayError::Unauthorized).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "error": "Unauthorized" }));
    }

    #[tokio::test]
    async fn test_store_error_response() {
        let err = StoreError::Rejected("db unreachable".to_string());
        let (status, body) = render(err.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({ "error": "Internal server error", "details": "db unreachable" })
        );
    }

    #[tokio::test]
    async fn test_internal_error_response() {
        let (status, body) = render(GatewayError::Internal("boom".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["details"], "boom");
    }
}
