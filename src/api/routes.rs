//! API Routes
//!
//! Configures the Axum router with all gateway endpoints.

use std::any::Any as PanicPayload;

use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::error;

use super::handlers::{cleanup_handler, health_handler, AppState};
use crate::error::GatewayError;

/// Path of the cleanup trigger.
pub const CLEANUP_PATH: &str = "/api/cleanup-expired-data";

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET|POST /api/cleanup-expired-data` - Cleanup trigger
/// - `GET /health` - Health check endpoint
///
/// Any other method on the trigger path is answered with 405.
///
/// # Middleware
/// - Panic catching: Turns a panicking handler into a 500 JSON body
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(CLEANUP_PATH, get(cleanup_handler).post(cleanup_handler))
        .route("/health", get(health_handler))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Converts a handler panic into the standard internal-error response.
fn panic_response(payload: Box<dyn PanicPayload + Send + 'static>) -> Response {
    let details = if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else {
        "Unknown panic".to_string()
    };

    error!("Handler panicked: {}", details);
    GatewayError::Internal(details).into_response()
}
