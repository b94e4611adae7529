//! Shared-secret check for the cleanup trigger.

use axum::http::{HeaderMap, HeaderValue};
use subtle::ConstantTimeEq;

use crate::error::{GatewayError, Result};

/// Header carrying the caller's cleanup secret.
pub const CLEANUP_KEY_HEADER: &str = "x-cleanup-key";

/// Verifies that `headers` carry exactly the expected cleanup secret.
///
/// The raw header bytes are compared with the secret's UTF-8 bytes in
/// constant time. A missing header or any mismatch yields
/// [`GatewayError::Unauthorized`].
pub fn verify_cleanup_key(headers: &HeaderMap, expected: &str) -> Result<()> {
    let provided = headers
        .get(CLEANUP_KEY_HEADER)
        .map(HeaderValue::as_bytes)
        .ok_or(GatewayError::Unauthorized)?;

    let keys_match: bool = provided.ct_eq(expected.as_bytes()).into();
    if keys_match {
        Ok(())
    } else {
        Err(GatewayError::Unauthorized)
    }
}
