//! Shared-secret check for administrative actions.
//!
//! Implements constant-time comparison to mitigate timing attacks.

use subtle::ConstantTimeEq;

use crate::errors::AppError;

/// Check a submitted admin key against the configured one.
pub fn verify_admin_key(provided: &str, expected: &str) -> Result<(), AppError> {
    if constant_time_compare(provided, expected) {
        Ok(())
    } else {
        Err(AppError::Forbidden("Forbidden".to_string()))
    }
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
