//! bcrypt password hashing.
//!
//! The cost factor comes from configuration (default 12, interactive-login
//! latency). Verification goes through `bcrypt::verify`, never a manual
//! comparison.

use crate::Result as AuthErrorResult;

/// Hash a plaintext password with a fresh salt
pub fn hash_password(plain: &str, cost: u32) -> AuthErrorResult<String> {
    Ok(bcrypt::hash(plain, cost)?)
}

/// Check a plaintext password against a stored hash
pub fn verify_password(plain: &str, hash: &str) -> AuthErrorResult<bool> {
    Ok(bcrypt::verify(plain, hash)?)
}
