use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// JWT claims carried by every issued token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id, decimal string)
    pub sub: String,
    /// Email claim
    pub email: String,
    /// Username claim
    pub username: String,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.sub.parse::<i64>().is_err() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user id) must be a numeric identity".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Numeric subject identity. `validate()` guarantees this parses.
    #[track_caller]
    pub fn user_id(&self) -> AuthErrorResult<i64> {
        self.sub.parse().map_err(|_| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: "sub (user id) must be a numeric identity".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
