use crate::{AuthError, Claims, Result as AuthErrorResult};

use notes_core::User;

use std::panic::Location;

use chrono::{Duration, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// Signs identity tokens with HS256 over a shared secret.
///
/// Stateless by design: a token is self-contained proof of identity, so
/// there is no session store and no revocation before natural expiry.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    issuer: String,
    audience: String,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &[u8], issuer: String, audience: String, ttl_days: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            issuer,
            audience,
            ttl: Duration::days(ttl_days),
        }
    }

    /// Issue a token for the given user
    #[track_caller]
    pub fn issue(&self, user: &User) -> AuthErrorResult<String> {
        let now = Utc::now();

        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            username: user.username.clone(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            exp: (now + self.ttl).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
