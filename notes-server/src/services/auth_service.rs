use crate::api::auth::auth_response::AuthResponse;
use crate::api::auth::login_request::LoginRequest;
use crate::api::auth::register_request::RegisterRequest;
use crate::api::error::Result;

use notes_auth::{TokenIssuer, password};
use notes_core::models::user::User;
use notes_db::UserStore;

use std::sync::Arc;

/// Account registration and credential verification.
///
/// Generic over the user store so tests can substitute an in-memory
/// double for the SQLite-backed repository.
pub struct AuthService<U> {
    users: U,
    issuer: Arc<TokenIssuer>,
    bcrypt_cost: u32,
}

impl<U: UserStore> AuthService<U> {
    pub fn new(users: U, issuer: Arc<TokenIssuer>, bcrypt_cost: u32) -> Self {
        Self {
            users,
            issuer,
            bcrypt_cost,
        }
    }

    /// Create an account and issue a token for it.
    ///
    /// Returns `Ok(None)` when the email or username is already taken.
    /// Email is checked before username; a request colliding on both
    /// reports the same conflict either way.
    pub async fn register(&self, req: RegisterRequest) -> Result<Option<AuthResponse>> {
        if self.users.find_by_email(&req.email).await?.is_some() {
            return Ok(None);
        }
        if self.users.find_by_username(&req.username).await?.is_some() {
            return Ok(None);
        }

        let hash = password::hash_password(&req.password, self.bcrypt_cost)?;

        let mut user = User::new(req.username, req.email, hash);
        user.id = self.users.create(&user).await?;

        let token = self.issuer.issue(&user)?;

        Ok(Some(AuthResponse {
            token,
            username: user.username,
            email: user.email,
        }))
    }

    /// Verify credentials and issue a token.
    ///
    /// Returns `Ok(None)` for an unknown email and for a wrong password
    /// alike, so callers cannot probe which emails are registered.
    pub async fn login(&self, req: LoginRequest) -> Result<Option<AuthResponse>> {
        let Some(user) = self.users.find_by_email(&req.email).await? else {
            return Ok(None);
        };

        if !password::verify_password(&req.password, &user.password_hash)? {
            return Ok(None);
        }

        let token = self.issuer.issue(&user)?;

        Ok(Some(AuthResponse {
            token,
            username: user.username,
            email: user.email,
        }))
    }
}
