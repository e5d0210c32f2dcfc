use serde::{Deserialize, Serialize};

/// Successful register/login response: a signed bearer token plus the
/// identity it was issued for. The password hash never appears here.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub username: String,
    pub email: String,
}
