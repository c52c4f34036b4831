//! Claims inside the session token.
//!
//! The browser keeps the signed token in the `appsynex_token` cookie and the
//! server decodes it on every request. Roles travel inside the signed
//! payload, so editing them breaks the signature.

use appsynex_core::Role;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub username: String,
    pub email: String,
    /// Role names as assigned at login, unrecognized ones included.
    pub roles: Vec<Role>,
    /// Unix seconds.
    pub exp: usize,
    /// Unix seconds.
    pub iat: usize,
}

impl Claims {
    /// Claims issued at `issued_at` that stay valid for `ttl_secs`.
    pub fn issue(
        user_id: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
        roles: Vec<Role>,
        issued_at: usize,
        ttl_secs: usize,
    ) -> Self {
        Self {
            sub: user_id.into(),
            username: username.into(),
            email: email.into(),
            roles,
            exp: issued_at + ttl_secs,
            iat: issued_at,
        }
    }
}
