//! Signing and verifying session tokens (HS256, keyed by
//! [`JwtConfig::secret`]).
//!
//! ```ignore
//! use appsynex_auth::{create_access_token, verify_token};
//! use appsynex_config::JwtConfig;
//! use appsynex_core::permissions::roles;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token("42", "linh", "linh@example.com", vec![roles::STAFF], &config)?;
//! let claims = verify_token(&token, &config)?;
//! ```

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::debug;

use appsynex_config::JwtConfig;
use appsynex_core::{AppError, Role};

use crate::claims::Claims;

fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "sub"]);
    validation
}

/// Sign a token for a user who just signed in.
pub fn create_access_token(
    user_id: &str,
    username: &str,
    email: &str,
    roles: Vec<Role>,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp().max(0) as usize;
    let ttl = jwt_config.access_token_expiry.max(0) as usize;
    encode_claims(
        &Claims::issue(user_id, username, email, roles, now, ttl),
        jwt_config,
    )
}

pub fn encode_claims(claims: &Claims, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let key = EncodingKey::from_secret(jwt_config.secret.as_bytes());
    encode(&Header::new(Algorithm::HS256), claims, &key)
        .map_err(|e| AppError::internal_error(format!("Failed to sign session token: {e}")))
}

/// Decode a token, checking signature and expiry.
///
/// # Errors
///
/// Every failure (bad signature, expired, malformed payload) is an
/// unauthorized error with the same message; the cause is only logged.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let key = DecodingKey::from_secret(jwt_config.secret.as_bytes());
    match decode::<Claims>(token, &key, &validation()) {
        Ok(data) => Ok(data.claims),
        Err(err) => {
            debug!(kind = ?err.kind(), "Session token failed verification");
            Err(AppError::unauthorized("Invalid or expired token"))
        }
    }
}
