//! Server-side session accessor.
//!
//! The server resolves the session on every request from the persisted
//! credential, independently of anything the browser holds in memory. The
//! signed token is read from the session cookie; API clients may send it as
//! `Authorization: Bearer <token>` instead.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use appsynex_auth::{AuthState, Session, verify_token};
use appsynex_core::AppError;

use crate::metrics::track_session_rejected;
use crate::state::AppState;

/// The raw session token. A non-empty session cookie takes priority; an
/// empty one (a cleared cookie) falls through to the bearer header.
pub fn session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(cookie_name).filter(|c| !c.value().trim().is_empty()) {
        return Some(cookie.value().to_string());
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

/// Resolve the caller's session. Missing, invalid, or expired credentials
/// all resolve to `Unauthenticated`; this never yields `Loading`.
pub fn resolve_session(headers: &HeaderMap, state: &AppState) -> AuthState {
    let Some(token) = session_token(headers, &state.auth_routes.session_cookie) else {
        return AuthState::Unauthenticated;
    };

    match verify_token(&token, &state.jwt_config) {
        Ok(claims) => AuthState::Authenticated(Session::from_claims(claims)),
        Err(err) => {
            debug!(error = %err.message(), "Session token rejected");
            track_session_rejected();
            AuthState::Unauthenticated
        }
    }
}

/// Extractor for the current user's session.
///
/// Uses the session the route enforcer attached to the request when there
/// is one, and resolves it from the headers otherwise.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Session);

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(session) = parts.extensions.get::<Session>() {
            return Ok(CurrentSession(session.clone()));
        }

        match resolve_session(&parts.headers, state) {
            AuthState::Authenticated(session) => Ok(CurrentSession(session)),
            _ => Err(AppError::unauthorized("Authentication required")),
        }
    }
}
