//! Session and session-accessor state.
//!
//! A [`Session`] is the authenticated user's identity plus role set. It is
//! built from verified claims and never mutated afterwards; a role change
//! only shows up after the next login.
//!
//! [`AuthState`] is what a session accessor exposes to the guards: still
//! loading, signed out, or signed in. Any failure while resolving the session
//! collapses to [`AuthState::Unauthenticated`].

use appsynex_config::JwtConfig;
use appsynex_core::{Role, RoleSet, highest_role};
use serde::Serialize;
use tracing::debug;

use crate::claims::Claims;
use crate::jwt::verify_token;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub roles: RoleSet,
}

impl Session {
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            username: claims.username,
            email: claims.email,
            roles: claims.roles.into_iter().collect(),
        }
    }

    pub fn has_role(&self, role: &Role) -> bool {
        self.roles.contains(role)
    }

    /// Highest known role, for display.
    pub fn highest_role(&self) -> Option<Role> {
        highest_role(&self.roles)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    /// Session data is still resolving.
    #[default]
    Loading,
    Unauthenticated,
    Authenticated(Session),
}

impl AuthState {
    /// Resolve the state from a stored token. A missing, invalid, or expired
    /// token means signed out.
    pub fn from_token(token: Option<&str>, jwt_config: &JwtConfig) -> Self {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return AuthState::Unauthenticated;
        };

        match verify_token(token, jwt_config) {
            Ok(claims) => AuthState::Authenticated(Session::from_claims(claims)),
            Err(err) => {
                debug!(error = %err.message(), "Stored session token rejected");
                AuthState::Unauthenticated
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AuthState::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthState::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn roles(&self) -> Option<&RoleSet> {
        self.session().map(|session| &session.roles)
    }
}

impl From<Session> for AuthState {
    fn from(session: Session) -> Self {
        AuthState::Authenticated(session)
    }
}

impl From<Option<Session>> for AuthState {
    fn from(session: Option<Session>) -> Self {
        session.map_or(AuthState::Unauthenticated, AuthState::Authenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::create_access_token;
    use appsynex_core::permissions::roles;

    fn config() -> JwtConfig {
        JwtConfig {
            secret: "session-test-secret-key-at-least-32-chars".to_string(),
            access_token_expiry: 3600,
        }
    }

    #[test]
    fn test_session_from_claims_dedupes_roles() {
        let claims = Claims {
            sub: "3".to_string(),
            username: "minh".to_string(),
            email: "minh@example.com".to_string(),
            roles: vec![roles::STAFF, roles::STAFF, roles::MANAGER],
            exp: 0,
            iat: 0,
        };
        let session = Session::from_claims(claims);
        assert_eq!(session.roles.len(), 2);
        assert!(session.has_role(&roles::MANAGER));
        assert_eq!(session.highest_role(), Some(roles::MANAGER));
    }

    #[test]
    fn test_default_state_is_loading() {
        let state = AuthState::default();
        assert!(state.is_loading());
        assert!(!state.is_authenticated());
        assert!(state.roles().is_none());
    }

    #[test]
    fn test_from_token_valid() {
        let config = config();
        let token =
            create_access_token("3", "minh", "minh@example.com", vec![roles::ADMIN], &config)
                .unwrap();
        let state = AuthState::from_token(Some(&token), &config);
        assert!(state.is_authenticated());
        assert!(state.roles().unwrap().contains(&roles::ADMIN));
    }

    #[test]
    fn test_from_token_fails_closed() {
        let config = config();
        assert_eq!(
            AuthState::from_token(None, &config),
            AuthState::Unauthenticated
        );
        assert_eq!(
            AuthState::from_token(Some(""), &config),
            AuthState::Unauthenticated
        );
        assert_eq!(
            AuthState::from_token(Some("not-a-jwt"), &config),
            AuthState::Unauthenticated
        );
    }
}
