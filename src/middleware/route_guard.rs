//! Route enforcer.
//!
//! Runs in front of every page and API route, before any handler touches
//! protected data:
//!
//! 1. a signed-in user visiting an auth route (sign-in) goes to the dashboard;
//! 2. public routes pass;
//! 3. otherwise the route's [`RouteRule`] is checked against the session
//!    resolved from the request's own credential.
//!
//! Page routes are denied with a redirect to the sign-in page, carrying
//! `callbackUrl` when there is no session and `error=<code>` when the session
//! lacks a role or permission. API routes are denied with a JSON 401/403.
//!
//! # Usage
//!
//! ```rust,ignore
//! use axum::{Router, middleware};
//! use crate::middleware::route_guard::enforce_routes;
//!
//! let app = Router::new()
//!     .nest("/dashboard", init_pages_router())
//!     .with_state(state.clone())
//!     .layer(middleware::from_fn_with_state(state.clone(), enforce_routes));
//! ```

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::{debug, warn};

use appsynex_auth::AuthState;
use appsynex_config::AuthRoutesConfig;
use appsynex_core::{AccessState, AppError, DenyReason};

use crate::metrics::track_access_decision;
use crate::middleware::route_rules::{RouteRule, check_rule, rule_for};
use crate::middleware::session::resolve_session;
use crate::state::AppState;

/// What the enforcer does with a request.
#[derive(Debug)]
pub enum Enforcement {
    Continue,
    Redirect(String),
    Reject(AppError),
}

/// Sign-in location for a denied page request.
pub fn sign_in_location(config: &AuthRoutesConfig, path: &str, reason: DenyReason) -> String {
    match reason {
        DenyReason::Unauthenticated => format!(
            "{}?callbackUrl={}",
            config.sign_in_path,
            urlencoding::encode(path)
        ),
        other => format!("{}?error={}", config.sign_in_path, other.code()),
    }
}

/// Decide a request. `rule` is the route's requirement, if any.
pub fn enforce(
    path: &str,
    auth: &AuthState,
    config: &AuthRoutesConfig,
    rule: Option<&RouteRule>,
) -> (AccessState, Enforcement) {
    if auth.is_authenticated() && config.is_auth_route(path) {
        return (
            AccessState::Granted,
            Enforcement::Redirect(config.dashboard_path.clone()),
        );
    }

    if config.is_public(path) {
        return (AccessState::Granted, Enforcement::Continue);
    }

    let access = check_rule(rule, auth);
    let reason = match access {
        AccessState::Granted => return (access, Enforcement::Continue),
        AccessState::Denied(reason) => reason,
        // Unresolved sessions never pass
        AccessState::Unchecked | AccessState::Authenticating => DenyReason::Unauthenticated,
    };

    let enforcement = if config.is_api(path) {
        match reason {
            DenyReason::Unauthenticated => {
                Enforcement::Reject(AppError::unauthorized("Authentication required"))
            }
            other => Enforcement::Reject(AppError::forbidden(format!(
                "Access denied: {}",
                other.code()
            ))),
        }
    } else {
        Enforcement::Redirect(sign_in_location(config, path, reason))
    };

    (AccessState::Denied(reason), enforcement)
}

/// Axum middleware applying [`enforce`] with the static route rules.
pub async fn enforce_routes(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_owned();
    let auth = resolve_session(req.headers(), &state);

    let (access, enforcement) = enforce(&path, &auth, &state.auth_routes, rule_for(&path));
    track_access_decision("route", &access);

    match enforcement {
        Enforcement::Continue => {
            if let AuthState::Authenticated(session) = auth {
                req.extensions_mut().insert(session);
            }
            next.run(req).await
        }
        Enforcement::Redirect(location) => {
            if let Some(reason) = access.deny_reason() {
                log_denial(&path, reason, &auth);
            }
            Redirect::temporary(&location).into_response()
        }
        Enforcement::Reject(err) => {
            if let Some(reason) = access.deny_reason() {
                log_denial(&path, reason, &auth);
            }
            err.into_response()
        }
    }
}

fn log_denial(path: &str, reason: DenyReason, auth: &AuthState) {
    match auth.session() {
        Some(session) => warn!(
            path = %path,
            reason = %reason,
            username = %session.username,
            roles = ?session.roles,
            "Route access denied"
        ),
        None => debug!(path = %path, "No session for protected route"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appsynex_auth::Session;
    use appsynex_core::Role;
    use appsynex_core::permissions::{self, roles};
    use axum::http::StatusCode;

    fn signed_in(held: &[Role]) -> AuthState {
        AuthState::Authenticated(Session {
            user_id: "1".to_string(),
            username: "tester".to_string(),
            email: "tester@example.com".to_string(),
            roles: held.iter().cloned().collect(),
        })
    }

    #[test]
    fn test_sign_in_location_encodes_callback() {
        let config = AuthRoutesConfig::default();
        assert_eq!(
            sign_in_location(&config, "/dashboard/sample/7", DenyReason::Unauthenticated),
            "/auth/sign-in?callbackUrl=%2Fdashboard%2Fsample%2F7"
        );
        assert_eq!(
            sign_in_location(&config, "/dashboard/users", DenyReason::InsufficientPermissions),
            "/auth/sign-in?error=insufficient_permissions"
        );
    }

    #[test]
    fn test_public_route_continues_without_session() {
        let config = AuthRoutesConfig::default();
        let (access, enforcement) = enforce("/about", &AuthState::Unauthenticated, &config, None);
        assert!(access.is_granted());
        assert!(matches!(enforcement, Enforcement::Continue));
    }

    #[test]
    fn test_signed_in_user_leaves_sign_in_page() {
        let config = AuthRoutesConfig::default();
        let (_, enforcement) = enforce(
            "/auth/sign-in",
            &signed_in(&[roles::STAFF]),
            &config,
            None,
        );
        assert!(matches!(enforcement, Enforcement::Redirect(ref to) if to == "/dashboard"));
    }

    #[test]
    fn test_loading_session_is_never_granted() {
        let config = AuthRoutesConfig::default();
        let (access, enforcement) = enforce("/dashboard", &AuthState::Loading, &config, None);
        assert_eq!(access, AccessState::Denied(DenyReason::Unauthenticated));
        assert!(matches!(enforcement, Enforcement::Redirect(_)));
    }

    #[test]
    fn test_api_denials_are_json_errors() {
        let config = AuthRoutesConfig::default();
        let rule = RouteRule::permission("/api/reports", permissions::REPORT_CREATE);

        let (_, enforcement) =
            enforce("/api/reports", &AuthState::Unauthenticated, &config, Some(&rule));
        match enforcement {
            Enforcement::Reject(err) => assert_eq!(err.status, StatusCode::UNAUTHORIZED),
            other => panic!("expected rejection, got {other:?}"),
        }

        let (access, enforcement) =
            enforce("/api/reports", &signed_in(&[roles::STAFF]), &config, Some(&rule));
        assert_eq!(
            access,
            AccessState::Denied(DenyReason::InsufficientPermissions)
        );
        match enforcement {
            Enforcement::Reject(err) => assert_eq!(err.status, StatusCode::FORBIDDEN),
            other => panic!("expected rejection, got {other:?}"),
        }

        let (access, _) =
            enforce("/api/reports", &signed_in(&[roles::MANAGER]), &config, Some(&rule));
        assert!(access.is_granted());
    }

    #[test]
    fn test_insufficient_role_redirect() {
        let config = AuthRoutesConfig::default();
        let path = "/dashboard/settings";
        let (_, enforcement) = enforce(
            path,
            &signed_in(&[roles::MANAGER]),
            &config,
            rule_for(path),
        );
        assert!(matches!(
            enforcement,
            Enforcement::Redirect(ref to) if to == "/auth/sign-in?error=insufficient_role"
        ));
    }
}
