//! The permission guard: decides whether a UI subtree renders.
//!
//! A guard names a required `(module, action)` and, optionally, an explicit
//! list of roles. The two are separate gating modes:
//!
//! - with a non-empty role list, content renders iff the session holds one
//!   of the listed roles and the role table is not consulted;
//! - otherwise the permission evaluator decides.
//!
//! While the session is still loading the guard reports
//! [`AccessState::Authenticating`] and renders neither content nor fallback.
//!
//! # Example
//!
//! ```ignore
//! use appsynex_ui::guard::{PermissionGuard, can_create_samples};
//!
//! let button = can_create_samples()
//!     .render(&auth_state, || "New sample", None)
//!     .into_option();
//! ```

use appsynex_auth::AuthState;
use appsynex_core::permissions::{self, roles};
use appsynex_core::{
    AccessState, Action, DenyReason, Module, Permission, Role, evaluate, has_any_role,
};
use serde::Serialize;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionGuard {
    pub permission: Permission,
    /// When non-empty, replaces the permission check with a role check.
    pub roles: Vec<Role>,
}

/// Outcome of rendering through a guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered<T> {
    /// Session still resolving; show a loading indicator.
    Loading,
    Content(T),
    /// Denied; `None` renders nothing.
    Fallback(Option<T>),
}

impl<T> Rendered<T> {
    pub fn is_content(&self) -> bool {
        matches!(self, Rendered::Content(_))
    }

    /// Whatever should be shown, if anything.
    pub fn into_option(self) -> Option<T> {
        match self {
            Rendered::Content(content) => Some(content),
            Rendered::Fallback(fallback) => fallback,
            Rendered::Loading => None,
        }
    }
}

impl PermissionGuard {
    pub fn new(permission: Permission) -> Self {
        Self {
            permission,
            roles: Vec::new(),
        }
    }

    pub fn for_action(module: Module, action: Action) -> Self {
        Self::new(Permission::new(module, action))
    }

    pub fn with_roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.roles = roles.into_iter().collect();
        self
    }

    pub fn check(&self, state: &AuthState) -> AccessState {
        let session = match state {
            AuthState::Loading => return AccessState::Authenticating,
            AuthState::Unauthenticated => {
                return AccessState::Denied(DenyReason::Unauthenticated);
            }
            AuthState::Authenticated(session) => session,
        };

        let outcome = if !self.roles.is_empty() {
            if has_any_role(&session.roles, &self.roles) {
                AccessState::Granted
            } else {
                AccessState::Denied(DenyReason::InsufficientRole)
            }
        } else if evaluate(
            &session.roles,
            &self.permission.module,
            &self.permission.action,
        ) {
            AccessState::Granted
        } else {
            AccessState::Denied(DenyReason::InsufficientPermissions)
        };

        trace!(
            permission = %self.permission,
            outcome = outcome.label(),
            "Guard evaluated"
        );
        outcome
    }

    pub fn allows(&self, state: &AuthState) -> bool {
        self.check(state).is_granted()
    }

    /// Build `content` only when the guard grants access.
    pub fn render<T>(
        &self,
        state: &AuthState,
        content: impl FnOnce() -> T,
        fallback: Option<T>,
    ) -> Rendered<T> {
        match self.check(state) {
            AccessState::Granted => Rendered::Content(content()),
            AccessState::Unchecked | AccessState::Authenticating => Rendered::Loading,
            AccessState::Denied(_) => Rendered::Fallback(fallback),
        }
    }
}

/// Administrators only, by role.
pub fn admin_only() -> PermissionGuard {
    PermissionGuard::new(permissions::SYSTEM_VIEW).with_roles([roles::SUPER_ADMIN, roles::ADMIN])
}

/// Super administrators only, by role.
pub fn super_admin_only() -> PermissionGuard {
    PermissionGuard::new(permissions::SYSTEM_MANAGE_SETTINGS).with_roles([roles::SUPER_ADMIN])
}

pub fn can_view_samples() -> PermissionGuard {
    PermissionGuard::new(permissions::SAMPLE_VIEW)
}

pub fn can_create_samples() -> PermissionGuard {
    PermissionGuard::new(permissions::SAMPLE_CREATE)
}

pub fn can_delete_samples() -> PermissionGuard {
    PermissionGuard::new(permissions::SAMPLE_DELETE)
}

pub fn can_manage_users() -> PermissionGuard {
    PermissionGuard::new(permissions::USER_VIEW)
}

#[cfg(test)]
mod tests {
    use super::*;
    use appsynex_auth::Session;

    fn signed_in(held: &[Role]) -> AuthState {
        AuthState::Authenticated(Session {
            user_id: "1".to_string(),
            username: "tester".to_string(),
            email: "tester@example.com".to_string(),
            roles: held.iter().cloned().collect(),
        })
    }

    #[test]
    fn test_loading_is_never_granted() {
        let guard = can_view_samples();
        assert_eq!(guard.check(&AuthState::Loading), AccessState::Authenticating);
        assert_eq!(
            guard.render(&AuthState::Loading, || "content", Some("fallback")),
            Rendered::Loading
        );
    }

    #[test]
    fn test_unauthenticated_renders_fallback() {
        let guard = can_view_samples();
        assert_eq!(
            guard.check(&AuthState::Unauthenticated),
            AccessState::Denied(DenyReason::Unauthenticated)
        );
        assert_eq!(
            guard.render(&AuthState::Unauthenticated, || "content", None),
            Rendered::Fallback(None)
        );
    }

    #[test]
    fn test_permission_mode_uses_role_table() {
        let staff = signed_in(&[roles::STAFF]);
        assert!(can_create_samples().allows(&staff));
        assert!(!can_delete_samples().allows(&staff));
        assert!(!can_manage_users().allows(&staff));
        assert_eq!(
            can_delete_samples().check(&staff),
            AccessState::Denied(DenyReason::InsufficientPermissions)
        );
    }

    #[test]
    fn test_role_mode_ignores_role_table() {
        // MANAGER is granted SAMPLE:VIEW by the table, but the role list wins.
        let manager = signed_in(&[roles::MANAGER]);
        let guard = PermissionGuard::new(permissions::SAMPLE_VIEW).with_roles([roles::ADMIN]);
        assert_eq!(
            guard.check(&manager),
            AccessState::Denied(DenyReason::InsufficientRole)
        );

        // ADMIN is denied SYSTEM:MANAGE_SETTINGS by the table, but holds the role.
        let admin = signed_in(&[roles::ADMIN]);
        let guard =
            PermissionGuard::new(permissions::SYSTEM_MANAGE_SETTINGS).with_roles([roles::ADMIN]);
        assert!(guard.allows(&admin));
    }

    #[test]
    fn test_admin_and_super_admin_only() {
        assert!(admin_only().allows(&signed_in(&[roles::ADMIN])));
        assert!(admin_only().allows(&signed_in(&[roles::SUPER_ADMIN])));
        assert!(!admin_only().allows(&signed_in(&[roles::MANAGER])));

        assert!(super_admin_only().allows(&signed_in(&[roles::SUPER_ADMIN])));
        assert!(!super_admin_only().allows(&signed_in(&[roles::ADMIN])));
    }

    #[test]
    fn test_render_builds_content_only_when_granted() {
        let manager = signed_in(&[roles::MANAGER]);
        let mut built = false;
        let rendered = can_delete_samples().render(
            &manager,
            || {
                built = true;
                "delete"
            },
            Some("no access"),
        );
        assert!(!built);
        assert_eq!(rendered.into_option(), Some("no access"));

        let rendered = can_view_samples().render(&manager, || "table", None);
        assert!(rendered.is_content());
    }

    #[test]
    fn test_unrecognized_role_sees_nothing() {
        let ghost = signed_in(&[Role::new("GHOST")]);
        assert!(!can_view_samples().allows(&ghost));
        assert!(!admin_only().allows(&ghost));
    }
}
