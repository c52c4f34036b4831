//! Per-route access requirements.
//!
//! A rule applies to its path and everything below it; the most specific
//! (longest) matching prefix wins. Protected paths with no rule only require
//! a session.

use std::sync::OnceLock;

use appsynex_auth::AuthState;
use appsynex_core::permissions::{self, roles};
use appsynex_core::{AccessState, DenyReason, Permission, Role, evaluate_all, has_any_role};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRule {
    pub prefix: &'static str,
    /// Session must hold at least one of these, when non-empty.
    pub roles: Vec<Role>,
    /// Every one of these must be granted.
    pub permissions: Vec<Permission>,
}

impl RouteRule {
    pub fn permission(prefix: &'static str, permission: Permission) -> Self {
        Self {
            prefix,
            roles: Vec::new(),
            permissions: vec![permission],
        }
    }

    pub fn with_roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.roles = roles.into_iter().collect();
        self
    }

    pub fn matches(&self, path: &str) -> bool {
        path == self.prefix
            || path
                .strip_prefix(self.prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

pub fn route_rules() -> &'static [RouteRule] {
    static RULES: OnceLock<Vec<RouteRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            RouteRule::permission("/dashboard/sample", permissions::SAMPLE_VIEW),
            RouteRule::permission("/dashboard/sample/new", permissions::SAMPLE_CREATE),
            RouteRule::permission("/dashboard/categories", permissions::PRODUCT_CATEGORY_VIEW),
            RouteRule::permission(
                "/dashboard/categories/new",
                permissions::PRODUCT_CATEGORY_CREATE,
            ),
            RouteRule::permission("/dashboard/users", permissions::USER_VIEW),
            RouteRule::permission("/dashboard/users/new", permissions::USER_CREATE),
            RouteRule::permission("/dashboard/settings", permissions::SYSTEM_VIEW)
                .with_roles([roles::SUPER_ADMIN, roles::ADMIN]),
            RouteRule::permission("/dashboard/permissions", permissions::ROLE_VIEW),
        ]
    })
}

/// The most specific rule covering `path`.
pub fn rule_for(path: &str) -> Option<&'static RouteRule> {
    route_rules()
        .iter()
        .filter(|rule| rule.matches(path))
        .max_by_key(|rule| rule.prefix.len())
}

/// Decide a rule for a resolved session: role list first, then every
/// permission through the evaluator.
pub fn check_rule(rule: Option<&RouteRule>, auth: &AuthState) -> AccessState {
    let held = match auth {
        AuthState::Loading => return AccessState::Authenticating,
        AuthState::Unauthenticated => return AccessState::Denied(DenyReason::Unauthenticated),
        AuthState::Authenticated(session) => &session.roles,
    };

    let Some(rule) = rule else {
        return AccessState::Granted;
    };

    if !rule.roles.is_empty() && !has_any_role(held, &rule.roles) {
        return AccessState::Denied(DenyReason::InsufficientRole);
    }

    if !rule.permissions.is_empty() && !evaluate_all(held, &rule.permissions) {
        return AccessState::Denied(DenyReason::InsufficientPermissions);
    }

    AccessState::Granted
}
