//! Access-check state shared by the UI guard and the route enforcer.
//!
//! ```text
//! Unchecked -> Authenticating -> Denied(reason) | Granted
//! ```
//!
//! `Authenticating` is the window in which the session is still resolving.
//! It is its own state: it must render a loading indicator (UI) or block
//! (server), and never counts as granted.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// No valid session.
    Unauthenticated,
    /// Valid session, none of the required roles.
    InsufficientRole,
    /// Valid session, the role table does not grant the permission.
    InsufficientPermissions,
}

impl DenyReason {
    /// Error code carried on the sign-in redirect.
    pub fn code(&self) -> &'static str {
        match self {
            DenyReason::Unauthenticated => "unauthenticated",
            DenyReason::InsufficientRole => "insufficient_role",
            DenyReason::InsufficientPermissions => "insufficient_permissions",
        }
    }
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum AccessState {
    #[default]
    Unchecked,
    Authenticating,
    Denied(DenyReason),
    Granted,
}

impl AccessState {
    /// Only `Granted` lets protected content through.
    pub fn is_granted(&self) -> bool {
        matches!(self, AccessState::Granted)
    }

    /// Whether the check has reached `Denied` or `Granted`.
    pub fn is_settled(&self) -> bool {
        matches!(self, AccessState::Denied(_) | AccessState::Granted)
    }

    pub fn deny_reason(&self) -> Option<DenyReason> {
        match self {
            AccessState::Denied(reason) => Some(*reason),
            _ => None,
        }
    }

    /// Label used for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            AccessState::Unchecked => "unchecked",
            AccessState::Authenticating => "authenticating",
            AccessState::Denied(_) => "denied",
            AccessState::Granted => "granted",
        }
    }
}
