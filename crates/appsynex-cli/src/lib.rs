//! # AppSynex CLI
//!
//! Helpers behind the `appsynex-cli` binary: role decisions from the command
//! line, a printable view of the role table, and table audits.
//!
//! ## Usage
//!
//! ```ignore
//! use appsynex_cli::{Decision, decide, parse_roles};
//!
//! let roles = parse_roles(&["STAFF".to_string()]);
//! assert_eq!(decide(&roles, "SAMPLE", "DELETE"), Decision::Deny);
//! ```

use std::collections::BTreeSet;
use std::fmt;

use appsynex_core::permissions::{actions, modules, roles};
use appsynex_core::{Action, Module, Permission, Role, RoleRule, RoleSet, RoleTable, evaluate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Allow => write!(f, "ALLOW"),
            Decision::Deny => write!(f, "DENY"),
        }
    }
}

/// Role names as typed on the command line, trimmed. Blank entries are
/// dropped; case is kept, so `staff` is an unknown role.
pub fn parse_roles(values: &[String]) -> RoleSet {
    values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(|value| Role::new(value.to_string()))
        .collect()
}

pub fn decide(roles: &RoleSet, module: &str, action: &str) -> Decision {
    let module = Module::new(module.trim().to_string());
    let action = Action::new(action.trim().to_string());
    if evaluate(roles, &module, &action) {
        Decision::Allow
    } else {
        Decision::Deny
    }
}

fn case_hint<'a>(
    kind: &str,
    typed: &str,
    known: impl IntoIterator<Item = &'a str>,
) -> Option<String> {
    let typed = typed.trim();
    let known: Vec<&str> = known.into_iter().collect();
    if typed.is_empty() || known.contains(&typed) {
        return None;
    }
    known
        .into_iter()
        .find(|name| name.eq_ignore_ascii_case(typed))
        .map(|name| {
            format!("{kind} `{typed}` is unknown; names are case-sensitive, did you mean `{name}`?")
        })
}

/// Warnings for typed names that only match a known name when case is
/// ignored. The decision itself never folds case.
pub fn case_warnings(
    typed_roles: &[String],
    module: Option<&str>,
    action: Option<&str>,
) -> Vec<String> {
    let mut warnings: Vec<String> = typed_roles
        .iter()
        .filter_map(|role| case_hint("role", role, roles::RANKED.iter().map(Role::as_str)))
        .collect();
    if let Some(module) = module {
        warnings.extend(case_hint("module", module, modules::ALL.iter().map(Module::as_str)));
    }
    if let Some(action) = action {
        warnings.extend(case_hint("action", action, actions::ALL.iter().map(Action::as_str)));
    }
    warnings
}

fn join_permissions(set: &BTreeSet<Permission>) -> String {
    set.iter()
        .map(Permission::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn describe_rule(rule: &RoleRule) -> String {
    match rule {
        RoleRule::AllowAll => "all permissions".to_string(),
        RoleRule::AllowAllExcept(denied) => {
            format!("all permissions except {}", join_permissions(denied))
        }
        RoleRule::Allow(allowed) if allowed.is_empty() => "no permissions".to_string(),
        RoleRule::Allow(allowed) => join_permissions(allowed),
    }
}

/// One line per role: `ROLE: <rule>`.
pub fn render_table(table: &RoleTable) -> String {
    table
        .roles()
        .map(|role| format!("{role}: {}", describe_rule(table.lookup(role))))
        .collect::<Vec<_>>()
        .join("\n")
}
