//! The permission evaluator.
//!
//! One decision function shared by every call site: the UI guard and the
//! server route enforcer both end up in [`RoleTable::evaluate`].
//!
//! Resolution for a role set:
//!
//! 1. an empty set grants nothing;
//! 2. `SUPER_ADMIN` grants everything;
//! 3. `ADMIN` grants everything except `SYSTEM` backup, restore, and
//!    settings management;
//! 4. any other roles grant the union of their allow-lists;
//! 5. unrecognized roles grant nothing.
//!
//! Steps 2-4 fall out of the per-role [`RoleRule`](crate::rules::RoleRule):
//! a permission is granted iff at least one held role's rule grants it.
//! Holding more roles can only widen access.

use std::collections::BTreeSet;

use crate::identifiers::{Action, Module, Permission, Role};
use crate::permissions::roles;
use crate::rules::RoleTable;

/// The roles held by one user.
pub type RoleSet = BTreeSet<Role>;

impl RoleTable {
    /// Whether `roles` may perform `action` on `module`.
    pub fn evaluate(&self, roles: &RoleSet, module: &Module, action: &Action) -> bool {
        if roles.is_empty() {
            return false;
        }
        roles
            .iter()
            .any(|role| self.lookup(role).grants(module, action))
    }
}

/// Evaluate against the built-in role table.
pub fn evaluate(roles: &RoleSet, module: &Module, action: &Action) -> bool {
    RoleTable::builtin().evaluate(roles, module, action)
}

pub fn is_allowed(roles: &RoleSet, permission: &Permission) -> bool {
    evaluate(roles, &permission.module, &permission.action)
}

/// Whether every listed permission is granted. An empty list only requires
/// that the user holds some role.
pub fn evaluate_all(roles: &RoleSet, permissions: &[Permission]) -> bool {
    !roles.is_empty() && permissions.iter().all(|p| is_allowed(roles, p))
}

/// Whether `roles` holds at least one of `required`.
pub fn has_any_role(roles: &RoleSet, required: &[Role]) -> bool {
    required.iter().any(|role| roles.contains(role))
}

/// Rank of a known role (higher number = more privileges).
pub fn role_rank(role: &Role) -> Option<u8> {
    roles::RANKED
        .iter()
        .position(|known| known == role)
        .map(|index| (roles::RANKED.len() - index) as u8)
}

/// The highest known role in the set, for display. Unrecognized roles never
/// win.
pub fn highest_role(roles: &RoleSet) -> Option<Role> {
    roles
        .iter()
        .filter_map(|role| role_rank(role).map(|rank| (rank, role)))
        .max_by_key(|(rank, _)| *rank)
        .map(|(_, role)| role.clone())
}
