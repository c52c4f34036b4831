//! The role-permission table.
//!
//! Every role maps to a [`RoleRule`]. Most roles enumerate what they may do
//! (`Allow`); `ADMIN` is the one role expressed as a deny-list inside an
//! allow-all, and `SUPER_ADMIN` grants everything. Adding a role means adding
//! a table entry, never a new evaluator branch.
//!
//! The table is compiled in and immutable; [`RoleTable::builtin`] hands out a
//! process-wide instance built on first use.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::OnceLock;

use crate::identifiers::{Action, Module, Permission, Role};
use crate::permissions::{self, roles};

/// What a single role grants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleRule {
    /// Grants every `(module, action)`, including unknown ones.
    AllowAll,
    /// Grants everything except the listed permissions.
    AllowAllExcept(BTreeSet<Permission>),
    /// Grants exactly the listed permissions.
    Allow(BTreeSet<Permission>),
}

static DENY_ALL: RoleRule = RoleRule::Allow(BTreeSet::new());

impl RoleRule {
    pub fn grants(&self, module: &Module, action: &Action) -> bool {
        match self {
            RoleRule::AllowAll => true,
            RoleRule::AllowAllExcept(denied) => !denied.iter().any(|p| p.matches(module, action)),
            RoleRule::Allow(allowed) => allowed.iter().any(|p| p.matches(module, action)),
        }
    }

    pub fn grants_permission(&self, permission: &Permission) -> bool {
        self.grants(&permission.module, &permission.action)
    }
}

/// Total mapping from role to rule. Unknown roles resolve to an empty allow-list.
#[derive(Debug, Clone)]
pub struct RoleTable {
    rules: BTreeMap<Role, RoleRule>,
}

/// A permission enumerated by a lower tier that the tier directly above it
/// does not grant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyFinding {
    pub higher: Role,
    pub lower: Role,
    pub permission: Permission,
}

impl fmt::Display for HierarchyFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} grants {} but {} does not",
            self.lower, self.permission, self.higher
        )
    }
}

/// Actions an `ADMIN` may never perform on the `SYSTEM` module.
pub fn admin_restrictions() -> BTreeSet<Permission> {
    BTreeSet::from([
        permissions::SYSTEM_BACKUP,
        permissions::SYSTEM_RESTORE,
        permissions::SYSTEM_MANAGE_SETTINGS,
    ])
}

/// Baseline tier.
pub fn staff_permissions() -> BTreeSet<Permission> {
    BTreeSet::from([
        permissions::SAMPLE_VIEW,
        permissions::SAMPLE_CREATE,
        permissions::SAMPLE_UPDATE,
        permissions::PRODUCT_CATEGORY_VIEW,
        permissions::CUSTOMER_VIEW,
        permissions::ORDER_VIEW,
        permissions::WAREHOUSE_VIEW,
        permissions::REPORT_VIEW,
    ])
}

/// What a manager may do on top of the staff tier.
pub fn manager_extra_permissions() -> BTreeSet<Permission> {
    BTreeSet::from([
        permissions::SAMPLE_TRACK,
        permissions::USER_VIEW,
        permissions::CUSTOMER_CREATE,
        permissions::CUSTOMER_UPDATE,
        permissions::ORDER_CREATE,
        permissions::ORDER_UPDATE,
        permissions::REPORT_CREATE,
    ])
}

impl RoleTable {
    pub fn new(rules: impl IntoIterator<Item = (Role, RoleRule)>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// The dashboard's compiled-in table.
    pub fn builtin() -> &'static RoleTable {
        static TABLE: OnceLock<RoleTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            let staff = staff_permissions();
            let manager = staff.union(&manager_extra_permissions()).cloned().collect();

            let table = RoleTable::new([
                (roles::SUPER_ADMIN, RoleRule::AllowAll),
                (roles::ADMIN, RoleRule::AllowAllExcept(admin_restrictions())),
                (roles::MANAGER, RoleRule::Allow(manager)),
                (roles::STAFF, RoleRule::Allow(staff)),
            ]);
            tracing::debug!(roles = table.rules.len(), "Built-in role table loaded");
            table
        })
    }

    /// Rule for `role`; an unrecognized role grants nothing.
    pub fn lookup(&self, role: &Role) -> &RoleRule {
        self.rules.get(role).unwrap_or(&DENY_ALL)
    }

    /// The enumerated permissions of an allow-list role. Empty for unknown
    /// roles and for roles not expressed as an allow-list.
    pub fn permissions_of(&self, role: &Role) -> BTreeSet<Permission> {
        match self.lookup(role) {
            RoleRule::Allow(allowed) => allowed.clone(),
            _ => BTreeSet::new(),
        }
    }

    pub fn roles(&self) -> impl Iterator<Item = &Role> {
        self.rules.keys()
    }

    pub fn is_known(&self, role: &Role) -> bool {
        self.rules.contains_key(role)
    }

    /// Check that each known tier grants everything the tier below it
    /// enumerates. Only allow-list tiers can be enumerated, so a lower tier
    /// expressed any other way is not compared.
    pub fn hierarchy_findings(&self) -> Vec<HierarchyFinding> {
        let ranked: Vec<&Role> = roles::RANKED
            .iter()
            .filter_map(|role| self.rules.get_key_value(role).map(|(k, _)| k))
            .collect();

        let mut findings = Vec::new();
        for pair in ranked.windows(2) {
            let (higher, lower) = (pair[0], pair[1]);
            let RoleRule::Allow(lower_permissions) = self.lookup(lower) else {
                continue;
            };
            let higher_rule = self.lookup(higher);
            for permission in lower_permissions {
                if !higher_rule.grants_permission(permission) {
                    findings.push(HierarchyFinding {
                        higher: higher.clone(),
                        lower: lower.clone(),
                        permission: permission.clone(),
                    });
                }
            }
        }
        findings
    }
}
