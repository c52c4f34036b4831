//! Known roles, modules, actions, and permission constants.
//!
//! This module is the single place where the dashboard's identifier strings
//! are spelled out. UI guards, route rules, and the role table all refer to
//! these constants instead of string literals.
//!
//! # Example
//!
//! ```ignore
//! use appsynex_core::permissions::{self, roles};
//! use appsynex_core::evaluator::is_allowed;
//!
//! let held = [roles::STAFF].into_iter().collect();
//! assert!(is_allowed(&held, &permissions::SAMPLE_CREATE));
//! ```

use crate::identifiers::{Action, Module, Permission, Role};

// =============================================================================
// Roles
// =============================================================================

pub mod roles {
    use super::Role;

    /// Implicitly granted every permission
    pub const SUPER_ADMIN: Role = Role::from_static("SUPER_ADMIN");
    /// Everything except restricted system operations
    pub const ADMIN: Role = Role::from_static("ADMIN");
    pub const MANAGER: Role = Role::from_static("MANAGER");
    pub const STAFF: Role = Role::from_static("STAFF");

    /// Known roles, highest first.
    pub const RANKED: [Role; 4] = [SUPER_ADMIN, ADMIN, MANAGER, STAFF];
}

// =============================================================================
// Modules
// =============================================================================

pub mod modules {
    use super::Module;

    pub const SAMPLE: Module = Module::from_static("SAMPLE");
    pub const USER: Module = Module::from_static("USER");
    pub const PRODUCT_CATEGORY: Module = Module::from_static("PRODUCT_CATEGORY");
    pub const CUSTOMER: Module = Module::from_static("CUSTOMER");
    pub const ORDER: Module = Module::from_static("ORDER");
    pub const WAREHOUSE: Module = Module::from_static("WAREHOUSE");
    pub const REPORT: Module = Module::from_static("REPORT");
    pub const SYSTEM: Module = Module::from_static("SYSTEM");
    pub const ROLE: Module = Module::from_static("ROLE");

    pub const ALL: [Module; 9] = [
        SAMPLE,
        USER,
        PRODUCT_CATEGORY,
        CUSTOMER,
        ORDER,
        WAREHOUSE,
        REPORT,
        SYSTEM,
        ROLE,
    ];
}

// =============================================================================
// Actions
// =============================================================================

pub mod actions {
    use super::Action;

    pub const VIEW: Action = Action::from_static("VIEW");
    pub const CREATE: Action = Action::from_static("CREATE");
    pub const UPDATE: Action = Action::from_static("UPDATE");
    pub const DELETE: Action = Action::from_static("DELETE");
    pub const TRACK: Action = Action::from_static("TRACK");
    pub const ASSIGN_ROLES: Action = Action::from_static("ASSIGN_ROLES");
    pub const BACKUP: Action = Action::from_static("BACKUP");
    pub const RESTORE: Action = Action::from_static("RESTORE");
    pub const MANAGE_SETTINGS: Action = Action::from_static("MANAGE_SETTINGS");

    pub const ALL: [Action; 9] = [
        VIEW,
        CREATE,
        UPDATE,
        DELETE,
        TRACK,
        ASSIGN_ROLES,
        BACKUP,
        RESTORE,
        MANAGE_SETTINGS,
    ];
}

// =============================================================================
// Sample permissions
// =============================================================================

/// Permission to list and open samples
pub const SAMPLE_VIEW: Permission = Permission::new(modules::SAMPLE, actions::VIEW);
/// Permission to create samples
pub const SAMPLE_CREATE: Permission = Permission::new(modules::SAMPLE, actions::CREATE);
/// Permission to edit samples
pub const SAMPLE_UPDATE: Permission = Permission::new(modules::SAMPLE, actions::UPDATE);
/// Permission to delete samples
pub const SAMPLE_DELETE: Permission = Permission::new(modules::SAMPLE, actions::DELETE);
/// Permission to track sample movement
pub const SAMPLE_TRACK: Permission = Permission::new(modules::SAMPLE, actions::TRACK);

// =============================================================================
// Category permissions
// =============================================================================

pub const PRODUCT_CATEGORY_VIEW: Permission =
    Permission::new(modules::PRODUCT_CATEGORY, actions::VIEW);
pub const PRODUCT_CATEGORY_CREATE: Permission =
    Permission::new(modules::PRODUCT_CATEGORY, actions::CREATE);
pub const PRODUCT_CATEGORY_UPDATE: Permission =
    Permission::new(modules::PRODUCT_CATEGORY, actions::UPDATE);
pub const PRODUCT_CATEGORY_DELETE: Permission =
    Permission::new(modules::PRODUCT_CATEGORY, actions::DELETE);

// =============================================================================
// User permissions
// =============================================================================

pub const USER_VIEW: Permission = Permission::new(modules::USER, actions::VIEW);
pub const USER_CREATE: Permission = Permission::new(modules::USER, actions::CREATE);
pub const USER_UPDATE: Permission = Permission::new(modules::USER, actions::UPDATE);
pub const USER_DELETE: Permission = Permission::new(modules::USER, actions::DELETE);
/// Permission to change the roles assigned to a user
pub const USER_ASSIGN_ROLES: Permission = Permission::new(modules::USER, actions::ASSIGN_ROLES);

// =============================================================================
// Customer, order, warehouse, and report permissions
// =============================================================================

pub const CUSTOMER_VIEW: Permission = Permission::new(modules::CUSTOMER, actions::VIEW);
pub const CUSTOMER_CREATE: Permission = Permission::new(modules::CUSTOMER, actions::CREATE);
pub const CUSTOMER_UPDATE: Permission = Permission::new(modules::CUSTOMER, actions::UPDATE);

pub const ORDER_VIEW: Permission = Permission::new(modules::ORDER, actions::VIEW);
pub const ORDER_CREATE: Permission = Permission::new(modules::ORDER, actions::CREATE);
pub const ORDER_UPDATE: Permission = Permission::new(modules::ORDER, actions::UPDATE);

pub const WAREHOUSE_VIEW: Permission = Permission::new(modules::WAREHOUSE, actions::VIEW);

pub const REPORT_VIEW: Permission = Permission::new(modules::REPORT, actions::VIEW);
pub const REPORT_CREATE: Permission = Permission::new(modules::REPORT, actions::CREATE);

// =============================================================================
// System and role-management permissions
// =============================================================================

pub const SYSTEM_VIEW: Permission = Permission::new(modules::SYSTEM, actions::VIEW);
/// Restricted: only SUPER_ADMIN
pub const SYSTEM_BACKUP: Permission = Permission::new(modules::SYSTEM, actions::BACKUP);
/// Restricted: only SUPER_ADMIN
pub const SYSTEM_RESTORE: Permission = Permission::new(modules::SYSTEM, actions::RESTORE);
/// Restricted: only SUPER_ADMIN
pub const SYSTEM_MANAGE_SETTINGS: Permission =
    Permission::new(modules::SYSTEM, actions::MANAGE_SETTINGS);

pub const ROLE_VIEW: Permission = Permission::new(modules::ROLE, actions::VIEW);
