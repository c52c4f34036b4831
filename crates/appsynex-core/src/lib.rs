//! # AppSynex Core
//!
//! The authorization core of the AppSynex dashboard, shared by the UI guard
//! and the server route enforcer so both decide from the same table.
//!
//! - [`identifiers`]: `Role`, `Module`, `Action`, and `Permission` types
//! - [`permissions`]: Known identifier constants
//! - [`rules`]: The role-permission table and its hierarchy audit
//! - [`evaluator`]: The permission evaluator
//! - [`access`]: Access-check state machine shared by both adapters
//! - [`errors`]: Application error type with HTTP response conversion
//!
//! # Example
//!
//! ```ignore
//! use appsynex_core::{evaluate, permissions::{actions, modules, roles}, RoleSet};
//!
//! let held: RoleSet = [roles::MANAGER].into_iter().collect();
//! assert!(evaluate(&held, &modules::SAMPLE, &actions::VIEW));
//! assert!(!evaluate(&held, &modules::SAMPLE, &actions::DELETE));
//! ```

pub mod access;
pub mod errors;
pub mod evaluator;
pub mod identifiers;
pub mod permissions;
pub mod rules;

// Re-export commonly used types at crate root
pub use access::{AccessState, DenyReason};
pub use errors::AppError;
pub use evaluator::{
    RoleSet, evaluate, evaluate_all, has_any_role, highest_role, is_allowed, role_rank,
};
pub use identifiers::{Action, Module, Permission, Role};
pub use rules::{HierarchyFinding, RoleRule, RoleTable};
