//! # AppSynex UI
//!
//! UI-side authorization for the AppSynex dashboard. Every decision here goes
//! through the same evaluator as the server's route enforcer.
//!
//! - [`guard`]: `PermissionGuard` and the common convenience guards
//! - [`navigation`]: The sidebar tree filtered by guards

pub mod guard;
pub mod navigation;

pub use guard::{
    PermissionGuard, Rendered, admin_only, can_create_samples, can_delete_samples,
    can_manage_users, can_view_samples, super_admin_only,
};
pub use navigation::{NavItem, NavSection, sidebar, visible_navigation};
