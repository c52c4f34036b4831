//! Dashboard sidebar, filtered through permission guards.
//!
//! Items the session may not use are removed. A section disappears when its
//! own guard denies, or when it had items and none survived; sections that
//! are plain links (the overview) always stay.

use appsynex_auth::AuthState;
use appsynex_core::permissions;
use serde::Serialize;

use crate::guard::{PermissionGuard, admin_only};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub title: &'static str,
    pub url: &'static str,
    #[serde(skip)]
    pub guard: Option<PermissionGuard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavSection {
    pub title: &'static str,
    pub icon: &'static str,
    pub url: Option<&'static str>,
    #[serde(skip)]
    pub guard: Option<PermissionGuard>,
    pub items: Vec<NavItem>,
}

fn item(title: &'static str, url: &'static str, guard: PermissionGuard) -> NavItem {
    NavItem {
        title,
        url,
        guard: Some(guard),
    }
}

/// The full sidebar, before filtering.
pub fn sidebar() -> Vec<NavSection> {
    vec![
        NavSection {
            title: "Overview",
            icon: "bar-chart",
            url: Some("/dashboard"),
            guard: None,
            items: vec![],
        },
        NavSection {
            title: "Fabric samples",
            icon: "package",
            url: None,
            guard: None,
            items: vec![
                item(
                    "Sample list",
                    "/dashboard/sample",
                    PermissionGuard::new(permissions::SAMPLE_VIEW),
                ),
                item(
                    "New sample",
                    "/dashboard/sample/new",
                    PermissionGuard::new(permissions::SAMPLE_CREATE),
                ),
            ],
        },
        NavSection {
            title: "Categories",
            icon: "folder-tree",
            url: None,
            guard: None,
            items: vec![
                item(
                    "Category list",
                    "/dashboard/categories",
                    PermissionGuard::new(permissions::PRODUCT_CATEGORY_VIEW),
                ),
                item(
                    "New category",
                    "/dashboard/categories/new",
                    PermissionGuard::new(permissions::PRODUCT_CATEGORY_CREATE),
                ),
            ],
        },
        NavSection {
            title: "Users",
            icon: "users",
            url: None,
            guard: Some(PermissionGuard::new(permissions::USER_VIEW)),
            items: vec![
                item(
                    "User list",
                    "/dashboard/users",
                    PermissionGuard::new(permissions::USER_VIEW),
                ),
                item(
                    "New user",
                    "/dashboard/users/new",
                    PermissionGuard::new(permissions::USER_CREATE),
                ),
            ],
        },
        NavSection {
            title: "Settings",
            icon: "settings",
            url: None,
            guard: Some(PermissionGuard::new(permissions::SYSTEM_VIEW)),
            items: vec![
                item("General settings", "/dashboard/settings", admin_only()),
                item(
                    "Permissions",
                    "/dashboard/permissions",
                    PermissionGuard::new(permissions::ROLE_VIEW),
                ),
            ],
        },
    ]
}

fn passes(guard: &Option<PermissionGuard>, state: &AuthState) -> bool {
    guard.as_ref().is_none_or(|guard| guard.allows(state))
}

/// The sidebar as `state` may see it. Empty while loading or signed out.
pub fn visible_navigation(state: &AuthState) -> Vec<NavSection> {
    if !state.is_authenticated() {
        return Vec::new();
    }

    sidebar()
        .into_iter()
        .filter(|section| passes(&section.guard, state))
        .filter_map(|mut section| {
            let had_items = !section.items.is_empty();
            section.items.retain(|item| passes(&item.guard, state));
            (!had_items || !section.items.is_empty()).then_some(section)
        })
        .collect()
}
