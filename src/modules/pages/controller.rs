use axum::{Json, extract::Path};
use tracing::instrument;

use appsynex_auth::{AuthState, Session};
use appsynex_core::permissions;
use appsynex_ui::{
    PermissionGuard, can_create_samples, can_delete_samples, can_view_samples, super_admin_only,
};

use crate::metrics::track_access_decision;
use crate::middleware::session::CurrentSession;
use crate::modules::pages::model::{GuardedAction, PageAction, PageUser, PageView};

/// Keep the actions the session's guards grant.
pub fn visible_actions(session: &Session, candidates: Vec<GuardedAction>) -> Vec<PageAction> {
    let state = AuthState::Authenticated(session.clone());
    candidates
        .into_iter()
        .filter_map(|action| {
            let access = action.guard.check(&state);
            track_access_decision("guard", &access);
            access.is_granted().then_some(PageAction {
                key: action.key,
                label: action.label,
            })
        })
        .collect()
}

fn render_page(
    path: impl Into<String>,
    title: &'static str,
    session: &Session,
    candidates: Vec<GuardedAction>,
) -> Json<PageView> {
    Json(PageView {
        path: path.into(),
        title,
        user: PageUser::from(session),
        actions: visible_actions(session, candidates),
    })
}

fn create_sample() -> GuardedAction {
    GuardedAction::new("create_sample", "New sample", can_create_samples())
}

fn update_sample() -> GuardedAction {
    GuardedAction::new(
        "update_sample",
        "Edit",
        PermissionGuard::new(permissions::SAMPLE_UPDATE),
    )
}

fn delete_sample() -> GuardedAction {
    GuardedAction::new("delete_sample", "Delete", can_delete_samples())
}

#[instrument(skip(session))]
pub async fn dashboard_page(CurrentSession(session): CurrentSession) -> Json<PageView> {
    render_page("/dashboard", "Overview", &session, vec![create_sample()])
}

#[instrument(skip(session))]
pub async fn samples_page(CurrentSession(session): CurrentSession) -> Json<PageView> {
    render_page(
        "/dashboard/sample",
        "Fabric samples",
        &session,
        vec![
            create_sample(),
            GuardedAction::new("view_sample", "View", can_view_samples()),
            update_sample(),
            delete_sample(),
        ],
    )
}

#[instrument(skip(session))]
pub async fn new_sample_page(CurrentSession(session): CurrentSession) -> Json<PageView> {
    render_page("/dashboard/sample/new", "New sample", &session, vec![])
}

#[instrument(skip(session))]
pub async fn sample_detail_page(
    CurrentSession(session): CurrentSession,
    Path(sample_id): Path<i64>,
) -> Json<PageView> {
    render_page(
        format!("/dashboard/sample/{sample_id}"),
        "Sample detail",
        &session,
        vec![update_sample(), delete_sample()],
    )
}

#[instrument(skip(session))]
pub async fn categories_page(CurrentSession(session): CurrentSession) -> Json<PageView> {
    render_page(
        "/dashboard/categories",
        "Categories",
        &session,
        vec![
            GuardedAction::new(
                "create_category",
                "New category",
                PermissionGuard::new(permissions::PRODUCT_CATEGORY_CREATE),
            ),
            GuardedAction::new(
                "update_category",
                "Edit",
                PermissionGuard::new(permissions::PRODUCT_CATEGORY_UPDATE),
            ),
            GuardedAction::new(
                "delete_category",
                "Delete",
                PermissionGuard::new(permissions::PRODUCT_CATEGORY_DELETE),
            ),
        ],
    )
}

#[instrument(skip(session))]
pub async fn new_category_page(CurrentSession(session): CurrentSession) -> Json<PageView> {
    render_page("/dashboard/categories/new", "New category", &session, vec![])
}

#[instrument(skip(session))]
pub async fn users_page(CurrentSession(session): CurrentSession) -> Json<PageView> {
    render_page(
        "/dashboard/users",
        "Users",
        &session,
        vec![
            GuardedAction::new(
                "view_user",
                "View",
                PermissionGuard::new(permissions::USER_VIEW),
            ),
            GuardedAction::new(
                "update_user",
                "Edit",
                PermissionGuard::new(permissions::USER_UPDATE),
            ),
            GuardedAction::new(
                "assign_roles",
                "Assign roles",
                PermissionGuard::new(permissions::USER_ASSIGN_ROLES),
            ),
            GuardedAction::new(
                "delete_user",
                "Delete",
                PermissionGuard::new(permissions::USER_DELETE),
            ),
        ],
    )
}

#[instrument(skip(session))]
pub async fn new_user_page(CurrentSession(session): CurrentSession) -> Json<PageView> {
    render_page("/dashboard/users/new", "New user", &session, vec![])
}

#[instrument(skip(session))]
pub async fn settings_page(CurrentSession(session): CurrentSession) -> Json<PageView> {
    render_page(
        "/dashboard/settings",
        "Settings",
        &session,
        vec![
            GuardedAction::new("manage_settings", "System settings", super_admin_only()),
            GuardedAction::new(
                "backup",
                "Back up",
                PermissionGuard::new(permissions::SYSTEM_BACKUP),
            ),
            GuardedAction::new(
                "restore",
                "Restore",
                PermissionGuard::new(permissions::SYSTEM_RESTORE),
            ),
        ],
    )
}

#[instrument(skip(session))]
pub async fn permissions_page(CurrentSession(session): CurrentSession) -> Json<PageView> {
    render_page("/dashboard/permissions", "Permissions", &session, vec![])
}
