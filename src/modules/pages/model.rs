use serde::Serialize;

use appsynex_auth::Session;
use appsynex_ui::PermissionGuard;

/// A button or menu entry a page may show.
#[derive(Debug, Clone)]
pub struct GuardedAction {
    pub key: &'static str,
    pub label: &'static str,
    pub guard: PermissionGuard,
}

impl GuardedAction {
    pub fn new(key: &'static str, label: &'static str, guard: PermissionGuard) -> Self {
        Self { key, label, guard }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageAction {
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageUser {
    pub username: String,
    pub email: String,
    pub roles: Vec<String>,
}

impl From<&Session> for PageUser {
    fn from(session: &Session) -> Self {
        Self {
            username: session.username.clone(),
            email: session.email.clone(),
            roles: session.roles.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// Page shell returned to the dashboard front end: what to title the page
/// and which guarded actions to render. Page data is fetched separately.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub path: String,
    pub title: &'static str,
    pub user: PageUser,
    pub actions: Vec<PageAction>,
}
