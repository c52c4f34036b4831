use serde::{Deserialize, Serialize};

use appsynex_auth::Session;
use appsynex_core::{Action, Module, Role};

#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub roles: Vec<Role>,
    pub highest_role: Option<Role>,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        let highest_role = session.highest_role();
        Self {
            user_id: session.user_id,
            username: session.username,
            email: session.email,
            roles: session.roles.into_iter().collect(),
            highest_role,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PermissionQuery {
    pub module: Module,
    pub action: Action,
}

#[derive(Debug, Clone, Serialize)]
pub struct PermissionCheckResponse {
    pub module: Module,
    pub action: Action,
    pub allowed: bool,
}
