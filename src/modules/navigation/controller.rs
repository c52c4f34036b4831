use axum::Json;
use tracing::instrument;

use appsynex_auth::AuthState;
use appsynex_ui::{NavSection, visible_navigation};

use crate::middleware::session::CurrentSession;

/// Sidebar sections and links the caller's roles may see.
#[instrument(skip(session))]
pub async fn get_navigation(CurrentSession(session): CurrentSession) -> Json<Vec<NavSection>> {
    Json(visible_navigation(&AuthState::Authenticated(session)))
}
