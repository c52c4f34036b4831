use axum::{
    Json,
    extract::{Query, rejection::QueryRejection},
};
use tracing::{debug, instrument};

use appsynex_core::{AppError, evaluate};

use crate::middleware::session::CurrentSession;
use crate::modules::session::model::{PermissionCheckResponse, PermissionQuery, SessionResponse};

/// The caller's identity and roles as the server sees them.
#[instrument(skip(session))]
pub async fn get_session(CurrentSession(session): CurrentSession) -> Json<SessionResponse> {
    Json(SessionResponse::from(session))
}

/// Ask the evaluator about one module/action pair for the caller.
#[instrument(skip(session, query))]
pub async fn check_permission(
    CurrentSession(session): CurrentSession,
    query: Result<Query<PermissionQuery>, QueryRejection>,
) -> Result<Json<PermissionCheckResponse>, AppError> {
    let Query(query) = query.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

    let allowed = evaluate(&session.roles, &query.module, &query.action);
    debug!(
        module = %query.module,
        action = %query.action,
        allowed,
        "Permission check"
    );

    Ok(Json(PermissionCheckResponse {
        module: query.module,
        action: query.action,
        allowed,
    }))
}
