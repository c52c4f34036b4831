use crate::modules::session::controller::{check_permission, get_session};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_session_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_session))
        .route("/can", get(check_permission))
}
