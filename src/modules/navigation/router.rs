use crate::modules::navigation::controller::get_navigation;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_navigation_router() -> Router<AppState> {
    Router::new().route("/", get(get_navigation))
}
