use crate::modules::public::controller::{
    about_page, contact_page, home_page, sign_in_page, sign_up_page,
};
use crate::state::AppState;
use appsynex_config::AuthRoutesConfig;
use axum::{Router, routing::get};

/// The sign-in page is mounted wherever `SIGN_IN_PATH` points, so the
/// enforcer's redirects always land on a real route.
pub fn init_public_router(auth_routes: &AuthRoutesConfig) -> Router<AppState> {
    Router::new()
        .route("/", get(home_page))
        .route("/about", get(about_page))
        .route("/contact", get(contact_page))
        .route(&auth_routes.sign_in_path, get(sign_in_page))
        .route("/auth/sign-up", get(sign_up_page))
}
