use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    categories_page, dashboard_page, new_category_page, new_sample_page, new_user_page,
    permissions_page, sample_detail_page, samples_page, settings_page, users_page,
};

pub fn init_pages_router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/sample", get(samples_page))
        .route("/sample/new", get(new_sample_page))
        .route("/sample/{sample_id}", get(sample_detail_page))
        .route("/categories", get(categories_page))
        .route("/categories/new", get(new_category_page))
        .route("/users", get(users_page))
        .route("/users/new", get(new_user_page))
        .route("/settings", get(settings_page))
        .route("/permissions", get(permissions_page))
}
