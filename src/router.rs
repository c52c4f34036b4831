use crate::logging::{REQUEST_ID_HEADER, logging_middleware};
use crate::metrics::metrics_middleware;
use crate::middleware::route_guard::enforce_routes;
use crate::modules::navigation::init_navigation_router;
use crate::modules::pages::init_pages_router;
use crate::modules::public::init_public_router;
use crate::modules::session::init_session_router;
use crate::state::AppState;
use appsynex_config::CorsConfig;
use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .expose_headers([REQUEST_ID_HEADER])
        .allow_credentials(true)
}

/// Every route sits behind the route enforcer; `/metrics` is merged on top
/// by `main` and stays outside it.
pub fn init_router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/session", init_session_router())
        .nest("/navigation", init_navigation_router());

    Router::new()
        .merge(init_public_router(&state.auth_routes))
        .nest("/dashboard", init_pages_router())
        .nest("/api", api)
        .with_state(state.clone())
        .layer(middleware::from_fn_with_state(state.clone(), enforce_routes))
        .layer(cors_layer(&state.cors_config))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
