#![allow(dead_code)]

use appsynex::appsynex_auth::create_access_token;
use appsynex::appsynex_config::{AuthRoutesConfig, CorsConfig, JwtConfig};
use appsynex::appsynex_core::Role;
use appsynex::router::init_router;
use appsynex::state::AppState;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret";

pub fn test_state() -> AppState {
    AppState {
        jwt_config: JwtConfig {
            secret: TEST_SECRET.to_string(),
            access_token_expiry: 3600,
        },
        cors_config: CorsConfig::parse("http://localhost:5173"),
        auth_routes: AuthRoutesConfig::default(),
    }
}

pub fn setup_test_app() -> axum::Router {
    init_router(test_state())
}

/// App whose sign-in page lives at `sign_in_path`, as `SIGN_IN_PATH` would set it.
pub fn setup_test_app_with_sign_in(sign_in_path: &str) -> axum::Router {
    let mut state = test_state();
    state.auth_routes = state.auth_routes.with_sign_in_path(sign_in_path);
    init_router(state)
}

/// Session token for a user holding `roles`.
pub fn token_for(roles: &[Role]) -> String {
    create_access_token(
        "00000000-0000-0000-0000-000000000042",
        "tester",
        "tester@example.com",
        roles.to_vec(),
        &test_state().jwt_config,
    )
    .unwrap()
}

pub enum Credential<'a> {
    None,
    Cookie(&'a str),
    Bearer(&'a str),
}

pub async fn get(app: axum::Router, uri: &str, credential: Credential<'_>) -> Response<Body> {
    let mut request = Request::builder().method("GET").uri(uri);
    request = match credential {
        Credential::None => request,
        Credential::Cookie(token) => {
            request.header(header::COOKIE, format!("appsynex_token={token}"))
        }
        Credential::Bearer(token) => {
            request.header(header::AUTHORIZATION, format!("Bearer {token}"))
        }
    };

    app.oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub fn location(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap_or_else(|_| {
        panic!(
            "Failed to parse response body. Status: {}, Body: {:?}",
            status,
            String::from_utf8_lossy(&body)
        )
    })
}
