mod common;

use appsynex::appsynex_core::permissions::roles;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{
    Credential, get, json_body, location, setup_test_app, setup_test_app_with_sign_in, token_for,
};
use tower::ServiceExt;

#[tokio::test]
async fn test_public_pages_need_no_session() {
    for uri in ["/", "/about", "/contact", "/auth/sign-in", "/auth/sign-up"] {
        let response = get(setup_test_app(), uri, Credential::None).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn test_protected_page_redirects_to_sign_in_with_callback() {
    let response = get(setup_test_app(), "/dashboard/sample/7", Credential::None).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        location(&response).as_deref(),
        Some("/auth/sign-in?callbackUrl=%2Fdashboard%2Fsample%2F7")
    );
}

#[tokio::test]
async fn test_dashboard_needs_only_a_session() {
    let token = token_for(&[roles::STAFF]);
    let response = get(setup_test_app(), "/dashboard", Credential::Cookie(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["title"], "Overview");
    assert_eq!(body["user"]["username"], "tester");
}

#[tokio::test]
async fn test_missing_permission_redirects_with_error() {
    let token = token_for(&[roles::STAFF]);
    let response = get(setup_test_app(), "/dashboard/users", Credential::Cookie(&token)).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        location(&response).as_deref(),
        Some("/auth/sign-in?error=insufficient_permissions")
    );
}

#[tokio::test]
async fn test_missing_role_redirects_with_error() {
    let token = token_for(&[roles::MANAGER]);
    let response = get(
        setup_test_app(),
        "/dashboard/settings",
        Credential::Cookie(&token),
    )
    .await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        location(&response).as_deref(),
        Some("/auth/sign-in?error=insufficient_role")
    );
}

#[tokio::test]
async fn test_admin_reaches_settings_without_super_admin_actions() {
    let token = token_for(&[roles::ADMIN]);
    let response = get(
        setup_test_app(),
        "/dashboard/settings",
        Credential::Cookie(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let actions: Vec<&str> = body["actions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["key"].as_str().unwrap())
        .collect();
    assert!(actions.is_empty(), "admin got {actions:?}");
}

#[tokio::test]
async fn test_super_admin_sees_every_settings_action() {
    let token = token_for(&[roles::SUPER_ADMIN]);
    let response = get(
        setup_test_app(),
        "/dashboard/settings",
        Credential::Cookie(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["actions"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_staff_sample_page_hides_delete() {
    let token = token_for(&[roles::STAFF]);
    let response = get(
        setup_test_app(),
        "/dashboard/sample",
        Credential::Cookie(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let actions: Vec<&str> = body["actions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["key"].as_str().unwrap())
        .collect();
    assert_eq!(
        actions,
        vec!["create_sample", "view_sample", "update_sample"]
    );
}

#[tokio::test]
async fn test_sample_detail_uses_view_rule() {
    let token = token_for(&[roles::STAFF]);
    let response = get(
        setup_test_app(),
        "/dashboard/sample/42",
        Credential::Cookie(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["path"], "/dashboard/sample/42");
}

#[tokio::test]
async fn test_signed_in_user_is_sent_to_dashboard_from_sign_in() {
    let token = token_for(&[roles::STAFF]);
    let response = get(setup_test_app(), "/auth/sign-in", Credential::Cookie(&token)).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response).as_deref(), Some("/dashboard"));
}

#[tokio::test]
async fn test_sign_in_page_echoes_enforcer_query() {
    let response = get(
        setup_test_app(),
        "/auth/sign-in?callbackUrl=%2Fdashboard%2Fusers&error=insufficient_role",
        Credential::None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["callback_url"], "/dashboard/users");
    assert_eq!(body["error"], "insufficient_role");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_tampered_token_is_treated_as_signed_out() {
    let mut token = token_for(&[roles::SUPER_ADMIN]);
    token.push('x');
    let response = get(
        setup_test_app(),
        "/dashboard/users",
        Credential::Cookie(&token),
    )
    .await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        location(&response).as_deref(),
        Some("/auth/sign-in?callbackUrl=%2Fdashboard%2Fusers")
    );
}

#[tokio::test]
async fn test_api_without_session_is_401_json() {
    let response = get(setup_test_app(), "/api/session", Credential::None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = json_body(response).await;
    assert_eq!(body["error"], "Authentication required");
}

#[tokio::test]
async fn test_api_session_with_bearer_token() {
    let token = token_for(&[roles::STAFF, roles::MANAGER]);
    let response = get(setup_test_app(), "/api/session", Credential::Bearer(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["username"], "tester");
    assert_eq!(body["highest_role"], "MANAGER");
    assert_eq!(body["roles"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_api_permission_check() {
    let token = token_for(&[roles::STAFF]);

    let response = get(
        setup_test_app(),
        "/api/session/can?module=SAMPLE&action=UPDATE",
        Credential::Bearer(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["allowed"], true);

    let response = get(
        setup_test_app(),
        "/api/session/can?module=SAMPLE&action=DELETE",
        Credential::Bearer(&token),
    )
    .await;
    assert_eq!(json_body(response).await["allowed"], false);
}

#[tokio::test]
async fn test_api_permission_check_missing_action_is_400_json() {
    let token = token_for(&[roles::STAFF]);
    let response = get(
        setup_test_app(),
        "/api/session/can?module=SAMPLE",
        Credential::Bearer(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_empty_cookie_does_not_hide_bearer_token() {
    let token = token_for(&[roles::STAFF]);
    let request = Request::builder()
        .method("GET")
        .uri("/api/session")
        .header(header::COOKIE, "appsynex_token=")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = setup_test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["username"], "tester");
}

#[tokio::test]
async fn test_configured_sign_in_path_is_mounted() {
    let response = get(
        setup_test_app_with_sign_in("/login"),
        "/login?error=insufficient_role",
        Credential::None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["path"], "/login");
    assert_eq!(body["error"], "insufficient_role");
}

#[tokio::test]
async fn test_configured_sign_in_path_receives_redirects() {
    let response = get(
        setup_test_app_with_sign_in("/login"),
        "/dashboard/sample",
        Credential::None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        location(&response).as_deref(),
        Some("/login?callbackUrl=%2Fdashboard%2Fsample")
    );

    let token = token_for(&[roles::STAFF]);
    let response = get(
        setup_test_app_with_sign_in("/login"),
        "/login",
        Credential::Cookie(&token),
    )
    .await;
    assert_eq!(location(&response).as_deref(), Some("/dashboard"));

    let response = get(
        setup_test_app_with_sign_in("/login"),
        "/auth/sign-in",
        Credential::None,
    )
    .await;
    assert_ne!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_navigation_for_staff() {
    let token = token_for(&[roles::STAFF]);
    let response = get(setup_test_app(), "/api/navigation", Credential::Cookie(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|section| section["title"].as_str().unwrap())
        .collect();
    assert!(titles.contains(&"Fabric samples"));
    assert!(!titles.contains(&"Users"));
    assert!(!titles.contains(&"Settings"));
}

#[tokio::test]
async fn test_unknown_role_only_reaches_unruled_pages() {
    let token = token_for(&[appsynex::appsynex_core::Role::new("GHOST")]);

    let response = get(setup_test_app(), "/dashboard", Credential::Cookie(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(
        setup_test_app(),
        "/dashboard/sample",
        Credential::Cookie(&token),
    )
    .await;
    assert_eq!(
        location(&response).as_deref(),
        Some("/auth/sign-in?error=insufficient_permissions")
    );
}
