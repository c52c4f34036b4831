use axum::{
    Json,
    extract::{Query, State},
};

use appsynex_core::DenyReason;

use crate::modules::public::model::{PublicPage, SignInPage, SignInQuery};
use crate::state::AppState;

pub async fn home_page() -> Json<PublicPage> {
    Json(PublicPage {
        path: "/",
        title: "AppSynex",
    })
}

pub async fn about_page() -> Json<PublicPage> {
    Json(PublicPage {
        path: "/about",
        title: "About",
    })
}

pub async fn contact_page() -> Json<PublicPage> {
    Json(PublicPage {
        path: "/contact",
        title: "Contact",
    })
}

pub async fn sign_up_page() -> Json<PublicPage> {
    Json(PublicPage {
        path: "/auth/sign-up",
        title: "Create an account",
    })
}

/// User-facing text for an `error` code set by the route enforcer.
pub fn sign_in_message(code: &str) -> Option<&'static str> {
    if code == DenyReason::InsufficientRole.code() {
        Some("Your role does not allow access to that page.")
    } else if code == DenyReason::InsufficientPermissions.code() {
        Some("You do not have permission to access that page.")
    } else if code == DenyReason::Unauthenticated.code() {
        Some("Please sign in to continue.")
    } else {
        None
    }
}

pub async fn sign_in_page(
    State(state): State<AppState>,
    Query(query): Query<SignInQuery>,
) -> Json<SignInPage> {
    let message = query.error.as_deref().and_then(sign_in_message);
    Json(SignInPage {
        path: state.auth_routes.sign_in_path,
        title: "Sign in",
        callback_url: query.callback_url,
        error: query.error,
        message,
    })
}
