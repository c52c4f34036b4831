use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct PublicPage {
    pub path: &'static str,
    pub title: &'static str,
}

/// Query string the route enforcer attaches when it sends a caller to the
/// sign-in page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignInQuery {
    #[serde(rename = "callbackUrl")]
    pub callback_url: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignInPage {
    pub path: String,
    pub title: &'static str,
    pub callback_url: Option<String>,
    pub error: Option<String>,
    pub message: Option<&'static str>,
}
