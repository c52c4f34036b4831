use std::env;

/// Where the route enforcer sends people and which paths it leaves open.
#[derive(Clone, Debug)]
pub struct AuthRoutesConfig {
    pub sign_in_path: String,
    /// Landing page for an already signed-in user hitting an auth route.
    pub dashboard_path: String,
    /// Cookie holding the signed session token.
    pub session_cookie: String,
    /// Paths reachable without a session.
    pub public_routes: Vec<String>,
    /// Sign-in style pages; a signed-in user is sent to the dashboard instead.
    pub auth_routes: Vec<String>,
    /// Paths under this prefix answer with JSON errors instead of redirects.
    pub api_prefix: String,
}

impl Default for AuthRoutesConfig {
    fn default() -> Self {
        Self {
            sign_in_path: "/auth/sign-in".to_string(),
            dashboard_path: "/dashboard".to_string(),
            session_cookie: "appsynex_token".to_string(),
            public_routes: vec![
                "/".to_string(),
                "/auth/sign-in".to_string(),
                "/auth/sign-up".to_string(),
                "/about".to_string(),
                "/contact".to_string(),
                "/metrics".to_string(),
            ],
            auth_routes: vec!["/auth/sign-in".to_string(), "/auth/sign-up".to_string()],
            api_prefix: "/api/".to_string(),
        }
    }
}

impl AuthRoutesConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let config = match env::var("SIGN_IN_PATH") {
            Ok(path) => defaults.with_sign_in_path(&path),
            Err(_) => defaults,
        };

        Self {
            dashboard_path: env::var("DASHBOARD_PATH").unwrap_or(config.dashboard_path),
            session_cookie: env::var("SESSION_COOKIE").unwrap_or(config.session_cookie),
            ..config
        }
    }

    /// Move the sign-in page. The old path stops being public or an auth
    /// route; the new one becomes both.
    pub fn with_sign_in_path(mut self, path: &str) -> Self {
        let path = path.trim();
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        let old = std::mem::replace(&mut self.sign_in_path, path.clone());
        self.public_routes.retain(|route| *route != old);
        self.auth_routes.retain(|route| *route != old);
        if !self.public_routes.contains(&path) {
            self.public_routes.push(path.clone());
        }
        if !self.auth_routes.contains(&path) {
            self.auth_routes.push(path);
        }
        self
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.public_routes.iter().any(|route| route == path)
    }

    pub fn is_auth_route(&self, path: &str) -> bool {
        self.auth_routes.iter().any(|route| route == path)
    }

    pub fn is_api(&self, path: &str) -> bool {
        path.starts_with(&self.api_prefix)
    }
}
