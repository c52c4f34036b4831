use appsynex_config::{AuthRoutesConfig, CorsConfig, JwtConfig};
use tracing::warn;

/// Configuration shared by the route enforcer and the handlers. Holds no
/// per-user data; sessions are resolved per request.
#[derive(Clone, Debug)]
pub struct AppState {
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub auth_routes: AuthRoutesConfig,
}

pub fn init_app_state() -> AppState {
    let jwt_config = JwtConfig::from_env();
    if jwt_config.uses_dev_secret() {
        warn!("JWT_SECRET is not set; session tokens are signed with the development secret");
    }

    AppState {
        jwt_config,
        cors_config: CorsConfig::from_env(),
        auth_routes: AuthRoutesConfig::from_env(),
    }
}
