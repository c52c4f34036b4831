//! # AppSynex Config
//!
//! Configuration types for the AppSynex dashboard, loaded from environment
//! variables:
//!
//! - [`jwt`]: Session token signing configuration
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`auth_routes`]: Sign-in path, session cookie, public and auth routes
//! - [`server`]: Listener address
//!
//! # Example
//!
//! ```ignore
//! use appsynex_config::{AuthRoutesConfig, CorsConfig, JwtConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let auth_routes = AuthRoutesConfig::from_env();
//! ```

pub mod auth_routes;
pub mod cors;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use auth_routes::AuthRoutesConfig;
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
