//! # AppSynex Auth
//!
//! Session token handling for the AppSynex dashboard.
//!
//! - [`claims`]: JWT claim structure carrying identity and roles
//! - [`jwt`]: Token creation and verification
//! - [`session`]: The `Session` value and the `AuthState` a session accessor exposes
//!
//! # Example
//!
//! ```ignore
//! use appsynex_auth::{AuthState, create_access_token};
//! use appsynex_config::JwtConfig;
//! use appsynex_core::permissions::roles;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token("42", "linh", "linh@example.com", vec![roles::STAFF], &config)?;
//! let state = AuthState::from_token(Some(&token), &config);
//! assert!(state.is_authenticated());
//! ```

pub mod claims;
pub mod jwt;
pub mod session;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{create_access_token, encode_claims, verify_token};
pub use session::{AuthState, Session};
