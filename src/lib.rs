//! # AppSynex Dashboard
//!
//! Server side of the AppSynex fabric-sample management dashboard, built
//! with Axum. Every page and API route passes through a route enforcer that
//! resolves the caller's session from the signed `appsynex_token` cookie (or
//! a bearer token) and checks the route's role and permission requirements
//! against the shared role table in `appsynex-core`.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── appsynex-core/    # Identifiers, role table, evaluator, AppError
//! ├── appsynex-config/  # Environment-driven configuration
//! ├── appsynex-auth/    # Session token, Session, AuthState
//! ├── appsynex-ui/      # Permission guards and guarded navigation
//! └── appsynex-cli/     # Decision checks, table audit, dev tokens
//! src/
//! ├── middleware/       # Session accessor, route rules, route enforcer
//! └── modules/          # Public pages, dashboard pages, session and navigation APIs
//! ```
//!
//! ## Roles
//!
//! | Role | Grants |
//! |------|--------|
//! | SUPER_ADMIN | Everything |
//! | ADMIN | Everything except SYSTEM backup, restore, and settings management |
//! | MANAGER | Staff permissions plus tracking, user listing, and customer/order/report edits |
//! | STAFF | Sample view/create/update and read access to catalog data |
//!
//! ## Environment Variables
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key
//! JWT_ACCESS_EXPIRY=86400
//! SIGN_IN_PATH=/auth/sign-in
//! DASHBOARD_PATH=/dashboard
//! SESSION_COOKIE=appsynex_token
//! ALLOWED_ORIGINS=http://localhost:5173
//! BIND_ADDR=0.0.0.0:3000
//! LOG_DIR=storage/logs
//! OBSERVABILITY_ENABLED=true
//! ```
//!
//! ## Modules
//!
//! - [`logging`]: Tracing setup and request logging middleware
//! - [`metrics`]: Prometheus metrics and access-decision counters
//! - [`middleware`]: Session resolution and route enforcement
//! - [`modules`]: Feature modules
//! - [`router`]: Main application router
//! - [`state`]: Shared application state

pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use appsynex_auth;
pub use appsynex_config;
pub use appsynex_core;
pub use appsynex_ui;
