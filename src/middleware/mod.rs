//! Middleware modules for request processing.
//!
//! - [`session`]: Server-side session accessor and the `CurrentSession` extractor
//! - [`route_rules`]: Static per-route role and permission requirements
//! - [`route_guard`]: The route enforcer middleware
//!
//! # Request Flow
//!
//! 1. `enforce_routes` resolves the session from the `appsynex_token` cookie
//!    (or `Authorization: Bearer <token>`)
//! 2. The most specific `RouteRule` for the path is checked through the
//!    shared permission evaluator
//! 3. Denied page requests redirect to sign-in; denied API requests get 401/403
//! 4. Granted requests carry the `Session` in their extensions for handlers
//!    to pick up with `CurrentSession`

pub mod route_guard;
pub mod route_rules;
pub mod session;
