//! HTTP route entry point for `/api/...`.
//!
//! Route groups include:
//! - `/health` → Health check endpoint (public)
//! - `/auth` → Authentication endpoints (register, login, public)
//! - `/employees` → Employee roster: reads are public, writes are admin-only

use crate::auth::guards::allow_admin;
use crate::routes::{
    auth::auth_routes,
    employees::{employee_admin_routes, employee_routes},
    health::health_routes,
};
use axum::{Router, middleware::from_fn};
use util::state::AppState;

pub mod auth;
pub mod employees;
pub mod health;

/// Builds the complete application router for all HTTP endpoints.
///
/// The employee group is assembled from a public read router and an
/// admin-guarded write router merged onto the same paths, so anonymous
/// callers can list and inspect the roster while every mutation passes
/// through `allow_admin` first.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/auth", auth_routes())
        .nest(
            "/employees",
            employee_routes().merge(employee_admin_routes().route_layer(from_fn(allow_admin))),
        )
        .with_state(app_state)
}
