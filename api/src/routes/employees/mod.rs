//! # Employees Routes Module
//!
//! This module defines and wires up routes for the `/employees` endpoint group.
//!
//! ## Structure
//! - `get.rs` — GET handlers (list, distinct classes, single employee)
//! - `post.rs` — POST handlers (create employee)
//! - `put.rs` — PUT handlers (partial update)
//! - `delete.rs` — DELETE handlers (delete employee)
//!
//! ## Middleware
//! Read routes are public. The write routes returned by
//! `employee_admin_routes()` are protected with the `allow_admin` guard where
//! they are mounted.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use delete::delete_employee;
use get::{get_employee, get_unique_classes, list_employees};
use post::create_employee;
use put::update_employee;

/// Builds the public read half of the `/employees` route group.
///
/// - `GET /employees` → `list_employees`
/// - `GET /employees/classes` → `get_unique_classes`
/// - `GET /employees/{id}` → `get_employee`
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees))
        .route("/classes", get(get_unique_classes))
        .route("/{id}", get(get_employee))
}

/// Builds the admin-only write half of the `/employees` route group.
///
/// - `POST /employees` → `create_employee` (admin only)
/// - `PUT /employees/{id}` → `update_employee` (admin only)
/// - `DELETE /employees/{id}` → `delete_employee` (admin only)
pub fn employee_admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_employee))
        .route("/{id}", put(update_employee))
        .route("/{id}", delete(delete_employee))
}
