use crate::response::ApiResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::employee::Entity as EmployeeEntity;
use sea_orm::EntityTrait;
use util::state::AppState;

/// DELETE /api/employees/{id}
///
/// Delete an employee by primary ID. Admin-only access. Deleting an ID that
/// no longer exists still reports success, so retried deletes are harmless.
///
/// ### Path Parameters
/// - `id`: The employee's primary ID
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": null,
///   "message": "Employee deleted successfully"
/// }
/// ```
///
/// - `401 Unauthorized` / `403 Forbidden`: Missing or non-admin credentials
/// - `500 Internal Server Error`: Database error
pub async fn delete_employee(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match EmployeeEntity::delete_by_id(id).exec(db).await {
        Ok(result) => {
            if result.rows_affected == 0 {
                tracing::debug!(id, "delete for an absent employee");
            }
            (
                StatusCode::OK,
                Json(ApiResponse::success_without_data(
                    "Employee deleted successfully",
                )),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
        ),
    }
}
