use crate::response::ApiResponse;
use crate::routes::employees::common::EmployeeResponse;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::format_validation_errors;
use db::models::employee::{Model as EmployeeModel, NewEmployee};
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    pub age: i32,

    #[validate(length(min = 1, message = "Class is required"))]
    pub class: String,

    pub subjects: Vec<String>,

    pub attendance: f64,
}

/// POST /api/employees
///
/// Create a new employee. Admin-only access. The sequential employee number
/// is assigned by the server, never supplied by the caller.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Ana",
///   "age": 30,
///   "class": "A1",
///   "subjects": ["Math"],
///   "attendance": 92.5
/// }
/// ```
///
/// ### Responses
///
/// - `201 Created`: Full employee object including the assigned `employee_id`
/// - `400 Bad Request`: Validation failure
/// - `401 Unauthorized` / `403 Forbidden`: Missing or non-admin credentials
/// - `500 Internal Server Error`: Database error
pub async fn create_employee(
    State(app_state): State<AppState>,
    Json(req): Json<CreateEmployeeRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<EmployeeResponse>::error(
                format_validation_errors(&e),
            )),
        );
    }

    let data = NewEmployee {
        name: req.name,
        age: req.age,
        class: req.class,
        subjects: req.subjects,
        attendance: req.attendance,
    };

    match EmployeeModel::create(app_state.db(), data).await {
        Ok(employee) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                EmployeeResponse::from(employee),
                "Employee created successfully",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<EmployeeResponse>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}
