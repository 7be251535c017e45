use crate::response::ApiResponse;
use crate::routes::employees::common::EmployeeResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use common::format_validation_errors;
use db::models::employee::{self, SubjectList};
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, Set};
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEmployeeRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,

    pub age: Option<i32>,

    #[validate(length(min = 1, message = "Class cannot be empty"))]
    pub class: Option<String>,

    pub subjects: Option<Vec<String>>,

    pub attendance: Option<f64>,
}

impl UpdateEmployeeRequest {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.class.is_none()
            && self.subjects.is_none()
            && self.attendance.is_none()
    }
}

/// PUT /api/employees/{id}
///
/// Update an employee. Admin-only access. This is a partial patch: only the
/// fields present in the body change, absent fields are left untouched.
///
/// ### Path Parameters
/// - `id`: The employee's primary ID
///
/// ### Request Body
/// ```json
/// {
///   "name": "Ana",          // optional
///   "age": 31,              // optional
///   "class": "B2",          // optional
///   "subjects": ["Math"],   // optional
///   "attendance": 95.0      // optional
/// }
/// ```
///
/// ### Responses
///
/// - `200 OK`: Updated employee object
/// - `400 Bad Request`: Validation failure or empty body
/// - `401 Unauthorized` / `403 Forbidden`: Missing or non-admin credentials
/// - `404 Not Found`: Employee does not exist
/// - `500 Internal Server Error`: Database error
pub async fn update_employee(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateEmployeeRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<EmployeeResponse>::error(
                format_validation_errors(&e),
            )),
        );
    }

    if req.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<EmployeeResponse>::error(
                "At least one field must be provided",
            )),
        );
    }

    let current = match employee::Entity::find_by_id(id).one(db).await {
        Ok(Some(model)) => model,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<EmployeeResponse>::error("Employee not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<EmployeeResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    };

    let mut active_model = current.into_active_model();
    if let Some(name) = req.name {
        active_model.name = Set(name);
    }
    if let Some(age) = req.age {
        active_model.age = Set(age);
    }
    if let Some(class) = req.class {
        active_model.class = Set(class);
    }
    if let Some(subjects) = req.subjects {
        active_model.subjects = Set(SubjectList(subjects));
    }
    if let Some(attendance) = req.attendance {
        active_model.attendance = Set(attendance);
    }
    active_model.updated_at = Set(Utc::now());

    match active_model.update(db).await {
        Ok(updated) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                EmployeeResponse::from(updated),
                "Employee updated successfully",
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
