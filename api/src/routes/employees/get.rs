use crate::response::ApiResponse;
use crate::routes::employees::common::EmployeeResponse;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::format_validation_errors;
use db::models::employee::{
    Column as EmployeeColumn, Entity as EmployeeEntity, Model as EmployeeModel,
};
use sea_orm::{ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ListEmployeesQuery {
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<u64>,
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<u64>,
    pub sort_by: Option<String>,
    pub class: Option<String>,
    pub min_attendance: Option<f64>,
    pub query: Option<String>,
}

#[derive(Debug, Serialize, Default)]
pub struct EmployeeListResponse {
    pub employees: Vec<EmployeeResponse>,
    pub total_count: u64,
    pub total_pages: u64,
    pub current_page: u64,
}

/// GET /api/employees
///
/// Retrieve a paginated list of employees with optional filtering and sorting.
/// Publicly readable; no authentication required.
///
/// ### Query Parameters
/// - `page` (optional): Page number (default: 1, min: 1)
/// - `limit` (optional): Items per page (default: 10, min: 1, max: 100)
/// - `sort_by` (optional): Sort field, `-` prefix for descending. One of
///   `name`, `age`, `class`, `attendance`, `employee_id`; anything else falls
///   back to ascending `name` (the default)
/// - `class` (optional): Case-insensitive partial match on the class field
/// - `min_attendance` (optional): Inclusive lower bound on attendance
/// - `query` (optional): Case-insensitive partial match against name OR class
///   OR any subject
///
/// ### Examples
/// ```http
/// GET /api/employees?page=2&limit=10
/// GET /api/employees?query=math
/// GET /api/employees?class=a1&min_attendance=75
/// GET /api/employees?sort_by=-attendance
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "employees": [
///       {
///         "id": 1,
///         "employee_id": 1001,
///         "name": "Ana",
///         "age": 30,
///         "class": "A1",
///         "subjects": ["Math"],
///         "attendance": 92.5,
///         "created_at": "2025-05-23T18:00:00Z",
///         "updated_at": "2025-05-23T18:00:00Z"
///       }
///     ],
///     "total_count": 35,
///     "total_pages": 4,
///     "current_page": 1
///   },
///   "message": "Employees retrieved successfully"
/// }
/// ```
///
/// - `400 Bad Request` - Invalid query parameters
/// - `500 Internal Server Error` - Database error
pub async fn list_employees(
    State(app_state): State<AppState>,
    Query(query): Query<ListEmployeesQuery>,
) -> impl IntoResponse {
    let db = app_state.db();

    if let Err(e) = query.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<EmployeeListResponse>::error(
                format_validation_errors(&e),
            )),
        );
    }

    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(10);

    let mut condition = Condition::all();

    if let Some(class) = &query.class {
        condition = condition.add(EmployeeColumn::Class.contains(class.as_str()));
    }

    if let Some(min_attendance) = query.min_attendance {
        condition = condition.add(EmployeeColumn::Attendance.gte(min_attendance));
    }

    if let Some(q) = &query.query {
        condition = condition.add(
            Condition::any()
                .add(EmployeeColumn::Name.contains(q.as_str()))
                .add(EmployeeColumn::Class.contains(q.as_str()))
                .add(EmployeeColumn::Subjects.contains(q.as_str())),
        );
    }

    let mut query_builder = EmployeeEntity::find().filter(condition);

    let sort_param = query.sort_by.as_deref().unwrap_or("name");
    let (field, descending) = if let Some(stripped) = sort_param.strip_prefix('-') {
        (stripped, true)
    } else {
        (sort_param, false)
    };

    // Unknown sort keys fall back to the default ordering, direction included.
    let (column, descending) = match field {
        "name" => (EmployeeColumn::Name, descending),
        "age" => (EmployeeColumn::Age, descending),
        "class" => (EmployeeColumn::Class, descending),
        "attendance" => (EmployeeColumn::Attendance, descending),
        "employee_id" => (EmployeeColumn::EmployeeId, descending),
        _ => (EmployeeColumn::Name, false),
    };
    query_builder = if descending {
        query_builder.order_by_desc(column)
    } else {
        query_builder.order_by_asc(column)
    };

    // The total is computed under the same filter, independent of the page
    // actually fetched.
    let paginator = query_builder.paginate(db, limit);

    let total_count = match paginator.num_items().await {
        Ok(n) => n,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<EmployeeListResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    };

    let employees = match paginator.fetch_page(page - 1).await {
        Ok(rows) => rows.into_iter().map(EmployeeResponse::from).collect(),
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<EmployeeListResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    };

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            EmployeeListResponse {
                employees,
                total_count,
                total_pages: total_count.div_ceil(limit),
                current_page: page,
            },
            "Employees retrieved successfully",
        )),
    )
}

/// GET /api/employees/classes
///
/// Retrieve the distinct class values across all employees, sorted ascending.
/// Publicly readable.
///
/// ### Responses
/// - `200 OK`: `{"success": true, "data": ["A1", "B2"], "message": "..."}`
/// - `500 Internal Server Error`: Database error
pub async fn get_unique_classes(State(app_state): State<AppState>) -> impl IntoResponse {
    let db = app_state.db();

    match EmployeeModel::unique_classes(db).await {
        Ok(classes) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                classes,
                "Classes retrieved successfully",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Vec<String>>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}

/// GET /api/employees/{id}
///
/// Fetch a single employee by primary ID. Publicly readable.
///
/// ### Path Parameters
/// - `id`: The employee's primary ID (integer)
///
/// ### Responses
/// - `200 OK`: Employee found
/// - `404 Not Found`: Employee does not exist
/// - `500 Internal Server Error`: DB error
pub async fn get_employee(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match EmployeeEntity::find_by_id(id).one(db).await {
        Ok(Some(employee)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                EmployeeResponse::from(employee),
                "Employee retrieved successfully",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<EmployeeResponse>::error("Employee not found")),
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
