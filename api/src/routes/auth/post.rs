use crate::auth::generate_jwt;
use crate::response::ApiResponse;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::format_validation_errors;
use db::models::user::{Model as UserModel, Role, UserError};
use serde::{Deserialize, Serialize};
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    pub username: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    pub role: Option<Role>,
}

#[derive(Debug, Serialize, Default)]
pub struct AuthResponse {
    pub id: i64,
    pub username: String,
    pub role: Role,
    pub token: String,
    pub expires_at: String,
}

impl AuthResponse {
    fn for_user(user: UserModel) -> Self {
        let (token, expires_at) = generate_jwt(user.id, user.role);
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
            token,
            expires_at,
        }
    }
}

/// POST /auth/register
///
/// Register a new user. The password is stored only as a salted one-way hash,
/// and the role defaults to `user` when omitted.
///
/// ### Request Body
/// ```json
/// {
///   "username": "ana",
///   "password": "strongpassword",
///   "role": "admin"
/// }
/// ```
///
/// ### Responses
///
/// - `201 Created`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 1,
///     "username": "ana",
///     "role": "admin",
///     "token": "jwt_token_here",
///     "expires_at": "2025-05-23T11:00:00Z"
///   },
///   "message": "User registered successfully"
/// }
/// ```
///
/// - `400 Bad Request` (validation failure)
/// - `409 Conflict` (duplicate username)
/// - `500 Internal Server Error`
pub async fn register(
    State(app_state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<AuthResponse>::error(format_validation_errors(
                &validation_errors,
            ))),
        );
    }

    let role = req.role.unwrap_or_default();

    match UserModel::create(app_state.db(), &req.username, &req.password, role).await {
        Ok(user) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                AuthResponse::for_user(user),
                "User registered successfully",
            )),
        ),
        Err(UserError::DuplicateUsername) => (
            StatusCode::CONFLICT,
            Json(ApiResponse::<AuthResponse>::error(
                "A user with this username already exists",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<AuthResponse>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// POST /auth/login
///
/// Authenticate an existing user and issue a JWT.
///
/// ### Request Body
/// ```json
/// {
///   "username": "ana",
///   "password": "strongpassword"
/// }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 1,
///     "username": "ana",
///     "role": "user",
///     "token": "jwt_token_here",
///     "expires_at": "2025-05-23T12:00:00Z"
///   },
///   "message": "Login successful"
/// }
/// ```
///
/// - `401 Unauthorized` (unknown username or wrong password)
/// - `500 Internal Server Error`
pub async fn login(
    State(app_state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<AuthResponse>::error(format_validation_errors(
                &validation_errors,
            ))),
        );
    }

    match UserModel::verify_credentials(app_state.db(), &req.username, &req.password).await {
        Ok(user) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                AuthResponse::for_user(user),
                "Login successful",
            )),
        ),
        Err(UserError::NotFound) => (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<AuthResponse>::error(
                "No account with that username",
            )),
        ),
        Err(UserError::InvalidCredentials) => (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<AuthResponse>::error("Invalid password")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<AuthResponse>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}
