use crate::helpers::app::{get_json_body, make_test_app};
use axum::{
    body::Body as AxumBody,
    http::{Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

fn json_request(uri: &str, body: serde_json::Value) -> Request<AxumBody> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(AxumBody::from(body.to_string()))
        .unwrap()
}

// --- POST /api/auth/register ---

#[tokio::test]
async fn test_register_success() {
    let (app, _app_state) = make_test_app().await;

    let req = json_request(
        "/api/auth/register",
        json!({"username": "ana", "password": "strongpassword"}),
    );

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = get_json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["username"], "ana");
    assert_eq!(body["data"]["role"], "user");
    assert!(!body["data"]["token"].as_str().unwrap().is_empty());
    assert!(!body["data"]["expires_at"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_register_with_admin_role() {
    let (app, _app_state) = make_test_app().await;

    let req = json_request(
        "/api/auth/register",
        json!({"username": "boss", "password": "strongpassword", "role": "admin"}),
    );

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = get_json_body(response).await;
    assert_eq!(body["data"]["role"], "admin");
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let (app, _app_state) = make_test_app().await;

    let first = json_request(
        "/api/auth/register",
        json!({"username": "ana", "password": "strongpassword"}),
    );
    let response = app.clone().oneshot(first).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let second = json_request(
        "/api/auth/register",
        json!({"username": "ana", "password": "otherpassword"}),
    );
    let response = app.oneshot(second).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = get_json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "A user with this username already exists");
}

#[tokio::test]
async fn test_register_validation_failure() {
    let (app, _app_state) = make_test_app().await;

    let req = json_request(
        "/api/auth/register",
        json!({"username": "ana", "password": "short"}),
    );

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = get_json_body(response).await;
    assert_eq!(body["success"], false);
}

// --- POST /api/auth/login ---

#[tokio::test]
async fn test_login_success() {
    let (app, _app_state) = make_test_app().await;

    let register = json_request(
        "/api/auth/register",
        json!({"username": "ana", "password": "strongpassword", "role": "admin"}),
    );
    app.clone().oneshot(register).await.unwrap();

    let login = json_request(
        "/api/auth/login",
        json!({"username": "ana", "password": "strongpassword"}),
    );
    let response = app.oneshot(login).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = get_json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["username"], "ana");
    assert_eq!(body["data"]["role"], "admin");
    assert!(!body["data"]["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let (app, _app_state) = make_test_app().await;

    let register = json_request(
        "/api/auth/register",
        json!({"username": "ana", "password": "strongpassword"}),
    );
    app.clone().oneshot(register).await.unwrap();

    let login = json_request(
        "/api/auth/login",
        json!({"username": "ana", "password": "wrongpassword"}),
    );
    let response = app.oneshot(login).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = get_json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid password");
}

#[tokio::test]
async fn test_login_unknown_username() {
    let (app, _app_state) = make_test_app().await;

    let login = json_request(
        "/api/auth/login",
        json!({"username": "nobody", "password": "whatever"}),
    );
    let response = app.oneshot(login).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = get_json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "No account with that username");
}
