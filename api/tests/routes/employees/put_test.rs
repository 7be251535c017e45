use crate::helpers::app::{admin_token, get_json_body, make_test_app, user_token};
use crate::routes::employees::seed_roster;
use axum::{
    body::Body as AxumBody,
    http::{Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

fn update_request(id: i64, token: Option<&str>, body: serde_json::Value) -> Request<AxumBody> {
    let mut builder = Request::builder()
        .method("PUT")
        .uri(format!("/api/employees/{}", id))
        .header("Content-Type", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    builder.body(AxumBody::from(body.to_string())).unwrap()
}

#[tokio::test]
async fn test_update_employee_requires_authentication() {
    let (app, app_state) = make_test_app().await;
    let seeded = seed_roster(app_state.db()).await;

    let response = app
        .oneshot(update_request(seeded[0].id, None, json!({"age": 31})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_employee_forbidden_for_non_admin() {
    let (app, app_state) = make_test_app().await;
    let seeded = seed_roster(app_state.db()).await;
    let token = user_token(&app_state).await;

    let response = app
        .oneshot(update_request(seeded[0].id, Some(&token), json!({"age": 31})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_update_employee_not_found() {
    let (app, app_state) = make_test_app().await;
    let token = admin_token(&app_state).await;

    let response = app
        .oneshot(update_request(99999, Some(&token), json!({"age": 31})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = get_json_body(response).await;
    assert_eq!(body["message"], "Employee not found");
}

#[tokio::test]
async fn test_update_attendance_only_leaves_other_fields_untouched() {
    let (app, app_state) = make_test_app().await;
    let seeded = seed_roster(app_state.db()).await;
    let token = admin_token(&app_state).await;

    let response = app
        .oneshot(update_request(
            seeded[0].id,
            Some(&token),
            json!({"attendance": 50.0}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = get_json_body(response).await;
    assert_eq!(body["data"]["attendance"], 50.0);
    assert_eq!(body["data"]["name"], "Ana");
    assert_eq!(body["data"]["age"], 30);
    assert_eq!(body["data"]["class"], "A1");
    assert_eq!(body["data"]["subjects"], json!(["Math", "Physics"]));
    assert_eq!(body["data"]["employee_id"], 1001);
}

#[tokio::test]
async fn test_update_employee_rejects_empty_body() {
    let (app, app_state) = make_test_app().await;
    let seeded = seed_roster(app_state.db()).await;
    let token = admin_token(&app_state).await;

    let response = app
        .oneshot(update_request(seeded[0].id, Some(&token), json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = get_json_body(response).await;
    assert_eq!(body["message"], "At least one field must be provided");
}
