use crate::helpers::app::{admin_token, get_json_body, make_test_app, user_token};
use axum::{
    body::Body as AxumBody,
    http::{Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

fn create_request(token: Option<&str>, body: serde_json::Value) -> Request<AxumBody> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/employees")
        .header("Content-Type", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    builder.body(AxumBody::from(body.to_string())).unwrap()
}

fn sample_body() -> serde_json::Value {
    json!({
        "name": "Ana",
        "age": 30,
        "class": "A1",
        "subjects": ["Math"],
        "attendance": 92.5
    })
}

#[tokio::test]
async fn test_create_employee_requires_authentication() {
    let (app, _app_state) = make_test_app().await;

    let response = app.oneshot(create_request(None, sample_body())).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_employee_invalid_token_behaves_like_absent() {
    let (app, _app_state) = make_test_app().await;

    let response = app
        .oneshot(create_request(Some("not.a.token"), sample_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_employee_forbidden_for_non_admin() {
    let (app, app_state) = make_test_app().await;
    let token = user_token(&app_state).await;

    let response = app
        .oneshot(create_request(Some(&token), sample_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_employee_assigns_sequential_numbers() {
    let (app, app_state) = make_test_app().await;
    let token = admin_token(&app_state).await;

    let response = app
        .clone()
        .oneshot(create_request(Some(&token), sample_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = get_json_body(response).await;
    assert_eq!(body["data"]["employee_id"], 1001);

    let response = app
        .oneshot(create_request(
            Some(&token),
            json!({
                "name": "Ben",
                "age": 24,
                "class": "B2",
                "subjects": [],
                "attendance": 71.0
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = get_json_body(response).await;
    assert_eq!(body["data"]["employee_id"], 1002);
}

#[tokio::test]
async fn test_create_then_fetch_round_trip() {
    let (app, app_state) = make_test_app().await;
    let token = admin_token(&app_state).await;

    let response = app
        .clone()
        .oneshot(create_request(Some(&token), sample_body()))
        .await
        .unwrap();
    let created = get_json_body(response).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!("/api/employees/{}", id))
                .body(AxumBody::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = get_json_body(response).await;
    assert_eq!(fetched["data"]["name"], "Ana");
    assert_eq!(fetched["data"]["age"], 30);
    assert_eq!(fetched["data"]["class"], "A1");
    assert_eq!(fetched["data"]["subjects"], json!(["Math"]));
    assert_eq!(fetched["data"]["attendance"], 92.5);
    assert!(fetched["data"]["id"].as_i64().unwrap() > 0);
    assert_eq!(fetched["data"]["employee_id"], 1001);
}

#[tokio::test]
async fn test_create_employee_validation_failure() {
    let (app, app_state) = make_test_app().await;
    let token = admin_token(&app_state).await;

    let response = app
        .oneshot(create_request(
            Some(&token),
            json!({
                "name": "",
                "age": 30,
                "class": "A1",
                "subjects": [],
                "attendance": 92.5
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
