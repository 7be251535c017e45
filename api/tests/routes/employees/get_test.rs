use crate::helpers::app::{get_json_body, make_test_app};
use crate::routes::employees::seed_roster;
use axum::{
    body::Body as AxumBody,
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;

fn get_request(uri: &str) -> Request<AxumBody> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(AxumBody::empty())
        .unwrap()
}

fn names(body: &Value) -> Vec<String> {
    body["data"]["employees"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap().to_string())
        .collect()
}

// --- GET /api/employees ---

#[tokio::test]
async fn test_list_defaults_to_first_page_sorted_by_name() {
    let (app, app_state) = make_test_app().await;
    seed_roster(app_state.db()).await;

    let response = app.oneshot(get_request("/api/employees")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = get_json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["total_count"], 5);
    assert_eq!(body["data"]["total_pages"], 1);
    assert_eq!(body["data"]["current_page"], 1);
    assert_eq!(names(&body), vec!["Ana", "Ben", "Cleo", "Dana", "Elio"]);
}

#[tokio::test]
async fn test_list_pagination_math() {
    let (app, app_state) = make_test_app().await;
    seed_roster(app_state.db()).await;

    let response = app
        .clone()
        .oneshot(get_request("/api/employees?page=2&limit=2"))
        .await
        .unwrap();
    let body = get_json_body(response).await;
    assert_eq!(body["data"]["total_count"], 5);
    assert_eq!(body["data"]["total_pages"], 3);
    assert_eq!(body["data"]["current_page"], 2);
    assert_eq!(names(&body), vec!["Cleo", "Dana"]);

    // Last page holds the remainder.
    let response = app
        .oneshot(get_request("/api/employees?page=3&limit=2"))
        .await
        .unwrap();
    let body = get_json_body(response).await;
    assert_eq!(names(&body), vec!["Elio"]);
}

#[tokio::test]
async fn test_list_page_beyond_end_is_empty_with_correct_metadata() {
    let (app, app_state) = make_test_app().await;
    seed_roster(app_state.db()).await;

    let response = app
        .oneshot(get_request("/api/employees?page=9&limit=2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = get_json_body(response).await;
    assert_eq!(body["data"]["employees"].as_array().unwrap().len(), 0);
    assert_eq!(body["data"]["total_count"], 5);
    assert_eq!(body["data"]["total_pages"], 3);
    assert_eq!(body["data"]["current_page"], 9);
}

#[tokio::test]
async fn test_list_class_filter_is_case_insensitive_substring() {
    let (app, app_state) = make_test_app().await;
    seed_roster(app_state.db()).await;

    let response = app
        .oneshot(get_request("/api/employees?class=a1"))
        .await
        .unwrap();
    let body = get_json_body(response).await;
    assert_eq!(body["data"]["total_count"], 2);
    assert_eq!(names(&body), vec!["Ana", "Cleo"]);
}

#[tokio::test]
async fn test_list_min_attendance_is_inclusive() {
    let (app, app_state) = make_test_app().await;
    seed_roster(app_state.db()).await;

    let response = app
        .oneshot(get_request("/api/employees?min_attendance=79.25"))
        .await
        .unwrap();
    let body = get_json_body(response).await;
    assert_eq!(body["data"]["total_count"], 3);
    assert_eq!(names(&body), vec!["Ana", "Cleo", "Elio"]);
}

#[tokio::test]
async fn test_list_query_searches_name_class_and_subjects() {
    let (app, app_state) = make_test_app().await;
    seed_roster(app_state.db()).await;

    // Matches Ana and Dana through their subject list only.
    let response = app
        .clone()
        .oneshot(get_request("/api/employees?query=MATH"))
        .await
        .unwrap();
    let body = get_json_body(response).await;
    assert_eq!(names(&body), vec!["Ana", "Dana"]);

    // Matches through the class field.
    let response = app
        .clone()
        .oneshot(get_request("/api/employees?query=c3"))
        .await
        .unwrap();
    let body = get_json_body(response).await;
    assert_eq!(names(&body), vec!["Dana"]);

    // Matches through the name.
    let response = app
        .oneshot(get_request("/api/employees?query=cleo"))
        .await
        .unwrap();
    let body = get_json_body(response).await;
    assert_eq!(names(&body), vec!["Cleo"]);
}

#[tokio::test]
async fn test_list_sort_descending_and_unknown_key() {
    let (app, app_state) = make_test_app().await;
    seed_roster(app_state.db()).await;

    let response = app
        .clone()
        .oneshot(get_request("/api/employees?sort_by=-age"))
        .await
        .unwrap();
    let body = get_json_body(response).await;
    assert_eq!(names(&body), vec!["Cleo", "Dana", "Ana", "Elio", "Ben"]);

    // Unknown sort keys fall back to ascending name.
    let response = app
        .oneshot(get_request("/api/employees?sort_by=-garbage"))
        .await
        .unwrap();
    let body = get_json_body(response).await;
    assert_eq!(names(&body), vec!["Ana", "Ben", "Cleo", "Dana", "Elio"]);
}

#[tokio::test]
async fn test_list_rejects_zero_limit() {
    let (app, _app_state) = make_test_app().await;

    let response = app
        .oneshot(get_request("/api/employees?limit=0"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// --- GET /api/employees/{id} ---

#[tokio::test]
async fn test_get_employee_by_id() {
    let (app, app_state) = make_test_app().await;
    let seeded = seed_roster(app_state.db()).await;

    let uri = format!("/api/employees/{}", seeded[0].id);
    let response = app.oneshot(get_request(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = get_json_body(response).await;
    assert_eq!(body["data"]["name"], "Ana");
    assert_eq!(body["data"]["employee_id"], 1001);
    assert_eq!(body["data"]["subjects"], serde_json::json!(["Math", "Physics"]));
}

#[tokio::test]
async fn test_get_employee_not_found() {
    let (app, _app_state) = make_test_app().await;

    let response = app
        .oneshot(get_request("/api/employees/99999"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = get_json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Employee not found");
}

// --- GET /api/employees/classes ---

#[tokio::test]
async fn test_unique_classes_sorted_without_duplicates() {
    let (app, app_state) = make_test_app().await;
    seed_roster(app_state.db()).await;

    let response = app
        .oneshot(get_request("/api/employees/classes"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = get_json_body(response).await;
    assert_eq!(body["data"], serde_json::json!(["A1", "B2", "C3"]));
}
