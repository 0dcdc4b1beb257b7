//! Employee API integration tests
//!
//! Drives the full router against a throwaway embedded database, covering
//! both route families and the validation / not-found / malformed-id paths.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use roster_server::core::{Config, ServerState, build_app};

/// Build a router backed by a fresh database in a temp directory.
/// The TempDir must stay alive for the duration of the test.
async fn test_app() -> (tempfile::TempDir, Router) {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = Config::with_overrides(tmp.path().to_string_lossy(), 0);
    let state = ServerState::initialize(&config).await;
    (tmp, build_app().with_state(state))
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn delete_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn ann() -> Value {
    json!({
        "name": "Ann",
        "position": "Eng",
        "location": "NY",
        "salary": 1000
    })
}

/// POST an employee through the canonical route and return its id.
async fn create_employee(app: &Router, payload: &Value) -> String {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/employees", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json(response).await;
    body["data"]["id"].as_str().expect("id in response").to_string()
}

#[tokio::test]
async fn create_returns_persisted_record_with_trimmed_fields() {
    let (_tmp, app) = test_app().await;

    let payload = json!({
        "name": "  Ann  ",
        "position": " Eng ",
        "location": " NY ",
        "salary": 1000
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/employees", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Employee created successfully"));
    assert_eq!(body["data"]["name"], json!("Ann"));
    assert_eq!(body["data"]["position"], json!("Eng"));
    assert_eq!(body["data"]["location"], json!("NY"));
    assert_eq!(body["data"]["salary"].as_f64(), Some(1000.0));
    assert!(
        body["data"]["id"]
            .as_str()
            .is_some_and(|id| id.starts_with("employee:"))
    );
    assert!(body["data"]["dateOfJoining"].is_string());
    assert!(body["data"]["createdAt"].is_string());
    assert!(body["data"]["updatedAt"].is_string());
}

#[tokio::test]
async fn create_missing_fields_rejected_and_nothing_persisted() {
    let (_tmp, app) = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/employees", &json!({"name": "Ann"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["success"], json!(false));
    let errors: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e.as_str().unwrap())
        .collect();
    assert!(errors.contains(&"position is required"));
    assert!(errors.contains(&"location is required"));
    assert!(errors.contains(&"salary is required"));

    let response = app.clone().oneshot(get_request("/api/employees")).await.unwrap();
    let body = read_json(response).await;
    assert_eq!(body["count"], json!(0));
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn create_negative_salary_rejected() {
    let (_tmp, app) = test_app().await;

    let mut payload = ann();
    payload["salary"] = json!(-5);
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/employees", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn create_honors_explicit_date_of_joining() {
    let (_tmp, app) = test_app().await;

    let mut payload = ann();
    payload["dateOfJoining"] = json!("2024-01-15T09:00:00Z");
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/employees", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json(response).await;
    assert!(
        body["data"]["dateOfJoining"]
            .as_str()
            .is_some_and(|d| d.starts_with("2024-01-15"))
    );
}

#[tokio::test]
async fn fetch_by_id_returns_enveloped_record() {
    let (_tmp, app) = test_app().await;
    let id = create_employee(&app, &ann()).await;

    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/employees/{id}")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["id"], json!(id));
    assert_eq!(body["data"]["name"], json!("Ann"));
}

#[tokio::test]
async fn update_salary_only_preserves_other_fields() {
    let (_tmp, app) = test_app().await;
    let id = create_employee(&app, &ann()).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/employees/{id}"),
            &json!({"salary": 1500}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["data"]["name"], json!("Ann"));
    assert_eq!(body["data"]["position"], json!("Eng"));
    assert_eq!(body["data"]["location"], json!("NY"));
    assert_eq!(body["data"]["salary"].as_f64(), Some(1500.0));
}

#[tokio::test]
async fn update_rejects_blank_name() {
    let (_tmp, app) = test_app().await;
    let id = create_employee(&app, &ann()).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/employees/{id}"),
            &json!({"name": "   "}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_unknown_id_returns_not_found() {
    let (_tmp, app) = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/employees/employee:doesnotexist",
            &json!({"salary": 1}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn fetch_unknown_id_returns_not_found() {
    let (_tmp, app) = test_app().await;

    let response = app
        .clone()
        .oneshot(get_request("/api/employees/employee:doesnotexist"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json(response).await;
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn fetch_malformed_id_returns_bad_request() {
    let (_tmp, app) = test_app().await;

    let response = app
        .clone()
        .oneshot(get_request("/api/employees/not-a-valid-id"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_then_fetch_returns_not_found() {
    let (_tmp, app) = test_app().await;
    let id = create_employee(&app, &ann()).await;

    let response = app
        .clone()
        .oneshot(delete_request(&format!("/api/employees/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["data"]["name"], json!("Ann"));

    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/employees/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_is_sorted_newest_first() {
    let (_tmp, app) = test_app().await;

    for name in ["First", "Second", "Third"] {
        let mut payload = ann();
        payload["name"] = json!(name);
        create_employee(&app, &payload).await;
    }

    let response = app.clone().oneshot(get_request("/api/employees")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["count"], json!(3));
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Third", "Second", "First"]);
}

#[tokio::test]
async fn alias_routes_return_bare_shapes() {
    let (_tmp, app) = test_app().await;

    // POST returns the bare record, no envelope
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/employeelist", &ann()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = read_json(response).await;
    assert!(created.get("success").is_none());
    assert_eq!(created["name"], json!("Ann"));
    let id = created["id"].as_str().unwrap().to_string();

    // GET list returns a bare array
    let response = app
        .clone()
        .oneshot(get_request("/api/employeelist"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed = read_json(response).await;
    assert_eq!(listed.as_array().map(|a| a.len()), Some(1));

    // PUT carries the id in the body
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/employeelist",
            &json!({"id": id, "salary": 2000}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = read_json(response).await;
    assert_eq!(updated["name"], json!("Ann"));
    assert_eq!(updated["salary"].as_f64(), Some(2000.0));

    // DELETE returns the bare deleted record
    let response = app
        .clone()
        .oneshot(delete_request(&format!("/api/employeelist/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let deleted = read_json(response).await;
    assert_eq!(deleted["name"], json!("Ann"));

    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/employeelist/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn alias_update_without_id_rejected() {
    let (_tmp, app) = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/api/employeelist", &json!({"salary": 1})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["message"], json!("id is required"));
}

#[tokio::test]
async fn health_reports_healthy_database() {
    let (_tmp, app) = test_app().await;

    let response = app.clone().oneshot(get_request("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["database"]["status"], json!("ok"));
    assert_eq!(body["version"], json!(env!("CARGO_PKG_VERSION")));
}
