use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;
use uuid::Uuid;

use school_backend::{routes, store, AppState};

fn app() -> Router {
    let app_state = AppState::new(store::new_shared());
    Router::new()
        .route(
            "/api/classes",
            get(routes::classes::list_classes).post(routes::classes::create_class),
        )
        .route(
            "/api/classes/:id",
            get(routes::classes::get_class)
                .patch(routes::classes::update_class)
                .delete(routes::classes::delete_class),
        )
        .route(
            "/api/classes/:id/assign-teacher",
            post(routes::classes::assign_teacher),
        )
        .with_state(app_state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<JsonValue>) -> (StatusCode, JsonValue) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let value = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn class_crud_lifecycle() {
    let app = app();

    let (status, created) = send(
        &app,
        "POST",
        "/api/classes",
        Some(json!({ "name": "Grade 5B" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Grade 5B");
    assert!(created["teacherId"].is_null());
    let id = created["id"].as_str().unwrap().to_string();

    // Round-trip: read back equals input plus the generated id.
    let (status, fetched) = send(&app, "GET", &format!("/api/classes/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = send(
        &app,
        "PATCH",
        &format!("/api/classes/{}", id),
        Some(json!({ "teacherName": "Ms. Adams" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Grade 5B");
    assert_eq!(updated["teacherName"], "Ms. Adams");

    let (status, _) = send(&app, "DELETE", &format!("/api/classes/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", &format!("/api/classes/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn classes_list_sorted_by_name() {
    let app = app();
    for name in ["Grade 3C", "Grade 1A", "Grade 2B"] {
        let (status, _) = send(&app, "POST", "/api/classes", Some(json!({ "name": name }))).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, listed) = send(&app, "GET", "/api/classes", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Grade 1A", "Grade 2B", "Grade 3C"]);
}

#[tokio::test]
async fn classes_filter_by_teacher() {
    let app = app();
    let (_, a) = send(
        &app,
        "POST",
        "/api/classes",
        Some(json!({ "name": "Grade 1A", "teacherId": "t1", "teacherName": "Ms. Adams" })),
    )
    .await;
    send(
        &app,
        "POST",
        "/api/classes",
        Some(json!({ "name": "Grade 2B", "teacherId": "t2", "teacherName": "Mr. Brown" })),
    )
    .await;

    let (status, listed) = send(&app, "GET", "/api/classes?teacherId=t1", None).await;
    assert_eq!(status, StatusCode::OK);
    let listed = listed.as_array().unwrap().clone();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], a["id"]);
}

#[tokio::test]
async fn assign_teacher_sets_both_fields() {
    let app = app();
    let (_, created) = send(&app, "POST", "/api/classes", Some(json!({ "name": "Grade 4A" }))).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, updated) = send(
        &app,
        "POST",
        &format!("/api/classes/{}/assign-teacher", id),
        Some(json!({ "teacherId": "t9", "teacherName": "Mr. Cole" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["teacherId"], "t9");
    assert_eq!(updated["teacherName"], "Mr. Cole");

    // Empty teacher fields are rejected before the store is touched.
    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/classes/{}/assign-teacher", id),
        Some(json!({ "teacherId": "", "teacherName": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body["errors"].as_array().unwrap().is_empty());

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/classes/{}/assign-teacher", Uuid::new_v4()),
        Some(json!({ "teacherId": "t9", "teacherName": "Mr. Cole" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn mutating_a_missing_class_fails_with_not_found() {
    let app = app();
    let missing = Uuid::new_v4();

    let (status, _) = send(&app, "DELETE", &format!("/api/classes/{}", missing), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/api/classes/{}", missing),
        Some(json!({ "name": "Renamed" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_class_rejects_empty_name() {
    let app = app();
    let (status, body) = send(&app, "POST", "/api/classes", Some(json!({ "name": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors[0]["field"], "name");

    let (_, listed) = send(&app, "GET", "/api/classes", None).await;
    assert!(listed.as_array().unwrap().is_empty());
}
