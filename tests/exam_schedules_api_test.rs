use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::get,
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
            "/api/exam-schedules",
            get(routes::exam_schedules::list_exam_schedules)
                .post(routes::exam_schedules::create_exam_schedule),
        )
        .route(
            "/api/exam-schedules/:id",
            axum::routing::patch(routes::exam_schedules::update_exam_schedule)
                .delete(routes::exam_schedules::delete_exam_schedule),
        )
        .route(
            "/api/subject-assignments",
            get(routes::subject_assignments::list_subject_assignments)
                .post(routes::subject_assignments::create_subject_assignment),
        )
        .route(
            "/api/subject-assignments/:id",
            axum::routing::delete(routes::subject_assignments::delete_subject_assignment),
        )
        .route(
            "/api/assignment-submissions",
            get(routes::submissions::list_submissions)
                .post(routes::submissions::create_submission),
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

fn exam(class_id: &str, subject: &str, date: &str) -> JsonValue {
    json!({
        "classId": class_id,
        "subject": subject,
        "examType": "final",
        "date": date
    })
}

#[tokio::test]
async fn exam_schedules_are_director_authored_and_date_ordered() {
    let app = app();

    let (status, created) = send(&app, "POST", "/api/exam-schedules", Some(exam("c1", "Math", "2025-06-10"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["createdBy"], "Director");

    send(&app, "POST", "/api/exam-schedules", Some(exam("c1", "Science", "2025-05-20"))).await;
    send(&app, "POST", "/api/exam-schedules", Some(exam("c2", "Math", "2025-06-01"))).await;

    let (_, listed) = send(&app, "GET", "/api/exam-schedules", None).await;
    let dates: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2025-05-20", "2025-06-01", "2025-06-10"]);

    let (_, filtered) = send(&app, "GET", "/api/exam-schedules?classId=c1", None).await;
    assert_eq!(filtered.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn exam_schedule_update_merges_and_keeps_author() {
    let app = app();
    let (_, created) = send(&app, "POST", "/api/exam-schedules", Some(exam("c1", "Math", "2025-06-10"))).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, updated) = send(
        &app,
        "PATCH",
        &format!("/api/exam-schedules/{}", id),
        Some(json!({ "date": "2025-06-12" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["date"], "2025-06-12");
    assert_eq!(updated["subject"], "Math");
    assert_eq!(updated["createdBy"], "Director");

    let (status, _) = send(&app, "DELETE", &format!("/api/exam-schedules/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "DELETE", &format!("/api/exam-schedules/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn subject_assignments_keep_insertion_order_and_delete_by_id() {
    let app = app();

    let (_, first) = send(
        &app,
        "POST",
        "/api/subject-assignments",
        Some(json!({ "teacherId": "t1", "subject": "Math", "classId": "c1" })),
    )
    .await;
    let (_, second) = send(
        &app,
        "POST",
        "/api/subject-assignments",
        Some(json!({ "teacherId": "t2", "subject": "Science", "classId": "c1" })),
    )
    .await;

    let (_, listed) = send(&app, "GET", "/api/subject-assignments", None).await;
    let listed = listed.as_array().unwrap().clone();
    assert_eq!(listed[0]["id"], first["id"]);
    assert_eq!(listed[1]["id"], second["id"]);

    let (_, filtered) = send(&app, "GET", "/api/subject-assignments?teacherId=t2&classId=c1", None).await;
    assert_eq!(filtered.as_array().unwrap().len(), 1);

    let id = first["id"].as_str().unwrap();
    let (status, _) = send(&app, "DELETE", &format!("/api/subject-assignments/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/subject-assignments/{}", Uuid::new_v4()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn submissions_get_server_timestamps_and_sort_newest_first() {
    let app = app();

    let submission = |student: &str| {
        json!({
            "studentId": student,
            "assignmentId": "a1",
            "teacherId": "t1",
            "subject": "Math"
        })
    };

    let (status, first) = send(&app, "POST", "/api/assignment-submissions", Some(submission("s1"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(first["submittedAt"].is_string());

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let (_, second) = send(&app, "POST", "/api/assignment-submissions", Some(submission("s2"))).await;

    let (_, listed) = send(&app, "GET", "/api/assignment-submissions", None).await;
    let listed = listed.as_array().unwrap().clone();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["id"], second["id"]);
    assert_eq!(listed[1]["id"], first["id"]);

    let (_, filtered) = send(&app, "GET", "/api/assignment-submissions?studentId=s1", None).await;
    let filtered = filtered.as_array().unwrap().clone();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["id"], first["id"]);
}
