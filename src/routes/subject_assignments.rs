use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::scheduling_dto::{CreateSubjectAssignmentPayload, SubjectAssignmentListQuery},
    error::Result,
    models::subject_assignment::SubjectAssignment,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/subject-assignments",
    params(
        ("teacherId" = Option<String>, Query, description = "Filter by teacher"),
        ("classId" = Option<String>, Query, description = "Filter by class"),
        ("subject" = Option<String>, Query, description = "Filter by subject")
    ),
    responses(
        (status = 200, description = "Subject assignments in insertion order", body = Vec<SubjectAssignment>)
    )
)]
#[axum::debug_handler]
pub async fn list_subject_assignments(
    State(state): State<AppState>,
    Query(query): Query<SubjectAssignmentListQuery>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.subject_assignment_service.list(query)))
}

#[utoipa::path(
    post,
    path = "/api/subject-assignments",
    request_body = CreateSubjectAssignmentPayload,
    responses(
        (status = 201, description = "Subject assignment created successfully", body = SubjectAssignment),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_subject_assignment(
    State(state): State<AppState>,
    Json(payload): Json<CreateSubjectAssignmentPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let assignment = state.subject_assignment_service.create(payload);
    Ok((StatusCode::CREATED, Json(assignment)))
}

#[utoipa::path(
    delete,
    path = "/api/subject-assignments/{id}",
    params(
        ("id" = Uuid, Path, description = "Subject assignment ID")
    ),
    responses(
        (status = 204, description = "Subject assignment deleted successfully"),
        (status = 404, description = "Subject assignment not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_subject_assignment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.subject_assignment_service.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
