use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::academics_dto::{CreateSubmissionPayload, SubmissionListQuery},
    error::Result,
    models::submission::AssignmentSubmission,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/assignment-submissions",
    params(
        ("studentId" = Option<String>, Query, description = "Filter by student"),
        ("teacherId" = Option<String>, Query, description = "Filter by teacher"),
        ("assignmentId" = Option<String>, Query, description = "Filter by assignment"),
        ("subject" = Option<String>, Query, description = "Filter by subject")
    ),
    responses(
        (status = 200, description = "Assignment submissions, most recent first", body = Vec<AssignmentSubmission>)
    )
)]
#[axum::debug_handler]
pub async fn list_submissions(
    State(state): State<AppState>,
    Query(query): Query<SubmissionListQuery>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.submission_service.list(query)))
}

#[utoipa::path(
    post,
    path = "/api/assignment-submissions",
    request_body = CreateSubmissionPayload,
    responses(
        (status = 201, description = "Submission recorded with the server timestamp", body = AssignmentSubmission),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_submission(
    State(state): State<AppState>,
    Json(payload): Json<CreateSubmissionPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let submission = state.submission_service.create(payload);
    Ok((StatusCode::CREATED, Json(submission)))
}
