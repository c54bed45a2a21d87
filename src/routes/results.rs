use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::academics_dto::{CreateResultPayload, ResultListQuery},
    error::Result,
    models::result::StudentResult,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/student-results",
    params(
        ("studentId" = Option<String>, Query, description = "Filter by student"),
        ("subject" = Option<String>, Query, description = "Filter by subject"),
        ("assessmentType" = Option<String>, Query, description = "Filter by assessment type")
    ),
    responses(
        (status = 200, description = "Student results, most recent first", body = Vec<StudentResult>)
    )
)]
#[axum::debug_handler]
pub async fn list_results(
    State(state): State<AppState>,
    Query(query): Query<ResultListQuery>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.result_service.list(query)))
}

#[utoipa::path(
    post,
    path = "/api/student-results",
    request_body = CreateResultPayload,
    responses(
        (status = 201, description = "Result created with its derived grade", body = StudentResult),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_result(
    State(state): State<AppState>,
    Json(payload): Json<CreateResultPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let result = state.result_service.create(payload);
    Ok((StatusCode::CREATED, Json(result)))
}
