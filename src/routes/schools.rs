use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{dto::directory_dto::CreateSchoolPayload, error::Result, models::school::School, AppState};

#[utoipa::path(
    get,
    path = "/api/schools",
    responses(
        (status = 200, description = "List of schools", body = Vec<School>)
    )
)]
#[axum::debug_handler]
pub async fn list_schools(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.school_service.list()))
}

#[utoipa::path(
    post,
    path = "/api/schools",
    request_body = CreateSchoolPayload,
    responses(
        (status = 201, description = "School created successfully", body = School),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_school(
    State(state): State<AppState>,
    Json(payload): Json<CreateSchoolPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let school = state.school_service.create(payload);
    Ok((StatusCode::CREATED, Json(school)))
}
