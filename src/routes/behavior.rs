use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::academics_dto::CreateBehaviorPayload, error::Result, models::behavior::BehaviorRecord,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/behavior",
    responses(
        (status = 200, description = "Behavior records, most recent first", body = Vec<BehaviorRecord>)
    )
)]
#[axum::debug_handler]
pub async fn list_behavior_records(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.behavior_service.list()))
}

#[utoipa::path(
    post,
    path = "/api/behavior",
    request_body = CreateBehaviorPayload,
    responses(
        (status = 201, description = "Behavior record created successfully", body = BehaviorRecord),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_behavior_record(
    State(state): State<AppState>,
    Json(payload): Json<CreateBehaviorPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let record = state.behavior_service.create(payload);
    Ok((StatusCode::CREATED, Json(record)))
}
