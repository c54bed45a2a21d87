use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::scheduling_dto::{CreateTimetablePayload, TimetableListQuery, UpdateTimetablePayload},
    error::Result,
    models::timetable::TimetableEntry,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/timetable",
    params(
        ("classId" = Option<String>, Query, description = "Filter by class"),
        ("teacherId" = Option<String>, Query, description = "Filter by teacher"),
        ("day" = Option<String>, Query, description = "Filter by weekday")
    ),
    responses(
        (status = 200, description = "Timetable entries in weekday then start-time order", body = Vec<TimetableEntry>)
    )
)]
#[axum::debug_handler]
pub async fn list_timetable(
    State(state): State<AppState>,
    Query(query): Query<TimetableListQuery>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.timetable_service.list(query)))
}

#[utoipa::path(
    post,
    path = "/api/timetable",
    request_body = CreateTimetablePayload,
    responses(
        (status = 201, description = "Timetable entry created successfully", body = TimetableEntry),
        (status = 400, description = "Invalid payload or unknown weekday")
    )
)]
#[axum::debug_handler]
pub async fn create_timetable_entry(
    State(state): State<AppState>,
    Json(payload): Json<CreateTimetablePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let entry = state.timetable_service.create(payload)?;
    Ok((StatusCode::CREATED, Json(entry)))
}

#[utoipa::path(
    patch,
    path = "/api/timetable/{id}",
    params(
        ("id" = Uuid, Path, description = "Timetable entry ID")
    ),
    request_body = UpdateTimetablePayload,
    responses(
        (status = 200, description = "Timetable entry updated successfully", body = TimetableEntry),
        (status = 400, description = "Invalid payload or unknown weekday"),
        (status = 404, description = "Timetable entry not found")
    )
)]
#[axum::debug_handler]
pub async fn update_timetable_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTimetablePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let entry = state.timetable_service.update(id, payload)?;
    Ok(Json(entry))
}

#[utoipa::path(
    delete,
    path = "/api/timetable/{id}",
    params(
        ("id" = Uuid, Path, description = "Timetable entry ID")
    ),
    responses(
        (status = 204, description = "Timetable entry deleted successfully"),
        (status = 404, description = "Timetable entry not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_timetable_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.timetable_service.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
