use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::scheduling_dto::{
        CreateExamSchedulePayload, ExamScheduleListQuery, UpdateExamSchedulePayload,
    },
    error::Result,
    models::exam_schedule::ExamSchedule,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/exam-schedules",
    params(
        ("classId" = Option<String>, Query, description = "Filter by class"),
        ("examType" = Option<String>, Query, description = "Filter by exam type")
    ),
    responses(
        (status = 200, description = "Exam schedules, soonest first", body = Vec<ExamSchedule>)
    )
)]
#[axum::debug_handler]
pub async fn list_exam_schedules(
    State(state): State<AppState>,
    Query(query): Query<ExamScheduleListQuery>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.exam_schedule_service.list(query)))
}

#[utoipa::path(
    post,
    path = "/api/exam-schedules",
    request_body = CreateExamSchedulePayload,
    responses(
        (status = 201, description = "Exam schedule created successfully", body = ExamSchedule),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_exam_schedule(
    State(state): State<AppState>,
    Json(payload): Json<CreateExamSchedulePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let schedule = state.exam_schedule_service.create(payload);
    Ok((StatusCode::CREATED, Json(schedule)))
}

#[utoipa::path(
    patch,
    path = "/api/exam-schedules/{id}",
    params(
        ("id" = Uuid, Path, description = "Exam schedule ID")
    ),
    request_body = UpdateExamSchedulePayload,
    responses(
        (status = 200, description = "Exam schedule updated successfully", body = ExamSchedule),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Exam schedule not found")
    )
)]
#[axum::debug_handler]
pub async fn update_exam_schedule(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateExamSchedulePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let schedule = state.exam_schedule_service.update(id, payload)?;
    Ok(Json(schedule))
}

#[utoipa::path(
    delete,
    path = "/api/exam-schedules/{id}",
    params(
        ("id" = Uuid, Path, description = "Exam schedule ID")
    ),
    responses(
        (status = 204, description = "Exam schedule deleted successfully"),
        (status = 404, description = "Exam schedule not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_exam_schedule(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.exam_schedule_service.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
