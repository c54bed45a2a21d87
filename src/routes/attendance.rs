use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::NaiveDate;
use validator::Validate;

use crate::{
    dto::attendance_dto::{AttendanceQuery, CreateAttendancePayload},
    error::{Error, Result},
    models::attendance::AttendanceRecord,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/attendance",
    params(
        ("classId" = String, Query, description = "Class ID"),
        ("date" = String, Query, description = "ISO calendar date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Attendance record found", body = AttendanceRecord),
        (status = 400, description = "Missing or invalid query parameters"),
        (status = 404, description = "No attendance saved for that class and date")
    )
)]
#[axum::debug_handler]
pub async fn get_attendance(
    State(state): State<AppState>,
    Query(query): Query<AttendanceQuery>,
) -> Result<impl IntoResponse> {
    let (class_id, raw_date) = match (query.class_id, query.date) {
        (Some(class_id), Some(date)) => (class_id, date),
        _ => {
            return Err(Error::BadRequest(
                "classId and date query parameters are required".to_string(),
            ))
        }
    };
    let date: NaiveDate = raw_date
        .parse()
        .map_err(|_| Error::BadRequest(format!("Invalid date: {}", raw_date)))?;
    let record = state.attendance_service.for_class_date(&class_id, date)?;
    Ok(Json(record))
}

#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = CreateAttendancePayload,
    responses(
        (status = 201, description = "Attendance saved (overwrites any prior record for the class and date)", body = AttendanceRecord),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn save_attendance(
    State(state): State<AppState>,
    Json(payload): Json<CreateAttendancePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let record = state.attendance_service.save(payload);
    Ok((StatusCode::CREATED, Json(record)))
}
