use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::scheduling_dto::{
        AssignTeacherPayload, ClassListQuery, CreateClassPayload, UpdateClassPayload,
    },
    error::Result,
    models::class::Class,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/classes",
    params(
        ("teacherId" = Option<String>, Query, description = "Filter by teacher")
    ),
    responses(
        (status = 200, description = "Classes sorted by name", body = Vec<Class>)
    )
)]
#[axum::debug_handler]
pub async fn list_classes(
    State(state): State<AppState>,
    Query(query): Query<ClassListQuery>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.class_service.list(query)))
}

#[utoipa::path(
    post,
    path = "/api/classes",
    request_body = CreateClassPayload,
    responses(
        (status = 201, description = "Class created successfully", body = Class),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_class(
    State(state): State<AppState>,
    Json(payload): Json<CreateClassPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let class = state.class_service.create(payload);
    Ok((StatusCode::CREATED, Json(class)))
}

#[utoipa::path(
    get,
    path = "/api/classes/{id}",
    params(
        ("id" = Uuid, Path, description = "Class ID")
    ),
    responses(
        (status = 200, description = "Class found", body = Class),
        (status = 404, description = "Class not found")
    )
)]
#[axum::debug_handler]
pub async fn get_class(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let class = state.class_service.get_by_id(id)?;
    Ok(Json(class))
}

#[utoipa::path(
    patch,
    path = "/api/classes/{id}",
    params(
        ("id" = Uuid, Path, description = "Class ID")
    ),
    request_body = UpdateClassPayload,
    responses(
        (status = 200, description = "Class updated successfully", body = Class),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Class not found")
    )
)]
#[axum::debug_handler]
pub async fn update_class(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateClassPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let class = state.class_service.update(id, payload)?;
    Ok(Json(class))
}

#[utoipa::path(
    post,
    path = "/api/classes/{id}/assign-teacher",
    params(
        ("id" = Uuid, Path, description = "Class ID")
    ),
    request_body = AssignTeacherPayload,
    responses(
        (status = 200, description = "Teacher assigned", body = Class),
        (status = 400, description = "Missing teacher fields"),
        (status = 404, description = "Class not found")
    )
)]
#[axum::debug_handler]
pub async fn assign_teacher(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AssignTeacherPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let class = state
        .class_service
        .assign_teacher(id, payload.teacher_id, payload.teacher_name)?;
    Ok(Json(class))
}

#[utoipa::path(
    delete,
    path = "/api/classes/{id}",
    params(
        ("id" = Uuid, Path, description = "Class ID")
    ),
    responses(
        (status = 204, description = "Class deleted successfully"),
        (status = 404, description = "Class not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_class(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.class_service.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
