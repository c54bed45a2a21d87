use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::directory_dto::CreateAdminUserPayload, error::Result, models::admin_user::AdminUser,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/admin/users",
    responses(
        (status = 200, description = "List of admin users", body = Vec<AdminUser>)
    )
)]
#[axum::debug_handler]
pub async fn list_admin_users(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.admin_user_service.list()))
}

#[utoipa::path(
    post,
    path = "/api/admin/users",
    request_body = CreateAdminUserPayload,
    responses(
        (status = 201, description = "Admin user created successfully", body = AdminUser),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_admin_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateAdminUserPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state.admin_user_service.create(payload);
    Ok((StatusCode::CREATED, Json(user)))
}
