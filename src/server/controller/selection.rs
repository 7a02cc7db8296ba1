use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DeletedDto, ErrorDto},
        selection::{AddSelectionDto, SelectedClassDto, SelectionDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::selection::SelectionService,
        state::AppState,
    },
};

pub static SELECTION_TAG: &str = "selection";

#[utoipa::path(
    post,
    path = "/addToSelected",
    tag = SELECTION_TAG,
    security(("bearer_auth" = [])),
    request_body = AddSelectionDto,
    responses(
        (status = 201, description = "Class added to the selection", body = SelectionDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not this student", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 409, description = "Class already selected or already paid for", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_to_selected(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<AddSelectionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Student, Permission::Owner(&payload.user_email)])
        .await?;

    let selection = SelectionService::new(&state.db)
        .add(&payload.user_email, payload.class_id)
        .await?;

    Ok((StatusCode::CREATED, Json(selection.into_dto())))
}

#[utoipa::path(
    get,
    path = "/getSelectedClasses/{userEmail}",
    tag = SELECTION_TAG,
    security(("bearer_auth" = [])),
    params(
        ("userEmail" = String, Path, description = "Student email, must match the caller")
    ),
    responses(
        (status = 200, description = "Selected classes with their details", body = Vec<SelectedClassDto>),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Token invalid or email belongs to someone else", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_selected_classes(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Owner(&user_email)])
        .await?;

    let selected = SelectionService::new(&state.db)
        .get_selected_classes(&user_email)
        .await?;

    let dto: Vec<SelectedClassDto> = selected.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Removes a class from the caller's own selection.
#[utoipa::path(
    delete,
    path = "/removeSelectedClass/{classId}",
    tag = SELECTION_TAG,
    security(("bearer_auth" = [])),
    params(
        ("classId" = i32, Path, description = "Class ID")
    ),
    responses(
        (status = 200, description = "Whether an entry was removed", body = DeletedDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_selected_class(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(class_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Student])
        .await?;

    let deleted = SelectionService::new(&state.db)
        .remove(&identity.email, class_id)
        .await?;

    Ok((StatusCode::OK, Json(DeletedDto { deleted })))
}
