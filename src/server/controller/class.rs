use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{DeletedDto, ErrorDto},
        class::{ClassDto, CreateClassDto, UpdateClassInfoDto, UpdateClassStatusDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::class::{CreateClassParam, UpdateClassInfoParam, UpdateClassStatusParam},
        service::class::{class_not_found, ClassService, DEFAULT_POPULAR_LIMIT},
        state::AppState,
    },
};

pub static CLASS_TAG: &str = "class";

#[derive(Deserialize)]
pub struct PopularQuery {
    pub limit: Option<u64>,
}

#[utoipa::path(
    get,
    path = "/classes",
    tag = CLASS_TAG,
    responses(
        (status = 200, description = "Approved classes", body = Vec<ClassDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_approved_classes(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let classes = ClassService::new(&state.db).get_approved().await?;

    let dto: Vec<ClassDto> = classes.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/all-classes",
    tag = CLASS_TAG,
    responses(
        (status = 200, description = "Every class regardless of status", body = Vec<ClassDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_classes(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let classes = ClassService::new(&state.db).get_all().await?;

    let dto: Vec<ClassDto> = classes.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/popularClasses",
    tag = CLASS_TAG,
    params(
        ("limit" = Option<u64>, Query, description = "Maximum number of classes (default: 6, capped at 50)")
    ),
    responses(
        (status = 200, description = "Approved classes ordered by enrollment", body = Vec<ClassDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_popular_classes(
    State(state): State<AppState>,
    Query(query): Query<PopularQuery>,
) -> Result<impl IntoResponse, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_POPULAR_LIMIT);

    let classes = ClassService::new(&state.db).get_popular(limit).await?;

    let dto: Vec<ClassDto> = classes.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/singleClass/{classId}",
    tag = CLASS_TAG,
    params(
        ("classId" = i32, Path, description = "Class ID")
    ),
    responses(
        (status = 200, description = "The class", body = ClassDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_class(
    State(state): State<AppState>,
    Path(class_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let class = ClassService::new(&state.db)
        .get_by_id(class_id)
        .await?
        .ok_or_else(|| class_not_found(class_id))?;

    Ok((StatusCode::OK, Json(class.into_dto())))
}

#[utoipa::path(
    get,
    path = "/instructorsClasses/{instructorEmail}",
    tag = CLASS_TAG,
    security(("bearer_auth" = [])),
    params(
        ("instructorEmail" = String, Path, description = "Instructor email, must match the caller")
    ),
    responses(
        (status = 200, description = "Classes created by the instructor", body = Vec<ClassDto>),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Token invalid or email belongs to someone else", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_instructor_classes(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(instructor_email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Owner(&instructor_email)])
        .await?;

    let classes = ClassService::new(&state.db)
        .get_by_instructor(&instructor_email)
        .await?;

    let dto: Vec<ClassDto> = classes.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    post,
    path = "/addNewClass",
    tag = CLASS_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateClassDto,
    responses(
        (status = 201, description = "Class created and awaiting review", body = ClassDto),
        (status = 400, description = "Invalid class data", body = ErrorDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an instructor", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_class(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateClassDto>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Instructor])
        .await?;

    let Some(instructor) = identity.user else {
        return Err(AuthError::UserNotInDatabase(identity.email).into());
    };

    let class = ClassService::new(&state.db)
        .create(CreateClassParam::from_dto(
            instructor.name,
            instructor.email,
            payload,
        ))
        .await?;

    Ok((StatusCode::CREATED, Json(class.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/deleteClass/{classId}",
    tag = CLASS_TAG,
    security(("bearer_auth" = [])),
    params(
        ("classId" = i32, Path, description = "Class ID")
    ),
    responses(
        (status = 200, description = "Class deleted", body = DeletedDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not the owning instructor", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_class(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(class_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Instructor])
        .await?;

    ClassService::new(&state.db)
        .delete(class_id, &identity.email)
        .await?;

    Ok((StatusCode::OK, Json(DeletedDto { deleted: true })))
}

#[utoipa::path(
    patch,
    path = "/updateStatus/{classId}",
    tag = CLASS_TAG,
    security(("bearer_auth" = [])),
    params(
        ("classId" = i32, Path, description = "Class ID")
    ),
    request_body = UpdateClassStatusDto,
    responses(
        (status = 200, description = "Class with its new status", body = ClassDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_class_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(class_id): Path<i32>,
    Json(payload): Json<UpdateClassStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let class = ClassService::new(&state.db)
        .update_status(UpdateClassStatusParam {
            class_id,
            status: payload.status,
            feedback: payload.feedback,
        })
        .await?;

    Ok((StatusCode::OK, Json(class.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/updateClassInfo/{classId}",
    tag = CLASS_TAG,
    security(("bearer_auth" = [])),
    params(
        ("classId" = i32, Path, description = "Class ID")
    ),
    request_body = UpdateClassInfoDto,
    responses(
        (status = 200, description = "Updated class", body = ClassDto),
        (status = 400, description = "Negative price or seats", body = ErrorDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not the owning instructor", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_class_info(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(class_id): Path<i32>,
    Json(payload): Json<UpdateClassInfoDto>,
) -> Result<impl IntoResponse, AppError> {
    apply_class_info(state, headers, class_id, payload).await
}

/// PUT alias of `update_class_info`, kept for older clients.
#[utoipa::path(
    put,
    path = "/updateClassInfo/{classId}",
    tag = CLASS_TAG,
    security(("bearer_auth" = [])),
    params(
        ("classId" = i32, Path, description = "Class ID")
    ),
    request_body = UpdateClassInfoDto,
    responses(
        (status = 200, description = "Updated class", body = ClassDto),
        (status = 400, description = "Negative price or seats", body = ErrorDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not the owning instructor", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_class_info(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(class_id): Path<i32>,
    Json(payload): Json<UpdateClassInfoDto>,
) -> Result<impl IntoResponse, AppError> {
    apply_class_info(state, headers, class_id, payload).await
}

async fn apply_class_info(
    state: AppState,
    headers: HeaderMap,
    class_id: i32,
    payload: UpdateClassInfoDto,
) -> Result<(StatusCode, Json<ClassDto>), AppError> {
    let identity = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Instructor])
        .await?;

    let class = ClassService::new(&state.db)
        .update_info(
            UpdateClassInfoParam::from_dto(class_id, payload),
            &identity.email,
        )
        .await?;

    Ok((StatusCode::OK, Json(class.into_dto())))
}
