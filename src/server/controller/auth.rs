use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{TokenDto, TokenRequestDto},
    },
    server::{error::AppError, service::auth::AuthService, state::AppState},
};

pub static AUTH_TAG: &str = "auth";

/// Issues a bearer token for the given email.
///
/// Identity is taken on trust from the sign-in provider on the client side.
#[utoipa::path(
    post,
    path = "/jwt",
    tag = AUTH_TAG,
    request_body = TokenRequestDto,
    responses(
        (status = 200, description = "Signed bearer token", body = TokenDto),
        (status = 400, description = "Email missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn issue_token(
    State(state): State<AppState>,
    Json(payload): Json<TokenRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthService::new(&state.jwt).issue_token(&payload.email)?;

    Ok((StatusCode::OK, Json(TokenDto { token })))
}
