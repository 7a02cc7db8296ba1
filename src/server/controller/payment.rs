use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        class::ClassDto,
        payment::{PaymentIntentDto, PaymentIntentRequestDto, PaymentRecordDto, RecordPaymentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::payment::RecordPaymentParam,
        service::payment::PaymentService,
        state::AppState,
    },
};

pub static PAYMENT_TAG: &str = "payment";

#[utoipa::path(
    post,
    path = "/create-payment-intent",
    tag = PAYMENT_TAG,
    security(("bearer_auth" = [])),
    request_body = PaymentIntentRequestDto,
    responses(
        (status = 200, description = "Client secret for confirming the card payment", body = PaymentIntentDto),
        (status = 400, description = "Invalid price or payment rejected", body = ErrorDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Invalid bearer token", body = ErrorDto),
        (status = 502, description = "Payment gateway unavailable", body = ErrorDto)
    ),
)]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<PaymentIntentRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let intent = PaymentService::new(&state.db, state.payment_gateway.as_ref())
        .create_payment_intent(payload.price)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PaymentIntentDto {
            client_secret: intent.client_secret,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/paymentHistory",
    tag = PAYMENT_TAG,
    security(("bearer_auth" = [])),
    request_body = RecordPaymentDto,
    responses(
        (status = 201, description = "Payment recorded and student enrolled", body = PaymentRecordDto),
        (status = 400, description = "Invalid payment data", body = ErrorDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Payment is for someone else", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 409, description = "Already enrolled or no seats left", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<RecordPaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Owner(&payload.user_email)])
        .await?;

    let record = PaymentService::new(&state.db, state.payment_gateway.as_ref())
        .record_payment(RecordPaymentParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(record.into_dto())))
}

#[utoipa::path(
    get,
    path = "/getPaymentHistory/{userEmail}",
    tag = PAYMENT_TAG,
    security(("bearer_auth" = [])),
    params(
        ("userEmail" = String, Path, description = "Student email, must match the caller")
    ),
    responses(
        (status = 200, description = "Payment records, newest first", body = Vec<PaymentRecordDto>),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Token invalid or email belongs to someone else", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_payment_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Owner(&user_email)])
        .await?;

    let records = PaymentService::new(&state.db, state.payment_gateway.as_ref())
        .get_payment_history(&user_email)
        .await?;

    let dto: Vec<PaymentRecordDto> = records.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/enrolledClasses/{userEmail}",
    tag = PAYMENT_TAG,
    security(("bearer_auth" = [])),
    params(
        ("userEmail" = String, Path, description = "Student email, must match the caller")
    ),
    responses(
        (status = 200, description = "Classes the student has paid for", body = Vec<ClassDto>),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Token invalid or email belongs to someone else", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_enrolled_classes(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Owner(&user_email)])
        .await?;

    let classes = PaymentService::new(&state.db, state.payment_gateway.as_ref())
        .get_enrolled_classes(&user_email)
        .await?;

    let dto: Vec<ClassDto> = classes.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}
