use axum::response::IntoResponse;

pub static HEALTH_TAG: &str = "health";

#[utoipa::path(
    get,
    path = "/",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is up", body = String, content_type = "text/plain")
    ),
)]
pub async fn health() -> impl IntoResponse {
    "Melody Manor server is running"
}
