mod model;
mod server;

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::server::{
    config::Config, error::AppError, gateway::stripe::StripeGateway, router,
    service::auth::JwtKeys, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;

    let payment_gateway = StripeGateway::new(
        http_client,
        config.payment_api_url.clone(),
        config.payment_secret_key.clone(),
    );
    let jwt = JwtKeys::new(config.access_token_secret.as_bytes(), config.jwt_expiry_secs);

    let state = AppState::new(db, jwt, Arc::new(payment_gateway));
    let app = router::router(state);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Melody Manor server listening on port {}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
