mod model;
mod server;

use std::sync::Arc;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    router,
    scheduler::game_kickoff,
    service::auth::{code::VerificationCodeService, firebase::FirebaseTokenVerifier},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // RUST_LOG may come from .env
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client();

    let id_token_verifier = Arc::new(FirebaseTokenVerifier::new(
        http_client,
        config.firebase_project_id.clone(),
    ));
    let verification_code_service = VerificationCodeService::new(config.verification_code.clone());

    if config.verification_code.is_some() {
        tracing::warn!("Issuing a fixed verification code; set VERIFICATION_CODE=random in production");
    }

    tracing::info!("Starting server");

    // Start game kick-off scheduler
    let scheduler_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = game_kickoff::start_scheduler(scheduler_db).await {
            tracing::error!("Game kick-off scheduler error: {}", e);
        }
    });

    let app = router::router()
        .with_state(AppState::new(
            db,
            id_token_verifier,
            verification_code_service,
        ))
        .layer(session)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .map_err(|e| {
            AppError::InternalError(format!("Failed to bind {}: {}", config.bind_address, e))
        })?;

    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down");
}
