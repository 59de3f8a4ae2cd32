use chatdesk::api::{self, app_state::AppState};
use chatdesk::config::loader::ConfigLoader;
use chatdesk::observability::{ObservabilityState, create_observability_router, init_tracing};
use chatdesk::services::{create_account_service, create_front_desk_service};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::load()?;
    let _log_guard = init_tracing(&config.logging, "chatdesk");

    info!("Starting {} ({})...", config.app_name, config.environment);
    ConfigLoader::validate(&config)?;
    info!("Configuration loaded successfully");

    let front_desk = create_front_desk_service(&config.storage).await;
    info!(
        "Front desk initialized (intents: {})",
        config.storage.intents_path.display()
    );

    let accounts = create_account_service(&config.accounts)?;
    info!("Account service initialized: {:?}", config.accounts.backend);

    let app_state = AppState::new(front_desk, accounts, Arc::default())?;
    let observability_state = Arc::new(ObservabilityState::new(
        app_state.version.clone(),
        app_state.metrics.clone(),
        app_state.started_at,
    ));

    let router = create_observability_router(observability_state).merge(api::create_router(app_state));
    info!("API router created with observability endpoints");

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
