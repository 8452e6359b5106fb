use std::sync::Arc;

use tracing::{error, info};

use repair_api::{build_router, cors_layer, AppState};
use repair_core::audit::TracingAuditSink;
use repair_infrastructure::{MemoryTicketRepository, MemoryWorkerRepository};
use repair_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    repair_shared::telemetry::init_telemetry();

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    info!("{} starting ({})...", config.app.name, config.app.env);

    // In-memory stores, lost on restart
    let state = AppState::new(
        Arc::new(MemoryTicketRepository::new()),
        Arc::new(MemoryWorkerRepository::new()),
        Arc::new(TracingAuditSink),
    );

    let app = build_router(state).layer(cors_layer(&config.cors)?);
    info!("CORS allowed origin: {}", config.cors.frontend_origin);

    // Bind address
    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Failed to listen for shutdown signal: {}", e),
    }
}
