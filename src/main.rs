//! LinkHub Server — folder hierarchy engine for a multi-tenant link
//! workspace.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use linkhub_core::config::AppConfig;
use linkhub_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("LINKHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting LinkHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Database connection + migrations ─────────────────────────
    tracing::info!("Connecting to database...");
    let db_pool = linkhub_database::connection::create_pool(&config.database).await?;

    tracing::info!("Running database migrations...");
    linkhub_database::migration::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations complete");

    // ── Repositories ─────────────────────────────────────────────
    let folder_repo = Arc::new(
        linkhub_database::repositories::folder::FolderRepository::new(db_pool.clone()),
    );
    let link_folder_repo = Arc::new(
        linkhub_database::repositories::link_folder::LinkFolderRepository::new(db_pool.clone()),
    );

    // ── Services ─────────────────────────────────────────────────
    let folder_service = Arc::new(linkhub_service::folder::service::FolderService::new(
        Arc::clone(&folder_repo),
    ));
    let tree_service = Arc::new(linkhub_service::folder::tree::TreeService::new(
        Arc::clone(&folder_repo),
        Arc::clone(&link_folder_repo),
    ));
    let default_folder_service = Arc::new(
        linkhub_service::folder::default::DefaultFolderService::new(Arc::clone(&folder_repo)),
    );
    let link_folder_service = Arc::new(linkhub_service::link::service::LinkFolderService::new(
        Arc::clone(&link_folder_repo),
        Arc::clone(&folder_repo),
    ));
    tracing::info!("Services initialized");

    // ── Build and start HTTP server ──────────────────────────────
    let app_state = linkhub_api::state::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        folder_repo,
        link_folder_repo,
        folder_service,
        tree_service,
        default_folder_service,
        link_folder_service,
    };

    let app = linkhub_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("LinkHub server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("LinkHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
