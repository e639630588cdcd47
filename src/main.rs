use std::sync::Arc;
use tracing::info;

use video_catalog_backend::{build_router, config::Config, models::AppState, system_info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter("video_catalog_backend=debug,tower_http=debug")
        .init();

    // Load configuration
    let config = Config::from_env();

    // Print system info at startup
    system_info::print_startup_info(&config);

    // Create app state and build router
    let state = Arc::new(AppState::new());
    let app = build_router(state);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    info!("🚀 Server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("✅ Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
