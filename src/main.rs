// Main entry point - Dependency injection and server setup
use std::sync::Arc;

use widget_dashboard::application::dashboard_store::DashboardStore;
use widget_dashboard::infrastructure::config::load_app_config;
use widget_dashboard::infrastructure::id_generator::TimestampIdGenerator;
use widget_dashboard::infrastructure::logging;
use widget_dashboard::presentation::app_state::AppState;
use widget_dashboard::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    // Load configuration
    let app_config = load_app_config()?;
    let addr = app_config.server.socket_addr()?;
    let seed = app_config.seed.into_state()?;
    tracing::info!(
        "Seeded dashboard with {} categories and {} catalog entries",
        seed.categories.len(),
        seed.available_widgets.len()
    );

    // Create store (application layer)
    let store = DashboardStore::new(seed, Arc::new(TimestampIdGenerator::new()));
    let state = Arc::new(AppState::new(store));

    // Build router (presentation layer)
    let router = build_router(state);

    tracing::info!("Starting widget-dashboard service on {}", addr);
    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
