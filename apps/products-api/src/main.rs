//! Products API - REST server

use core_config::tracing::{init_tracing, install_color_eyre};
use products_api::{app, AppState, Config};
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let state = AppState::seeded(config);
    let router = app(&state);

    info!(
        environment = ?state.config.environment,
        "Starting {} v{} on port {}",
        state.config.app.name,
        state.config.app.version,
        state.config.server.port
    );

    axum_helpers::create_app(router, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
