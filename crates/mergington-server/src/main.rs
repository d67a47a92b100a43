//! Server binary for the Mergington activity sign-up board.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `mergington-config.yaml` (or the file named
//!    by `MERGINGTON_CONFIG`), falling back to defaults
//! 2. Initialize structured logging (tracing)
//! 3. Build the activity store from the seed catalog
//! 4. Serve the activities API and static dashboard until `Ctrl-C`

mod error;
mod logging;

use std::sync::Arc;

use mergington_api::{AppState, ServerConfig};
use mergington_core::{ActivityStore, BoardConfig};
use tracing::info;

use crate::error::AppError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the server cannot
/// bind its listener.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config_path = BoardConfig::path_from_env();
    let config_found = config_path.exists();
    let config = BoardConfig::load(&config_path).map_err(AppError::from)?;

    // 2. Initialize structured logging.
    logging::init(&config.logging);

    info!("mergington-server starting");
    info!(
        config_path = %config_path.display(),
        config_found,
        host = config.server.host,
        port = config.server.port,
        static_dir = %config.server.static_dir.display(),
        "Configuration loaded"
    );

    // 3. Build the activity store.
    let catalog = config.seed_catalog();
    info!(
        activities = catalog.len(),
        builtin = config.activities.is_none(),
        "Activity store seeded"
    );
    let store = Arc::new(ActivityStore::new(catalog));
    let state = Arc::new(AppState::new(store).with_static_dir(&config.server.static_dir));

    // 4. Serve until Ctrl-C.
    mergington_api::start_server(&ServerConfig::from(&config.server), state)
        .await
        .map_err(AppError::from)?;

    info!("mergington-server stopped");
    Ok(())
}
