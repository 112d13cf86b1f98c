//! Campus route planning HTTP service.
//!
//! # Configuration
//!
//! - `CAMPUSNAV_MAP_PATH` - campus map JSON (default: `college_map_data.json`)
//! - `CAMPUSNAV_SCHEDULE_PATH` - class schedule JSON (optional; `schedule.json`
//!   is used when it exists in the working directory)
//! - `SERVICE_PORT` - HTTP port (default: 5000)
//! - `RUST_LOG` - log level (default: info)
//! - `LOG_FORMAT` - json (default) or text

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::{error, info};

use campusnav_lib::schedule::{DEFAULT_SCHEDULE_FILENAME, SCHEDULE_PATH_ENV};
use campusnav_lib::{resolve_map_path, resolve_schedule_path};
use campusnav_service::{init_logging, router, AppState, LoggingConfig};

const DEFAULT_PORT: u16 = 5000;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service("campusnav");
    init_logging(&logging_config);

    let map_path = resolve_map_path(None);
    let schedule_path = configured_schedule_path();
    let port: u16 = env::var("SERVICE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    info!(
        map_path = %map_path.display(),
        schedule_path = ?schedule_path,
        port,
        "starting campusnav service"
    );

    let state = AppState::load(&map_path, schedule_path.as_deref()).map_err(|e| {
        error!(error = %e, path = %map_path.display(), "failed to load application state");
        e
    })?;

    info!(?state, "application state loaded");

    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Schedule path from the environment, or the default file if it exists.
fn configured_schedule_path() -> Option<PathBuf> {
    if env::var_os(SCHEDULE_PATH_ENV).is_some() {
        return Some(resolve_schedule_path(None));
    }
    let fallback = PathBuf::from(DEFAULT_SCHEDULE_FILENAME);
    fallback.exists().then_some(fallback)
}
