//! # Campus Records Server
//!
//! Main entry point: loads configuration, installs logging and serves the
//! REST API over the configured storage backend.

use campus_config::ConfigLoader;
use campus_core::CampusResult;
use campus_server::{app::AppBuilder, logging::init_logging, startup::print_banner};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Application error: {}", e);
        eprintln!("Application error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> CampusResult<()> {
    let config = ConfigLoader::from_default_location()?.get().await;

    init_logging(&config.observability)?;
    print_banner();

    info!("Starting Campus Records Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    AppBuilder::new().with_config(config).run().await
}
