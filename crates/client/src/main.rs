//! Maze Light client binary.
//!
//! This binary is the composition root: it loads configuration, sets up
//! logging, builds the runtime and hands it to the selected frontend.
//!
//! # Examples
//!
//! ```bash
//! # Terminal UI with the bundled content
//! cargo run -p maze-client
//!
//! # Custom content directory and verbose enemy logs
//! MAZE_DATA_DIR=./data RUST_LOG=runtime::enemy=debug cargo run -p maze-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_bootstrap::{ClientConfig, RuntimeBuilder};
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use maze_client::Client;

    // 1. Load configuration from environment
    let client_config = ClientConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    logging::setup_logging(&client_config.session_id)?;

    tracing::info!("Starting Maze Light client");
    tracing::info!("Data directory: {}", client_config.data_dir.display());

    // 3. Build Runtime (independent layer)
    tracing::debug!("Building runtime...");
    let setup = RuntimeBuilder::new().config(client_config).build()?;
    tracing::info!(
        levels = setup.runtime.catalog().len(),
        "Runtime built successfully"
    );

    // 4. Build Frontend (independent layer)
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 5. Build Client (composition layer) and run
    let client = Client::builder()
        .runtime(setup.runtime)
        .frontend(frontend)
        .build()?;

    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
