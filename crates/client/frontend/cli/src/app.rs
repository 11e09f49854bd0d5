//! Glue code tying the runtime and the terminal UI together.
use anyhow::Result;
use async_trait::async_trait;

use client_frontend_core::{FrontendConfig, frontend::Frontend};
use runtime::Runtime;

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::terminal;

/// Terminal frontend: start menu, level view and result screens.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, runtime: Runtime) -> Result<()> {
        tracing::info!(
            levels = runtime.catalog().len(),
            max_level = runtime.progression().max_level(),
            "CLI frontend starting"
        );

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let event_loop = EventLoop::new(runtime, &self.frontend_config, self.cli_config.clone());
        let runtime = event_loop.run(&mut terminal).await?;

        tracing::info!(
            max_level = runtime.progression().max_level(),
            "CLI frontend stopped"
        );
        Ok(())
    }
}
