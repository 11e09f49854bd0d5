//! Frame loop orchestrating user input, level stepping and rendering.
use anyhow::Result;
use tokio::{
    signal,
    time::{self, Duration, MissedTickBehavior},
};

use client_frontend_core::{FrontendConfig, MessageConsumer, StartMenu};
use runtime::Runtime;

use crate::{
    config::CliConfig,
    input::{HeldKeys, InputHandler},
    presentation::terminal::Tui,
    state::AppState,
};

/// Event loop owning the runtime and the application state.
///
/// Every tick drains pending keyboard input, advances the running level by
/// one frame, narrates the events it published and redraws.
pub struct EventLoop {
    pub(crate) runtime: Runtime,
    pub(crate) input: InputHandler,
    pub(crate) held: HeldKeys,
    pub(crate) app_state: AppState,
    pub(crate) cli_config: CliConfig,
}

impl EventLoop {
    pub fn new(runtime: Runtime, frontend_config: &FrontendConfig, cli_config: CliConfig) -> Self {
        let menu = StartMenu::new(
            runtime.catalog().iter().map(|entry| entry.name.clone()),
            runtime.progression().max_level(),
        );
        let consumer = MessageConsumer::new(&frontend_config.messages);

        Self {
            runtime,
            input: InputHandler::new(),
            held: HeldKeys::new(cli_config.input.key_hold),
            app_state: AppState::new(menu, consumer),
            cli_config,
        }
    }

    /// Runs until the player exits; hands the runtime back to the caller.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<Runtime> {
        self.render(terminal)?;

        let frame_duration = Duration::from_millis(self.runtime.config().frame_duration);
        let mut frames = time::interval(frame_duration);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = frames.tick() => {
                    if self.handle_frame_tick(terminal)? {
                        break;
                    }
                }
                result = signal::ctrl_c() => {
                    if let Err(err) = result {
                        tracing::warn!("failed to listen for interrupts: {}", err);
                    }
                    tracing::info!("interrupt received, leaving");
                    break;
                }
            }
        }

        Ok(self.runtime)
    }

    /// Returns true once the player asked to exit.
    fn handle_frame_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if self.drain_input()? {
            return Ok(true);
        }
        self.advance_session()?;
        self.render(terminal)?;
        Ok(false)
    }
}
