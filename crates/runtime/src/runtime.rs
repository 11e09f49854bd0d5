//! High-level runtime orchestrator.
//!
//! The runtime owns the loaded content, the unlock progression and the event
//! bus, and hands out [`Session`]s for individual levels. It exposes a
//! builder-based API so clients choose where content comes from.

use std::path::PathBuf;

use game_content::{ContentFactory, LevelCatalog};
use game_core::{GameConfig, LevelPhase};
use tokio::sync::broadcast;

use crate::error::{Result, RuntimeError};
use crate::events::{EventBus, GameEvent, Topic};
use crate::progression::Progression;
use crate::session::Session;

/// Runtime configuration shared across the orchestrator and sessions.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub data_dir: PathBuf,
    /// Replaces the data directory's `config.toml` when set.
    pub game_config: Option<GameConfig>,
    /// Overrides the frame duration of whichever game config is used.
    pub frame_duration: Option<u64>,
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            game_config: None,
            frame_duration: None,
            event_buffer_size: EventBus::DEFAULT_CAPACITY,
        }
    }
}

/// Main runtime that loads content and starts level sessions.
#[derive(Debug)]
pub struct Runtime {
    content: ContentFactory,
    config: GameConfig,
    catalog: LevelCatalog,
    progression: Progression,
    bus: EventBus,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Subscribe to events of one topic from every session this runtime starts.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<GameEvent> {
        self.bus.subscribe(topic)
    }

    /// Loads and starts level `index`.
    ///
    /// # Errors
    ///
    /// Fails for unknown or locked levels, unreadable layout files and layouts
    /// that do not form a playable level.
    pub fn start_level(&self, index: usize) -> Result<Session> {
        self.progression.check(index)?;
        let entry = self
            .catalog
            .get(index)
            .ok_or(RuntimeError::UnknownLevel {
                index,
                count: self.catalog.len(),
            })?;
        let layout = self
            .content
            .load_level(&entry.file)
            .map_err(RuntimeError::content)?;
        Session::new(index, entry.name.clone(), &layout, &self.config, self.bus.clone())
    }

    /// Applies the outcome of a finished session to the progression.
    ///
    /// Returns the newly unlocked level index, if the session was won and
    /// unlocked something new.
    pub fn finish_session(&mut self, session: &Session) -> Option<usize> {
        if session.phase() != LevelPhase::Won {
            return None;
        }
        let unlock = self.catalog.get(session.index())?.unlock;
        if self.progression.record_win(unlock) {
            tracing::info!(
                target: "runtime::progression",
                level = session.index(),
                unlocked = unlock,
                "new level unlocked"
            );
            return Some(unlock);
        }
        None
    }
}

/// Builder for [`Runtime`].
#[derive(Debug, Default)]
pub struct RuntimeBuilder {
    config: RuntimeConfig,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.config.data_dir = data_dir.into();
        self
    }

    pub fn game_config(mut self, game_config: GameConfig) -> Self {
        self.config.game_config = Some(game_config);
        self
    }

    pub fn frame_duration(mut self, frame_duration: u64) -> Self {
        self.config.frame_duration = Some(frame_duration);
        self
    }

    pub fn event_buffer_size(mut self, size: usize) -> Self {
        self.config.event_buffer_size = size;
        self
    }

    /// Loads the configuration and level catalog.
    pub fn build(self) -> Result<Runtime> {
        let RuntimeConfig {
            data_dir,
            game_config,
            frame_duration,
            event_buffer_size,
        } = self.config;

        let content = ContentFactory::new(data_dir);
        let mut config = match game_config {
            Some(config) => config,
            None => content.load_config().map_err(RuntimeError::content)?,
        };
        if let Some(frame_duration) = frame_duration {
            config = config.with_frame_duration(frame_duration);
        }
        let catalog = content.load_catalog().map_err(RuntimeError::content)?;

        tracing::info!(
            target: "runtime",
            data_dir = %content.data_dir().display(),
            levels = catalog.len(),
            frame_duration = config.frame_duration,
            "runtime ready"
        );

        Ok(Runtime {
            progression: Progression::new(catalog.len()),
            bus: EventBus::with_capacity(event_buffer_size),
            content,
            config,
            catalog,
        })
    }
}
