//! A single running level.
//!
//! The session owns the level, its clock and a handle to the event bus. Each
//! [`Session::step`] advances the clock by one frame, runs the level and
//! publishes the events derived from the frame.
use game_core::{FrameReport, GameConfig, InputState, Level, LevelLayout, LevelPhase, Tick};

use crate::error::{Result, RuntimeError};
use crate::events::{EventBus, extract_events};
use crate::hooks::TracingHooks;

pub struct Session {
    index: usize,
    name: String,
    level: Level,
    clock: Tick,
    frame_duration: u64,
    bus: EventBus,
}

impl Session {
    /// Builds the level for `layout` and prepares it to run from tick zero.
    pub fn new(
        index: usize,
        name: impl Into<String>,
        layout: &LevelLayout,
        config: &GameConfig,
        bus: EventBus,
    ) -> Result<Self> {
        let name = name.into();
        let mut level = Level::build(layout, config)?;
        level.install_enemy_hooks(|enemy| Box::new(TracingHooks::new(enemy)));

        let (columns, rows) = level.dimensions();
        tracing::info!(
            target: "runtime::session",
            level = index,
            name = %name,
            columns,
            rows,
            enemies = level.enemies().len(),
            "level started"
        );

        Ok(Self {
            index,
            name,
            level,
            clock: Tick::ZERO,
            frame_duration: config.frame_duration.max(1),
            bus,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn now(&self) -> Tick {
        self.clock
    }

    pub fn phase(&self) -> LevelPhase {
        self.level.phase()
    }

    pub fn is_finished(&self) -> bool {
        self.phase().is_finished()
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Runs one frame with the given held input.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::SessionFinished`] once the level was won or lost.
    pub fn step(&mut self, input: InputState) -> Result<FrameReport> {
        let phase = self.phase();
        if phase.is_finished() {
            return Err(RuntimeError::SessionFinished {
                phase: phase.into(),
            });
        }

        self.clock += self.frame_duration;
        let report = self.level.step(input, self.clock);

        for update in report.enemies.iter().filter(|u| u.status_changed()) {
            tracing::debug!(
                target: "runtime::enemy",
                from = %update.previous,
                to = %update.status,
                "enemy status changed"
            );
        }
        if report.phase_changed() {
            let phase: &'static str = report.phase.into();
            tracing::info!(
                target: "runtime::session",
                level = self.index,
                now = %self.clock,
                phase,
                coins = self.level.player().coins(),
                health = self.level.player().health(),
                "level phase changed"
            );
        }

        for event in extract_events(&report, self.level.player()) {
            self.bus.publish(event);
        }
        Ok(report)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("index", &self.index)
            .field("name", &self.name)
            .field("clock", &self.clock)
            .field("phase", &self.phase())
            .finish_non_exhaustive()
    }
}
