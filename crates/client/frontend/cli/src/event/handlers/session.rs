//! Level lifecycle: starting, stepping, finishing and abandoning sessions.

use std::time::Instant;

use anyhow::Result;
use runtime::Topic;
use tokio::sync::broadcast::error::TryRecvError;

use client_frontend_core::EventConsumer;

use crate::event::EventLoop;
use crate::state::{AppMode, PlayState, Summary};

const LEVEL_TOPICS: [Topic; 3] = [Topic::Combat, Topic::World, Topic::Session];

impl EventLoop {
    pub(in crate::event) fn start_level(&mut self, index: usize) {
        let session = match self.runtime.start_level(index) {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(level = index, "failed to start level: {}", err);
                self.app_state.notice = Some(format!("Cannot start level: {err}"));
                return;
            }
        };

        let subscriptions = self.runtime.bus().subscribe_multiple(&LEVEL_TOPICS);
        let log = self.app_state.consumer.message_log_mut();
        log.clear();
        log.push_text(format!("Entered {}", session.name()));
        self.held.clear();
        self.app_state.notice = None;

        tracing::info!(level = index, name = session.name(), "level started");
        self.app_state.mode = AppMode::Playing(Box::new(PlayState {
            session,
            subscriptions,
        }));
    }

    /// Runs one frame of the active level and narrates what it published.
    pub(in crate::event) fn advance_session(&mut self) -> Result<()> {
        let AppMode::Playing(play) = &mut self.app_state.mode else {
            return Ok(());
        };

        play.session.step(self.held.frame(Instant::now()))?;

        let now = play.session.now().0;
        for (topic, receiver) in &mut play.subscriptions {
            loop {
                match receiver.try_recv() {
                    Ok(event) => {
                        self.app_state.consumer.on_event(&event, now);
                    }
                    Err(TryRecvError::Lagged(skipped)) => {
                        tracing::warn!(?topic, "dropped {} stale events", skipped);
                    }
                    Err(TryRecvError::Empty | TryRecvError::Closed) => break,
                }
            }
        }

        if play.session.is_finished() {
            self.finish_level();
        }
        Ok(())
    }

    /// Leaves the level without recording progress.
    pub(in crate::event) fn abandon_level(&mut self) {
        if let Some(session) = self.app_state.session() {
            tracing::info!(level = session.index(), "level abandoned");
        }
        self.held.clear();
        self.app_state.mode = AppMode::Menu;
    }

    fn finish_level(&mut self) {
        let mode = std::mem::replace(&mut self.app_state.mode, AppMode::Menu);
        let AppMode::Playing(play) = mode else {
            self.app_state.mode = mode;
            return;
        };
        let session = play.session;

        let unlocked = self
            .runtime
            .finish_session(&session)
            .and_then(|index| self.runtime.catalog().get(index))
            .map(|entry| entry.name.clone());
        self.app_state
            .menu
            .unlock_through(self.runtime.progression().max_level());

        let outcome = session.phase();
        let coins = session.level().player().coins();
        let phase: &'static str = outcome.into();
        tracing::info!(level = session.index(), phase, coins, "level finished");

        self.held.clear();
        self.app_state.mode = AppMode::Finished(Summary {
            level_name: session.name().to_string(),
            outcome,
            coins,
            unlocked,
        });
    }
}
