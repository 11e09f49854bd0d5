//! Runtime orchestration for Maze Light.
//!
//! This crate wires the deterministic level simulation from `game-core` to
//! content loaded by `game-content`, a frame clock and a topic-based event
//! bus. Consumers build a [`Runtime`], start [`Session`]s for unlocked levels
//! and subscribe to [`GameEvent`]s.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`session`] runs one level frame by frame
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`hooks`] turns enemy callbacks into tracing records
//! - [`progression`] tracks which levels are unlocked
pub mod error;
pub mod events;
pub mod hooks;
pub mod progression;
pub mod runtime;
pub mod session;

pub use error::{Result, RuntimeError};
pub use events::{EventBus, GameEvent, HealthThreshold, Topic, extract_events};
pub use hooks::TracingHooks;
pub use progression::Progression;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use session::Session;
