//! Topic-based event bus for runtime events.
//!
//! Every frame of a session is condensed into [`GameEvent`]s that are
//! published to topics; consumers subscribe only to the topics they need.

mod bus;
mod extractor;
mod game_event;

pub use bus::{EventBus, Topic};
pub use extractor::extract_events;
pub use game_event::{GameEvent, HealthThreshold};
