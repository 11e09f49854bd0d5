//! Cross-frontend primitives for presenting the game.
//!
//! Houses the [`Frontend`] trait, message logging, runtime event narration,
//! the start menu model and view-model types that terminal and future
//! graphical clients can reuse.
pub mod config;
pub mod event;
pub mod frontend;
pub mod menu;
pub mod message;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig};
pub use event::{EventConsumer, EventImpact, MessageConsumer};
pub use frontend::Frontend;
pub use menu::{MenuChoice, MenuItem, StartMenu};
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use view_model::{Glyph, HudView, LevelView, MapView, Viewport};
