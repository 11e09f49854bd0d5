//! Event handling for CLI client.
//!
//! This module contains the frame loop that coordinates keyboard input,
//! level stepping, runtime event narration and rendering.

mod handlers;
mod r#loop;

pub use r#loop::EventLoop;
