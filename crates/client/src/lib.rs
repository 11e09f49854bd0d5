//! Top-level client composing the runtime and a frontend.
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Runtime (content, progression, level sessions, event bus)
//!   └─→ Frontend (UI layer - CLI, future GUI)
//! ```
//!
//! The runtime is built independently (see `client-bootstrap`) and handed to
//! the frontend, which owns it until the player quits.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;

/// Top-level client container.
pub struct Client {
    runtime: runtime::Runtime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Transfers control to the frontend until the player quits.
    ///
    /// # Errors
    ///
    /// Returns the frontend's fatal error, if any.
    pub async fn run(self) -> Result<()> {
        let Client {
            runtime,
            mut frontend,
        } = self;

        tracing::info!(
            levels = runtime.catalog().len(),
            max_level = runtime.progression().max_level(),
            "handing runtime to frontend"
        );
        frontend.run(runtime).await
    }
}
