//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runtime::Runtime;

/// Frontend abstraction for UI layers.
///
/// A frontend owns the [`Runtime`] for the lifetime of the application: it
/// shows the start menu, starts sessions for unlocked levels, feeds player
/// input into them frame by frame and renders the result.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
///
/// # Example Implementation
///
/// ```no_run
/// use async_trait::async_trait;
/// use client_frontend_core::Frontend;
/// use game_core::InputState;
/// use runtime::Runtime;
/// use anyhow::Result;
///
/// struct Autopilot;
///
/// #[async_trait]
/// impl Frontend for Autopilot {
///     async fn run(&mut self, runtime: Runtime) -> Result<()> {
///         let mut session = runtime.start_level(0)?;
///         while !session.is_finished() {
///             session.step(InputState::RIGHT)?;
///         }
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, runtime: Runtime) -> Result<()>;
}
