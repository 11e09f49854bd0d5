//! Common error infrastructure for game-core.
//!
//! The frame simulation itself never fails: degenerate inputs such as a zero
//! distance or an unstarted timer degrade to well-defined values. Errors only
//! surface where external data enters the crate, most notably when a level is
//! built from a layout (see [`crate::level::LayoutError`]).

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller may pick another option (e.g. another level)
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected state inconsistencies that require investigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all game-core errors.
///
/// All error enums implement this trait on top of `thiserror::Error` so callers
/// can classify failures without matching on concrete variants.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
