//! Error types for the turn engine.

use gw_core::CatalogError;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors the engine can raise.
///
/// Unresolved player input is not an error; it is answered with a
/// clarification. Only construction and caller-contract violations land here.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The scene catalog failed to load or validate.
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// A turn was submitted while another turn on the same session was running.
    #[error("a turn is already in progress for this session")]
    TurnInProgress,

    /// A previous turn panicked while holding the session.
    #[error("session state is unavailable after a failed turn")]
    SessionPoisoned,
}
