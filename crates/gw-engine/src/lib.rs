//! Turn engine for Gatewalk.
//!
//! Maps free-form player utterances onto the choices of the current scene,
//! applies the chosen choice's effects, advances the session through the
//! scene graph, and narrates the result. Every player-facing string ends
//! with [`narrator::PROMPT`].

/// The bundled "F-Rank Gate" adventure.
pub mod adventure;
/// Session configuration.
pub mod config;
/// Effect dispatcher.
pub mod effects;
/// Error types for the engine.
pub mod error;
/// Journal report formatting.
pub mod journal;
/// Scene rendering.
pub mod narrator;
/// Layered intent resolution.
pub mod resolver;
/// The turn controller.
pub mod session;
/// Serialized access to a session shared between threads.
pub mod shared;

pub use config::SessionConfig;
pub use error::{EngineError, EngineResult};
pub use narrator::PROMPT;
pub use resolver::{IntentResolver, MatchLayer, Resolution, resolve};
pub use session::{GameSession, TurnOutcome};
pub use shared::SharedSession;
