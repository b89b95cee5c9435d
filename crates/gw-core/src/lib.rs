//! Core types for Gatewalk: the scene graph and per-session continuity.
//!
//! A [`SceneCatalog`] is an immutable, validated directed graph of
//! [`Scene`]s connected by [`Choice`]s. A [`ContinuityRecord`] is the mutable
//! state of one play session walking that graph. Neither knows how player
//! input is interpreted; that lives in the engine crate.

/// The validated scene graph.
pub mod catalog;
/// Per-session mutable state: position, history, journal, inventory.
pub mod continuity;
/// Error types used throughout the crate.
pub mod error;
/// Scenes, choices, and declarative effects.
pub mod scene;

/// Re-export catalog types.
pub use catalog::{CatalogDef, SceneCatalog};
/// Re-export continuity types.
pub use continuity::{ContinuityRecord, SessionId, Transition};
/// Re-export error types.
pub use error::{CatalogError, CatalogResult};
/// Re-export scene graph types.
pub use scene::{Choice, Effect, Scene};
