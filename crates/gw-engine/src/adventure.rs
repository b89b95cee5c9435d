//! The bundled "F-Rank Gate" mini-arc.
//!
//! Shipped as JSON and loaded through the same validation path as any
//! user-supplied catalog.

use gw_core::{CatalogResult, SceneCatalog};

/// Raw JSON source of the bundled adventure.
pub const SOURCE: &str = include_str!("../assets/f_rank_gate.json");

/// Load the bundled adventure.
pub fn catalog() -> CatalogResult<SceneCatalog> {
    SceneCatalog::from_json(SOURCE)
}
