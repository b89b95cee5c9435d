pub mod check;
pub mod play;
pub mod scenes;

use std::path::Path;

use gw_core::SceneCatalog;

/// Load the catalog at `path`, or the bundled adventure when none is given.
fn load_catalog(path: Option<&Path>) -> Result<SceneCatalog, String> {
    let catalog = match path {
        Some(path) => SceneCatalog::from_path(path),
        None => gw_engine::adventure::catalog(),
    }
    .map_err(|e| e.to_string())?;
    tracing::debug!(
        title = catalog.title(),
        scenes = catalog.len(),
        "catalog loaded"
    );
    Ok(catalog)
}
