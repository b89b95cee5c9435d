use std::path::Path;

use colored::Colorize;

pub fn run(path: Option<&Path>) -> Result<(), String> {
    let catalog = super::load_catalog(path)?;

    let unreachable = catalog.unreachable();
    for key in &unreachable {
        eprintln!(
            "  {} scene '{key}' is unreachable from '{}'",
            "warning:".yellow().bold(),
            catalog.entry_key()
        );
    }

    println!("  All checks passed for '{}'.", catalog.title());
    println!(
        "  {} scenes, {} choices, {} unreachable",
        catalog.len(),
        catalog.choice_count(),
        unreachable.len()
    );

    Ok(())
}
