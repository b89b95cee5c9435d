use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(path: Option<&Path>) -> Result<(), String> {
    let catalog = super::load_catalog(path)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Scene", "Title", "Choices"]);

    for scene in catalog.scenes() {
        let key = if scene.key == catalog.entry_key() {
            format!("{} (entry)", scene.key)
        } else {
            scene.key.clone()
        };
        let choices = if scene.is_dead_end() {
            "—".to_string()
        } else {
            scene
                .choices
                .iter()
                .map(|c| format!("{} -> {}", c.key, c.target))
                .collect::<Vec<_>>()
                .join("\n")
        };
        table.add_row(vec![&key, &scene.title, &choices]);
    }

    println!("{table}");
    println!();
    println!("  {} scenes", catalog.len());

    Ok(())
}
