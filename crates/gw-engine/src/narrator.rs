//! Scene rendering.
//!
//! Rendering is pure: it reads only the scene, never the journal, inventory
//! or history. Every rendered string ends with [`PROMPT`], which the voice
//! layer uses to decide whether to expect another utterance.

use gw_core::{ContinuityRecord, Scene, SceneCatalog};

/// Suffix that ends every prompting response.
pub const PROMPT: &str = "What do you do?";

/// Rendered when the current scene cannot be found.
pub const VOID: &str = "You are in a featureless void.";

/// Render a scene: description, choices in declared order, then the prompt.
///
/// A missing scene renders the void fallback instead of failing, so a turn
/// never breaks mid-sentence.
pub fn render(scene: Option<&Scene>) -> String {
    let Some(scene) = scene else {
        return format!("{VOID} {PROMPT}");
    };

    let mut out = format!("{}\n\nChoices:\n", scene.description);
    for choice in &scene.choices {
        out.push_str(&format!("- {} (say: {})\n", choice.description, choice.key));
    }
    out.push('\n');
    out.push_str(PROMPT);
    out
}

/// Render the scene the record currently points at.
pub fn render_current(catalog: &SceneCatalog, record: &ContinuityRecord) -> String {
    let scene = catalog.get_scene(record.current_scene());
    if scene.is_none() {
        tracing::warn!(
            session = %record.session_id(),
            scene = record.current_scene(),
            "current scene missing from catalog; rendering void"
        );
    }
    render(scene)
}

/// Append the prompt on its own line unless `text` already ends with it.
pub fn ensure_prompt(mut text: String) -> String {
    if !text.ends_with(PROMPT) {
        text.push('\n');
        text.push_str(PROMPT);
    }
    text
}
