//! Effect dispatcher.
//!
//! Interprets a choice's declarative effects against a continuity record.
//! Effects can only append to the journal and inventory; moving through the
//! graph belongs to the turn controller.

use gw_core::{ContinuityRecord, Effect};

/// Apply effects in list order.
pub fn apply(effects: &[Effect], record: &mut ContinuityRecord) {
    for effect in effects {
        match effect {
            Effect::AddJournal { text } => record.add_journal(text.as_str()),
            Effect::AddInventory { item } => record.add_inventory(item.as_str()),
            Effect::Unknown => {
                tracing::debug!(session = %record.session_id(), "skipping unknown effect kind");
            }
        }
    }
}
