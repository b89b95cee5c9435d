//! Journal report formatting.

use gw_core::ContinuityRecord;
use gw_core::continuity::iso_utc;

use crate::narrator::PROMPT;

/// Format the session's journal, inventory and last `window` transitions.
pub fn report(record: &ContinuityRecord, window: usize) -> String {
    let mut lines = vec![format!(
        "Session: {} | Started at: {}",
        record.session_id(),
        iso_utc(&record.started_at())
    )];
    if let Some(name) = record.player_name() {
        lines.push(format!("Player: {name}"));
    }

    if record.journal().is_empty() {
        lines.push("\nJournal is empty.".to_string());
    } else {
        lines.push("\nJournal entries:".to_string());
        lines.extend(record.journal().iter().map(|entry| format!("- {entry}")));
    }

    if record.inventory().is_empty() {
        lines.push("\nNo items in inventory.".to_string());
    } else {
        lines.push("\nInventory:".to_string());
        lines.extend(record.inventory().iter().map(|item| format!("- {item}")));
    }

    lines.push("\nRecent choices:".to_string());
    for t in record.recent_history(window) {
        lines.push(format!(
            "- {} | from {} -> {} via {}",
            iso_utc(&t.timestamp),
            t.from,
            t.to,
            t.choice
        ));
    }

    lines.push(format!("\n{PROMPT}"));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report() {
        let record = ContinuityRecord::new("intro", None);
        let text = report(&record, 6);
        assert!(text.starts_with(&format!("Session: {} |", record.session_id())));
        assert!(!text.contains("Player:"));
        assert!(text.contains("\nJournal is empty."));
        assert!(text.contains("\nNo items in inventory."));
        assert!(text.contains("\nRecent choices:\n\nWhat do you do?"));
        assert!(text.ends_with(PROMPT));
    }

    #[test]
    fn populated_report() {
        let mut record = ContinuityRecord::new("intro", Some("Jinwoo".into()));
        record.add_journal("Obtained System Map: 'Beneath the tower, the key resonates.'");
        record.add_inventory("dungeon_key");
        record.advance("inspect_box", "box");

        let text = report(&record, 6);
        assert!(text.contains("Player: Jinwoo"));
        assert!(
            text.contains("Journal entries:\n- Obtained System Map: 'Beneath the tower, the key resonates.'")
        );
        assert!(text.contains("Inventory:\n- dungeon_key"));
        assert!(text.contains("| from intro -> box via inspect_box"));
    }

    #[test]
    fn report_limits_history() {
        let mut record = ContinuityRecord::new("a", None);
        for i in 0..9 {
            record.advance(format!("step{i}"), "a");
        }
        let text = report(&record, 6);
        assert_eq!(text.matches(" via step").count(), 6);
        assert!(!text.contains("via step2\n"));
        assert!(text.contains("via step3"));
        assert!(text.contains("via step8"));
    }
}
