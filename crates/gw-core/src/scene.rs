use serde::{Deserialize, Serialize};

/// A declarative state change attached to a choice.
///
/// Effects are data, never code. The engine interprets them with a small
/// dispatcher; kinds it does not recognise deserialize to [`Effect::Unknown`]
/// and are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    /// Append a narrative fact to the journal.
    AddJournal {
        /// The journal line.
        text: String,
    },
    /// Append an item identifier to the inventory.
    AddInventory {
        /// The item identifier.
        item: String,
    },
    /// An effect kind this build does not implement.
    #[serde(other)]
    Unknown,
}

impl Effect {
    /// Shorthand for [`Effect::AddJournal`].
    pub fn journal(text: impl Into<String>) -> Self {
        Self::AddJournal { text: text.into() }
    }

    /// Shorthand for [`Effect::AddInventory`].
    pub fn item(item: impl Into<String>) -> Self {
        Self::AddInventory { item: item.into() }
    }
}

/// A labelled edge from one scene to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Key the player can say to pick this choice; unique within its scene.
    pub key: String,
    /// Human-readable phrase describing the action.
    pub description: String,
    /// Key of the scene this choice leads to.
    pub target: String,
    /// Effects applied, in order, when the choice is taken.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<Effect>,
}

impl Choice {
    /// Create a choice with no effects.
    pub fn new(
        key: impl Into<String>,
        description: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
            target: target.into(),
            effects: Vec::new(),
        }
    }

    /// Append an effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// A node in the narrative graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// Stable identifier used as the graph node id.
    pub key: String,
    /// Short label.
    pub title: String,
    /// Static narrative prose.
    pub description: String,
    /// Outgoing choices in declared order. The order is the listing order
    /// and the tie-break order for intent resolution.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl Scene {
    /// Create a scene with no choices.
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            description: description.into(),
            choices: Vec::new(),
        }
    }

    /// Append a choice.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    /// Look up a choice by key.
    pub fn choice(&self, key: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.key == key)
    }

    /// Whether the scene has no outgoing choices (a resting state).
    pub fn is_dead_end(&self) -> bool {
        self.choices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_declared_order() {
        let scene = Scene::new("intro", "Start", "A quiet shore.")
            .with_choice(Choice::new("b", "Second", "intro"))
            .with_choice(Choice::new("a", "First", "intro"));
        let keys: Vec<_> = scene.choices.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, ["b", "a"]);
        assert_eq!(scene.choice("a").unwrap().description, "First");
        assert!(scene.choice("c").is_none());
    }

    #[test]
    fn effects_deserialize_by_kind() {
        let effects: Vec<Effect> = serde_json::from_str(
            r#"[
                {"kind": "add_journal", "text": "Found a map."},
                {"kind": "add_inventory", "item": "dungeon_key"}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            effects,
            vec![Effect::journal("Found a map."), Effect::item("dungeon_key")]
        );
    }

    #[test]
    fn unknown_effect_kind_is_tolerated() {
        let effect: Effect =
            serde_json::from_str(r#"{"kind": "grant_title", "title": "Gatebreaker"}"#).unwrap();
        assert_eq!(effect, Effect::Unknown);
    }

    #[test]
    fn choice_without_effects_omits_field() {
        let json = serde_json::to_string(&Choice::new("go", "Go on.", "next")).unwrap();
        assert!(!json.contains("effects"));
        let back: Choice = serde_json::from_str(&json).unwrap();
        assert!(back.effects.is_empty());
    }

    #[test]
    fn dead_end_detection() {
        assert!(Scene::new("end", "End", "Nothing more.").is_dead_end());
    }
}
