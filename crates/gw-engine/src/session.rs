//! The turn controller.
//!
//! `GameSession` owns one continuity record and walks it through a shared,
//! immutable scene catalog. Each of its five string operations returns
//! player-facing text ending with [`PROMPT`](crate::narrator::PROMPT).

use std::sync::Arc;

use gw_core::{ContinuityRecord, SceneCatalog};

use crate::adventure;
use crate::config::SessionConfig;
use crate::effects;
use crate::error::EngineResult;
use crate::journal;
use crate::narrator::{ensure_prompt, render, render_current};
use crate::resolver::{IntentResolver, MatchLayer};

/// The result of one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The utterance resolved to a choice and the player moved.
    Advanced {
        /// Scene the player left.
        from: String,
        /// Choice key taken.
        choice: String,
        /// Scene the player arrived in.
        to: String,
        /// Resolver layer that matched.
        layer: MatchLayer,
        /// Narration for the player.
        text: String,
    },
    /// Nothing matched; the record is untouched.
    Unresolved {
        /// Clarification plus the current scene.
        text: String,
    },
}

impl TurnOutcome {
    /// The narration for the player.
    pub fn text(&self) -> &str {
        match self {
            Self::Advanced { text, .. } | Self::Unresolved { text } => text,
        }
    }

    /// Consume the outcome, keeping only the narration.
    pub fn into_text(self) -> String {
        match self {
            Self::Advanced { text, .. } | Self::Unresolved { text } => text,
        }
    }

    /// Whether the turn moved the player.
    pub fn is_advanced(&self) -> bool {
        matches!(self, Self::Advanced { .. })
    }
}

/// An interactive game session.
///
/// Methods that change state take `&mut self`, so turns on one session are
/// sequential by construction. Wrap the session in a
/// [`SharedSession`](crate::shared::SharedSession) when a transport can
/// deliver overlapping requests.
#[derive(Debug, Clone)]
pub struct GameSession {
    catalog: Arc<SceneCatalog>,
    config: SessionConfig,
    resolver: IntentResolver,
    record: ContinuityRecord,
}

impl GameSession {
    /// Create a session positioned at the catalog's entry scene.
    pub fn new(catalog: Arc<SceneCatalog>, config: SessionConfig) -> Self {
        let resolver = IntentResolver::new().with_ignored_words(&config.ignored_words);
        let record = ContinuityRecord::new(catalog.entry_key(), None);
        Self {
            catalog,
            config,
            resolver,
            record,
        }
    }

    /// Create a session over the bundled adventure with default configuration.
    pub fn bundled() -> EngineResult<Self> {
        let catalog = adventure::catalog()?;
        Ok(Self::new(Arc::new(catalog), SessionConfig::default()))
    }

    /// The scene catalog.
    pub fn catalog(&self) -> &SceneCatalog {
        &self.catalog
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The current continuity record.
    pub fn continuity(&self) -> &ContinuityRecord {
        &self.record
    }

    /// Begin a fresh adventure and greet the player.
    ///
    /// A blank or missing name keeps the name from the previous record, if any.
    pub fn start(&mut self, player_name: Option<&str>) -> String {
        self.restart(player_name);
        let name = self
            .record
            .player_name()
            .unwrap_or(self.config.default_player_name.as_str());
        let greeting = format!(
            "Greetings {name}. Welcome to '{}'.",
            self.catalog.entry_scene().title
        );
        ensure_prompt(format!("{greeting}\n\n{}", self.current_text()))
    }

    /// Throw away all progress and begin again at the entry scene.
    pub fn reset(&mut self) -> String {
        self.restart(None);
        ensure_prompt(format!(
            "{}\n\n{}",
            self.config.reset_prefix,
            self.current_text()
        ))
    }

    /// Describe the current scene. Does not change anything.
    pub fn current_text(&self) -> String {
        render_current(&self.catalog, &self.record)
    }

    /// Play one turn and return the narration.
    pub fn submit_action(&mut self, utterance: &str) -> String {
        self.take_turn(utterance).into_text()
    }

    /// Play one turn: resolve the utterance, apply effects, move, narrate.
    pub fn take_turn(&mut self, utterance: &str) -> TurnOutcome {
        let catalog = Arc::clone(&self.catalog);
        let from = self.record.current_scene().to_string();

        let resolution = catalog
            .get_scene(&from)
            .and_then(|scene| self.resolver.resolve(utterance, scene));

        let Some(resolution) = resolution else {
            tracing::debug!(
                session = %self.record.session_id(),
                scene = %from,
                utterance,
                "utterance did not match any choice"
            );
            return TurnOutcome::Unresolved {
                text: ensure_prompt(format!(
                    "{}\n\n{}",
                    self.config.clarification,
                    self.current_text()
                )),
            };
        };

        let choice = resolution.choice;
        tracing::debug!(
            session = %self.record.session_id(),
            scene = %from,
            choice = %choice.key,
            layer = %resolution.layer,
            "resolved intent"
        );

        effects::apply(&choice.effects, &mut self.record);
        self.record.advance(choice.key.as_str(), choice.target.as_str());

        let text = ensure_prompt(format!(
            "{}\n\nYou chose '{}'.\n\n{}",
            self.config.persona_prefix,
            choice.key,
            render(catalog.get_scene(&choice.target))
        ));

        TurnOutcome::Advanced {
            from,
            choice: choice.key.clone(),
            to: choice.target.clone(),
            layer: resolution.layer,
            text,
        }
    }

    /// Summarize the journal, inventory and recent choices.
    pub fn journal_report(&self) -> String {
        journal::report(&self.record, self.config.history_window)
    }

    fn restart(&mut self, player_name: Option<&str>) {
        let name = player_name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .or_else(|| self.record.player_name().map(str::to_string));
        self.record = ContinuityRecord::new(self.catalog.entry_key(), name);
        tracing::info!(
            session = %self.record.session_id(),
            entry = self.catalog.entry_key(),
            "session started"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrator::PROMPT;
    use gw_core::{Choice, Effect, Scene};
    use proptest::prelude::*;

    fn bundled() -> GameSession {
        let mut session = GameSession::bundled().unwrap();
        session.start(None);
        session
    }

    fn pedestal() -> GameSession {
        let catalog = SceneCatalog::new(
            "pedestal",
            vec![
                Scene::new("pedestal", "Pedestal", "A key rests on stone.")
                    .with_choice(
                        Choice::new("take_key", "Take the Dungeon Key.", "pedestal")
                            .with_effect(Effect::item("dungeon_key")),
                    )
                    .with_choice(Choice::new("leave", "Leave quietly.", "hall")),
                Scene::new("hall", "Hall", "An empty hall."),
            ],
        )
        .unwrap();
        GameSession::new(Arc::new(catalog), SessionConfig::default())
    }

    #[test]
    fn start_greets_and_renders_entry() {
        let mut session = GameSession::bundled().unwrap();
        let text = session.start(Some("Jinwoo"));
        assert!(text.starts_with("Greetings Jinwoo. Welcome to 'An F-Rank Gate Opens'.\n\n"));
        assert!(text.contains("(say: inspect_box)"));
        assert!(text.ends_with(PROMPT));
        assert_eq!(session.continuity().current_scene(), "intro");
        assert_eq!(session.continuity().player_name(), Some("Jinwoo"));
    }

    #[test]
    fn start_without_name_uses_default() {
        let mut session = GameSession::bundled().unwrap();
        assert!(session.start(None).starts_with("Greetings traveler."));
        assert!(session.start(Some("   ")).starts_with("Greetings traveler."));
    }

    #[test]
    fn end_to_end_map_scenario() {
        let mut session = bundled();
        assert_eq!(session.continuity().current_scene(), "intro");

        let outcome = session.take_turn("inspect the box");
        match &outcome {
            TurnOutcome::Advanced {
                from, choice, to, ..
            } => {
                assert_eq!(from, "intro");
                assert_eq!(choice, "inspect_box");
                assert_eq!(to, "box");
            }
            TurnOutcome::Unresolved { .. } => panic!("expected to advance"),
        }
        assert_eq!(session.continuity().current_scene(), "box");
        assert!(outcome.text().contains("The cube hums softly with mana."));
        assert!(outcome.text().contains("You chose 'inspect_box'."));
        assert!(outcome.text().ends_with(PROMPT));

        let text = session.submit_action("take_map");
        assert!(text.ends_with(PROMPT));
        assert_eq!(session.continuity().current_scene(), "tower_approach");
        assert_eq!(
            session.continuity().journal(),
            ["Obtained System Map: 'Beneath the tower, the key resonates.'"]
        );
        assert_eq!(session.continuity().history().len(), 2);
        assert_eq!(session.continuity().actions(), ["inspect_box", "take_map"]);
    }

    #[test]
    fn unresolved_turn_changes_nothing() {
        let mut session = bundled();
        let before = session.continuity().clone();

        let outcome = session.take_turn("jump");
        assert!(!outcome.is_advanced());
        assert!(outcome.text().starts_with("I didn't quite catch that"));
        assert!(outcome.text().contains("(say: approach_tower)"));
        assert!(outcome.text().ends_with(PROMPT));

        let after = session.continuity();
        assert_eq!(after.current_scene(), before.current_scene());
        assert_eq!(after.history().len(), before.history().len());
        assert_eq!(after.journal(), before.journal());
        assert_eq!(after.inventory(), before.inventory());
    }

    #[test]
    fn repeated_item_effects_accumulate() {
        let mut session = pedestal();
        session.submit_action("take_key");
        assert_eq!(session.continuity().inventory(), ["dungeon_key"]);
        session.submit_action("take_key");
        assert_eq!(
            session.continuity().inventory(),
            ["dungeon_key", "dungeon_key"]
        );
    }

    #[test]
    fn dead_end_is_a_resting_state() {
        let mut session = pedestal();
        session.submit_action("leave");
        assert_eq!(session.continuity().current_scene(), "hall");
        let text = session.submit_action("leave");
        assert!(text.starts_with("I didn't quite catch that"));
        assert!(text.ends_with(PROMPT));
        assert_eq!(session.continuity().current_scene(), "hall");
    }

    #[test]
    fn reset_replaces_identity_and_state() {
        let mut session = bundled();
        session.submit_action("inspect_box");
        session.submit_action("take_map");
        let before = session.continuity().session_id();

        let text = session.reset();
        assert!(text.starts_with("The world resets."));
        assert!(text.ends_with(PROMPT));

        let record = session.continuity();
        assert_ne!(record.session_id(), before);
        assert!(record.history().is_empty());
        assert!(record.journal().is_empty());
        assert!(record.inventory().is_empty());
        assert!(record.actions().is_empty());
        assert_eq!(record.current_scene(), "intro");
    }

    #[test]
    fn reset_keeps_player_name() {
        let mut session = GameSession::bundled().unwrap();
        session.start(Some("Jinwoo"));
        session.reset();
        assert_eq!(session.continuity().player_name(), Some("Jinwoo"));
    }

    #[test]
    fn current_text_is_idempotent() {
        let session = bundled();
        let first = session.current_text();
        assert_eq!(first, session.current_text());
        assert!(first.ends_with(PROMPT));
        assert!(session.continuity().history().is_empty());
    }

    #[test]
    fn journal_report_after_turns() {
        let mut session = bundled();
        session.submit_action("inspect_box");
        session.submit_action("take_map");
        let report = session.journal_report();
        assert!(report.contains("Obtained System Map"));
        assert!(report.contains("from intro -> box via inspect_box"));
        assert!(report.contains("from box -> tower_approach via take_map"));
        assert!(report.ends_with(PROMPT));
    }

    #[test]
    fn ignored_words_reach_the_resolver() {
        let catalog = Arc::new(adventure::catalog().unwrap());
        let mut session = GameSession::new(
            catalog,
            SessionConfig::default().with_ignored_words(["the", "to"]),
        );
        assert!(!session.take_turn("fly to the moon").is_advanced());
        assert!(session.take_turn("examine it").is_advanced());
    }

    #[test]
    fn every_reachable_scene_prompts() {
        let session = bundled();
        for scene in session.catalog().scenes() {
            assert!(render(Some(scene)).ends_with(PROMPT), "{}", scene.key);
        }
    }

    proptest! {
        #[test]
        fn digits_never_move_the_player(utterance in "[0-9 ]{0,12}") {
            let mut session = bundled();
            let before = session.continuity().clone();
            let text = session.submit_action(&utterance);
            prop_assert!(text.ends_with(PROMPT));
            prop_assert_eq!(session.continuity().current_scene(), before.current_scene());
            prop_assert_eq!(session.continuity().history().len(), before.history().len());
        }

        #[test]
        fn every_turn_prompts(utterance in ".{0,30}") {
            let mut session = bundled();
            prop_assert!(session.submit_action(&utterance).ends_with(PROMPT));
            prop_assert!(session.current_text().ends_with(PROMPT));
        }
    }
}
