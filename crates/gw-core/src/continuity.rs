use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identity of one play session. Regenerated on every (re)start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Generate a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Format a UTC timestamp as RFC 3339 with a `Z` suffix.
pub fn iso_utc(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// One step through the scene graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Scene the player left.
    pub from: String,
    /// Choice key that was taken.
    pub choice: String,
    /// Scene the player arrived in.
    pub to: String,
    /// When the transition happened.
    pub timestamp: DateTime<Utc>,
}

/// The mutable state of one play session.
///
/// Everything except the current scene is append-only. The only way to
/// move through the graph is [`ContinuityRecord::advance`], which records
/// the transition in the same step; effects can only reach the journal and
/// the inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContinuityRecord {
    session_id: SessionId,
    started_at: DateTime<Utc>,
    player_name: Option<String>,
    current_scene: String,
    history: Vec<Transition>,
    journal: Vec<String>,
    inventory: Vec<String>,
    actions: Vec<String>,
}

impl ContinuityRecord {
    /// Create an empty record positioned at `entry`, with a fresh identity.
    pub fn new(entry: impl Into<String>, player_name: Option<String>) -> Self {
        Self {
            session_id: SessionId::new(),
            started_at: Utc::now(),
            player_name,
            current_scene: entry.into(),
            history: Vec::new(),
            journal: Vec::new(),
            inventory: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Session identity.
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// When this record was created.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Display label set at session start, if any.
    pub fn player_name(&self) -> Option<&str> {
        self.player_name.as_deref()
    }

    /// Key of the scene the player is in.
    pub fn current_scene(&self) -> &str {
        &self.current_scene
    }

    /// All transitions, oldest first.
    pub fn history(&self) -> &[Transition] {
        &self.history
    }

    /// The last `n` transitions, oldest first.
    pub fn recent_history(&self, n: usize) -> &[Transition] {
        let start = self.history.len().saturating_sub(n);
        &self.history[start..]
    }

    /// Narrative facts learned, in order.
    pub fn journal(&self) -> &[String] {
        &self.journal
    }

    /// Item identifiers held, in order of acquisition.
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    /// Choice keys taken, in order.
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    /// Append a journal line.
    pub fn add_journal(&mut self, text: impl Into<String>) {
        self.journal.push(text.into());
    }

    /// Append an item. Duplicates are kept.
    pub fn add_inventory(&mut self, item: impl Into<String>) {
        self.inventory.push(item.into());
    }

    /// Take `choice` from the current scene into `to`: records the
    /// transition and the action, then moves the player.
    pub fn advance(&mut self, choice: impl Into<String>, to: impl Into<String>) -> &Transition {
        let choice = choice.into();
        let to = to.into();
        self.actions.push(choice.clone());
        self.history.push(Transition {
            from: std::mem::replace(&mut self.current_scene, to.clone()),
            choice,
            to,
            timestamp: Utc::now(),
        });
        &self.history[self.history.len() - 1]
    }
}
