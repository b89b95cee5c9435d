//! Configuration for a game session.
//!
//! All narrative framing is static text interpolated by the turn controller;
//! nothing here is generated.

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Line spoken before the confirmation of a successful turn.
    pub persona_prefix: String,
    /// Apology used when an utterance matches no choice.
    pub clarification: String,
    /// Narrative prefix used by a reset.
    pub reset_prefix: String,
    /// Name used in the greeting when the player gave none.
    pub default_player_name: String,
    /// Number of recent transitions listed in the journal report.
    pub history_window: usize,
    /// Description words the resolver skips when matching. Empty by default.
    pub ignored_words: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            persona_prefix: "The Game Master (a calm, slightly mysterious narrator) replies:"
                .to_string(),
            clarification: "I didn't quite catch that action for this situation. \
                Try one of the listed choices or use a simple phrase like \
                'inspect the box' or 'go to the tower'."
                .to_string(),
            reset_prefix: "The world resets. A new tide laps at the shore. \
                You stand once more at the beginning."
                .to_string(),
            default_player_name: "traveler".to_string(),
            history_window: 6,
            ignored_words: Vec::new(),
        }
    }
}

impl SessionConfig {
    /// Set the persona prefix.
    pub fn with_persona_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.persona_prefix = prefix.into();
        self
    }

    /// Set the clarification apology.
    pub fn with_clarification(mut self, text: impl Into<String>) -> Self {
        self.clarification = text.into();
        self
    }

    /// Set the reset prefix.
    pub fn with_reset_prefix(mut self, text: impl Into<String>) -> Self {
        self.reset_prefix = text.into();
        self
    }

    /// Set the fallback player name.
    pub fn with_default_player_name(mut self, name: impl Into<String>) -> Self {
        self.default_player_name = name.into();
        self
    }

    /// Set how many transitions the journal report lists (at least 1).
    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window.max(1);
        self
    }

    /// Set the words the resolver skips when scanning descriptions.
    pub fn with_ignored_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_words = words.into_iter().map(Into::into).collect();
        self
    }
}
