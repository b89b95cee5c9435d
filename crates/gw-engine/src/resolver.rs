//! Layered intent resolution.
//!
//! Maps an unconstrained utterance onto at most one choice of a scene. Three
//! layers run from most specific to most permissive; the first layer that
//! matches anything wins, and inside a layer the first matching choice in
//! declared order wins. Matching is plain lower-cased substring search, so
//! the result is a pure function of the utterance and the scene.

use std::fmt;

use gw_core::{Choice, Scene};

/// How many leading description words the containment layer considers.
const LEADING_WORDS: usize = 4;

/// The layer that produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchLayer {
    /// The utterance is exactly a choice key.
    Exact,
    /// The utterance contains the key or one of the description's leading words.
    Containment,
    /// The utterance contains any word of the description.
    Keyword,
}

impl fmt::Display for MatchLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Containment => write!(f, "containment"),
            Self::Keyword => write!(f, "keyword"),
        }
    }
}

/// A resolved choice and the layer that matched it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// The matched choice.
    pub choice: &'a Choice,
    /// The layer that matched.
    pub layer: MatchLayer,
}

/// The layered matcher.
///
/// The default resolver treats every description word as significant, so a
/// common word like "the" can match on its own. `ignored_words` removes such
/// words from the description scan, ignoring surrounding punctuation; keys
/// are never filtered.
#[derive(Debug, Clone, Default)]
pub struct IntentResolver {
    ignored_words: Vec<String>,
}

impl IntentResolver {
    /// Create a resolver with no ignored words.
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip these words (case-insensitive) when scanning descriptions.
    pub fn with_ignored_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ignored_words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        self
    }

    /// Resolve an utterance against a scene's choices. `None` means unresolved.
    pub fn resolve<'a>(&self, utterance: &str, scene: &'a Scene) -> Option<Resolution<'a>> {
        let said = utterance.trim().to_lowercase();
        let hit = |choice: &'a Choice, layer| Some(Resolution { choice, layer });

        if let Some(choice) = scene.choices.iter().find(|c| c.key == said) {
            return hit(choice, MatchLayer::Exact);
        }

        if let Some(choice) = scene.choices.iter().find(|c| {
            let description = c.description.to_lowercase();
            (!c.key.is_empty() && said.contains(c.key.as_str()))
                || self
                    .significant(description.split_whitespace().take(LEADING_WORDS))
                    .any(|w| said.contains(w))
        }) {
            return hit(choice, MatchLayer::Containment);
        }

        if let Some(choice) = scene.choices.iter().find(|c| {
            let description = c.description.to_lowercase();
            self.significant(description.split_whitespace())
                .any(|w| said.contains(w))
        }) {
            return hit(choice, MatchLayer::Keyword);
        }

        None
    }

    fn significant<'w>(
        &'w self,
        words: impl Iterator<Item = &'w str> + 'w,
    ) -> impl Iterator<Item = &'w str> + 'w {
        words.filter(move |w| {
            let bare = w.trim_matches(|c: char| c.is_ascii_punctuation());
            !self.ignored_words.iter().any(|i| i == bare)
        })
    }
}

/// Resolve with the default resolver.
pub fn resolve<'a>(utterance: &str, scene: &'a Scene) -> Option<Resolution<'a>> {
    IntentResolver::default().resolve(utterance, scene)
}
