use std::collections::{HashMap, HashSet, VecDeque};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::scene::Scene;

/// Serialized form of a catalog, as authored in JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDef {
    /// Display title of the adventure.
    #[serde(default)]
    pub title: String,
    /// Key of the entry scene.
    #[serde(default)]
    pub entry: String,
    /// Scenes in declared order.
    pub scenes: Vec<Scene>,
}

/// An immutable, validated scene graph.
///
/// Construction checks that an entry scene is designated and exists, that
/// scene keys and per-scene choice keys are non-blank and unique, and that every choice
/// targets a defined scene. Cycles and dead ends are valid.
#[derive(Debug, Clone)]
pub struct SceneCatalog {
    title: String,
    entry: usize,
    scenes: Vec<Scene>,
    by_key: HashMap<String, usize>,
}

impl SceneCatalog {
    /// Build a catalog from scenes in declared order.
    pub fn new(entry: impl Into<String>, scenes: Vec<Scene>) -> CatalogResult<Self> {
        let entry = entry.into();
        if entry.trim().is_empty() {
            return Err(CatalogError::MissingEntry);
        }

        let mut by_key = HashMap::with_capacity(scenes.len());
        for (idx, scene) in scenes.iter().enumerate() {
            if scene.key.trim().is_empty()
                || scene.choices.iter().any(|c| c.key.trim().is_empty())
            {
                return Err(CatalogError::BlankKey {
                    scene: scene.key.clone(),
                });
            }
            if by_key.insert(scene.key.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateScene(scene.key.clone()));
            }
            let mut seen = HashSet::new();
            for choice in &scene.choices {
                if !seen.insert(choice.key.as_str()) {
                    return Err(CatalogError::DuplicateChoice {
                        scene: scene.key.clone(),
                        choice: choice.key.clone(),
                    });
                }
            }
        }

        let entry_idx = *by_key
            .get(&entry)
            .ok_or_else(|| CatalogError::UnknownEntry(entry.clone()))?;

        for scene in &scenes {
            for choice in &scene.choices {
                if !by_key.contains_key(&choice.target) {
                    return Err(CatalogError::DanglingTarget {
                        scene: scene.key.clone(),
                        choice: choice.key.clone(),
                        target: choice.target.clone(),
                    });
                }
            }
        }

        let title = scenes[entry_idx].title.clone();
        Ok(Self {
            title,
            entry: entry_idx,
            scenes,
            by_key,
        })
    }

    /// Build a catalog from its serialized form.
    pub fn from_def(def: CatalogDef) -> CatalogResult<Self> {
        let catalog = Self::new(def.entry, def.scenes)?;
        Ok(if def.title.is_empty() {
            catalog
        } else {
            catalog.with_title(def.title)
        })
    }

    /// Parse and validate a JSON catalog.
    pub fn from_json(source: &str) -> CatalogResult<Self> {
        let def: CatalogDef = serde_json::from_str(source)?;
        let catalog = Self::from_def(def)?;
        tracing::debug!(
            scenes = catalog.len(),
            entry = catalog.entry_key(),
            "loaded scene catalog"
        );
        Ok(catalog)
    }

    /// Read, parse and validate a JSON catalog file.
    pub fn from_path(path: &Path) -> CatalogResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&source)
    }

    /// Override the display title (defaults to the entry scene's title).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Display title of the adventure.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Key of the entry scene.
    pub fn entry_key(&self) -> &str {
        &self.scenes[self.entry].key
    }

    /// The entry scene.
    pub fn entry_scene(&self) -> &Scene {
        &self.scenes[self.entry]
    }

    /// Look up a scene by key.
    pub fn get_scene(&self, key: &str) -> Option<&Scene> {
        self.by_key.get(key).map(|&idx| &self.scenes[idx])
    }

    /// Whether a scene key is defined.
    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// All scenes in declared order.
    pub fn scenes(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.iter()
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether the catalog has no scenes. Always false for a validated
    /// catalog, which holds at least its entry scene.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Total number of choices across all scenes.
    pub fn choice_count(&self) -> usize {
        self.scenes.iter().map(|s| s.choices.len()).sum()
    }

    /// Scene keys reachable from `start` (inclusive), in breadth-first order.
    /// Empty if `start` is not defined.
    pub fn reachable_from(&self, start: &str) -> Vec<&str> {
        let Some(start) = self.get_scene(start) else {
            return Vec::new();
        };

        let mut seen: HashSet<&str> = HashSet::from([start.key.as_str()]);
        let mut order = vec![start.key.as_str()];
        let mut queue = VecDeque::from([start]);

        while let Some(scene) = queue.pop_front() {
            for next in scene.choices.iter().filter_map(|c| self.get_scene(&c.target)) {
                if seen.insert(next.key.as_str()) {
                    order.push(next.key.as_str());
                    queue.push_back(next);
                }
            }
        }

        order
    }

    /// Scene keys that cannot be reached from the entry scene, in declared order.
    pub fn unreachable(&self) -> Vec<&str> {
        let reachable: HashSet<&str> = self.reachable_from(self.entry_key()).into_iter().collect();
        self.scenes
            .iter()
            .map(|s| s.key.as_str())
            .filter(|key| !reachable.contains(key))
            .collect()
    }

    /// Convert back to the serialized form.
    pub fn to_def(&self) -> CatalogDef {
        CatalogDef {
            title: self.title.clone(),
            entry: self.entry_key().to_string(),
            scenes: self.scenes.clone(),
        }
    }
}
