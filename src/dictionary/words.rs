//! The word dictionary.
//!
//! Words are keyed by their text. The first registration of a text wins:
//! registering the same text again leaves the existing entry untouched and
//! reports `Registration::Duplicate`.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use super::learning::null_as_default;
use crate::core::tile::Tile;

/// A registered word and the tiles that spelled it.
///
/// Also reads the capitalized `Text`/`Pais` field names of older save
/// files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    #[serde(alias = "Text")]
    pub text: String,

    #[serde(alias = "Pais", default, deserialize_with = "null_as_default")]
    pub tiles: Vec<Tile>,
}

impl WordEntry {
    /// Whether every tile belongs to the game's alphabet.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.tiles.iter().all(|t| t.is_known())
    }
}

/// Result of a registration attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Registration {
    /// The dictionary gained a new entry.
    Inserted,
    /// An entry with this text already existed and was kept as is.
    Duplicate,
}

/// Persisted mapping from word text to its entry.
///
/// Ordered so the saved file lists words deterministically.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordDictionary {
    entries: OrdMap<String, WordEntry>,
}

impl WordDictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `text` as spelled by `tiles`, unless it is already known.
    pub fn register(&mut self, text: &str, tiles: &[Tile]) -> Registration {
        if self.entries.contains_key(text) {
            return Registration::Duplicate;
        }

        self.entries.insert(
            text.to_string(),
            WordEntry {
                text: text.to_string(),
                tiles: tiles.to_vec(),
            },
        );
        Registration::Inserted
    }

    #[must_use]
    pub fn get(&self, text: &str) -> Option<&WordEntry> {
        self.entries.get(text)
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.entries.contains_key(text)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in text order.
    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.values()
    }
}
