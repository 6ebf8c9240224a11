//! Yaku table and the append-only word-yaku log.
//!
//! No scoring rules live here. A yaku is just a named score, and the log
//! records which yaku tags were attached to which word and when.

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};

use super::learning::null_as_default;

/// A named scoring pattern.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Yaku {
    #[serde(alias = "Name")]
    pub name: String,

    #[serde(alias = "Score")]
    pub score: i64,
}

/// Mapping from yaku name to its definition.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct YakuTable {
    entries: OrdMap<String, Yaku>,
}

impl YakuTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Define or redefine a yaku.
    pub fn define(&mut self, name: &str, score: i64) {
        self.entries.insert(
            name.to_string(),
            Yaku {
                name: name.to_string(),
                score,
            },
        );
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Yaku> {
        self.entries.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One learning record: tags attached to a word, with the score they gave.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordYaku {
    #[serde(alias = "Word")]
    pub word: String,

    #[serde(alias = "YakuTags", default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    #[serde(alias = "Score")]
    pub score: i64,

    /// RFC 3339 timestamp. Older files may hold other date formats.
    #[serde(alias = "RegisteredAt")]
    pub registered_at: String,
}

/// Append-only history of `WordYaku` records.
///
/// Records are never edited or removed once appended.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordYakuLog {
    records: Vector<WordYaku>,
}

impl WordYakuLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: WordYaku) {
        self.records.push_back(record);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&WordYaku> {
        self.records.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordYaku> {
        self.records.iter()
    }
}
