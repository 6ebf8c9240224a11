//! Learning-data file store.
//!
//! The file is pretty-printed JSON with three top-level fields:
//!
//! ```json
//! {
//!   "word_dic": { "ねこ": { "text": "ねこ", "tiles": ["ね", "こ"] } },
//!   "yaku_dic": { "animal": { "name": "animal", "score": 2 } },
//!   "word_yaku_dic": [
//!     { "word": "ねこ", "tags": ["animal"], "score": 2, "registered_at": "..." }
//!   ]
//! }
//! ```
//!
//! A missing file is a first run and loads as empty data. Anything else
//! that goes wrong is a `StoreError`.

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::learning::LearningData;

/// Failures reading or writing the learning-data file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid learning data: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot encode learning data: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Reads and writes learning data at a fixed path.
#[derive(Clone, Debug)]
pub struct LearningStore {
    path: PathBuf,
}

impl LearningStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load learning data, treating a missing file as empty data.
    pub fn load(&self) -> Result<LearningData, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("no learning data at {}, starting fresh", self.path.display());
                return Ok(LearningData::default());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let data: LearningData =
            serde_json::from_str(&text).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;

        for entry in data.words.iter().filter(|e| !e.is_playable()) {
            log::warn!("word '{}' uses tiles outside the alphabet", entry.text);
        }

        log::info!(
            "loaded {} words, {} yaku, {} records from {}",
            data.words.len(),
            data.yaku.len(),
            data.history.len(),
            self.path.display()
        );
        Ok(data)
    }

    /// Save learning data.
    ///
    /// Writes a sibling `.tmp` file and renames it over the target, so the
    /// previous file survives any failure.
    pub fn save(&self, data: &LearningData) -> Result<(), StoreError> {
        let mut text = serde_json::to_string_pretty(data).map_err(StoreError::Serialize)?;
        text.push('\n');

        let tmp = self.temp_path();
        fs::write(&tmp, text).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        log::info!(
            "saved {} words, {} records to {}",
            data.words.len(),
            data.history.len(),
            self.path.display()
        );
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}
