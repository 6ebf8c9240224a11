//! Word dictionary, yaku table, learning log and their persistence.
//!
//! ## Key Types
//!
//! - `WordDictionary`: registered words keyed by text, first entry wins
//! - `YakuTable`: named scores
//! - `WordYakuLog`: append-only record of yaku attached to words
//! - `LearningData`: the three above, persisted together
//! - `LearningStore`: load/save of `LearningData` at a path

pub mod words;
pub mod yaku;
pub mod learning;
pub mod store;

pub use words::{Registration, WordDictionary, WordEntry};
pub use yaku::{WordYaku, WordYakuLog, Yaku, YakuTable};
pub use learning::{DictionaryError, LearningData};
pub use store::{LearningStore, StoreError};
