//! Learning data: the dictionary, yaku table and word-yaku log as one unit.
//!
//! This is what gets persisted between games. The field names on disk are
//! `word_dic`, `yaku_dic` and `word_yaku_dic`.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use super::words::{Registration, WordDictionary};
use super::yaku::{WordYaku, WordYakuLog, YakuTable};
use crate::core::config::RegistrationLog;
use crate::core::tile::Tile;

/// Lookup failures when attaching yaku.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("word '{0}' is not in the dictionary")]
    UnknownWord(String),

    #[error("yaku '{0}' is not defined")]
    UnknownYaku(String),
}

/// Everything the game learns across sessions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningData {
    #[serde(rename = "word_dic", default, deserialize_with = "null_as_default")]
    pub words: WordDictionary,

    #[serde(rename = "yaku_dic", default, deserialize_with = "null_as_default")]
    pub yaku: YakuTable,

    #[serde(rename = "word_yaku_dic", default, deserialize_with = "null_as_default")]
    pub history: WordYakuLog,
}

impl LearningData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a confirmed word, extending the log as `policy` says.
    pub fn register_word(
        &mut self,
        text: &str,
        tiles: &[Tile],
        policy: RegistrationLog,
    ) -> Registration {
        let registration = self.words.register(text, tiles);

        let log = match policy {
            RegistrationLog::Never => false,
            RegistrationLog::OnInsert => registration == Registration::Inserted,
            RegistrationLog::EveryConfirm => true,
        };
        if log {
            self.history.append(WordYaku {
                word: text.to_string(),
                tags: Vec::new(),
                score: 0,
                registered_at: timestamp(),
            });
        }

        registration
    }

    /// Define or redefine a yaku's score.
    pub fn define_yaku(&mut self, name: &str, score: i64) {
        self.yaku.define(name, score);
    }

    /// Attach yaku tags to a registered word and log the result.
    ///
    /// The recorded score is the sum of the tags' scores. Fails without
    /// logging anything if the word or any tag is unknown.
    pub fn attach_yaku(
        &mut self,
        word: &str,
        tags: &[&str],
    ) -> Result<WordYaku, DictionaryError> {
        if !self.words.contains(word) {
            return Err(DictionaryError::UnknownWord(word.to_string()));
        }

        let mut score = 0;
        for tag in tags {
            let yaku = self
                .yaku
                .get(tag)
                .ok_or_else(|| DictionaryError::UnknownYaku(tag.to_string()))?;
            score += yaku.score;
        }

        let record = WordYaku {
            word: word.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            score,
            registered_at: timestamp(),
        };
        self.history.append(record.clone());
        Ok(record)
    }
}

/// Read `null` as the type's default. Older save files write empty maps
/// and lists as `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Current UTC time as RFC 3339, falling back to Unix seconds.
fn timestamp() -> String {
    let now = OffsetDateTime::now_utc();
    now.format(&Rfc3339)
        .unwrap_or_else(|_| now.unix_timestamp().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles(s: &str) -> Vec<Tile> {
        s.chars().map(Tile).collect()
    }

    #[test]
    fn test_registration_log_never() {
        let mut data = LearningData::new();

        data.register_word("うみ", &tiles("うみ"), RegistrationLog::Never);

        assert!(data.words.contains("うみ"));
        assert!(data.history.is_empty());
    }

    #[test]
    fn test_registration_log_on_insert() {
        let mut data = LearningData::new();

        let first = data.register_word("うみ", &tiles("うみ"), RegistrationLog::OnInsert);
        let second = data.register_word("うみ", &tiles("うみ"), RegistrationLog::OnInsert);

        assert_eq!(first, Registration::Inserted);
        assert_eq!(second, Registration::Duplicate);
        assert_eq!(data.words.len(), 1);
        assert_eq!(data.history.len(), 1);
        assert_eq!(data.history.last().unwrap().score, 0);
    }

    #[test]
    fn test_registration_log_every_confirm() {
        let mut data = LearningData::new();

        data.register_word("うみ", &tiles("うみ"), RegistrationLog::EveryConfirm);
        data.register_word("うみ", &tiles("うみ"), RegistrationLog::EveryConfirm);

        assert_eq!(data.words.len(), 1);
        assert_eq!(data.history.len(), 2);
    }

    #[test]
    fn test_attach_yaku_sums_scores() {
        let mut data = LearningData::new();
        data.register_word("はな", &tiles("はな"), RegistrationLog::Never);
        data.define_yaku("nature", 2);
        data.define_yaku("short", 1);

        let record = data.attach_yaku("はな", &["nature", "short"]).unwrap();

        assert_eq!(record.word, "はな");
        assert_eq!(record.tags, vec!["nature".to_string(), "short".to_string()]);
        assert_eq!(record.score, 3);
        assert!(!record.registered_at.is_empty());
        assert_eq!(data.history.len(), 1);
    }

    #[test]
    fn test_attach_yaku_unknown_word() {
        let mut data = LearningData::new();
        data.define_yaku("nature", 2);

        assert_eq!(
            data.attach_yaku("はな", &["nature"]),
            Err(DictionaryError::UnknownWord("はな".to_string()))
        );
        assert!(data.history.is_empty());
    }

    #[test]
    fn test_attach_yaku_unknown_tag() {
        let mut data = LearningData::new();
        data.register_word("はな", &tiles("はな"), RegistrationLog::Never);

        assert_eq!(
            data.attach_yaku("はな", &["nature"]),
            Err(DictionaryError::UnknownYaku("nature".to_string()))
        );
        assert!(data.history.is_empty());
    }

    #[test]
    fn test_field_names() {
        let json = serde_json::to_value(LearningData::new()).unwrap();

        assert!(json.get("word_dic").is_some());
        assert!(json.get("yaku_dic").is_some());
        assert!(json.get("word_yaku_dic").is_some());
    }

    #[test]
    fn test_null_sections_load_empty() {
        let data: LearningData = serde_json::from_str(
            r#"{ "word_dic": null, "yaku_dic": null, "word_yaku_dic": null }"#,
        )
        .unwrap();

        assert_eq!(data, LearningData::new());
    }
}
