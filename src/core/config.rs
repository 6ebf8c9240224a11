//! Game configuration types.
//!
//! `GameConfig` collects every knob the engine reads at startup:
//! - Opening hand size and optional deal seed
//! - `PassPolicy`: where the drawn tile goes when a player passes
//! - `RegistrationLog`: whether confirming a word extends the learning log
//! - `Checkpoint`: when the session persists learning data
//!
//! The two policy enums exist because the rules leave those behaviors
//! open; each game picks one explicitly instead of inheriting a silent
//! default.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Tiles dealt to each player at game start.
pub const DEFAULT_HAND_SIZE: usize = 13;

/// What "pass" does with the tile that was just drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PassPolicy {
    /// The drawn tile goes to the passing player's river.
    #[default]
    ToRiver,
    /// The drawn tile goes back to the bottom of the pool.
    ReturnToPool,
}

/// Whether confirming a group as a word appends to the word-yaku log.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RegistrationLog {
    /// Registration never touches the log.
    #[default]
    Never,
    /// Append only when the dictionary gained a new entry.
    OnInsert,
    /// Append on every confirmation, duplicates included.
    EveryConfirm,
}

/// When the session writes learning data to disk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Checkpoint {
    /// Save once, when the player quits.
    #[default]
    OnQuit,
    /// Save after every end-turn as well as on quit.
    EveryTurn,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Tiles dealt to each player.
    pub hand_size: usize,

    /// Deal seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Fate of the drawn tile on "pass".
    pub pass_policy: PassPolicy,

    /// Learning-log policy for word confirmation.
    pub registration_log: RegistrationLog,

    /// Persistence schedule.
    pub checkpoint: Checkpoint,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            seed: None,
            pass_policy: PassPolicy::default(),
            registration_log: RegistrationLog::default(),
            checkpoint: Checkpoint::default(),
        }
    }
}

impl GameConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Fix the deal seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the pass policy.
    #[must_use]
    pub fn with_pass_policy(mut self, policy: PassPolicy) -> Self {
        self.pass_policy = policy;
        self
    }

    /// Set the registration log policy.
    #[must_use]
    pub fn with_registration_log(mut self, policy: RegistrationLog) -> Self {
        self.registration_log = policy;
        self
    }

    /// Set the checkpoint schedule.
    #[must_use]
    pub fn with_checkpoint(mut self, checkpoint: Checkpoint) -> Self {
        self.checkpoint = checkpoint;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();

        assert_eq!(config.hand_size, 13);
        assert_eq!(config.seed, None);
        assert_eq!(config.pass_policy, PassPolicy::ToRiver);
        assert_eq!(config.registration_log, RegistrationLog::Never);
        assert_eq!(config.checkpoint, Checkpoint::OnQuit);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_hand_size(5)
            .with_seed(7)
            .with_pass_policy(PassPolicy::ReturnToPool)
            .with_registration_log(RegistrationLog::EveryConfirm)
            .with_checkpoint(Checkpoint::EveryTurn);

        assert_eq!(config.hand_size, 5);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.pass_policy, PassPolicy::ReturnToPool);
        assert_eq!(config.registration_log, RegistrationLog::EveryConfirm);
        assert_eq!(config.checkpoint, Checkpoint::EveryTurn);
    }

    #[test]
    fn test_policy_names() {
        let json = serde_json::to_string(&PassPolicy::ReturnToPool).unwrap();
        assert_eq!(json, "\"return-to-pool\"");

        let policy: RegistrationLog = serde_json::from_str("\"on-insert\"").unwrap();
        assert_eq!(policy, RegistrationLog::OnInsert);
    }

    #[test]
    fn test_flag_values_match_serde_names() {
        for policy in PassPolicy::value_variants() {
            let name = policy.to_possible_value().unwrap().get_name().to_string();
            let json = serde_json::to_string(policy).unwrap();
            assert_eq!(json, format!("\"{}\"", name));
        }
        for policy in RegistrationLog::value_variants() {
            let name = policy.to_possible_value().unwrap().get_name().to_string();
            let json = serde_json::to_string(policy).unwrap();
            assert_eq!(json, format!("\"{}\"", name));
        }

        assert_eq!(
            PassPolicy::from_str("return-to-pool", false),
            Ok(PassPolicy::ReturnToPool)
        );
        assert_eq!(
            RegistrationLog::from_str("every-confirm", false),
            Ok(RegistrationLog::EveryConfirm)
        );
    }
}
