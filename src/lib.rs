//! # kotoba
//!
//! Engine for a two-player kana tile game: draw tiles from a shared pool,
//! arrange them into groups, and teach the game new words that persist
//! between sessions.
//!
//! ## Design Principles
//!
//! 1. **State is a value**: `WordGame::apply` takes a `GameState` and
//!    returns a new one. A rejected or ignored command leaves the caller's
//!    state untouched.
//!
//! 2. **Closed phases**: legal commands come from one transition table.
//!    Anything not in the table for the current phase is ignored.
//!
//! 3. **Tiles are conserved**: every tile is always in exactly one place
//!    (pool, drawn slot, loose, a group, or a river).
//!
//! ## Modules
//!
//! - `core`: tiles, players, RNG, configuration, errors
//! - `pool`: the shuffled draw pile
//! - `hand`: loose tiles, groups and the selection stack
//! - `dictionary`: words, yaku, the word-yaku log and their file store
//! - `rules`: commands, phases, game state and the engine
//! - `view`: key translation and text rendering
//! - `session`: the interactive loop

pub mod core;
pub mod pool;
pub mod hand;
pub mod dictionary;
pub mod rules;
pub mod view;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Tile, PlayerId, PlayerMap, GameRng,
    GameConfig, PassPolicy, RegistrationLog, Checkpoint,
    EngineError, SelectionError,
};

pub use crate::pool::TilePool;

pub use crate::hand::{Group, Hand, Selection};

pub use crate::dictionary::{LearningData, LearningStore, StoreError, WordDictionary};

pub use crate::rules::{Command, GameState, Phase, RenderSnapshot, Step, WordGame};

pub use crate::session::{Session, SessionEnd, SessionError};
