//! Core engine types: tiles, players, RNG, configuration, errors.
//!
//! Everything here is shared by the pool, hand, dictionary and rules
//! modules and depends on none of them.

pub mod tile;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use tile::{Tile, TileCounts, count_tiles, full_set, spell, TOTAL_TILES};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use config::{Checkpoint, GameConfig, PassPolicy, RegistrationLog, DEFAULT_HAND_SIZE};
pub use error::{EngineError, SelectionError};
