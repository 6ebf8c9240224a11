//! Game state: the complete engine snapshot.
//!
//! `GameState` is a plain value. The engine never mutates a state it was
//! handed; it clones, applies the command to the clone, and returns the
//! clone. The pool, dictionary and log are `im` structures, so the clone
//! is cheap.

use serde::{Deserialize, Serialize};

use super::phase::Phase;
use crate::core::error::EngineError;
use crate::core::player::{PlayerId, PlayerMap, PLAYER_COUNT};
use crate::core::tile::{count_tiles, Tile, TileCounts};
use crate::dictionary::LearningData;
use crate::hand::{Hand, Selection};
use crate::pool::TilePool;

/// Everything one player owns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Display name.
    pub name: String,

    /// Loose tiles and groups.
    pub hand: Hand,

    /// Discarded tiles, oldest first.
    pub river: Vec<Tile>,

    /// Running score. No rule awards points yet.
    pub score: i64,
}

impl PlayerState {
    #[must_use]
    pub fn new(player: PlayerId) -> Self {
        Self {
            name: player.to_string(),
            hand: Hand::new(),
            river: Vec::new(),
            score: 0,
        }
    }
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Both players, by seat.
    pub players: PlayerMap<PlayerState>,

    /// Undrawn tiles.
    pub pool: TilePool,

    /// Dictionary, yaku table and word-yaku log.
    pub learning: LearningData,

    /// Whose turn it is.
    pub active_player: PlayerId,

    /// Turn number (starts at 1).
    pub turn: u32,

    /// Current phase.
    pub phase: Phase,

    /// Tile drawn this turn and not yet banked or passed.
    pub drawn: Option<Tile>,

    /// Pending group selection of the active player.
    pub selection: Selection,
}

impl GameState {
    /// Deal `hand_size` tiles to each player from `pool`, player 1 first.
    pub fn deal(
        mut pool: TilePool,
        hand_size: usize,
        learning: LearningData,
    ) -> Result<Self, EngineError> {
        let mut players = PlayerMap::new(PLAYER_COUNT, PlayerState::new);
        for player in PlayerId::all(PLAYER_COUNT) {
            let tiles = pool.deal(hand_size)?;
            players[player].hand.receive(tiles);
        }

        Ok(Self {
            players,
            pool,
            learning,
            active_player: PlayerId::new(0),
            turn: 1,
            phase: Phase::PreDraw,
            drawn: None,
            selection: Selection::new(),
        })
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active(&self) -> &PlayerState {
        &self.players[self.active_player]
    }

    pub fn active_mut(&mut self) -> &mut PlayerState {
        &mut self.players[self.active_player]
    }

    /// Multiset of every tile in the game: pool, drawn slot, and each
    /// player's loose tiles, groups and river.
    ///
    /// Always equal to the full set's composition.
    #[must_use]
    pub fn census(&self) -> TileCounts {
        let held = self
            .players
            .values()
            .flat_map(|p| p.hand.tiles().chain(p.river.iter()));

        count_tiles(self.pool.iter().chain(self.drawn.iter()).chain(held))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::GameRng;
    use crate::core::tile::full_set;

    #[test]
    fn test_deal() {
        let pool = TilePool::from_tiles("あいうえおかきくけこ".chars().map(Tile));
        let state = GameState::deal(pool, 3, LearningData::new()).unwrap();

        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);
        let loose = |p: PlayerId| state.players[p].hand.loose().iter().map(|t| t.0).collect::<String>();

        assert_eq!(loose(p0), "あいう");
        assert_eq!(loose(p1), "えおか");
        assert_eq!(state.pool.len(), 4);
        assert_eq!(state.players[p1].name, "Player 2");
    }

    #[test]
    fn test_initial_fields() {
        let pool = TilePool::initialize(&mut GameRng::new(42));
        let state = GameState::deal(pool, 13, LearningData::new()).unwrap();

        assert_eq!(state.turn, 1);
        assert_eq!(state.phase, Phase::PreDraw);
        assert_eq!(state.active_player, PlayerId::new(0));
        assert_eq!(state.drawn, None);
        assert!(state.selection.is_empty());
        assert_eq!(state.pool.len(), 214 - 26);
    }

    #[test]
    fn test_deal_from_short_pool() {
        let pool = TilePool::from_tiles("あいう".chars().map(Tile));

        assert_eq!(
            GameState::deal(pool, 2, LearningData::new()),
            Err(EngineError::PoolExhausted { requested: 2, remaining: 1 })
        );
    }

    #[test]
    fn test_census_matches_full_set() {
        let pool = TilePool::initialize(&mut GameRng::new(7));
        let mut state = GameState::deal(pool, 13, LearningData::new()).unwrap();
        state.drawn = Some(state.pool.draw().unwrap());

        assert_eq!(state.census(), count_tiles(&full_set()));
    }
}
