//! The shuffled draw pile.
//!
//! The pool is built once from the full 214-tile set and shrinks from the
//! front as tiles are dealt and drawn. Backed by `im::Vector`, so cloning a
//! game snapshot does not copy the pile.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::error::EngineError;
use crate::core::rng::GameRng;
use crate::core::tile::{full_set, Tile};

/// Undrawn stock of tiles. The front of the vector is the next draw.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilePool {
    tiles: Vector<Tile>,
}

impl TilePool {
    /// Build the full tile set and shuffle it.
    #[must_use]
    pub fn initialize(rng: &mut GameRng) -> Self {
        let mut tiles = full_set();
        rng.shuffle(&mut tiles);
        Self::from_tiles(tiles)
    }

    /// Build a pool with a fixed order. Front of `tiles` is drawn first.
    #[must_use]
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Self {
        Self {
            tiles: tiles.into_iter().collect(),
        }
    }

    /// Remove and return the first `n` tiles.
    ///
    /// Fails without removing anything if fewer than `n` remain.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Tile>, EngineError> {
        if n > self.tiles.len() {
            return Err(EngineError::PoolExhausted {
                requested: n,
                remaining: self.tiles.len(),
            });
        }

        let rest = self.tiles.split_off(n);
        let dealt = std::mem::replace(&mut self.tiles, rest);
        Ok(dealt.into_iter().collect())
    }

    /// Remove and return the front tile.
    pub fn draw(&mut self) -> Result<Tile, EngineError> {
        self.tiles.pop_front().ok_or(EngineError::PoolExhausted {
            requested: 1,
            remaining: 0,
        })
    }

    /// Put a tile back at the bottom of the pool.
    pub fn return_to_bottom(&mut self, tile: Tile) {
        self.tiles.push_back(tile);
    }

    /// Number of undrawn tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate tiles in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tile::{count_tiles, TOTAL_TILES};

    fn tiles(s: &str) -> Vec<Tile> {
        s.chars().map(Tile).collect()
    }

    #[test]
    fn test_initialize_has_full_set() {
        let mut rng = GameRng::new(42);
        let pool = TilePool::initialize(&mut rng);

        assert_eq!(pool.len(), TOTAL_TILES);
        assert_eq!(count_tiles(pool.iter()), count_tiles(&full_set()));
    }

    #[test]
    fn test_initialize_is_shuffled_and_seeded() {
        let a = TilePool::initialize(&mut GameRng::new(1));
        let b = TilePool::initialize(&mut GameRng::new(1));
        let c = TilePool::initialize(&mut GameRng::new(2));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, TilePool::from_tiles(full_set()));
    }

    #[test]
    fn test_draw_from_front() {
        let mut pool = TilePool::from_tiles(tiles("あいう"));

        assert_eq!(pool.draw(), Ok(Tile('あ')));
        assert_eq!(pool.draw(), Ok(Tile('い')));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_draw_empty_pool() {
        let mut pool = TilePool::from_tiles(tiles("あ"));
        pool.draw().unwrap();

        assert_eq!(
            pool.draw(),
            Err(EngineError::PoolExhausted { requested: 1, remaining: 0 })
        );
        assert!(pool.is_empty());
    }

    #[test]
    fn test_deal() {
        let mut pool = TilePool::from_tiles(tiles("あいうえお"));

        assert_eq!(pool.deal(2).unwrap(), tiles("あい"));
        assert_eq!(pool.deal(0).unwrap(), Vec::<Tile>::new());
        assert_eq!(pool.iter().copied().collect::<Vec<_>>(), tiles("うえお"));
    }

    #[test]
    fn test_deal_too_many_leaves_pool_intact() {
        let mut pool = TilePool::from_tiles(tiles("あい"));

        assert_eq!(
            pool.deal(3),
            Err(EngineError::PoolExhausted { requested: 3, remaining: 2 })
        );
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_return_to_bottom() {
        let mut pool = TilePool::from_tiles(tiles("あい"));
        pool.return_to_bottom(Tile('ん'));

        assert_eq!(pool.iter().copied().collect::<Vec<_>>(), tiles("あいん"));
    }
}
