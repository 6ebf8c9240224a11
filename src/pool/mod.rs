//! Tile pool: the shuffled, undrawn stock shared by both players.
//!
//! The pool is initialized once per game and only ever shrinks from the
//! front, except when a pass returns the drawn tile to the bottom under
//! `PassPolicy::ReturnToPool`.

pub mod stock;

pub use stock::TilePool;
