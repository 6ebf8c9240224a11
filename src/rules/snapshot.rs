//! Read-only view of the game handed to the renderer.

use super::command::CommandKind;
use super::phase::Phase;
use super::state::{GameState, PlayerState};
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::tile::Tile;
use crate::hand::selection_alphabet;

/// What a renderer may see. Borrowed from a `GameState`; it cannot be used
/// to change one.
#[derive(Clone, Debug)]
pub struct RenderSnapshot<'a> {
    pub phase: Phase,
    pub turn: u32,
    pub active_player: PlayerId,
    pub drawn: Option<Tile>,
    pub players: &'a PlayerMap<PlayerState>,
    /// Letters addressing the active player's loose tiles.
    pub alphabet: Vec<char>,
    /// Letters typed for the pending selection.
    pub buffer: String,
    /// Active player's loose tiles currently selected, in pick order.
    pub selected: Vec<Tile>,
    pub pool_remaining: usize,
    pub words_known: usize,
    /// Commands legal in `phase` (quit is always legal and not listed).
    pub legal: Vec<CommandKind>,
}

impl GameState {
    /// Borrow a render view of this state.
    #[must_use]
    pub fn snapshot(&self) -> RenderSnapshot<'_> {
        let loose = self.active().hand.loose();
        let selected = self
            .selection
            .indices()
            .filter_map(|i| loose.get(i).copied())
            .collect();

        RenderSnapshot {
            phase: self.phase,
            turn: self.turn,
            active_player: self.active_player,
            drawn: self.drawn,
            players: &self.players,
            alphabet: selection_alphabet(loose.len()),
            buffer: self.selection.buffer(),
            selected,
            pool_remaining: self.pool.len(),
            words_known: self.learning.words.len(),
            legal: self.phase.legal_commands().collect(),
        }
    }
}
