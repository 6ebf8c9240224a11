//! The word game rules engine.
//!
//! `WordGame::apply` is the only way a game advances:
//! - `Quit` is always accepted and ends the game
//! - A command with no row in the phase table is ignored
//! - Otherwise the command runs against a clone of the state and the new
//!   state is returned; on error the caller still holds the old state
//!
//! Every action works on the active player, whichever seat that is.

use super::command::Command;
use super::state::GameState;
use crate::core::config::{GameConfig, PassPolicy};
use crate::core::error::{EngineError, SelectionError};
use crate::core::player::PLAYER_COUNT;
use crate::core::rng::GameRng;
use crate::dictionary::LearningData;
use crate::pool::TilePool;

/// Result of applying one command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The command was legal and produced this state.
    Applied(GameState),
    /// The command is not legal in the current phase; nothing changed.
    Ignored,
    /// The player asked to leave.
    Quit,
}

/// Rules engine for the two-player word game.
#[derive(Clone, Debug, Default)]
pub struct WordGame {
    config: GameConfig,
}

impl WordGame {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Shuffle a fresh pool and deal both hands.
    ///
    /// Uses the configured seed, or OS entropy when none is set.
    pub fn new_game(&self, learning: LearningData) -> Result<GameState, EngineError> {
        let mut rng = match self.config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        log::info!("dealing new game with seed {}", rng.seed());

        let pool = TilePool::initialize(&mut rng);
        GameState::deal(pool, self.config.hand_size, learning)
    }

    /// Whether `command` is legal in the state's current phase.
    #[must_use]
    pub fn is_legal(&self, state: &GameState, command: Command) -> bool {
        command == Command::Quit || state.phase.next(command.kind()).is_some()
    }

    /// Apply a command to a state.
    pub fn apply(&self, state: &GameState, command: Command) -> Result<Step, EngineError> {
        if command == Command::Quit {
            return Ok(Step::Quit);
        }

        let Some(to) = state.phase.next(command.kind()) else {
            log::trace!("ignoring {} during {}", command, state.phase);
            return Ok(Step::Ignored);
        };

        let mut next = state.clone();
        self.perform(&mut next, command)?;
        next.phase = to;

        log::debug!(
            "{} {}: {} -> {} (turn {})",
            state.active_player,
            command,
            state.phase,
            to,
            next.turn
        );
        Ok(Step::Applied(next))
    }

    fn perform(&self, state: &mut GameState, command: Command) -> Result<(), EngineError> {
        match command {
            Command::Draw => {
                state.drawn = Some(state.pool.draw()?);
            }
            Command::Pass => {
                if let Some(tile) = state.drawn.take() {
                    match self.config.pass_policy {
                        PassPolicy::ToRiver => state.active_mut().river.push(tile),
                        PassPolicy::ReturnToPool => state.pool.return_to_bottom(tile),
                    }
                }
            }
            Command::Discard(index) => {
                let drawn = state.drawn;
                let player = state.active_mut();
                let discarded = player.hand.discard(index, drawn)?;
                player.river.push(discarded);
                state.drawn = None;
            }
            Command::Select(letter) => {
                let loose_len = state.active().hand.loose().len();
                state.selection.push(letter, loose_len)?;
            }
            Command::Submit => {
                if state.selection.is_empty() {
                    return Err(SelectionError::Empty.into());
                }
            }
            Command::Backspace => {
                state.selection.pop();
            }
            Command::EndTurn => {
                state.selection.clear();
                state.active_player = state.active_player.next(PLAYER_COUNT);
                state.turn += 1;
            }
            Command::Scatter => {
                state.active_mut().hand.scatter();
                state.selection.clear();
            }
            Command::ConfirmWord | Command::DeclineWord => {
                let confirm = command == Command::ConfirmWord;
                let selection = std::mem::take(&mut state.selection);
                let group = state
                    .active_mut()
                    .hand
                    .commit_group(&selection, confirm)?
                    .clone();

                if confirm {
                    let registration = state.learning.register_word(
                        &group.word,
                        &group.tiles,
                        self.config.registration_log,
                    );
                    log::info!("registered '{}': {:?}", group.word, registration);
                }
            }
            Command::Quit => {}
        }
        Ok(())
    }
}
