//! The interactive game loop.
//!
//! A `Session` owns the current `GameState` and is the only place it is
//! replaced. Input arrives one line at a time; each line is read as a wire
//! command (`draw`, `select:b`, ...) or, failing that, as a key for the
//! current phase. After every line the board is printed again.
//!
//! Learning data is saved when the session ends for any reason, and after
//! each end-turn when the config asks for `Checkpoint::EveryTurn`.

use std::io::{BufRead, Write};

use thiserror::Error;

use crate::core::config::{Checkpoint, GameConfig};
use crate::core::error::EngineError;
use crate::dictionary::{LearningStore, StoreError};
use crate::rules::{Command, GameState, Step, WordGame};
use crate::view::{translate, Key, Renderer};

/// Why a session stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// A player quit.
    Quit,
    /// A draw found the pool empty.
    PoolExhausted,
    /// The input stream ended.
    InputClosed,
}

/// What a single command did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handled {
    Applied,
    Ignored,
    Quit,
}

/// Failures that stop a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("cannot start game: {0}")]
    Engine(#[from] EngineError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub struct Session {
    game: WordGame,
    state: GameState,
    store: LearningStore,
    renderer: Renderer,
}

impl Session {
    /// Load learning data from `store` and deal a new game.
    pub fn start(
        config: GameConfig,
        store: LearningStore,
        renderer: Renderer,
    ) -> Result<Self, SessionError> {
        let learning = store.load()?;
        let game = WordGame::new(config);
        let state = game.new_game(learning)?;

        Ok(Self {
            game,
            state,
            store,
            renderer,
        })
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Read one line of input as a command for the current phase.
    #[must_use]
    pub fn interpret(&self, line: &str) -> Option<Command> {
        if let Ok(command) = line.parse::<Command>() {
            return Some(command);
        }
        match line.parse::<Key>() {
            Ok(key) => translate(self.state.phase, key),
            Err(never) => match never {},
        }
    }

    /// Apply one command, replacing the state if it was accepted.
    pub fn handle(&mut self, command: Command) -> Result<Handled, EngineError> {
        match self.game.apply(&self.state, command)? {
            Step::Applied(next) => {
                self.state = next;
                Ok(Handled::Applied)
            }
            Step::Ignored => Ok(Handled::Ignored),
            Step::Quit => Ok(Handled::Quit),
        }
    }

    /// Write the current learning data to the store.
    pub fn save(&self) -> Result<(), StoreError> {
        self.store.save(&self.state.learning)
    }

    /// Play until quit, pool exhaustion or end of input.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut out: W,
    ) -> Result<SessionEnd, SessionError> {
        writeln!(out, "{}", self.renderer.render(&self.state.snapshot()))?;

        for line in input.lines() {
            let line = line?;
            let Some(command) = self.interpret(&line) else {
                log::trace!("no command for {:?} during {}", line, self.state.phase);
                continue;
            };

            match self.handle(command) {
                Ok(Handled::Quit) => {
                    self.save()?;
                    writeln!(out, "bye")?;
                    return Ok(SessionEnd::Quit);
                }
                Ok(Handled::Ignored) => {}
                Ok(Handled::Applied) => {
                    if command == Command::EndTurn
                        && self.game.config().checkpoint == Checkpoint::EveryTurn
                    {
                        self.save()?;
                    }
                }
                Err(err) if err.is_fatal() => {
                    log::error!("{} ends the game: {}", command, err);
                    self.save()?;
                    writeln!(out, "game over: {}", err)?;
                    return Ok(SessionEnd::PoolExhausted);
                }
                Err(err) => {
                    log::warn!("rejected {}: {}", command, err);
                    writeln!(out, "! {}", err)?;
                }
            }

            writeln!(out, "{}", self.renderer.render(&self.state.snapshot()))?;
        }

        self.save()?;
        Ok(SessionEnd::InputClosed)
    }
}
