//! Engine commands and their wire form.
//!
//! The input adapter produces one `Command` per keystroke. Commands also
//! have a textual form, used for scripted input and logs:
//!
//! | Wire form        | Command                 |
//! |------------------|-------------------------|
//! | `draw`           | `Command::Draw`         |
//! | `pass`           | `Command::Pass`         |
//! | `discard:<n>`    | `Command::Discard(n)`   |
//! | `select:<c>`     | `Command::Select(c)`    |
//! | `submit`         | `Command::Submit`       |
//! | `backspace`      | `Command::Backspace`    |
//! | `end-turn`       | `Command::EndTurn`      |
//! | `scatter`        | `Command::Scatter`      |
//! | `confirm-word`   | `Command::ConfirmWord`  |
//! | `decline-word`   | `Command::DeclineWord`  |
//! | `quit`           | `Command::Quit`         |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Take the front tile of the pool.
    Draw,
    /// Give up the drawn tile and move on to grouping.
    Pass,
    /// Discard the loose tile at this index, keeping the drawn tile.
    Discard(usize),
    /// Add the loose tile addressed by this letter to the selection.
    Select(char),
    /// Finish the selection and ask whether it is a word.
    Submit,
    /// Drop the most recent selection.
    Backspace,
    /// Hand play to the other player.
    EndTurn,
    /// Break all groups back into loose tiles.
    Scatter,
    /// Commit the selection as a group and register it as a word.
    ConfirmWord,
    /// Commit the selection as a plain group.
    DeclineWord,
    /// Leave the game.
    Quit,
}

/// Payload-free command discriminant, used by the phase table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandKind {
    Draw,
    Pass,
    Discard,
    Select,
    Submit,
    Backspace,
    EndTurn,
    Scatter,
    ConfirmWord,
    DeclineWord,
    Quit,
}

impl Command {
    #[must_use]
    pub fn kind(self) -> CommandKind {
        match self {
            Command::Draw => CommandKind::Draw,
            Command::Pass => CommandKind::Pass,
            Command::Discard(_) => CommandKind::Discard,
            Command::Select(_) => CommandKind::Select,
            Command::Submit => CommandKind::Submit,
            Command::Backspace => CommandKind::Backspace,
            Command::EndTurn => CommandKind::EndTurn,
            Command::Scatter => CommandKind::Scatter,
            Command::ConfirmWord => CommandKind::ConfirmWord,
            Command::DeclineWord => CommandKind::DeclineWord,
            Command::Quit => CommandKind::Quit,
        }
    }
}

impl CommandKind {
    /// Wire name, without any payload.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CommandKind::Draw => "draw",
            CommandKind::Pass => "pass",
            CommandKind::Discard => "discard",
            CommandKind::Select => "select",
            CommandKind::Submit => "submit",
            CommandKind::Backspace => "backspace",
            CommandKind::EndTurn => "end-turn",
            CommandKind::Scatter => "scatter",
            CommandKind::ConfirmWord => "confirm-word",
            CommandKind::DeclineWord => "decline-word",
            CommandKind::Quit => "quit",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Discard(index) => write!(f, "discard:{}", index),
            Command::Select(letter) => write!(f, "select:{}", letter),
            other => f.write_str(other.kind().name()),
        }
    }
}

/// Text that is not a command.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unrecognized command '{0}'")]
pub struct CommandParseError(pub String);

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let unrecognized = || CommandParseError(s.to_string());

        if let Some((name, arg)) = s.split_once(':') {
            return match name {
                "discard" => arg.parse().map(Command::Discard).map_err(|_| unrecognized()),
                "select" => {
                    let mut chars = arg.chars();
                    match (chars.next(), chars.next()) {
                        (Some(letter), None) => Ok(Command::Select(letter)),
                        _ => Err(unrecognized()),
                    }
                }
                _ => Err(unrecognized()),
            };
        }

        match s {
            "draw" => Ok(Command::Draw),
            "pass" => Ok(Command::Pass),
            "submit" => Ok(Command::Submit),
            "backspace" => Ok(Command::Backspace),
            "end-turn" => Ok(Command::EndTurn),
            "scatter" => Ok(Command::Scatter),
            "confirm-word" => Ok(Command::ConfirmWord),
            "decline-word" => Ok(Command::DeclineWord),
            "quit" => Ok(Command::Quit),
            _ => Err(unrecognized()),
        }
    }
}
