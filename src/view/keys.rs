//! Keystroke translation.
//!
//! Each key maps to at most one command, depending on the phase:
//!
//! | Phase       | Key                 | Command                |
//! |-------------|---------------------|------------------------|
//! | any         | `q`, `esc`, `ctrl+c`| quit                   |
//! | PreDraw     | `1`                 | draw                   |
//! | Drawing     | `1`                 | pass                   |
//! | Drawing     | `2`                 | scatter                |
//! | Drawing     | selection letter    | discard that tile      |
//! | Grouping    | `1`                 | end turn               |
//! | Grouping    | `2`                 | scatter                |
//! | Grouping    | `enter`             | submit                 |
//! | Grouping    | `backspace`         | backspace              |
//! | Grouping    | selection letter    | select that tile       |
//! | WordConfirm | `y`, `Y`            | confirm word           |
//! | WordConfirm | anything else       | decline word           |
//!
//! `q` is reserved, so the seventeenth loose tile can be selected through
//! the wire form (`select:q`) but not by key.

use std::fmt;
use std::str::FromStr;

use crate::hand::index_for;
use crate::rules::{Command, CommandKind, Phase};

/// A key as the input adapter sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Esc,
    CtrlC,
}

impl FromStr for Key {
    type Err = std::convert::Infallible;

    /// Key names as typed on a line of input. An empty line is `enter`;
    /// any other multi-character text is taken by its first character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.trim() {
            "" | "enter" => Key::Enter,
            "backspace" | "bs" => Key::Backspace,
            "esc" => Key::Esc,
            "ctrl+c" => Key::CtrlC,
            other => other.chars().next().map_or(Key::Enter, Key::Char),
        };
        Ok(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c),
            Key::Enter => f.write_str("enter"),
            Key::Backspace => f.write_str("backspace"),
            Key::Esc => f.write_str("esc"),
            Key::CtrlC => f.write_str("ctrl+c"),
        }
    }
}

/// Translate a key pressed during `phase` into a command.
///
/// Returns `None` for keys with no meaning in that phase.
#[must_use]
pub fn translate(phase: Phase, key: Key) -> Option<Command> {
    if matches!(key, Key::Char('q') | Key::Esc | Key::CtrlC) {
        return Some(Command::Quit);
    }

    match (phase, key) {
        (Phase::PreDraw, Key::Char('1')) => Some(Command::Draw),

        (Phase::Drawing, Key::Char('1')) => Some(Command::Pass),
        (Phase::Drawing, Key::Char('2')) => Some(Command::Scatter),
        (Phase::Drawing, Key::Char(c)) => index_for(c).map(Command::Discard),

        (Phase::Grouping, Key::Char('1')) => Some(Command::EndTurn),
        (Phase::Grouping, Key::Char('2')) => Some(Command::Scatter),
        (Phase::Grouping, Key::Enter) => Some(Command::Submit),
        (Phase::Grouping, Key::Backspace) => Some(Command::Backspace),
        (Phase::Grouping, Key::Char(c)) => index_for(c).map(|_| Command::Select(c)),

        (Phase::WordConfirm, Key::Char('y' | 'Y')) => Some(Command::ConfirmWord),
        (Phase::WordConfirm, _) => Some(Command::DeclineWord),

        _ => None,
    }
}

/// Key hint shown next to a command in the menu.
#[must_use]
pub const fn hint(kind: CommandKind) -> &'static str {
    match kind {
        CommandKind::Draw | CommandKind::Pass | CommandKind::EndTurn => "1",
        CommandKind::Scatter => "2",
        CommandKind::Discard | CommandKind::Select => "a-z",
        CommandKind::Submit => "enter",
        CommandKind::Backspace => "backspace",
        CommandKind::ConfirmWord => "y",
        CommandKind::DeclineWord => "other",
        CommandKind::Quit => "q",
    }
}
