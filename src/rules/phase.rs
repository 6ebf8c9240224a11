//! Turn phases and the transition table.
//!
//! ```text
//! PreDraw      --draw-------------------> Drawing
//! Drawing      --pass | discard---------> Grouping     (scatter stays)
//! Grouping     --submit-----------------> WordConfirm  (select, backspace, scatter stay)
//! Grouping     --end-turn---------------> PreDraw      (other player)
//! WordConfirm  --confirm | decline------> Grouping
//! ```
//!
//! A command whose kind has no row for the current phase is not legal
//! there. `Quit` is legal everywhere and handled outside the table.

use serde::{Deserialize, Serialize};

use super::command::CommandKind;

/// Step of the turn state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the active player to draw.
    #[default]
    PreDraw,
    /// A tile has been drawn; pass it or discard a loose tile.
    Drawing,
    /// Building groups from loose tiles.
    Grouping,
    /// A selection was submitted; confirm it as a word or not.
    WordConfirm,
}

/// `(from, command, to)` rows of the phase machine.
pub const TRANSITIONS: &[(Phase, CommandKind, Phase)] = &[
    (Phase::PreDraw, CommandKind::Draw, Phase::Drawing),
    (Phase::Drawing, CommandKind::Pass, Phase::Grouping),
    (Phase::Drawing, CommandKind::Discard, Phase::Grouping),
    (Phase::Drawing, CommandKind::Scatter, Phase::Drawing),
    (Phase::Grouping, CommandKind::EndTurn, Phase::PreDraw),
    (Phase::Grouping, CommandKind::Scatter, Phase::Grouping),
    (Phase::Grouping, CommandKind::Submit, Phase::WordConfirm),
    (Phase::Grouping, CommandKind::Select, Phase::Grouping),
    (Phase::Grouping, CommandKind::Backspace, Phase::Grouping),
    (Phase::WordConfirm, CommandKind::ConfirmWord, Phase::Grouping),
    (Phase::WordConfirm, CommandKind::DeclineWord, Phase::Grouping),
];

impl Phase {
    /// Phase reached by a command of `kind`, if legal here.
    #[must_use]
    pub fn next(self, kind: CommandKind) -> Option<Phase> {
        TRANSITIONS
            .iter()
            .find(|(from, k, _)| *from == self && *k == kind)
            .map(|&(_, _, to)| to)
    }

    /// Command kinds legal in this phase, in table order.
    pub fn legal_commands(self) -> impl Iterator<Item = CommandKind> {
        TRANSITIONS
            .iter()
            .filter(move |(from, _, _)| *from == self)
            .map(|&(_, kind, _)| kind)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Phase::PreDraw => "before draw",
            Phase::Drawing => "drawing",
            Phase::Grouping => "grouping",
            Phase::WordConfirm => "word?",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
