//! Selection letters and the pending-group selection stack.
//!
//! Loose tile `i` is addressed by the `i`-th lower-case ASCII letter. While
//! grouping, each keystroke pushes a `(letter, index)` pair; backspace pops
//! one pair. Keeping letter and index in a single entry means the typed
//! buffer and the selected indices can never disagree in length or order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::error::SelectionError;

/// Letters used to address loose tiles, in index order.
pub const SELECTION_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Letter that addresses loose tile `index`.
#[must_use]
pub fn letter_for(index: usize) -> Option<char> {
    SELECTION_LETTERS.chars().nth(index)
}

/// Loose-tile index addressed by `letter`.
#[must_use]
pub fn index_for(letter: char) -> Option<usize> {
    SELECTION_LETTERS.chars().position(|c| c == letter)
}

/// Letters addressing a hand of `loose_len` loose tiles.
#[must_use]
pub fn selection_alphabet(loose_len: usize) -> Vec<char> {
    SELECTION_LETTERS.chars().take(loose_len).collect()
}

/// Resolve a selection letter against a hand of `loose_len` loose tiles.
pub fn resolve_letter(letter: char, loose_len: usize) -> Result<usize, SelectionError> {
    let index = index_for(letter).ok_or(SelectionError::UnknownLetter(letter))?;
    if index >= loose_len {
        return Err(SelectionError::OutOfRange { index, len: loose_len });
    }
    Ok(index)
}

/// One selected tile: the letter typed and the loose index it resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pick {
    pub letter: char,
    pub index: usize,
}

/// Ordered stack of picks for the group being assembled.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    picks: SmallVec<[Pick; 8]>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the tile addressed by `letter`.
    ///
    /// Rejects letters outside the hand and tiles that are already selected;
    /// on error the stack is unchanged.
    pub fn push(&mut self, letter: char, loose_len: usize) -> Result<Pick, SelectionError> {
        let index = resolve_letter(letter, loose_len)?;
        if self.picks.iter().any(|p| p.index == index) {
            return Err(SelectionError::AlreadySelected { index });
        }

        let pick = Pick { letter, index };
        self.picks.push(pick);
        Ok(pick)
    }

    /// Undo the most recent pick.
    pub fn pop(&mut self) -> Option<Pick> {
        self.picks.pop()
    }

    pub fn clear(&mut self) {
        self.picks.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    /// Selected indices in pick order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.picks.iter().map(|p| p.index)
    }

    /// The letters typed so far.
    #[must_use]
    pub fn buffer(&self) -> String {
        self.picks.iter().map(|p| p.letter).collect()
    }
}
