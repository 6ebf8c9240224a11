//! Engine error types.
//!
//! Every variant describes a command the engine refused. A refused command
//! leaves the game state exactly as it was, so callers can report the
//! error and keep going; only `PoolExhausted` ends the game.

use thiserror::Error;

/// A selection or index that does not address a loose tile.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("index {index} is out of range for {len} loose tiles")]
    OutOfRange { index: usize, len: usize },

    #[error("tile {index} is already selected")]
    AlreadySelected { index: usize },

    #[error("'{0}' is not a selection letter")]
    UnknownLetter(char),

    #[error("nothing is selected")]
    Empty,
}

/// A command the engine rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid selection: {0}")]
    InvalidSelection(#[from] SelectionError),

    #[error("tile pool exhausted: needed {requested}, {remaining} left")]
    PoolExhausted { requested: usize, remaining: usize },
}

impl EngineError {
    /// Whether the game cannot continue after this error.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, EngineError::PoolExhausted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = EngineError::from(SelectionError::OutOfRange { index: 5, len: 3 });
        assert_eq!(
            err.to_string(),
            "invalid selection: index 5 is out of range for 3 loose tiles"
        );

        let err = EngineError::PoolExhausted { requested: 1, remaining: 0 };
        assert_eq!(err.to_string(), "tile pool exhausted: needed 1, 0 left");
    }

    #[test]
    fn test_fatality() {
        assert!(EngineError::PoolExhausted { requested: 1, remaining: 0 }.is_fatal());
        assert!(!EngineError::InvalidSelection(SelectionError::Empty).is_fatal());
    }
}
