//! Hands, groups and group formation.
//!
//! ## Key Types
//!
//! - `Hand`: a player's loose tiles and committed groups
//! - `Group`: an ordered run of tiles spelling a candidate word
//! - `Selection`: the `(letter, index)` stack a player builds a group from

pub mod group;
pub mod selection;

pub use group::{Group, Hand};
pub use selection::{
    index_for, letter_for, resolve_letter, selection_alphabet, Pick, Selection,
    SELECTION_LETTERS,
};
