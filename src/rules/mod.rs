//! Turn rules for the word game.
//!
//! - `Command`: one player action, with a textual wire form
//! - `Phase` and `TRANSITIONS`: which commands are legal when
//! - `GameState`: the complete engine snapshot
//! - `WordGame`: applies commands to states
//!
//! The engine never interprets keystrokes or touches the filesystem; those
//! live in `view` and `session`.

pub mod command;
pub mod phase;
pub mod state;
pub mod snapshot;
pub mod engine;

pub use command::{Command, CommandKind, CommandParseError};
pub use phase::{Phase, TRANSITIONS};
pub use state::{GameState, PlayerState};
pub use snapshot::RenderSnapshot;
pub use engine::{Step, WordGame};
