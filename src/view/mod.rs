//! Terminal collaborators around the engine.
//!
//! - `keys`: keystroke → command, per phase
//! - `render`: snapshot → text, styled by a `Style` value
//!
//! Neither holds game state.

pub mod keys;
pub mod render;

pub use keys::{hint, translate, Key};
pub use render::{Renderer, Style};
