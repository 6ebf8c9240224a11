//! Text rendering of a `RenderSnapshot`.
//!
//! The renderer is a pure function of the snapshot and a `Style`. It owns no
//! game state and never mutates one; the session prints whatever it
//! returns.

use colored::{Color, Colorize};

use crate::core::player::PlayerId;
use crate::core::tile::{spell, Tile};
use crate::hand::Group;
use crate::rules::{PlayerState, RenderSnapshot};

use super::keys::hint;

/// Colors used by the renderer. `enabled: false` renders plain text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Style {
    pub enabled: bool,
    pub header: Color,
    pub active: Color,
    pub tile: Color,
    pub letter: Color,
    pub registered: Color,
    pub hint: Color,
    pub muted: Color,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            enabled: true,
            header: Color::Cyan,
            active: Color::Yellow,
            tile: Color::White,
            letter: Color::Green,
            registered: Color::Magenta,
            hint: Color::Blue,
            muted: Color::BrightBlack,
        }
    }
}

impl Style {
    /// A style that emits no escape codes.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Turns snapshots into printable boards.
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    style: Style,
}

impl Renderer {
    #[must_use]
    pub fn new(style: Style) -> Self {
        Self { style }
    }

    /// Render the whole board, one line per row, ending with the menu.
    #[must_use]
    pub fn render(&self, snap: &RenderSnapshot<'_>) -> String {
        let mut lines = Vec::new();

        lines.push(self.style.paint(
            &format!(
                "== turn {} · {} · {} ==",
                snap.turn, snap.active_player, snap.phase
            ),
            self.style.header,
        ));
        lines.push(self.style.paint(
            &format!("pool {}  words {}", snap.pool_remaining, snap.words_known),
            self.style.muted,
        ));
        if let Some(tile) = snap.drawn {
            lines.push(format!("drawn: {}", self.style.paint(&tile.to_string(), self.style.active)));
        }

        for (player, state) in snap.players.iter() {
            let active = player == snap.active_player;
            self.render_player(&mut lines, player, state, active, &snap.alphabet);
        }

        if !snap.buffer.is_empty() {
            lines.push(format!(
                "selected: {} → {}",
                self.style.paint(&snap.buffer, self.style.letter),
                spell(&snap.selected)
            ));
        }

        lines.push(self.menu(snap));
        lines.join("\n")
    }

    fn render_player(
        &self,
        lines: &mut Vec<String>,
        player: PlayerId,
        state: &PlayerState,
        active: bool,
        alphabet: &[char],
    ) {
        let name = if active {
            self.style.paint(&format!("{} *", state.name), self.style.active)
        } else {
            state.name.clone()
        };
        lines.push(format!("{}  score {}", name, state.score));
        log::trace!("rendering {} ({} loose)", player, state.hand.loose().len());

        lines.push(format!("  river:  {}", self.row(&state.river)));

        let groups: Vec<String> = state.hand.groups().iter().map(|g| self.group(g)).collect();
        lines.push(format!("  groups: {}", groups.join(" ")));

        lines.push(format!("  loose:  {}", self.row(state.hand.loose())));
        if active {
            let letters: Vec<String> = alphabet
                .iter()
                .map(|c| self.style.paint(&format!("{}  ", c), self.style.letter))
                .collect();
            lines.push(format!("          {}", letters.concat().trim_end()));
        }
    }

    fn row(&self, tiles: &[Tile]) -> String {
        let glyphs: Vec<String> = tiles
            .iter()
            .map(|t| self.style.paint(&t.to_string(), self.style.tile))
            .collect();
        glyphs.join(" ")
    }

    fn group(&self, group: &Group) -> String {
        if group.registered {
            self.style.paint(&format!("[{}]", group.word), self.style.registered)
        } else {
            format!("[{}]", group.word)
        }
    }

    fn menu(&self, snap: &RenderSnapshot<'_>) -> String {
        let entries: Vec<String> = snap
            .legal
            .iter()
            .map(|&kind| {
                format!(
                    "{} {}",
                    self.style.paint(&format!("[{}]", hint(kind)), self.style.hint),
                    kind.name()
                )
            })
            .chain(std::iter::once(format!(
                "{} quit",
                self.style.paint("[q]", self.style.hint)
            )))
            .collect();
        entries.join("  ")
    }
}
