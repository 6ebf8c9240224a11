//! Tiles and the fixed tile alphabet.
//!
//! A `Tile` is a single kana glyph. Tiles carry no identity beyond the
//! glyph itself: two あ tiles are interchangeable, so the engine counts
//! tiles rather than tracking them individually.
//!
//! ## Composition
//!
//! A full set is 214 tiles:
//! - 46 base kana (あ..ん), four of each
//! - 3 modifiers (゛ ゜ ー), ten of each

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// The 46 base kana glyphs, in gojūon order.
pub const BASE_GLYPHS: [char; 46] = [
    'あ', 'い', 'う', 'え', 'お',
    'か', 'き', 'く', 'け', 'こ',
    'さ', 'し', 'す', 'せ', 'そ',
    'た', 'ち', 'つ', 'て', 'と',
    'な', 'に', 'ぬ', 'ね', 'の',
    'は', 'ひ', 'ふ', 'へ', 'ほ',
    'ま', 'み', 'む', 'め', 'も',
    'や', 'ゆ', 'よ',
    'ら', 'り', 'る', 'れ', 'ろ',
    'わ', 'を', 'ん',
];

/// Voicing marks and the long-vowel mark.
pub const MODIFIER_GLYPHS: [char; 3] = ['゛', '゜', 'ー'];

/// Copies of each base glyph in a full set.
pub const BASE_COPIES: usize = 4;

/// Copies of each modifier glyph in a full set.
pub const MODIFIER_COPIES: usize = 10;

/// Total tiles in a full set.
pub const TOTAL_TILES: usize =
    BASE_GLYPHS.len() * BASE_COPIES + MODIFIER_GLYPHS.len() * MODIFIER_COPIES;

/// A single drawable glyph.
///
/// Serializes as a one-character string so persisted word entries stay
/// human-readable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tile(pub char);

impl Tile {
    /// Whether this glyph is one of the modifier marks.
    #[must_use]
    pub fn is_modifier(self) -> bool {
        MODIFIER_GLYPHS.contains(&self.0)
    }

    /// Whether this glyph belongs to the game's alphabet at all.
    #[must_use]
    pub fn is_known(self) -> bool {
        BASE_GLYPHS.contains(&self.0) || self.is_modifier()
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The full, unshuffled 214-tile set.
#[must_use]
pub fn full_set() -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(TOTAL_TILES);

    for _ in 0..BASE_COPIES {
        tiles.extend(BASE_GLYPHS.iter().copied().map(Tile));
    }
    for glyph in MODIFIER_GLYPHS {
        tiles.extend(std::iter::repeat(Tile(glyph)).take(MODIFIER_COPIES));
    }

    tiles
}

/// Concatenate tiles into the word they spell.
#[must_use]
pub fn spell<'a>(tiles: impl IntoIterator<Item = &'a Tile>) -> String {
    tiles.into_iter().map(|t| t.0).collect()
}

/// Multiset of tiles, keyed by glyph.
pub type TileCounts = FxHashMap<Tile, usize>;

/// Count tiles into a multiset.
pub fn count_tiles<'a>(tiles: impl IntoIterator<Item = &'a Tile>) -> TileCounts {
    let mut counts = TileCounts::default();
    for tile in tiles {
        *counts.entry(*tile).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_set_size() {
        assert_eq!(TOTAL_TILES, 214);
        assert_eq!(full_set().len(), 214);
    }

    #[test]
    fn test_full_set_composition() {
        let counts = count_tiles(&full_set());

        assert_eq!(counts.len(), 49);
        for glyph in BASE_GLYPHS {
            assert_eq!(counts[&Tile(glyph)], 4, "base glyph {}", glyph);
        }
        for glyph in MODIFIER_GLYPHS {
            assert_eq!(counts[&Tile(glyph)], 10, "modifier glyph {}", glyph);
        }
    }

    #[test]
    fn test_modifier_detection() {
        assert!(Tile('゛').is_modifier());
        assert!(Tile('ー').is_modifier());
        assert!(!Tile('あ').is_modifier());

        assert!(Tile('ん').is_known());
        assert!(!Tile('x').is_known());
    }

    #[test]
    fn test_spell() {
        let tiles = [Tile('さ'), Tile('く'), Tile('ら')];
        assert_eq!(spell(&tiles), "さくら");
        assert_eq!(spell(&[]), "");
    }

    #[test]
    fn test_tile_serializes_as_string() {
        let json = serde_json::to_string(&Tile('ね')).unwrap();
        assert_eq!(json, "\"ね\"");

        let back: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Tile('ね'));
    }
}
