//! A player's hand: loose tiles plus committed groups.
//!
//! Every tile a player holds is in exactly one place, either the loose list
//! or one group's tile list. Discard, commit and scatter move tiles between
//! those places without creating or losing any.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::selection::Selection;
use crate::core::error::SelectionError;
use crate::core::tile::{spell, Tile};

/// A committed run of tiles forming a candidate word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Concatenation of `tiles`' glyphs.
    pub word: String,

    /// Tiles in the order they were selected.
    pub tiles: SmallVec<[Tile; 8]>,

    /// Whether the player confirmed this group as a word.
    pub registered: bool,
}

impl Group {
    /// Build a group from tiles, spelling its word.
    #[must_use]
    pub fn new(tiles: impl IntoIterator<Item = Tile>, registered: bool) -> Self {
        let tiles: SmallVec<[Tile; 8]> = tiles.into_iter().collect();
        Self {
            word: spell(&tiles),
            tiles,
            registered,
        }
    }
}

/// Loose tiles and groups held by one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    loose: Vec<Tile>,
    groups: Vec<Group>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A hand holding `tiles` loose, in order.
    #[must_use]
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Self {
        Self {
            loose: tiles.into_iter().collect(),
            groups: Vec::new(),
        }
    }

    #[must_use]
    pub fn loose(&self) -> &[Tile] {
        &self.loose
    }

    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Add dealt tiles to the end of the loose list.
    pub fn receive(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        self.loose.extend(tiles);
    }

    /// Remove the loose tile at `index`, then bank `drawn` (if any) into
    /// the loose list. Returns the discarded tile.
    ///
    /// Nothing changes if `index` is out of range.
    pub fn discard(&mut self, index: usize, drawn: Option<Tile>) -> Result<Tile, SelectionError> {
        if index >= self.loose.len() {
            return Err(SelectionError::OutOfRange {
                index,
                len: self.loose.len(),
            });
        }

        let discarded = self.loose.remove(index);
        self.loose.extend(drawn);
        Ok(discarded)
    }

    /// Turn the selected loose tiles into a new group.
    ///
    /// The group's tiles follow pick order. Tiles leave the loose list from
    /// the highest index down so earlier removals never shift a pending
    /// index. The whole selection is validated before anything moves.
    pub fn commit_group(
        &mut self,
        selection: &Selection,
        registered: bool,
    ) -> Result<&Group, SelectionError> {
        if selection.is_empty() {
            return Err(SelectionError::Empty);
        }

        let mut indices: SmallVec<[usize; 8]> = selection.indices().collect();
        for &index in &indices {
            if index >= self.loose.len() {
                return Err(SelectionError::OutOfRange {
                    index,
                    len: self.loose.len(),
                });
            }
        }

        let group = Group::new(indices.iter().map(|&i| self.loose[i]), registered);

        indices.sort_unstable_by(|a, b| b.cmp(a));
        for pair in indices.windows(2) {
            if pair[0] == pair[1] {
                return Err(SelectionError::AlreadySelected { index: pair[0] });
            }
        }
        for index in indices {
            self.loose.remove(index);
        }

        self.groups.push(group);
        Ok(&self.groups[self.groups.len() - 1])
    }

    /// Break every group back into loose tiles, in group order then tile
    /// order, and drop the groups.
    pub fn scatter(&mut self) {
        for group in self.groups.drain(..) {
            self.loose.extend(group.tiles);
        }
    }

    /// Every tile held, loose tiles first.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.loose
            .iter()
            .chain(self.groups.iter().flat_map(|g| g.tiles.iter()))
    }

    /// Number of tiles held, loose and grouped.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.loose.len() + self.groups.iter().map(|g| g.tiles.len()).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tile::count_tiles;

    fn tiles(s: &str) -> Vec<Tile> {
        s.chars().map(Tile).collect()
    }

    fn select(letters: &str, loose_len: usize) -> Selection {
        let mut sel = Selection::new();
        for letter in letters.chars() {
            sel.push(letter, loose_len).unwrap();
        }
        sel
    }

    #[test]
    fn test_discard_banks_drawn_tile() {
        let mut hand = Hand::from_tiles(tiles("あいう"));

        let discarded = hand.discard(1, Some(Tile('ん'))).unwrap();

        assert_eq!(discarded, Tile('い'));
        assert_eq!(hand.loose(), tiles("あうん").as_slice());
    }

    #[test]
    fn test_discard_without_drawn_tile() {
        let mut hand = Hand::from_tiles(tiles("あいう"));

        hand.discard(0, None).unwrap();

        assert_eq!(hand.loose(), tiles("いう").as_slice());
    }

    #[test]
    fn test_discard_out_of_range() {
        let mut hand = Hand::from_tiles(tiles("あい"));

        assert_eq!(
            hand.discard(2, Some(Tile('ん'))),
            Err(SelectionError::OutOfRange { index: 2, len: 2 })
        );
        assert_eq!(hand.loose(), tiles("あい").as_slice());
    }

    #[test]
    fn test_commit_removes_by_descending_index() {
        // a b c d e, select indices {1, 3, 4}
        let mut hand = Hand::from_tiles(tiles("かきくけこ"));
        let sel = select("bde", 5);

        let group = hand.commit_group(&sel, false).unwrap().clone();

        assert_eq!(group.word, "きけこ");
        assert_eq!(group.tiles.as_slice(), tiles("きけこ").as_slice());
        assert!(!group.registered);
        assert_eq!(hand.loose(), tiles("かく").as_slice());
        assert_eq!(hand.groups().len(), 1);
    }

    #[test]
    fn test_commit_follows_pick_order() {
        let mut hand = Hand::from_tiles(tiles("らくさ"));
        let sel = select("cba", 3);

        let group = hand.commit_group(&sel, true).unwrap();

        assert_eq!(group.word, "さくら");
        assert!(group.registered);
        assert!(hand.loose().is_empty());
    }

    #[test]
    fn test_commit_empty_selection() {
        let mut hand = Hand::from_tiles(tiles("あい"));

        assert_eq!(
            hand.commit_group(&Selection::new(), true).cloned(),
            Err(SelectionError::Empty)
        );
        assert!(hand.groups().is_empty());
    }

    #[test]
    fn test_commit_stale_selection_changes_nothing() {
        let mut hand = Hand::from_tiles(tiles("あいうえ"));
        let sel = select("ad", 4);
        hand.discard(0, None).unwrap();

        assert_eq!(
            hand.commit_group(&sel, false).cloned(),
            Err(SelectionError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(hand.loose(), tiles("いうえ").as_slice());
    }

    #[test]
    fn test_groups_keep_insertion_order() {
        let mut hand = Hand::from_tiles(tiles("あいうえお"));

        hand.commit_group(&select("a", 5), false).unwrap();
        hand.commit_group(&select("ab", 4), false).unwrap();

        let words: Vec<_> = hand.groups().iter().map(|g| g.word.as_str()).collect();
        assert_eq!(words, vec!["あ", "いう"]);
    }

    #[test]
    fn test_scatter_restores_tiles() {
        let mut hand = Hand::from_tiles(tiles("あいうえお"));
        let before = count_tiles(hand.loose());

        hand.commit_group(&select("be", 5), false).unwrap();
        hand.commit_group(&select("a", 3), true).unwrap();
        hand.scatter();

        assert!(hand.groups().is_empty());
        assert_eq!(hand.loose(), tiles("うえいおあ").as_slice());
        assert_eq!(count_tiles(hand.loose()), before);
    }

    #[test]
    fn test_tile_count_spans_loose_and_groups() {
        let mut hand = Hand::from_tiles(tiles("あいうえ"));
        hand.commit_group(&select("ac", 4), false).unwrap();

        assert_eq!(hand.tile_count(), 4);
        assert_eq!(hand.tiles().count(), 4);
    }
}
