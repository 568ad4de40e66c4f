//! Tile matching rule.

use crate::types::TileFace;

/// Whether two faces form a removable pair.
///
/// Flowers match any flower and seasons match any season; every other face
/// only matches an identical face.
///
/// # Examples
///
/// ```
/// use tui_mahjong_core::matching::tiles_match;
/// use tui_mahjong_types::{Suit, TileFace};
///
/// let f1 = TileFace::new(Suit::Flower, 1).unwrap();
/// let f3 = TileFace::new(Suit::Flower, 3).unwrap();
/// let c1 = TileFace::new(Suit::Character, 1).unwrap();
/// let c2 = TileFace::new(Suit::Character, 2).unwrap();
///
/// assert!(tiles_match(f1, f3));
/// assert!(!tiles_match(c1, c2));
/// ```
pub fn tiles_match(a: TileFace, b: TileFace) -> bool {
    if a.suit.is_wildcard() || b.suit.is_wildcard() {
        return a.suit == b.suit;
    }
    a == b
}
