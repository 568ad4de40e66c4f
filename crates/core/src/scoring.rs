//! Scoring module - points for a removed pair
//!
//! `increment = multiplier(suit) x (live tiles after removal / 2 + 1)`
//!
//! | Suit | Multiplier |
//! |------|------------|
//! | Character | 1 |
//! | Circle | 2 |
//! | Bamboo | 3 |
//! | Wind | 4 |
//! | Dragon | 5 |
//! | Flower | 6 |
//! | Season | 7 |
//!
//! Pairs removed early are worth more, and the suit is taken from the first
//! pick.

use crate::types::TileFace;

/// Points for removing a pair whose first pick shows `face`.
pub fn pair_score(face: TileFace, live_after: usize) -> u32 {
    face.suit.multiplier() * (live_after as u32 / 2 + 1)
}
