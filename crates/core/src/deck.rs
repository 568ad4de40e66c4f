//! Deck composition - the face multiset dealt at each difficulty
//!
//! | Faces | Easy | Medium | Hard |
//! |---|---|---|---|
//! | Bamboo 1-9 | 4 | 4 | 4 |
//! | Wind 1-4 | 4 | 4 | 4 |
//! | Dragon 1-3 | 4 | 4 | 4 |
//! | Character 1-9 | 2 | 2 | 4 |
//! | Season 1-4 | 1 | 1 | 1 |
//! | Circle 1-9 | - | 4 | 4 |
//! | Flower 1-4 | - | - | 1 |
//!
//! Totals are 86, 122 and 144, matching the standard layouts.

use crate::rng::SimpleRng;
use crate::types::{Difficulty, Suit, TileFace};

/// Unshuffled faces for a difficulty.
///
/// Copies of the same face are adjacent, and wildcard ranks follow each other,
/// so consecutive pairs always match.
pub fn composition(difficulty: Difficulty) -> Vec<TileFace> {
    let mut faces = Vec::with_capacity(difficulty.num_tiles());

    push_copies(&mut faces, Suit::Bamboo, 4);
    push_copies(&mut faces, Suit::Wind, 4);
    push_copies(&mut faces, Suit::Dragon, 4);

    let characters = if difficulty == Difficulty::Hard { 4 } else { 2 };
    push_copies(&mut faces, Suit::Character, characters);
    push_copies(&mut faces, Suit::Season, 1);

    if difficulty != Difficulty::Easy {
        push_copies(&mut faces, Suit::Circle, 4);
    }
    if difficulty == Difficulty::Hard {
        push_copies(&mut faces, Suit::Flower, 1);
    }

    faces
}

/// Faces for a difficulty in Fisher-Yates order driven by `rng`.
pub fn deal(difficulty: Difficulty, rng: &mut SimpleRng) -> Vec<TileFace> {
    let mut faces = composition(difficulty);
    rng.shuffle(&mut faces);
    faces
}

fn push_copies(faces: &mut Vec<TileFace>, suit: Suit, copies: usize) {
    for face in TileFace::all_of(suit) {
        faces.extend(std::iter::repeat(face).take(copies));
    }
}
