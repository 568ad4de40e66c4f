//! Move availability
//!
//! A move is an unordered pair of distinct live, removable slots with
//! matching faces. Checked at game start and after every removal to detect a
//! stuck board.

use crate::board::Board;
use crate::matching::tiles_match;

/// Whether at least one legal pair exists.
pub fn has_move(board: &Board) -> bool {
    find_move(board).is_some()
}

/// The first legal pair `(i, j)`, `i < j`, in scan order.
pub fn find_move(board: &Board) -> Option<(usize, usize)> {
    let free: Vec<usize> = board.removable_slots().collect();
    for (n, &i) in free.iter().enumerate() {
        let a = board.face(i)?;
        for &j in &free[n + 1..] {
            if board.face(j).is_some_and(|b| tiles_match(a, b)) {
                return Some((i, j));
            }
        }
    }
    None
}

/// Every legal pair, ordered by `(i, j)`.
pub fn legal_moves(board: &Board) -> Vec<(usize, usize)> {
    let free: Vec<usize> = board.removable_slots().collect();
    let mut out = Vec::new();
    for (n, &i) in free.iter().enumerate() {
        let Some(a) = board.face(i) else { continue };
        for &j in &free[n + 1..] {
            if board.face(j).is_some_and(|b| tiles_match(a, b)) {
                out.push((i, j));
            }
        }
    }
    out
}
