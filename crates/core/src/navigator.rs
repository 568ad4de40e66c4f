//! Cursor navigation over a sparse, layered board
//!
//! The cursor lives in base-layer coordinates. A directional command moves
//! the base one tile pitch, skips empty rows on vertical moves, resolves the
//! highest live tile over the new cell and, failing that, searches sideways.
//! When nothing is found the cursor rolls back to where it was.
//!
//! # Move Resolution
//!
//! 1. Step one pitch in the command's direction
//! 2. Vertical only: keep stepping while the row band has no live tiles
//!    (at most `ROW_SKIP_LIMIT` steps in total)
//! 3. Resolve the highest live tile overlapping the cell
//! 4. Otherwise try `-1, +1, -2, +2, ...` pitches along the row
//!    (`SEARCH_PROBES` probes in total)
//! 5. Otherwise roll back and report `NavigationExhausted`
//!
//! On success the base snaps to the resolved tile's anchor.

use crate::board::Board;
use crate::error::MoveError;
use crate::layout::LayoutEntry;
use crate::types::{Direction, ROW_SKIP_LIMIT, SEARCH_PROBES, TILE_WIDTH};

/// Cursor position and highlighted tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    base: LayoutEntry,
    rollback: LayoutEntry,
    highlighted: Option<usize>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            base: LayoutEntry::new(0, 0),
            rollback: LayoutEntry::new(0, 0),
            highlighted: None,
        }
    }

    /// Current base-layer position.
    pub fn base(&self) -> LayoutEntry {
        self.base
    }

    /// Last successfully resolved base position.
    pub fn rollback(&self) -> LayoutEntry {
        self.rollback
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Place the cursor on the highest tile over the lowest-indexed live slot.
    ///
    /// Returns the highlighted slot, or `None` on an empty board.
    pub fn home(&mut self, board: &Board) -> Option<usize> {
        let Some(first) = board.live_slots().next() else {
            self.highlighted = None;
            return None;
        };
        let anchor = board.topology().anchor(first);
        let slot = board
            .topology()
            .resolve_cell(anchor.x, anchor.y, board.removed_flags())
            .unwrap_or(first);
        self.snap(board, slot);
        Some(slot)
    }

    /// Move one step in `dir`.
    pub fn step(&mut self, board: &Board, dir: Direction) -> Result<usize, MoveError> {
        let topo = board.topology();
        let removed = board.removed_flags();
        let (dx, dy) = dir.delta();

        let x = self.base.x + dx;
        let mut y = self.base.y + dy;
        if dir.is_vertical() {
            let mut steps = 1;
            while !topo.row_has_live(topo.row_of(y), removed) && steps < ROW_SKIP_LIMIT {
                y += dy;
                steps += 1;
            }
        }

        let found = topo.resolve_cell(x, y, removed).or_else(|| {
            sideways_offsets().find_map(|k| topo.resolve_cell(x + k * TILE_WIDTH, y, removed))
        });

        match found {
            Some(slot) => {
                self.snap(board, slot);
                Ok(slot)
            }
            None => {
                self.base = self.rollback;
                Err(MoveError::NavigationExhausted)
            }
        }
    }

    fn snap(&mut self, board: &Board, slot: usize) {
        let anchor = board.topology().anchor(slot);
        self.base = anchor;
        self.rollback = anchor;
        self.highlighted = Some(slot);
    }
}

/// Sideways offsets in tile pitches: -1, +1, -2, +2, ...
fn sideways_offsets() -> impl Iterator<Item = i32> {
    (0..SEARCH_PROBES as i32).map(|i| {
        let k = i / 2 + 1;
        if i % 2 == 0 {
            -k
        } else {
            k
        }
    })
}
