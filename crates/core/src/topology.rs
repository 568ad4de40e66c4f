//! Occlusion and adjacency graph for a layout
//!
//! Built once per layout from pixel positions. A tile `T` rests on `S` at
//! height `h` (1..=4) when `T` sits exactly `h` stacking offsets up-left of
//! `S`: `T.x == S.x - 6h` and `T.y == S.y + 7h`. Cover overrides from the
//! layout add extra height-1 edges for tiles off that grid.
//!
//! From those edges the graph derives:
//!
//! - `covered_by[S]`: every slot resting on `S`
//! - `left[S]` / `right[S]`: slots one tile pitch to the side on the same
//!   row, plus the `Adjacent` side overrides of the layout
//! - `blocked_by[S]`: slots named by a `Blocks` side override; while any of
//!   them is live, `S` has no free side
//! - `layer[S]`: 0 for a slot resting on nothing, else the highest
//!   `layer[below] + h`
//! - `anchor[S]`: the base-layer position under `S`, used by cursor navigation
//!
//! All queries take the board's `removed` flags and have no side effects.

use std::collections::HashMap;

use crate::error::ConfigurationError;
use crate::layout::{Layout, LayoutEntry, SideOverride};
use crate::types::{MAX_STACK_HEIGHT, STACK_DX, STACK_DY, TILE_HEIGHT, TILE_WIDTH};

/// Precomputed occlusion/adjacency graph.
#[derive(Debug, Clone)]
pub struct Topology {
    positions: Vec<LayoutEntry>,
    covered_by: Vec<Vec<usize>>,
    left: Vec<Vec<usize>>,
    right: Vec<Vec<usize>>,
    blocked_by: Vec<Vec<usize>>,
    layer: Vec<u32>,
    anchor: Vec<LayoutEntry>,
    index: HashMap<LayoutEntry, usize>,
    origin: LayoutEntry,
}

impl Topology {
    pub fn build(layout: &Layout) -> Result<Self, ConfigurationError> {
        let positions = layout.entries().to_vec();
        let n = positions.len();

        let index: HashMap<LayoutEntry, usize> = positions
            .iter()
            .enumerate()
            .map(|(slot, &pos)| (pos, slot))
            .collect();

        // (lower, height) pairs each slot rests on.
        let mut rests_on: Vec<Vec<(usize, u32)>> = vec![Vec::new(); n];
        let mut covered_by: Vec<Vec<usize>> = vec![Vec::new(); n];

        for (lower, pos) in positions.iter().enumerate() {
            for h in 1..=MAX_STACK_HEIGHT {
                let above = LayoutEntry::new(pos.x - STACK_DX * h, pos.y + STACK_DY * h);
                if let Some(&upper) = index.get(&above) {
                    covered_by[lower].push(upper);
                    rests_on[upper].push((lower, h as u32));
                }
            }
        }
        for cover in layout.covers() {
            if !covered_by[cover.lower].contains(&cover.upper) {
                covered_by[cover.lower].push(cover.upper);
                rests_on[cover.upper].push((cover.lower, 1));
            }
        }

        let layer = compute_layers(&rests_on)?;

        let mut left = vec![Vec::new(); n];
        let mut right = vec![Vec::new(); n];
        for (slot, pos) in positions.iter().enumerate() {
            for (other, o) in positions.iter().enumerate() {
                if o.y != pos.y {
                    continue;
                }
                if o.x == pos.x - TILE_WIDTH {
                    left[slot].push(other);
                } else if o.x == pos.x + TILE_WIDTH {
                    right[slot].push(other);
                }
            }
        }

        let mut blocked_by = vec![Vec::new(); n];
        for side in layout.sides() {
            match *side {
                SideOverride::Adjacent { left: l, right: r } => {
                    push_unique(&mut right[l], r);
                    push_unique(&mut left[r], l);
                }
                SideOverride::Blocks { blocker, blocked } => {
                    push_unique(&mut blocked_by[blocked], blocker);
                }
            }
        }

        let anchor: Vec<LayoutEntry> = positions
            .iter()
            .zip(&layer)
            .map(|(pos, &l)| {
                let l = l as i32;
                LayoutEntry::new(pos.x + STACK_DX * l, pos.y - STACK_DY * l)
            })
            .collect();

        let origin = LayoutEntry::new(
            anchor.iter().map(|a| a.x).min().unwrap_or(0),
            anchor.iter().map(|a| a.y).min().unwrap_or(0),
        );

        Ok(Self {
            positions,
            covered_by,
            left,
            right,
            blocked_by,
            layer,
            anchor,
            index,
            origin,
        })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn position(&self, slot: usize) -> LayoutEntry {
        self.positions[slot]
    }

    pub fn covered_by(&self, slot: usize) -> &[usize] {
        &self.covered_by[slot]
    }

    pub fn left(&self, slot: usize) -> &[usize] {
        &self.left[slot]
    }

    pub fn right(&self, slot: usize) -> &[usize] {
        &self.right[slot]
    }

    pub fn blocked_by(&self, slot: usize) -> &[usize] {
        &self.blocked_by[slot]
    }

    pub fn layer(&self, slot: usize) -> u32 {
        self.layer[slot]
    }

    pub fn anchor(&self, slot: usize) -> LayoutEntry {
        self.anchor[slot]
    }

    /// Top-left corner of the base-layer bounding box.
    pub fn origin(&self) -> LayoutEntry {
        self.origin
    }

    /// Row band of a base-layer y coordinate.
    pub fn row_of(&self, y: i32) -> i32 {
        (y - self.origin.y).div_euclid(TILE_HEIGHT)
    }

    /// Whether any live slot is anchored in `row`.
    pub fn row_has_live(&self, row: i32, removed: &[bool]) -> bool {
        self.anchor
            .iter()
            .enumerate()
            .any(|(slot, a)| !removed[slot] && self.row_of(a.y) == row)
    }

    /// Highest live tile stacked over the base position `(x, y)`.
    ///
    /// Searches from height 4 down to the base itself and returns the first
    /// live slot found.
    pub fn topmost_at(&self, x: i32, y: i32, removed: &[bool]) -> Option<usize> {
        (0..=MAX_STACK_HEIGHT).rev().find_map(|h| {
            let pos = LayoutEntry::new(x - STACK_DX * h, y + STACK_DY * h);
            self.index.get(&pos).copied().filter(|&slot| !removed[slot])
        })
    }

    /// Highest live tile whose anchor rectangle overlaps the cell at `(x, y)`.
    ///
    /// Ties on layer go to the larger overlap, then the lower slot.
    pub fn resolve_cell(&self, x: i32, y: i32, removed: &[bool]) -> Option<usize> {
        let mut best: Option<(u32, i32, usize)> = None;
        for (slot, a) in self.anchor.iter().enumerate() {
            if removed[slot] {
                continue;
            }
            let w = overlap(x, a.x, TILE_WIDTH);
            let h = overlap(y, a.y, TILE_HEIGHT);
            if w == 0 || h == 0 {
                continue;
            }
            let candidate = (self.layer[slot], w * h, slot);
            best = match best {
                Some((bl, ba, bs)) if (bl, ba) >= (candidate.0, candidate.1) => Some((bl, ba, bs)),
                _ => Some(candidate),
            };
        }
        best.map(|(_, _, slot)| slot)
    }

    /// No live slot rests on `slot`.
    pub fn is_topmost(&self, slot: usize, removed: &[bool]) -> bool {
        self.covered_by[slot].iter().all(|&t| removed[t])
    }

    /// At least one side of `slot` has no live neighbour and no live
    /// blocker pins it.
    pub fn side_free(&self, slot: usize, removed: &[bool]) -> bool {
        if self.blocked_by[slot].iter().any(|&t| !removed[t]) {
            return false;
        }
        let left_blocked = self.left[slot].iter().any(|&t| !removed[t]);
        let right_blocked = self.right[slot].iter().any(|&t| !removed[t]);
        !(left_blocked && right_blocked)
    }

    pub fn is_removable(&self, slot: usize, removed: &[bool]) -> bool {
        slot < self.len()
            && !removed[slot]
            && self.is_topmost(slot, removed)
            && self.side_free(slot, removed)
    }
}

fn push_unique(list: &mut Vec<usize>, slot: usize) {
    if !list.contains(&slot) {
        list.push(slot);
    }
}

fn overlap(a: i32, b: i32, extent: i32) -> i32 {
    ((a + extent).min(b + extent) - a.max(b)).max(0)
}

fn compute_layers(rests_on: &[Vec<(usize, u32)>]) -> Result<Vec<u32>, ConfigurationError> {
    let n = rests_on.len();
    let mut layer = vec![0u32; n];

    // Longest chain in an acyclic graph settles within n passes.
    for _ in 0..=n {
        let mut changed = false;
        for (slot, below) in rests_on.iter().enumerate() {
            let want = below
                .iter()
                .map(|&(lower, h)| layer[lower] + h)
                .max()
                .unwrap_or(0);
            if want != layer[slot] {
                layer[slot] = want;
                changed = true;
            }
        }
        if !changed {
            return Ok(layer);
        }
    }

    let slot = rests_on
        .iter()
        .enumerate()
        .find(|(slot, below)| {
            below
                .iter()
                .any(|&(lower, h)| layer[lower] + h > layer[*slot])
        })
        .map(|(slot, _)| slot)
        .unwrap_or(0);
    Err(ConfigurationError::CoverCycle { slot })
}
