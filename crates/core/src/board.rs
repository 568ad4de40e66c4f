//! Board module - faces per slot and removal state
//!
//! The board owns its layout and the topology derived from it. Faces are fixed
//! when the board is built; the only mutation afterwards is atomic removal of
//! a validated pair.

use crate::deck;
use crate::error::{ConfigurationError, MoveError, SelectionFault};
use crate::layout::{Layout, LayoutEntry};
use crate::matching::tiles_match;
use crate::rng::SimpleRng;
use crate::topology::Topology;
use crate::types::{Difficulty, TileFace};

/// Dealt tiles on a layout.
#[derive(Debug, Clone)]
pub struct Board {
    layout: Layout,
    topology: Topology,
    faces: Vec<TileFace>,
    removed: Vec<bool>,
    remaining: usize,
}

impl Board {
    /// Place `faces` on `layout`, slot by slot.
    pub fn new(layout: Layout, faces: Vec<TileFace>) -> Result<Self, ConfigurationError> {
        if faces.len() != layout.len() {
            return Err(ConfigurationError::CountMismatch {
                slots: layout.len(),
                faces: faces.len(),
            });
        }
        let topology = Topology::build(&layout)?;
        let remaining = faces.len();
        Ok(Self {
            removed: vec![false; remaining],
            layout,
            topology,
            faces,
            remaining,
        })
    }

    /// Shuffle the standard deck for `difficulty` onto its standard layout.
    pub fn generate(difficulty: Difficulty, rng: &mut SimpleRng) -> Result<Self, ConfigurationError> {
        Self::new(Layout::standard(difficulty), deck::deal(difficulty, rng))
    }

    /// Total slot count, removed or not.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Number of live tiles.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_cleared(&self) -> bool {
        self.remaining == 0
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn removed_flags(&self) -> &[bool] {
        &self.removed
    }

    pub fn is_live(&self, slot: usize) -> bool {
        slot < self.len() && !self.removed[slot]
    }

    /// Face of a slot; removed slots keep their face.
    pub fn face(&self, slot: usize) -> Option<TileFace> {
        self.faces.get(slot).copied()
    }

    pub fn position(&self, slot: usize) -> Option<LayoutEntry> {
        self.layout.entry(slot)
    }

    pub fn layer(&self, slot: usize) -> u32 {
        self.topology.layer(slot)
    }

    pub fn is_removable(&self, slot: usize) -> bool {
        self.topology.is_removable(slot, &self.removed)
    }

    pub fn topmost_at(&self, x: i32, y: i32) -> Option<usize> {
        self.topology.topmost_at(x, y, &self.removed)
    }

    pub fn live_slots(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(move |&slot| !self.removed[slot])
    }

    pub fn removable_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.live_slots().filter(move |&slot| self.is_removable(slot))
    }

    /// Check that `first` and `second` can be removed together.
    pub fn validate_pair(&self, first: usize, second: usize) -> Result<TileFace, MoveError> {
        for slot in [first, second] {
            if !self.is_removable(slot) {
                return Err(MoveError::TileNotRemovable { slot: Some(slot) });
            }
        }
        if first == second {
            return Err(SelectionFault::SameTile.into());
        }
        let a = self.faces[first];
        if !tiles_match(a, self.faces[second]) {
            return Err(SelectionFault::NoMatch.into());
        }
        Ok(a)
    }

    /// Remove both slots, or neither.
    ///
    /// Returns the first slot's face.
    pub fn remove_pair(&mut self, first: usize, second: usize) -> Result<TileFace, MoveError> {
        let face = self.validate_pair(first, second)?;
        self.removed[first] = true;
        self.removed[second] = true;
        self.remaining -= 2;
        Ok(face)
    }
}
