//! Layout table - static slot positions for every difficulty
//!
//! A layout maps each slot index to an `(x, y)` pixel position on the
//! reference 800x600 board, plus a list of cover overrides for tiles that sit
//! off the regular stacking grid. Layers are not stored here; the topology
//! derives them from which positions stack on which.
//!
//! The standard table holds 144 positions:
//!
//! - slots `0..87`: the flat base layer in eight rows, with the half-row edge
//!   tiles 30, 43 and 44 at `y = 274`
//! - slots `87..123`: a 6x6 block one layer up
//! - slots `123..139`: a 4x4 block two layers up
//! - slots `139..143`: a 2x2 block three layers up
//! - slot `143`: the apex, half a tile off-grid above the 2x2 block
//!
//! Easy deals the first 86 slots, Medium the first 122 and Hard all 144.
//! Easy and Medium move slot 44 into the position of the first excluded slot
//! so every row stays rectangular.
//!
//! Side neighbours are found on exact rows. The half-row edge tiles sit
//! between two rows, so their side relationships are listed explicitly as
//! side overrides.

use std::collections::HashMap;

use crate::error::ConfigurationError;
use crate::types::Difficulty;

/// Position of one slot in layout pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutEntry {
    pub x: i32,
    pub y: i32,
}

impl LayoutEntry {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Explicit "upper rests on lower" edge for tiles off the stacking grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoverOverride {
    pub upper: usize,
    pub lower: usize,
}

/// Explicit side relationship for tiles off the regular rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SideOverride {
    /// `left` and `right` neighbour each other although their rows differ.
    Adjacent { left: usize, right: usize },
    /// `blocked` cannot be removed while `blocker` is live.
    Blocks { blocker: usize, blocked: usize },
}

impl SideOverride {
    fn slots(&self) -> [usize; 2] {
        match *self {
            SideOverride::Adjacent { left, right } => [left, right],
            SideOverride::Blocks { blocker, blocked } => [blocker, blocked],
        }
    }
}

/// Apex slot of the Hard layout.
pub const APEX_SLOT: usize = 143;

/// Slot relocated on Easy and Medium.
pub const RELOCATED_SLOT: usize = 44;

const HARD_COVERS: [CoverOverride; 4] = [
    CoverOverride { upper: APEX_SLOT, lower: 139 },
    CoverOverride { upper: APEX_SLOT, lower: 140 },
    CoverOverride { upper: APEX_SLOT, lower: 141 },
    CoverOverride { upper: APEX_SLOT, lower: 142 },
];

/// Half-row edge tiles 30 and 43 against the rows above and below them.
const EDGE_SIDES: [SideOverride; 4] = [
    SideOverride::Adjacent { left: 30, right: 31 },
    SideOverride::Adjacent { left: 42, right: 43 },
    SideOverride::Blocks { blocker: 30, blocked: 45 },
    SideOverride::Blocks { blocker: 43, blocked: 56 },
];

#[rustfmt::skip]
const BASE_POSITIONS: [(i32, i32); 144] = [
    (155, 97), (196, 97), (237, 97), (278, 97), (319, 97), (360, 97),
    (401, 97), (442, 97), (483, 97), (524, 97), (565, 97), (606, 97),
    (237, 148), (278, 148), (319, 148), (360, 148), (401, 148), (442, 148),
    (483, 148), (524, 148), (196, 199), (237, 199), (278, 199), (319, 199),
    (360, 199), (401, 199), (442, 199), (483, 199), (524, 199), (565, 199),
    (114, 274), (155, 250), (196, 250), (237, 250), (278, 250), (319, 250),
    (360, 250), (401, 250), (442, 250), (483, 250), (524, 250), (565, 250),
    (606, 250), (647, 274), (688, 274), (155, 301), (196, 301), (237, 301),
    (278, 301), (319, 301), (360, 301), (401, 301), (442, 301), (483, 301),
    (524, 301), (565, 301), (606, 301), (196, 352), (237, 352), (278, 352),
    (319, 352), (360, 352), (401, 352), (442, 352), (483, 352), (524, 352),
    (565, 352), (237, 403), (278, 403), (319, 403), (360, 403), (401, 403),
    (442, 403), (483, 403), (524, 403), (155, 454), (196, 454), (237, 454),
    (278, 454), (319, 454), (360, 454), (401, 454), (442, 454), (483, 454),
    (524, 454), (565, 454), (606, 454), (272, 155), (313, 155), (354, 155),
    (395, 155), (436, 155), (477, 155), (272, 206), (313, 206), (354, 206),
    (395, 206), (436, 206), (477, 206), (272, 257), (313, 257), (354, 257),
    (395, 257), (436, 257), (477, 257), (272, 308), (313, 308), (354, 308),
    (395, 308), (436, 308), (477, 308), (272, 359), (313, 359), (354, 359),
    (395, 359), (436, 359), (477, 359), (272, 410), (313, 410), (354, 410),
    (395, 410), (436, 410), (477, 410), (307, 213), (348, 213), (389, 213),
    (430, 213), (307, 264), (348, 264), (389, 264), (430, 264), (307, 315),
    (348, 315), (389, 315), (430, 315), (307, 366), (348, 366), (389, 366),
    (430, 366), (342, 271), (383, 271), (342, 322), (383, 322), (356, 302),
];

/// Slot positions plus cover and side overrides for one board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    entries: Vec<LayoutEntry>,
    covers: Vec<CoverOverride>,
    sides: Vec<SideOverride>,
}

impl Layout {
    /// The built-in pyramid for a difficulty.
    pub fn standard(difficulty: Difficulty) -> Self {
        let count = difficulty.num_tiles();
        let mut entries: Vec<LayoutEntry> = BASE_POSITIONS[..count]
            .iter()
            .map(|&(x, y)| LayoutEntry::new(x, y))
            .collect();

        let mut sides = EDGE_SIDES.to_vec();
        let covers = match difficulty {
            Difficulty::Easy | Difficulty::Medium => {
                // The relocated tile ends the last row and pins the slot before it.
                let (x, y) = BASE_POSITIONS[count];
                entries[RELOCATED_SLOT] = LayoutEntry::new(x, y);
                sides.push(SideOverride::Blocks {
                    blocker: RELOCATED_SLOT,
                    blocked: count - 1,
                });
                Vec::new()
            }
            Difficulty::Hard => HARD_COVERS.to_vec(),
        };

        Self {
            entries,
            covers,
            sides,
        }
    }

    /// A caller-supplied layout.
    ///
    /// Rejects two slots at the same position and overrides that name a slot
    /// outside the layout or a slot resting on itself.
    pub fn custom(
        entries: Vec<LayoutEntry>,
        covers: Vec<CoverOverride>,
    ) -> Result<Self, ConfigurationError> {
        let mut seen: HashMap<LayoutEntry, usize> = HashMap::with_capacity(entries.len());
        for (slot, entry) in entries.iter().enumerate() {
            if let Some(&other) = seen.get(entry) {
                return Err(ConfigurationError::DuplicatePosition { slot, other });
            }
            seen.insert(*entry, slot);
        }

        for cover in &covers {
            for slot in [cover.upper, cover.lower] {
                if slot >= entries.len() {
                    return Err(ConfigurationError::OverrideOutOfRange { slot });
                }
            }
            if cover.upper == cover.lower {
                return Err(ConfigurationError::CoverCycle { slot: cover.upper });
            }
        }

        Ok(Self {
            entries,
            covers,
            sides: Vec::new(),
        })
    }

    /// Add side overrides to a layout.
    ///
    /// Rejects overrides naming a slot outside the layout or pairing a slot
    /// with itself.
    pub fn with_sides(mut self, sides: Vec<SideOverride>) -> Result<Self, ConfigurationError> {
        for side in &sides {
            let [a, b] = side.slots();
            for slot in [a, b] {
                if slot >= self.entries.len() {
                    return Err(ConfigurationError::OverrideOutOfRange { slot });
                }
            }
            if a == b {
                return Err(ConfigurationError::SelfSideOverride { slot: a });
            }
        }
        self.sides.extend(sides);
        Ok(self)
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, slot: usize) -> Option<LayoutEntry> {
        self.entries.get(slot).copied()
    }

    pub fn entries(&self) -> &[LayoutEntry] {
        &self.entries
    }

    pub fn covers(&self) -> &[CoverOverride] {
        &self.covers
    }

    pub fn sides(&self) -> &[SideOverride] {
        &self.sides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_sizes() {
        for difficulty in Difficulty::ALL {
            let layout = Layout::standard(difficulty);
            assert_eq!(layout.len(), difficulty.num_tiles());
        }
    }

    #[test]
    fn test_relocated_slot_positions() {
        let easy = Layout::standard(Difficulty::Easy);
        assert_eq!(easy.entry(44), Some(LayoutEntry::new(606, 454)));

        let medium = Layout::standard(Difficulty::Medium);
        assert_eq!(medium.entry(44), Some(LayoutEntry::new(477, 410)));

        let hard = Layout::standard(Difficulty::Hard);
        assert_eq!(hard.entry(44), Some(LayoutEntry::new(688, 274)));
    }

    #[test]
    fn test_standard_positions_are_unique() {
        for difficulty in Difficulty::ALL {
            let layout = Layout::standard(difficulty);
            let rebuilt = Layout::custom(layout.entries().to_vec(), layout.covers().to_vec())
                .and_then(|l| l.with_sides(layout.sides().to_vec()));
            assert_eq!(rebuilt.as_ref(), Ok(&layout), "{:?}", difficulty);
        }
    }

    #[test]
    fn test_only_hard_has_cover_overrides() {
        assert!(Layout::standard(Difficulty::Easy).covers().is_empty());
        assert!(Layout::standard(Difficulty::Medium).covers().is_empty());
        let hard = Layout::standard(Difficulty::Hard);
        assert_eq!(hard.covers().len(), 4);
        assert!(hard.covers().iter().all(|c| c.upper == APEX_SLOT));
    }

    #[test]
    fn test_custom_rejects_duplicate_position() {
        let entries = vec![
            LayoutEntry::new(0, 0),
            LayoutEntry::new(41, 0),
            LayoutEntry::new(0, 0),
        ];
        assert_eq!(
            Layout::custom(entries, Vec::new()),
            Err(ConfigurationError::DuplicatePosition { slot: 2, other: 0 })
        );
    }

    #[test]
    fn test_custom_rejects_override_out_of_range() {
        let entries = vec![LayoutEntry::new(0, 0), LayoutEntry::new(41, 0)];
        let covers = vec![CoverOverride { upper: 1, lower: 5 }];
        assert_eq!(
            Layout::custom(entries, covers),
            Err(ConfigurationError::OverrideOutOfRange { slot: 5 })
        );
    }

    #[test]
    fn test_relocated_slot_blocks_last_slot() {
        let easy = Layout::standard(Difficulty::Easy);
        assert!(easy.sides().contains(&SideOverride::Blocks { blocker: 44, blocked: 85 }));
        let medium = Layout::standard(Difficulty::Medium);
        assert!(medium.sides().contains(&SideOverride::Blocks { blocker: 44, blocked: 121 }));
        let hard = Layout::standard(Difficulty::Hard);
        assert_eq!(hard.sides(), &EDGE_SIDES);
    }

    #[test]
    fn test_with_sides_rejects_bad_slots() {
        let entries = vec![LayoutEntry::new(0, 0), LayoutEntry::new(41, 0)];
        let layout = Layout::custom(entries, Vec::new()).unwrap();
        assert_eq!(
            layout
                .clone()
                .with_sides(vec![SideOverride::Blocks { blocker: 0, blocked: 2 }]),
            Err(ConfigurationError::OverrideOutOfRange { slot: 2 })
        );
        assert_eq!(
            layout.with_sides(vec![SideOverride::Adjacent { left: 1, right: 1 }]),
            Err(ConfigurationError::SelfSideOverride { slot: 1 })
        );
    }
}
