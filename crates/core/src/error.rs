//! Error types for board construction and the turn protocol.

use thiserror::Error;

/// A layout or deck that cannot produce a playable board.
///
/// Fatal to starting a game; surfaced to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("layout has {slots} slots but the deck has {faces} faces")]
    CountMismatch { slots: usize, faces: usize },

    #[error("slot {slot} shares its position with slot {other}")]
    DuplicatePosition { slot: usize, other: usize },

    #[error("cover override references slot {slot}, outside the layout")]
    OverrideOutOfRange { slot: usize },

    #[error("slot {slot} ends up resting on itself")]
    CoverCycle { slot: usize },

    #[error("side override pairs slot {slot} with itself")]
    SelfSideOverride { slot: usize },
}

/// Why a completed pair of picks was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionFault {
    #[error("the same tile was picked twice")]
    SameTile,

    #[error("the picked tiles do not match")]
    NoMatch,
}

/// Recoverable outcome of a rejected player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// No highlighted tile, or the highlighted tile is covered or blocked.
    #[error("tile is not removable")]
    TileNotRemovable { slot: Option<usize> },

    #[error("invalid selection: {0}")]
    InvalidSelection(#[from] SelectionFault),

    /// No tile reachable in the requested direction; the cursor rolled back.
    #[error("no tile in that direction")]
    NavigationExhausted,
}
