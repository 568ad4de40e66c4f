use arrayvec::ArrayVec;

use crate::types::{Difficulty, TileFace};

/// One live tile in paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSnapshot {
    pub slot: usize,
    pub face: TileFace,
    pub x: i32,
    pub y: i32,
    pub layer: u32,
    pub removable: bool,
}

/// Lifecycle of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    /// Every tile removed.
    Cleared,
    /// Tiles remain but no pair can be removed.
    Stuck,
    /// Left by the player.
    Abandoned,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Cleared => "cleared",
            GameStatus::Stuck => "stuck",
            GameStatus::Abandoned => "abandoned",
        }
    }
}

/// Full redraw list for a session.
///
/// Tiles are ordered lowest layer first, then by slot, so painting them in
/// order leaves higher tiles on top.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub tiles: Vec<TileSnapshot>,
    pub cursor: Option<usize>,
    pub picks: ArrayVec<usize, 2>,
    pub hint: Option<(usize, usize)>,
    pub score: u32,
    pub remaining: usize,
    pub turn: u32,
    pub status: GameStatus,
    pub difficulty: Option<Difficulty>,
}

impl GameSnapshot {
    /// Reset to an empty snapshot, keeping the tile allocation.
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.cursor = None;
        self.picks.clear();
        self.hint = None;
        self.score = 0;
        self.remaining = 0;
        self.turn = 0;
        self.status = GameStatus::Playing;
        self.difficulty = None;
    }

    pub fn playable(&self) -> bool {
        !self.status.is_over()
    }

    pub fn tile(&self, slot: usize) -> Option<&TileSnapshot> {
        self.tiles.iter().find(|t| t.slot == slot)
    }
}
