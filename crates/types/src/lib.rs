//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board engine, terminal rendering, event logging).
//!
//! # Board Geometry
//!
//! Layout positions are expressed in the pixel space of a reference 800x600
//! board. Tiles are placed on a grid with a fixed pitch, and every stacked layer
//! is drawn shifted left and down by a constant offset:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TILE_WIDTH` | 41 | Horizontal tile pitch |
//! | `TILE_HEIGHT` | 51 | Vertical tile pitch (one row) |
//! | `STACK_DX` | 6 | Leftward shift per stacked layer |
//! | `STACK_DY` | 7 | Downward shift per stacked layer |
//! | `MAX_STACK_HEIGHT` | 4 | Highest layer above the base |
//!
//! # Navigation Limits
//!
//! - `ROW_SKIP_LIMIT`: 7 row steps when vertical movement crosses empty rows
//! - `SEARCH_PROBES`: 22 alternating left/right probes before rolling back
//!
//! # Examples
//!
//! ```
//! use tui_mahjong_types::{Command, Difficulty, Suit, TileFace};
//!
//! let face = TileFace::new(Suit::Bamboo, 7).unwrap();
//! assert_eq!(face.label(), "B7");
//! assert_eq!(face.suit.multiplier(), 3);
//!
//! assert_eq!(Difficulty::from_str("hard"), Some(Difficulty::Hard));
//! assert_eq!(Difficulty::Hard.num_tiles(), 144);
//!
//! assert_eq!(Command::from_str("select"), Some(Command::Select));
//! ```

/// Horizontal tile pitch in layout pixels.
pub const TILE_WIDTH: i32 = 41;

/// Vertical tile pitch in layout pixels.
pub const TILE_HEIGHT: i32 = 51;

/// Leftward shift of a tile stacked one layer higher.
pub const STACK_DX: i32 = 6;

/// Downward shift of a tile stacked one layer higher.
pub const STACK_DY: i32 = 7;

/// Highest stacking height searched above a base position.
pub const MAX_STACK_HEIGHT: i32 = 4;

/// Maximum row steps taken by one vertical cursor move.
pub const ROW_SKIP_LIMIT: u32 = 7;

/// Number of alternating left/right probes when the target cell is empty.
pub const SEARCH_PROBES: u32 = 22;

/// Number of entries kept in the high-score table.
pub const HIGH_SCORE_CAPACITY: usize = 10;


/// The seven tile suits
///
/// Character, Circle and Bamboo are the numbered suits (1-9). Wind has four
/// faces and Dragon three. Flower and Season are wildcard categories: any two
/// tiles of the same category form a pair regardless of rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Character,
    Circle,
    Bamboo,
    Wind,
    Dragon,
    Flower,
    Season,
}

impl Suit {
    /// All suits in scoring order.
    pub const ALL: [Suit; 7] = [
        Suit::Character,
        Suit::Circle,
        Suit::Bamboo,
        Suit::Wind,
        Suit::Dragon,
        Suit::Flower,
        Suit::Season,
    ];

    /// Number of distinct ranks in this suit.
    pub fn ranks(&self) -> u8 {
        match self {
            Suit::Character | Suit::Circle | Suit::Bamboo => 9,
            Suit::Wind | Suit::Flower | Suit::Season => 4,
            Suit::Dragon => 3,
        }
    }

    /// Whether any two tiles of this suit match regardless of rank.
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Suit::Flower | Suit::Season)
    }

    /// Score multiplier applied when a pair of this suit is removed.
    pub fn multiplier(&self) -> u32 {
        match self {
            Suit::Character => 1,
            Suit::Circle => 2,
            Suit::Bamboo => 3,
            Suit::Wind => 4,
            Suit::Dragon => 5,
            Suit::Flower => 6,
            Suit::Season => 7,
        }
    }

    /// Single-letter code used in tile labels.
    pub fn letter(&self) -> char {
        match self {
            Suit::Character => 'C',
            Suit::Circle => 'O',
            Suit::Bamboo => 'B',
            Suit::Wind => 'W',
            Suit::Dragon => 'D',
            Suit::Flower => 'F',
            Suit::Season => 'S',
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Suit::Character => "character",
            Suit::Circle => "circle",
            Suit::Bamboo => "bamboo",
            Suit::Wind => "wind",
            Suit::Dragon => "dragon",
            Suit::Flower => "flower",
            Suit::Season => "season",
        }
    }
}

/// Printed identity of a tile, independent of where it sits on the board.
///
/// Equality is structural (suit and rank).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileFace {
    pub suit: Suit,
    pub rank: u8,
}

impl TileFace {
    /// Create a face, returning `None` when the rank is outside the suit's range.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_mahjong_types::{Suit, TileFace};
    ///
    /// assert!(TileFace::new(Suit::Wind, 4).is_some());
    /// assert!(TileFace::new(Suit::Wind, 5).is_none());
    /// ```
    pub fn new(suit: Suit, rank: u8) -> Option<Self> {
        if rank == 0 || rank > suit.ranks() {
            return None;
        }
        Some(Self { suit, rank })
    }

    /// Every face of a suit, in rank order.
    pub fn all_of(suit: Suit) -> impl Iterator<Item = TileFace> {
        (1..=suit.ranks()).map(move |rank| TileFace { suit, rank })
    }

    /// Two-character label such as `"C1"` or `"S4"`.
    pub fn label(&self) -> String {
        format!("{}{}", self.suit.letter(), self.rank)
    }
}

impl std::fmt::Display for TileFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.suit.as_str(), self.rank)
    }
}

/// Board size and composition selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Number of tiles dealt at this difficulty.
    pub fn num_tiles(&self) -> usize {
        match self {
            Difficulty::Easy => 86,
            Difficulty::Medium => 122,
            Difficulty::Hard => 144,
        }
    }

    /// Parse difficulty from string (case-insensitive)
    ///
    /// Accepts names or the menu numbers `1`, `2`, `3`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_mahjong_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("Medium"), Some(Difficulty::Medium));
    /// assert_eq!(Difficulty::from_str("3"), Some(Difficulty::Hard));
    /// assert_eq!(Difficulty::from_str("expert"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "1" => Some(Difficulty::Easy),
            "medium" | "2" => Some(Difficulty::Medium),
            "hard" | "3" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// One of the four cursor directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Pixel step for one move in this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -TILE_HEIGHT),
            Direction::Down => (0, TILE_HEIGHT),
            Direction::Left => (-TILE_WIDTH, 0),
            Direction::Right => (TILE_WIDTH, 0),
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// Player commands accepted by a game session
///
/// These commands come from any input source (keyboard, scripted replay).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move the cursor one row up
    Up,
    /// Move the cursor one row down
    Down,
    /// Move the cursor one tile left
    Left,
    /// Move the cursor one tile right
    Right,
    /// Pick the highlighted tile
    Select,
    /// Abandon the current turn and hand control back to the caller
    Cancel,
    /// Leave the game for the menu
    ReturnToMenu,
    /// Highlight one available pair
    Hint,
}

impl Command {
    /// Parse command from string (for scripted input and logs)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_mahjong_types::Command;
    ///
    /// assert_eq!(Command::from_str("left"), Some(Command::Left));
    /// assert_eq!(Command::from_str("returnToMenu"), Some(Command::ReturnToMenu));
    /// assert_eq!(Command::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Command::Up),
            "down" => Some(Command::Down),
            "left" => Some(Command::Left),
            "right" => Some(Command::Right),
            "select" => Some(Command::Select),
            "cancel" => Some(Command::Cancel),
            "returntomenu" => Some(Command::ReturnToMenu),
            "hint" => Some(Command::Hint),
            _ => None,
        }
    }

    /// The cursor direction for directional commands.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Command::Up => Some(Direction::Up),
            Command::Down => Some(Direction::Down),
            Command::Left => Some(Direction::Left),
            Command::Right => Some(Direction::Right),
            _ => None,
        }
    }
}
