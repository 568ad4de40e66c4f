//! Core board engine - pure, deterministic, and testable
//!
//! This crate holds every game rule: the layered layout, occlusion and side
//! blocking, tile matching, the move solver, cursor navigation, scoring and
//! the turn protocol. It has **no dependencies** on terminals, files or
//! clocks, making it:
//!
//! - **Deterministic**: the same seed and commands replay the same game
//! - **Testable**: every rule is a plain function or method over owned data
//! - **Portable**: runs headless, in a terminal, or behind any other front-end
//!
//! # Module Structure
//!
//! - [`layout`]: slot positions per difficulty and cover overrides
//! - [`deck`]: face multiset per difficulty
//! - [`topology`]: occlusion/adjacency graph derived from a layout
//! - [`board`]: dealt faces and removal state
//! - [`matching`]: the face-pair rule
//! - [`solver`]: move availability, hints and move enumeration
//! - [`navigator`]: directional cursor with row skipping and rollback
//! - [`scoring`]: points per removed pair
//! - [`session`]: the turn protocol over one game
//! - [`snapshot`]: redraw list for renderers
//!
//! # Example
//!
//! ```
//! use tui_mahjong_core::{GameSession, TurnEvent};
//! use tui_mahjong_types::{Command, Difficulty};
//!
//! let mut game = GameSession::new(Difficulty::Easy, 12345).unwrap();
//! assert_eq!(game.board().remaining(), 86);
//!
//! // The cursor starts on slot 0, a free tile at the left end of the top row.
//! assert_eq!(game.apply(Command::Select), TurnEvent::FirstPick { slot: 0 });
//! assert!(matches!(
//!     game.apply(Command::Right),
//!     TurnEvent::CursorMoved { slot: 1 }
//! ));
//! ```

pub mod board;
pub mod deck;
pub mod error;
pub mod layout;
pub mod matching;
pub mod navigator;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod solver;
pub mod topology;

pub use tui_mahjong_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::{ConfigurationError, MoveError, SelectionFault};
pub use layout::{CoverOverride, Layout, LayoutEntry, SideOverride};
pub use matching::tiles_match;
pub use navigator::Navigator;
pub use rng::SimpleRng;
pub use scoring::pair_score;
pub use session::{GameSession, TurnEvent};
pub use snapshot::{GameSnapshot, GameStatus, TileSnapshot};
pub use topology::Topology;
