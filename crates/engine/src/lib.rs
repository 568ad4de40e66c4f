//! Game loop and its collaborators
//!
//! Everything between the pure board engine and a concrete front-end:
//!
//! - [`surface`]: `RenderSurface`, `InputSource` and `ScoreRecorder` traits
//! - [`driver`]: the blocking loop that plays one game at a time
//! - [`highscores`]: the high-score table and its file store
//! - [`config`]: environment and argument configuration
//! - [`log`]: the optional JSON-lines event log

pub mod config;
pub mod driver;
pub mod highscores;
pub mod log;
pub mod surface;

pub use tui_mahjong_core as core;
pub use tui_mahjong_types as types;

pub use config::{GameConfig, RunMode};
pub use driver::{end_message, event_message, GameDriver, GameOutcome};
pub use highscores::{FileScoreStore, HighScore, HighScoreTable};
pub use log::{EventLog, LogEvent};
pub use surface::{paint, InputSource, Marker, NullScores, RenderSurface, ScoreRecorder, ScriptedInput};
