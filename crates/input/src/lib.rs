//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`] and provides a
//! blocking [`InputSource`](crate::engine::InputSource) over the terminal.

pub mod map;
pub mod source;

pub use tui_mahjong_engine as engine;
pub use tui_mahjong_types as types;

pub use map::{command_for_key, should_quit};
pub use source::TerminalInput;
