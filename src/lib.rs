//! TUI Mahjong (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_mahjong::{core,engine,input,term,types}`
//! so the binary, integration tests and benches share one import path.

pub use tui_mahjong_core as core;
pub use tui_mahjong_engine as engine;
pub use tui_mahjong_input as input;
pub use tui_mahjong_term as term;
pub use tui_mahjong_types as types;
