//! Terminal front-end.
//!
//! Renders a board snapshot into a character framebuffer and flushes it to
//! the terminal with crossterm, rewriting only the cells that changed.
//!
//! - [`fb`]: framebuffer and cell styles
//! - [`board_view`]: pixel layout to cell mapping, side panel, overlays
//! - [`renderer`]: terminal setup and diff flushing

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use tui_mahjong_core as core;
pub use tui_mahjong_engine as engine;
pub use tui_mahjong_types as types;

pub use board_view::{BoardView, FrameSurface, Placement, Viewport, LAYOUT_ORIGIN};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer, TerminalSurface};
