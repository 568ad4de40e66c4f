//! Collaborator traits between the game loop and the outside world.
//!
//! The loop never touches a terminal or a file directly: it draws through a
//! [`RenderSurface`], reads through an [`InputSource`] and records results
//! through a [`ScoreRecorder`].

use std::collections::VecDeque;

use anyhow::{anyhow, Result};

use crate::core::{GameSnapshot, TileSnapshot};
use crate::types::{Command, TileFace};

/// Highlight kinds drawn over a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Cursor,
    Pick,
    Hint,
}

/// Somewhere a board can be drawn.
///
/// Only `clear` and `draw_tile` are required. Every frame is a full redraw:
/// `clear`, the live tiles lowest layer first, markers, status, `present`.
pub trait RenderSurface {
    fn clear(&mut self) -> Result<()>;

    /// Draw one face with its top-left corner at layout pixel `(x, y)`.
    fn draw_tile(&mut self, face: TileFace, x: i32, y: i32) -> Result<()>;

    /// Draw a tile with its stacking information.
    ///
    /// Surfaces that shade by layer or removability override this.
    fn draw_stacked(&mut self, tile: &TileSnapshot) -> Result<()> {
        self.draw_tile(tile.face, tile.x, tile.y)
    }

    fn draw_marker(&mut self, _marker: Marker, _x: i32, _y: i32) -> Result<()> {
        Ok(())
    }

    /// Score, remaining tiles, prompt and the latest message.
    fn draw_status(&mut self, _snapshot: &GameSnapshot, _message: Option<&str>) -> Result<()> {
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Blocking source of player commands.
pub trait InputSource {
    fn next_command(&mut self) -> Result<Command>;
}

/// Persists a finished game's score.
pub trait ScoreRecorder {
    fn record_score(&mut self, player: &str, score: u32) -> Result<()>;
}

impl<T: ScoreRecorder + ?Sized> ScoreRecorder for Box<T> {
    fn record_score(&mut self, player: &str, score: u32) -> Result<()> {
        (**self).record_score(player, score)
    }
}

impl<T: ScoreRecorder + ?Sized> ScoreRecorder for &mut T {
    fn record_score(&mut self, player: &str, score: u32) -> Result<()> {
        (**self).record_score(player, score)
    }
}

/// Recorder that keeps nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullScores;

impl ScoreRecorder for NullScores {
    fn record_score(&mut self, _player: &str, _score: u32) -> Result<()> {
        Ok(())
    }
}

/// Replays a fixed command list; an error once it runs dry.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    commands: VecDeque<Command>,
}

impl ScriptedInput {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.commands.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_command(&mut self) -> Result<Command> {
        self.commands
            .pop_front()
            .ok_or_else(|| anyhow!("scripted input exhausted"))
    }
}

/// Draw a full frame of `snapshot` onto `surface`.
pub fn paint<R: RenderSurface + ?Sized>(
    surface: &mut R,
    snapshot: &GameSnapshot,
    message: Option<&str>,
) -> Result<()> {
    surface.clear()?;
    for tile in &snapshot.tiles {
        surface.draw_stacked(tile)?;
    }

    let mut mark = |marker: Marker, slot: usize| -> Result<()> {
        match snapshot.tile(slot) {
            Some(tile) => surface.draw_marker(marker, tile.x, tile.y),
            None => Ok(()),
        }
    };
    if let Some((a, b)) = snapshot.hint {
        mark(Marker::Hint, a)?;
        mark(Marker::Hint, b)?;
    }
    for &slot in &snapshot.picks {
        mark(Marker::Pick, slot)?;
    }
    if let Some(slot) = snapshot.cursor {
        mark(Marker::Cursor, slot)?;
    }

    surface.draw_status(snapshot, message)?;
    surface.present()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameSession;
    use crate::types::Difficulty;

    #[derive(Default)]
    struct Recording {
        calls: Vec<String>,
    }

    impl RenderSurface for Recording {
        fn clear(&mut self) -> Result<()> {
            self.calls.push("clear".into());
            Ok(())
        }

        fn draw_tile(&mut self, face: TileFace, x: i32, y: i32) -> Result<()> {
            self.calls.push(format!("tile {} {} {}", face.label(), x, y));
            Ok(())
        }

        fn draw_marker(&mut self, marker: Marker, x: i32, y: i32) -> Result<()> {
            self.calls.push(format!("{:?} {} {}", marker, x, y));
            Ok(())
        }

        fn present(&mut self) -> Result<()> {
            self.calls.push("present".into());
            Ok(())
        }
    }

    #[test]
    fn test_paint_order() {
        let session = GameSession::new(Difficulty::Easy, 3).unwrap();
        let mut surface = Recording::default();
        paint(&mut surface, &session.snapshot(), None).unwrap();

        assert_eq!(surface.calls.first().map(String::as_str), Some("clear"));
        assert_eq!(surface.calls.last().map(String::as_str), Some("present"));
        let tiles = surface.calls.iter().filter(|c| c.starts_with("tile")).count();
        assert_eq!(tiles, 86);
        assert!(surface.calls.contains(&"Cursor 155 97".to_string()));
    }

    #[test]
    fn test_scripted_input_runs_dry() {
        let mut input = ScriptedInput::new([Command::Left, Command::Select]);
        assert_eq!(input.next_command().unwrap(), Command::Left);
        assert_eq!(input.next_command().unwrap(), Command::Select);
        assert!(input.next_command().is_err());
    }
}
