//! Blocking keyboard input.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::engine::InputSource;
use crate::map::command_for_key;
use crate::types::Command;

/// Reads crossterm key events until one maps to a command.
///
/// Release and repeat events are ignored so terminals that report them do
/// not double every key press.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn next_command(&mut self) -> Result<Command> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(command) = command_for_key(key) {
                    return Ok(command);
                }
            }
        }
    }
}
