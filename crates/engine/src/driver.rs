//! Blocking game loop
//!
//! Composes a [`GameSession`] with the collaborators: read a command, apply
//! it, log the event, redraw. Runs until the session reports game over, then
//! records the score and draws the end screen.

use anyhow::Result;

use crate::core::{GameSession, GameSnapshot, GameStatus, MoveError, SelectionFault, TurnEvent};
use crate::log::{EventLog, LogEvent};
use crate::surface::{paint, InputSource, RenderSurface, ScoreRecorder};
use crate::types::Command;

/// Result of one finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub status: GameStatus,
    pub score: u32,
    pub remaining: usize,
    pub turns: u32,
}

/// Owns the collaborators for a run of games.
pub struct GameDriver<R, I, S> {
    surface: R,
    input: I,
    scores: S,
    log: EventLog,
    player: String,
    games: u32,
    snapshot: GameSnapshot,
    warnings: Vec<String>,
}

impl<R, I, S> GameDriver<R, I, S>
where
    R: RenderSurface,
    I: InputSource,
    S: ScoreRecorder,
{
    pub fn new(surface: R, input: I, scores: S, log: EventLog, player: impl Into<String>) -> Self {
        Self {
            surface,
            input,
            scores,
            log,
            player: player.into(),
            games: 0,
            snapshot: GameSnapshot::default(),
            warnings: Vec::new(),
        }
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut R {
        &mut self.surface
    }

    /// Games started so far.
    pub fn games(&self) -> u32 {
        self.games
    }

    /// Play `session` to the end.
    ///
    /// Cleared and stuck games are recorded; abandoned ones are not. A failed
    /// recording is logged and play continues.
    pub fn play(&mut self, session: &mut GameSession, seed: Option<u32>) -> Result<GameOutcome> {
        self.games += 1;
        self.log.record(
            self.games,
            session.turn(),
            &LogEvent::GameStarted {
                difficulty: session.difficulty().map(|d| d.as_str().to_string()),
                seed,
                tiles: session.board().len(),
            },
        );
        self.redraw(session, None)?;

        while !session.is_over() {
            let command = self.input.next_command()?;
            let turn = session.turn();
            let event = session.apply(command);
            if let Some(entry) = LogEvent::from_turn(&event) {
                self.log.record(self.games, turn, &entry);
            }
            let message = event_message(&event);
            self.redraw(session, message.as_deref())?;
        }

        let outcome = GameOutcome {
            status: session.status(),
            score: session.score(),
            remaining: session.board().remaining(),
            turns: session.turn(),
        };

        if matches!(outcome.status, GameStatus::Cleared | GameStatus::Stuck) {
            if let Err(e) = self.scores.record_score(&self.player, outcome.score) {
                let error = format!("{:#}", e);
                self.log.record(
                    self.games,
                    outcome.turns,
                    &LogEvent::ScoreRecordFailed {
                        error: error.clone(),
                    },
                );
                self.warnings.push(format!("score not saved: {}", error));
            }
        }

        self.log.record(
            self.games,
            outcome.turns,
            &LogEvent::GameOver {
                status: outcome.status.as_str().to_string(),
                score: outcome.score,
                remaining: outcome.remaining,
            },
        );
        let text = end_message(&outcome);
        self.redraw(session, Some(text.as_str()))?;
        Ok(outcome)
    }

    /// After game over: `Select` asks for another deal, `Cancel` or
    /// `ReturnToMenu` ends the run. Other commands are ignored.
    pub fn wait_for_restart(&mut self) -> Result<bool> {
        loop {
            match self.input.next_command()? {
                Command::Select => return Ok(true),
                Command::Cancel | Command::ReturnToMenu => return Ok(false),
                _ => {}
            }
        }
    }

    /// Warnings collected so far, including event-log failures.
    pub fn take_warnings(&mut self) -> Vec<String> {
        let mut out = std::mem::take(&mut self.warnings);
        out.extend(self.log.take_failure());
        out
    }

    fn redraw(&mut self, session: &GameSession, message: Option<&str>) -> Result<()> {
        session.snapshot_into(&mut self.snapshot);
        paint(&mut self.surface, &self.snapshot, message)
    }
}

/// Player-facing text for a session event.
pub fn event_message(event: &TurnEvent) -> Option<String> {
    match event {
        TurnEvent::PairRemoved { points, .. } => Some(format!("+{} points", points)),
        TurnEvent::Rejected(MoveError::TileNotRemovable { .. }) => {
            Some("The tile is not removable.".to_string())
        }
        TurnEvent::Rejected(MoveError::InvalidSelection(SelectionFault::SameTile)) => {
            Some("The two tiles selected must be different.".to_string())
        }
        TurnEvent::Rejected(MoveError::InvalidSelection(SelectionFault::NoMatch)) => {
            Some("The two tiles you selected do not match.".to_string())
        }
        TurnEvent::Rejected(MoveError::NavigationExhausted) => {
            Some("No tile in that direction.".to_string())
        }
        TurnEvent::HintShown { pair: Some(_) } => Some("Try the marked pair.".to_string()),
        TurnEvent::HintShown { pair: None } => Some("No pairs left.".to_string()),
        TurnEvent::CursorMoved { .. }
        | TurnEvent::FirstPick { .. }
        | TurnEvent::Abandoned
        | TurnEvent::Ignored => None,
    }
}

/// End-of-game text; distinguishes a cleared board from a stuck one.
pub fn end_message(outcome: &GameOutcome) -> String {
    match outcome.status {
        GameStatus::Cleared => format!("All tiles removed! Final score: {}", outcome.score),
        GameStatus::Stuck => format!(
            "No more moves with {} tiles left. Final score: {}",
            outcome.remaining, outcome.score
        ),
        GameStatus::Abandoned => format!("Game abandoned. Score: {}", outcome.score),
        GameStatus::Playing => String::new(),
    }
}
