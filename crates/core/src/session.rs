//! Game session - one game from deal to game over
//!
//! Owns the board, cursor, current picks and score, and runs the turn
//! protocol one command at a time:
//!
//! 1. The turn starts with the cursor on the tile over the lowest live slot
//! 2. The player moves the cursor and selects a first tile, then a second
//! 3. A matching pair is removed and scored, and a new turn starts
//! 4. The same tile twice, or two tiles that do not match, restart the turn
//!
//! After every removal the solver decides whether the game continues. Given a
//! seed and a command sequence every outcome is reproducible.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::error::{ConfigurationError, MoveError};
use crate::navigator::Navigator;
use crate::rng::SimpleRng;
use crate::scoring::pair_score;
use crate::snapshot::{GameSnapshot, GameStatus, TileSnapshot};
use crate::solver;
use crate::types::{Command, Difficulty, TileFace};

/// What one command did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    /// The cursor now highlights `slot`.
    CursorMoved { slot: usize },
    /// First tile of the turn picked.
    FirstPick { slot: usize },
    /// A matching pair left the board.
    PairRemoved {
        first: usize,
        second: usize,
        face: TileFace,
        points: u32,
        remaining: usize,
    },
    /// Solver witness for the hint command, `None` when stuck.
    HintShown { pair: Option<(usize, usize)> },
    /// Command refused; see [`MoveError`] for what changed.
    Rejected(MoveError),
    /// The player left the game.
    Abandoned,
    /// The game is already over.
    Ignored,
}

/// All state for one game.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    cursor: Navigator,
    picks: ArrayVec<usize, 2>,
    score: u32,
    turn: u32,
    status: GameStatus,
    hint: Option<(usize, usize)>,
    difficulty: Option<Difficulty>,
}

impl GameSession {
    /// Deal a standard board for `difficulty` from `seed`.
    pub fn new(difficulty: Difficulty, seed: u32) -> Result<Self, ConfigurationError> {
        let board = Board::generate(difficulty, &mut SimpleRng::new(seed))?;
        let mut session = Self::from_board(board);
        session.difficulty = Some(difficulty);
        Ok(session)
    }

    /// Start a game on an already dealt board.
    pub fn from_board(board: Board) -> Self {
        let mut session = Self {
            board,
            cursor: Navigator::new(),
            picks: ArrayVec::new(),
            score: 0,
            turn: 1,
            status: GameStatus::Playing,
            hint: None,
            difficulty: None,
        };
        session.refresh_status();
        session.cursor.home(&session.board);
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cursor(&self) -> &Navigator {
        &self.cursor
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.cursor.highlighted()
    }

    pub fn picks(&self) -> &[usize] {
        &self.picks
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn hint(&self) -> Option<(usize, usize)> {
        self.hint
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Apply one player command.
    pub fn apply(&mut self, command: Command) -> TurnEvent {
        if self.is_over() {
            return TurnEvent::Ignored;
        }

        if let Some(dir) = command.direction() {
            return match self.cursor.step(&self.board, dir) {
                Ok(slot) => TurnEvent::CursorMoved { slot },
                Err(err) => TurnEvent::Rejected(err),
            };
        }

        match command {
            Command::Select => self.select(),
            Command::Hint => {
                self.hint = solver::find_move(&self.board);
                TurnEvent::HintShown { pair: self.hint }
            }
            Command::Cancel | Command::ReturnToMenu => {
                self.status = GameStatus::Abandoned;
                self.picks.clear();
                TurnEvent::Abandoned
            }
            Command::Up | Command::Down | Command::Left | Command::Right => TurnEvent::Ignored,
        }
    }

    fn select(&mut self) -> TurnEvent {
        let slot = match self.cursor.highlighted() {
            Some(slot) if self.board.is_removable(slot) => slot,
            other => return TurnEvent::Rejected(MoveError::TileNotRemovable { slot: other }),
        };

        if self.picks.is_empty() {
            self.picks.push(slot);
            return TurnEvent::FirstPick { slot };
        }

        let first = self.picks[0];
        match self.board.remove_pair(first, slot) {
            Ok(face) => {
                let remaining = self.board.remaining();
                let points = pair_score(face, remaining);
                self.score += points;
                self.turn += 1;
                self.refresh_status();
                self.start_turn();
                TurnEvent::PairRemoved {
                    first,
                    second: slot,
                    face,
                    points,
                    remaining,
                }
            }
            Err(err) => {
                self.start_turn();
                TurnEvent::Rejected(err)
            }
        }
    }

    fn start_turn(&mut self) {
        self.picks.clear();
        self.hint = None;
        self.cursor.home(&self.board);
    }

    fn refresh_status(&mut self) {
        if self.board.is_cleared() {
            self.status = GameStatus::Cleared;
        } else if !solver::has_move(&self.board) {
            self.status = GameStatus::Stuck;
        }
    }

    /// Fill `out` with the current redraw list.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();
        let topo = self.board.topology();
        out.tiles.extend(self.board.live_slots().filter_map(|slot| {
            let pos = self.board.position(slot)?;
            Some(TileSnapshot {
                slot,
                face: self.board.face(slot)?,
                x: pos.x,
                y: pos.y,
                layer: topo.layer(slot),
                removable: self.board.is_removable(slot),
            })
        }));
        out.tiles.sort_by_key(|t| (t.layer, t.slot));
        out.cursor = self.cursor.highlighted();
        out.picks = self.picks.clone();
        out.hint = self.hint;
        out.score = self.score;
        out.remaining = self.board.remaining();
        out.turn = self.turn;
        out.status = self.status;
        out.difficulty = self.difficulty;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
