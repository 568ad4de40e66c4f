//! Integration tests for the full game loop
//!
//! A planner walks the cursor with breadth-first search over directional
//! commands until it reaches a removable tile, selects it, then does the
//! same for a second tile. Faces are assigned afterwards so each planned pair
//! matches, and the command script is replayed against a real board.

use std::collections::{HashSet, VecDeque};

use anyhow::Result;

use tui_mahjong::core::{deck, tiles_match, Board, GameSession, GameStatus, Layout, LayoutEntry, TurnEvent};
use tui_mahjong::engine::{EventLog, GameDriver, ScoreRecorder, ScriptedInput};
use tui_mahjong::term::{BoardView, FrameSurface, Viewport};
use tui_mahjong::types::{Command, Difficulty, Suit, TileFace};

const MOVES: [Command; 4] = [Command::Up, Command::Down, Command::Left, Command::Right];

#[derive(Default)]
struct MemoryScores {
    recorded: Vec<(String, u32)>,
}

impl ScoreRecorder for MemoryScores {
    fn record_score(&mut self, player: &str, score: u32) -> Result<()> {
        self.recorded.push((player.to_string(), score));
        Ok(())
    }
}

fn cursor_key(session: &GameSession) -> (LayoutEntry, Option<usize>) {
    (session.cursor().base(), session.highlighted())
}

/// Shortest directional path to a highlighted slot accepted by `want`.
fn route(
    session: &GameSession,
    want: impl Fn(&GameSession, usize) -> bool,
) -> Option<(Vec<Command>, GameSession)> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(cursor_key(session));
    queue.push_back((session.clone(), Vec::new()));

    while let Some((state, path)) = queue.pop_front() {
        if let Some(slot) = state.highlighted() {
            if want(&state, slot) {
                return Some((path, state));
            }
        }
        for cmd in MOVES {
            let mut next = state.clone();
            if let TurnEvent::CursorMoved { .. } = next.apply(cmd) {
                if seen.insert(cursor_key(&next)) {
                    let mut p = path.clone();
                    p.push(cmd);
                    queue.push_back((next, p));
                }
            }
        }
    }
    None
}

/// Commands that clear `difficulty`, and the pairs they remove in order.
fn plan(difficulty: Difficulty) -> (Vec<Command>, Vec<(usize, usize)>) {
    let season = TileFace::new(Suit::Season, 1).unwrap();
    let faces = vec![season; difficulty.num_tiles()];
    let board = Board::new(Layout::standard(difficulty), faces).unwrap();
    let mut session = GameSession::from_board(board);

    let mut script = Vec::new();
    let mut pairs = Vec::new();
    while !session.is_over() {
        let (path, mut state) = route(&session, |s, slot| s.board().is_removable(slot))
            .expect("a removable tile is reachable");
        script.extend(path);
        script.push(Command::Select);
        let first = match state.apply(Command::Select) {
            TurnEvent::FirstPick { slot } => slot,
            other => panic!("unexpected first pick: {:?}", other),
        };

        let (path, mut state) = route(&state, |s, slot| slot != first && s.board().is_removable(slot))
            .expect("a second removable tile is reachable");
        script.extend(path);
        script.push(Command::Select);
        match state.apply(Command::Select) {
            TurnEvent::PairRemoved { first: a, second: b, .. } => pairs.push((a, b)),
            other => panic!("unexpected removal: {:?}", other),
        }
        session = state;
    }
    assert_eq!(session.status(), GameStatus::Cleared);
    (script, pairs)
}

/// A board whose planned pairs carry matching faces from the real deck.
fn solvable_board(difficulty: Difficulty, pairs: &[(usize, usize)]) -> Board {
    let deck = deck::composition(difficulty);
    let mut faces = vec![deck[0]; difficulty.num_tiles()];
    for (k, &(a, b)) in pairs.iter().enumerate() {
        assert!(tiles_match(deck[2 * k], deck[2 * k + 1]));
        faces[a] = deck[2 * k];
        faces[b] = deck[2 * k + 1];
    }
    Board::new(Layout::standard(difficulty), faces).unwrap()
}

fn replay(difficulty: Difficulty) {
    let (script, pairs) = plan(difficulty);
    assert_eq!(pairs.len() * 2, difficulty.num_tiles());

    let mut session = GameSession::from_board(solvable_board(difficulty, &pairs));
    let mut removed = Vec::new();
    for cmd in script {
        if let TurnEvent::PairRemoved { first, second, .. } = session.apply(cmd) {
            removed.push((first, second));
        }
    }
    assert_eq!(removed, pairs);
    assert_eq!(session.status(), GameStatus::Cleared);
    assert_eq!(session.board().remaining(), 0);
    assert_eq!(session.turn() as usize, pairs.len() + 1);
}

#[test]
fn test_clear_easy_board_through_cursor_commands() {
    replay(Difficulty::Easy);
}

#[test]
fn test_clear_medium_board_through_cursor_commands() {
    replay(Difficulty::Medium);
}

#[test]
fn test_clear_hard_board_through_cursor_commands() {
    replay(Difficulty::Hard);
}

#[test]
fn test_driver_plays_scripted_game_to_the_end() {
    let (mut script, pairs) = plan(Difficulty::Easy);
    let board = solvable_board(Difficulty::Easy, &pairs);
    let mut session = GameSession::from_board(board);

    // Escape after the end screen.
    script.push(Command::Cancel);
    let surface = FrameSurface::new(BoardView::default(), Viewport::new(100, 24));
    let mut driver = GameDriver::new(
        surface,
        ScriptedInput::new(script),
        MemoryScores::default(),
        EventLog::disabled(),
        "tester",
    );

    let outcome = driver.play(&mut session, None).unwrap();
    assert_eq!(outcome.status, GameStatus::Cleared);
    assert_eq!(outcome.remaining, 0);
    assert!(outcome.score > 0);
    assert!(!driver.wait_for_restart().unwrap());

    let text: String = (0..24).map(|y| driver.surface().frame().row_text(y)).collect();
    assert!(text.contains("BOARD CLEARED"));
    assert!(text.contains("All tiles removed!"));
    assert!(driver.take_warnings().is_empty());
}

#[test]
fn test_scripted_session_records_score_once() {
    let (script, pairs) = plan(Difficulty::Easy);
    let board = solvable_board(Difficulty::Easy, &pairs);
    let mut session = GameSession::from_board(board);
    let expected: u32 = {
        let mut replay = session.clone();
        for &cmd in &script {
            replay.apply(cmd);
        }
        replay.score()
    };

    let mut scores = MemoryScores::default();
    {
        let surface = FrameSurface::new(BoardView::default(), Viewport::new(80, 24));
        let mut driver = GameDriver::new(
            surface,
            ScriptedInput::new(script),
            &mut scores,
            EventLog::disabled(),
            "tester",
        );
        driver.play(&mut session, Some(7)).unwrap();
    }
    assert_eq!(scores.recorded, vec![("tester".to_string(), expected)]);
}

#[test]
fn test_same_seed_deals_same_board() {
    let a = GameSession::new(Difficulty::Hard, 99).unwrap().snapshot();
    let b = GameSession::new(Difficulty::Hard, 99).unwrap().snapshot();
    let c = GameSession::new(Difficulty::Hard, 100).unwrap().snapshot();
    assert_eq!(a, b);
    assert_ne!(a.tiles, c.tiles);
}

#[test]
fn test_first_moves_on_seeded_easy_deal() {
    let mut game = GameSession::new(Difficulty::Easy, 12345).unwrap();
    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(game.highlighted(), Some(0));
    assert_eq!(game.apply(Command::Select), TurnEvent::FirstPick { slot: 0 });
    assert_eq!(game.apply(Command::Right), TurnEvent::CursorMoved { slot: 1 });
    assert_eq!(game.picks(), &[0]);
}
