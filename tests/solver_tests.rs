//! Solver properties over randomly played games

use tui_mahjong::core::{solver, tiles_match, Board, GameSession, GameStatus, SimpleRng, TurnEvent};
use tui_mahjong::types::{Command, Difficulty};

/// Every pair of removable, matching slots, by brute force.
fn brute_force_moves(board: &Board) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for i in 0..board.len() {
        for j in i + 1..board.len() {
            if !board.is_removable(i) || !board.is_removable(j) {
                continue;
            }
            if tiles_match(board.face(i).unwrap(), board.face(j).unwrap()) {
                out.push((i, j));
            }
        }
    }
    out
}

#[test]
fn test_solver_agrees_with_brute_force_during_random_play() {
    for difficulty in Difficulty::ALL {
        for seed in 1..=5u32 {
            let mut board = Board::generate(difficulty, &mut SimpleRng::new(seed)).unwrap();
            let mut picker = SimpleRng::new(seed ^ 0x5eed);

            loop {
                let moves = solver::legal_moves(&board);
                assert_eq!(moves, brute_force_moves(&board));
                assert_eq!(solver::has_move(&board), !moves.is_empty());
                assert_eq!(solver::find_move(&board), moves.first().copied());

                let Some(&(a, b)) = moves.get(picker.next_below(moves.len().max(1) as u32) as usize)
                else {
                    break;
                };
                let before = board.remaining();
                board.remove_pair(a, b).unwrap();
                assert_eq!(board.remaining(), before - 2);
            }
            assert!(board.is_cleared() || !solver::has_move(&board));
        }
    }
}

#[test]
fn test_hint_names_a_removable_pair() {
    let mut game = GameSession::new(Difficulty::Hard, 77).unwrap();
    let TurnEvent::HintShown { pair: Some((a, b)) } = game.apply(Command::Hint) else {
        panic!("seeded hard deal has a move");
    };
    assert!(a < b);
    assert!(game.board().is_removable(a) && game.board().is_removable(b));
    assert!(tiles_match(game.board().face(a).unwrap(), game.board().face(b).unwrap()));
    assert_eq!(game.snapshot().hint, Some((a, b)));
    assert_eq!(game.status(), GameStatus::Playing);
}
