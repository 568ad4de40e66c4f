//! Board rules through the public API: stacking, blocking and removal

use tui_mahjong::core::{Board, ConfigurationError, GameSession, Layout, LayoutEntry, MoveError, SelectionFault, SideOverride, TurnEvent};
use tui_mahjong::types::{Command, Difficulty, Suit, TileFace};

fn uniform(difficulty: Difficulty) -> Board {
    let season = TileFace::new(Suit::Season, 1).unwrap();
    Board::new(Layout::standard(difficulty), vec![season; difficulty.num_tiles()]).unwrap()
}

#[test]
fn test_full_boards_have_consistent_removability() {
    for difficulty in Difficulty::ALL {
        let board = uniform(difficulty);
        let removed = board.removed_flags();
        let topo = board.topology();
        for slot in 0..board.len() {
            assert_eq!(
                board.is_removable(slot),
                topo.is_topmost(slot, removed) && topo.side_free(slot, removed),
                "{:?} slot {}",
                difficulty,
                slot
            );
        }
        assert!(board.is_removable(0));
        assert!(!board.is_removable(1));
    }
}

#[test]
fn test_apex_blocks_top_block_until_removed() {
    let mut board = uniform(Difficulty::Hard);
    assert!(board.is_removable(143));
    for slot in 139..=142 {
        assert!(!board.is_removable(slot), "slot {}", slot);
    }

    board.remove_pair(143, 0).unwrap();
    assert_eq!(board.remaining(), 142);
    for slot in 139..=142 {
        assert!(board.topology().is_topmost(slot, board.removed_flags()));
    }
    assert!(board.is_removable(139));
}

#[test]
fn test_layers_grow_with_stack_height() {
    let board = uniform(Difficulty::Hard);
    let layers: Vec<u32> = [0, 86, 87, 122, 123, 139, 143]
        .iter()
        .map(|&slot| board.layer(slot))
        .collect();
    assert_eq!(layers, vec![0, 0, 1, 1, 2, 3, 4]);
}

#[test]
fn test_medium_relocated_slot_rests_on_block() {
    let board = uniform(Difficulty::Medium);
    assert_eq!(board.layer(44), 1);
    assert!(board.topology().covered_by(73).contains(&44));
    assert!(!board.is_removable(73));
}

#[test]
fn test_board_keeps_layout_overrides() {
    let board = uniform(Difficulty::Medium);
    assert_eq!(board.layout().len(), 122);
    assert!(board.layout().covers().is_empty());
    assert!(board
        .layout()
        .sides()
        .contains(&SideOverride::Blocks { blocker: 44, blocked: 121 }));
    assert!(!board.is_removable(121));

    let board = uniform(Difficulty::Hard);
    assert_eq!(board.layout().covers().len(), 4);
    assert!(board
        .layout()
        .sides()
        .contains(&SideOverride::Blocks { blocker: 43, blocked: 56 }));
    assert_eq!(board.topology().blocked_by(56), &[43]);
}

#[test]
fn test_topmost_follows_removals() {
    let mut board = uniform(Difficulty::Hard);
    // Slot 23 carries 94 one layer up and 123 two layers up.
    assert_eq!(board.topmost_at(319, 199), Some(123));
    board.remove_pair(143, 0).unwrap();
    board.remove_pair(139, 140).unwrap();
    board.remove_pair(141, 142).unwrap();
    board.remove_pair(123, 86).unwrap();
    assert_eq!(board.topmost_at(319, 199), Some(94));
}

#[test]
fn test_rejected_pair_leaves_board_untouched() {
    let c1 = TileFace::new(Suit::Character, 1).unwrap();
    let c2 = TileFace::new(Suit::Character, 2).unwrap();
    let entries = vec![LayoutEntry::new(0, 0), LayoutEntry::new(41, 0), LayoutEntry::new(200, 0), LayoutEntry::new(241, 0)];
    let layout = Layout::custom(entries, Vec::new()).unwrap();
    let mut board = Board::new(layout, vec![c1, c2, c2, c1]).unwrap();

    assert_eq!(
        board.remove_pair(0, 1),
        Err(MoveError::InvalidSelection(SelectionFault::NoMatch))
    );
    assert_eq!(
        board.remove_pair(0, 0),
        Err(MoveError::InvalidSelection(SelectionFault::SameTile))
    );
    assert_eq!(board.remaining(), 4);
    assert_eq!(board.remove_pair(0, 3), Ok(c1));
    assert_eq!(board.remaining(), 2);
}

#[test]
fn test_mismatched_deck_is_a_configuration_error() {
    let err = Board::new(Layout::standard(Difficulty::Easy), Vec::new()).unwrap_err();
    assert_eq!(err, ConfigurationError::CountMismatch { slots: 86, faces: 0 });
}

#[test]
fn test_selecting_blocked_tile_is_rejected() {
    let mut game = GameSession::new(Difficulty::Easy, 12345).unwrap();
    assert_eq!(game.apply(Command::Right), TurnEvent::CursorMoved { slot: 1 });
    assert_eq!(
        game.apply(Command::Select),
        TurnEvent::Rejected(MoveError::TileNotRemovable { slot: Some(1) })
    );
    assert_eq!(game.board().remaining(), 86);
}

#[test]
fn test_cancel_abandons_and_ignores_later_commands() {
    let mut game = GameSession::new(Difficulty::Medium, 5).unwrap();
    assert_eq!(game.apply(Command::Cancel), TurnEvent::Abandoned);
    assert!(game.is_over());
    assert_eq!(game.apply(Command::Select), TurnEvent::Ignored);
    assert_eq!(game.apply(Command::Down), TurnEvent::Ignored);
}
