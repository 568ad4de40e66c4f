use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_mahjong::core::{solver, Board, GameSession, Navigator, SimpleRng};
use tui_mahjong::types::{Difficulty, Direction};

fn bench_has_move(c: &mut Criterion) {
    let board = Board::generate(Difficulty::Hard, &mut SimpleRng::new(12345)).unwrap();

    c.bench_function("has_move_hard", |b| {
        b.iter(|| black_box(solver::has_move(black_box(&board))))
    });
}

fn bench_navigation(c: &mut Criterion) {
    let board = Board::generate(Difficulty::Hard, &mut SimpleRng::new(12345)).unwrap();
    let walk = [
        Direction::Down,
        Direction::Right,
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    c.bench_function("navigate_6_steps_hard", |b| {
        b.iter(|| {
            let mut nav = Navigator::new();
            nav.home(&board);
            for dir in walk {
                let _ = black_box(nav.step(&board, dir));
            }
        })
    });
}

fn bench_new_session(c: &mut Criterion) {
    c.bench_function("deal_hard_session", |b| {
        b.iter(|| GameSession::new(Difficulty::Hard, black_box(42)).unwrap())
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let session = GameSession::new(Difficulty::Hard, 42).unwrap();
    let mut snap = session.snapshot();

    c.bench_function("snapshot_into_hard", |b| {
        b.iter(|| session.snapshot_into(black_box(&mut snap)))
    });
}

criterion_group!(
    benches,
    bench_has_move,
    bench_navigation,
    bench_new_session,
    bench_snapshot
);
criterion_main!(benches);
