//! Terminal Mahjong solitaire (default binary).
//!
//! `tui-mahjong [easy|medium|hard]` plays; `tui-mahjong scores` prints the
//! high-score table. See `GameConfig` for the environment variables.

use anyhow::Result;

use tui_mahjong::core::GameSession;
use tui_mahjong::engine::{
    EventLog, FileScoreStore, GameConfig, GameDriver, NullScores, RunMode, ScoreRecorder,
};
use tui_mahjong::input::TerminalInput;
use tui_mahjong::term::{BoardView, TerminalSurface};

fn main() -> Result<()> {
    let mut config = GameConfig::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();

    match config.apply_args(&args)? {
        RunMode::ShowScores => print_scores(&config),
        RunMode::Play => play(&config),
    }
}

fn print_scores(config: &GameConfig) -> Result<()> {
    let table = FileScoreStore::new(config.scores_path.clone()).load()?;
    if table.is_empty() {
        println!("No high scores yet.");
    }
    for (rank, entry) in table.entries().iter().enumerate() {
        println!("{:>2}. {:<20} {:>6}", rank + 1, entry.name, entry.score);
    }
    Ok(())
}

fn play(config: &GameConfig) -> Result<()> {
    let scores: Box<dyn ScoreRecorder> = if config.scores_disabled {
        Box::new(NullScores)
    } else {
        Box::new(FileScoreStore::new(config.scores_path.clone()))
    };
    let log = EventLog::open(config.log_path.as_deref());

    let mut surface = TerminalSurface::new(BoardView::default());
    surface.enter()?;
    let mut driver = GameDriver::new(surface, TerminalInput::new(), scores, log, config.player.clone());

    let result = run(&mut driver, config);

    // Always try to restore terminal state.
    let _ = driver.surface_mut().exit();
    for warning in driver.take_warnings() {
        eprintln!("warning: {}", warning);
    }
    result
}

fn run<S: ScoreRecorder>(
    driver: &mut GameDriver<TerminalSurface, TerminalInput, S>,
    config: &GameConfig,
) -> Result<()> {
    loop {
        let seed = config.seed_for_game(driver.games() + 1);
        let mut session = GameSession::new(config.difficulty, seed)?;
        driver.play(&mut session, Some(seed))?;
        if !driver.wait_for_restart()? {
            return Ok(());
        }
    }
}
