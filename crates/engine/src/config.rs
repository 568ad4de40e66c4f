//! Runtime configuration from environment variables and arguments
//!
//! | Variable | Default |
//! |---|---|
//! | `MAHJONG_DIFFICULTY` | `easy` |
//! | `MAHJONG_PLAYER` | `player` |
//! | `MAHJONG_SEED` | derived from the clock |
//! | `MAHJONG_SCORES_PATH` | `HighScores.dat` |
//! | `MAHJONG_LOG_PATH` | unset (no event log) |
//! | `MAHJONG_SCORES_DISABLED` | unset |

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::highscores::DEFAULT_SCORES_FILE;
use crate::types::Difficulty;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub player: String,
    /// Fixed seed for the first deal; `None` seeds from the clock.
    pub seed: Option<u32>,
    pub scores_path: PathBuf,
    pub log_path: Option<PathBuf>,
    pub scores_disabled: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            player: "player".to_string(),
            seed: None,
            scores_path: PathBuf::from(DEFAULT_SCORES_FILE),
            log_path: None,
            scores_disabled: false,
        }
    }
}

/// What the binary was asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Play,
    /// Print the high-score table and exit.
    ShowScores,
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset, empty or unparsable values keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let defaults = Self::default();

        let difficulty = get("MAHJONG_DIFFICULTY")
            .and_then(|s| Difficulty::from_str(&s))
            .unwrap_or(defaults.difficulty);

        let player = get("MAHJONG_PLAYER").unwrap_or(defaults.player);

        let seed = get("MAHJONG_SEED").and_then(|s| s.parse().ok());

        let scores_path = get("MAHJONG_SCORES_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.scores_path);

        let log_path = get("MAHJONG_LOG_PATH").map(PathBuf::from);

        let scores_disabled = get("MAHJONG_SCORES_DISABLED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            difficulty,
            player,
            seed,
            scores_path,
            log_path,
            scores_disabled,
        }
    }

    /// Apply command-line arguments (program name excluded).
    ///
    /// Accepts a difficulty (`easy`, `medium`, `hard` or `1`-`3`) or `scores`.
    pub fn apply_args(&mut self, args: &[String]) -> Result<RunMode> {
        let mut mode = RunMode::Play;
        for arg in args {
            if arg == "scores" {
                mode = RunMode::ShowScores;
            } else if let Some(difficulty) = Difficulty::from_str(arg) {
                self.difficulty = difficulty;
            } else {
                return Err(anyhow!("unknown argument: {}", arg));
            }
        }
        Ok(mode)
    }

    /// Seed for the `game`-th deal of this run (1-based).
    pub fn seed_for_game(&self, game: u32) -> u32 {
        match self.seed {
            Some(seed) => seed.wrapping_add(game.saturating_sub(1)),
            None => clock_seed().wrapping_add(game),
        }
    }
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    (nanos ^ (nanos >> 32)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = GameConfig::from_lookup(lookup(&[]));
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_reads_every_variable() {
        let config = GameConfig::from_lookup(lookup(&[
            ("MAHJONG_DIFFICULTY", "Hard"),
            ("MAHJONG_PLAYER", "ada lovelace"),
            ("MAHJONG_SEED", "42"),
            ("MAHJONG_SCORES_PATH", "/tmp/scores.dat"),
            ("MAHJONG_LOG_PATH", "/tmp/mahjong.jsonl"),
            ("MAHJONG_SCORES_DISABLED", "true"),
        ]));
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.player, "ada lovelace");
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.scores_path, PathBuf::from("/tmp/scores.dat"));
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/mahjong.jsonl")));
        assert!(config.scores_disabled);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = GameConfig::from_lookup(lookup(&[
            ("MAHJONG_DIFFICULTY", "expert"),
            ("MAHJONG_SEED", "not-a-number"),
            ("MAHJONG_LOG_PATH", "   "),
        ]));
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.seed, None);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn test_args_override_difficulty() {
        let mut config = GameConfig::default();
        assert_eq!(config.apply_args(&["2".to_string()]).unwrap(), RunMode::Play);
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(
            config.apply_args(&["scores".to_string()]).unwrap(),
            RunMode::ShowScores
        );
        assert!(config.apply_args(&["--fast".to_string()]).is_err());
    }

    #[test]
    fn test_fixed_seed_advances_per_game() {
        let config = GameConfig {
            seed: Some(10),
            ..GameConfig::default()
        };
        assert_eq!(config.seed_for_game(1), 10);
        assert_eq!(config.seed_for_game(3), 12);
    }
}
