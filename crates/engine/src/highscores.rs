//! High-score table and its file format
//!
//! ```text
//! Mahjong file verification header.
//! alice 2140
//! bob the builder 1988
//! ```
//!
//! The first line must be the header; anything else resets the table. Each
//! following line is a name (which may contain spaces) and a score as the last
//! token, best first, at most ten lines. Reading stops at the first blank line.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::surface::ScoreRecorder;
use crate::types::HIGH_SCORE_CAPACITY;

/// Literal first line of a valid score file.
pub const FILE_HEADER: &str = "Mahjong file verification header.";

/// Default score file name.
pub const DEFAULT_SCORES_FILE: &str = "HighScores.dat";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScore {
    pub name: String,
    pub score: u32,
}

/// Best scores, highest first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HighScoreTable {
    entries: Vec<HighScore>,
}

impl HighScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[HighScore] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a score, returning its rank (0-based) if it made the table.
    ///
    /// A new score goes below every existing entry with an equal or higher
    /// score, so ties never displace older entries.
    pub fn insert(&mut self, name: &str, score: u32) -> Option<usize> {
        let rank = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len());
        if rank >= HIGH_SCORE_CAPACITY {
            return None;
        }
        self.entries.insert(
            rank,
            HighScore {
                name: name.trim().to_string(),
                score,
            },
        );
        self.entries.truncate(HIGH_SCORE_CAPACITY);
        Some(rank)
    }

    /// Parse file contents.
    ///
    /// Returns `None` when the header is missing or wrong. Lines without a
    /// numeric last token are skipped.
    pub fn parse(text: &str) -> Option<Self> {
        let mut lines = text.lines();
        if lines.next().map(|l| l.trim_end_matches('\r')) != Some(FILE_HEADER) {
            return None;
        }

        let mut entries = Vec::new();
        for line in lines {
            let line = line.trim();
            if line.is_empty() {
                break;
            }
            let mut tokens: Vec<&str> = line.split_whitespace().collect();
            let Some(score) = tokens.pop().and_then(|t| t.parse::<u32>().ok()) else {
                continue;
            };
            entries.push(HighScore {
                name: tokens.join(" "),
                score,
            });
            if entries.len() == HIGH_SCORE_CAPACITY {
                break;
            }
        }
        Some(Self { entries })
    }

    /// File contents for this table, header included.
    pub fn to_file_string(&self) -> String {
        let mut out = String::with_capacity(64 + self.entries.len() * 24);
        out.push_str(FILE_HEADER);
        out.push('\n');
        for e in &self.entries {
            out.push_str(&format!("{} {}\n", e.name, e.score));
        }
        out
    }
}

/// Score table stored in a text file.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the table; a missing file, a file that is not text or a bad
    /// header yields an empty table and rewrites the file.
    pub fn load(&self) -> Result<HighScoreTable> {
        match fs::read(&self.path) {
            Ok(bytes) => match String::from_utf8(bytes)
                .ok()
                .and_then(|text| HighScoreTable::parse(&text))
            {
                Some(table) => Ok(table),
                None => self.reset(),
            },
            Err(e) if e.kind() == ErrorKind::NotFound => self.reset(),
            Err(e) => {
                Err(e).with_context(|| format!("reading scores from {}", self.path.display()))
            }
        }
    }

    pub fn save(&self, table: &HighScoreTable) -> Result<()> {
        fs::write(&self.path, table.to_file_string())
            .with_context(|| format!("writing scores to {}", self.path.display()))
    }

    fn reset(&self) -> Result<HighScoreTable> {
        let table = HighScoreTable::new();
        self.save(&table)?;
        Ok(table)
    }
}

impl ScoreRecorder for FileScoreStore {
    fn record_score(&mut self, player: &str, score: u32) -> Result<()> {
        let mut table = self.load()?;
        if table.insert(player, score).is_some() {
            self.save(&table)?;
        }
        Ok(())
    }
}
