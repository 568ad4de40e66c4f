//! JSON-lines event log
//!
//! One record per line:
//!
//! ```text
//! {"ts_ms":1712345678901,"game":1,"turn":3,"event":"pair_removed","first":0,"second":11,"face":"B4","points":126,"remaining":82}
//! ```
//!
//! Logging never interrupts play: the first write failure disables the log
//! and is kept for the caller to report once the terminal is restored.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::core::{MoveError, TurnEvent};

/// Session events as they appear in the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LogEvent {
    GameStarted {
        difficulty: Option<String>,
        seed: Option<u32>,
        tiles: usize,
    },
    CursorMoved {
        slot: usize,
    },
    FirstPick {
        slot: usize,
    },
    PairRemoved {
        first: usize,
        second: usize,
        face: String,
        points: u32,
        remaining: usize,
    },
    Rejected {
        reason: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        slot: Option<usize>,
    },
    HintShown {
        pair: Option<(usize, usize)>,
    },
    Abandoned,
    GameOver {
        status: String,
        score: u32,
        remaining: usize,
    },
    ScoreRecordFailed {
        error: String,
    },
}

impl LogEvent {
    /// Log form of a session event; `None` for events not worth a line.
    pub fn from_turn(event: &TurnEvent) -> Option<Self> {
        Some(match *event {
            TurnEvent::CursorMoved { slot } => LogEvent::CursorMoved { slot },
            TurnEvent::FirstPick { slot } => LogEvent::FirstPick { slot },
            TurnEvent::PairRemoved {
                first,
                second,
                face,
                points,
                remaining,
            } => LogEvent::PairRemoved {
                first,
                second,
                face: face.label(),
                points,
                remaining,
            },
            TurnEvent::Rejected(err) => LogEvent::Rejected {
                reason: err.to_string(),
                slot: match err {
                    MoveError::TileNotRemovable { slot } => slot,
                    _ => None,
                },
            },
            TurnEvent::HintShown { pair } => LogEvent::HintShown { pair },
            TurnEvent::Abandoned => LogEvent::Abandoned,
            TurnEvent::Ignored => return None,
        })
    }
}

#[derive(Serialize)]
struct LogRecord<'a> {
    ts_ms: u64,
    game: u32,
    turn: u32,
    #[serde(flatten)]
    event: &'a LogEvent,
}

/// Append-only JSON-lines writer.
pub struct EventLog {
    file: Option<BufWriter<File>>,
    buf: Vec<u8>,
    failure: Option<String>,
}

impl EventLog {
    pub fn disabled() -> Self {
        Self {
            file: None,
            buf: Vec::new(),
            failure: None,
        }
    }

    /// Open `path` for appending, or stay disabled when `path` is `None`.
    ///
    /// An open failure leaves the log disabled and is reported through
    /// [`EventLog::take_failure`].
    pub fn open(path: Option<&Path>) -> Self {
        let mut log = Self::disabled();
        if let Some(path) = path {
            match OpenOptions::new().create(true).append(true).open(path) {
                Ok(f) => {
                    log.file = Some(BufWriter::new(f));
                    log.buf.reserve(512);
                }
                Err(e) => log.failure = Some(format!("event log {}: {}", path.display(), e)),
            }
        }
        log
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    pub fn record(&mut self, game: u32, turn: u32, event: &LogEvent) {
        let Some(file) = self.file.as_mut() else {
            return;
        };

        let record = LogRecord {
            ts_ms: now_ms(),
            game,
            turn,
            event,
        };
        self.buf.clear();
        if let Err(e) = serde_json::to_writer(&mut self.buf, &record) {
            self.failure.get_or_insert_with(|| format!("event log: {}", e));
            return;
        }
        self.buf.push(b'\n');

        if let Err(e) = file.write_all(&self.buf).and_then(|_| file.flush()) {
            self.failure = Some(format!("event log disabled: {}", e));
            self.file = None;
        }
    }

    /// The first logging failure, if any.
    pub fn take_failure(&mut self) -> Option<String> {
        self.failure.take()
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
