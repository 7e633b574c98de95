//! JSON-lines event log.
//!
//! One file receives both lock events from the game loop and records from the
//! `log` facade, one JSON object per line with a `type` field. The terminal is
//! in raw mode while playing, so this file is the only log output.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use log::{LevelFilter, Log, Metadata, Record};
use serde::Serialize;

use crate::core::GameSnapshot;
use crate::types::LockEvent;

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum LogRecord<'a> {
    Lock {
        ts: u64,
        piece: &'a str,
        rows_cleared: u32,
        score_delta: u32,
        score: u32,
        pieces_locked: u32,
        game_over: bool,
    },
    Log {
        ts: u64,
        level: &'a str,
        target: &'a str,
        message: String,
    },
}

type Sink = Arc<Mutex<Box<dyn Write + Send>>>;

/// Shared handle to the log file. Cloning shares the same writer.
#[derive(Clone)]
pub struct EventLog {
    sink: Sink,
}

impl EventLog {
    /// Open `path` in append mode, creating it if needed.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening event log {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }

    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            sink: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Append a lock event along with the totals after it.
    pub fn record_lock(&self, event: &LockEvent, snap: &GameSnapshot) {
        self.write(&LogRecord::Lock {
            ts: now_ms(),
            piece: event.kind.as_str(),
            rows_cleared: event.rows_cleared,
            score_delta: event.score_delta,
            score: snap.score,
            pieces_locked: snap.pieces_locked,
            game_over: event.game_over,
        });
    }

    pub fn flush(&self) {
        if let Ok(mut w) = self.sink.lock() {
            let _ = w.flush();
        }
    }

    /// Route the `log` facade into this file.
    pub fn install_logger(&self, level: LevelFilter) -> Result<()> {
        log::set_boxed_logger(Box::new(JsonlLogger::new(self.clone(), level)))
            .context("installing logger")?;
        log::set_max_level(level);
        Ok(())
    }

    fn write(&self, record: &LogRecord<'_>) {
        // Logging must never take the game down; drop records on failure.
        let Ok(mut w) = self.sink.lock() else {
            return;
        };
        if serde_json::to_writer(&mut *w, record).is_ok() {
            let _ = w.write_all(b"\n");
        }
    }
}

/// `log::Log` backend writing through an [`EventLog`].
pub struct JsonlLogger {
    log: EventLog,
    level: LevelFilter,
}

impl JsonlLogger {
    pub fn new(log: EventLog, level: LevelFilter) -> Self {
        Self { log, level }
    }
}

impl Log for JsonlLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.log.write(&LogRecord::Log {
            ts: now_ms(),
            level: record.level().as_str(),
            target: record.target(),
            message: record.args().to_string(),
        });
    }

    fn flush(&self) {
        self.log.flush();
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
