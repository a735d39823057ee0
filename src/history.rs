//! Append-only log of applied moves.
//!
//! The log is observational: nothing in it is read back into game logic, and a
//! failed write never interrupts a game.

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use game_core::Mark;
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum HistoryError {
    #[error("history file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("history file {} is not valid JSON: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub index: usize,
    pub mark: Mark,
    pub timestamp: DateTime<Utc>,
}

impl MoveRecord {
    pub fn new(index: usize, mark: Mark) -> Self {
        Self {
            index,
            mark,
            timestamp: Utc::now(),
        }
    }
}

pub trait MoveLog {
    /// Adds `record` at the end of the log.
    ///
    /// The record is kept in memory even if persisting it fails.
    fn append(&mut self, record: MoveRecord) -> Result<(), HistoryError>;

    fn records(&self) -> &[MoveRecord];

    fn clear(&mut self) -> Result<(), HistoryError>;
}

#[derive(Debug, Default)]
pub struct MemoryLog {
    records: Vec<MoveRecord>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MoveLog for MemoryLog {
    fn append(&mut self, record: MoveRecord) -> Result<(), HistoryError> {
        self.records.push(record);
        Ok(())
    }

    fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    fn clear(&mut self) -> Result<(), HistoryError> {
        self.records.clear();
        Ok(())
    }
}

/// Keeps the whole history as one JSON array, rewritten after every append.
#[derive(Debug)]
pub struct JsonFileLog {
    path: PathBuf,
    records: Vec<MoveRecord>,
}

impl JsonFileLog {
    /// Opens `path`, loading any records already saved there.
    ///
    /// A missing file starts an empty history. An unreadable or malformed file
    /// also starts empty and is overwritten on the next append.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let records = match Self::load(&path) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(%err, "starting with an empty move history");
                Vec::new()
            }
        };
        tracing::debug!(path = %path.display(), records = records.len(), "opened move history");
        Self { path, records }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Result<Vec<MoveRecord>, HistoryError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(io_error(path, source)),
        };
        serde_json::from_reader(BufReader::new(file)).map_err(|source| HistoryError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    fn save(&self) -> Result<(), HistoryError> {
        let file = File::create(&self.path).map_err(|source| io_error(&self.path, source))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.records).map_err(|source| {
            HistoryError::Json {
                path: self.path.clone(),
                source,
            }
        })?;
        writer.flush().map_err(|source| io_error(&self.path, source))
    }
}

impl MoveLog for JsonFileLog {
    fn append(&mut self, record: MoveRecord) -> Result<(), HistoryError> {
        self.records.push(record);
        self.save()
    }

    fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    fn clear(&mut self) -> Result<(), HistoryError> {
        self.records.clear();
        match std::fs::remove_file(&self.path) {
            Err(err) if err.kind() != ErrorKind::NotFound => Err(io_error(&self.path, err)),
            _ => Ok(()),
        }
    }
}

fn io_error(path: &Path, source: std::io::Error) -> HistoryError {
    HistoryError::Io {
        path: path.to_path_buf(),
        source,
    }
}
