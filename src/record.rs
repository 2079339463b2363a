#![cfg(feature = "std")]

//! Best-score persistence. Only a single shot count is ever stored.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::game::GameSession;

/// Environment variable naming the default record file.
pub const RECORD_ENV: &str = "SEABATTLE_RECORD";
const DEFAULT_RECORD_FILE: &str = "seabattle-record.json";

/// Storage for the best (lowest) winning shot count.
pub trait RecordStore {
    fn load(&self) -> anyhow::Result<Option<u32>>;
    fn save(&mut self, shots: u32) -> anyhow::Result<()>;
}

/// In-process store, used by tests and the simulator.
#[derive(Debug, Default, Clone)]
pub struct MemoryRecordStore {
    best: Option<u32>,
}

impl MemoryRecordStore {
    pub fn new(best: Option<u32>) -> Self {
        Self { best }
    }
}

impl RecordStore for MemoryRecordStore {
    fn load(&self) -> anyhow::Result<Option<u32>> {
        Ok(self.best)
    }

    fn save(&mut self, shots: u32) -> anyhow::Result<()> {
        self.best = Some(shots);
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct RecordFile {
    best_shots: u32,
}

/// JSON file holding `{"best_shots": n}`. A missing file means no record yet.
#[derive(Debug, Clone)]
pub struct FileRecordStore {
    path: PathBuf,
}

impl FileRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path from `SEABATTLE_RECORD`, falling back to a file in the working directory.
    pub fn from_env() -> Self {
        let path = std::env::var_os(RECORD_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RECORD_FILE));
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Forget the stored record.
    pub fn clear(&self) -> anyhow::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("removing {}", self.path.display())),
        }
    }
}

impl RecordStore for FileRecordStore {
    fn load(&self) -> anyhow::Result<Option<u32>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e).with_context(|| format!("reading {}", self.path.display())),
        };
        let record: RecordFile = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        debug!("loaded record {} from {}", record.best_shots, self.path.display());
        Ok(Some(record.best_shots))
    }

    fn save(&mut self, shots: u32) -> anyhow::Result<()> {
        let text = serde_json::to_string(&RecordFile { best_shots: shots })?;
        fs::write(&self.path, text).with_context(|| format!("writing {}", self.path.display()))
    }
}

impl GameSession {
    /// Persist the shot count if this session set a new record.
    /// Returns whether anything was written.
    pub fn commit_record<S: RecordStore + ?Sized>(&self, store: &mut S) -> anyhow::Result<bool> {
        match self.record_to_commit() {
            Some(shots) => {
                store.save(shots)?;
                info!("new record saved: {} shots", shots);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
