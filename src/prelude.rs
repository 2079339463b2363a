//! Commonly used types and utilities for ease of import.

pub use crate::{Coord, FleetConfig, GameSession, GameStatus, Outcome, ShotReport};

#[cfg(feature = "std")]
pub use crate::{init_logging, FileRecordStore, MemoryRecordStore, RecordStore};
