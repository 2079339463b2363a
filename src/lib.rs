#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
mod board;
mod cell;
mod common;
mod config;
mod game;
pub mod prelude;
mod ship;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod record;
#[cfg(feature = "std")]
pub mod ui;

pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use record::{FileRecordStore, MemoryRecordStore, RecordStore};
