//! Board and fleet configuration.

use alloc::vec::Vec;

use crate::common::BoardError;

pub const BOARD_SIZE: usize = 10;

/// Upper bound on anchor picks per ship before placement gives up.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

/// A class of ship in the fleet: how many decks it has and how many of them sail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    decks: usize,
    count: usize,
}

impl ShipClass {
    pub const fn new(decks: usize, count: usize) -> Self {
        Self { decks, count }
    }

    /// Length of each ship of this class.
    pub fn decks(&self) -> usize {
        self.decks
    }

    /// Number of ships of this class.
    pub fn count(&self) -> usize {
        self.count
    }
}

pub const NUM_CLASSES: usize = 4;
pub const STANDARD_FLEET: [ShipClass; NUM_CLASSES] = [
    ShipClass::new(4, 1),
    ShipClass::new(3, 2),
    ShipClass::new(2, 3),
    ShipClass::new(1, 4),
];

/// Total number of ship cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 * 2 + 2 * 3 + 4;

/// Grid dimension and fleet composition for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetConfig {
    pub board_size: usize,
    pub fleet: Vec<ShipClass>,
    pub max_attempts: u32,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            fleet: STANDARD_FLEET.to_vec(),
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

impl FleetConfig {
    pub fn new(board_size: usize, fleet: &[ShipClass]) -> Self {
        Self {
            board_size,
            fleet: fleet.to_vec(),
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Ship lengths in placement order, one entry per ship.
    pub fn ship_lengths(&self) -> Vec<usize> {
        self.fleet
            .iter()
            .flat_map(|class| core::iter::repeat(class.decks()).take(class.count()))
            .collect()
    }

    pub fn ship_count(&self) -> usize {
        self.fleet.iter().map(ShipClass::count).sum()
    }

    pub fn total_decks(&self) -> usize {
        self.fleet.iter().map(|c| c.decks() * c.count()).sum()
    }

    /// Reject shapes that can never produce a playable board.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.board_size == 0 {
            return Err(BoardError::InvalidConfig("board size must be positive"));
        }
        if self.ship_count() == 0 {
            return Err(BoardError::InvalidConfig("fleet is empty"));
        }
        if self.ship_count() > u8::MAX as usize {
            return Err(BoardError::InvalidConfig("too many ships"));
        }
        if self.fleet.iter().any(|c| c.count() > 0 && c.decks() == 0) {
            return Err(BoardError::InvalidConfig("ships need at least one deck"));
        }
        if self.fleet.iter().any(|c| c.count() > 0 && c.decks() > self.board_size) {
            return Err(BoardError::InvalidConfig("ship is longer than the board"));
        }
        if self.max_attempts == 0 {
            return Err(BoardError::InvalidConfig("placement attempts must be positive"));
        }
        Ok(())
    }
}
