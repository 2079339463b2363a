//! Ships and the directions they can be laid out in.

use core::fmt;

/// Session-unique ship identifier, assigned from 1 in fleet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(pub u8);

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Direction a ship extends from its anchor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit step as (column, row) delta.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// Step perpendicular to the ship's axis.
    pub fn cross(self) -> (isize, isize) {
        let (dc, dr) = self.step();
        (dr, dc)
    }
}

/// A vessel of the fleet and the damage it has taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    id: ShipId,
    decks: usize,
    hits: usize,
}

impl Ship {
    pub fn new(id: ShipId, decks: usize) -> Self {
        Self { id, decks, hits: 0 }
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn decks(&self) -> usize {
        self.decks
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Register a hit on one deck. Returns `true` if this hit destroyed the ship.
    pub fn hit(&mut self) -> bool {
        debug_assert!(self.hits < self.decks, "ship {} hit past its length", self.id);
        if self.hits < self.decks {
            self.hits += 1;
        }
        self.is_destroyed()
    }

    pub fn is_destroyed(&self) -> bool {
        self.hits == self.decks
    }
}
