//! Common types: grid coordinates and board errors.

use alloc::string::String;
use core::fmt;

/// A grid position, column first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub col: usize,
    pub row: usize,
}

impl Coord {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Step by a signed offset, staying inside an `size`×`size` grid.
    pub fn offset(self, d_col: isize, d_row: isize, size: usize) -> Option<Coord> {
        let col = self.col.checked_add_signed(d_col)?;
        let row = self.row.checked_add_signed(d_row)?;
        (col < size && row < size).then_some(Coord { col, row })
    }

    /// Convert signed indices into a coordinate, `None` if outside the grid.
    pub fn checked(col: i64, row: i64, size: usize) -> Option<Coord> {
        let col = usize::try_from(col).ok()?;
        let row = usize::try_from(row).ok()?;
        (col < size && row < size).then_some(Coord { col, row })
    }

    /// Human label such as `B, 3`: lettered column, 1-based row.
    pub fn label(&self) -> String {
        alloc::format!("{}, {}", column_name(self.col), self.row + 1)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_name(self.col), self.row + 1)
    }
}

/// Column letter for boards up to 26 wide, numeric beyond that.
pub fn column_name(col: usize) -> String {
    if col < 26 {
        alloc::format!("{}", (b'A' + col as u8) as char)
    } else {
        alloc::format!("{}", col + 1)
    }
}

/// Errors returned by board setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board size or fleet composition can never be placed.
    InvalidConfig(&'static str),
    /// A coordinate lies outside the grid.
    OutOfBounds(Coord),
    /// Ship would extend past the edge of the grid.
    ShipOutOfBounds,
    /// Ship placement touches or overlaps an existing ship.
    ShipOverlaps,
    /// Random placement exhausted its attempt budget.
    UnableToPlaceShip { ship: u8, attempts: u32 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidConfig(why) => write!(f, "Invalid fleet configuration: {}", why),
            BoardError::OutOfBounds(c) => write!(f, "Coordinate {} is out of bounds", c),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps or touches another ship"),
            BoardError::UnableToPlaceShip { ship, attempts } => write!(
                f,
                "Unable to place ship {} after {} attempts; fleet does not fit on board",
                ship, attempts
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
