//! The grid, fleet placement, and shot resolution on individual cells.

use alloc::vec::Vec;
use core::fmt;

use log::{debug, trace};
use rand::Rng;

use crate::cell::{Cell, CellKind};
use crate::common::{BoardError, Coord};
use crate::ship::{Direction, Ship, ShipId};

/// Square grid of cells indexed by (column, row).
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an all-water board with nothing revealed.
    pub fn new(size: usize) -> Self {
        let cells = (0..size * size).map(|_| Cell::default()).collect();
        Board { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        (coord.col < self.size && coord.row < self.size).then(|| coord.col * self.size + coord.row)
    }

    fn coord_of(&self, index: usize) -> Coord {
        Coord::new(index / self.size, index % self.size)
    }

    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.index(coord).map(|i| &self.cells[i])
    }

    fn cell_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        self.index(coord).map(move |i| &mut self.cells[i])
    }

    /// All cells, column by column.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (self.coord_of(i), cell))
    }

    /// Coordinates of the cells occupied by ship `id`.
    pub fn ship_cells(&self, id: ShipId) -> Vec<Coord> {
        self.cells()
            .filter(|(_, cell)| cell.ship_id() == Some(id))
            .map(|(coord, _)| coord)
            .collect()
    }

    pub fn ship_cell_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c.kind(), CellKind::Ship(_)))
            .count()
    }

    pub fn revealed_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_revealed()).count()
    }

    pub fn all_revealed(&self) -> bool {
        self.cells.iter().all(Cell::is_revealed)
    }

    /// Directions in which `decks` consecutive water cells start at `anchor`.
    pub fn available_directions(&self, anchor: Coord, decks: usize) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.fits(anchor, dir, decks))
            .collect()
    }

    fn fits(&self, anchor: Coord, dir: Direction, decks: usize) -> bool {
        let (dc, dr) = dir.step();
        (0..decks as isize).all(|i| {
            anchor
                .offset(dc * i, dr * i, self.size)
                .and_then(|c| self.cell(c))
                .is_some_and(Cell::is_water)
        })
    }

    /// Place ship `id` of length `decks` from `anchor` towards `dir`, then mark
    /// its buffer ring as neighbor water.
    pub fn place(
        &mut self,
        id: ShipId,
        decks: usize,
        anchor: Coord,
        dir: Direction,
    ) -> Result<(), BoardError> {
        if self.index(anchor).is_none() {
            return Err(BoardError::OutOfBounds(anchor));
        }
        if decks == 0 {
            return Err(BoardError::InvalidConfig("ships need at least one deck"));
        }
        let (dc, dr) = dir.step();
        let stern = decks as isize - 1;
        if anchor.offset(dc * stern, dr * stern, self.size).is_none() {
            return Err(BoardError::ShipOutOfBounds);
        }
        if !self.fits(anchor, dir, decks) {
            return Err(BoardError::ShipOverlaps);
        }

        for i in 0..decks as isize {
            if let Some(cell) = anchor
                .offset(dc * i, dr * i, self.size)
                .and_then(|c| self.cell_mut(c))
            {
                cell.set_ship(id);
            }
        }

        // One cell before the bow through one cell after the stern, plus both
        // sides of every position along the axis.
        let (xc, xr) = dir.cross();
        let last = decks as isize;
        for i in -1..=last {
            if i == -1 || i == last {
                self.mark_neighbor(anchor, dc * i, dr * i, id);
            }
            self.mark_neighbor(anchor, dc * i + xc, dr * i + xr, id);
            self.mark_neighbor(anchor, dc * i - xc, dr * i - xr, id);
        }
        Ok(())
    }

    fn mark_neighbor(&mut self, anchor: Coord, d_col: isize, d_row: isize, id: ShipId) {
        if let Some(cell) = anchor
            .offset(d_col, d_row, self.size)
            .and_then(|c| self.cell_mut(c))
        {
            cell.mark_neighbor(id);
        }
    }

    /// Pick a random anchor and direction that fit a ship of `decks` length.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        id: ShipId,
        decks: usize,
        max_attempts: u32,
    ) -> Result<(Coord, Direction), BoardError> {
        for attempt in 1..=max_attempts {
            let anchor = Coord::new(
                rng.random_range(0..self.size),
                rng.random_range(0..self.size),
            );
            if !self.cell(anchor).is_some_and(Cell::is_water) {
                continue;
            }
            let dirs = self.available_directions(anchor, decks);
            if dirs.is_empty() {
                trace!("ship {} rejected anchor {}", id, anchor);
                continue;
            }
            let dir = dirs[rng.random_range(0..dirs.len())];
            debug!(
                "ship {} ({} decks) at {} heading {:?} after {} attempt(s)",
                id, decks, anchor, dir, attempt
            );
            return Ok((anchor, dir));
        }
        Err(BoardError::UnableToPlaceShip {
            ship: id.0,
            attempts: max_attempts,
        })
    }

    /// Randomly place every ship in order.
    pub fn place_fleet<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        ships: &[Ship],
        max_attempts: u32,
    ) -> Result<(), BoardError> {
        for ship in ships {
            let (anchor, dir) = self.random_placement(rng, ship.id(), ship.decks(), max_attempts)?;
            self.place(ship.id(), ship.decks(), anchor, dir)?;
        }
        Ok(())
    }

    /// Reveal the cell at `coord` and report what was under it.
    /// Returns `None` if the cell is outside the grid or already revealed.
    pub fn fire_at(&mut self, coord: Coord) -> Option<CellKind> {
        let cell = self.cell_mut(coord)?;
        cell.reveal().then(|| cell.kind())
    }

    /// Reveal every hidden neighbor cell bordering ship `id`.
    pub fn reveal_ring(&mut self, id: ShipId) -> Vec<Coord> {
        self.reveal_where(|cell| cell.borders(id))
    }

    /// Reveal everything still hidden.
    pub fn reveal_all(&mut self) -> Vec<Coord> {
        self.reveal_where(|_| true)
    }

    fn reveal_where<F: Fn(&Cell) -> bool>(&mut self, pred: F) -> Vec<Coord> {
        let size = self.size;
        self.cells
            .iter_mut()
            .enumerate()
            .filter(|(_, cell)| !cell.is_revealed() && pred(cell))
            .filter_map(|(i, cell)| cell.reveal().then(|| Coord::new(i / size, i % size)))
            .collect()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ size: {} }}", self.size)?;
        for row in 0..self.size {
            for col in 0..self.size {
                let cell = &self.cells[col * self.size + row];
                let ch = match (cell.kind(), cell.is_revealed()) {
                    (CellKind::Ship(_), true) => 'X',
                    (CellKind::Ship(_), false) => 'S',
                    (_, true) => 'o',
                    (CellKind::Neighbor, false) => ',',
                    (CellKind::Water, false) => '.',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
