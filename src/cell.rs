//! Grid cells: what lies at a position and whether the player has seen it.

use alloc::vec::Vec;

use crate::ship::ShipId;

/// What occupies a grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Water,
    Ship(ShipId),
    /// Water bordering at least one ship.
    Neighbor,
}

/// One position on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    kind: CellKind,
    revealed: bool,
    neighbor_ids: Vec<ShipId>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            kind: CellKind::Water,
            revealed: false,
            neighbor_ids: Vec::new(),
        }
    }
}

impl Cell {
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_water(&self) -> bool {
        self.kind == CellKind::Water
    }

    pub fn ship_id(&self) -> Option<ShipId> {
        match self.kind {
            CellKind::Ship(id) => Some(id),
            _ => None,
        }
    }

    /// Ships this cell borders, in the order they were placed.
    pub fn neighbor_ids(&self) -> &[ShipId] {
        &self.neighbor_ids
    }

    pub fn borders(&self, id: ShipId) -> bool {
        self.kind == CellKind::Neighbor && self.neighbor_ids.contains(&id)
    }

    pub(crate) fn set_ship(&mut self, id: ShipId) {
        self.kind = CellKind::Ship(id);
    }

    /// Promote to `Neighbor` of `id`. Ship cells are left untouched.
    pub(crate) fn mark_neighbor(&mut self, id: ShipId) {
        if matches!(self.kind, CellKind::Ship(_)) {
            return;
        }
        self.kind = CellKind::Neighbor;
        if !self.neighbor_ids.contains(&id) {
            self.neighbor_ids.push(id);
        }
    }

    /// Returns `true` if the cell was hidden before.
    pub(crate) fn reveal(&mut self) -> bool {
        !core::mem::replace(&mut self.revealed, true)
    }
}
