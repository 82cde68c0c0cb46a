//! Ephemeral multi-select of board cells during fleet setup.

use alloc::vec::Vec;

use crate::coord::Coord;

/// Cells the user has tapped but not yet grouped into a ship.
///
/// Toggling is idempotent: selecting an already selected cell deselects it.
/// This is UI working state, not part of any fleet invariant, and is cleared
/// on every successful placement.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    cells: Vec<Coord>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `cell`; returns whether it is selected afterwards.
    pub fn toggle(&mut self, cell: Coord) -> bool {
        if let Some(pos) = self.cells.iter().position(|&c| c == cell) {
            self.cells.remove(pos);
            false
        } else {
            self.cells.push(cell);
            true
        }
    }

    pub fn contains(&self, cell: Coord) -> bool {
        self.cells.contains(&cell)
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Selected cells in tap order.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }
}
