//! Ship placement intents and the cells they occupy.

use crate::common::GameError;
use crate::config::BOARD_SIZE;
use crate::coord::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship pinned to the board: `size` consecutive cells starting at
/// `origin`, extending along columns (horizontal) or rows (vertical).
///
/// Construction rejects spans that leave the board; a `Ship` value is
/// always fully in bounds. Wraparound does not exist, overflowing
/// placements fail rather than clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    origin: Coord,
    size: u8,
    orientation: Orientation,
}

impl Ship {
    pub fn new(origin: Coord, size: u8, orientation: Orientation) -> Result<Self, GameError> {
        if size == 0 || !origin.in_bounds() {
            return Err(GameError::OutOfBounds);
        }
        let along = match orientation {
            Orientation::Horizontal => origin.col(),
            Orientation::Vertical => origin.row(),
        };
        if along as u16 + size as u16 > BOARD_SIZE as u16 {
            return Err(GameError::OutOfBounds);
        }
        Ok(Self {
            origin,
            size,
            orientation,
        })
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The occupied cells, in order from the origin. Exactly `size` entries.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let Ship {
            origin,
            size,
            orientation,
        } = *self;
        (0..size).map(move |i| match orientation {
            Orientation::Horizontal => Coord::new(origin.row(), origin.col() + i),
            Orientation::Vertical => Coord::new(origin.row() + i, origin.col()),
        })
    }

    pub fn contains(&self, cell: Coord) -> bool {
        self.cells().any(|c| c == cell)
    }
}
