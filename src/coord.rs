//! Board coordinates and their human-readable labels.

use core::fmt;

use crate::common::GameError;
use crate::config::BOARD_SIZE;

/// A single cell on the 10x10 board.
///
/// Rows are labelled `A..J` and columns `1..10` at the boundary; internally
/// both are zero-based indices. Equality is structural.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Build a coordinate from zero-based indices. No bounds check; callers
    /// that accept external input go through [`Coord::parse`] or
    /// [`Coord::in_bounds`].
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    /// Both components on the board.
    pub const fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Row letter used at the external boundary (`A..J`).
    pub const fn row_label(self) -> char {
        (b'A' + self.row) as char
    }

    /// One-based column used at the external boundary (`1..10`).
    pub const fn col_label(self) -> u8 {
        self.col + 1
    }

    /// Decode a human label such as `"B7"`. The inverse of `Display`.
    pub fn parse(label: &str) -> Result<Self, GameError> {
        let bytes = label.as_bytes();
        if bytes.len() < 2 || bytes.len() > 3 {
            return Err(GameError::InvalidCoordinate);
        }
        let row = match bytes[0] {
            b'A'..=b'J' => bytes[0] - b'A',
            _ => return Err(GameError::InvalidCoordinate),
        };
        // zero-padded columns ("A01") are not canonical labels
        if bytes[1] == b'0' {
            return Err(GameError::InvalidCoordinate);
        }
        let col: u8 = label[1..]
            .parse()
            .map_err(|_| GameError::InvalidCoordinate)?;
        if col < 1 || col > BOARD_SIZE {
            return Err(GameError::InvalidCoordinate);
        }
        Ok(Self::new(row, col - 1))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_label(), self.col_label())
    }
}
