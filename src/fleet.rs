//! Fleet accumulation and the placement validator.

use alloc::vec::Vec;

use rand::Rng;

use crate::common::GameError;
use crate::config::{BOARD_SIZE, FLEET_QUOTA};
use crate::coord::Coord;
use crate::ship::{Orientation, Ship};

/// One player's placed ships plus the outstanding quota per ship size.
///
/// The fleet is grown through [`Fleet::try_place`], which returns a new
/// fleet and leaves the receiver untouched, so a rejected placement needs
/// no cleanup on the caller's side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
    remaining: [u8; FLEET_QUOTA.len()],
}

impl Fleet {
    /// Empty fleet with the full quota outstanding.
    pub fn new() -> Self {
        Self {
            ships: Vec::new(),
            remaining: core::array::from_fn(|i| FLEET_QUOTA[i].1),
        }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Ships of `size` still to be placed; zero for sizes outside the quota.
    pub fn remaining(&self, size: u8) -> u8 {
        Self::quota_index(size)
            .map(|i| self.remaining[i])
            .unwrap_or(0)
    }

    fn quota_index(size: u8) -> Option<usize> {
        FLEET_QUOTA.iter().position(|(s, _)| *s == size)
    }

    /// Validate a placement intent and return the grown fleet.
    ///
    /// Checks run in order: the span must stay on the board, the quota for
    /// the size must not be exhausted, and no cell may already be occupied.
    pub fn try_place(
        &self,
        origin: Coord,
        size: u8,
        orientation: Orientation,
    ) -> Result<Fleet, GameError> {
        let ship = Ship::new(origin, size, orientation)?;
        let idx = Self::quota_index(size).ok_or(GameError::QuotaExceeded { size })?;
        if self.remaining[idx] == 0 {
            return Err(GameError::QuotaExceeded { size });
        }
        for cell in ship.cells() {
            if self.occupies(cell) {
                return Err(GameError::Collision { at: cell });
            }
        }
        let mut next = self.clone();
        next.ships.push(ship);
        next.remaining[idx] -= 1;
        Ok(next)
    }

    /// True once every quota counter reached zero.
    pub fn is_complete(&self) -> bool {
        self.remaining.iter().all(|&n| n == 0)
    }

    pub fn occupies(&self, cell: Coord) -> bool {
        self.ships.iter().any(|s| s.contains(cell))
    }

    /// Total cells covered by the placed ships.
    pub fn cell_count(&self) -> usize {
        self.ships.iter().map(|s| s.size() as usize).sum()
    }

    /// Generate a complete random fleet. Retries each ship a bounded number
    /// of times and restarts from scratch on a dead end, so the quota always
    /// ends up satisfied.
    pub fn random<R: Rng>(rng: &mut R) -> Fleet {
        'restart: loop {
            let mut fleet = Fleet::new();
            for &(size, count) in FLEET_QUOTA.iter() {
                for _ in 0..count {
                    let mut placed = false;
                    for _ in 0..128 {
                        let orientation = if rng.random() {
                            Orientation::Horizontal
                        } else {
                            Orientation::Vertical
                        };
                        let max_row = match orientation {
                            Orientation::Vertical => BOARD_SIZE - size,
                            Orientation::Horizontal => BOARD_SIZE - 1,
                        };
                        let max_col = match orientation {
                            Orientation::Horizontal => BOARD_SIZE - size,
                            Orientation::Vertical => BOARD_SIZE - 1,
                        };
                        let origin =
                            Coord::new(rng.random_range(0..=max_row), rng.random_range(0..=max_col));
                        if let Ok(next) = fleet.try_place(origin, size, orientation) {
                            fleet = next;
                            placed = true;
                            break;
                        }
                    }
                    if !placed {
                        continue 'restart;
                    }
                }
            }
            return fleet;
        }
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}
