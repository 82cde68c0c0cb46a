//! Error taxonomy shared by the board model, the validator and the client.

use alloc::string::String;

use crate::coord::Coord;
use crate::session::Phase;

/// Everything that can go wrong between a user intent and the game service.
///
/// The first six variants are local validation failures, detected before any
/// network call. `Conflict` and `Transport` come back from the service and
/// are surfaced as-is; the core never retries them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Malformed coordinate label at the external boundary.
    InvalidCoordinate,
    /// Ship placement extends past the edge of the board.
    OutOfBounds,
    /// No ships of this size left in the quota.
    QuotaExceeded { size: u8 },
    /// Placement shares a cell with an already placed ship.
    Collision { at: Coord },
    /// Fleet does not match the required quota yet.
    IncompleteFleet,
    /// Action attempted outside the phase that allows it.
    IllegalAction { phase: Phase },
    /// Service rejected an action whose preconditions changed server-side.
    Conflict(String),
    /// Network or service failure, opaque to the core.
    Transport(String),
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidCoordinate => write!(f, "invalid coordinate label"),
            GameError::OutOfBounds => write!(f, "ship extends past the edge of the board"),
            GameError::QuotaExceeded { size } => {
                write!(f, "no ships of size {} left to place", size)
            }
            GameError::Collision { at } => write!(f, "cell {} is already occupied", at),
            GameError::IncompleteFleet => {
                write!(f, "fleet does not meet the required ship quota")
            }
            GameError::IllegalAction { phase } => {
                write!(f, "action is not allowed in the {:?} phase", phase)
            }
            GameError::Conflict(msg) => write!(f, "rejected by the game service: {}", msg),
            GameError::Transport(msg) => write!(f, "game service unreachable: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
