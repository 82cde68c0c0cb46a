#![cfg(feature = "std")]

//! The game service seam: the commands the client may issue, abstracted
//! from any concrete transport, plus the wire DTO shapes shared by every
//! binding.

use serde::{Deserialize, Serialize};

use crate::auth::AuthToken;
use crate::common::GameError;
use crate::coord::Coord;
use crate::fleet::Fleet;
use crate::session::Snapshot;
use crate::ship::{Orientation, Ship};

pub mod in_memory;

/// Commands against the remote game service. Implementations map their
/// failures onto [`GameError::Conflict`] (preconditions changed server-side)
/// or [`GameError::Transport`] (opaque network/service failure); neither is
/// retried by the core.
#[async_trait::async_trait]
pub trait GameService: Send + Sync {
    /// Create a session; the caller becomes player 1.
    async fn create_game(&self, auth: &AuthToken) -> Result<Snapshot, GameError>;

    /// Take the free player 2 slot of an open session.
    async fn join_game(&self, auth: &AuthToken, game_id: &str) -> Result<Snapshot, GameError>;

    /// Fetch the current snapshot; this is the poll target.
    async fn game_details(&self, auth: &AuthToken, game_id: &str) -> Result<Snapshot, GameError>;

    /// Submit a complete fleet. The client gates on completeness first.
    async fn submit_fleet(
        &self,
        auth: &AuthToken,
        game_id: &str,
        fleet: &Fleet,
    ) -> Result<(), GameError>;

    /// Strike a cell. The outcome is only learned from the next snapshot.
    async fn strike(&self, auth: &AuthToken, game_id: &str, target: Coord)
        -> Result<(), GameError>;

    /// Page through sessions known to the service.
    async fn list_games(
        &self,
        auth: &AuthToken,
        page: u32,
        limit: u32,
    ) -> Result<Vec<Snapshot>, GameError>;
}

/// Sessions from one `list_games` page that still have a free slot.
/// The service reports all sessions; filtering is client-side.
pub async fn open_games(
    service: &dyn GameService,
    auth: &AuthToken,
    page: u32,
    limit: u32,
) -> Result<Vec<Snapshot>, GameError> {
    let games = service.list_games(auth, page, limit).await?;
    Ok(games.into_iter().filter(Snapshot::is_open).collect())
}

/// One cell on the wire: row letter and one-based column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellDto {
    pub x: String,
    pub y: u8,
}

impl From<Coord> for CellDto {
    fn from(coord: Coord) -> Self {
        Self {
            x: coord.row_label().to_string(),
            y: coord.col_label(),
        }
    }
}

impl CellDto {
    pub fn to_coord(&self) -> Result<Coord, GameError> {
        let mut label = self.x.clone();
        label.push_str(&self.y.to_string());
        Coord::parse(&label)
    }
}

/// One placed ship on the wire: origin cell plus size and direction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipDto {
    pub x: String,
    pub y: u8,
    pub size: u8,
    pub direction: String,
}

impl From<&Ship> for ShipDto {
    fn from(ship: &Ship) -> Self {
        let origin = CellDto::from(ship.origin());
        Self {
            x: origin.x,
            y: origin.y,
            size: ship.size(),
            direction: match ship.orientation() {
                Orientation::Horizontal => "HORIZONTAL".to_string(),
                Orientation::Vertical => "VERTICAL".to_string(),
            },
        }
    }
}

/// Fleet submission payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetConfigDto {
    pub ships: Vec<ShipDto>,
}

impl From<&Fleet> for FleetConfigDto {
    fn from(fleet: &Fleet) -> Self {
        Self {
            ships: fleet.ships().iter().map(ShipDto::from).collect(),
        }
    }
}
