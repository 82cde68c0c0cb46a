#![cfg(feature = "std")]

//! The game client: turns user intents into validated commands against the
//! service and reconciles polled snapshots into local state.

use std::sync::Arc;

use log::{debug, info};

use crate::auth::AuthToken;
use crate::common::GameError;
use crate::coord::Coord;
use crate::fleet::Fleet;
use crate::selection::Selection;
use crate::service::GameService;
use crate::session::{derive_phase, Action, Phase, Snapshot};
use crate::ship::Orientation;
use crate::view::{board_cells, CellMark};

/// Client-held state for one game session.
///
/// The client exclusively owns the unsubmitted fleet and the selection set;
/// the service owns status, players, turn and strike outcomes. A strike's
/// result is never inferred locally, it shows up in the next snapshot.
///
/// Every operation validates before touching the network and leaves local
/// state unchanged on failure. Commands borrow the client exclusively for
/// their whole await, so a second submit or strike cannot start while one
/// is outstanding; nothing is retried or duplicated automatically.
pub struct GameClient {
    service: Arc<dyn GameService>,
    auth: AuthToken,
    player_id: String,
    snapshot: Snapshot,
    fleet: Fleet,
    selection: Selection,
    submitted: bool,
}

impl core::fmt::Debug for GameClient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameClient")
            .field("player_id", &self.player_id)
            .field("snapshot", &self.snapshot)
            .field("fleet", &self.fleet)
            .field("selection", &self.selection)
            .field("submitted", &self.submitted)
            .finish_non_exhaustive()
    }
}

impl GameClient {
    /// Wrap a snapshot obtained from the gating initial fetch.
    pub fn new(
        service: Arc<dyn GameService>,
        auth: AuthToken,
        player_id: impl Into<String>,
        snapshot: Snapshot,
    ) -> Self {
        Self {
            service,
            auth,
            player_id: player_id.into(),
            snapshot,
            fleet: Fleet::new(),
            selection: Selection::new(),
            submitted: false,
        }
    }

    /// Create a fresh session; the caller becomes player 1.
    pub async fn create(
        service: Arc<dyn GameService>,
        auth: AuthToken,
        player_id: impl Into<String>,
    ) -> Result<Self, GameError> {
        let snapshot = service.create_game(&auth).await?;
        info!("created game {}", snapshot.id);
        Ok(Self::new(service, auth, player_id, snapshot))
    }

    /// Join an open session as player 2.
    pub async fn join(
        service: Arc<dyn GameService>,
        auth: AuthToken,
        player_id: impl Into<String>,
        game_id: &str,
    ) -> Result<Self, GameError> {
        let snapshot = service.join_game(&auth, game_id).await?;
        info!("joined game {}", snapshot.id);
        Ok(Self::new(service, auth, player_id, snapshot))
    }

    /// Re-enter an existing session, fetching its snapshot first.
    pub async fn open(
        service: Arc<dyn GameService>,
        auth: AuthToken,
        player_id: impl Into<String>,
        game_id: &str,
    ) -> Result<Self, GameError> {
        let snapshot = service.game_details(&auth, game_id).await?;
        Ok(Self::new(service, auth, player_id, snapshot))
    }

    pub fn game_id(&self) -> &str {
        &self.snapshot.id
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Phase derived from the latest snapshot; recomputed on every call,
    /// never stored.
    pub fn phase(&self) -> Phase {
        derive_phase(&self.snapshot, &self.player_id, self.submitted)
    }

    /// Annotated 100-cell list for rendering.
    pub fn board_cells(&self) -> Vec<(Coord, CellMark)> {
        board_cells(&self.fleet, &self.selection)
    }

    /// Flip cell selection during setup. Returns whether the cell is
    /// selected afterwards.
    pub fn toggle_cell(&mut self, cell: Coord) -> Result<bool, GameError> {
        let phase = self.phase();
        if !phase.allows(Action::ToggleCell) {
            return Err(GameError::IllegalAction { phase });
        }
        if !cell.in_bounds() {
            return Err(GameError::InvalidCoordinate);
        }
        Ok(self.selection.toggle(cell))
    }

    /// Validate and record a placement intent. On success the selection is
    /// cleared; on failure fleet and selection are untouched.
    pub fn place_ship(
        &mut self,
        origin: Coord,
        size: u8,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        let phase = self.phase();
        if !phase.allows(Action::PlaceShip) {
            return Err(GameError::IllegalAction { phase });
        }
        let next = self.fleet.try_place(origin, size, orientation)?;
        self.fleet = next;
        self.selection.clear();
        debug!(
            "placed ship, {} cells on the board",
            self.fleet.cell_count()
        );
        Ok(())
    }

    /// Submit the fleet once it satisfies the quota. After an accepted
    /// submission the fleet is frozen; further placements are illegal.
    pub async fn submit_fleet(&mut self) -> Result<(), GameError> {
        let phase = self.phase();
        if !phase.allows(Action::SubmitFleet) {
            return Err(GameError::IllegalAction { phase });
        }
        if !self.fleet.is_complete() {
            return Err(GameError::IncompleteFleet);
        }
        self.service
            .submit_fleet(&self.auth, &self.snapshot.id, &self.fleet)
            .await?;
        self.submitted = true;
        info!("fleet submitted for game {}", self.snapshot.id);
        Ok(())
    }

    /// Strike a cell of the opponent board. Only legal in `OwnTurn`; an
    /// attempt in any other phase fails before any network call.
    pub async fn strike(&mut self, target: Coord) -> Result<(), GameError> {
        let phase = self.phase();
        if !phase.allows(Action::Strike) {
            return Err(GameError::IllegalAction { phase });
        }
        if !target.in_bounds() {
            return Err(GameError::InvalidCoordinate);
        }
        self.service
            .strike(&self.auth, &self.snapshot.id, target)
            .await?;
        debug!("strike at {} accepted", target);
        Ok(())
    }

    /// Fetch the snapshot and reconcile it. Used for the gating initial
    /// fetch and by the synchronization loop for every later poll.
    pub async fn refresh(&mut self) -> Result<(), GameError> {
        let snapshot = self
            .service
            .game_details(&self.auth, &self.snapshot.id)
            .await?;
        self.apply_snapshot(snapshot);
        Ok(())
    }

    /// Replace the server-owned fields with a completed poll's view.
    /// Last write wins by arrival order; polls are serialized upstream.
    pub fn apply_snapshot(&mut self, snapshot: Snapshot) {
        if snapshot != self.snapshot {
            debug!("snapshot changed, phase is now {:?}", {
                let submitted = self.submitted;
                derive_phase(&snapshot, &self.player_id, submitted)
            });
        }
        self.snapshot = snapshot;
    }
}
