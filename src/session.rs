//! Server session snapshots and the derived phase machine.

use alloc::string::String;

/// One player as reported by the service.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerInfo {
    pub id: String,
    pub email: String,
}

/// Lifecycle status of a session, as reported by the service.
///
/// Unknown wire statuses are carried through as `Other` so reconciliation
/// never fails on vocabulary the server adds later.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionStatus {
    Created,
    Active,
    Finished,
    Other(String),
}

impl SessionStatus {
    pub fn from_wire(s: &str) -> Self {
        match s {
            "CREATED" => SessionStatus::Created,
            "ACTIVE" => SessionStatus::Active,
            "FINISHED" => SessionStatus::Finished,
            other => SessionStatus::Other(String::from(other)),
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, SessionStatus::Finished)
    }
}

/// The server's view of a game session as last fetched.
///
/// The service is the sole source of truth for every field here; the client
/// only ever replaces a snapshot wholesale with a fresher one.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub id: String,
    pub status: SessionStatus,
    pub player1: PlayerInfo,
    pub player2: Option<PlayerInfo>,
    /// Whose turn it is once both players are present; meaningless before.
    pub player_to_move: Option<String>,
}

impl Snapshot {
    /// Session still has a free second slot.
    pub fn is_open(&self) -> bool {
        self.player2.is_none()
    }
}

/// What the user may currently do. Derived, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Setup,
    AwaitingOpponent,
    OwnTurn,
    OpponentTurn,
    Finished,
}

/// User intents gated by the current phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    ToggleCell,
    PlaceShip,
    SubmitFleet,
    Strike,
}

/// Recompute the phase from a snapshot. Pure and idempotent: polling with
/// an unchanged snapshot yields the same phase, there are no hidden
/// counters or stored transitions.
pub fn derive_phase(snapshot: &Snapshot, local_player: &str, fleet_submitted: bool) -> Phase {
    if !fleet_submitted {
        return Phase::Setup;
    }
    if snapshot.player2.is_none() {
        // player_to_move is irrelevant until both players are present
        return Phase::AwaitingOpponent;
    }
    if snapshot.status.is_finished() {
        return Phase::Finished;
    }
    match snapshot.player_to_move.as_deref() {
        Some(id) if id == local_player => Phase::OwnTurn,
        _ => Phase::OpponentTurn,
    }
}

impl Phase {
    /// The actions legal in this phase, for the UI to offer.
    pub fn legal_actions(self) -> &'static [Action] {
        match self {
            Phase::Setup => &[Action::ToggleCell, Action::PlaceShip, Action::SubmitFleet],
            Phase::OwnTurn => &[Action::Strike],
            Phase::AwaitingOpponent | Phase::OpponentTurn | Phase::Finished => &[],
        }
    }

    pub fn allows(self, action: Action) -> bool {
        self.legal_actions().contains(&action)
    }
}
