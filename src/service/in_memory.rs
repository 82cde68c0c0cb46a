//! In-process game service with just enough server rules to host demo
//! games and integration tests: join conflicts, activation once both
//! fleets are in, turn alternation, and finish detection.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::auth::AuthToken;
use crate::common::GameError;
use crate::config::TOTAL_FLEET_CELLS;
use crate::coord::Coord;
use crate::fleet::Fleet;
use crate::service::GameService;
use crate::session::{PlayerInfo, SessionStatus, Snapshot};

struct Side {
    info: PlayerInfo,
    fleet: Option<Fleet>,
    strikes_taken: HashSet<Coord>,
}

impl Side {
    fn new(info: PlayerInfo) -> Self {
        Self {
            info,
            fleet: None,
            strikes_taken: HashSet::new(),
        }
    }

    fn all_sunk(&self) -> bool {
        match &self.fleet {
            Some(fleet) => {
                let hit = fleet
                    .ships()
                    .iter()
                    .flat_map(|s| s.cells())
                    .filter(|c| self.strikes_taken.contains(c))
                    .count();
                hit == TOTAL_FLEET_CELLS
            }
            None => false,
        }
    }
}

struct ServerGame {
    id: String,
    status: SessionStatus,
    player1: Side,
    player2: Option<Side>,
    player_to_move: Option<String>,
}

impl ServerGame {
    fn snapshot(&self) -> Snapshot {
        Snapshot {
            id: self.id.clone(),
            status: self.status.clone(),
            player1: self.player1.info.clone(),
            player2: self.player2.as_ref().map(|s| s.info.clone()),
            player_to_move: self.player_to_move.clone(),
        }
    }

    /// The game goes live once both players are in and both fleets are
    /// submitted; player 1 moves first.
    fn maybe_activate(&mut self) {
        let ready = self.status == SessionStatus::Created
            && self.player1.fleet.is_some()
            && self.player2.as_ref().is_some_and(|s| s.fleet.is_some());
        if ready {
            self.status = SessionStatus::Active;
            self.player_to_move = Some(self.player1.info.id.clone());
        }
    }
}

#[derive(Default)]
pub struct InMemoryService {
    accounts: Mutex<HashMap<String, PlayerInfo>>,
    games: Mutex<HashMap<String, ServerGame>>,
    next_id: AtomicU64,
}

impl InMemoryService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account and hand out its bearer token.
    pub fn register(&self, email: &str) -> (AuthToken, PlayerInfo) {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        let info = PlayerInfo {
            id: format!("player-{}", n),
            email: email.to_string(),
        };
        let token = AuthToken::new(format!("token-{}", n));
        self.accounts
            .lock()
            .unwrap()
            .insert(token.as_str().to_string(), info.clone());
        (token, info)
    }

    fn identify(&self, auth: &AuthToken) -> Result<PlayerInfo, GameError> {
        self.accounts
            .lock()
            .unwrap()
            .get(auth.as_str())
            .cloned()
            .ok_or_else(|| GameError::Transport("unknown bearer token".into()))
    }
}

#[async_trait::async_trait]
impl GameService for InMemoryService {
    async fn create_game(&self, auth: &AuthToken) -> Result<Snapshot, GameError> {
        let caller = self.identify(auth)?;
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        let game = ServerGame {
            id: format!("game-{}", n),
            status: SessionStatus::Created,
            player1: Side::new(caller),
            player2: None,
            player_to_move: None,
        };
        let snapshot = game.snapshot();
        self.games.lock().unwrap().insert(game.id.clone(), game);
        Ok(snapshot)
    }

    async fn join_game(&self, auth: &AuthToken, game_id: &str) -> Result<Snapshot, GameError> {
        let caller = self.identify(auth)?;
        let mut games = self.games.lock().unwrap();
        let game = games
            .get_mut(game_id)
            .ok_or_else(|| GameError::Conflict("game not found".into()))?;
        if game.player1.info.id == caller.id {
            return Err(GameError::Conflict("cannot join your own game".into()));
        }
        if game.player2.is_some() {
            return Err(GameError::Conflict("player slot already taken".into()));
        }
        game.player2 = Some(Side::new(caller));
        game.maybe_activate();
        Ok(game.snapshot())
    }

    async fn game_details(&self, auth: &AuthToken, game_id: &str) -> Result<Snapshot, GameError> {
        self.identify(auth)?;
        let games = self.games.lock().unwrap();
        games
            .get(game_id)
            .map(ServerGame::snapshot)
            .ok_or_else(|| GameError::Conflict("game not found".into()))
    }

    async fn submit_fleet(
        &self,
        auth: &AuthToken,
        game_id: &str,
        fleet: &Fleet,
    ) -> Result<(), GameError> {
        let caller = self.identify(auth)?;
        if !fleet.is_complete() {
            return Err(GameError::Conflict("fleet does not satisfy the quota".into()));
        }
        let mut games = self.games.lock().unwrap();
        let game = games
            .get_mut(game_id)
            .ok_or_else(|| GameError::Conflict("game not found".into()))?;
        if game.status.is_finished() {
            return Err(GameError::Conflict("game already finished".into()));
        }
        let side = if game.player1.info.id == caller.id {
            &mut game.player1
        } else if let Some(p2) = game.player2.as_mut().filter(|s| s.info.id == caller.id) {
            p2
        } else {
            return Err(GameError::Conflict("not a participant of this game".into()));
        };
        if side.fleet.is_some() {
            return Err(GameError::Conflict("fleet already submitted".into()));
        }
        side.fleet = Some(fleet.clone());
        game.maybe_activate();
        Ok(())
    }

    async fn strike(
        &self,
        auth: &AuthToken,
        game_id: &str,
        target: Coord,
    ) -> Result<(), GameError> {
        let caller = self.identify(auth)?;
        if !target.in_bounds() {
            return Err(GameError::Conflict("strike is off the board".into()));
        }
        let mut games = self.games.lock().unwrap();
        let game = games
            .get_mut(game_id)
            .ok_or_else(|| GameError::Conflict("game not found".into()))?;
        if game.status != SessionStatus::Active {
            return Err(GameError::Conflict("game is not active".into()));
        }
        match game.player_to_move.as_deref() {
            Some(id) if id == caller.id => {}
            _ => return Err(GameError::Conflict("not your turn".into())),
        }
        let opponent = if game.player1.info.id == caller.id {
            game.player2
                .as_mut()
                .ok_or_else(|| GameError::Conflict("no opponent yet".into()))?
        } else {
            &mut game.player1
        };
        if !opponent.strikes_taken.insert(target) {
            return Err(GameError::Conflict("cell already struck".into()));
        }
        let next_to_move = opponent.info.id.clone();
        if opponent.all_sunk() {
            game.status = SessionStatus::Finished;
            game.player_to_move = None;
        } else {
            game.player_to_move = Some(next_to_move);
        }
        Ok(())
    }

    async fn list_games(
        &self,
        auth: &AuthToken,
        page: u32,
        limit: u32,
    ) -> Result<Vec<Snapshot>, GameError> {
        self.identify(auth)?;
        let games = self.games.lock().unwrap();
        let mut snapshots: Vec<Snapshot> = games.values().map(ServerGame::snapshot).collect();
        snapshots.sort_by(|a, b| a.id.cmp(&b.id));
        let page = page.max(1);
        Ok(snapshots
            .into_iter()
            .skip(((page - 1) * limit) as usize)
            .take(limit as usize)
            .collect())
    }
}
