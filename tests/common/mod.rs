#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rand::rngs::SmallRng;

use broadside::service::in_memory::InMemoryService;
use broadside::{
    AuthToken, Coord, Fleet, GameClient, GameError, GameService, Snapshot, BOARD_SIZE,
};

/// Wrapper that counts how many calls actually reach the service, so tests
/// can prove local validation failures never touch the network.
pub struct CountingService {
    inner: Arc<InMemoryService>,
    calls: AtomicUsize,
    details_calls: AtomicUsize,
}

impl CountingService {
    pub fn new(inner: Arc<InMemoryService>) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
            details_calls: AtomicUsize::new(0),
        }
    }

    pub fn total(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn details(&self) -> usize {
        self.details_calls.load(Ordering::SeqCst)
    }

    fn count(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl GameService for CountingService {
    async fn create_game(&self, auth: &AuthToken) -> Result<Snapshot, GameError> {
        self.count();
        self.inner.create_game(auth).await
    }

    async fn join_game(&self, auth: &AuthToken, game_id: &str) -> Result<Snapshot, GameError> {
        self.count();
        self.inner.join_game(auth, game_id).await
    }

    async fn game_details(&self, auth: &AuthToken, game_id: &str) -> Result<Snapshot, GameError> {
        self.count();
        self.details_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.game_details(auth, game_id).await
    }

    async fn submit_fleet(
        &self,
        auth: &AuthToken,
        game_id: &str,
        fleet: &Fleet,
    ) -> Result<(), GameError> {
        self.count();
        self.inner.submit_fleet(auth, game_id, fleet).await
    }

    async fn strike(
        &self,
        auth: &AuthToken,
        game_id: &str,
        target: Coord,
    ) -> Result<(), GameError> {
        self.count();
        self.inner.strike(auth, game_id, target).await
    }

    async fn list_games(
        &self,
        auth: &AuthToken,
        page: u32,
        limit: u32,
    ) -> Result<Vec<Snapshot>, GameError> {
        self.count();
        self.inner.list_games(auth, page, limit).await
    }
}

/// Drive a client through placing a full random fleet.
pub fn place_fleet(client: &mut GameClient, rng: &mut SmallRng) {
    let fleet = Fleet::random(rng);
    for ship in fleet.ships() {
        client
            .place_ship(ship.origin(), ship.size(), ship.orientation())
            .unwrap();
    }
}

/// Every cell of the board in row-major order.
pub fn all_cells() -> Vec<Coord> {
    let mut cells = Vec::with_capacity((BOARD_SIZE as usize) * (BOARD_SIZE as usize));
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            cells.push(Coord::new(row, col));
        }
    }
    cells
}
