mod common;

use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use broadside::service::in_memory::InMemoryService;
use broadside::{
    open_games, AuthToken, CellMark, Coord, GameClient, GameError, GameService, MemoryTokenStore,
    Orientation, Phase, TokenStore,
};
use common::{all_cells, place_fleet, CountingService};

#[tokio::test]
async fn create_join_and_play_to_finish() {
    let service = Arc::new(InMemoryService::new());
    let (token1, player1) = service.register("one@example.com");
    let (token2, player2) = service.register("two@example.com");
    let svc: Arc<dyn GameService> = service.clone();
    let mut rng = SmallRng::seed_from_u64(7);

    let mut host = GameClient::create(svc.clone(), token1, player1.id.clone())
        .await
        .unwrap();
    assert_eq!(host.phase(), Phase::Setup);
    place_fleet(&mut host, &mut rng);
    host.submit_fleet().await.unwrap();
    assert_eq!(host.phase(), Phase::AwaitingOpponent);

    let open = open_games(svc.as_ref(), &token2, 1, 10).await.unwrap();
    assert_eq!(open.len(), 1);
    let mut guest = GameClient::join(svc.clone(), token2, player2.id.clone(), &open[0].id)
        .await
        .unwrap();
    place_fleet(&mut guest, &mut rng);
    guest.submit_fleet().await.unwrap();

    host.refresh().await.unwrap();
    guest.refresh().await.unwrap();
    // player 1 moves first once both fleets are in
    assert_eq!(host.phase(), Phase::OwnTurn);
    assert_eq!(guest.phase(), Phase::OpponentTurn);

    // sweep the board from both sides until the server reports a finish
    let cells = all_cells();
    let mut host_next = 0usize;
    let mut guest_next = 0usize;
    for _ in 0..400 {
        host.refresh().await.unwrap();
        guest.refresh().await.unwrap();
        if host.phase() == Phase::Finished {
            break;
        }
        if host.phase() == Phase::OwnTurn {
            host.strike(cells[host_next]).await.unwrap();
            host_next += 1;
        } else if guest.phase() == Phase::OwnTurn {
            guest.strike(cells[guest_next]).await.unwrap();
            guest_next += 1;
        }
    }

    host.refresh().await.unwrap();
    guest.refresh().await.unwrap();
    assert_eq!(host.phase(), Phase::Finished);
    assert_eq!(guest.phase(), Phase::Finished);
}

#[tokio::test]
async fn incomplete_fleet_never_reaches_the_service() {
    let inner = Arc::new(InMemoryService::new());
    let (token, player) = inner.register("one@example.com");
    let counting = Arc::new(CountingService::new(inner));
    let svc: Arc<dyn GameService> = counting.clone();

    let mut host = GameClient::create(svc, token, player.id.clone()).await.unwrap();
    // everything placed except one size-4 ship
    let layout: [(&str, u8); 9] = [
        ("A1", 6),
        ("B1", 4),
        ("D1", 3),
        ("E1", 3),
        ("F1", 3),
        ("G1", 2),
        ("H1", 2),
        ("I1", 2),
        ("J1", 2),
    ];
    for (label, size) in layout {
        host.place_ship(Coord::parse(label).unwrap(), size, Orientation::Horizontal)
            .unwrap();
    }
    let before = counting.total();

    let err = host.submit_fleet().await.unwrap_err();
    assert_eq!(err, GameError::IncompleteFleet);
    assert_eq!(counting.total(), before, "rejected submit must not hit the service");
}

#[tokio::test]
async fn strike_outside_own_turn_never_reaches_the_service() {
    let inner = Arc::new(InMemoryService::new());
    let (token, player) = inner.register("one@example.com");
    let counting = Arc::new(CountingService::new(inner));
    let svc: Arc<dyn GameService> = counting.clone();
    let mut rng = SmallRng::seed_from_u64(3);

    let mut host = GameClient::create(svc, token, player.id.clone()).await.unwrap();
    let before = counting.total();
    let err = host.strike(Coord::parse("E5").unwrap()).await.unwrap_err();
    assert_eq!(err, GameError::IllegalAction { phase: Phase::Setup });
    assert_eq!(counting.total(), before);

    place_fleet(&mut host, &mut rng);
    host.submit_fleet().await.unwrap();
    let before = counting.total();
    let err = host.strike(Coord::parse("E5").unwrap()).await.unwrap_err();
    assert_eq!(
        err,
        GameError::IllegalAction {
            phase: Phase::AwaitingOpponent
        }
    );
    assert_eq!(counting.total(), before);
}

#[test]
fn token_store_round_trips_the_session_token() {
    let store = MemoryTokenStore::new();
    let store: &dyn TokenStore = &store;
    assert!(store.token().is_none());

    store.store(AuthToken::new("token-1"));
    assert_eq!(store.token(), Some(AuthToken::new("token-1")));

    // logging in again replaces the session
    store.store(AuthToken::new("token-2"));
    assert_eq!(store.token(), Some(AuthToken::new("token-2")));

    store.clear();
    assert!(store.token().is_none());
}

#[tokio::test]
async fn joining_a_taken_or_own_game_conflicts() {
    let service = Arc::new(InMemoryService::new());
    let (token1, player1) = service.register("one@example.com");
    let (token2, player2) = service.register("two@example.com");
    let (token3, player3) = service.register("three@example.com");
    let svc: Arc<dyn GameService> = service.clone();

    let host = GameClient::create(svc.clone(), token1.clone(), player1.id.clone())
        .await
        .unwrap();
    let game_id = host.game_id().to_string();

    // the creator cannot take the second slot of their own game
    let err = GameClient::join(svc.clone(), token1, player1.id.clone(), &game_id)
        .await
        .unwrap_err();
    assert!(matches!(err, GameError::Conflict(_)));

    GameClient::join(svc.clone(), token2, player2.id.clone(), &game_id)
        .await
        .unwrap();

    // the slot is gone by the time the third player tries
    let err = GameClient::join(svc.clone(), token3.clone(), player3.id.clone(), &game_id)
        .await
        .unwrap_err();
    assert!(matches!(err, GameError::Conflict(_)));

    // and the session no longer shows up as open
    let open = open_games(svc.as_ref(), &token3, 1, 10).await.unwrap();
    assert!(open.is_empty());
}

#[tokio::test]
async fn fleet_is_frozen_after_submission() {
    let service = Arc::new(InMemoryService::new());
    let (token, player) = service.register("one@example.com");
    let svc: Arc<dyn GameService> = service.clone();
    let mut rng = SmallRng::seed_from_u64(11);

    let mut host = GameClient::create(svc, token, player.id.clone()).await.unwrap();
    place_fleet(&mut host, &mut rng);
    host.submit_fleet().await.unwrap();

    let err = host
        .place_ship(Coord::parse("A1").unwrap(), 2, Orientation::Horizontal)
        .unwrap_err();
    assert_eq!(
        err,
        GameError::IllegalAction {
            phase: Phase::AwaitingOpponent
        }
    );
    let err = host.toggle_cell(Coord::parse("A1").unwrap()).unwrap_err();
    assert_eq!(
        err,
        GameError::IllegalAction {
            phase: Phase::AwaitingOpponent
        }
    );
}

#[tokio::test]
async fn selection_is_cleared_by_a_successful_placement() {
    let service = Arc::new(InMemoryService::new());
    let (token, player) = service.register("one@example.com");
    let svc: Arc<dyn GameService> = service.clone();

    let mut host = GameClient::create(svc, token, player.id.clone()).await.unwrap();
    assert!(host.toggle_cell(Coord::parse("A1").unwrap()).unwrap());
    assert!(host.toggle_cell(Coord::parse("A2").unwrap()).unwrap());
    assert_eq!(host.selection().len(), 2);

    // a failed placement keeps the selection
    assert!(host
        .place_ship(Coord::parse("J6").unwrap(), 6, Orientation::Horizontal)
        .is_err());
    assert_eq!(host.selection().len(), 2);

    host.place_ship(Coord::parse("E5").unwrap(), 2, Orientation::Horizontal)
        .unwrap();
    assert!(host.selection().is_empty());

    // off-board taps are rejected at the boundary
    let err = host.toggle_cell(Coord::new(12, 0)).unwrap_err();
    assert_eq!(err, GameError::InvalidCoordinate);
}

#[tokio::test]
async fn board_cells_reflect_ships_and_selection() {
    let service = Arc::new(InMemoryService::new());
    let (token, player) = service.register("one@example.com");
    let svc: Arc<dyn GameService> = service.clone();

    let mut host = GameClient::create(svc, token, player.id.clone()).await.unwrap();
    host.toggle_cell(Coord::parse("C3").unwrap()).unwrap();
    host.place_ship(Coord::parse("A1").unwrap(), 2, Orientation::Horizontal)
        .unwrap();
    host.toggle_cell(Coord::parse("D4").unwrap()).unwrap();

    let cells = host.board_cells();
    assert_eq!(cells.len(), 100);
    let mark_of = |label: &str| {
        let coord = Coord::parse(label).unwrap();
        cells.iter().find(|(c, _)| *c == coord).unwrap().1
    };
    assert_eq!(mark_of("A1"), CellMark::OwnShip);
    assert_eq!(mark_of("A2"), CellMark::OwnShip);
    assert_eq!(mark_of("D4"), CellMark::Selected);
    // C3 was cleared by the successful placement
    assert_eq!(mark_of("C3"), CellMark::Empty);
}
