#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::sync::Arc;

#[cfg(feature = "std")]
use broadside::service::{in_memory::InMemoryService, FleetConfigDto};
#[cfg(feature = "std")]
use broadside::{
    init_logging, open_games, print_board, Coord, Fleet, GameClient, GameError, GameService,
    MemoryTokenStore, Phase, SyncConfig, SyncHandle, TokenStore, BOARD_SIZE,
};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::{Rng, SeedableRng};
#[cfg(feature = "std")]
use tokio::sync::Mutex;
#[cfg(feature = "std")]
use tokio::time::{sleep, Duration};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a scripted two-player game against the in-memory service.
    Demo {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 50, help = "Polling interval in milliseconds")]
        interval_ms: u64,
    },
    /// Generate a random complete fleet and print the wire payload.
    Fleet {
        #[arg(long, help = "Fix RNG seed for a reproducible fleet")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn all_cells() -> Vec<Coord> {
    let mut cells = Vec::with_capacity((BOARD_SIZE as usize) * (BOARD_SIZE as usize));
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            cells.push(Coord::new(row, col));
        }
    }
    cells
}

#[cfg(feature = "std")]
fn place_random_fleet(client: &mut GameClient, rng: &mut SmallRng) -> Result<(), GameError> {
    let fleet = Fleet::random(rng);
    for ship in fleet.ships() {
        client.place_ship(ship.origin(), ship.size(), ship.orientation())?;
    }
    Ok(())
}

#[cfg(feature = "std")]
async fn run_demo(seed: Option<u64>, interval_ms: u64) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let service = Arc::new(InMemoryService::new());
    let (token1, player1) = service.register("player.one@example.com");
    let (token2, player2) = service.register("player.two@example.com");
    let svc: Arc<dyn GameService> = service.clone();

    // the host plays as the locally authenticated user
    let session_store = MemoryTokenStore::new();
    session_store.store(token1);
    let token1 = session_store
        .token()
        .ok_or_else(|| anyhow::anyhow!("no stored session token"))?;

    let mut host = GameClient::create(svc.clone(), token1, player1.id.clone()).await?;
    place_random_fleet(&mut host, &mut rng)?;
    host.submit_fleet().await?;
    println!("Host fleet:");
    print_board(host.fleet(), host.selection());

    let open = open_games(svc.as_ref(), &token2, 1, 10).await?;
    let game_id = open
        .first()
        .map(|g| g.id.clone())
        .ok_or_else(|| anyhow::anyhow!("created game not listed as open"))?;
    let mut guest = GameClient::join(svc.clone(), token2, player2.id.clone(), &game_id).await?;
    place_random_fleet(&mut guest, &mut rng)?;
    guest.submit_fleet().await?;
    println!("Guest fleet:");
    print_board(guest.fleet(), guest.selection());

    host.refresh().await?;
    guest.refresh().await?;

    let host = Arc::new(Mutex::new(host));
    let guest = Arc::new(Mutex::new(guest));
    let config = SyncConfig {
        interval: Duration::from_millis(interval_ms),
        debounce: Duration::from_millis(interval_ms / 4 + 1),
    };
    let host_sync = SyncHandle::spawn(host.clone(), config);
    let guest_sync = SyncHandle::spawn(guest.clone(), config);

    let mut host_targets = all_cells();
    let mut guest_targets = all_cells();
    let mut strikes = 0usize;
    let final_snapshot = 'game: loop {
        for (client, targets, sync) in [
            (&host, &mut host_targets, &host_sync),
            (&guest, &mut guest_targets, &guest_sync),
        ] {
            let mut session = client.lock().await;
            match session.phase() {
                Phase::OwnTurn if !targets.is_empty() => {
                    let target = targets.swap_remove(rng.random_range(0..targets.len()));
                    match session.strike(target).await {
                        Ok(()) => {
                            strikes += 1;
                            sync.trigger();
                        }
                        Err(GameError::Conflict(msg)) => {
                            // snapshot was stale; put the cell back and wait
                            log::debug!("strike at {} rejected: {}", target, msg);
                            targets.push(target);
                        }
                        Err(e) => return Err(e.into()),
                    }
                }
                Phase::Finished => break 'game session.snapshot().clone(),
                _ => {}
            }
        }
        sleep(Duration::from_millis(interval_ms / 2 + 1)).await;
        if strikes > 500 {
            anyhow::bail!("demo game did not converge");
        }
    };
    host_sync.shutdown();
    guest_sync.shutdown();

    println!(
        "Game {} finished after {} accepted strikes (status {:?})",
        final_snapshot.id, strikes, final_snapshot.status
    );
    Ok(())
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { seed, interval_ms } => run_demo(seed, interval_ms).await?,
        Commands::Fleet { seed } => {
            let mut rng = make_rng(seed);
            let fleet = Fleet::random(&mut rng);
            let payload = FleetConfigDto::from(&fleet);
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }
    Ok(())
}
