#![cfg(feature = "std")]

//! Background synchronization of a game session.
//!
//! One spawned task owns the polling cadence, so polls are serialized by
//! construction: the next tick cannot fire until the previous refresh has
//! resolved, which sidesteps late-response reordering entirely.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval, sleep, Duration, MissedTickBehavior};

use crate::client::GameClient;
use crate::config::{DEFAULT_DEBOUNCE, DEFAULT_POLL_INTERVAL};

#[derive(Clone, Copy, Debug)]
pub struct SyncConfig {
    /// Fixed polling cadence.
    pub interval: Duration,
    /// Window in which rapid manual triggers coalesce into one poll.
    pub debounce: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

/// Handle to a running sync loop. Dropping it stops the loop, so polling
/// never outlives the session view that spawned it.
pub struct SyncHandle {
    shutdown: Arc<AtomicBool>,
    trigger: mpsc::UnboundedSender<()>,
    task: JoinHandle<()>,
}

impl SyncHandle {
    /// Spawn the loop for a session. The caller performs the gating initial
    /// fetch itself (`GameClient::refresh`) before handing the session over.
    pub fn spawn(session: Arc<Mutex<GameClient>>, config: SyncConfig) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let stop = shutdown.clone();
        let (trigger, mut triggers) = mpsc::unbounded_channel::<()>();
        let task = tokio::spawn(async move {
            let mut ticker = interval(config.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // the immediate first tick duplicates the gating initial fetch
            ticker.tick().await;
            loop {
                tokio::select! {
                    _ = ticker.tick() => {}
                    received = triggers.recv() => {
                        if received.is_none() {
                            break;
                        }
                        // coalesce the burst into a single poll
                        sleep(config.debounce).await;
                        while triggers.try_recv().is_ok() {}
                    }
                }
                if stop.load(Ordering::SeqCst) {
                    break;
                }
                let mut session = session.lock().await;
                if let Err(e) = session.refresh().await {
                    warn!("poll failed: {}", e);
                }
            }
            debug!("sync loop stopped");
        });
        Self {
            shutdown,
            trigger,
            task,
        }
    }

    /// Request an out-of-band refresh. Rapid repeats within the debounce
    /// window collapse into one poll.
    pub fn trigger(&self) {
        let _ = self.trigger.send(());
    }

    /// Stop polling. Any pending debounce or in-flight poll is cancelled.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
        self.task.abort();
    }

    pub fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }
}

impl Drop for SyncHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}
