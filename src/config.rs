use core::time::Duration;

pub const BOARD_SIZE: u8 = 10;

/// Required fleet composition as (ship size, count) pairs, largest first.
pub const FLEET_QUOTA: [(u8, u8); 4] = [(6, 1), (4, 2), (3, 3), (2, 4)];

/// Ships in a complete fleet.
pub const NUM_SHIPS: usize = 10;

/// Cells covered by a complete fleet.
pub const TOTAL_FLEET_CELLS: usize = 31;

/// Default cadence of the session polling loop.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Default window in which repeated refresh triggers coalesce into one poll.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);
