#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
pub mod auth;
#[cfg(feature = "std")]
pub mod client;
mod common;
mod config;
mod coord;
mod fleet;
#[cfg(feature = "std")]
mod logging;
mod selection;
#[cfg(feature = "std")]
pub mod service;
mod session;
mod ship;
#[cfg(feature = "std")]
pub mod sync;
mod view;

#[cfg(feature = "std")]
pub use auth::*;
#[cfg(feature = "std")]
pub use client::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use fleet::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use selection::*;
#[cfg(feature = "std")]
pub use service::{open_games, GameService};
pub use session::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use sync::*;
pub use view::*;
