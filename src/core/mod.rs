//! Core game state and the accrual loop.

pub mod constants;
pub mod game_state;
pub mod offline;
pub mod tick;

pub use constants::*;
pub use game_state::{GameError, GameEvent, GameState};
pub use offline::{process_offline_progress, OfflineReport};
pub use tick::{game_tick, TickResult};
