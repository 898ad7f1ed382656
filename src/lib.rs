//! Bazaar — an incremental arcane-commerce economy core.
//!
//! The simulation is a library: a host drives it by calling
//! [`game_tick`] on its own schedule, forwarding player actions
//! ([`GameState::make_trade`], the purchase methods,
//! [`GameState::perform_prestige`]), and persisting through
//! [`SaveManager`]. State changes worth surfacing come back as
//! [`GameEvent`]s via [`GameState::drain_events`]. No rendering, input,
//! or timer code lives here.

pub mod content;
pub mod core;
pub mod economy;
pub mod prestige;
pub mod save_data;
pub mod save_manager;

pub use crate::core::game_state::{GameError, GameEvent, GameState};
pub use crate::core::offline::{process_offline_progress, OfflineReport};
pub use crate::core::tick::{game_tick, TickResult};
pub use crate::core::TICK_INTERVAL_MS;
pub use crate::save_data::SaveData;
pub use crate::save_manager::SaveManager;
