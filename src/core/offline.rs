//! Offline progression: production earned while the game was closed.
//!
//! Accrues at a reduced rate against the interval since the last save,
//! capped at a week. Invoked by the host after a successful load; the
//! current time is a parameter so the calculation stays a pure state
//! transform.

use crate::core::constants::{ESSENCE_RATE, MAX_OFFLINE_SECONDS, OFFLINE_MULTIPLIER};
use crate::core::game_state::GameState;

/// What an offline catch-up granted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OfflineReport {
    /// Real seconds since the last save.
    pub elapsed_seconds: i64,
    /// Seconds actually credited after the cap.
    pub credited_seconds: i64,
    pub coins_earned: f64,
    pub essence_earned: f64,
    /// Effective rate as a percentage of the online rate.
    pub offline_rate_percent: f64,
}

/// Grant offline production for the time between `state.last_save_time`
/// and `current_time`, then advance the save timestamp.
///
/// Returns a zeroed report when the save time is unknown (a fresh or
/// legacy save) or the clock has not moved forward.
pub fn process_offline_progress(state: &mut GameState, current_time: i64) -> OfflineReport {
    if state.last_save_time <= 0 {
        return OfflineReport::default();
    }
    let elapsed_seconds = current_time - state.last_save_time;
    if elapsed_seconds <= 0 {
        return OfflineReport::default();
    }

    let credited_seconds = elapsed_seconds.min(MAX_OFFLINE_SECONDS);
    let production = state.production_per_second();
    let coins_earned = production
        * credited_seconds as f64
        * OFFLINE_MULTIPLIER
        * state.prestige.coin_multiplier;
    let essence_earned = production
        * credited_seconds as f64
        * ESSENCE_RATE
        * OFFLINE_MULTIPLIER
        * state.prestige.magic_essence_multiplier;

    state.add_coins(coins_earned);
    state.add_magic_essence(essence_earned);
    state.last_save_time = current_time;

    tracing::info!(elapsed_seconds, credited_seconds, coins_earned, "offline progress granted");

    OfflineReport {
        elapsed_seconds,
        credited_seconds,
        coins_earned,
        essence_earned,
        offline_rate_percent: OFFLINE_MULTIPLIER * 100.0,
    }
}
