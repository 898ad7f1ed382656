//! The periodic accrual loop.
//!
//! `game_tick()` processes one tick given the wall-clock time since the
//! previous invocation. The host owns the schedule (the reference cadence
//! is 10 Hz); the function itself is a plain transform of
//! (state, elapsed) and can be driven from any timer, test, or simulator.

use crate::core::constants::ESSENCE_RATE;
use crate::core::game_state::GameState;
use crate::economy::AchievementType;
use std::time::Duration;

/// What one tick accrued. All zeroes when the tick was skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickResult {
    /// Instantaneous production rate used for this tick, after global and
    /// prestige efficiency multipliers.
    pub production_per_second: f64,
    /// Coins credited this tick (after the prestige coin multiplier).
    pub coins_earned: f64,
    /// Magic essence credited this tick.
    pub essence_earned: f64,
}

/// Advance the economy by `elapsed` wall-clock time.
///
/// Order of operations: play time and TimePlayed milestones first, then
/// coin accrual (with CoinsEarned milestones), then essence accrual (with
/// MagicEssence milestones), then a full sweep of the remaining locked
/// achievements. The sweep is idempotent — recomputing progress has no
/// side effect until a threshold is crossed.
///
/// A tick must never take the host down: all deltas are computed before
/// anything is mutated, and if the elapsed time is zero or any value
/// comes out non-finite the tick is logged and skipped wholesale.
pub fn game_tick(state: &mut GameState, elapsed: Duration) -> TickResult {
    let seconds = elapsed.as_secs_f64();
    if seconds <= 0.0 {
        return TickResult::default();
    }

    let production = state.production_per_second();
    let coins_earned = production * seconds * state.prestige.coin_multiplier;
    let essence_earned =
        production * seconds * ESSENCE_RATE * state.prestige.magic_essence_multiplier;

    if !production.is_finite() || !coins_earned.is_finite() || !essence_earned.is_finite() {
        tracing::warn!(
            production,
            coins_earned,
            essence_earned,
            "non-finite accrual; skipping tick"
        );
        return TickResult::default();
    }

    state.time_played += elapsed;
    state.evaluate_achievements(Some(AchievementType::TimePlayed), None);

    if coins_earned > 0.0 {
        state.coins += coins_earned;
        state.total_coins_earned += coins_earned;
        state.evaluate_achievements(Some(AchievementType::CoinsEarned), None);
    }

    if essence_earned > 0.0 {
        state.magic_essence += essence_earned;
        state.evaluate_achievements(Some(AchievementType::MagicEssence), None);
    }

    // Safety sweep for anything the targeted passes above did not touch
    state.evaluate_achievements(None, None);

    TickResult {
        production_per_second: production,
        coins_earned,
        essence_earned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::{Achievement, AchievementType, Producer};

    fn state_with_producer(base_production: f64, quantity: u32) -> GameState {
        let mut state = GameState::new();
        state.producers.clear();
        state.upgrades.clear();
        state.achievements.clear();
        state.enhancements.clear();
        let mut producer = Producer::new("Charm Stall", "", 100.0, base_production);
        producer.quantity = quantity;
        state.add_producer(producer);
        state
    }

    #[test]
    fn test_tick_accrues_coins_and_essence() {
        let mut state = state_with_producer(10.0, 2);

        let result = game_tick(&mut state, Duration::from_secs(1));

        assert_eq!(result.production_per_second, 20.0);
        assert_eq!(result.coins_earned, 20.0);
        assert!((result.essence_earned - 1.0).abs() < 1e-9);
        assert_eq!(state.coins, 20.0);
        assert_eq!(state.total_coins_earned, 20.0);
        assert!((state.magic_essence - 1.0).abs() < 1e-9);
        assert_eq!(state.time_played, Duration::from_secs(1));
    }

    #[test]
    fn test_tick_scales_with_elapsed_time() {
        let mut state = state_with_producer(10.0, 1);

        let result = game_tick(&mut state, Duration::from_millis(100));

        assert!((result.coins_earned - 1.0).abs() < 1e-9);
        assert!((state.coins - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_tick_applies_prestige_multipliers() {
        let mut state = state_with_producer(10.0, 1);
        state.prestige.coin_multiplier = 1.15;
        state.prestige.magic_essence_multiplier = 1.2;
        state.prestige.producer_efficiency_multiplier = 2.0;

        let result = game_tick(&mut state, Duration::from_secs(1));

        assert!((result.production_per_second - 20.0).abs() < 1e-9);
        assert!((result.coins_earned - 23.0).abs() < 1e-9);
        assert!((result.essence_earned - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_tick_with_no_producers_still_tracks_time() {
        let mut state = state_with_producer(10.0, 0);

        let result = game_tick(&mut state, Duration::from_secs(5));

        assert_eq!(result.coins_earned, 0.0);
        assert_eq!(state.coins, 0.0);
        assert_eq!(state.time_played, Duration::from_secs(5));
    }

    #[test]
    fn test_zero_elapsed_is_a_no_op() {
        let mut state = state_with_producer(10.0, 3);

        let result = game_tick(&mut state, Duration::ZERO);

        assert_eq!(result, TickResult::default());
        assert_eq!(state.coins, 0.0);
        assert_eq!(state.time_played, Duration::ZERO);
    }

    #[test]
    fn test_non_finite_production_skips_tick_without_mutation() {
        let mut state = state_with_producer(f64::MAX, 2);
        state.global_efficiency_multiplier = f64::MAX;

        let result = game_tick(&mut state, Duration::from_secs(1));

        assert_eq!(result, TickResult::default());
        assert_eq!(state.coins, 0.0);
        assert_eq!(state.total_coins_earned, 0.0);
        assert_eq!(state.time_played, Duration::ZERO);
    }

    #[test]
    fn test_tick_unlocks_time_played_achievement() {
        let mut state = state_with_producer(0.0, 0);
        state.add_achievement(Achievement::new(
            "One Hour In",
            "",
            3600.0,
            AchievementType::TimePlayed,
            1.1,
        ));

        game_tick(&mut state, Duration::from_secs(3599));
        assert!(!state.achievements[0].is_unlocked);

        game_tick(&mut state, Duration::from_secs(1));
        assert!(state.achievements[0].is_unlocked);
        assert!((state.global_efficiency_multiplier - 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_tick_sweep_catches_unrelated_milestones() {
        let mut state = state_with_producer(10.0, 1);
        state.click_value = 50.0;
        state.add_achievement(Achievement::new(
            "Heavy Hand",
            "",
            10.0,
            AchievementType::ClickValue,
            1.2,
        ));

        // No click happens, but the end-of-tick sweep still notices
        game_tick(&mut state, Duration::from_millis(100));
        assert!(state.achievements[0].is_unlocked);
    }
}
