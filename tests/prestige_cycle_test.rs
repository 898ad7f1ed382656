//! Integration test: a full prestige cycle on the standard catalog.

use bazaar::{game_tick, GameEvent, GameState};
use std::time::Duration;

#[test]
fn test_complete_prestige_cycle() {
    let mut state = GameState::new();
    assert!(!state.can_prestige());

    // Build up a run: a producer, an upgrade, an applied enhancement
    state.coins = 1_225.0;
    state.purchase_producer("Charm Stall").unwrap();
    state.purchase_upgrade("Sharper Haggling").unwrap();
    state.magic_essence = 600.0;
    state.purchase_enhancement("Gleam Polish").unwrap();
    state.purchase_enhancement_for_producer("Charm Stall", "Attuned Wares").unwrap();

    // Reach the first prestige threshold through earnings
    state.add_coins(1_000_000.0);
    assert!(state.can_prestige());
    assert_eq!(state.prestige_points(), 0.0); // exactly at the threshold

    let achievement_count = state.achievements.len();
    let unlocked_before: Vec<String> = state
        .achievements
        .iter()
        .filter(|a| a.is_unlocked)
        .map(|a| a.name.clone())
        .collect();
    assert!(!unlocked_before.is_empty());

    state.drain_events();
    assert!(state.perform_prestige());

    // Run state is wiped
    assert_eq!(state.prestige.level, 1);
    assert_eq!(state.coins, 0.0);
    assert_eq!(state.magic_essence, 0.0);
    assert_eq!(state.click_value, 1.0);
    assert!(state.producers.iter().all(|p| p.quantity == 0));
    assert!(state.upgrades.iter().all(|u| !u.is_purchased));
    assert!(state.enhancements.iter().all(|e| !e.is_purchased && !e.is_active));

    // Achievements survive, with their unlock state intact
    assert_eq!(state.achievements.len(), achievement_count);
    for name in &unlocked_before {
        assert!(state.achievements.iter().any(|a| &a.name == name && a.is_unlocked));
    }

    // The enhancement stays attached to the (now empty) producer
    let index = state.find_producer("Charm Stall").unwrap();
    assert!(state.producers[index].has_enhancement("Attuned Wares"));

    // The multiplier family took effect
    assert!((state.prestige.prestige_multiplier - 1.1).abs() < 1e-9);
    assert!((state.prestige.coin_multiplier - 1.15).abs() < 1e-9);

    let events = state.drain_events();
    assert!(events.contains(&GameEvent::PrestigePerformed { level: 1 }));
}

#[test]
fn test_prestige_threshold_rises_tenfold() {
    let mut state = GameState::new();
    state.total_coins_earned = 1_000_000.0;

    assert!(state.perform_prestige());
    // Lifetime earnings persist, but the next reset needs ten million
    assert_eq!(state.total_coins_earned, 1_000_000.0);
    assert!(!state.can_prestige());

    state.add_coins(9_000_000.0);
    assert!(state.can_prestige());
    assert!(state.perform_prestige());
    assert_eq!(state.prestige.level, 2);
}

#[test]
fn test_prestige_bonuses_speed_up_the_next_run() {
    let mut state = GameState::new();
    state.achievements.clear();

    // Baseline: one Charm Stall for one second
    state.coins = 225.0;
    state.purchase_producer("Charm Stall").unwrap();
    let baseline = game_tick(&mut state, Duration::from_secs(1)).coins_earned;

    state.total_coins_earned = 1_000_000.0;
    assert!(state.perform_prestige());

    // Same setup after one prestige earns strictly more
    state.coins = 225.0;
    state.purchase_producer("Charm Stall").unwrap();
    let boosted = game_tick(&mut state, Duration::from_secs(1)).coins_earned;

    // coin x1.15 and producer-efficiency x1.1
    assert!(boosted > baseline);
    assert!((boosted / baseline - 1.15 * 1.1).abs() < 1e-9);

    // Manual trades are boosted too
    let trade = state.make_trade();
    assert!((trade - 1.1).abs() < 1e-9);
}

#[test]
fn test_repeated_prestige_compounds_multipliers() {
    let mut state = GameState::new();

    for round in 1..=3 {
        state.total_coins_earned = state.prestige.next_cost();
        assert!(state.perform_prestige(), "round {round}");
    }

    assert_eq!(state.prestige.level, 3);
    assert!((state.prestige.prestige_multiplier - 1.3).abs() < 1e-9);
    assert!((state.prestige.coin_multiplier - 1.15_f64.powi(3)).abs() < 1e-9);
    assert!((state.prestige.magic_essence_multiplier - 1.2_f64.powi(3)).abs() < 1e-9);
    assert!((state.prestige.upgrade_cost_reduction_multiplier - 0.95_f64.powi(3)).abs() < 1e-9);
}

#[test]
fn test_identity_and_customization_survive_prestige() {
    let mut state = GameState::new();
    state.player_name = "Wren".to_string();
    state.company_name = "Wren & Co".to_string();
    state.selected_background = "Dusk".to_string();
    state.selected_specialization = "Producer".to_string();
    state.time_played = Duration::from_secs(5_000);

    state.total_coins_earned = 1_000_000.0;
    assert!(state.perform_prestige());

    assert_eq!(state.player_name, "Wren");
    assert_eq!(state.company_name, "Wren & Co");
    assert_eq!(state.selected_background, "Dusk");
    assert_eq!(state.selected_specialization, "Producer");
    assert_eq!(state.time_played, Duration::from_secs(5_000));
}
