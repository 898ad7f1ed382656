//! Headless economy simulator.
//!
//! Drives the game core at 10 Hz with a greedy purchase strategy and a
//! jittered click cadence, then prints a run report.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # 1 simulated hour
//!   cargo run --bin simulate -- -s 86400          # 1 simulated day
//!   cargo run --bin simulate -- --seed 42 --json  # Reproducible + JSON

use bazaar::core::AUTOSAVE_INTERVAL_SECONDS;
use bazaar::{game_tick, GameEvent, GameState, SaveManager, TICK_INTERVAL_MS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
struct SimConfig {
    seconds: u64,
    seed: u64,
    clicks_per_second: f64,
    json: bool,
    save_path: Option<String>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seconds: 3_600,
            seed: 0,
            clicks_per_second: 2.0,
            json: false,
            save_path: None,
        }
    }
}

#[derive(Debug, Default, Serialize)]
struct SimReport {
    simulated_seconds: u64,
    coins: f64,
    total_coins_earned: f64,
    magic_essence: f64,
    production_per_second: f64,
    click_value: f64,
    producers_owned: u32,
    upgrades_purchased: usize,
    achievements_unlocked: usize,
    achievements_total: usize,
    prestige_level: u32,
    clicks: u64,
    events_seen: usize,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("Bazaar economy simulator");
    println!("  Duration: {}s simulated", config.seconds);
    println!("  Seed:     {}", config.seed);
    println!("  Clicks:   {:.1}/sec", config.clicks_per_second);
    println!();

    let report = run_simulation(&config);

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report).expect("report serializes"));
    } else {
        print_report(&report);
    }
}

fn run_simulation(config: &SimConfig) -> SimReport {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut state = GameState::new();
    state.player_name = "Simulated Trader".to_string();

    let manager = config
        .save_path
        .as_ref()
        .map(|p| SaveManager::with_path(p.into()));

    let tick = Duration::from_millis(TICK_INTERVAL_MS);
    let ticks_per_second = 1_000 / TICK_INTERVAL_MS;
    let click_chance = (config.clicks_per_second / ticks_per_second as f64).min(1.0);

    let mut clicks: u64 = 0;
    let mut events_seen: usize = 0;

    for elapsed in 0..config.seconds {
        for _ in 0..ticks_per_second {
            game_tick(&mut state, tick);
            if rng.gen_bool(click_chance) {
                state.make_trade();
                clicks += 1;
            }
        }

        spend_greedily(&mut state);
        if state.perform_prestige() {
            tracing::info!(level = state.prestige.level, second = elapsed, "simulator prestiged");
        }

        for event in state.drain_events() {
            events_seen += 1;
            if let GameEvent::AchievementUnlocked { name, .. } = event {
                tracing::debug!(achievement = %name, "unlocked during simulation");
            }
        }

        if let Some(manager) = &manager {
            if elapsed % AUTOSAVE_INTERVAL_SECONDS == 0 {
                state.mark_saved(chrono::Utc::now().timestamp());
                if let Err(e) = manager.save(&state) {
                    tracing::warn!(error = %e, "autosave failed");
                }
            }
        }
    }

    SimReport {
        simulated_seconds: config.seconds,
        coins: state.coins,
        total_coins_earned: state.total_coins_earned,
        magic_essence: state.magic_essence,
        production_per_second: state.production_per_second(),
        click_value: state.click_value,
        producers_owned: state.producers.iter().map(|p| p.quantity).sum(),
        upgrades_purchased: state.upgrades.iter().filter(|u| u.is_purchased).count(),
        achievements_unlocked: state.achievements.iter().filter(|a| a.is_unlocked).count(),
        achievements_total: state.achievements.len(),
        prestige_level: state.prestige.level,
        clicks,
        events_seen,
    }
}

/// Buy the most expensive affordable producer, then any affordable
/// upgrade, then push essence into enhancements for the top producer.
fn spend_greedily(state: &mut GameState) {
    let producer_names: Vec<String> = state.producers.iter().map(|p| p.name.clone()).collect();
    for name in producer_names.iter().rev() {
        if state.purchase_producer(name).unwrap_or(false) {
            break;
        }
    }

    let upgrade_names: Vec<String> = state.upgrades.iter().map(|u| u.name.clone()).collect();
    for name in &upgrade_names {
        if state.purchase_upgrade(name).unwrap_or(false) {
            break;
        }
    }

    let best_owned = state
        .producers
        .iter()
        .rev()
        .find(|p| p.quantity > 0)
        .map(|p| p.name.clone());
    if let Some(producer) = best_owned {
        let enhancement_names: Vec<String> =
            state.enhancements.iter().map(|e| e.name.clone()).collect();
        for name in &enhancement_names {
            if state
                .purchase_enhancement_for_producer(&producer, name)
                .unwrap_or(false)
            {
                break;
            }
        }
    }
}

fn print_report(report: &SimReport) {
    println!("Results after {}s:", report.simulated_seconds);
    println!("  Coins:              {:.0}", report.coins);
    println!("  Lifetime earned:    {:.0}", report.total_coins_earned);
    println!("  Magic essence:      {:.1}", report.magic_essence);
    println!("  Production:         {:.1}/sec", report.production_per_second);
    println!("  Trade value:        {:.1}", report.click_value);
    println!("  Producers owned:    {}", report.producers_owned);
    println!("  Upgrades bought:    {}", report.upgrades_purchased);
    println!(
        "  Achievements:       {}/{}",
        report.achievements_unlocked, report.achievements_total
    );
    println!("  Prestige level:     {}", report.prestige_level);
    println!("  Manual trades:      {}", report.clicks);
    println!("  Events observed:    {}", report.events_seen);
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-s" | "--seconds" => {
                if i + 1 < args.len() {
                    config.seconds = args[i + 1].parse().unwrap_or(3_600);
                    i += 1;
                }
            }
            "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().unwrap_or(0);
                    i += 1;
                }
            }
            "-c" | "--clicks" => {
                if i + 1 < args.len() {
                    config.clicks_per_second = args[i + 1].parse().unwrap_or(2.0);
                    i += 1;
                }
            }
            "--save" => {
                if i + 1 < args.len() {
                    config.save_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--json" => {
                config.json = true;
            }
            other => {
                eprintln!("Unknown option: {other}");
                eprintln!("Options: -s/--seconds N, --seed N, -c/--clicks N, --save PATH, --json");
                std::process::exit(2);
            }
        }
        i += 1;
    }

    config
}
