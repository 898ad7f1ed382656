// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 100;
pub const TICKS_PER_SECOND: u64 = 1000 / TICK_INTERVAL_MS;
pub const AUTOSAVE_INTERVAL_SECONDS: u64 = 30;

// Starting resources
pub const STARTING_COINS: f64 = 0.0;
pub const STARTING_MAGIC_ESSENCE: f64 = 0.0;
pub const STARTING_CLICK_VALUE: f64 = 1.0;

// Cost scaling: each unit owned (or upgrade level bought) raises the next
// price by 15%.
pub const COST_GROWTH_RATE: f64 = 1.15;

// Magic essence accrues as a fixed fraction of coin production.
pub const ESSENCE_RATE: f64 = 0.05;

// Prestige: threshold 1,000,000 * 10^level, headline multiplier
// 1 + 0.1 * level, and per-event compounding factors for the family.
pub const PRESTIGE_BASE_COST: f64 = 1_000_000.0;
pub const PRESTIGE_COST_GROWTH: f64 = 10.0;
pub const PRESTIGE_LEVEL_BONUS: f64 = 0.1;
pub const PRESTIGE_ESSENCE_FACTOR: f64 = 1.2;
pub const PRESTIGE_COIN_FACTOR: f64 = 1.15;
pub const PRESTIGE_CLICK_FACTOR: f64 = 1.1;
pub const PRESTIGE_EFFICIENCY_FACTOR: f64 = 1.1;
pub const PRESTIGE_UPGRADE_DISCOUNT_FACTOR: f64 = 0.95;

// Offline accrual
pub const OFFLINE_MULTIPLIER: f64 = 0.25;
pub const MAX_OFFLINE_SECONDS: i64 = 7 * 24 * 60 * 60;

// Max number of pending game events kept for the host to drain
pub const MAX_PENDING_EVENTS: usize = 64;
