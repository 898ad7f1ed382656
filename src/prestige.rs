//! Prestige: a full progress reset traded for permanent multipliers.

use crate::core::constants::{
    PRESTIGE_BASE_COST, PRESTIGE_CLICK_FACTOR, PRESTIGE_COIN_FACTOR, PRESTIGE_COST_GROWTH,
    PRESTIGE_EFFICIENCY_FACTOR, PRESTIGE_ESSENCE_FACTOR, PRESTIGE_LEVEL_BONUS,
    PRESTIGE_UPGRADE_DISCOUNT_FACTOR,
};
use serde::{Deserialize, Serialize};

/// Prestige level plus the multiplier family it has earned.
///
/// Every multiplier starts at 1.0 and compounds by a fixed factor on each
/// prestige event, except `prestige_multiplier` which tracks the level
/// linearly. The upgrade discount multiplier is carried for display but is
/// not part of any price formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prestige {
    pub level: u32,
    pub prestige_multiplier: f64,
    pub magic_essence_multiplier: f64,
    pub coin_multiplier: f64,
    pub click_value_multiplier: f64,
    pub producer_efficiency_multiplier: f64,
    pub upgrade_cost_reduction_multiplier: f64,
}

impl Default for Prestige {
    fn default() -> Self {
        Prestige::new()
    }
}

impl Prestige {
    pub fn new() -> Self {
        Self {
            level: 0,
            prestige_multiplier: 1.0,
            magic_essence_multiplier: 1.0,
            coin_multiplier: 1.0,
            click_value_multiplier: 1.0,
            producer_efficiency_multiplier: 1.0,
            upgrade_cost_reduction_multiplier: 1.0,
        }
    }

    /// Reconstructs the family for a saved level, as if `advance` had been
    /// called `level` times. Saves persist only the level.
    pub fn from_level(level: u32) -> Self {
        let mut prestige = Prestige::new();
        for _ in 0..level {
            prestige.advance();
        }
        prestige
    }

    /// Lifetime coins required for the next prestige:
    /// `1,000,000 * 10^level`.
    pub fn next_cost(&self) -> f64 {
        PRESTIGE_BASE_COST * PRESTIGE_COST_GROWTH.powi(self.level as i32)
    }

    /// Advance one prestige level and compound the multiplier family.
    pub fn advance(&mut self) {
        self.level += 1;
        self.prestige_multiplier = 1.0 + PRESTIGE_LEVEL_BONUS * self.level as f64;
        self.magic_essence_multiplier *= PRESTIGE_ESSENCE_FACTOR;
        self.coin_multiplier *= PRESTIGE_COIN_FACTOR;
        self.click_value_multiplier *= PRESTIGE_CLICK_FACTOR;
        self.producer_efficiency_multiplier *= PRESTIGE_EFFICIENCY_FACTOR;
        self.upgrade_cost_reduction_multiplier *= PRESTIGE_UPGRADE_DISCOUNT_FACTOR;
    }
}
