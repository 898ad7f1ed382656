//! Producers: purchasable units that generate passive coin income.

use crate::core::constants::COST_GROWTH_RATE;
use crate::economy::enhancement::Enhancement;
use serde::{Deserialize, Serialize};

/// A generator unit. Quantity only ever grows through purchases; a prestige
/// reset drops it back to zero.
///
/// Attached enhancements are referenced by name — the [`Enhancement`] pool
/// itself is owned by the game state, so producers never carry their own
/// copies of enhancement data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Producer {
    pub name: String,
    pub description: String,
    pub base_cost: f64,
    pub base_production: f64,
    pub quantity: u32,
    pub efficiency_multiplier: f64,
    pub cost_reduction_multiplier: f64,
    pub quantity_multiplier: f64,
    /// Names of attached enhancements, in application order, no duplicates.
    pub enhancements: Vec<String>,
}

impl Default for Producer {
    fn default() -> Self {
        Producer::new("", "", 0.0, 0.0)
    }
}

impl Producer {
    pub fn new(name: &str, description: &str, base_cost: f64, base_production: f64) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            base_cost,
            base_production,
            quantity: 0,
            efficiency_multiplier: 1.0,
            cost_reduction_multiplier: 1.0,
            quantity_multiplier: 1.0,
            enhancements: Vec::new(),
        }
    }

    /// Price of the next unit: `base_cost * 1.15^quantity`, scaled by this
    /// producer's own cost reduction.
    pub fn current_cost(&self) -> f64 {
        self.base_cost * COST_GROWTH_RATE.powi(self.quantity as i32) * self.cost_reduction_multiplier
    }

    /// Coins per second produced by all owned units.
    ///
    /// Attached enhancements contribute `1 + sum(effect)` over the subset
    /// whose `is_active` flag is set; attached-but-inactive enhancements
    /// are inert.
    pub fn current_production(&self, pool: &[Enhancement]) -> f64 {
        let base_output = self.base_production
            * self.quantity as f64
            * self.efficiency_multiplier
            * self.quantity_multiplier;
        let enhancement_bonus: f64 = pool
            .iter()
            .filter(|e| e.is_active && self.has_enhancement(&e.name))
            .map(|e| e.effect)
            .sum();
        base_output * (1.0 + enhancement_bonus)
    }

    /// Whether an enhancement with this name is already attached.
    pub fn has_enhancement(&self, name: &str) -> bool {
        self.enhancements.iter().any(|n| n == name)
    }

    /// Attach an enhancement by name. Returns false if it was already
    /// attached (the list stays duplicate-free).
    pub fn attach_enhancement(&mut self, name: &str) -> bool {
        if self.has_enhancement(name) {
            return false;
        }
        self.enhancements.push(name.to_string());
        true
    }
}
