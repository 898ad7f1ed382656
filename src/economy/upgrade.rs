//! Upgrades: repeatable purchases that permanently scale game variables.

use crate::core::constants::COST_GROWTH_RATE;
use serde::{Deserialize, Serialize};

/// What an upgrade's effect multiplies when purchased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpgradeType {
    /// Scales the value of manual trades.
    ClickValue,
    /// Scales the base production of the named target producer.
    ProducerEfficiency,
    /// Scales production of all producers.
    GlobalEfficiency,
    /// Reserved: magic essence gain scaling is not wired up yet.
    MagicEssenceGain,
    /// Scales the global cost reduction multiplier.
    CostReduction,
}

/// A repeatable purchase. `level` counts repeat buys and drives the price
/// curve; `is_purchased` records whether it was ever bought (that flag, not
/// the level, is what upgrade-count achievements look at).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Upgrade {
    pub name: String,
    pub description: String,
    pub base_cost: f64,
    pub effect: f64,
    pub kind: UpgradeType,
    /// Only meaningful for `ProducerEfficiency`; empty otherwise.
    pub target_producer: String,
    pub is_purchased: bool,
    pub level: u32,
}

impl Default for Upgrade {
    fn default() -> Self {
        Upgrade::new("", "", 0.0, 0.0, UpgradeType::ClickValue)
    }
}

impl Upgrade {
    pub fn new(name: &str, description: &str, base_cost: f64, effect: f64, kind: UpgradeType) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            base_cost,
            effect,
            kind,
            target_producer: String::new(),
            is_purchased: false,
            level: 0,
        }
    }

    /// Builds a producer-targeted upgrade.
    pub fn for_producer(
        name: &str,
        description: &str,
        base_cost: f64,
        effect: f64,
        kind: UpgradeType,
        target_producer: &str,
    ) -> Self {
        let mut upgrade = Upgrade::new(name, description, base_cost, effect, kind);
        upgrade.target_producer = target_producer.to_string();
        upgrade
    }

    /// Price of the next level: `base_cost * 1.15^level`.
    pub fn current_cost(&self) -> f64 {
        self.base_cost * COST_GROWTH_RATE.powi(self.level as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_cost_scales_with_level() {
        let mut upgrade = Upgrade::new("Sharper Haggling", "", 100.0, 1.5, UpgradeType::ClickValue);
        assert_eq!(upgrade.current_cost(), 100.0);

        upgrade.level = 1;
        assert!((upgrade.current_cost() - 115.0).abs() < 1e-9);

        upgrade.level = 2;
        assert!((upgrade.current_cost() - 132.25).abs() < 1e-9);
    }

    #[test]
    fn test_for_producer_sets_target() {
        let upgrade = Upgrade::for_producer(
            "Charm Stall Mastery",
            "",
            75.0,
            2.0,
            UpgradeType::ProducerEfficiency,
            "Charm Stall",
        );
        assert_eq!(upgrade.target_producer, "Charm Stall");
        assert!(!upgrade.is_purchased);
        assert_eq!(upgrade.level, 0);
    }
}
