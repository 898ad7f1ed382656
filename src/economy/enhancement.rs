//! Enhancements: essence-priced modifiers attached to individual producers.

use serde::{Deserialize, Serialize};

/// Which producer property an enhancement is meant to modify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnhancementType {
    Efficiency,
    CostReduction,
    QuantityBonus,
}

/// A modifier bought with magic essence. Buying and attaching are separate
/// steps: an enhancement affects production only once attached to a
/// producer AND flagged active; until then it sits inert in the pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Enhancement {
    pub name: String,
    pub description: String,
    pub cost: f64,
    pub effect: f64,
    pub kind: EnhancementType,
    pub is_purchased: bool,
    pub is_active: bool,
}

impl Default for Enhancement {
    fn default() -> Self {
        Enhancement::new("", "", 0.0, 0.0, EnhancementType::Efficiency)
    }
}

impl Enhancement {
    pub fn new(name: &str, description: &str, cost: f64, effect: f64, kind: EnhancementType) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            cost,
            effect,
            kind,
            is_purchased: false,
            is_active: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_enhancement_starts_inert() {
        let enhancement =
            Enhancement::new("Gleam Polish", "Wares shine brighter", 100.0, 0.25, EnhancementType::Efficiency);
        assert!(!enhancement.is_purchased);
        assert!(!enhancement.is_active);
        assert_eq!(enhancement.effect, 0.25);
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut enhancement =
            Enhancement::new("Gleam Polish", "", 100.0, 0.25, EnhancementType::QuantityBonus);
        enhancement.is_purchased = true;

        let json = serde_json::to_string(&enhancement).unwrap();
        let loaded: Enhancement = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.name, "Gleam Polish");
        assert_eq!(loaded.kind, EnhancementType::QuantityBonus);
        assert!(loaded.is_purchased);
        assert!(!loaded.is_active);
    }
}
