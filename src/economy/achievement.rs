//! Achievements: one-way milestone unlocks granting permanent bonuses.

use serde::{Deserialize, Serialize};

/// The observable metric an achievement watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AchievementType {
    /// Lifetime coins earned (never reduced by spending or prestige).
    CoinsEarned,
    /// Sum of all producer quantities.
    TotalProducers,
    /// Quantity of one named producer.
    ProducerQuantity,
    /// Number of upgrades ever purchased (by flag, not level).
    TotalUpgrades,
    /// Current manual trade value.
    ClickValue,
    /// Current magic essence balance.
    MagicEssence,
    /// Cumulative seconds played.
    TimePlayed,
}

/// A milestone. Once unlocked it is never re-evaluated; the bonus is
/// applied exactly once at the moment of unlock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Achievement {
    pub name: String,
    pub description: String,
    pub required_value: f64,
    pub kind: AchievementType,
    pub bonus: f64,
    /// Only meaningful for `ProducerQuantity`; empty otherwise.
    pub target_producer: String,
    pub is_unlocked: bool,
    /// Last observed value of the watched metric.
    pub progress: f64,
    /// Unix timestamp of the unlock, if any.
    pub unlock_time: Option<i64>,
}

impl Default for Achievement {
    fn default() -> Self {
        Achievement::new("", "", 0.0, AchievementType::CoinsEarned, 1.0)
    }
}

impl Achievement {
    pub fn new(name: &str, description: &str, required_value: f64, kind: AchievementType, bonus: f64) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            required_value,
            kind,
            bonus,
            target_producer: String::new(),
            is_unlocked: false,
            progress: 0.0,
            unlock_time: None,
        }
    }

    /// Builds a producer-targeted achievement.
    pub fn for_producer(
        name: &str,
        description: &str,
        required_value: f64,
        kind: AchievementType,
        bonus: f64,
        target_producer: &str,
    ) -> Self {
        let mut achievement = Achievement::new(name, description, required_value, kind, bonus);
        achievement.target_producer = target_producer.to_string();
        achievement
    }

    /// Completion in `[0, 1]`. Reads 1.0 forever once unlocked.
    pub fn progress_fraction(&self) -> f64 {
        if self.is_unlocked {
            return 1.0;
        }
        if self.required_value <= 0.0 {
            return 1.0;
        }
        (self.progress / self.required_value).min(1.0)
    }

    /// Mark unlocked with the given timestamp. Returns true only on the
    /// first call; the transition is one-way.
    pub fn unlock(&mut self, timestamp: i64) -> bool {
        if self.is_unlocked {
            return false;
        }
        self.is_unlocked = true;
        self.unlock_time = Some(timestamp);
        true
    }
}
