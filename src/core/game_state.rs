//! Central game state: the single owner and mutator of all economy state.
//!
//! Every mutation — ticks, manual trades, purchases, prestige — goes
//! through this type so achievement re-evaluation can never be skipped.
//! Hosts read fields directly for display and drain [`GameEvent`]s for
//! change notification; they must not write economy state themselves.

use crate::content;
use crate::core::constants::{
    MAX_PENDING_EVENTS, STARTING_CLICK_VALUE, STARTING_COINS, STARTING_MAGIC_ESSENCE,
};
use crate::economy::{Achievement, AchievementType, Enhancement, Producer, Upgrade, UpgradeType};
use crate::prestige::Prestige;
use chrono::Utc;
use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

/// A state change of interest to the host, queued until drained.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    AchievementUnlocked { name: String, bonus: f64 },
    ProducerPurchased { name: String, quantity: u32 },
    UpgradePurchased { name: String, level: u32 },
    EnhancementApplied { enhancement: String, producer: String },
    PrestigePerformed { level: u32 },
}

/// A purchase or apply operation referenced an entity that does not exist.
///
/// Insufficient funds are NOT an error — those come back as `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    UnknownProducer(String),
    UnknownUpgrade(String),
    UnknownEnhancement(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::UnknownProducer(name) => write!(f, "unknown producer: {name}"),
            GameError::UnknownUpgrade(name) => write!(f, "unknown upgrade: {name}"),
            GameError::UnknownEnhancement(name) => write!(f, "unknown enhancement: {name}"),
        }
    }
}

impl std::error::Error for GameError {}

/// Full state of one playthrough.
#[derive(Debug, Clone)]
pub struct GameState {
    pub coins: f64,
    pub magic_essence: f64,
    pub click_value: f64,
    pub player_name: String,
    pub company_name: String,
    pub selected_background: String,
    pub selected_specialization: String,
    pub global_efficiency_multiplier: f64,
    pub cost_reduction_multiplier: f64,
    /// Lifetime coins earned; never reduced by spending or prestige.
    pub total_coins_earned: f64,
    pub time_played: Duration,
    /// Unix timestamp of the last save; 0 until the first save.
    pub last_save_time: i64,
    pub prestige: Prestige,
    pub producers: Vec<Producer>,
    pub upgrades: Vec<Upgrade>,
    pub achievements: Vec<Achievement>,
    pub enhancements: Vec<Enhancement>,
    /// Pending events for the host, oldest first (transient, never saved).
    events: VecDeque<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl GameState {
    /// A fresh playthrough with the standard starting catalog.
    pub fn new() -> Self {
        let mut state = Self {
            coins: STARTING_COINS,
            magic_essence: STARTING_MAGIC_ESSENCE,
            click_value: STARTING_CLICK_VALUE,
            player_name: String::new(),
            company_name: String::new(),
            selected_background: String::new(),
            selected_specialization: String::new(),
            global_efficiency_multiplier: 1.0,
            cost_reduction_multiplier: 1.0,
            total_coins_earned: 0.0,
            time_played: Duration::ZERO,
            last_save_time: 0,
            prestige: Prestige::new(),
            producers: Vec::new(),
            upgrades: Vec::new(),
            achievements: Vec::new(),
            enhancements: Vec::new(),
            events: VecDeque::new(),
        };
        state.producers = content::starting_producers();
        state.upgrades = content::starting_upgrades(&state.producers);
        state.achievements = content::starting_achievements();
        state.enhancements = content::starting_enhancements();
        state
    }

    // ── Lookups ─────────────────────────────────────────────────

    pub fn find_producer(&self, name: &str) -> Option<usize> {
        self.producers.iter().position(|p| p.name == name)
    }

    pub fn find_upgrade(&self, name: &str) -> Option<usize> {
        self.upgrades.iter().position(|u| u.name == name)
    }

    pub fn find_enhancement(&self, name: &str) -> Option<usize> {
        self.enhancements.iter().position(|e| e.name == name)
    }

    /// Coins per second from all owned producers, including the global
    /// efficiency multiplier and the prestige producer-efficiency bonus.
    pub fn production_per_second(&self) -> f64 {
        let base: f64 = self
            .producers
            .iter()
            .filter(|p| p.quantity > 0)
            .map(|p| p.current_production(&self.enhancements))
            .sum();
        base * self.global_efficiency_multiplier * self.prestige.producer_efficiency_multiplier
    }

    // ── Resource mutation ───────────────────────────────────────

    /// Manual trade: the "click". Always succeeds; returns the value added.
    pub fn make_trade(&mut self) -> f64 {
        let trade_value = self.click_value * self.prestige.click_value_multiplier;
        self.coins += trade_value;
        self.total_coins_earned += trade_value;
        self.evaluate_achievements(Some(AchievementType::CoinsEarned), None);
        trade_value
    }

    /// Credit coins (and lifetime earnings). Non-positive amounts are
    /// ignored.
    pub fn add_coins(&mut self, amount: f64) {
        if amount <= 0.0 {
            return;
        }
        self.coins += amount;
        self.total_coins_earned += amount;
        self.evaluate_achievements(Some(AchievementType::CoinsEarned), None);
    }

    /// Credit magic essence. Non-positive amounts are ignored.
    pub fn add_magic_essence(&mut self, amount: f64) {
        if amount <= 0.0 {
            return;
        }
        self.magic_essence += amount;
        self.evaluate_achievements(Some(AchievementType::MagicEssence), None);
    }

    // ── Purchases ───────────────────────────────────────────────
    //
    // All purchases are atomic check-then-mutate: a `false` return means
    // nothing changed.

    /// Buy one unit of the named producer with coins.
    pub fn purchase_producer(&mut self, name: &str) -> Result<bool, GameError> {
        let index = self
            .find_producer(name)
            .ok_or_else(|| GameError::UnknownProducer(name.to_string()))?;
        let cost = self.producers[index].current_cost();
        if self.coins < cost {
            return Ok(false);
        }

        self.coins -= cost;
        self.producers[index].quantity += 1;
        let producer_name = self.producers[index].name.clone();
        let quantity = self.producers[index].quantity;

        self.evaluate_achievements(Some(AchievementType::TotalProducers), None);
        if !producer_name.is_empty() {
            self.evaluate_achievements(Some(AchievementType::ProducerQuantity), Some(&producer_name));
        }
        tracing::debug!(producer = %producer_name, quantity, "producer purchased");
        self.push_event(GameEvent::ProducerPurchased {
            name: producer_name,
            quantity,
        });
        Ok(true)
    }

    /// Buy the named upgrade with coins and apply its effect once.
    pub fn purchase_upgrade(&mut self, name: &str) -> Result<bool, GameError> {
        let index = self
            .find_upgrade(name)
            .ok_or_else(|| GameError::UnknownUpgrade(name.to_string()))?;
        let cost = self.upgrades[index].current_cost();
        if self.coins < cost {
            return Ok(false);
        }

        self.coins -= cost;
        let (upgrade_name, kind, effect, target, level) = {
            let upgrade = &mut self.upgrades[index];
            upgrade.level += 1;
            upgrade.is_purchased = true;
            (
                upgrade.name.clone(),
                upgrade.kind,
                upgrade.effect,
                upgrade.target_producer.clone(),
                upgrade.level,
            )
        };
        self.apply_upgrade_effect(kind, effect, &target);
        self.evaluate_achievements(Some(AchievementType::TotalUpgrades), None);
        tracing::debug!(upgrade = %upgrade_name, level, "upgrade purchased");
        self.push_event(GameEvent::UpgradePurchased {
            name: upgrade_name,
            level,
        });
        Ok(true)
    }

    fn apply_upgrade_effect(&mut self, kind: UpgradeType, effect: f64, target: &str) {
        match kind {
            UpgradeType::ClickValue => {
                self.click_value *= effect;
                self.evaluate_achievements(Some(AchievementType::ClickValue), None);
            }
            UpgradeType::ProducerEfficiency => {
                // Silent no-op when the target producer is missing.
                if let Some(index) = self.find_producer(target) {
                    self.producers[index].base_production *= effect;
                }
            }
            UpgradeType::GlobalEfficiency => {
                self.global_efficiency_multiplier *= effect;
            }
            UpgradeType::CostReduction => {
                self.cost_reduction_multiplier *= effect;
            }
            UpgradeType::MagicEssenceGain => {
                // Reserved; no effect is wired up yet.
            }
        }
    }

    /// Buy the named enhancement with magic essence, marking it purchased
    /// without attaching it anywhere.
    pub fn purchase_enhancement(&mut self, name: &str) -> Result<bool, GameError> {
        let index = self
            .find_enhancement(name)
            .ok_or_else(|| GameError::UnknownEnhancement(name.to_string()))?;
        let cost = self.enhancements[index].cost;
        if self.magic_essence < cost || self.enhancements[index].is_purchased {
            return Ok(false);
        }
        self.magic_essence -= cost;
        self.enhancements[index].is_purchased = true;
        Ok(true)
    }

    /// Buy the named enhancement with magic essence and attach it to the
    /// named producer in one step. Fails (without mutation) when essence is
    /// short or the producer already holds that enhancement.
    pub fn purchase_enhancement_for_producer(
        &mut self,
        producer: &str,
        enhancement: &str,
    ) -> Result<bool, GameError> {
        let producer_index = self
            .find_producer(producer)
            .ok_or_else(|| GameError::UnknownProducer(producer.to_string()))?;
        let enhancement_index = self
            .find_enhancement(enhancement)
            .ok_or_else(|| GameError::UnknownEnhancement(enhancement.to_string()))?;

        let cost = self.enhancements[enhancement_index].cost;
        if self.magic_essence < cost {
            return Ok(false);
        }
        if self.producers[producer_index].has_enhancement(enhancement) {
            return Ok(false);
        }

        self.magic_essence -= cost;
        self.producers[producer_index].attach_enhancement(enhancement);
        tracing::debug!(enhancement, producer, "enhancement applied");
        self.push_event(GameEvent::EnhancementApplied {
            enhancement: enhancement.to_string(),
            producer: producer.to_string(),
        });
        Ok(true)
    }

    // ── Achievements ────────────────────────────────────────────

    /// Re-evaluate locked achievements, optionally restricted to one kind
    /// and (for `ProducerQuantity`) one target producer. Crossing the
    /// threshold unlocks the achievement, stamps the time, applies its
    /// bonus once, and queues an event.
    pub fn evaluate_achievements(&mut self, kind: Option<AchievementType>, target: Option<&str>) {
        for index in 0..self.achievements.len() {
            let (a_kind, a_target, required) = {
                let achievement = &self.achievements[index];
                if achievement.is_unlocked {
                    continue;
                }
                if kind.is_some_and(|k| achievement.kind != k) {
                    continue;
                }
                (
                    achievement.kind,
                    achievement.target_producer.clone(),
                    achievement.required_value,
                )
            };
            if a_kind == AchievementType::ProducerQuantity {
                if let Some(target) = target {
                    if a_target != target {
                        continue;
                    }
                }
            }

            let value = self.metric_value(a_kind, &a_target);
            self.achievements[index].progress = value;
            if value >= required {
                self.achievements[index].unlock(Utc::now().timestamp());
                let name = self.achievements[index].name.clone();
                let bonus = self.achievements[index].bonus;
                self.apply_achievement_reward(a_kind, bonus);
                tracing::debug!(achievement = %name, bonus, "achievement unlocked");
                self.push_event(GameEvent::AchievementUnlocked { name, bonus });
            }
        }
    }

    /// Current value of the metric an achievement kind watches.
    fn metric_value(&self, kind: AchievementType, target_producer: &str) -> f64 {
        match kind {
            AchievementType::CoinsEarned => self.total_coins_earned,
            AchievementType::TotalProducers => {
                self.producers.iter().map(|p| p.quantity as f64).sum()
            }
            AchievementType::ProducerQuantity => self
                .find_producer(target_producer)
                .map(|i| self.producers[i].quantity as f64)
                .unwrap_or(0.0),
            AchievementType::TotalUpgrades => {
                self.upgrades.iter().filter(|u| u.is_purchased).count() as f64
            }
            AchievementType::ClickValue => self.click_value,
            AchievementType::MagicEssence => self.magic_essence,
            AchievementType::TimePlayed => self.time_played.as_secs_f64(),
        }
    }

    fn apply_achievement_reward(&mut self, kind: AchievementType, bonus: f64) {
        match kind {
            AchievementType::CoinsEarned
            | AchievementType::TotalProducers
            | AchievementType::ProducerQuantity
            | AchievementType::MagicEssence
            | AchievementType::TimePlayed => {
                self.global_efficiency_multiplier *= bonus;
            }
            AchievementType::TotalUpgrades => {
                self.cost_reduction_multiplier *= bonus;
            }
            AchievementType::ClickValue => {
                self.click_value *= bonus;
            }
        }
    }

    // ── Prestige ────────────────────────────────────────────────

    /// Whether lifetime earnings meet the next prestige threshold.
    pub fn can_prestige(&self) -> bool {
        self.total_coins_earned >= self.prestige.next_cost()
    }

    /// Informational score shown alongside the prestige offer:
    /// `floor(log10(lifetime / 1,000,000))`. Zero for a fresh game.
    pub fn prestige_points(&self) -> f64 {
        if self.total_coins_earned <= 0.0 {
            return 0.0;
        }
        (self.total_coins_earned / 1_000_000.0).log10().floor()
    }

    /// Reset the run in exchange for a permanent multiplier boost.
    ///
    /// Resets coins, essence, click value, producer quantities, upgrade
    /// purchased flags, and enhancement purchased/active flags. Upgrade
    /// levels, producer enhancement lists, achievements, identity,
    /// customization, lifetime earnings, and play time all survive.
    pub fn perform_prestige(&mut self) -> bool {
        if !self.can_prestige() {
            return false;
        }

        self.prestige.advance();
        self.coins = STARTING_COINS;
        self.magic_essence = STARTING_MAGIC_ESSENCE;
        self.click_value = STARTING_CLICK_VALUE;
        for producer in &mut self.producers {
            producer.quantity = 0;
        }
        for upgrade in &mut self.upgrades {
            upgrade.is_purchased = false;
        }
        for enhancement in &mut self.enhancements {
            enhancement.is_purchased = false;
            enhancement.is_active = false;
        }

        tracing::info!(level = self.prestige.level, "prestige performed");
        self.push_event(GameEvent::PrestigePerformed {
            level: self.prestige.level,
        });
        true
    }

    // ── Catalog growth ──────────────────────────────────────────

    pub fn add_producer(&mut self, producer: Producer) {
        self.producers.push(producer);
    }

    pub fn add_upgrade(&mut self, upgrade: Upgrade) {
        self.upgrades.push(upgrade);
    }

    pub fn add_achievement(&mut self, achievement: Achievement) {
        self.achievements.push(achievement);
    }

    /// Add an enhancement to the pool unless one with that name exists.
    pub fn add_enhancement(&mut self, enhancement: Enhancement) {
        if self.find_enhancement(&enhancement.name).is_none() {
            self.enhancements.push(enhancement);
        }
    }

    // ── Events ──────────────────────────────────────────────────

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Take all pending events, oldest first. The queue is bounded; when a
    /// host never drains, the oldest events are dropped.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    /// Discard pending events (used when state is replaced wholesale).
    pub(crate) fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Record that this state was just persisted.
    pub fn mark_saved(&mut self, timestamp: i64) {
        self.last_save_time = timestamp;
    }
}
