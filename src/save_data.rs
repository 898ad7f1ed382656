//! The persisted snapshot format and its (de)materialization.
//!
//! `SaveData` is a flat, versionless record. Every field carries a serde
//! default so older or partial payloads still deserialize. The two global
//! multipliers default to 0 when absent; the writer always emits them, so
//! that zero only surfaces for hand-edited payloads.

use crate::core::game_state::GameState;
use crate::economy::{Achievement, Enhancement, Producer, Upgrade};
use crate::prestige::Prestige;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Everything a save file holds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveData {
    pub coins: f64,
    pub magic_essence: f64,
    pub click_value: f64,
    pub player_name: String,
    pub company_name: String,
    pub selected_background: String,
    pub selected_specialization: String,
    pub time_played: Duration,
    pub total_coins_earned: f64,
    pub global_efficiency_multiplier: f64,
    pub cost_reduction_multiplier: f64,
    pub prestige_level: u32,
    /// Unix timestamp of the save; drives offline accrual on the next load.
    pub last_save_time: i64,
    pub producers: Vec<Producer>,
    pub upgrades: Vec<Upgrade>,
    pub achievements: Vec<Achievement>,
    pub enhancements: Vec<Enhancement>,
}

impl GameState {
    /// Capture a full, consistent snapshot of this state.
    ///
    /// Achievement progress is stored as the normalized fraction the
    /// display layer shows, not the raw metric value.
    pub fn snapshot(&self) -> SaveData {
        SaveData {
            coins: self.coins,
            magic_essence: self.magic_essence,
            click_value: self.click_value,
            player_name: self.player_name.clone(),
            company_name: self.company_name.clone(),
            selected_background: self.selected_background.clone(),
            selected_specialization: self.selected_specialization.clone(),
            time_played: self.time_played,
            total_coins_earned: self.total_coins_earned,
            global_efficiency_multiplier: self.global_efficiency_multiplier,
            cost_reduction_multiplier: self.cost_reduction_multiplier,
            prestige_level: self.prestige.level,
            last_save_time: self.last_save_time,
            producers: self.producers.clone(),
            upgrades: self.upgrades.clone(),
            achievements: self
                .achievements
                .iter()
                .map(|a| {
                    let mut saved = a.clone();
                    saved.progress = a.progress_fraction();
                    saved
                })
                .collect(),
            enhancements: self.enhancements.clone(),
        }
    }

    /// Replace this state wholesale with the contents of a snapshot.
    ///
    /// Collections are cleared and repopulated (never merged), the
    /// prestige multiplier family is rebuilt from the saved level, and
    /// each producer's enhancement list is re-linked against the loaded
    /// pool — names with no matching pool entry are dropped. Pending
    /// events are discarded along with the old state.
    pub fn restore(&mut self, data: SaveData) {
        self.coins = data.coins;
        self.magic_essence = data.magic_essence;
        self.click_value = data.click_value;
        self.player_name = data.player_name;
        self.company_name = data.company_name;
        self.selected_background = data.selected_background;
        self.selected_specialization = data.selected_specialization;
        self.time_played = data.time_played;
        self.total_coins_earned = data.total_coins_earned;
        self.global_efficiency_multiplier = data.global_efficiency_multiplier;
        self.cost_reduction_multiplier = data.cost_reduction_multiplier;
        self.prestige = Prestige::from_level(data.prestige_level);
        self.last_save_time = data.last_save_time;

        self.enhancements = data.enhancements;
        self.producers = data.producers;
        self.upgrades = data.upgrades;
        self.achievements = data.achievements;

        let pool: Vec<String> = self.enhancements.iter().map(|e| e.name.clone()).collect();
        for producer in &mut self.producers {
            producer.enhancements.retain(|name| pool.contains(name));
        }

        self.clear_events();
    }

    /// Build a state directly from a snapshot.
    pub fn from_save(data: SaveData) -> Self {
        let mut state = GameState::new();
        state.restore(data);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::{AchievementType, EnhancementType, UpgradeType};

    fn populated_state() -> GameState {
        let mut state = GameState::new();
        state.coins = 1_234.5;
        state.magic_essence = 67.8;
        state.click_value = 4.0;
        state.player_name = "Wren".to_string();
        state.company_name = "Wren & Co".to_string();
        state.selected_background = "Dusk".to_string();
        state.selected_specialization = "Producer".to_string();
        state.time_played = Duration::from_secs(7_200);
        state.total_coins_earned = 99_999.0;
        state.global_efficiency_multiplier = 1.6;
        state.cost_reduction_multiplier = 0.9;
        state.producers[0].quantity = 7;
        state.producers[0].enhancements.push("Gleam Polish".to_string());
        state.upgrades[0].is_purchased = true;
        state.upgrades[0].level = 2;
        state.enhancements[0].is_purchased = true;
        state
    }

    #[test]
    fn test_snapshot_restore_round_trip() {
        let original = populated_state();
        let data = original.snapshot();

        let json = serde_json::to_string_pretty(&data).unwrap();
        let parsed: SaveData = serde_json::from_str(&json).unwrap();
        let loaded = GameState::from_save(parsed);

        assert_eq!(loaded.coins, original.coins);
        assert_eq!(loaded.magic_essence, original.magic_essence);
        assert_eq!(loaded.click_value, original.click_value);
        assert_eq!(loaded.player_name, original.player_name);
        assert_eq!(loaded.company_name, original.company_name);
        assert_eq!(loaded.selected_background, original.selected_background);
        assert_eq!(loaded.selected_specialization, original.selected_specialization);
        assert_eq!(loaded.time_played, original.time_played);
        assert_eq!(loaded.total_coins_earned, original.total_coins_earned);
        assert_eq!(loaded.global_efficiency_multiplier, original.global_efficiency_multiplier);
        assert_eq!(loaded.producers.len(), original.producers.len());
        assert_eq!(loaded.producers[0].quantity, 7);
        assert_eq!(loaded.producers[0].enhancements, vec!["Gleam Polish".to_string()]);
        assert_eq!(loaded.upgrades.len(), original.upgrades.len());
        assert!(loaded.upgrades[0].is_purchased);
        assert_eq!(loaded.upgrades[0].level, 2);
        assert_eq!(loaded.achievements.len(), original.achievements.len());
        assert_eq!(loaded.enhancements.len(), original.enhancements.len());
        assert!(loaded.enhancements[0].is_purchased);
    }

    #[test]
    fn test_restore_rebuilds_prestige_family_from_level() {
        let mut state = populated_state();
        state.prestige.advance();
        state.prestige.advance();
        let data = state.snapshot();
        assert_eq!(data.prestige_level, 2);

        let loaded = GameState::from_save(data);
        assert_eq!(loaded.prestige, Prestige::from_level(2));
        assert!((loaded.prestige.coin_multiplier - 1.15_f64.powi(2)).abs() < 1e-9);
    }

    #[test]
    fn test_restore_drops_dangling_enhancement_links() {
        let mut data = populated_state().snapshot();
        data.producers[0].enhancements = vec![
            "Gleam Polish".to_string(),
            "Never Existed".to_string(),
        ];

        let loaded = GameState::from_save(data);
        assert_eq!(loaded.producers[0].enhancements, vec!["Gleam Polish".to_string()]);
    }

    #[test]
    fn test_restore_replaces_rather_than_merges() {
        let data = SaveData {
            producers: vec![Producer::new("Lone Stand", "", 10.0, 1.0)],
            upgrades: vec![Upgrade::new("Only One", "", 10.0, 2.0, UpgradeType::ClickValue)],
            achievements: vec![Achievement::new("Sole", "", 1.0, AchievementType::CoinsEarned, 1.1)],
            enhancements: vec![Enhancement::new("Single", "", 10.0, 0.1, EnhancementType::Efficiency)],
            global_efficiency_multiplier: 1.0,
            cost_reduction_multiplier: 1.0,
            ..SaveData::default()
        };

        // Starting from a fully populated catalog
        let loaded = GameState::from_save(data);
        assert_eq!(loaded.producers.len(), 1);
        assert_eq!(loaded.upgrades.len(), 1);
        assert_eq!(loaded.achievements.len(), 1);
        assert_eq!(loaded.enhancements.len(), 1);
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        // A minimal payload deserializes with documented defaults
        let data: SaveData = serde_json::from_str(r#"{ "coins": 42.0 }"#).unwrap();

        assert_eq!(data.coins, 42.0);
        assert_eq!(data.magic_essence, 0.0);
        assert_eq!(data.click_value, 0.0);
        assert_eq!(data.player_name, "");
        assert_eq!(data.time_played, Duration::ZERO);
        assert_eq!(data.prestige_level, 0);
        assert!(data.producers.is_empty());
        // Absent global multipliers read as zero, not one
        assert_eq!(data.global_efficiency_multiplier, 0.0);
        assert_eq!(data.cost_reduction_multiplier, 0.0);
    }

    #[test]
    fn test_missing_entity_multipliers_default_to_one() {
        let json = r#"{
            "producers": [
                { "name": "Charm Stall", "base_cost": 100.0, "base_production": 1.0, "quantity": 3 }
            ]
        }"#;
        let data: SaveData = serde_json::from_str(json).unwrap();

        let producer = &data.producers[0];
        assert_eq!(producer.quantity, 3);
        assert_eq!(producer.efficiency_multiplier, 1.0);
        assert_eq!(producer.cost_reduction_multiplier, 1.0);
        assert_eq!(producer.quantity_multiplier, 1.0);
    }

    #[test]
    fn test_snapshot_normalizes_achievement_progress() {
        let mut state = populated_state();
        state.achievements[0].progress = 50.0;
        state.achievements[0].required_value = 100.0;

        let data = state.snapshot();
        assert_eq!(data.achievements[0].progress, 0.5);
    }
}
