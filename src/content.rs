//! Starting catalog: the producers, upgrades, achievements, and
//! enhancements a fresh playthrough begins with.
//!
//! Producer costs sit on a x15 curve so each tier is a meaningful wall;
//! production rates rise a little slower, which keeps earlier tiers
//! relevant as filler purchases.

use crate::economy::{
    Achievement, AchievementType, Enhancement, EnhancementType, Producer, Upgrade, UpgradeType,
};

/// The ten purchasable producers, cheapest first.
pub fn starting_producers() -> Vec<Producer> {
    vec![
        Producer::new("Street Hawker", "A novice peddler of minor charms", 15.0, 0.1),
        Producer::new("Charm Stall", "A fixed stall trading enchanted trinkets", 225.0, 1.0),
        Producer::new("Potion Cart", "Brews and sells tonics on the move", 3_375.0, 8.0),
        Producer::new("Scroll Scriptorium", "Copies sellable spell scrolls day and night", 50_625.0, 47.0),
        Producer::new("Enchanted Counter", "A counter that haggles on its own", 759_375.0, 260.0),
        Producer::new("Pocket Bazaar", "A folded-space market open around the clock", 11_390_625.0, 1_400.0),
        Producer::new("Familiar Courier", "A bound familiar running trade routes", 170_859_375.0, 7_800.0),
        Producer::new("Portal Tollhouse", "Collects tariffs on planar traffic", 2_562_890_625.0, 44_000.0),
        Producer::new("Golem Workhouse", "Tireless constructs mass-producing wares", 38_443_359_375.0, 260_000.0),
        Producer::new("Astral Exchange", "A nexus clearing trades across realms", 576_650_390_625.0, 1_600_000.0),
    ]
}

/// The upgrade catalog: click, global, and cost upgrades plus one mastery
/// upgrade per producer (costing five times the producer's base price).
pub fn starting_upgrades(producers: &[Producer]) -> Vec<Upgrade> {
    let mut upgrades = vec![
        // Click value
        Upgrade::new("Sharper Haggling", "Trades are worth 50% more", 100.0, 1.5, UpgradeType::ClickValue),
        Upgrade::new("Silver Tongue", "Trades are worth twice as much", 500.0, 2.0, UpgradeType::ClickValue),
        Upgrade::new("Words of Binding", "Trades are worth three times as much", 2_500.0, 3.0, UpgradeType::ClickValue),
        // Global efficiency
        Upgrade::new("Trade Pact", "All production increased by 25%", 1_000.0, 1.25, UpgradeType::GlobalEfficiency),
        Upgrade::new("Leyline Routing", "All production doubled", 5_000.0, 2.0, UpgradeType::GlobalEfficiency),
        Upgrade::new("Planar Franchise", "All production tripled", 25_000.0, 3.0, UpgradeType::GlobalEfficiency),
        // Cost reduction
        Upgrade::new("Bulk Ledgers", "Producer costs reduced by 10%", 2_000.0, 0.9, UpgradeType::CostReduction),
        Upgrade::new("Sealed Contracts", "Producer costs reduced by 25%", 10_000.0, 0.75, UpgradeType::CostReduction),
        Upgrade::new("Favored Patron", "Producer costs halved", 50_000.0, 0.5, UpgradeType::CostReduction),
    ];

    for producer in producers {
        upgrades.push(Upgrade::for_producer(
            &format!("{} Mastery", producer.name),
            &format!("Doubles {} production", producer.name),
            producer.base_cost * 5.0,
            2.0,
            UpgradeType::ProducerEfficiency,
            &producer.name,
        ));
    }

    upgrades
}

/// Seventeen milestones across every tracked metric.
pub fn starting_achievements() -> Vec<Achievement> {
    vec![
        // Coin milestones
        Achievement::new("First Sale", "Earn your first coin", 1.0, AchievementType::CoinsEarned, 1.1),
        Achievement::new("Pocket Change", "Earn 100 coins", 100.0, AchievementType::CoinsEarned, 1.1),
        Achievement::new("Steady Custom", "Earn 1,000 coins", 1_000.0, AchievementType::CoinsEarned, 1.2),
        Achievement::new("Merchant of Note", "Earn 10,000 coins", 10_000.0, AchievementType::CoinsEarned, 1.3),
        Achievement::new("Coin Baron", "Earn 100,000 coins", 100_000.0, AchievementType::CoinsEarned, 1.5),
        // Producer milestones
        Achievement::new("Open for Business", "Own your first producer", 1.0, AchievementType::TotalProducers, 1.1),
        Achievement::new("Growing Concern", "Own 10 producers", 10.0, AchievementType::TotalProducers, 1.2),
        Achievement::new("Trade Empire", "Own 50 producers", 50.0, AchievementType::TotalProducers, 1.3),
        // Upgrade milestones
        Achievement::new("First Improvement", "Purchase your first upgrade", 1.0, AchievementType::TotalUpgrades, 1.1),
        Achievement::new("Refined Operation", "Purchase 5 upgrades", 5.0, AchievementType::TotalUpgrades, 1.2),
        Achievement::new("Perfected Craft", "Purchase 10 upgrades", 10.0, AchievementType::TotalUpgrades, 1.3),
        // Click value milestones
        Achievement::new("Firm Handshake", "Reach a trade value of 10", 10.0, AchievementType::ClickValue, 1.1),
        Achievement::new("Golden Touch", "Reach a trade value of 100", 100.0, AchievementType::ClickValue, 1.2),
        Achievement::new("Midas Dealing", "Reach a trade value of 1,000", 1_000.0, AchievementType::ClickValue, 1.3),
        // Time played milestones
        Achievement::new("Apprentice Hours", "Play for 1 hour", 3_600.0, AchievementType::TimePlayed, 1.1),
        Achievement::new("Journeyman Hours", "Play for 5 hours", 18_000.0, AchievementType::TimePlayed, 1.2),
        Achievement::new("Master Hours", "Play for 10 hours", 36_000.0, AchievementType::TimePlayed, 1.3),
    ]
}

/// Six enhancements, two per kind, priced in magic essence.
pub fn starting_enhancements() -> Vec<Enhancement> {
    vec![
        Enhancement::new("Gleam Polish", "Base production up 25%", 100.0, 1.25, EnhancementType::Efficiency),
        Enhancement::new("Attuned Wares", "Base production up 50%", 500.0, 1.5, EnhancementType::Efficiency),
        Enhancement::new("Thrifty Sigil", "Base cost down 15%", 200.0, 0.85, EnhancementType::CostReduction),
        Enhancement::new("Warded Warehouse", "Base cost down 30%", 1_000.0, 0.7, EnhancementType::CostReduction),
        Enhancement::new("Twin Stock", "Quantity bonus up 20%", 300.0, 1.2, EnhancementType::QuantityBonus),
        Enhancement::new("Legion Stock", "Quantity bonus up 40%", 1_500.0, 1.4, EnhancementType::QuantityBonus),
    ]
}
