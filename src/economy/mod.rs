//! Economy entities: producers, upgrades, enhancements, achievements.

pub mod achievement;
pub mod enhancement;
pub mod producer;
pub mod upgrade;

pub use achievement::{Achievement, AchievementType};
pub use enhancement::{Enhancement, EnhancementType};
pub use producer::Producer;
pub use upgrade::{Upgrade, UpgradeType};
