//! Player profile persisted between runs: currency, upgrades, cosmetics,
//! leaderboard, achievements, and settings.

pub mod cosmetics;
pub mod shop;
pub mod store;
pub mod types;

pub use cosmetics::{HeadShape, Palette, Skin};
pub use shop::{buy_upgrade, PurchaseError, UpgradeId};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
pub use types::{LeaderboardEntry, Profile, ProfileKey};
