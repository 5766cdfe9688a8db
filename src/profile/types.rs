//! The persisted player profile: wallet, unlocks, cosmetics, and records.

use super::cosmetics::{HeadShape, Skin};
use super::store::KeyValueStore;
use crate::achievements::daily::DailyChallenge;
use crate::achievements::Achievements;
use crate::core::constants::LEADERBOARD_SIZE;
use crate::error::StoreError;
use crate::snake::types::Upgrades;
use crate::utils::persistence::{load_json_or_default, save_json};
use serde::{Deserialize, Serialize};

/// Store keys, one per persisted profile field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileKey {
    HighScore,
    Currency,
    Upgrades,
    Skin,
    Head,
    Leaderboard,
    Achievements,
    Muted,
    TotalEnemiesKilled,
    DailyChallenge,
}

impl ProfileKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileKey::HighScore => "high_score",
            ProfileKey::Currency => "currency",
            ProfileKey::Upgrades => "upgrades",
            ProfileKey::Skin => "skin",
            ProfileKey::Head => "head",
            ProfileKey::Leaderboard => "leaderboard",
            ProfileKey::Achievements => "achievements",
            ProfileKey::Muted => "muted",
            ProfileKey::TotalEnemiesKilled => "total_enemies_killed",
            ProfileKey::DailyChallenge => "daily_challenge",
        }
    }
}

/// One row of the top-five table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub score: u32,
    pub date: String,
    #[serde(default)]
    pub skin: Skin,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub high_score: u32,
    pub currency: u32,
    pub upgrades: Upgrades,
    pub skin: Skin,
    pub head: HeadShape,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub achievements: Achievements,
    pub muted: bool,
    pub total_enemies_killed: u64,
    pub daily_challenge: Option<DailyChallenge>,
}

impl Profile {
    /// Read every field from the store, defaulting anything missing or invalid.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let mut leaderboard: Vec<LeaderboardEntry> =
            load_json_or_default(store, ProfileKey::Leaderboard.as_str());
        sort_leaderboard(&mut leaderboard);
        Self {
            high_score: load_json_or_default(store, ProfileKey::HighScore.as_str()),
            currency: load_json_or_default(store, ProfileKey::Currency.as_str()),
            upgrades: load_json_or_default(store, ProfileKey::Upgrades.as_str()),
            skin: load_json_or_default(store, ProfileKey::Skin.as_str()),
            head: load_json_or_default(store, ProfileKey::Head.as_str()),
            leaderboard,
            achievements: load_json_or_default(store, ProfileKey::Achievements.as_str()),
            muted: load_json_or_default(store, ProfileKey::Muted.as_str()),
            total_enemies_killed: load_json_or_default(
                store,
                ProfileKey::TotalEnemiesKilled.as_str(),
            ),
            daily_challenge: load_json_or_default(store, ProfileKey::DailyChallenge.as_str()),
        }
    }

    /// Write one field back to the store.
    pub fn save<S: KeyValueStore + ?Sized>(
        &self,
        store: &mut S,
        key: ProfileKey,
    ) -> Result<(), StoreError> {
        let k = key.as_str();
        match key {
            ProfileKey::HighScore => save_json(store, k, &self.high_score),
            ProfileKey::Currency => save_json(store, k, &self.currency),
            ProfileKey::Upgrades => save_json(store, k, &self.upgrades),
            ProfileKey::Skin => save_json(store, k, &self.skin),
            ProfileKey::Head => save_json(store, k, &self.head),
            ProfileKey::Leaderboard => save_json(store, k, &self.leaderboard),
            ProfileKey::Achievements => save_json(store, k, &self.achievements),
            ProfileKey::Muted => save_json(store, k, &self.muted),
            ProfileKey::TotalEnemiesKilled => save_json(store, k, &self.total_enemies_killed),
            ProfileKey::DailyChallenge => save_json(store, k, &self.daily_challenge),
        }
    }

    /// Insert a finished run into the leaderboard, keeping the best five.
    /// Returns the zero-based rank if the run made the table.
    pub fn record_run(&mut self, score: u32, date: &str, skin: Skin) -> Option<usize> {
        let rank = self
            .leaderboard
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.leaderboard.len());
        if rank >= LEADERBOARD_SIZE {
            return None;
        }
        self.leaderboard.insert(
            rank,
            LeaderboardEntry {
                score,
                date: date.to_string(),
                skin,
            },
        );
        self.leaderboard.truncate(LEADERBOARD_SIZE);
        Some(rank)
    }

    /// Raise the high score. Returns true if it changed.
    pub fn update_high_score(&mut self, score: u32) -> bool {
        if score > self.high_score {
            self.high_score = score;
            true
        } else {
            false
        }
    }
}

fn sort_leaderboard(entries: &mut Vec<LeaderboardEntry>) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(LEADERBOARD_SIZE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::store::MemoryStore;

    #[test]
    fn test_empty_store_defaults() {
        let profile = Profile::load(&MemoryStore::new());
        assert_eq!(profile, Profile::default());
        assert_eq!(profile.skin, Skin::Default);
        assert!(profile.daily_challenge.is_none());
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let mut store = MemoryStore::new();
        store.set("currency", "lots").unwrap();
        store.set("skin", "\"rainbow\"").unwrap();
        store.set("high_score", "77").unwrap();
        let profile = Profile::load(&store);
        assert_eq!(profile.currency, 0);
        assert_eq!(profile.skin, Skin::Default);
        assert_eq!(profile.high_score, 77);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let mut profile = Profile::default();
        profile.currency = 320;
        profile.upgrades.magnet = true;
        profile.head = HeadShape::Orb;
        for key in [ProfileKey::Currency, ProfileKey::Upgrades, ProfileKey::Head] {
            profile.save(&mut store, key).unwrap();
        }
        let loaded = Profile::load(&store);
        assert_eq!(loaded.currency, 320);
        assert!(loaded.upgrades.magnet);
        assert_eq!(loaded.head, HeadShape::Orb);
    }

    #[test]
    fn test_leaderboard_keeps_top_five_descending() {
        let mut profile = Profile::default();
        for score in [50, 300, 10, 200, 120, 90] {
            profile.record_run(score, "2024-01-01", Skin::Lava);
        }
        let scores: Vec<u32> = profile.leaderboard.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![300, 200, 120, 90, 50]);
        assert_eq!(profile.record_run(5, "2024-01-02", Skin::Gold), None);
        assert_eq!(profile.record_run(250, "2024-01-02", Skin::Gold), Some(1));
    }

    #[test]
    fn test_high_score_only_rises() {
        let mut profile = Profile::default();
        assert!(profile.update_high_score(40));
        assert!(!profile.update_high_score(40));
        assert!(!profile.update_high_score(10));
        assert_eq!(profile.high_score, 40);
    }
}
