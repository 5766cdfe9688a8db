//! Achievement system types and data structures.

use serde::{Deserialize, Serialize};

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    FirstBlood,
    SpeedRunner,
    ComboKing,
    EnemySlayer,
    Survivor,
    SnakeMaster,
}

/// The condition an achievement waits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Score(u32),
    Level(u32),
    Combo(u32),
    /// Enemies destroyed across every run.
    LifetimeKills(u64),
}

/// Static definition of an achievement.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub requirement: Requirement,
    /// Currency credited on unlock.
    pub reward: u32,
    pub icon: &'static str,
}

/// Unlocked achievements (persisted as a plain id list).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Achievements {
    pub unlocked: Vec<AchievementId>,
}

impl Achievements {
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.contains(&id)
    }

    /// Unlock an achievement. Returns true if newly unlocked.
    pub fn unlock(&mut self, id: AchievementId) -> bool {
        if self.is_unlocked(id) {
            return false;
        }
        self.unlocked.push(id);
        true
    }

    pub fn total_count(&self) -> usize {
        use super::data::ALL_ACHIEVEMENTS;
        ALL_ACHIEVEMENTS.len()
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }
}
