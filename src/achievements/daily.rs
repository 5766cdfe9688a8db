//! Daily challenge: one goal per calendar date, worth a bonus of half the
//! run's score when completed.

use super::RunProgress;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeId {
    ScoreSeeker,
    LevelUp,
    HungrySnake,
    ComboMaster,
    PureSkill,
    Survivor,
}

impl ChallengeId {
    pub const ALL: [ChallengeId; 6] = [
        ChallengeId::ScoreSeeker,
        ChallengeId::LevelUp,
        ChallengeId::HungrySnake,
        ChallengeId::ComboMaster,
        ChallengeId::PureSkill,
        ChallengeId::Survivor,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::ScoreSeeker => "Score Seeker",
            Self::LevelUp => "Level Up",
            Self::HungrySnake => "Hungry Snake",
            Self::ComboMaster => "Combo Master",
            Self::PureSkill => "Pure Skill",
            Self::Survivor => "Survivor",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ScoreSeeker => "Reach 500 points in a single run",
            Self::LevelUp => "Reach Level 5",
            Self::HungrySnake => "Eat 50 food items",
            Self::ComboMaster => "Reach a 5x combo",
            Self::PureSkill => "Reach 200 points without using dash",
            Self::Survivor => "Survive to Level 10",
        }
    }

    /// Whether the current run satisfies this challenge.
    pub fn is_met(&self, progress: &RunProgress) -> bool {
        match self {
            Self::ScoreSeeker => progress.score >= 500,
            Self::LevelUp => progress.level >= 5,
            // Approximated from score, ten points per item
            Self::HungrySnake => progress.score / 10 >= 50,
            Self::ComboMaster => progress.combo >= 5,
            Self::PureSkill => progress.score >= 200 && !progress.dash_used,
            Self::Survivor => progress.level >= 10,
        }
    }
}

/// Today's challenge as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyChallenge {
    /// Local calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub id: ChallengeId,
    pub completed: bool,
}

impl DailyChallenge {
    /// Pick a fresh challenge for `date`.
    pub fn roll<R: Rng>(date: &str, rng: &mut R) -> Self {
        Self {
            date: date.to_string(),
            id: ChallengeId::ALL[rng.gen_range(0..ChallengeId::ALL.len())],
            completed: false,
        }
    }

    /// Keep the saved challenge if it is for `today`, otherwise roll a new one.
    /// Returns the challenge and whether it changed.
    pub fn for_today<R: Rng>(saved: Option<DailyChallenge>, today: &str, rng: &mut R) -> (Self, bool) {
        match saved {
            Some(challenge) if challenge.date == today => (challenge, false),
            _ => (Self::roll(today, rng), true),
        }
    }

    /// Mark the challenge completed if the run meets it. Returns the currency
    /// bonus on the transition only.
    pub fn check(&mut self, progress: &RunProgress) -> Option<u32> {
        if self.completed || !self.id.is_met(progress) {
            return None;
        }
        self.completed = true;
        Some(progress.score / 2)
    }
}

/// Today's date on the local calendar.
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
