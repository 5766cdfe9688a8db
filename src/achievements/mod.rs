//! Achievement system module.
//!
//! Achievements are unlocked once per profile and stored under the
//! `achievements` key of the settings file. The daily challenge lives in
//! [`daily`].

pub mod daily;
pub mod data;
pub mod types;

pub use data::{get_achievement_def, ALL_ACHIEVEMENTS};
pub use types::{AchievementDef, AchievementId, Achievements, Requirement};

/// The numbers achievements and challenges are checked against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunProgress {
    pub score: u32,
    pub level: u32,
    pub combo: u32,
    pub lifetime_kills: u64,
    pub dash_used: bool,
}

impl Requirement {
    pub fn is_met(&self, progress: &RunProgress) -> bool {
        match *self {
            Requirement::Score(n) => progress.score >= n,
            Requirement::Level(n) => progress.level >= n,
            Requirement::Combo(n) => progress.combo >= n,
            Requirement::LifetimeKills(n) => progress.lifetime_kills >= n,
        }
    }
}

/// Unlock every achievement the progress now satisfies.
///
/// Returns the newly unlocked definitions in display order.
pub fn check_achievements(
    achievements: &mut Achievements,
    progress: &RunProgress,
) -> Vec<&'static AchievementDef> {
    ALL_ACHIEVEMENTS
        .iter()
        .filter(|def| def.requirement.is_met(progress))
        .filter(|def| achievements.unlock(def.id))
        .collect()
}
