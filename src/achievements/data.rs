//! Static achievement definitions.

use super::types::{AchievementDef, AchievementId, Requirement};

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: AchievementId::FirstBlood,
        name: "First Blood",
        description: "Score your first 100 points",
        requirement: Requirement::Score(100),
        reward: 50,
        icon: "🎯",
    },
    AchievementDef {
        id: AchievementId::SpeedRunner,
        name: "Speed Runner",
        description: "Reach Level 5",
        requirement: Requirement::Level(5),
        reward: 100,
        icon: "⚡",
    },
    AchievementDef {
        id: AchievementId::ComboKing,
        name: "Combo King",
        description: "Get a 10x combo",
        requirement: Requirement::Combo(10),
        reward: 150,
        icon: "🔥",
    },
    AchievementDef {
        id: AchievementId::EnemySlayer,
        name: "Enemy Slayer",
        description: "Destroy 50 enemies",
        requirement: Requirement::LifetimeKills(50),
        reward: 200,
        icon: "💀",
    },
    AchievementDef {
        id: AchievementId::Survivor,
        name: "Survivor",
        description: "Reach Level 10",
        requirement: Requirement::Level(10),
        reward: 250,
        icon: "🛡",
    },
    AchievementDef {
        id: AchievementId::SnakeMaster,
        name: "Snake Master",
        description: "Score 1000 points",
        requirement: Requirement::Score(1000),
        reward: 500,
        icon: "👑",
    },
];

/// Look up an achievement definition by id.
pub fn get_achievement_def(id: AchievementId) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|a| a.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_id_has_a_definition() {
        for id in [
            AchievementId::FirstBlood,
            AchievementId::SpeedRunner,
            AchievementId::ComboKing,
            AchievementId::EnemySlayer,
            AchievementId::Survivor,
            AchievementId::SnakeMaster,
        ] {
            assert!(get_achievement_def(id).is_some(), "{id:?} missing");
        }
    }

    #[test]
    fn test_rewards() {
        let total: u32 = ALL_ACHIEVEMENTS.iter().map(|a| a.reward).sum();
        assert_eq!(total, 50 + 100 + 150 + 200 + 250 + 500);
    }
}
