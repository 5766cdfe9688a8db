//! Events produced by the simulation for the presentation and audio layers.

use super::death::RunSummary;
use super::powerups::DashRejection;
use super::types::{FoodKind, PowerUp};
use crate::achievements::daily::ChallengeId;
use crate::achievements::AchievementId;

/// A single thing that happened during a frame.
///
/// The simulation pushes these onto [`SnakeGame::events`](super::SnakeGame);
/// the session drains them once per frame and maps them to sound cues and
/// on-screen messages. The simulation never touches either directly.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    RunStarted,

    // ── Eating ──────────────────────────────────────────────────
    FoodEaten {
        kind: FoodKind,
        points: u32,
        combo: u32,
    },
    PowerUpStarted {
        kind: PowerUp,
    },
    PowerUpExpired {
        kind: PowerUp,
    },
    OverloadStarted,
    OverloadEnded,

    // ── Pickups and hazards ─────────────────────────────────────
    StarCollected,
    BossFoodSpawned,
    BossFoodEaten {
        points: u32,
    },
    BossFoodExpired,
    EnemyKilled,
    ShieldBroken,
    /// A wall hit was absorbed by invulnerability.
    WallBump,

    // ── Dash ────────────────────────────────────────────────────
    DashActivated,
    DashRejected(DashRejection),

    // ── Progression ─────────────────────────────────────────────
    LevelUp {
        level: u32,
    },
    AchievementUnlocked {
        id: AchievementId,
        reward: u32,
    },
    ChallengeCompleted {
        id: ChallengeId,
        bonus: u32,
    },

    // ── Death ───────────────────────────────────────────────────
    Died,
    GameOver(RunSummary),
}
