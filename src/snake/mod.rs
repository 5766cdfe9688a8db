//! Snake simulation: grid, entities, the per-tick step, and its sub-systems.

pub mod death;
pub mod enemies;
pub mod events;
pub mod grid;
pub mod interpolation;
pub mod logic;
pub mod powerups;
pub mod spawn;
pub mod types;

pub use death::{finish_game_over, force_game_over, game_over_due, trigger_death, RunSummary};
pub use enemies::update_enemies;
pub use events::GameEvent;
pub use grid::Grid;
pub use logic::{process_input, snapshot_previous, step, SnakeInput, StepContext};
pub use powerups::{activate_dash, fire_due_timers, recover_time_scale, DashRejection};
pub use types::*;
