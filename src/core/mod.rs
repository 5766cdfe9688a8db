//! Frame timing, configuration, tuning constants, and the session loop.

pub mod config;
pub mod constants;
pub mod game_loop;
pub mod timing;

pub use config::GameConfig;
pub use game_loop::{FrameResult, GameLoop, Session};
pub use timing::{effective_interval, lerp_fraction, FrameClock, FrameTiming};
