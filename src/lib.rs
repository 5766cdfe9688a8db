//! Neon Snake - Terminal Snake Arcade Library
//!
//! This module exposes the simulation, progression, and persistence layers
//! for testing and external use.

pub mod achievements;
pub mod audio;
pub mod core;
pub mod error;
pub mod profile;
pub mod snake;
pub mod utils;
