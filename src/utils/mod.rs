//! Utility modules: on-disk persistence helpers and log setup.

pub mod logging;
pub mod persistence;

pub use logging::init_logging;
pub use persistence::{app_dir, load_json_or_default, save_json, save_path};
