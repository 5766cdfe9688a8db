//! JSON persistence helpers for the ~/.neon-snake/ directory and the
//! key-value settings store.

use crate::error::StoreError;
use crate::profile::store::KeyValueStore;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

const APP_DIR: &str = ".neon-snake";

/// Get the ~/.neon-snake/ directory path, creating it if needed.
pub fn app_dir() -> Result<PathBuf, StoreError> {
    let home_dir = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
    let dir = home_dir.join(APP_DIR);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.neon-snake/.
pub fn save_path(filename: &str) -> Result<PathBuf, StoreError> {
    Ok(app_dir()?.join(filename))
}

/// Load a JSON value stored under `key`, returning `T::default()` if missing
/// or invalid.
pub fn load_json_or_default<T, S>(store: &S, key: &str) -> T
where
    T: Default + serde::de::DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key) else {
        return T::default();
    };
    serde_json::from_str(&raw).unwrap_or_else(|e| {
        warn!(key, error = %e, "unreadable setting, using default");
        T::default()
    })
}

/// Store a value as compact JSON under `key`.
pub fn save_json<T, S>(store: &mut S, key: &str, data: &T) -> Result<(), StoreError>
where
    T: serde::Serialize,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_string(data)?;
    store.set(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::store::MemoryStore;

    #[test]
    fn test_load_missing_returns_default() {
        let store = MemoryStore::new();
        let val: Vec<String> = load_json_or_default(&store, "nonexistent");
        assert!(val.is_empty());
    }

    #[test]
    fn test_load_garbage_returns_default() {
        let mut store = MemoryStore::new();
        store.set("high_score", "not a number").unwrap();
        let val: u32 = load_json_or_default(&store, "high_score");
        assert_eq!(val, 0);
    }

    #[test]
    fn test_save_and_load() {
        let mut store = MemoryStore::new();
        let data = vec!["hello".to_string(), "world".to_string()];
        save_json(&mut store, "greeting", &data).unwrap();

        let loaded: Vec<String> = load_json_or_default(&store, "greeting");
        assert_eq!(loaded, data);
    }
}
