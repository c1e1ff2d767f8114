//! Key-value persistence seam.
//!
//! Engines never see a [`Storage`]; the session adapters read and write through the
//! [`load`] and [`save`] helpers, which swallow every failure after logging it.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Key holding the best Snake score as a JSON integer.
pub const HIGH_SCORE_KEY: &str = "snake-high-score";

/// Key holding the in-progress Wordle game.
pub const WORDLE_STATE_KEY: &str = "wordle-state";

/// Key holding the Wordle statistics.
pub const WORDLE_STATS_KEY: &str = "wordle-stats";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("Storage write rejected: {0}")]
    WriteRejected(String),
}

/// Opaque string store, modelled after the browser's local storage.
pub trait Storage {
    fn get(&self, key: &str) -> core::result::Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: String) -> core::result::Result<(), StorageError>;
}

/// Reads and decodes a value, any failure is logged and reported as absent.
pub fn load<T: DeserializeOwned>(storage: &impl Storage, key: &str) -> Option<T> {
    let raw = match storage.get(key) {
        Ok(raw) => raw?,
        Err(err) => {
            log::warn!("Could not read {} from storage: {}", key, err);
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("Ignoring unreadable value under {}: {}", key, err);
            None
        }
    }
}

/// Encodes and writes a value, failures are logged and dropped.
pub fn save<T: Serialize>(storage: &mut impl Storage, key: &str, value: &T) {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(err) => {
            log::warn!("Could not encode {} for storage: {}", key, err);
            return;
        }
    };

    if let Err(err) = storage.set(key, raw) {
        log::warn!("Could not save {} to storage: {:?}", key, err);
    }
}

/// In-memory store, handy for tests and for hosts without persistence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> core::result::Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> core::result::Result<(), StorageError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use alloc::vec::Vec;
    use std::sync::Mutex;

    /// Keeps every log record so levels can be asserted.
    struct Capture(Mutex<Vec<(log::Level, String)>>);

    impl log::Log for Capture {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut records) = self.0.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

    struct BrokenStorage;

    impl Storage for BrokenStorage {
        fn get(&self, _key: &str) -> core::result::Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("disabled".to_string()))
        }

        fn set(&mut self, _key: &str, _value: String) -> core::result::Result<(), StorageError> {
            Err(StorageError::WriteRejected("quota exceeded".to_string()))
        }
    }

    #[test]
    fn save_then_load_returns_value() {
        let mut storage = MemoryStorage::new();
        save(&mut storage, HIGH_SCORE_KEY, &120u32);

        assert_eq!(load::<u32>(&storage, HIGH_SCORE_KEY), Some(120));
        assert_eq!(load::<u32>(&storage, WORDLE_STATS_KEY), None);
    }

    #[test]
    fn corrupt_value_is_treated_as_absent() {
        let mut storage = MemoryStorage::new();
        storage.set(HIGH_SCORE_KEY, "not a number".to_string()).unwrap();

        assert_eq!(load::<u32>(&storage, HIGH_SCORE_KEY), None);
    }

    #[test]
    fn backend_failures_log_warnings() {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(log::LevelFilter::Trace);
        let mut storage = BrokenStorage;

        save(&mut storage, "warned-key", &10u32);
        assert_eq!(load::<u32>(&storage, "warned-key"), None);

        let records = CAPTURE.0.lock().unwrap();
        let levels: Vec<log::Level> = records
            .iter()
            .filter(|(_, message)| message.contains("warned-key"))
            .map(|&(level, _)| level)
            .collect();
        assert_eq!(levels, [log::Level::Warn, log::Level::Warn]);
    }

    #[test]
    fn broken_backend_is_never_fatal() {
        let mut storage = BrokenStorage;
        save(&mut storage, HIGH_SCORE_KEY, &10u32);

        assert_eq!(load::<u32>(&storage, HIGH_SCORE_KEY), None);
    }
}
