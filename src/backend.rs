use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};

/// Synchronous string-keyed storage the whole store sits on.
///
/// Maps onto the browser's local storage: one text blob per key, no
/// transactions, no atomicity across keys. A failed `write` (quota hit)
/// is fatal for the calling operation and must be surfaced.
pub trait KeyValueBackend: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory backend for tests and embedding.
///
/// `with_capacity_limit` bounds the total stored bytes the way a browser
/// quota would; `new` is unbounded.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    entries: Arc<Mutex<HashMap<String, String>>>,
    capacity: Option<usize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity_limit(max_bytes: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            capacity: Some(max_bytes),
        }
    }

    fn stored_bytes(entries: &HashMap<String, String>) -> usize {
        entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        if let Some(max) = self.capacity {
            let current = Self::stored_bytes(&entries);
            let replaced = entries.get(key).map(|v| key.len() + v.len()).unwrap_or(0);
            if current - replaced + key.len() + value.len() > max {
                return Err(Error::StorageFull(format!(
                    "write of {} bytes to '{}' exceeds the {} byte quota",
                    value.len(),
                    key,
                    max
                )));
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
