use std::collections::HashMap;
use std::sync::Mutex;

use crate::{Keystore, KeystoreError};

/// Process-local store. Nothing survives the process.
#[derive(Default)]
pub struct MemoryKeystore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeystore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            entries: Mutex::new(map),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, KeystoreError> {
        self.entries.lock().map_err(|_| KeystoreError::Internal {
            message: "failed to lock memory keystore".to_string(),
        })
    }
}

impl Keystore for MemoryKeystore {
    fn set(&self, key: &str, value: &str) -> Result<(), KeystoreError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, KeystoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn delete(&self, key: &str) -> Result<(), KeystoreError> {
        self.lock()?.remove(key);
        Ok(())
    }
}
