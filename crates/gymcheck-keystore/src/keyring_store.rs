use keyring::Entry;
use tracing::warn;

use crate::{Keystore, KeystoreError};

/// OS keychain (macOS Keychain, Windows Credential Manager, Secret Service).
pub struct KeyringKeystore {
    service: String,
}

impl KeyringKeystore {
    pub fn new(service: &str) -> Self {
        Self {
            service: service.to_string(),
        }
    }

    fn entry(&self, key: &str) -> Result<Entry, KeystoreError> {
        Entry::new(&self.service, key).map_err(|err| KeystoreError::Internal {
            message: err.to_string(),
        })
    }
}

impl Keystore for KeyringKeystore {
    fn set(&self, key: &str, value: &str) -> Result<(), KeystoreError> {
        let entry = self.entry(key)?;
        entry
            .set_password(value)
            .map_err(|err| KeystoreError::Internal {
                message: format!("failed to store {key}: {err}"),
            })
    }

    fn get(&self, key: &str) -> Result<Option<String>, KeystoreError> {
        let entry = self.entry(key)?;
        match entry.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(keyring::Error::PlatformFailure(err) | keyring::Error::NoStorageAccess(err)) => {
                warn!(service = %self.service, key = %key, "keychain unavailable: {err}");
                Err(KeystoreError::Unsupported)
            }
            Err(err) => Err(KeystoreError::Internal {
                message: format!("failed to load {key}: {err}"),
            }),
        }
    }

    fn delete(&self, key: &str) -> Result<(), KeystoreError> {
        let entry = self.entry(key)?;
        match entry.delete_password() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(err) => Err(KeystoreError::Internal {
                message: format!("failed to delete {key}: {err}"),
            }),
        }
    }
}
