use serde::{Deserialize, Serialize};

mod keyring_store;
mod memory;

pub use keyring_store::KeyringKeystore;
pub use memory::MemoryKeystore;

pub const DEFAULT_SERVICE: &str = "gymcheck";

#[derive(thiserror::Error, Debug, Clone, Serialize, Deserialize)]
pub enum KeystoreError {
    #[error("key not found")]
    NotFound,
    #[error("unsupported")]
    Unsupported,
    #[error("internal error: {message}")]
    Internal { message: String },
}

/// Encrypted key/value storage for small secrets.
///
/// Reads of a missing key return `Ok(None)` and deleting a missing key is not
/// an error.
pub trait Keystore: Send + Sync {
    fn set(&self, key: &str, value: &str) -> Result<(), KeystoreError>;
    fn get(&self, key: &str) -> Result<Option<String>, KeystoreError>;
    fn delete(&self, key: &str) -> Result<(), KeystoreError>;
}

pub fn default_keystore() -> Box<dyn Keystore> {
    Box::new(KeyringKeystore::new(DEFAULT_SERVICE))
}
