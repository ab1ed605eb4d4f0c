use std::sync::Arc;

use gymcheck_core::AuthTokens;
use gymcheck_keystore::{Keystore, KeystoreError};
use tracing::debug;

pub const ACCESS_TOKEN_KEY: &str = "auth_access_token";
pub const REFRESH_TOKEN_KEY: &str = "auth_refresh_token";

/// The access/refresh pair, kept under two fixed keystore keys.
#[derive(Clone)]
pub struct TokenStore {
    keystore: Arc<dyn Keystore>,
}

impl TokenStore {
    pub fn new(keystore: Arc<dyn Keystore>) -> Self {
        Self { keystore }
    }

    pub fn access_token(&self) -> Result<Option<String>, KeystoreError> {
        self.keystore.get(ACCESS_TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Result<Option<String>, KeystoreError> {
        self.keystore.get(REFRESH_TOKEN_KEY)
    }

    /// Both writes are issued even if the first fails; the first error wins.
    pub fn set_tokens(&self, access_token: &str, refresh_token: &str) -> Result<(), KeystoreError> {
        let access = self.keystore.set(ACCESS_TOKEN_KEY, access_token);
        let refresh = self.keystore.set(REFRESH_TOKEN_KEY, refresh_token);
        access.and(refresh)?;
        debug!("stored token pair in keystore");
        Ok(())
    }

    pub fn store(&self, tokens: &AuthTokens) -> Result<(), KeystoreError> {
        self.set_tokens(&tokens.access_token, &tokens.refresh_token)
    }

    pub fn clear_tokens(&self) -> Result<(), KeystoreError> {
        let access = self.keystore.delete(ACCESS_TOKEN_KEY);
        let refresh = self.keystore.delete(REFRESH_TOKEN_KEY);
        access.and(refresh)?;
        debug!("cleared token pair from keystore");
        Ok(())
    }
}
