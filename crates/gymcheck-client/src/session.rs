use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use gymcheck_core::{LoginRequest, RegisterRequest, User};
use tracing::{debug, info, warn};

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::modules::auth;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Loading,
    SignedOut,
    SignedIn(User),
}

/// Who is signed in, tracked on top of an [`ApiClient`].
///
/// Starts in [`SessionState::Loading`] until [`Session::restore`] has looked
/// at the stored credentials.
pub struct Session {
    client: Arc<ApiClient>,
    state: RwLock<SessionState>,
}

impl Session {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            state: RwLock::new(SessionState::Loading),
        }
    }

    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    pub fn state(&self) -> SessionState {
        self.read().clone()
    }

    pub fn user(&self) -> Option<User> {
        match &*self.read() {
            SessionState::SignedIn(user) => Some(user.clone()),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(*self.read(), SessionState::SignedIn(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(*self.read(), SessionState::Loading)
    }

    /// Resolves the stored credentials into a signed-in user. Always leaves
    /// `Loading`: an unreadable keystore or any failure of `/auth/me` drops
    /// the stored tokens and signs out.
    pub async fn restore(&self) -> SessionState {
        let state = match self.client.tokens().access_token() {
            Ok(None) => {
                debug!("no stored access token");
                SessionState::SignedOut
            }
            Ok(Some(_)) => self.resolve_user().await,
            Err(err) => {
                warn!("stored access token unreadable; signing out: {err}");
                self.discard_tokens();
                SessionState::SignedOut
            }
        };
        self.set(state.clone());
        state
    }

    async fn resolve_user(&self) -> SessionState {
        match auth::get_me(&self.client).await {
            Ok(user) => {
                info!(user = %user.id, "session restored");
                SessionState::SignedIn(user)
            }
            Err(err) => {
                if err.is_transport() {
                    warn!("backend unreachable during session restore; signing out: {err}");
                } else {
                    warn!("stored session rejected; signing out: {err}");
                }
                self.discard_tokens();
                SessionState::SignedOut
            }
        }
    }

    fn discard_tokens(&self) {
        if let Err(err) = self.client.tokens().clear_tokens() {
            warn!("failed to clear stored tokens: {err}");
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> ClientResult<User> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
            remember_me: None,
        };
        let response = auth::login(&self.client, &request).await?;
        self.set(SessionState::SignedIn(response.user.clone()));
        Ok(response.user.clone())
    }

    pub async fn sign_up(&self, email: &str, password: &str, name: &str) -> ClientResult<User> {
        let request = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
        };
        let response = auth::register(&self.client, &request).await?;
        self.set(SessionState::SignedIn(response.user.clone()));
        Ok(response.user.clone())
    }

    pub async fn sign_out(&self) -> ClientResult<()> {
        auth::logout(&self.client).await?;
        self.set(SessionState::SignedOut);
        Ok(())
    }

    fn set(&self, state: SessionState) {
        *self.write() = state;
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
