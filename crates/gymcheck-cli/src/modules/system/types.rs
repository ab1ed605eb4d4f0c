use gymcheck_client::{ApiClient, Session};
use gymcheck_core::User;
use serde::{Deserialize, Serialize};

/// Non-secret settings kept in `~/.gymcheck/config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct CliConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) last_user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) last_user_email: Option<String>,
}

impl CliConfig {
    pub(crate) fn remember_user(&mut self, user: &User) {
        self.last_user_id = Some(user.id.clone());
        self.last_user_email = Some(user.email.clone());
    }

    pub(crate) fn forget_user(&mut self) {
        self.last_user_id = None;
        self.last_user_email = None;
    }
}

pub(crate) struct CommandContext<'a> {
    pub(crate) session: Session,
    pub(crate) config: &'a mut CliConfig,
}

impl CommandContext<'_> {
    pub(crate) fn client(&self) -> &ApiClient {
        self.session.client()
    }

    /// An explicit `--user`, else whoever signed in last.
    pub(crate) fn user_id(&self, arg: Option<String>) -> anyhow::Result<String> {
        arg.or_else(|| self.config.last_user_id.clone())
            .ok_or_else(|| anyhow::anyhow!("user not set; pass --user or log in first"))
    }
}
