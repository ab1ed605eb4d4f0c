use std::collections::BTreeMap;

use gymcheck_keystore::KeystoreError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";

/// A non-2xx answer from the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            message: message.into(),
            status_code,
            errors: None,
        }
    }

    #[must_use]
    pub fn with_errors(mut self, errors: BTreeMap<String, Vec<String>>) -> Self {
        self.errors = Some(errors);
        self
    }

    /// JSON bodies contribute `message` and `errors`. Anything else, such as
    /// an HTML error page, gets the default message.
    pub(crate) fn from_body(status_code: u16, body: &ResponseBody) -> Self {
        match body {
            ResponseBody::Json(value) => {
                let message = value
                    .get("message")
                    .and_then(Value::as_str)
                    .filter(|message| !message.is_empty())
                    .unwrap_or(DEFAULT_ERROR_MESSAGE);
                let errors = value
                    .get("errors")
                    .cloned()
                    .and_then(|errors| serde_json::from_value(errors).ok());
                Self {
                    message: message.to_string(),
                    status_code,
                    errors,
                }
            }
            ResponseBody::Text(_) => Self::new(DEFAULT_ERROR_MESSAGE, status_code),
        }
    }

    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        self.status_code == 401
    }

    /// First message for every field, the way forms display them.
    #[must_use]
    pub fn first_field_errors(&self) -> BTreeMap<String, String> {
        self.errors
            .iter()
            .flatten()
            .filter_map(|(field, messages)| {
                messages
                    .first()
                    .map(|message| (field.clone(), message.clone()))
            })
            .collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("credential store: {0}")]
    Keystore(#[from] KeystoreError),
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid header: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

impl ClientError {
    #[must_use]
    pub const fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        self.as_api().map(|err| err.status_code)
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.as_api().is_some_and(ApiError::is_unauthorized)
    }

    /// No response was received.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// Text bodies become JSON strings; an empty one becomes `null`.
    pub(crate) fn into_value(self) -> Value {
        match self {
            Self::Json(value) => value,
            Self::Text(text) if text.is_empty() => Value::Null,
            Self::Text(text) => Value::String(text),
        }
    }
}
