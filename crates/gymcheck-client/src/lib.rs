#![deny(clippy::unwrap_used)]

//! Authenticated HTTP client for the gymcheck backend.
//!
//! [`ApiClient`] attaches the stored bearer token to every request, and on a
//! `401` runs a single coalesced token refresh before retrying the request
//! once. Endpoint wrappers live under [`modules`]; [`Session`] tracks the
//! signed-in user on top of them.

mod client;
mod config;
mod error;
pub mod modules;
mod query;
mod refresh;
mod session;
mod token_store;

pub use client::{path_segment, ApiClient, ApiRequest};
pub use config::{ClientConfig, API_URL_ENV};
pub use error::{ApiError, ClientError, ClientResult, DEFAULT_ERROR_MESSAGE};
pub use modules::{auth, classes, notifications, reservations};
pub use query::{build_params, opt_param, query_pairs};
pub use refresh::{RefreshCoordinator, RefreshOutcome};
pub use session::{Session, SessionState};
pub use token_store::{TokenStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
