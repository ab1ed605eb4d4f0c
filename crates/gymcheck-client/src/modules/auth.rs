use gymcheck_core::{
    AuthResponse, AuthTokens, ForgotPasswordRequest, LoginRequest, RefreshRequest, RefreshResponse,
    RegisterRequest, ResetPasswordRequest, User,
};
use serde_json::Value;
use tracing::{debug, warn};

use crate::client::ApiClient;
use crate::error::ClientResult;

pub async fn register(client: &ApiClient, request: &RegisterRequest) -> ClientResult<AuthResponse> {
    let body = serde_json::to_value(request)?;
    let response: AuthResponse = client.post("/auth/register", Some(body)).await?;
    client.tokens().store(&response.tokens)?;
    debug!(user = %response.user.id, "registered");
    Ok(response)
}

pub async fn login(client: &ApiClient, request: &LoginRequest) -> ClientResult<AuthResponse> {
    let body = serde_json::to_value(request)?;
    let response: AuthResponse = client.post("/auth/login", Some(body)).await?;
    client.tokens().store(&response.tokens)?;
    debug!(user = %response.user.id, "logged in");
    Ok(response)
}

/// Local tokens are cleared even when the backend call fails.
pub async fn logout(client: &ApiClient) -> ClientResult<()> {
    if let Err(err) = client.post::<Value>("/auth/logout", None).await {
        warn!("remote logout failed; clearing local tokens anyway: {err}");
    }
    client.tokens().clear_tokens()?;
    Ok(())
}

/// Explicit refresh through the request pipeline. Implicit refreshes on 401
/// go through [`ApiClient::refresh_access_token`] instead.
pub async fn refresh_token(client: &ApiClient, refresh_token: &str) -> ClientResult<AuthTokens> {
    let payload = RefreshRequest {
        refresh_token: refresh_token.to_string(),
    };
    let body = serde_json::to_value(&payload)?;
    let response: RefreshResponse = client.post("/auth/refresh", Some(body)).await?;
    let tokens = response.into_tokens();
    client.tokens().store(&tokens)?;
    Ok(tokens)
}

pub async fn get_me(client: &ApiClient) -> ClientResult<User> {
    client.get("/auth/me", Vec::new()).await
}

pub async fn forgot_password(client: &ApiClient, email: &str) -> ClientResult<()> {
    let body = serde_json::to_value(ForgotPasswordRequest {
        email: email.to_string(),
    })?;
    client
        .post::<Value>("/auth/forgot-password", Some(body))
        .await?;
    Ok(())
}

pub async fn reset_password(client: &ApiClient, token: &str, password: &str) -> ClientResult<()> {
    let body = serde_json::to_value(ResetPasswordRequest {
        token: token.to_string(),
        password: password.to_string(),
    })?;
    client
        .post::<Value>("/auth/reset-password", Some(body))
        .await?;
    Ok(())
}
