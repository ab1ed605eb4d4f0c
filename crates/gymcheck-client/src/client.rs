use std::borrow::Cow;
use std::sync::Arc;

use gymcheck_core::{RefreshRequest, RefreshResponse};
use gymcheck_keystore::Keystore;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::{ApiError, ClientError, ClientResult, ResponseBody};
use crate::refresh::{RefreshCoordinator, RefreshOutcome};
use crate::token_store::TokenStore;

const REFRESH_PATH: &str = "/auth/refresh";

#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Percent-encodes an id for use as a single path segment.
pub fn path_segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: TokenStore,
    refresh: RefreshCoordinator,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, keystore: Arc<dyn Keystore>) -> ClientResult<Self> {
        let http = config.build_http_client()?;
        Ok(Self::with_http_client(http, config, keystore))
    }

    pub fn with_http_client(
        http: reqwest::Client,
        config: &ClientConfig,
        keystore: Arc<dyn Keystore>,
    ) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens: TokenStore::new(keystore),
            refresh: RefreshCoordinator::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> ClientResult<T> {
        self.request(ApiRequest::new(Method::GET, path).with_query(query))
            .await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<Value>,
    ) -> ClientResult<T> {
        self.request(with_optional_body(ApiRequest::new(Method::POST, path), body))
            .await
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<Value>,
    ) -> ClientResult<T> {
        self.request(with_optional_body(ApiRequest::new(Method::PUT, path), body))
            .await
    }

    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<Value>,
    ) -> ClientResult<T> {
        self.request(with_optional_body(ApiRequest::new(Method::PATCH, path), body))
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.request(ApiRequest::new(Method::DELETE, path)).await
    }

    pub async fn request<T: DeserializeOwned>(&self, request: ApiRequest) -> ClientResult<T> {
        let value = self.request_value(request).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Sends the request; a 401 triggers one shared refresh and, if that
    /// succeeds, exactly one retry whose result is final.
    pub async fn request_value(&self, request: ApiRequest) -> ClientResult<Value> {
        let mut response = self.send_once(&request).await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            info!(
                method = %request.method,
                path = %request.path,
                "request unauthorized; attempting token refresh"
            );
            if self.refresh_access_token().await.is_refreshed() {
                response = self.send_once(&request).await?;
            }
        }
        handle_response(response).await
    }

    /// Runs the single-flight refresh. Callers arriving while one is in
    /// flight share its outcome.
    pub async fn refresh_access_token(&self) -> RefreshOutcome {
        self.refresh.run(|| self.perform_refresh()).await
    }

    async fn perform_refresh(&self) -> RefreshOutcome {
        let outcome = match self.try_refresh().await {
            Ok(true) => return RefreshOutcome::Refreshed,
            Ok(false) => RefreshOutcome::Failed,
            Err(err) => {
                warn!("token refresh failed: {err}");
                RefreshOutcome::Failed
            }
        };
        if let Err(err) = self.tokens.clear_tokens() {
            warn!("failed to clear tokens after refresh failure: {err}");
        }
        outcome
    }

    async fn try_refresh(&self) -> ClientResult<bool> {
        let Some(refresh_token) = self.tokens.refresh_token()? else {
            debug!("no refresh token stored; skipping refresh call");
            return Ok(false);
        };
        let url = self.url(REFRESH_PATH, &[])?;
        let payload = RefreshRequest { refresh_token };
        let start = std::time::Instant::now();
        let response = self.http.post(url).json(&payload).send().await?;
        debug!(
            status = %response.status(),
            elapsed_ms = start.elapsed().as_millis(),
            "token refresh response"
        );
        if !response.status().is_success() {
            warn!(status = %response.status(), "token refresh rejected");
            return Ok(false);
        }
        let tokens = response.json::<RefreshResponse>().await?.into_tokens();
        self.tokens.store(&tokens)?;
        Ok(true)
    }

    async fn send_once(&self, request: &ApiRequest) -> ClientResult<reqwest::Response> {
        let url = self.url(&request.path, &request.query)?;
        let headers = self.headers()?;
        let builder = self
            .http
            .request(request.method.clone(), url.clone())
            .headers(headers);
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };
        debug!(method = %request.method, url = %url, "http request");
        let start = std::time::Instant::now();
        let response = builder.send().await?;
        debug!(
            method = %request.method,
            url = %url,
            status = %response.status(),
            elapsed_ms = start.elapsed().as_millis(),
            "http response"
        );
        Ok(response)
    }

    /// Rebuilt for every send so a retry picks up a refreshed token.
    fn headers(&self) -> ClientResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = self.tokens.access_token()? {
            headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {token}"))?);
        }
        Ok(headers)
    }

    fn url(&self, path: &str, query: &[(String, String)]) -> ClientResult<Url> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url =
            Url::parse(&raw).map_err(|err| ClientError::InvalidUrl(format!("{raw}: {err}")))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(key, value)| (key.as_str(), value.as_str())));
        }
        Ok(url)
    }
}

fn with_optional_body(request: ApiRequest, body: Option<Value>) -> ApiRequest {
    match body {
        Some(body) => request.with_body(body),
        None => request,
    }
}

async fn handle_response(response: reqwest::Response) -> ClientResult<Value> {
    let status = response.status();
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("application/json"));
    let text = response.text().await?;

    if !status.is_success() {
        let body = match serde_json::from_str::<Value>(&text) {
            Ok(value) if is_json => ResponseBody::Json(value),
            _ => ResponseBody::Text(text),
        };
        return Err(ApiError::from_body(status.as_u16(), &body).into());
    }

    let body = if is_json && !text.trim().is_empty() {
        ResponseBody::Json(serde_json::from_str(&text)?)
    } else if is_json {
        ResponseBody::Json(Value::Null)
    } else {
        ResponseBody::Text(text)
    };
    Ok(body.into_value())
}
