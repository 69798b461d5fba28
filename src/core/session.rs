use crate::config::toml_config::SessionConfig;
use crate::core::rpc::{Request, Response};
use crate::domain::ports::Transport;
use crate::utils::error::{Result, ZabbixError};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::json;
use std::sync::atomic::{AtomicU64, Ordering};

const CONTENT_TYPE_JSON_RPC: &str = "application/json-rpc";

/// An HTTP session against a single API endpoint.
pub struct Session {
    client: Client,
    url: String,
    auth_token: Option<String>,
    next_id: AtomicU64,
}

impl Session {
    /// Builds an unauthenticated session.
    pub fn new(config: &SessionConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            url: config.server.url.clone(),
            auth_token: None,
            next_id: AtomicU64::new(1),
        })
    }

    /// Validates the configuration and returns an authenticated session,
    /// using the API token if one is configured and `user.login` otherwise.
    pub async fn connect(config: &SessionConfig) -> Result<Self> {
        config.validate()?;
        let mut session = Self::new(config)?;

        match (&config.auth.api_token, &config.auth.username, &config.auth.password) {
            (Some(token), _, _) => {
                tracing::debug!("Using configured API token for {}", session.url);
                session.auth_token = Some(token.clone());
            }
            (None, Some(username), Some(password)) => {
                session.login(username, password).await?;
            }
            _ => {
                return Err(ZabbixError::ConfigError {
                    message: "either auth.api_token or auth.username and auth.password must be set"
                        .to_string(),
                })
            }
        }

        Ok(session)
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Result<()> {
        let params = json!({ "user": username, "password": password });
        let result = self.request("user.login", params, None).await?;
        let token: String = serde_json::from_value(result)?;
        tracing::info!("Logged in to {} as {}", self.url, username);
        self.auth_token = Some(token);
        Ok(())
    }

    pub async fn logout(&mut self) -> Result<()> {
        if self.auth_token.is_none() {
            return Ok(());
        }
        self.call("user.logout", json!([])).await?;
        self.auth_token = None;
        tracing::info!("Logged out of {}", self.url);
        Ok(())
    }

    /// Version of the remote API, e.g. `"4.0.30"`.
    pub async fn api_version(&self) -> Result<String> {
        let result = self.request("apiinfo.version", json!([]), None).await?;
        Ok(serde_json::from_value(result)?)
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn request(
        &self,
        method: &str,
        params: serde_json::Value,
        auth: Option<&str>,
    ) -> Result<serde_json::Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = serde_json::to_vec(&Request::new(method, params, auth, id))?;

        tracing::debug!("Calling {} (id {}) at {}", method, id, self.url);
        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON_RPC)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("{} (id {}) returned HTTP {}", method, id, status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ZabbixError::StatusError { status, body });
        }

        let bytes = response.bytes().await?;
        let decoded: Response = serde_json::from_slice(&bytes)?;
        if let Some(error) = &decoded.error {
            tracing::debug!("{} (id {}) failed with API error {}", method, id, error.code);
        }
        decoded.into_result()
    }
}

#[async_trait]
impl Transport for Session {
    async fn call(&self, method: &str, params: serde_json::Value) -> Result<serde_json::Value> {
        self.request(method, params, self.auth_token.as_deref()).await
    }
}
