//! HTTP implementation of the gateway.
//!
//! Each remote operation maps to `POST {base}/invoke/{operation}` with
//! the JSON argument bag as the request body. The backend answers with
//! the operation's result as JSON, or a non-2xx status whose body is the
//! failure message.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::Gateway;

/// HTTP client for the archive backend.
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    /// Create a gateway for the given base URL with a default client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a gateway reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across components).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Build a gateway from env-driven configuration, applying the
    /// configured request timeout to the underlying client.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Ok(Self::with_client(client, config.backend_url.clone()))
    }

    /// Base URL this gateway targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn invoke(
        &self,
        operation: &str,
        args: serde_json::Value,
    ) -> Result<serde_json::Value, GatewayError> {
        let url = format!("{}/invoke/{}", self.base_url, operation);
        tracing::debug!(operation, url = %url, "invoking backend operation");

        let response = self
            .client
            .post(&url)
            .json(&args)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GatewayError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))
    }
}
