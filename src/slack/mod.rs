use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    StatusCode,
};
use thiserror::Error;
use url::Url;

pub mod payloads;

pub use payloads::SlackMessage;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("webhook request failed: {0}")]
    Request(#[source] reqwest::Error),
}

/// Raw webhook reply. Status is passed through uninspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: StatusCode,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct SlackWebhookClient {
    client: reqwest::Client,
}

impl SlackWebhookClient {
    pub fn new(timeout: Duration) -> Result<Self, DispatchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(DispatchError::Client)?;

        Ok(Self { client })
    }

    /// The webhook URL is a credential: it is kept out of the span and stripped from errors.
    #[tracing::instrument(name = "slack_webhook_post", skip_all, fields(host = webhook.host_str()))]
    pub async fn post(
        &self,
        webhook: &Url,
        message: &SlackMessage,
    ) -> Result<WebhookResponse, DispatchError> {
        let res = self
            .client
            .post(webhook.clone())
            .json(message)
            .send()
            .await
            .map_err(|e| DispatchError::Request(e.without_url()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| DispatchError::Request(e.without_url()))?;
        tracing::debug!(%status, "webhook replied");

        Ok(WebhookResponse { status, body })
    }
}
