//! Shared HTTP plumbing for the provider adapters.
//!
//! Each adapter owns one [`ApiTransport`]: a `reqwest` client with the
//! configured timeout, the provider's base URL, and its API key. The key is
//! appended to every request URL and stripped from anything that ends up in
//! an error message or a log line.

use std::time::Duration;

use newsdesk_core::Provider;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::SourceError;

const CONNECT_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = "newsdesk/0.1 (news-aggregation)";

pub(crate) struct ApiTransport {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
    key_param: &'static str,
    provider: Provider,
}

impl ApiTransport {
    pub(crate) fn new(
        provider: Provider,
        key_param: &'static str,
        api_key: Option<&str>,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        // Keep exactly one trailing slash so `Url::join` appends endpoint
        // paths instead of replacing the last segment (`/v2`, `/svc`).
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| SourceError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.map(ToOwned::to_owned),
            key_param,
            provider,
        })
    }

    /// Builds the endpoint URL with the API key first, then `params` in order.
    pub(crate) fn build_url(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<Url, SourceError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| SourceError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: format!("cannot join '{endpoint}': {e}"),
            })?;
        if self.api_key.is_some() || !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            if let Some(key) = &self.api_key {
                pairs.append_pair(self.key_param, key);
            }
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET, requires a 2xx status, and deserializes the body.
    ///
    /// A non-2xx answer that carries the provider's own error envelope becomes
    /// [`SourceError::Api`] with the upstream message; anything else is
    /// [`SourceError::UnexpectedStatus`].
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, SourceError> {
        let endpoint = redact(&url);
        tracing::debug!(provider = %self.provider, endpoint = %endpoint, "requesting upstream");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.ok().and_then(|b| envelope_message(&b));
            return Err(match message {
                Some(message) => SourceError::Api {
                    provider: self.provider,
                    message: format!("{message} (HTTP {})", status.as_u16()),
                },
                None => SourceError::UnexpectedStatus {
                    provider: self.provider,
                    status: status.as_u16(),
                    url: endpoint,
                },
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Http(e.without_url()))?;
        serde_json::from_str(&body).map_err(|e| SourceError::Deserialize {
            context: format!("{} {endpoint}", self.provider),
            source: e,
        })
    }

    pub(crate) fn provider(&self) -> Provider {
        self.provider
    }
}

/// Error text from a provider envelope: NewsAPI `message`, Guardian
/// `response.message`, or the NYT gateway's `fault.faultstring`.
fn envelope_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["/message", "/response/message", "/fault/faultstring"]
        .into_iter()
        .filter_map(|pointer| value.pointer(pointer).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .find(|message| !message.is_empty())
        .map(ToOwned::to_owned)
}

/// Drops the query string, which carries the API key.
fn redact(url: &Url) -> String {
    let mut redacted = url.clone();
    redacted.set_query(None);
    redacted.to_string()
}
