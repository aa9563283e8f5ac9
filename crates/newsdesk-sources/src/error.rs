use newsdesk_core::{CoreError, FailureKind, FetchFailure, Provider};
use thiserror::Error;

/// Errors returned by the provider adapters.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {provider} ({url})")]
    UnexpectedStatus {
        provider: Provider,
        status: u16,
        url: String,
    },

    /// The upstream answered with its own error envelope.
    #[error("{provider} API error: {message}")]
    Api { provider: Provider, message: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The body parsed but is missing the wrapper the adapter reads from.
    #[error("malformed response from {provider}: {reason}")]
    Malformed { provider: Provider, reason: String },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl SourceError {
    #[must_use]
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            SourceError::Http(_)
            | SourceError::UnexpectedStatus { .. }
            | SourceError::Api { .. }
            | SourceError::InvalidBaseUrl { .. } => FailureKind::UpstreamUnavailable,
            SourceError::Deserialize { .. } | SourceError::Malformed { .. } => {
                FailureKind::MalformedResponse
            }
        }
    }

    /// Converts the error into the descriptor carried by a partial response.
    #[must_use]
    pub fn to_failure(&self) -> FetchFailure {
        FetchFailure {
            kind: self.failure_kind(),
            message: self.to_string(),
        }
    }
}

/// The only aggregator error that reaches callers: the request named a
/// provider outside the supported set.
#[derive(Debug, Error)]
pub enum AggregatorError {
    #[error("unsupported news source: {0}")]
    UnsupportedProvider(String),
}

impl From<CoreError> for AggregatorError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnsupportedProvider(name) => AggregatorError::UnsupportedProvider(name),
        }
    }
}
