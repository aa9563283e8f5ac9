use std::net::SocketAddr;

use crate::types::Provider;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Connection settings for one upstream provider.
///
/// Passed to each adapter at construction; there is no process-wide key store.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub request_timeout_secs: u64,
    /// Provider used by top-news calls that name none.
    pub default_top_provider: Provider,
    /// Provider used by search calls that name none.
    pub default_search_provider: Provider,
    pub newsapi: ProviderConfig,
    pub nytimes: ProviderConfig,
    pub guardian: ProviderConfig,
}

impl AppConfig {
    #[must_use]
    pub fn provider(&self, provider: Provider) -> &ProviderConfig {
        match provider {
            Provider::NewsApi => &self.newsapi,
            Provider::NyTimes => &self.nytimes,
            Provider::Guardian => &self.guardian,
        }
    }
}
