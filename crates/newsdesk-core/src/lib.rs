//! Domain types, configuration, and pure helpers shared by every newsdesk crate.
//!
//! Nothing in this crate performs network I/O: the provider adapters and the
//! aggregator live in `newsdesk-sources`.

pub mod app_config;
pub mod config;
pub mod display;
pub mod sections;
pub mod types;

use thiserror::Error;

pub use app_config::{AppConfig, Environment, ProviderConfig};
pub use config::{load_app_config, load_app_config_from_env};
pub use display::{calculate_read_time, format_relative_time, DEFAULT_IMAGE_URL};
pub use sections::{default_section, section_for};
pub use types::{
    AggregatedResponse, ArticleSource, Category, CommonArticle, FailureKind, FetchFailure,
    Provider, SearchRequest, TopNewsRequest, DEFAULT_PAGE, DEFAULT_PAGE_SIZE,
};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unsupported news source: {0}")]
    UnsupportedProvider(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
