//! Request, response, and article types shared by the adapters and callers.
//!
//! Every value here is request-scoped: built fresh for one aggregator call
//! and dropped once the caller has rendered it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_PAGE: u32 = 1;

/// One of the three upstream news vendors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    NewsApi,
    NyTimes,
    Guardian,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::NewsApi, Provider::NyTimes, Provider::Guardian];

    /// Stable identifier used in query strings, preferences, and JSON.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Provider::NewsApi => "newsapi",
            Provider::NyTimes => "nytimes",
            Provider::Guardian => "guardian",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Provider::NewsApi => "NewsAPI",
            Provider::NyTimes => "The New York Times",
            Provider::Guardian => "The Guardian",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Provider {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Provider::ALL
            .into_iter()
            .find(|p| p.id().eq_ignore_ascii_case(name))
            .ok_or_else(|| CoreError::UnsupportedProvider(name.to_string()))
    }
}

/// The application's canonical category vocabulary, independent of any
/// provider's native taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Business,
    Entertainment,
    Health,
    Science,
    Sports,
    Technology,
    Politics,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Business,
        Category::Entertainment,
        Category::Health,
        Category::Science,
        Category::Sports,
        Category::Technology,
        Category::Politics,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::Health => "health",
            Category::Science => "science",
            Category::Sports => "sports",
            Category::Technology => "technology",
            Category::Politics => "politics",
        }
    }

    /// Case-insensitive lookup. Names outside the vocabulary yield `None`,
    /// which callers treat as "use the provider's default section".
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    pub id: Provider,
    pub name: String,
}

/// The normalized article record shared across all providers.
///
/// Absent upstream data stays `None`; presentation decides on placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonArticle {
    pub source: ArticleSource,
    pub author: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub url_to_image: Option<String>,
    /// Provider-native timestamp, passed through untouched.
    pub published_at: String,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopNewsRequest {
    /// Provider id as supplied by the caller; `None` selects the configured default.
    pub provider: Option<String>,
    pub category: Option<String>,
    pub country: Option<String>,
    pub page_size: Option<u32>,
    pub page: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub provider: Option<String>,
    pub query: String,
    pub page_size: Option<u32>,
    pub page: Option<u32>,
    /// `YYYY-MM-DD`; adapters convert to their own wire format.
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub sort_by: Option<String>,
    pub category: Option<String>,
}

impl TopNewsRequest {
    #[must_use]
    pub fn page_size_or_default(&self) -> u32 {
        positive_or(self.page_size, DEFAULT_PAGE_SIZE)
    }

    #[must_use]
    pub fn page_or_default(&self) -> u32 {
        positive_or(self.page, DEFAULT_PAGE)
    }
}

impl SearchRequest {
    #[must_use]
    pub fn page_size_or_default(&self) -> u32 {
        positive_or(self.page_size, DEFAULT_PAGE_SIZE)
    }

    #[must_use]
    pub fn page_or_default(&self) -> u32 {
        positive_or(self.page, DEFAULT_PAGE)
    }
}

fn positive_or(value: Option<u32>, default: u32) -> u32 {
    value.filter(|v| *v > 0).unwrap_or(default)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Transport failure, timeout, non-2xx status, or an upstream error envelope.
    UpstreamUnavailable,
    /// A response arrived but lacked the structure the adapter expects.
    MalformedResponse,
}

/// Why a provider call produced no articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchFailure {
    pub kind: FailureKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedResponse {
    pub articles: Vec<CommonArticle>,
    pub total_results: u64,
    /// Always the provider the request resolved to.
    pub provider: Provider,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FetchFailure>,
}

impl AggregatedResponse {
    /// Partial-failure response: no articles, zero total, error populated.
    #[must_use]
    pub fn failed(provider: Provider, error: FetchFailure) -> Self {
        Self {
            articles: Vec::new(),
            total_results: 0,
            provider,
            error: Some(error),
        }
    }

    #[must_use]
    pub fn is_partial_failure(&self) -> bool {
        self.error.is_some()
    }
}
