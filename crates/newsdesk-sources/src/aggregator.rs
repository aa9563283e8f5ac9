//! Provider dispatch and response assembly.
//!
//! The aggregator resolves which provider a request targets, maps the
//! category onto that provider's section, calls exactly one adapter, and
//! normalizes the result. Upstream failures never escape as `Err`: they are
//! logged and folded into an [`AggregatedResponse`] with `error` set. The
//! only `Err` a caller sees is an unsupported provider name.

use newsdesk_core::{
    default_section, section_for, AggregatedResponse, AppConfig, Provider, SearchRequest,
    TopNewsRequest,
};

use crate::error::{AggregatorError, SourceError};
use crate::guardian::GuardianClient;
use crate::newsapi::NewsApiClient;
use crate::normalize::{to_common, RawPage};
use crate::nytimes::NyTimesClient;
use crate::query::{SearchQuery, TopQuery};

pub struct Aggregator {
    newsapi: NewsApiClient,
    nytimes: NyTimesClient,
    guardian: GuardianClient,
    default_top: Provider,
    default_search: Provider,
}

impl Aggregator {
    /// Builds one client per provider from the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if any client cannot be constructed.
    pub fn new(config: &AppConfig) -> Result<Self, SourceError> {
        Ok(Self::from_clients(
            NewsApiClient::new(&config.newsapi)?,
            NyTimesClient::new(&config.nytimes)?,
            GuardianClient::new(&config.guardian)?,
            config.default_top_provider,
            config.default_search_provider,
        ))
    }

    #[must_use]
    pub fn from_clients(
        newsapi: NewsApiClient,
        nytimes: NyTimesClient,
        guardian: GuardianClient,
        default_top: Provider,
        default_search: Provider,
    ) -> Self {
        Self {
            newsapi,
            nytimes,
            guardian,
            default_top,
            default_search,
        }
    }

    #[must_use]
    pub fn default_top_provider(&self) -> Provider {
        self.default_top
    }

    #[must_use]
    pub fn default_search_provider(&self) -> Provider {
        self.default_search
    }

    /// Fetches top headlines from one provider.
    ///
    /// # Errors
    ///
    /// Returns [`AggregatorError::UnsupportedProvider`] if `request.provider`
    /// names something outside the supported set. Upstream failures are
    /// reported through [`AggregatedResponse::error`] instead.
    pub async fn fetch_top_news(
        &self,
        request: &TopNewsRequest,
    ) -> Result<AggregatedResponse, AggregatorError> {
        let provider = resolve_provider(request.provider.as_deref(), self.default_top)?;
        let section = resolve_section(provider, request.category.as_deref());
        let query = TopQuery {
            section,
            country: non_blank(request.country.as_deref()),
            page: request.page_or_default(),
            page_size: request.page_size_or_default(),
        };

        let result = match provider {
            Provider::NewsApi => self.newsapi.fetch_top(&query).await,
            Provider::NyTimes => self.nytimes.fetch_top(&query).await.map(|page| {
                // Top Stories returns the whole section; total counts all of it.
                let total = total_of(&page);
                let mut sliced = page.paginate(query.page, query.page_size);
                sliced.total = Some(total);
                sliced
            }),
            Provider::Guardian => self.guardian.fetch_top(&query).await,
        }
        .map(|page| assemble(provider, page));

        Ok(finish(provider, "top", result))
    }

    /// Runs a keyword search against one provider.
    ///
    /// # Errors
    ///
    /// Same as [`Aggregator::fetch_top_news`].
    pub async fn search_all_news(
        &self,
        request: &SearchRequest,
    ) -> Result<AggregatedResponse, AggregatorError> {
        let provider = resolve_provider(request.provider.as_deref(), self.default_search)?;
        let query = SearchQuery {
            query: &request.query,
            page: request.page_or_default(),
            page_size: request.page_size_or_default(),
            sort_by: non_blank(request.sort_by.as_deref()),
            from_date: non_blank(request.from_date.as_deref()),
            to_date: non_blank(request.to_date.as_deref()),
            section: section_for(provider, request.category.as_deref()),
        };

        let result = match provider {
            Provider::NewsApi => self.newsapi.fetch_search(&query).await,
            Provider::NyTimes => self.nytimes.fetch_search(&query).await,
            Provider::Guardian => self.guardian.fetch_search(&query).await,
        }
        .map(|page| assemble(provider, page));

        Ok(finish(provider, "search", result))
    }
}

/// Blank or missing names select `default`; anything else must parse.
fn resolve_provider(raw: Option<&str>, default: Provider) -> Result<Provider, AggregatorError> {
    match non_blank(raw) {
        None => Ok(default),
        Some(name) => Ok(name.parse::<Provider>()?),
    }
}

fn resolve_section(provider: Provider, category: Option<&str>) -> Option<&'static str> {
    section_for(provider, category).or_else(|| default_section(provider))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Provider total when it reported a positive one, else the item count.
fn total_of(page: &RawPage) -> u64 {
    page.total
        .filter(|t| *t > 0)
        .unwrap_or(page.articles.len() as u64)
}

fn assemble(provider: Provider, page: RawPage) -> AggregatedResponse {
    let total_results = total_of(&page);
    AggregatedResponse {
        articles: page.articles.into_iter().map(to_common).collect(),
        total_results,
        provider,
        error: None,
    }
}

fn finish(
    provider: Provider,
    operation: &'static str,
    result: Result<AggregatedResponse, SourceError>,
) -> AggregatedResponse {
    match result {
        Ok(response) => {
            tracing::debug!(
                provider = %provider,
                operation,
                articles = response.articles.len(),
                total = response.total_results,
                "provider fetch complete"
            );
            response
        }
        Err(e) => {
            tracing::warn!(
                provider = %provider,
                operation,
                error = %e,
                "provider fetch failed; returning empty result"
            );
            AggregatedResponse::failed(provider, e.to_failure())
        }
    }
}
