//! Adapter for `NewsAPI` (`/top-headlines` and `/everything`).

use newsdesk_core::{Provider, ProviderConfig};

use crate::error::SourceError;
use crate::normalize::{RawArticle, RawPage};
use crate::query::{SearchQuery, TopQuery};
use crate::transport::ApiTransport;
use crate::types::NewsApiResponse;

const KEY_PARAM: &str = "apiKey";
const DEFAULT_COUNTRY: &str = "us";
const DEFAULT_SORT: &str = "publishedAt";
const SEARCH_LANGUAGE: &str = "en";

/// Client for the `NewsAPI` v2 endpoints.
pub struct NewsApiClient {
    transport: ApiTransport,
}

impl NewsApiClient {
    /// Creates a client from the provider's configuration block.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the HTTP client cannot be built, or
    /// [`SourceError::InvalidBaseUrl`] if the configured base URL does not parse.
    pub fn new(config: &ProviderConfig) -> Result<Self, SourceError> {
        Self::with_base_url(
            config.api_key.as_deref(),
            config.timeout_secs,
            &config.base_url,
        )
    }

    /// Creates a client against an explicit base URL (used with wiremock).
    ///
    /// # Errors
    ///
    /// Same as [`NewsApiClient::new`].
    pub fn with_base_url(
        api_key: Option<&str>,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, SourceError> {
        let transport =
            ApiTransport::new(Provider::NewsApi, KEY_PARAM, api_key, timeout_secs, base_url)?;
        Ok(Self { transport })
    }

    /// Fetches top headlines. Country defaults to `us`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] on transport failure, a non-2xx status, an
    /// `"error"` envelope, or a body without `articles`.
    pub async fn fetch_top(&self, query: &TopQuery<'_>) -> Result<RawPage, SourceError> {
        let page_size = query.page_size.to_string();
        let page = query.page.to_string();

        let mut params = vec![
            ("country", query.country.unwrap_or(DEFAULT_COUNTRY)),
            ("pageSize", page_size.as_str()),
            ("page", page.as_str()),
        ];
        if let Some(category) = query.section {
            params.push(("category", category));
        }

        let url = self.transport.build_url("top-headlines", &params)?;
        let body: NewsApiResponse = self.transport.get_json(url).await?;
        self.page_from(body)
    }

    /// Searches all articles. Category is not a filter on this endpoint and
    /// is not sent.
    ///
    /// # Errors
    ///
    /// Same as [`NewsApiClient::fetch_top`].
    pub async fn fetch_search(&self, query: &SearchQuery<'_>) -> Result<RawPage, SourceError> {
        let page_size = query.page_size.to_string();
        let page = query.page.to_string();

        let mut params = vec![
            ("q", query.query),
            ("language", SEARCH_LANGUAGE),
            ("sortBy", query.sort_by.unwrap_or(DEFAULT_SORT)),
            ("pageSize", page_size.as_str()),
            ("page", page.as_str()),
        ];
        if let Some(from) = query.from_date {
            params.push(("from", from));
        }
        if let Some(to) = query.to_date {
            params.push(("to", to));
        }

        let url = self.transport.build_url("everything", &params)?;
        let body: NewsApiResponse = self.transport.get_json(url).await?;
        self.page_from(body)
    }

    fn page_from(&self, body: NewsApiResponse) -> Result<RawPage, SourceError> {
        if body.status.as_deref() == Some("error") {
            let message = body
                .message
                .or(body.code)
                .unwrap_or_else(|| "unspecified error".to_string());
            return Err(SourceError::Api {
                provider: self.transport.provider(),
                message,
            });
        }

        let articles = body.articles.ok_or_else(|| SourceError::Malformed {
            provider: self.transport.provider(),
            reason: "missing `articles`".to_string(),
        })?;

        Ok(RawPage {
            articles: articles.into_iter().map(RawArticle::NewsApi).collect(),
            total: body.total_results,
        })
    }
}
