//! Adapter for the Guardian Open Platform content search.
//!
//! Top news and search hit the same `/search` endpoint; only the ordering
//! and the presence of `q` differ.

use newsdesk_core::{Provider, ProviderConfig};

use crate::error::SourceError;
use crate::normalize::{RawArticle, RawPage};
use crate::query::{SearchQuery, TopQuery};
use crate::transport::ApiTransport;
use crate::types::GuardianResponse;

const KEY_PARAM: &str = "api-key";
const SHOW_FIELDS: &str = "headline,trailText,byline,shortUrl,thumbnail,body,standfirst";
const TOP_ORDER: &str = "newest";
const SEARCH_ORDER: &str = "relevance";

pub struct GuardianClient {
    transport: ApiTransport,
}

impl GuardianClient {
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

    /// # Errors
    ///
    /// Same as [`GuardianClient::new`].
    pub fn with_base_url(
        api_key: Option<&str>,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, SourceError> {
        let transport = ApiTransport::new(
            Provider::Guardian,
            KEY_PARAM,
            api_key,
            timeout_secs,
            base_url,
        )?;
        Ok(Self { transport })
    }

    /// Latest content, optionally restricted to one section. The Guardian
    /// has no per-country editions in this API, so `country` is not sent.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] on transport failure, a non-2xx status, an
    /// error status in the body, or a body without `response.results`.
    pub async fn fetch_top(&self, query: &TopQuery<'_>) -> Result<RawPage, SourceError> {
        let page_size = query.page_size.to_string();
        let page = query.page.to_string();

        let mut params = vec![
            ("page-size", page_size.as_str()),
            ("page", page.as_str()),
            ("order-by", TOP_ORDER),
            ("show-fields", SHOW_FIELDS),
        ];
        if let Some(section) = query.section {
            params.push(("section", section));
        }

        self.search(&params).await
    }

    /// Keyword search ordered by relevance unless `sort_by` overrides it.
    ///
    /// # Errors
    ///
    /// Same as [`GuardianClient::fetch_top`].
    pub async fn fetch_search(&self, query: &SearchQuery<'_>) -> Result<RawPage, SourceError> {
        let page_size = query.page_size.to_string();
        let page = query.page.to_string();

        let mut params = vec![
            ("q", query.query),
            ("page-size", page_size.as_str()),
            ("page", page.as_str()),
            ("order-by", query.sort_by.unwrap_or(SEARCH_ORDER)),
            ("show-fields", SHOW_FIELDS),
        ];
        if let Some(section) = query.section {
            params.push(("section", section));
        }
        if let Some(from) = query.from_date {
            params.push(("from-date", from));
        }
        if let Some(to) = query.to_date {
            params.push(("to-date", to));
        }

        self.search(&params).await
    }

    async fn search(&self, params: &[(&str, &str)]) -> Result<RawPage, SourceError> {
        let provider = self.transport.provider();
        let url = self.transport.build_url("search", params)?;
        let body: GuardianResponse = self.transport.get_json(url).await?;

        let inner = body.response.ok_or_else(|| SourceError::Malformed {
            provider,
            reason: "missing `response`".to_string(),
        })?;

        if inner.status.as_deref() == Some("error") {
            return Err(SourceError::Api {
                provider,
                message: inner
                    .message
                    .unwrap_or_else(|| "unspecified error".to_string()),
            });
        }

        let results = inner.results.ok_or_else(|| SourceError::Malformed {
            provider,
            reason: "missing `response.results`".to_string(),
        })?;

        Ok(RawPage {
            articles: results.into_iter().map(RawArticle::Guardian).collect(),
            total: inner.total,
        })
    }
}
