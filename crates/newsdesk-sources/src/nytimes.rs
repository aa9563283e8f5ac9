//! Adapter for the New York Times Top Stories and Article Search APIs.
//!
//! Top Stories has no paging: it returns a whole section, which the
//! aggregator slices locally. Article Search pages from zero and wants dates
//! as `YYYYMMDD`.

use newsdesk_core::{Provider, ProviderConfig};

use crate::error::SourceError;
use crate::normalize::{RawArticle, RawPage};
use crate::query::{SearchQuery, TopQuery};
use crate::transport::ApiTransport;
use crate::types::{NyTimesSearchResponse, NyTimesTopStoriesResponse};

const KEY_PARAM: &str = "api-key";
const FALLBACK_SECTION: &str = "home";
const DEFAULT_SORT: &str = "newest";
const SEARCH_ENDPOINT: &str = "search/v2/articlesearch.json";

pub struct NyTimesClient {
    transport: ApiTransport,
}

impl NyTimesClient {
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
    /// Same as [`NyTimesClient::new`].
    pub fn with_base_url(
        api_key: Option<&str>,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, SourceError> {
        let transport =
            ApiTransport::new(Provider::NyTimes, KEY_PARAM, api_key, timeout_secs, base_url)?;
        Ok(Self { transport })
    }

    /// Fetches the full top-stories feed for a section (`home` when none).
    ///
    /// The returned page is unsliced; `page` and `page_size` in `query` are
    /// not sent upstream.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] on transport failure, a non-2xx status, or a
    /// body without `results`.
    pub async fn fetch_top(&self, query: &TopQuery<'_>) -> Result<RawPage, SourceError> {
        let section = query.section.unwrap_or(FALLBACK_SECTION);
        let endpoint = format!("topstories/v2/{section}.json");

        let url = self.transport.build_url(&endpoint, &[])?;
        let body: NyTimesTopStoriesResponse = self.transport.get_json(url).await?;

        let results = body.results.ok_or_else(|| SourceError::Malformed {
            provider: self.transport.provider(),
            reason: "missing `results`".to_string(),
        })?;

        Ok(RawPage {
            articles: results.into_iter().map(RawArticle::NyTimesTopStory).collect(),
            total: body.num_results,
        })
    }

    /// Runs an article search. Category is not an Article Search parameter
    /// and is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] on transport failure, a non-2xx status, or a
    /// body without `response.docs`.
    pub async fn fetch_search(&self, query: &SearchQuery<'_>) -> Result<RawPage, SourceError> {
        let page = query.page.saturating_sub(1).to_string();
        let begin = query.from_date.map(compact_date);
        let end = query.to_date.map(compact_date);

        let mut params = vec![
            ("q", query.query),
            ("page", page.as_str()),
            ("sort", query.sort_by.unwrap_or(DEFAULT_SORT)),
        ];
        if let Some(begin) = begin.as_deref() {
            params.push(("begin_date", begin));
        }
        if let Some(end) = end.as_deref() {
            params.push(("end_date", end));
        }

        let url = self.transport.build_url(SEARCH_ENDPOINT, &params)?;
        let body: NyTimesSearchResponse = self.transport.get_json(url).await?;

        let malformed = |reason: &str| SourceError::Malformed {
            provider: self.transport.provider(),
            reason: reason.to_string(),
        };
        let response = body.response.ok_or_else(|| malformed("missing `response`"))?;
        let docs = response
            .docs
            .ok_or_else(|| malformed("missing `response.docs`"))?;

        Ok(RawPage {
            articles: docs.into_iter().map(RawArticle::NyTimesDoc).collect(),
            total: response.meta.and_then(|m| m.hits),
        })
    }
}

/// `2024-01-05` → `20240105`.
fn compact_date(date: &str) -> String {
    date.chars().filter(|c| *c != '-').collect()
}
