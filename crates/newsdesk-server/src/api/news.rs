use axum::{
    extract::{Query, State},
    Extension, Json,
};
use newsdesk_core::{AggregatedResponse, SearchRequest, TopNewsRequest};
use newsdesk_sources::AggregatorError;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

/// The search page's "All" pseudo-category.
const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Deserialize)]
pub(super) struct TopNewsParams {
    pub source: Option<String>,
    pub category: Option<String>,
    pub country: Option<String>,
    pub page_size: Option<u32>,
    pub page: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub(super) struct SearchParams {
    pub query: Option<String>,
    pub source: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub sort_by: Option<String>,
    pub category: Option<String>,
    pub page_size: Option<u32>,
    pub page: Option<u32>,
}

pub(super) async fn top_news(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<TopNewsParams>,
) -> Result<Json<ApiResponse<AggregatedResponse>>, ApiError> {
    let request = TopNewsRequest {
        provider: params.source,
        category: specific_category(params.category),
        country: params.country,
        page_size: params.page_size,
        page: params.page,
    };

    let data = state
        .aggregator
        .fetch_top_news(&request)
        .await
        .map_err(|e| map_aggregator_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn search_news(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<AggregatedResponse>>, ApiError> {
    let query = params
        .query
        .map(|q| q.trim().to_owned())
        .filter(|q| !q.is_empty())
        .ok_or_else(|| {
            ApiError::new(
                req_id.0.clone(),
                "validation_error",
                "query must not be empty",
            )
        })?;

    let request = SearchRequest {
        provider: params.source,
        query,
        page_size: params.page_size,
        page: params.page,
        from_date: params.from,
        to_date: params.to,
        sort_by: params.sort_by,
        category: specific_category(params.category),
    };

    let data = state
        .aggregator
        .search_all_news(&request)
        .await
        .map_err(|e| map_aggregator_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// Drops the "All" pseudo-category so the provider default applies.
fn specific_category(category: Option<String>) -> Option<String> {
    category.filter(|c| !c.trim().eq_ignore_ascii_case(ALL_CATEGORIES))
}

fn map_aggregator_error(request_id: String, error: &AggregatorError) -> ApiError {
    match error {
        AggregatorError::UnsupportedProvider(_) => {
            ApiError::new(request_id, "unsupported_provider", error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_category_is_dropped() {
        assert_eq!(specific_category(Some("All".to_string())), None);
        assert_eq!(specific_category(Some("all".to_string())), None);
        assert_eq!(
            specific_category(Some("sports".to_string())).as_deref(),
            Some("sports")
        );
        assert_eq!(specific_category(None), None);
    }

    #[test]
    fn unsupported_provider_maps_to_its_own_code() {
        let err = map_aggregator_error(
            "req-1".to_string(),
            &AggregatorError::UnsupportedProvider("bogus".to_string()),
        );
        assert_eq!(err.error.code, "unsupported_provider");
        assert!(err.error.message.contains("bogus"));
    }
}
