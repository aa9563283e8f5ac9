//! Integration tests for `NewsApiClient` using wiremock HTTP mocks.

use newsdesk_core::Provider;
use newsdesk_sources::{to_common, NewsApiClient, SearchQuery, SourceError, TopQuery};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> NewsApiClient {
    NewsApiClient::with_base_url(Some("test-key"), 5, base_url)
        .expect("client construction should not fail")
}

fn top(section: Option<&'static str>, country: Option<&'static str>) -> TopQuery<'static> {
    TopQuery {
        section,
        country,
        page: 1,
        page_size: 10,
    }
}

fn headlines_body() -> serde_json::Value {
    serde_json::json!({
        "status": "ok",
        "totalResults": 38,
        "articles": [
            {
                "source": {"id": "bbc-news", "name": "BBC News"},
                "author": "BBC",
                "title": "First headline",
                "description": "First description",
                "url": "https://bbc.example/1",
                "urlToImage": "https://bbc.example/1.jpg",
                "publishedAt": "2024-01-05T10:00:00Z",
                "content": "First content"
            },
            {
                "source": {"id": null, "name": "Reuters"},
                "author": null,
                "title": "Second headline",
                "description": null,
                "url": "https://reuters.example/2",
                "urlToImage": null,
                "publishedAt": "2024-01-05T09:00:00Z",
                "content": null
            }
        ]
    })
}

#[tokio::test]
async fn top_headlines_default_country_and_paging() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .and(query_param("apiKey", "test-key"))
        .and(query_param("country", "us"))
        .and(query_param("pageSize", "10"))
        .and(query_param("page", "1"))
        .and(query_param_is_missing("category"))
        .respond_with(ResponseTemplate::new(200).set_body_json(headlines_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let page = client
        .fetch_top(&top(None, None))
        .await
        .expect("should parse headlines");

    assert_eq!(page.total, Some(38));
    assert_eq!(page.articles.len(), 2);

    let articles: Vec<_> = page.articles.into_iter().map(to_common).collect();
    assert_eq!(articles[0].source.id, Provider::NewsApi);
    assert_eq!(articles[0].source.name, "BBC News");
    assert_eq!(articles[1].source.name, "Reuters");
    assert!(articles[1].author.is_none());
}

#[tokio::test]
async fn top_headlines_sends_category_and_country() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .and(query_param("category", "technology"))
        .and(query_param("country", "gb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(headlines_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    client
        .fetch_top(&top(Some("technology"), Some("gb")))
        .await
        .expect("should parse headlines");
}

#[tokio::test]
async fn search_sends_language_sort_and_raw_dates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/everything"))
        .and(query_param("q", "climate"))
        .and(query_param("language", "en"))
        .and(query_param("sortBy", "publishedAt"))
        .and(query_param("from", "2024-01-05"))
        .and(query_param("to", "2024-01-10"))
        .and(query_param("page", "2"))
        .and(query_param_is_missing("category"))
        .respond_with(ResponseTemplate::new(200).set_body_json(headlines_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let query = SearchQuery {
        query: "climate",
        page: 2,
        page_size: 10,
        sort_by: None,
        from_date: Some("2024-01-05"),
        to_date: Some("2024-01-10"),
        section: Some("science"),
    };
    let page = client.fetch_search(&query).await.expect("should parse search");
    assert_eq!(page.articles.len(), 2);
}

#[tokio::test]
async fn error_envelope_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "error",
            "code": "apiKeyInvalid",
            "message": "Your API key is invalid or incorrect."
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_top(&top(None, None)).await.unwrap_err();
    assert!(
        matches!(err, SourceError::Api { ref message, .. } if message.contains("invalid")),
        "expected Api error, got: {err:?}"
    );
}

#[tokio::test]
async fn missing_articles_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_top(&top(None, None)).await.unwrap_err();
    assert!(matches!(err, SourceError::Malformed { .. }), "got: {err:?}");
}

#[tokio::test]
async fn server_error_is_unexpected_status_without_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_top(&top(None, None)).await.unwrap_err();
    assert!(
        matches!(err, SourceError::UnexpectedStatus { status: 500, .. }),
        "got: {err:?}"
    );
    assert!(!err.to_string().contains("test-key"));
}

#[tokio::test]
async fn unauthorized_with_envelope_is_api_error_with_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "status": "error",
            "code": "apiKeyInvalid",
            "message": "Your API key is invalid or incorrect."
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_top(&top(None, None)).await.unwrap_err();
    assert!(
        matches!(
            err,
            SourceError::Api { ref message, .. }
                if message.contains("Your API key is invalid") && message.contains("HTTP 401")
        ),
        "expected Api error, got: {err:?}"
    );
    assert!(!err.to_string().contains("test-key"));
}
