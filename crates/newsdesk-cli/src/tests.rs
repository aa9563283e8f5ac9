use chrono::{TimeZone, Utc};
use newsdesk_core::{
    AggregatedResponse, ArticleSource, CommonArticle, FailureKind, FetchFailure, Provider,
};

use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["newsdesk"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_sources_command() {
    let cli = Cli::try_parse_from(["newsdesk", "sources"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Sources)));
}

#[test]
fn top_without_flags_leaves_everything_to_defaults() {
    let cli = Cli::try_parse_from(["newsdesk", "top"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Top {
            source: None,
            category: None,
            country: None,
            page_size: None,
            page: None,
            json: false,
        })
    ));
}

#[test]
fn top_with_source_category_and_paging() {
    let cli = Cli::try_parse_from([
        "newsdesk",
        "top",
        "--source",
        "nytimes",
        "--category",
        "entertainment",
        "--page-size",
        "5",
        "--page",
        "2",
        "--json",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Top {
            source: Some(ref s),
            category: Some(ref c),
            page_size: Some(5),
            page: Some(2),
            json: true,
            ..
        }) if s == "nytimes" && c == "entertainment"
    ));
}

#[test]
fn search_requires_query() {
    assert!(Cli::try_parse_from(["newsdesk", "search"]).is_err());
}

#[test]
fn search_with_date_range_and_sort() {
    let cli = Cli::try_parse_from([
        "newsdesk",
        "search",
        "climate change",
        "--from",
        "2024-01-05",
        "--to",
        "2024-01-10",
        "--sort-by",
        "relevance",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Search {
            ref query,
            from: Some(ref from),
            to: Some(ref to),
            sort_by: Some(ref sort),
            source: None,
            ..
        }) if query == "climate change" && from == "2024-01-05" && to == "2024-01-10" && sort == "relevance"
    ));
}

#[test]
fn page_size_must_be_a_number() {
    assert!(Cli::try_parse_from(["newsdesk", "top", "--page-size", "ten"]).is_err());
}

fn article(author: Option<&str>, content: Option<&str>) -> CommonArticle {
    CommonArticle {
        source: ArticleSource {
            id: Provider::Guardian,
            name: "The Guardian".to_string(),
        },
        author: author.map(str::to_string),
        title: "Heatwave grips Europe".to_string(),
        description: None,
        url: "https://www.theguardian.com/a".to_string(),
        url_to_image: None,
        published_at: "2024-01-05T10:00:00Z".to_string(),
        content: content.map(str::to_string),
    }
}

#[test]
fn render_shows_article_details() {
    let now = Utc.with_ymd_and_hms(2024, 1, 5, 13, 0, 0).unwrap();
    let response = AggregatedResponse {
        articles: vec![article(Some("Jane Doe"), Some("word ".repeat(300).trim()))],
        total_results: 42,
        provider: Provider::Guardian,
        error: None,
    };

    let text = news::render_response(&response, now);
    assert!(text.contains("The Guardian: showing 1 of 42 results"));
    assert!(text.contains("1. Heatwave grips Europe"));
    assert!(text.contains("3 hours ago"));
    assert!(text.contains("2 min read"));
    assert!(text.contains("by Jane Doe"));
    assert!(text.contains("https://www.theguardian.com/a"));
}

#[test]
fn render_uses_placeholder_author() {
    let now = Utc.with_ymd_and_hms(2024, 1, 5, 13, 0, 0).unwrap();
    let response = AggregatedResponse {
        articles: vec![article(None, None)],
        total_results: 1,
        provider: Provider::Guardian,
        error: None,
    };

    let text = news::render_response(&response, now);
    assert!(text.contains("by Unknown Author"));
    assert!(text.contains("1 min read"));
    assert!(text.contains(&format!("image: {}", newsdesk_core::DEFAULT_IMAGE_URL)));
}

#[test]
fn render_partial_failure_as_notice() {
    let response = AggregatedResponse::failed(
        Provider::NyTimes,
        FetchFailure {
            kind: FailureKind::UpstreamUnavailable,
            message: "HTTP error: timed out".to_string(),
        },
    );

    let text = news::render_response(&response, Utc::now());
    assert_eq!(text, "The New York Times is temporarily unavailable");
}
