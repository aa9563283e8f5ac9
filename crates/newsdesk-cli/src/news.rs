//! Handlers for `top`, `search`, and `sources`, plus plain-text rendering.

use chrono::{DateTime, Utc};
use newsdesk_core::{
    calculate_read_time, format_relative_time, AggregatedResponse, CommonArticle, Provider,
    SearchRequest, TopNewsRequest, DEFAULT_IMAGE_URL,
};
use newsdesk_sources::Aggregator;

const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// # Errors
///
/// Returns an error if the source name is unsupported or JSON encoding fails.
pub(crate) async fn run_top(
    aggregator: &Aggregator,
    request: &TopNewsRequest,
    json: bool,
) -> anyhow::Result<()> {
    let response = aggregator.fetch_top_news(request).await?;
    print_response(&response, json)
}

/// # Errors
///
/// Returns an error if the source name is unsupported or JSON encoding fails.
pub(crate) async fn run_search(
    aggregator: &Aggregator,
    request: &SearchRequest,
    json: bool,
) -> anyhow::Result<()> {
    let response = aggregator.search_all_news(request).await?;
    print_response(&response, json)
}

pub(crate) fn run_sources() {
    println!("{:<10}NAME", "ID");
    for provider in Provider::ALL {
        println!("{:<10}{}", provider.id(), provider.display_name());
    }
}

fn print_response(response: &AggregatedResponse, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
    } else {
        println!("{}", render_response(response, Utc::now()));
    }
    Ok(())
}

/// Renders a response as plain text. A partial failure renders as a single
/// notice line instead of an article list.
pub(crate) fn render_response(response: &AggregatedResponse, now: DateTime<Utc>) -> String {
    let provider = response.provider.display_name();

    if response.is_partial_failure() {
        return format!("{provider} is temporarily unavailable");
    }
    if response.articles.is_empty() {
        return format!("no articles found from {provider}");
    }

    let mut lines = vec![format!(
        "{provider}: showing {} of {} results",
        response.articles.len(),
        response.total_results
    )];
    for (i, article) in response.articles.iter().enumerate() {
        lines.push(String::new());
        lines.extend(render_article(i + 1, article, now));
    }
    lines.join("\n")
}

fn render_article(index: usize, article: &CommonArticle, now: DateTime<Utc>) -> [String; 5] {
    let author = article.author.as_deref().unwrap_or(UNKNOWN_AUTHOR);
    let image = article.url_to_image.as_deref().unwrap_or(DEFAULT_IMAGE_URL);
    [
        format!("{index}. {}", article.title),
        format!(
            "   {} | {} | {}",
            article.source.name,
            format_relative_time(&article.published_at, now),
            calculate_read_time(article.content.as_deref())
        ),
        format!("   by {author}"),
        format!("   {}", article.url),
        format!("   image: {image}"),
    ]
}
