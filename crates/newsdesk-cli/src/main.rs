mod news;

use clap::{CommandFactory, Parser, Subcommand};
use newsdesk_core::{SearchRequest, TopNewsRequest};
use newsdesk_sources::Aggregator;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "newsdesk")]
#[command(about = "Top headlines and search across NewsAPI, the New York Times, and the Guardian")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show top headlines from one source
    Top {
        /// Source id: newsapi, nytimes, or guardian (defaults to the configured top source)
        #[arg(long)]
        source: Option<String>,
        /// Category, e.g. technology or sports
        #[arg(long)]
        category: Option<String>,
        /// Two-letter country code (`NewsAPI` only)
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        page_size: Option<u32>,
        #[arg(long)]
        page: Option<u32>,
        /// Print the raw response as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search articles by keyword
    Search {
        query: String,
        /// Source id (defaults to the configured search source)
        #[arg(long)]
        source: Option<String>,
        /// Earliest publication date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Latest publication date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Provider-native sort order, e.g. newest or relevance
        #[arg(long)]
        sort_by: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        page_size: Option<u32>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        json: bool,
    },
    /// List supported sources
    Sources,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
        Some(Commands::Sources) => {
            news::run_sources();
            Ok(())
        }
        Some(Commands::Top {
            source,
            category,
            country,
            page_size,
            page,
            json,
        }) => {
            let aggregator = build_aggregator()?;
            let request = TopNewsRequest {
                provider: source,
                category,
                country,
                page_size,
                page,
            };
            news::run_top(&aggregator, &request, json).await
        }
        Some(Commands::Search {
            query,
            source,
            from,
            to,
            sort_by,
            category,
            page_size,
            page,
            json,
        }) => {
            if query.trim().is_empty() {
                anyhow::bail!("search query must not be empty");
            }
            let aggregator = build_aggregator()?;
            let request = SearchRequest {
                provider: source,
                query,
                page_size,
                page,
                from_date: from,
                to_date: to,
                sort_by,
                category,
            };
            news::run_search(&aggregator, &request, json).await
        }
    }
}

/// Loads configuration, installs logging, and builds the provider clients.
fn build_aggregator() -> anyhow::Result<Aggregator> {
    let config = newsdesk_core::load_app_config()?;

    // Logs go to stderr so `--json` output stays pipeable.
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        env = %config.env,
        top = %config.default_top_provider,
        search = %config.default_search_provider,
        "configuration loaded"
    );

    Ok(Aggregator::new(&config)?)
}

#[cfg(test)]
mod tests;
