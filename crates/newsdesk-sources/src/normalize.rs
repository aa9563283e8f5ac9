//! Conversion of provider articles into [`CommonArticle`].
//!
//! Raw articles travel as the closed [`RawArticle`] enum; [`to_common`] is
//! one `match` over it. Every provider field lands in exactly one common
//! field, and upstream blanks become `None` rather than placeholder text.

use newsdesk_core::{ArticleSource, CommonArticle, Provider};

use crate::types::{GuardianArticle, NewsApiArticle, NyTimesDoc, NyTimesMedia, NyTimesTopStory};

/// Prefix for the relative image paths returned by NYT article search.
pub const NYTIMES_IMAGE_BASE: &str = "https://www.nytimes.com/";

/// One article exactly as a provider returned it.
#[derive(Debug, Clone)]
pub enum RawArticle {
    NewsApi(NewsApiArticle),
    NyTimesTopStory(NyTimesTopStory),
    NyTimesDoc(NyTimesDoc),
    Guardian(GuardianArticle),
}

impl RawArticle {
    #[must_use]
    pub fn provider(&self) -> Provider {
        match self {
            RawArticle::NewsApi(_) => Provider::NewsApi,
            RawArticle::NyTimesTopStory(_) | RawArticle::NyTimesDoc(_) => Provider::NyTimes,
            RawArticle::Guardian(_) => Provider::Guardian,
        }
    }
}

/// One page of raw articles plus the provider's own total, if it reported one.
#[derive(Debug, Clone)]
pub struct RawPage {
    pub articles: Vec<RawArticle>,
    pub total: Option<u64>,
}

impl RawPage {
    /// Keeps `articles[(page-1)*page_size .. page*page_size]`, clamped to the
    /// available items. Used for feeds that return a whole section at once.
    #[must_use]
    pub fn paginate(mut self, page: u32, page_size: u32) -> Self {
        let size = page_size as usize;
        let start = (page.saturating_sub(1) as usize).saturating_mul(size);
        if start >= self.articles.len() {
            self.articles.clear();
            return self;
        }
        let end = start.saturating_add(size).min(self.articles.len());
        self.articles = self.articles.drain(start..end).collect();
        self
    }
}

/// Maps a provider article onto the common shape.
#[must_use]
pub fn to_common(raw: RawArticle) -> CommonArticle {
    match raw {
        RawArticle::NewsApi(article) => from_newsapi(article),
        RawArticle::NyTimesTopStory(story) => from_nytimes_top_story(story),
        RawArticle::NyTimesDoc(doc) => from_nytimes_doc(doc),
        RawArticle::Guardian(article) => from_guardian(article),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn provider_source(provider: Provider) -> ArticleSource {
    ArticleSource {
        id: provider,
        name: provider.display_name().to_string(),
    }
}

fn first_media_url(media: Option<&[NyTimesMedia]>) -> Option<&str> {
    media?
        .first()
        .map(|m| m.url.as_str())
        .filter(|url| !url.trim().is_empty())
}

/// `source.name` is the syndicated publisher ("BBC News"), not NewsAPI, and
/// is kept for display. Only a missing or blank name falls back to "NewsAPI".
fn from_newsapi(article: NewsApiArticle) -> CommonArticle {
    let name = non_empty(article.source.and_then(|s| s.name))
        .unwrap_or_else(|| Provider::NewsApi.display_name().to_string());

    CommonArticle {
        source: ArticleSource {
            id: Provider::NewsApi,
            name,
        },
        author: non_empty(article.author),
        title: article.title,
        description: non_empty(article.description),
        url: article.url,
        url_to_image: non_empty(article.url_to_image),
        published_at: article.published_at,
        content: non_empty(article.content),
    }
}

fn from_nytimes_top_story(story: NyTimesTopStory) -> CommonArticle {
    let url_to_image = first_media_url(story.multimedia.as_deref()).map(str::to_owned);
    let summary = non_empty(story.abstract_text);

    CommonArticle {
        source: provider_source(Provider::NyTimes),
        author: non_empty(story.byline),
        title: story.title,
        description: summary.clone(),
        url: story.url,
        url_to_image,
        published_at: story.published_date,
        content: summary,
    }
}

fn from_nytimes_doc(doc: NyTimesDoc) -> CommonArticle {
    let url_to_image = first_media_url(doc.multimedia.as_deref()).map(|path| {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_owned()
        } else {
            format!("{NYTIMES_IMAGE_BASE}{}", path.trim_start_matches('/'))
        }
    });

    CommonArticle {
        source: provider_source(Provider::NyTimes),
        author: non_empty(doc.byline.and_then(|b| b.original)),
        title: doc.headline.main,
        description: non_empty(doc.abstract_text).or_else(|| non_empty(doc.snippet)),
        url: doc.web_url,
        url_to_image,
        published_at: doc.pub_date,
        content: non_empty(doc.lead_paragraph),
    }
}

fn from_guardian(article: GuardianArticle) -> CommonArticle {
    let fields = article.fields.unwrap_or_default();

    CommonArticle {
        source: provider_source(Provider::Guardian),
        author: non_empty(fields.byline),
        title: article.web_title,
        description: non_empty(fields.trail_text).or_else(|| non_empty(fields.standfirst)),
        url: article.web_url,
        url_to_image: non_empty(fields.thumbnail),
        published_at: article.web_publication_date,
        content: non_empty(fields.body),
    }
}
