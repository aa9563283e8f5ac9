//! Wire types for the three upstream APIs.
//!
//! Each struct mirrors one vendor's JSON. Wrapper fields the adapters must
//! check (`articles`, `results`, `response.docs`) are `Option` so a body that
//! parses but lacks them can be reported as malformed rather than failing
//! with a generic serde message.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Reads an optional field whose upstream shape is unreliable. A value that
/// does not fit `T` (NYT sends `"multimedia": ""` and `"byline": []`) becomes
/// `None` so one odd article cannot fail the whole page.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

// ---------------------------------------------------------------------------
// NewsAPI: /top-headlines and /everything
// ---------------------------------------------------------------------------

/// Envelope shared by both NewsAPI endpoints.
///
/// On failure NewsAPI sends `{"status": "error", "code": ..., "message": ...}`
/// with no `articles`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsApiResponse {
    pub status: Option<String>,
    pub total_results: Option<u64>,
    pub articles: Option<Vec<NewsApiArticle>>,
    pub code: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsApiArticle {
    pub source: Option<NewsApiSource>,
    pub author: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub url_to_image: Option<String>,
    pub published_at: String,
    pub content: Option<String>,
}

/// The publisher NewsAPI syndicated the article from (e.g. "BBC News").
#[derive(Debug, Clone, Deserialize)]
pub struct NewsApiSource {
    pub id: Option<String>,
    pub name: Option<String>,
}

// ---------------------------------------------------------------------------
// New York Times: shared
// ---------------------------------------------------------------------------

/// One entry of a `multimedia` array. Top stories carry absolute URLs;
/// article search carries paths relative to `https://www.nytimes.com/`.
#[derive(Debug, Clone, Deserialize)]
pub struct NyTimesMedia {
    pub url: String,
    pub format: Option<String>,
    pub subtype: Option<String>,
    pub caption: Option<String>,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

// ---------------------------------------------------------------------------
// New York Times: /topstories/v2/{section}.json
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct NyTimesTopStoriesResponse {
    pub status: Option<String>,
    pub section: Option<String>,
    pub num_results: Option<u64>,
    pub results: Option<Vec<NyTimesTopStory>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NyTimesTopStory {
    pub section: Option<String>,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub url: String,
    pub byline: Option<String>,
    pub published_date: String,
    #[serde(default, deserialize_with = "lenient")]
    pub multimedia: Option<Vec<NyTimesMedia>>,
}

// ---------------------------------------------------------------------------
// New York Times: /search/v2/articlesearch.json
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct NyTimesSearchResponse {
    pub status: Option<String>,
    pub response: Option<NyTimesSearchBody>,
}

#[derive(Debug, Deserialize)]
pub struct NyTimesSearchBody {
    pub docs: Option<Vec<NyTimesDoc>>,
    pub meta: Option<NyTimesSearchMeta>,
}

/// `hits` is the total match count across all pages.
#[derive(Debug, Deserialize)]
pub struct NyTimesSearchMeta {
    pub hits: Option<u64>,
    pub offset: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NyTimesDoc {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub web_url: String,
    pub snippet: Option<String>,
    pub lead_paragraph: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub multimedia: Option<Vec<NyTimesMedia>>,
    pub headline: NyTimesHeadline,
    pub pub_date: String,
    #[serde(default, deserialize_with = "lenient")]
    pub byline: Option<NyTimesByline>,
    pub section_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NyTimesHeadline {
    pub main: String,
    pub kicker: Option<String>,
}

/// `original` is the printable credit line, e.g. "By Jane Doe".
#[derive(Debug, Clone, Deserialize)]
pub struct NyTimesByline {
    pub original: Option<String>,
}

// ---------------------------------------------------------------------------
// Guardian: /search
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct GuardianResponse {
    pub response: Option<GuardianBody>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardianBody {
    pub status: Option<String>,
    pub message: Option<String>,
    pub total: Option<u64>,
    pub current_page: Option<u32>,
    pub pages: Option<u32>,
    pub results: Option<Vec<GuardianArticle>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardianArticle {
    pub id: Option<String>,
    pub section_id: Option<String>,
    pub web_publication_date: String,
    pub web_title: String,
    pub web_url: String,
    pub fields: Option<GuardianFields>,
}

/// Sub-fields requested through `show-fields`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardianFields {
    pub headline: Option<String>,
    pub trail_text: Option<String>,
    pub byline: Option<String>,
    pub short_url: Option<String>,
    pub thumbnail: Option<String>,
    pub body: Option<String>,
    pub standfirst: Option<String>,
}
