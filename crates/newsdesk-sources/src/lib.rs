//! Provider adapters and the aggregator for newsdesk.
//!
//! Each adapter (`NewsAPI`, the New York Times, the Guardian) turns one
//! vendor's REST API into a [`RawPage`] of [`RawArticle`]s. The
//! [`Aggregator`] picks an adapter per request and returns a normalized
//! [`newsdesk_core::AggregatedResponse`].

pub mod aggregator;
pub mod error;
pub mod guardian;
pub mod newsapi;
pub mod normalize;
pub mod nytimes;
pub mod query;
mod transport;
pub mod types;

pub use aggregator::Aggregator;
pub use error::{AggregatorError, SourceError};
pub use guardian::GuardianClient;
pub use newsapi::NewsApiClient;
pub use normalize::{to_common, RawArticle, RawPage};
pub use nytimes::NyTimesClient;
pub use query::{SearchQuery, TopQuery};
