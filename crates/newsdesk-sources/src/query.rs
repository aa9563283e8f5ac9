//! Resolved per-call parameters handed from the aggregator to an adapter.
//!
//! By the time one of these exists, the provider is chosen, the category has
//! been mapped to the provider's native section, and paging defaults applied.

/// Parameters for a top-headlines fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopQuery<'a> {
    pub section: Option<&'a str>,
    pub country: Option<&'a str>,
    /// One-indexed.
    pub page: u32,
    pub page_size: u32,
}

/// Parameters for a keyword search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchQuery<'a> {
    pub query: &'a str,
    /// One-indexed.
    pub page: u32,
    pub page_size: u32,
    pub sort_by: Option<&'a str>,
    /// `YYYY-MM-DD`.
    pub from_date: Option<&'a str>,
    /// `YYYY-MM-DD`.
    pub to_date: Option<&'a str>,
    pub section: Option<&'a str>,
}
