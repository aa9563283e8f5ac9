//! Canonical category → provider-native section tables.
//!
//! One static table per provider. A category without an entry maps to
//! `None`, which the adapters read as "send no section and let the upstream
//! pick its default".

use crate::types::{Category, Provider};

const NEWSAPI_SECTIONS: &[(Category, &str)] = &[
    (Category::Business, "business"),
    (Category::Entertainment, "entertainment"),
    (Category::Health, "health"),
    (Category::Science, "science"),
    (Category::Sports, "sports"),
    (Category::Technology, "technology"),
];

const NYTIMES_SECTIONS: &[(Category, &str)] = &[
    (Category::Business, "business"),
    (Category::Entertainment, "arts"),
    (Category::Health, "health"),
    (Category::Science, "science"),
    (Category::Sports, "sports"),
    (Category::Technology, "technology"),
    (Category::Politics, "politics"),
];

const GUARDIAN_SECTIONS: &[(Category, &str)] = &[
    (Category::Business, "business"),
    (Category::Entertainment, "culture"),
    (Category::Health, "society"),
    (Category::Science, "science"),
    (Category::Sports, "sport"),
    (Category::Technology, "technology"),
    (Category::Politics, "politics"),
];

fn table(provider: Provider) -> &'static [(Category, &'static str)] {
    match provider {
        Provider::NewsApi => NEWSAPI_SECTIONS,
        Provider::NyTimes => NYTIMES_SECTIONS,
        Provider::Guardian => GUARDIAN_SECTIONS,
    }
}

/// Resolves a caller-supplied category name to the provider's section.
///
/// Case-insensitive on the canonical key. Unknown or unmapped categories
/// return `None`; this is never an error.
#[must_use]
pub fn section_for(provider: Provider, raw_category: Option<&str>) -> Option<&'static str> {
    let category = Category::parse(raw_category?)?;
    table(provider)
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, section)| *section)
}

/// The section a provider falls back to when no category resolves.
///
/// Only the New York Times top-stories feed needs an explicit one; the other
/// providers simply omit the parameter.
#[must_use]
pub fn default_section(provider: Provider) -> Option<&'static str> {
    match provider {
        Provider::NyTimes => Some("home"),
        Provider::NewsApi | Provider::Guardian => None,
    }
}
