//! Aggregation of extracted signals into one canonical summary per product
//! and indication, plus the SEO strategy that follows from it.

pub mod domain;
pub mod markets;
mod messaging;
mod strategy;
mod summary;
mod terms;

pub use domain::{DevelopmentStage, MarketPosition, ResearchContext};
pub use markets::{
    localization_focus, resolve_market, summarize_market, summarize_markets,
    GeographicMarketSummary, ResolvedMarket,
};
pub use messaging::{content_focus, key_messages, target_audience};
pub use strategy::{GeoStrategy, KeywordStrategy, MarketLocalization, SeoStrategy};
pub use summary::IntelligenceSummary;
pub use terms::{geo_specific_terms, hcp_search_terms, patient_search_terms};
