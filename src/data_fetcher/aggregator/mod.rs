//! Fan-out over all providers and merge into a [`RankingsData`] snapshot
//!
//! [`RankingsData`]: crate::data_fetcher::models::RankingsData

pub mod merge;
pub mod orchestrator;

pub use merge::build_rankings;
pub use orchestrator::{aggregate, fetch_all_sources};
