pub mod aggregator;
pub mod api;
pub mod cache;
pub mod models;
pub mod scrapers;
pub mod team_names;

pub use aggregator::{aggregate, build_rankings};
pub use models::{RankingSource, RankingsData, SourceRecord, SourceStatus, TeamRanking};
pub use scrapers::FetchContext;
