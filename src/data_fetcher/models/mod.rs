pub mod rankings;
pub mod sources;

pub use rankings::{RankingsData, SourceRecord, SourceStatus, TeamRanking};
pub use sources::{RankingSource, SOURCES, SourceConfig};
