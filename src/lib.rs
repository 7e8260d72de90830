//! Composite men's college basketball rankings
//!
//! This library fetches team rankings from eleven providers (NET, KenPom,
//! Torvik, ESPN BPI, SOR, KPI, ELO, Sagarin, WAB and the AP and Coaches
//! polls), reconciles the providers' team spellings against one canonical
//! roster and scores every team with a weighted percentile composite.
//!
//! # Examples
//!
//! ```rust,no_run
//! use cbb_rankings::config::Config;
//! use cbb_rankings::data_fetcher::cache::MemoryCache;
//! use cbb_rankings::data_fetcher::models::RankingSource;
//! use cbb_rankings::data_fetcher::scrapers::FetchContext;
//! use cbb_rankings::error::AppError;
//! use cbb_rankings::service::RankingsService;
//! use cbb_rankings::composite::compute_composite;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let service = RankingsService::new(FetchContext::from_config(&config)?, MemoryCache::default());
//!
//!     let response = service.get_or_fetch().await;
//!     let data = response.require_teams()?;
//!
//!     // Re-score using only the computer rankings
//!     let teams = compute_composite(&data.teams, &[RankingSource::Net, RankingSource::Torvik]);
//!     for team in teams.iter().take(10) {
//!         println!("{:<24} {:?}", team.team, team.composite);
//!     }
//!     Ok(())
//! }
//! ```

pub mod composite;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod report;
pub mod service;

// Re-export commonly used types for convenience
pub use composite::{CompositeCalculator, compute_composite};
pub use config::Config;
pub use data_fetcher::aggregator::aggregate;
pub use data_fetcher::models::{RankingSource, RankingsData, SourceStatus, TeamRanking};
pub use error::AppError;
pub use service::{RankingsResponse, RankingsService};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
