//! Per-provider ranking fetchers
//!
//! Every fetcher runs an ordered list of fallback strategies and never fails:
//! a provider that cannot be reached yields an empty [`SourceFetch`].

pub mod bpi;
pub mod compare;
pub mod extract;
pub mod html;
pub mod net;
pub mod polls;
pub mod strategy;
pub mod torvik;

#[cfg(test)]
pub(crate) mod test_support;

use reqwest::Client;

use crate::config::{Config, Endpoints};
use crate::data_fetcher::api::{create_http_client_with_timeout, resolve_season};
use crate::data_fetcher::models::RankingSource;
use crate::error::AppError;

pub use bpi::{fetch_bpi, fetch_bpi_with_page};
pub use compare::{fetch_compare_columns, load_compare_page, split_compare_columns};
pub use net::fetch_net;
pub use polls::{Poll, fetch_poll};
pub use strategy::{SourceFetch, StrategyAttempt};
pub use torvik::fetch_torvik;

/// Everything a fetcher needs: the shared client, provider base URLs and
/// the season year used in URLs.
#[derive(Debug, Clone)]
pub struct FetchContext {
    pub client: Client,
    pub endpoints: Endpoints,
    pub season: i32,
}

impl FetchContext {
    pub fn new(client: Client, endpoints: Endpoints, season: i32) -> Self {
        Self {
            client,
            endpoints,
            season,
        }
    }

    /// Builds the shared client and resolves the season from configuration
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::new(
            client,
            config.endpoints.clone(),
            resolve_season(config.season),
        ))
    }
}

/// Fetches a single provider. Column sources fetch the whole compare page
/// and keep only their own column.
pub async fn fetch_source(ctx: &FetchContext, source: RankingSource) -> SourceFetch {
    match source {
        RankingSource::Net => fetch_net(ctx).await,
        RankingSource::Bpi => fetch_bpi(ctx).await,
        RankingSource::Torvik => fetch_torvik(ctx).await,
        RankingSource::Ap => fetch_poll(ctx, Poll::Ap).await,
        RankingSource::Coaches => fetch_poll(ctx, Poll::Coaches).await,
        RankingSource::Pom
        | RankingSource::Sor
        | RankingSource::Kpi
        | RankingSource::Elo
        | RankingSource::Sag
        | RankingSource::Wab => fetch_compare_columns(ctx)
            .await
            .into_iter()
            .find(|fetch| fetch.source == source)
            .unwrap_or_else(|| SourceFetch::empty(source)),
    }
}
