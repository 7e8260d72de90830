//! Concurrent fan-out over every provider

use futures::future::join_all;
use tracing::{info, instrument};

use super::merge::build_rankings;
use crate::data_fetcher::models::{RankingSource, RankingsData};
use crate::data_fetcher::scrapers::{
    FetchContext, SourceFetch, fetch_bpi_with_page, fetch_source, load_compare_page,
    split_compare_columns,
};

/// Providers with their own fetcher. BPI and the remaining full rankings
/// read the compare-rankings page, which is loaded once and shared.
const STANDALONE_SOURCES: [RankingSource; 4] = [
    RankingSource::Net,
    RankingSource::Torvik,
    RankingSource::Ap,
    RankingSource::Coaches,
];

/// Runs every fetcher concurrently and waits for all of them to settle.
///
/// # Returns
/// * `Vec<SourceFetch>` - One entry per provider, in priority order
pub async fn fetch_all_sources(ctx: &FetchContext) -> Vec<SourceFetch> {
    let standalone = join_all(
        STANDALONE_SOURCES
            .into_iter()
            .map(|source| fetch_source(ctx, source)),
    );
    let compare_sources = async {
        let page = load_compare_page(ctx).await;
        let bpi = fetch_bpi_with_page(ctx, page.as_deref()).await;
        let mut columns = split_compare_columns(page.as_deref());
        columns.push(bpi);
        columns
    };
    let (mut fetches, columns) = futures::join!(standalone, compare_sources);

    fetches.extend(columns);
    fetches.sort_by_key(|fetch| fetch.source);
    fetches
}

/// Fetches every provider and merges the results into one snapshot.
///
/// Never fails: providers that could not be reached are reported through
/// `source_status`, and an empty `teams` list means no roster was available.
///
/// # Example
/// ```rust,no_run
/// use cbb_rankings::config::Config;
/// use cbb_rankings::data_fetcher::aggregator::aggregate;
/// use cbb_rankings::data_fetcher::scrapers::FetchContext;
///
/// #[tokio::main]
/// async fn main() -> Result<(), cbb_rankings::AppError> {
///     let config = Config::load().await?;
///     let ctx = FetchContext::from_config(&config)?;
///     let data = aggregate(&ctx).await;
///     println!("{} teams, {}", data.teams.len(), data.status_summary());
///     Ok(())
/// }
/// ```
#[instrument(skip(ctx), fields(season = ctx.season))]
pub async fn aggregate(ctx: &FetchContext) -> RankingsData {
    info!("Starting aggregation across {} sources", RankingSource::ALL.len());

    let fetches = fetch_all_sources(ctx).await;
    let data = build_rankings(&fetches);

    info!(
        "Aggregation finished: {} teams, {}/{} sources succeeded",
        data.teams.len(),
        data.successful_source_count(),
        RankingSource::ALL.len()
    );
    data
}
