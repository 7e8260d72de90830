//! Refresh entry points combining the aggregator, the cache and the
//! composite calculator

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::composite::compute_composite;
use crate::constants::report::DIAGNOSTIC_SAMPLE_SIZE;
use crate::data_fetcher::aggregator::{aggregate, fetch_all_sources};
use crate::data_fetcher::cache::RankingsCache;
use crate::data_fetcher::models::{RankingSource, RankingsData, SourceRecord, SourceStatus};
use crate::data_fetcher::scrapers::{FetchContext, SourceFetch, StrategyAttempt};
use crate::data_fetcher::team_names::{CanonicalRoster, StaleAlias, audit_aliases};
use crate::error::AppError;

/// What a refresh hands to the presentation layer.
///
/// `data.teams` carries composite scores over every source, sorted by
/// composite.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingsResponse {
    pub data: RankingsData,
    /// Age of the served snapshot; 0 for a fresh aggregation
    pub cache_age_ms: u64,
    pub from_cache: bool,
}

impl RankingsResponse {
    /// Fails with [`AppError::NoRankingData`] when no roster could be built
    pub fn require_teams(&self) -> Result<&RankingsData, AppError> {
        if self.data.has_teams() {
            Ok(&self.data)
        } else {
            Err(AppError::no_ranking_data(self.data.status_summary()))
        }
    }
}

/// Per-source diagnostics from one fetch round
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDiagnostic {
    pub source: RankingSource,
    pub status: SourceStatus,
    pub count: usize,
    /// First few records as fetched
    pub sample: Vec<SourceRecord>,
    pub strategy: Option<&'static str>,
    pub failures: Vec<StrategyAttempt>,
}

impl From<SourceFetch> for SourceDiagnostic {
    fn from(fetch: SourceFetch) -> Self {
        let status = if fetch.is_success() {
            SourceStatus::Success
        } else {
            SourceStatus::Error
        };
        Self {
            source: fetch.source,
            status,
            count: fetch.records.len(),
            sample: fetch
                .records
                .into_iter()
                .take(DIAGNOSTIC_SAMPLE_SIZE)
                .collect(),
            strategy: fetch.strategy,
            failures: fetch.failures,
        }
    }
}

/// Serves rankings from the cache while fresh, aggregating otherwise
pub struct RankingsService<C: RankingsCache> {
    ctx: FetchContext,
    cache: C,
}

impl<C: RankingsCache> RankingsService<C> {
    pub fn new(ctx: FetchContext, cache: C) -> Self {
        Self { ctx, cache }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Returns the cached snapshot if still fresh, else aggregates and caches
    #[instrument(skip(self))]
    pub async fn get_or_fetch(&self) -> RankingsResponse {
        if let Some((data, cache_age_ms)) = self.cache.get_with_age().await {
            info!("Serving rankings from cache (age {cache_age_ms}ms)");
            return respond(data, cache_age_ms, true);
        }
        self.refresh().await
    }

    /// Drops the cached snapshot and aggregates anew
    #[instrument(skip(self))]
    pub async fn force_refresh(&self) -> RankingsResponse {
        self.cache.clear().await;
        self.refresh().await
    }

    async fn refresh(&self) -> RankingsResponse {
        let data = aggregate(&self.ctx).await;
        if data.has_teams() {
            self.cache.set(data.clone()).await;
        } else {
            // Leave the cache empty so the next request retries
            warn!("Aggregation produced no roster: {}", data.status_summary());
        }
        respond(data, 0, false)
    }

    /// Fetches every provider once, bypassing the cache, and reports what
    /// each returned
    #[instrument(skip(self))]
    pub async fn diagnose(&self) -> Vec<SourceDiagnostic> {
        fetch_all_sources(&self.ctx)
            .await
            .into_iter()
            .map(SourceDiagnostic::from)
            .collect()
    }

    /// Alias entries whose target is absent from the current roster
    pub async fn stale_aliases(&self) -> Result<Vec<StaleAlias>, AppError> {
        let response = self.get_or_fetch().await;
        let data = response.require_teams()?;
        let roster = CanonicalRoster::new(data.teams.iter().map(|team| team.team.clone()));
        Ok(audit_aliases(&roster))
    }
}

fn respond(mut data: RankingsData, cache_age_ms: u64, from_cache: bool) -> RankingsResponse {
    data.teams = compute_composite(&data.teams, &RankingSource::ALL);
    RankingsResponse {
        data,
        cache_age_ms,
        from_cache,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::cache::MemoryCache;
    use crate::data_fetcher::models::TeamRanking;
    use crate::data_fetcher::scrapers::test_support::{fetch_context, ncaa_net_page};
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn cached_snapshot() -> RankingsData {
        let mut data = RankingsData::pending();
        for (name, rank) in [("Duke", 2), ("Houston", 1)] {
            let mut team = TeamRanking::new(name);
            team.set_rank_if_absent(RankingSource::Net, rank);
            data.teams.push(team);
        }
        data
    }

    /// Cache whose separate reads disagree, as when the entry expires
    /// between them
    struct ExpiringCache {
        data: RankingsData,
    }

    impl RankingsCache for ExpiringCache {
        async fn get(&self) -> Option<RankingsData> {
            Some(self.data.clone())
        }

        async fn set(&self, _data: RankingsData) {}

        async fn clear(&self) {}

        async fn age_ms(&self) -> Option<u64> {
            None
        }

        async fn get_with_age(&self) -> Option<(RankingsData, u64)> {
            Some((self.data.clone(), 1_500))
        }
    }

    async fn mount_net_page(server: &MockServer, count: u32) {
        Mock::given(method("GET"))
            .and(path("/rankings/basketball-men/d1/ncaa-mens-basketball-net-rankings"))
            .respond_with(ResponseTemplate::new(200).set_body_string(ncaa_net_page(count)))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_get_or_fetch_serves_fresh_cache_without_requests() {
        let mock_server = MockServer::start().await;
        let cache = MemoryCache::new(Duration::from_secs(60));
        cache.set(cached_snapshot()).await;
        let service = RankingsService::new(fetch_context(&mock_server.uri(), 2025), cache);

        let response = service.get_or_fetch().await;

        assert!(response.from_cache);
        // Composite order puts the NET #1 first
        assert_eq!(response.data.teams[0].team, "Houston");
        assert!(response.data.teams[0].composite.is_some());
        let requests = mock_server.received_requests().await.unwrap_or_default();
        assert!(requests.is_empty());
    }

    #[tokio::test]
    async fn test_cached_response_age_comes_from_the_same_read() {
        let mock_server = MockServer::start().await;
        let cache = ExpiringCache {
            data: cached_snapshot(),
        };
        let service = RankingsService::new(fetch_context(&mock_server.uri(), 2025), cache);

        let response = service.get_or_fetch().await;
        assert!(response.from_cache);
        assert_eq!(response.cache_age_ms, 1_500);
        assert_eq!(response.data.teams.len(), 2);
    }

    #[tokio::test]
    async fn test_get_or_fetch_aggregates_and_caches_on_miss() {
        let mock_server = MockServer::start().await;
        mount_net_page(&mock_server, 60).await;
        let service = RankingsService::new(
            fetch_context(&mock_server.uri(), 2025),
            MemoryCache::new(Duration::from_secs(60)),
        );

        let first = service.get_or_fetch().await;
        assert!(!first.from_cache);
        assert_eq!(first.cache_age_ms, 0);
        assert_eq!(first.data.teams.len(), 60);
        assert_eq!(first.data.status(RankingSource::Net), SourceStatus::Success);

        let second = service.get_or_fetch().await;
        assert!(second.from_cache);
        assert_eq!(second.data.teams, first.data.teams);
    }

    #[tokio::test]
    async fn test_force_refresh_bypasses_cache() {
        let mock_server = MockServer::start().await;
        mount_net_page(&mock_server, 60).await;
        let cache = MemoryCache::new(Duration::from_secs(60));
        cache.set(cached_snapshot()).await;
        let service = RankingsService::new(fetch_context(&mock_server.uri(), 2025), cache);

        let response = service.force_refresh().await;
        assert!(!response.from_cache);
        assert_eq!(response.data.teams.len(), 60);
    }

    #[tokio::test]
    async fn test_roster_failure_is_not_cached() {
        let mock_server = MockServer::start().await;
        let service = RankingsService::new(
            fetch_context(&mock_server.uri(), 2025),
            MemoryCache::new(Duration::from_secs(60)),
        );

        let response = service.get_or_fetch().await;
        assert!(!response.data.has_teams());
        assert!(matches!(
            response.require_teams(),
            Err(AppError::NoRankingData { .. })
        ));
        assert!(service.cache().get().await.is_none());
    }

    #[tokio::test]
    async fn test_diagnose_reports_every_source() {
        let mock_server = MockServer::start().await;
        mount_net_page(&mock_server, 60).await;
        let service = RankingsService::new(
            fetch_context(&mock_server.uri(), 2025),
            MemoryCache::default(),
        );

        let diagnostics = service.diagnose().await;
        assert_eq!(diagnostics.len(), RankingSource::ALL.len());

        let net = &diagnostics[0];
        assert_eq!(net.source, RankingSource::Net);
        assert_eq!(net.count, 60);
        assert_eq!(net.sample.len(), DIAGNOSTIC_SAMPLE_SIZE);
        assert_eq!(net.strategy, Some("ncaa.com net table"));

        let torvik = diagnostics
            .iter()
            .find(|d| d.source == RankingSource::Torvik)
            .unwrap();
        assert_eq!(torvik.status, SourceStatus::Error);
        assert_eq!(torvik.failures.len(), 2);
    }

    #[tokio::test]
    async fn test_stale_aliases_use_cached_roster() {
        let mock_server = MockServer::start().await;
        let cache = MemoryCache::new(Duration::from_secs(60));
        cache.set(cached_snapshot()).await;
        let service = RankingsService::new(fetch_context(&mock_server.uri(), 2025), cache);

        let stale = service.stale_aliases().await.unwrap();
        assert!(!stale.is_empty());
        assert!(stale.iter().all(|entry| entry.canonical != "Houston"));
    }
}
