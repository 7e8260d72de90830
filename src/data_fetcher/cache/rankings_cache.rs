//! Rankings snapshot cache
//!
//! The service takes the cache as a collaborator through [`RankingsCache`];
//! [`MemoryCache`] is the process-local implementation used by the CLI.

use std::future::Future;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use super::types::CachedRankings;
use crate::constants::cache_ttl;
use crate::data_fetcher::models::RankingsData;

/// Storage for the most recent aggregation result.
///
/// Implementations enforce the TTL themselves: an expired entry reads as
/// absent from both [`get`](RankingsCache::get) and
/// [`age_ms`](RankingsCache::age_ms).
pub trait RankingsCache: Send + Sync {
    fn get(&self) -> impl Future<Output = Option<RankingsData>> + Send;

    fn set(&self, data: RankingsData) -> impl Future<Output = ()> + Send;

    fn clear(&self) -> impl Future<Output = ()> + Send;

    /// Milliseconds since the live entry was stored
    fn age_ms(&self) -> impl Future<Output = Option<u64>> + Send;

    /// The live entry together with its age in milliseconds, read in one
    /// step so the two always describe the same entry
    fn get_with_age(&self) -> impl Future<Output = Option<(RankingsData, u64)>> + Send;
}

/// Single-entry in-memory cache guarded by a tokio `RwLock`
#[derive(Debug)]
pub struct MemoryCache {
    entry: RwLock<Option<CachedRankings>>,
    ttl: Duration,
}

impl MemoryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entry: RwLock::new(None),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Drops the stored entry if it has expired and returns the live one
    async fn live_entry(&self) -> Option<CachedRankings> {
        {
            let entry = self.entry.read().await;
            match entry.as_ref() {
                Some(cached) if !cached.is_expired() => return Some(cached.clone()),
                None => return None,
                Some(_) => {}
            }
        }

        let mut entry = self.entry.write().await;
        // Another task may have stored a fresh entry in between
        if let Some(cached) = entry.as_ref()
            && !cached.is_expired()
        {
            return Some(cached.clone());
        }
        if let Some(expired) = entry.take() {
            info!(
                "Removing expired rankings cache entry: age={}ms, ttl={:?}",
                expired.age_ms(),
                expired.ttl
            );
        }
        None
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(cache_ttl::RANKINGS_SECONDS))
    }
}

impl RankingsCache for MemoryCache {
    #[instrument(skip(self))]
    async fn get(&self) -> Option<RankingsData> {
        self.get_with_age().await.map(|(data, _)| data)
    }

    #[instrument(skip(self, data), fields(teams = data.teams.len()))]
    async fn set(&self, data: RankingsData) {
        let mut entry = self.entry.write().await;
        *entry = Some(CachedRankings::new(data, self.ttl));
        debug!("Rankings cached with ttl={:?}", self.ttl);
    }

    async fn clear(&self) {
        let mut entry = self.entry.write().await;
        if entry.take().is_some() {
            debug!("Rankings cache cleared");
        }
    }

    async fn age_ms(&self) -> Option<u64> {
        self.live_entry().await.map(|cached| cached.age_ms())
    }

    async fn get_with_age(&self) -> Option<(RankingsData, u64)> {
        let Some(cached) = self.live_entry().await else {
            debug!("Cache miss for rankings");
            return None;
        };
        debug!(
            "Cache hit for rankings: teams={}, expires_in={:?}",
            cached.data.teams.len(),
            cached.time_until_expiry()
        );
        let age_ms = cached.age_ms();
        Some((cached.data, age_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::TeamRanking;

    fn snapshot(team: &str) -> RankingsData {
        let mut data = RankingsData::pending();
        data.teams.push(TeamRanking::new(team));
        data
    }

    #[tokio::test]
    async fn test_empty_cache_reads_as_absent() {
        let cache = MemoryCache::default();
        assert_eq!(cache.ttl(), Duration::from_secs(4 * 60 * 60));
        assert!(cache.get().await.is_none());
        assert!(cache.age_ms().await.is_none());
    }

    #[tokio::test]
    async fn test_set_then_get_returns_snapshot() {
        let cache = MemoryCache::new(Duration::from_secs(60));
        cache.set(snapshot("Duke")).await;

        let data = cache.get().await.unwrap();
        assert_eq!(data.teams[0].team, "Duke");
        assert!(cache.age_ms().await.unwrap() < 1_000);
    }

    #[tokio::test]
    async fn test_set_replaces_previous_entry() {
        let cache = MemoryCache::new(Duration::from_secs(60));
        cache.set(snapshot("Duke")).await;
        cache.set(snapshot("Houston")).await;
        assert_eq!(cache.get().await.unwrap().teams[0].team, "Houston");
    }

    #[tokio::test]
    async fn test_clear_removes_entry() {
        let cache = MemoryCache::new(Duration::from_secs(60));
        cache.set(snapshot("Duke")).await;
        cache.clear().await;
        assert!(cache.get().await.is_none());
    }

    #[tokio::test]
    async fn test_get_with_age_reads_one_entry() {
        let cache = MemoryCache::new(Duration::from_secs(60));
        assert!(cache.get_with_age().await.is_none());

        cache.set(snapshot("Duke")).await;
        let (data, age_ms) = cache.get_with_age().await.unwrap();
        assert_eq!(data.teams[0].team, "Duke");
        assert!(age_ms < 1_000);
    }

    #[tokio::test]
    async fn test_expired_entry_reads_as_absent() {
        let cache = MemoryCache::new(Duration::from_millis(20));
        cache.set(snapshot("Duke")).await;
        tokio::time::sleep(Duration::from_millis(40)).await;

        assert!(cache.age_ms().await.is_none());
        assert!(cache.get_with_age().await.is_none());
        assert!(cache.get().await.is_none());
    }
}
