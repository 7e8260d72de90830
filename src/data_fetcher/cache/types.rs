//! Cache data structures with TTL support

use std::time::{Duration, Instant};
use tracing::debug;

use crate::data_fetcher::models::RankingsData;

/// Cached rankings snapshot with TTL support
#[derive(Debug, Clone)]
pub struct CachedRankings {
    pub data: RankingsData,
    pub cached_at: Instant,
    pub ttl: Duration,
}

impl CachedRankings {
    /// Creates a new cached rankings entry stamped with the current time
    pub fn new(data: RankingsData, ttl: Duration) -> Self {
        Self {
            data,
            cached_at: Instant::now(),
            ttl,
        }
    }

    /// Checks if the cached data has outlived its TTL
    pub fn is_expired(&self) -> bool {
        let age = self.cached_at.elapsed();
        let is_expired = age >= self.ttl;

        debug!(
            "Cache expiration check: teams={}, age={:?}, ttl={:?}, is_expired={}",
            self.data.teams.len(),
            age,
            self.ttl,
            is_expired
        );

        is_expired
    }

    /// Age of the entry in whole milliseconds
    pub fn age_ms(&self) -> u64 {
        u64::try_from(self.cached_at.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Gets the remaining time until expiration
    pub fn time_until_expiry(&self) -> Duration {
        self.ttl.saturating_sub(self.cached_at.elapsed())
    }
}
