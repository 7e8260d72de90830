//! Ordered fallback strategies with per-strategy timeouts and plausibility gates

use futures::future::BoxFuture;
use std::collections::HashSet;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::constants::{POLL_SIZE, thresholds};
use crate::data_fetcher::models::{RankingSource, SourceRecord};
use crate::error::AppError;

/// One named way of obtaining a provider's list.
///
/// The wrapped future is lazy: nothing is fetched until the runner reaches
/// this strategy.
pub struct Strategy<'a> {
    pub name: &'static str,
    pub timeout: Duration,
    run: BoxFuture<'a, Result<Vec<SourceRecord>, AppError>>,
}

impl<'a> Strategy<'a> {
    pub fn new<F>(name: &'static str, timeout_seconds: u64, future: F) -> Self
    where
        F: Future<Output = Result<Vec<SourceRecord>, AppError>> + Send + 'a,
    {
        Self {
            name,
            timeout: Duration::from_secs(timeout_seconds),
            run: Box::pin(future),
        }
    }
}

/// Why a strategy was not used.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyAttempt {
    pub strategy: &'static str,
    pub outcome: String,
}

/// Result of fetching one provider. `records` is empty on total failure.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFetch {
    pub source: RankingSource,
    pub records: Vec<SourceRecord>,
    /// Strategy whose output was accepted
    pub strategy: Option<&'static str>,
    /// Strategies tried before (or instead of) the accepted one
    pub failures: Vec<StrategyAttempt>,
}

impl SourceFetch {
    pub fn empty(source: RankingSource) -> Self {
        Self {
            source,
            records: Vec::new(),
            strategy: None,
            failures: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        !self.records.is_empty()
    }
}

/// Cleans a raw strategy result into the shape every consumer relies on.
///
/// Full rankings: sorted by rank, one entry per team (lowest rank wins).
/// Polls: additionally restricted to ranks 1-25 and at most 25 entries.
pub fn finalize_records(source: RankingSource, mut records: Vec<SourceRecord>) -> Vec<SourceRecord> {
    records.retain(|r| r.rank >= 1 && !r.team.trim().is_empty());
    if !source.is_full_ranking() {
        records.retain(|r| r.rank <= POLL_SIZE);
    }

    records.sort_by_key(|r| r.rank);

    let mut seen = HashSet::new();
    records.retain(|r| seen.insert(r.team.trim().to_lowercase()));

    if !source.is_full_ranking() {
        records.truncate(POLL_SIZE as usize);
    }
    records
}

/// Whether a finalized list is large enough to trust
pub fn passes_gate(source: RankingSource, count: usize) -> bool {
    if source.is_full_ranking() {
        count > thresholds::MIN_FULL_RANKING_RESULTS
    } else {
        count > thresholds::MIN_POLL_RESULTS
    }
}

/// Runs strategies in order and returns the first plausible result.
///
/// Errors, timeouts and implausibly small lists all fall through to the next
/// strategy. Never fails; total failure yields an empty record list.
pub async fn run_strategies(source: RankingSource, strategies: Vec<Strategy<'_>>) -> SourceFetch {
    let mut fetch = SourceFetch::empty(source);

    for strategy in strategies {
        let name = strategy.name;
        let seconds = strategy.timeout.as_secs();

        let result = match tokio::time::timeout(strategy.timeout, strategy.run).await {
            Ok(result) => result,
            Err(_) => Err(AppError::strategy_timeout(name, seconds)),
        };

        match result {
            Ok(records) => {
                let raw_count = records.len();
                let records = finalize_records(source, records);
                if passes_gate(source, records.len()) {
                    info!(
                        "[{}] {} loaded {} entries",
                        source.label(),
                        name,
                        records.len()
                    );
                    fetch.records = records;
                    fetch.strategy = Some(name);
                    return fetch;
                }
                debug!(
                    "[{}] {} returned {} raw / {} usable entries",
                    source.label(),
                    name,
                    raw_count,
                    records.len()
                );
                warn!(
                    "[{}] {} returned too few entries ({})",
                    source.label(),
                    name,
                    records.len()
                );
                fetch.failures.push(StrategyAttempt {
                    strategy: name,
                    outcome: format!("only {} usable entries", records.len()),
                });
            }
            Err(e) => {
                if e.is_empty_payload() {
                    info!("[{}] {} had no usable data: {}", source.label(), name, e);
                } else {
                    warn!("[{}] {} failed: {}", source.label(), name, e);
                }
                fetch.failures.push(StrategyAttempt {
                    strategy: name,
                    outcome: e.to_string(),
                });
            }
        }
    }

    warn!("[{}] all strategies failed", source.label());
    fetch
}
