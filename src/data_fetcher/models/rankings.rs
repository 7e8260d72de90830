use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::sources::RankingSource;

/// One row of a provider's ranking list, spelled the way the provider spells it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub rank: u32,
    pub team: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<String>,
}

impl SourceRecord {
    pub fn new(rank: u32, team: impl Into<String>) -> Self {
        Self {
            rank,
            team: team.into(),
            conference: None,
            record: None,
        }
    }

    /// Sets the conference, ignoring blank values
    pub fn with_conference(mut self, conference: impl Into<String>) -> Self {
        self.conference = non_blank(conference.into());
        self
    }

    /// Sets the win-loss record, ignoring blank values
    pub fn with_record(mut self, record: impl Into<String>) -> Self {
        self.record = non_blank(record.into());
        self
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Merged, canonical per-team entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRanking {
    /// Canonical team name, unique within a [`RankingsData`]
    pub team: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<String>,
    /// Sparse: a missing key means the provider did not rank the team
    #[serde(default)]
    pub ranks: BTreeMap<RankingSource, u32>,
    /// Weighted percentile score 0-100, higher is better
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composite: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources_ranked: Option<u32>,
}

impl TeamRanking {
    pub fn new(team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            conference: None,
            record: None,
            ranks: BTreeMap::new(),
            composite: None,
            sources_ranked: None,
        }
    }

    pub fn rank(&self, source: RankingSource) -> Option<u32> {
        self.ranks.get(&source).copied()
    }

    /// Records a provider's rank unless that provider already ranked the team.
    /// Returns `true` when the rank was stored.
    pub fn set_rank_if_absent(&mut self, source: RankingSource, rank: u32) -> bool {
        if rank == 0 || self.ranks.contains_key(&source) {
            return false;
        }
        self.ranks.insert(source, rank);
        true
    }

    /// First available full-ranking rank in priority order
    pub fn best_full_ranking_rank(&self) -> Option<u32> {
        RankingSource::full_ranking_sources().find_map(|source| self.rank(source))
    }
}

/// Per-provider outcome of one aggregation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceStatus {
    Success,
    Error,
    Pending,
}

/// Immutable snapshot produced by one aggregation cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingsData {
    pub teams: Vec<TeamRanking>,
    pub last_updated: DateTime<Utc>,
    pub source_status: BTreeMap<RankingSource, SourceStatus>,
}

impl RankingsData {
    /// A snapshot with no teams and every provider still pending
    pub fn pending() -> Self {
        Self {
            teams: Vec::new(),
            last_updated: Utc::now(),
            source_status: RankingSource::ALL
                .into_iter()
                .map(|source| (source, SourceStatus::Pending))
                .collect(),
        }
    }

    pub fn status(&self, source: RankingSource) -> SourceStatus {
        self.source_status
            .get(&source)
            .copied()
            .unwrap_or(SourceStatus::Pending)
    }

    /// Providers that failed this cycle, in priority order
    pub fn failed_sources(&self) -> Vec<RankingSource> {
        self.source_status
            .iter()
            .filter(|(_, status)| **status == SourceStatus::Error)
            .map(|(source, _)| *source)
            .collect()
    }

    pub fn successful_source_count(&self) -> usize {
        self.source_status
            .values()
            .filter(|status| **status == SourceStatus::Success)
            .count()
    }

    /// `false` when the roster could not be built and there is nothing to show
    pub fn has_teams(&self) -> bool {
        !self.teams.is_empty()
    }

    /// Human-readable per-source status summary, e.g. `net: error, bpi: success`
    pub fn status_summary(&self) -> String {
        self.source_status
            .iter()
            .map(|(source, status)| {
                let label = match status {
                    SourceStatus::Success => "success",
                    SourceStatus::Error => "error",
                    SourceStatus::Pending => "pending",
                };
                format!("{source}: {label}")
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_record_builders_drop_blank_values() {
        let record = SourceRecord::new(3, "Duke")
            .with_conference("  ")
            .with_record(" 20-3 ");
        assert_eq!(record.conference, None);
        assert_eq!(record.record.as_deref(), Some("20-3"));
    }

    #[test]
    fn test_set_rank_if_absent_keeps_first_rank() {
        let mut team = TeamRanking::new("Houston");
        assert!(team.set_rank_if_absent(RankingSource::Bpi, 4));
        assert!(!team.set_rank_if_absent(RankingSource::Bpi, 9));
        assert!(!team.set_rank_if_absent(RankingSource::Torvik, 0));
        assert_eq!(team.rank(RankingSource::Bpi), Some(4));
        assert_eq!(team.rank(RankingSource::Torvik), None);
    }

    #[test]
    fn test_best_full_ranking_rank_skips_polls() {
        let mut team = TeamRanking::new("Gonzaga");
        team.set_rank_if_absent(RankingSource::Ap, 1);
        assert_eq!(team.best_full_ranking_rank(), None);

        team.set_rank_if_absent(RankingSource::Bpi, 7);
        team.set_rank_if_absent(RankingSource::Torvik, 5);
        // Torvik comes before BPI in priority order
        assert_eq!(team.best_full_ranking_rank(), Some(5));
    }

    #[test]
    fn test_failed_sources_and_counts() {
        let mut data = RankingsData::pending();
        data.source_status.insert(RankingSource::Net, SourceStatus::Success);
        data.source_status.insert(RankingSource::Ap, SourceStatus::Error);
        data.source_status.insert(RankingSource::Bpi, SourceStatus::Error);

        assert_eq!(data.failed_sources(), vec![RankingSource::Bpi, RankingSource::Ap]);
        assert_eq!(data.successful_source_count(), 1);
        assert_eq!(data.status(RankingSource::Elo), SourceStatus::Pending);
        assert!(!data.has_teams());
    }

    #[test]
    fn test_rankings_data_json_shape() {
        let mut team = TeamRanking::new("Iowa State");
        team.set_rank_if_absent(RankingSource::Net, 6);
        let mut data = RankingsData::pending();
        data.teams.push(team);

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["teams"][0]["team"], "Iowa State");
        assert_eq!(json["teams"][0]["ranks"]["net"], 6);
        assert_eq!(json["sourceStatus"]["coaches"], "pending");
        assert!(json.get("lastUpdated").is_some());
        assert!(json["teams"][0].get("composite").is_none());
    }
}
