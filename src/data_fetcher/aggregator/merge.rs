//! Pure merge of per-source results into one snapshot

use chrono::Utc;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::constants::thresholds;
use crate::data_fetcher::models::{
    RankingSource, RankingsData, SourceRecord, SourceStatus, TeamRanking,
};
use crate::data_fetcher::scrapers::SourceFetch;
use crate::data_fetcher::team_names::{CanonicalRoster, normalize};

/// Builds a [`RankingsData`] from settled fetch results.
///
/// The roster comes from the first full-ranking provider (priority order)
/// with at least [`thresholds::MIN_ROSTER_SIZE`] entries. Every other
/// provider is merged into that roster; names it cannot resolve are dropped.
/// Providers missing from `fetches` count as failed.
pub fn build_rankings(fetches: &[SourceFetch]) -> RankingsData {
    let by_source: BTreeMap<RankingSource, &SourceFetch> =
        fetches.iter().map(|fetch| (fetch.source, fetch)).collect();

    let source_status: BTreeMap<RankingSource, SourceStatus> = RankingSource::ALL
        .into_iter()
        .map(|source| {
            let status = match by_source.get(&source) {
                Some(fetch) if fetch.is_success() => SourceStatus::Success,
                _ => SourceStatus::Error,
            };
            (source, status)
        })
        .collect();

    let roster_source = RankingSource::full_ranking_sources().find(|source| {
        by_source
            .get(source)
            .is_some_and(|fetch| fetch.records.len() >= thresholds::MIN_ROSTER_SIZE)
    });

    let Some(roster_source) = roster_source else {
        warn!("No full-ranking source returned enough entries to build a roster");
        return RankingsData {
            teams: Vec::new(),
            last_updated: Utc::now(),
            source_status,
        };
    };

    let (roster, mut teams) = seed_roster(roster_source, &by_source[&roster_source].records);
    info!(
        "Roster built from {} with {} teams",
        roster_source.label(),
        teams.len()
    );

    for (source, fetch) in &by_source {
        if *source == roster_source || !fetch.is_success() {
            continue;
        }
        merge_source(&roster, &mut teams, fetch);
    }

    // Stable: teams without a full-ranking rank keep roster order at the end
    teams.sort_by_key(|team| match team.best_full_ranking_rank() {
        Some(rank) => (0, rank),
        None => (1, 0),
    });

    RankingsData {
        teams,
        last_updated: Utc::now(),
        source_status,
    }
}

fn seed_roster(
    source: RankingSource,
    records: &[SourceRecord],
) -> (CanonicalRoster, Vec<TeamRanking>) {
    let mut roster = CanonicalRoster::default();
    let mut teams = Vec::new();

    for record in records.iter().take(thresholds::MAX_ROSTER_SIZE) {
        let name = normalize(&record.team);
        if name.is_empty() || !roster.insert(name.clone()) {
            debug!("Dropping duplicate roster entry '{}'", record.team);
            continue;
        }
        let mut team = TeamRanking::new(name);
        team.conference = record.conference.clone();
        team.record = record.record.clone();
        team.set_rank_if_absent(source, record.rank);
        teams.push(team);
    }

    (roster, teams)
}

fn merge_source(roster: &CanonicalRoster, teams: &mut [TeamRanking], fetch: &SourceFetch) {
    let mut matched = 0usize;
    let mut unmatched = 0usize;

    for record in &fetch.records {
        let Some(position) = roster.resolve_position(&record.team) else {
            unmatched += 1;
            continue;
        };
        let team = &mut teams[position];
        if team.set_rank_if_absent(fetch.source, record.rank) {
            matched += 1;
        }
        if team.conference.is_none() {
            team.conference = record.conference.clone();
        }
        if team.record.is_none() {
            team.record = record.record.clone();
        }
    }

    info!(
        "[{}] merged {} of {} entries ({} unmatched)",
        fetch.source.label(),
        matched,
        fetch.records.len(),
        unmatched
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetch(source: RankingSource, records: Vec<SourceRecord>) -> SourceFetch {
        SourceFetch {
            source,
            records,
            strategy: Some("fixture"),
            failures: Vec::new(),
        }
    }

    fn numbered(prefix: &str, count: u32) -> Vec<SourceRecord> {
        (1..=count)
            .map(|rank| SourceRecord::new(rank, format!("{prefix} {rank}")))
            .collect()
    }

    #[test]
    fn test_no_roster_returns_empty_teams_with_statuses() {
        let data = build_rankings(&[
            fetch(RankingSource::Net, numbered("School", 10)),
            fetch(RankingSource::Ap, numbered("School", 5)),
        ]);

        assert!(data.teams.is_empty());
        assert_eq!(data.status(RankingSource::Net), SourceStatus::Success);
        assert_eq!(data.status(RankingSource::Ap), SourceStatus::Success);
        assert_eq!(data.status(RankingSource::Torvik), SourceStatus::Error);
        assert_eq!(data.source_status.len(), RankingSource::ALL.len());
    }

    #[test]
    fn test_roster_falls_through_to_next_full_ranking_source() {
        let data = build_rankings(&[
            fetch(RankingSource::Net, Vec::new()),
            fetch(RankingSource::Torvik, numbered("School", 30)),
            fetch(RankingSource::Bpi, numbered("School", 40)),
        ]);

        // Roster is closed: BPI's extra ten schools are not added
        assert_eq!(data.teams.len(), 30);
        assert_eq!(data.status(RankingSource::Net), SourceStatus::Error);
        assert!(data.teams.iter().all(|t| t.rank(RankingSource::Bpi).is_some()));
    }

    #[test]
    fn test_roster_is_capped_and_deduplicated_after_normalization() {
        let mut records = numbered("School", 400);
        records.insert(1, SourceRecord::new(2, "SCHOOL 1"));
        records.insert(2, SourceRecord::new(3, "UConn"));
        records.insert(3, SourceRecord::new(4, "Connecticut"));

        let data = build_rankings(&[fetch(RankingSource::Net, records)]);

        // Two of the first 365 entries collapse onto earlier names
        assert_eq!(data.teams.len(), thresholds::MAX_ROSTER_SIZE - 2);
        let connecticut: Vec<_> = data.teams.iter().filter(|t| t.team == "Connecticut").collect();
        assert_eq!(connecticut.len(), 1);
        assert_eq!(connecticut[0].rank(RankingSource::Net), Some(3));
    }

    #[test]
    fn test_merge_resolves_aliases_and_fills_missing_fields() {
        let mut net: Vec<SourceRecord> = numbered("School", 20);
        net.push(SourceRecord::new(21, "Iowa State"));
        let bpi = vec![
            SourceRecord::new(3, "Iowa St.")
                .with_conference("Big 12")
                .with_record("20-4"),
            SourceRecord::new(4, "Iowa"),
        ];
        let ap = vec![SourceRecord::new(7, "iowa state")];

        let data = build_rankings(&[
            fetch(RankingSource::Net, net),
            fetch(RankingSource::Bpi, bpi),
            fetch(RankingSource::Ap, ap),
        ]);

        let iowa_state = data.teams.iter().find(|t| t.team == "Iowa State").unwrap();
        assert_eq!(iowa_state.rank(RankingSource::Net), Some(21));
        assert_eq!(iowa_state.rank(RankingSource::Bpi), Some(3));
        assert_eq!(iowa_state.rank(RankingSource::Ap), Some(7));
        assert_eq!(iowa_state.conference.as_deref(), Some("Big 12"));
        assert_eq!(iowa_state.record.as_deref(), Some("20-4"));
        // "Iowa" is not on the roster and is never matched to "Iowa State"
        assert!(data.teams.iter().all(|t| t.team != "Iowa"));
    }

    #[test]
    fn test_first_rank_per_source_wins() {
        let mut net = numbered("School", 25);
        net.push(SourceRecord::new(26, "Duke"));
        let torvik = vec![SourceRecord::new(2, "Duke"), SourceRecord::new(9, "duke")];

        let data = build_rankings(&[
            fetch(RankingSource::Net, net),
            fetch(RankingSource::Torvik, torvik),
        ]);
        let duke = data.teams.iter().find(|t| t.team == "Duke").unwrap();
        assert_eq!(duke.rank(RankingSource::Torvik), Some(2));
    }

    #[test]
    fn test_empty_source_only_changes_its_own_status() {
        let base = vec![
            fetch(RankingSource::Net, numbered("School", 30)),
            fetch(RankingSource::Bpi, numbered("School", 30)),
        ];
        let mut with_failure = base.clone();
        with_failure.push(fetch(RankingSource::Torvik, Vec::new()));

        let healthy = build_rankings(&base);
        let degraded = build_rankings(&with_failure);

        assert_eq!(degraded.status(RankingSource::Torvik), SourceStatus::Error);
        assert_eq!(healthy.teams, degraded.teams);
    }

    #[test]
    fn test_teams_sorted_by_first_full_ranking_rank() {
        // NET ranks the roster in reverse; Torvik only ranks school 1
        let net: Vec<SourceRecord> = (1..=20)
            .map(|rank| SourceRecord::new(rank, format!("School {}", 21 - rank)))
            .collect();
        let data = build_rankings(&[
            fetch(RankingSource::Net, net),
            fetch(RankingSource::Torvik, vec![SourceRecord::new(1, "School 1")]),
        ]);

        assert_eq!(data.teams[0].team, "School 20");
        assert_eq!(data.teams.last().unwrap().team, "School 1");
    }
}
