//! Weighted percentile composite over a chosen subset of ranking sources
//!
//! Every rank is turned into a percentile of a fixed population
//! (`(N - rank + 1) / N`), and a team's composite is the weighted average of
//! the percentiles of the selected sources that rank it, scaled to 0-100.
//! Weights are redistributed among the sources that actually rank a team,
//! so a poll-only gap does not drag a team down.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

use crate::constants::POPULATION_SIZE;
use crate::data_fetcher::models::{RankingSource, SOURCES, TeamRanking};

/// Population size and per-source weights for composite scoring
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeCalculator {
    population: u32,
    weights: BTreeMap<RankingSource, f64>,
}

impl Default for CompositeCalculator {
    /// All Division I teams, weights from the source metadata table
    fn default() -> Self {
        Self {
            population: POPULATION_SIZE,
            weights: SOURCES.iter().map(|source| (source.id, source.weight)).collect(),
        }
    }
}

impl CompositeCalculator {
    /// Calculator with an explicit population size and weight table.
    /// Sources missing from `weights` contribute nothing; negative or
    /// non-finite weights are treated as 0.
    pub fn new(population: u32, mut weights: BTreeMap<RankingSource, f64>) -> Self {
        for (source, weight) in weights.iter_mut() {
            if !weight.is_finite() || *weight < 0.0 {
                warn!("Ignoring invalid weight {} for {}", weight, source.label());
                *weight = 0.0;
            }
        }
        Self {
            population: population.max(1),
            weights,
        }
    }

    /// Every source weighted 1
    pub fn equal_weights(population: u32) -> Self {
        Self::new(
            population,
            RankingSource::ALL.into_iter().map(|source| (source, 1.0)).collect(),
        )
    }

    pub fn population(&self) -> u32 {
        self.population
    }

    pub fn weight(&self, source: RankingSource) -> f64 {
        self.weights.get(&source).copied().unwrap_or(0.0)
    }

    /// Percentile of `rank` within the population, clamped to `[0, 1]`
    pub fn percentile(&self, rank: u32) -> f64 {
        let population = f64::from(self.population);
        ((population - f64::from(rank) + 1.0) / population).clamp(0.0, 1.0)
    }

    /// Scores and sorts a copy of `teams` using only the `selected` sources.
    ///
    /// The input is never modified. The result is sorted by composite
    /// (descending, unscored teams last), then by the number of selected
    /// sources ranking the team; remaining ties keep input order.
    ///
    /// # Example
    /// ```
    /// use cbb_rankings::composite::CompositeCalculator;
    /// use cbb_rankings::data_fetcher::models::{RankingSource, TeamRanking};
    ///
    /// let mut duke = TeamRanking::new("Duke");
    /// duke.set_rank_if_absent(RankingSource::Net, 1);
    ///
    /// let scored = CompositeCalculator::equal_weights(3).compute(&[duke], &[RankingSource::Net]);
    /// assert_eq!(scored[0].composite, Some(100.0));
    /// assert_eq!(scored[0].sources_ranked, Some(1));
    /// ```
    pub fn compute(&self, teams: &[TeamRanking], selected: &[RankingSource]) -> Vec<TeamRanking> {
        let selected: BTreeSet<RankingSource> = selected.iter().copied().collect();

        let mut scored: Vec<TeamRanking> = teams
            .iter()
            .map(|team| {
                let mut team = team.clone();
                let (composite, ranked) = self.score(&team, &selected);
                team.composite = composite;
                team.sources_ranked = Some(ranked);
                team
            })
            .collect();

        scored.sort_by(compare_scored);
        scored
    }

    fn score(&self, team: &TeamRanking, selected: &BTreeSet<RankingSource>) -> (Option<f64>, u32) {
        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;
        let mut ranked = 0u32;

        for source in selected {
            let Some(rank) = team.rank(*source) else {
                continue;
            };
            let weight = self.weight(*source);
            weighted_sum += weight * self.percentile(rank);
            weight_total += weight;
            ranked += 1;
        }

        if ranked == 0 || weight_total <= 0.0 {
            return (None, ranked);
        }
        let composite = weighted_sum / weight_total * 100.0;
        if !composite.is_finite() {
            return (None, ranked);
        }
        (Some(round_one_decimal(composite.clamp(0.0, 100.0))), ranked)
    }
}

/// Scores `teams` with the default population and weights
pub fn compute_composite(teams: &[TeamRanking], selected: &[RankingSource]) -> Vec<TeamRanking> {
    CompositeCalculator::default().compute(teams, selected)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn compare_scored(a: &TeamRanking, b: &TeamRanking) -> Ordering {
    let by_composite = match (a.composite, b.composite) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_composite.then_with(|| b.sources_ranked.cmp(&a.sources_ranked))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(name: &str, ranks: &[(RankingSource, u32)]) -> TeamRanking {
        let mut team = TeamRanking::new(name);
        for (source, rank) in ranks {
            team.set_rank_if_absent(*source, *rank);
        }
        team
    }

    fn names(teams: &[TeamRanking]) -> Vec<&str> {
        teams.iter().map(|t| t.team.as_str()).collect()
    }

    #[test]
    fn test_percentile_bounds() {
        let calc = CompositeCalculator::default();
        assert_eq!(calc.percentile(1), 1.0);
        assert_eq!(calc.percentile(365), 1.0 / 365.0);
        assert_eq!(calc.percentile(400), 0.0);
    }

    #[test]
    fn test_three_team_scenario_with_equal_weights() {
        use RankingSource::{Bpi, Net};
        let teams = vec![
            team("A", &[(Net, 1), (Bpi, 3)]),
            team("B", &[(Net, 2), (Bpi, 1)]),
            team("C", &[(Net, 3), (Bpi, 2)]),
        ];

        let scored = CompositeCalculator::equal_weights(3).compute(&teams, &[Net, Bpi]);

        assert_eq!(names(&scored), vec!["B", "A", "C"]);
        let scores: Vec<Option<f64>> = scored.iter().map(|t| t.composite).collect();
        assert_eq!(scores, vec![Some(83.3), Some(66.7), Some(50.0)]);
        assert!(scored.iter().all(|t| t.sources_ranked == Some(2)));
    }

    #[test]
    fn test_empty_selection_scores_nothing() {
        let teams = vec![team("A", &[(RankingSource::Net, 1)]), team("B", &[])];
        let scored = compute_composite(&teams, &[]);

        assert_eq!(names(&scored), vec!["A", "B"]);
        assert!(scored.iter().all(|t| t.composite.is_none()));
        assert!(scored.iter().all(|t| t.sources_ranked == Some(0)));
    }

    #[test]
    fn test_weights_redistribute_among_ranked_sources() {
        let weights = BTreeMap::from([(RankingSource::Net, 3.0), (RankingSource::Ap, 1.0)]);
        let calc = CompositeCalculator::new(10, weights);
        let teams = vec![
            team("Polled", &[(RankingSource::Net, 1), (RankingSource::Ap, 10)]),
            team("Unpolled", &[(RankingSource::Net, 1)]),
        ];

        let scored = calc.compute(&teams, &[RankingSource::Net, RankingSource::Ap]);
        // Polled: (3 * 1.0 + 1 * 0.1) / 4 = 0.775
        assert_eq!(scored[0].team, "Unpolled");
        assert_eq!(scored[0].composite, Some(100.0));
        assert_eq!(scored[1].composite, Some(77.5));
    }

    #[test]
    fn test_ties_prefer_more_sources_then_input_order() {
        use RankingSource::{Net, Torvik};
        let teams = vec![
            team("First", &[(Net, 1)]),
            team("Both", &[(Net, 1), (Torvik, 1)]),
            team("Second", &[(Net, 1)]),
            team("Unranked", &[]),
        ];

        let scored = CompositeCalculator::equal_weights(365).compute(&teams, &[Net, Torvik]);
        assert_eq!(names(&scored), vec!["Both", "First", "Second", "Unranked"]);
        assert_eq!(scored[3].composite, None);
    }

    #[test]
    fn test_invalid_weights_keep_composite_in_bounds() {
        use RankingSource::{Bpi, Net, Torvik};
        let weights = BTreeMap::from([(Net, -1.0), (Bpi, 2.0), (Torvik, f64::NAN)]);
        let calc = CompositeCalculator::new(365, weights);
        assert_eq!(calc.weight(Net), 0.0);
        assert_eq!(calc.weight(Torvik), 0.0);

        let teams = vec![
            team("A", &[(Net, 1), (Bpi, 365)]),
            team("B", &[(Net, 1), (Torvik, 1)]),
        ];
        let scored = calc.compute(&teams, &[Net, Bpi, Torvik]);

        assert_eq!(scored[0].team, "A");
        assert_eq!(scored[0].composite, Some(0.3));
        // Only zero-weight sources rank B
        assert_eq!(scored[1].composite, None);
        assert_eq!(scored[1].sources_ranked, Some(2));
        for team in &scored {
            if let Some(composite) = team.composite {
                assert!((0.0..=100.0).contains(&composite));
            }
        }
    }

    #[test]
    fn test_infinite_weight_is_ignored() {
        let weights = BTreeMap::from([
            (RankingSource::Net, f64::INFINITY),
            (RankingSource::Bpi, 1.0),
        ]);
        let calc = CompositeCalculator::new(10, weights);
        let teams = vec![team("A", &[(RankingSource::Net, 1), (RankingSource::Bpi, 1)])];

        let scored = calc.compute(&teams, &[RankingSource::Net, RankingSource::Bpi]);
        assert_eq!(scored[0].composite, Some(100.0));
    }

    #[test]
    fn test_input_is_not_modified() {
        let teams = vec![team("A", &[(RankingSource::Net, 5)])];
        let before = teams.clone();
        let _ = compute_composite(&teams, &[RankingSource::Net]);
        assert_eq!(teams, before);
    }

    #[test]
    fn test_unselected_sources_are_ignored() {
        let teams = vec![team("A", &[(RankingSource::Net, 1), (RankingSource::Bpi, 365)])];
        let scored = compute_composite(&teams, &[RankingSource::Net]);
        assert_eq!(scored[0].composite, Some(100.0));
        assert_eq!(scored[0].sources_ranked, Some(1));
    }
}
