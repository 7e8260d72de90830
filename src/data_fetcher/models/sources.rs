//! Ranking providers and their static metadata table

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a ranking provider.
///
/// Declaration order is the priority order used for roster selection and
/// for the initial presentation sort, and matches [`SOURCES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingSource {
    Net,
    Pom,
    Torvik,
    Bpi,
    Sor,
    Kpi,
    Elo,
    Sag,
    Wab,
    Ap,
    Coaches,
}

/// Static description of one provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceConfig {
    pub id: RankingSource,
    pub label: &'static str,
    pub description: &'static str,
    /// `true` when the provider ranks the whole Division I population,
    /// `false` for top-25 polls
    pub full_ranking: bool,
    pub color: &'static str,
    /// Relative weight in the composite score
    pub weight: f64,
}

/// Source metadata table. Changing a weight or adding a provider only
/// requires editing this table (plus a fetcher for new providers).
pub static SOURCES: [SourceConfig; 11] = [
    SourceConfig {
        id: RankingSource::Net,
        label: "NET",
        description: "NCAA Evaluation Tool, the official NCAA committee metric",
        full_ranking: true,
        color: "#003087",
        weight: 20.0,
    },
    SourceConfig {
        id: RankingSource::Pom,
        label: "KenPom",
        description: "KenPom adjusted efficiency margin rating",
        full_ranking: true,
        color: "#2563eb",
        weight: 18.0,
    },
    SourceConfig {
        id: RankingSource::Torvik,
        label: "Torvik",
        description: "Bart Torvik T-Rank, tempo-adjusted efficiency rating",
        full_ranking: true,
        color: "#E8820C",
        weight: 15.0,
    },
    SourceConfig {
        id: RankingSource::Bpi,
        label: "ESPN BPI",
        description: "ESPN Basketball Power Index, predictive efficiency rating",
        full_ranking: true,
        color: "#DD0000",
        weight: 12.0,
    },
    SourceConfig {
        id: RankingSource::Sor,
        label: "SOR",
        description: "Strength of Record, quality of wins relative to schedule difficulty",
        full_ranking: true,
        color: "#0e7490",
        weight: 10.0,
    },
    SourceConfig {
        id: RankingSource::Kpi,
        label: "KPI",
        description: "Kevin Pauga Index, results-based team strength rating",
        full_ranking: true,
        color: "#7c3aed",
        weight: 8.0,
    },
    SourceConfig {
        id: RankingSource::Elo,
        label: "ELO",
        description: "ELO rating, game-by-game adaptive rating system",
        full_ranking: true,
        color: "#0f766e",
        weight: 7.0,
    },
    SourceConfig {
        id: RankingSource::Sag,
        label: "Sagarin",
        description: "Jeff Sagarin's predictive rating",
        full_ranking: true,
        color: "#65a30d",
        weight: 5.0,
    },
    SourceConfig {
        id: RankingSource::Wab,
        label: "WAB",
        description: "Wins Above Bubble, wins relative to a bubble-level team",
        full_ranking: true,
        color: "#b45309",
        weight: 5.0,
    },
    SourceConfig {
        id: RankingSource::Ap,
        label: "AP Poll",
        description: "Associated Press Top 25 media poll (top 25 only)",
        full_ranking: false,
        color: "#1A1A1A",
        weight: 4.0,
    },
    SourceConfig {
        id: RankingSource::Coaches,
        label: "Coaches",
        description: "USA Today Coaches Poll (top 25 only)",
        full_ranking: false,
        color: "#555555",
        weight: 3.0,
    },
];

impl RankingSource {
    /// Every provider in priority order
    pub const ALL: [RankingSource; 11] = [
        RankingSource::Net,
        RankingSource::Pom,
        RankingSource::Torvik,
        RankingSource::Bpi,
        RankingSource::Sor,
        RankingSource::Kpi,
        RankingSource::Elo,
        RankingSource::Sag,
        RankingSource::Wab,
        RankingSource::Ap,
        RankingSource::Coaches,
    ];

    pub fn config(self) -> &'static SourceConfig {
        // SOURCES is laid out in declaration order
        &SOURCES[self as usize]
    }

    /// Lowercase identifier used in JSON, config and CLI
    pub fn id(self) -> &'static str {
        match self {
            RankingSource::Net => "net",
            RankingSource::Pom => "pom",
            RankingSource::Torvik => "torvik",
            RankingSource::Bpi => "bpi",
            RankingSource::Sor => "sor",
            RankingSource::Kpi => "kpi",
            RankingSource::Elo => "elo",
            RankingSource::Sag => "sag",
            RankingSource::Wab => "wab",
            RankingSource::Ap => "ap",
            RankingSource::Coaches => "coaches",
        }
    }

    pub fn label(self) -> &'static str {
        self.config().label
    }

    pub fn weight(self) -> f64 {
        self.config().weight
    }

    pub fn is_full_ranking(self) -> bool {
        self.config().full_ranking
    }

    /// Full-ranking providers in priority order
    pub fn full_ranking_sources() -> impl Iterator<Item = RankingSource> {
        Self::ALL.into_iter().filter(|s| s.is_full_ranking())
    }
}

impl fmt::Display for RankingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for RankingSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        RankingSource::ALL
            .into_iter()
            .find(|source| source.id() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = RankingSource::ALL.iter().map(|s| s.id()).collect();
                format!("unknown ranking source '{s}' (expected one of: {})", known.join(", "))
            })
    }
}
