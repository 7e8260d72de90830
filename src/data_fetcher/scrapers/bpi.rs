//! ESPN Basketball Power Index
//!
//! Strategies, in order:
//! 1. `BPI` column of the Warren Nolan compare-rankings page (all teams)
//! 2. ESPN site API endpoint variations (JSON)

use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::FetchContext;
use super::compare::{BPI_HEADERS, load_compare_page, parse_compare_column};
use super::extract::{as_rank, rank_field, text_field};
use super::strategy::{SourceFetch, Strategy, passes_gate, run_strategies};
use crate::constants::strategy_timeout;
use crate::data_fetcher::api::{ESPN_REFERER, build_espn_bpi_urls, fetch_json_value};
use crate::data_fetcher::models::{RankingSource, SourceRecord};
use crate::error::AppError;

const LIST_KEYS: [&str; 5] = ["athletes", "teams", "rows", "items", "results"];
const TEAM_NAME_KEYS: [&str; 4] = ["shortDisplayName", "location", "displayName", "name"];

#[instrument(skip(ctx))]
pub async fn fetch_bpi(ctx: &FetchContext) -> SourceFetch {
    let page = load_compare_page(ctx).await;
    fetch_bpi_with_page(ctx, page.as_deref()).await
}

/// Same as [`fetch_bpi`], reading the compare column from a page the
/// caller already loaded
pub async fn fetch_bpi_with_page(
    ctx: &FetchContext,
    compare_page: Result<&str, &AppError>,
) -> SourceFetch {
    let strategies = vec![
        Strategy::new(
            "warren nolan compare bpi column",
            strategy_timeout::LARGE_PAGE_SECONDS,
            compare_column(compare_page),
        ),
        Strategy::new(
            "espn site api",
            strategy_timeout::MULTI_ENDPOINT_SECONDS,
            espn_endpoints(ctx),
        ),
    ];
    run_strategies(RankingSource::Bpi, strategies).await
}

async fn compare_column(page: Result<&str, &AppError>) -> Result<Vec<SourceRecord>, AppError> {
    match page {
        Ok(html) => parse_compare_column(html, RankingSource::Bpi, BPI_HEADERS),
        Err(e) => Err(AppError::shared_page_unavailable("compare-rankings", e.to_string())),
    }
}

/// Tries each ESPN endpoint until one yields a plausible list. When none
/// does, the largest partial list (or the last error) is returned.
async fn espn_endpoints(ctx: &FetchContext) -> Result<Vec<SourceRecord>, AppError> {
    let mut best: Vec<SourceRecord> = Vec::new();
    let mut last_error = None;

    for url in build_espn_bpi_urls(&ctx.endpoints.espn_site) {
        match fetch_json_value(&ctx.client, &url, Some(ESPN_REFERER)).await {
            Ok(payload) => {
                let records = parse_espn_bpi(&payload);
                debug!("[BPI] {url} yielded {} entries", records.len());
                if passes_gate(RankingSource::Bpi, records.len()) {
                    return Ok(records);
                }
                if records.len() > best.len() {
                    best = records;
                }
            }
            Err(e) => {
                warn!("[BPI] ESPN endpoint failed: {e}");
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) if best.is_empty() => Err(e),
        _ => Ok(best),
    }
}

/// Finds the team list in any of the payload shapes ESPN has used and reads
/// a rank for each entry, falling back to a `bpi`/`bpirank` statistic
pub(crate) fn parse_espn_bpi(payload: &Value) -> Vec<SourceRecord> {
    let Some(items) = find_team_list(payload) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let team_object = item.get("team").unwrap_or(item);
            let team = text_field(team_object, &TEAM_NAME_KEYS)?;
            if team.chars().count() < 2 {
                return None;
            }
            let rank = rank_field(item, &["rank", "bpiRank", "current_rank"])
                .or_else(|| rank_from_stats(item))?;
            Some(SourceRecord::new(rank, team))
        })
        .collect()
}

fn find_team_list(payload: &Value) -> Option<&Vec<Value>> {
    LIST_KEYS
        .iter()
        .filter_map(|key| payload.get(*key)?.as_array())
        .find(|list| !list.is_empty())
        .or_else(|| {
            payload
                .pointer("/sports/0/leagues/0/teams")?
                .as_array()
                .filter(|list| !list.is_empty())
        })
}

fn rank_from_stats(item: &Value) -> Option<u32> {
    let stats = item
        .get("statistics")
        .or_else(|| item.get("stats"))?
        .as_array()?;

    stats
        .iter()
        .find(|stat| {
            let label = text_field(stat, &["name", "abbreviation"])
                .unwrap_or_default()
                .to_lowercase();
            label == "bpi" || label == "bpirank"
        })
        .and_then(|stat| {
            stat.get("rank")
                .and_then(as_rank)
                .or_else(|| stat.get("value").and_then(as_rank))
        })
}
