//! Bart Torvik T-Rank
//!
//! Strategies, in order:
//! 1. `getjson.php` season JSON (array rows or object rows)
//! 2. `trank.php` HTML table

use scraper::Html;
use serde_json::Value;
use tracing::instrument;

use super::FetchContext;
use super::extract::{
    heuristic_team_name, looks_like_record, parse_leading_int, rank_field, text_field,
};
use super::html::{body_rows, element_text, rows_matching};
use super::strategy::{SourceFetch, Strategy, run_strategies};
use crate::constants::strategy_timeout;
use crate::data_fetcher::api::{
    ContentKind, TORVIK_REFERER, build_torvik_html_url, build_torvik_json_url, fetch_json_value,
    fetch_text,
};
use crate::data_fetcher::models::{RankingSource, SourceRecord};
use crate::error::AppError;

#[instrument(skip(ctx))]
pub async fn fetch_torvik(ctx: &FetchContext) -> SourceFetch {
    let strategies = vec![
        Strategy::new(
            "barttorvik json",
            strategy_timeout::JSON_API_SECONDS,
            season_json(ctx),
        ),
        Strategy::new(
            "barttorvik trank page",
            strategy_timeout::HTML_PAGE_SECONDS,
            trank_page(ctx),
        ),
    ];
    run_strategies(RankingSource::Torvik, strategies).await
}

async fn season_json(ctx: &FetchContext) -> Result<Vec<SourceRecord>, AppError> {
    let url = build_torvik_json_url(&ctx.endpoints.torvik, ctx.season);
    let payload = fetch_json_value(&ctx.client, &url, Some(TORVIK_REFERER)).await?;
    parse_torvik_json(&payload, &url)
}

async fn trank_page(ctx: &FetchContext) -> Result<Vec<SourceRecord>, AppError> {
    let url = build_torvik_html_url(&ctx.endpoints.torvik);
    let html = fetch_text(&ctx.client, &url, ContentKind::Html, Some(TORVIK_REFERER)).await?;
    parse_trank_page(&html)
}

/// Rows are either objects with named fields or positional arrays whose
/// layout is undocumented. Ranks from the payload are used for ordering only;
/// the result is re-sequenced 1..n.
pub(crate) fn parse_torvik_json(payload: &Value, url: &str) -> Result<Vec<SourceRecord>, AppError> {
    let rows = payload
        .as_array()
        .ok_or_else(|| AppError::api_unexpected_structure("expected a JSON array", url))?;

    let mut records: Vec<SourceRecord> = rows
        .iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let position = u32::try_from(index + 1).ok()?;
            match row {
                Value::Array(cells) => array_row(cells, position),
                Value::Object(_) => object_row(row, position),
                _ => None,
            }
        })
        .collect();

    records.sort_by_key(|r| r.rank);
    for (index, record) in records.iter_mut().enumerate() {
        record.rank = u32::try_from(index + 1).unwrap_or(u32::MAX);
    }
    Ok(records)
}

fn array_row(cells: &[Value], position: u32) -> Option<SourceRecord> {
    let team = heuristic_team_name(cells)?;
    // Conference is the next short text cell after the team name
    let conference = cells
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .skip_while(|text| *text != team)
        .skip(1)
        .find(|text| {
            !text.is_empty()
                && text.parse::<f64>().is_err()
                && !looks_like_record(text)
                && text.chars().count() <= 8
        });

    let mut record = SourceRecord::new(position, team);
    if let Some(conference) = conference {
        record = record.with_conference(conference);
    }
    Some(record)
}

fn object_row(row: &Value, position: u32) -> Option<SourceRecord> {
    let team = text_field(row, &["team", "teamName", "name"])?;
    if team.chars().count() < 2 {
        return None;
    }
    let rank = rank_field(row, &["rank", "rk"]).unwrap_or(position);

    let mut record = SourceRecord::new(rank, team);
    if let Some(conference) = text_field(row, &["conf", "conference"]) {
        record = record.with_conference(conference);
    }
    Some(record)
}

/// T-Rank table: rank, team, conference, ... Rows without a numeric rank
/// take their position in the table.
pub(crate) fn parse_trank_page(html: &str) -> Result<Vec<SourceRecord>, AppError> {
    let document = Html::parse_document(html);
    // The stats table sometimes lacks a tbody wrapper
    let mut rows = body_rows(&document)?;
    if rows.is_empty() {
        rows = rows_matching(&document, "table tr")?;
    }

    let mut records = Vec::new();
    for (index, cells) in rows.iter().enumerate() {
        if cells.len() < 3 {
            continue;
        }
        let mut team = element_text(&cells[1]);
        if team.chars().count() < 2 {
            team = element_text(&cells[2]);
        }
        if team.chars().count() < 2 {
            continue;
        }
        let position = u32::try_from(index + 1).unwrap_or(u32::MAX);
        let rank = parse_leading_int(&element_text(&cells[0])).unwrap_or(position);
        records.push(SourceRecord::new(rank, team).with_conference(element_text(&cells[2])));
    }

    Ok(records)
}
