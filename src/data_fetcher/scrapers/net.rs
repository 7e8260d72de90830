//! NCAA NET rankings
//!
//! Strategies, in order:
//! 1. NCAA.com NET rankings table
//! 2. Warren Nolan NET page
//! 3. ratings.ncaa.com JSON API (often blocked for cloud IPs)

use scraper::Html;
use serde_json::Value;
use tracing::instrument;

use super::FetchContext;
use super::extract::{parse_leading_int, rank_field, text_field};
use super::html::{body_rows, element_text, first_link_text, last_link_text, selector};
use super::strategy::{SourceFetch, Strategy, run_strategies};
use crate::constants::strategy_timeout;
use crate::data_fetcher::api::{
    ContentKind, NCAA_REFERER, build_ncaa_net_url, build_ncaa_ratings_url,
    build_warren_nolan_net_url, fetch_json_value, fetch_text,
};
use crate::data_fetcher::models::{RankingSource, SourceRecord};
use crate::error::AppError;

#[instrument(skip(ctx))]
pub async fn fetch_net(ctx: &FetchContext) -> SourceFetch {
    let strategies = vec![
        Strategy::new(
            "ncaa.com net table",
            strategy_timeout::HTML_PAGE_SECONDS,
            ncaa_com_table(ctx),
        ),
        Strategy::new(
            "warren nolan net page",
            strategy_timeout::HTML_PAGE_SECONDS,
            warren_nolan_page(ctx),
        ),
        Strategy::new(
            "ratings.ncaa.com json",
            strategy_timeout::JSON_API_SECONDS,
            ratings_api(ctx),
        ),
    ];
    run_strategies(RankingSource::Net, strategies).await
}

async fn ncaa_com_table(ctx: &FetchContext) -> Result<Vec<SourceRecord>, AppError> {
    let url = build_ncaa_net_url(&ctx.endpoints.ncaa);
    let html = fetch_text(&ctx.client, &url, ContentKind::Html, Some(NCAA_REFERER)).await?;
    parse_ncaa_net_table(&html)
}

async fn warren_nolan_page(ctx: &FetchContext) -> Result<Vec<SourceRecord>, AppError> {
    let url = build_warren_nolan_net_url(&ctx.endpoints.warren_nolan, ctx.season);
    let html = fetch_text(&ctx.client, &url, ContentKind::Html, Some(NCAA_REFERER)).await?;
    parse_warren_nolan_net(&html)
}

async fn ratings_api(ctx: &FetchContext) -> Result<Vec<SourceRecord>, AppError> {
    let url = build_ncaa_ratings_url(&ctx.endpoints.ncaa_ratings);
    let payload = fetch_json_value(&ctx.client, &url, Some(NCAA_REFERER)).await?;
    parse_ratings_payload(&payload, &url)
}

/// NCAA.com layout: rank, school (usually a link), conference, record
pub(crate) fn parse_ncaa_net_table(html: &str) -> Result<Vec<SourceRecord>, AppError> {
    let document = Html::parse_document(html);
    let mut records = Vec::new();

    for cells in body_rows(&document)? {
        if cells.len() < 2 {
            continue;
        }
        let Some(rank) = parse_leading_int(&element_text(&cells[0])) else {
            continue;
        };
        let team = first_link_text(&cells[1]).unwrap_or_else(|| element_text(&cells[1]));
        if team.chars().count() < 2 {
            continue;
        }

        let mut record = SourceRecord::new(rank, team);
        if let Some(conference) = cells.get(2) {
            record = record.with_conference(element_text(conference));
        }
        if let Some(win_loss) = cells.get(3) {
            record = record.with_record(element_text(win_loss));
        }
        records.push(record);
    }

    Ok(records)
}

/// Warren Nolan layout: team link (after a logo link) in the first cell,
/// record in the second, NET rank in `td.cell-right-black` or the third cell
pub(crate) fn parse_warren_nolan_net(html: &str) -> Result<Vec<SourceRecord>, AppError> {
    let document = Html::parse_document(html);
    let row_selector = selector("table tbody tr")?;
    let cell_selector = selector("td")?;
    let rank_cell_selector = selector("td.cell-right-black")?;
    let mut records = Vec::new();

    for row in document.select(&row_selector) {
        let cells: Vec<_> = row.select(&cell_selector).collect();
        if cells.len() < 2 {
            continue;
        }
        let Some(team) = last_link_text(&cells[0]) else {
            continue;
        };
        let rank_text = match row.select(&rank_cell_selector).next() {
            Some(cell) => element_text(&cell),
            None => cells.get(2).map(|cell| element_text(cell)).unwrap_or_default(),
        };
        let Some(rank) = parse_leading_int(&rank_text) else {
            continue;
        };
        if team.chars().count() < 2 {
            continue;
        }
        records.push(SourceRecord::new(rank, team).with_record(element_text(&cells[1])));
    }

    Ok(records)
}

/// ratings.ncaa.com returns a bare array of team objects whose field names
/// have changed over the years
pub(crate) fn parse_ratings_payload(
    payload: &Value,
    url: &str,
) -> Result<Vec<SourceRecord>, AppError> {
    let items = payload
        .as_array()
        .ok_or_else(|| AppError::api_unexpected_structure("expected a JSON array", url))?;

    let records = items
        .iter()
        .filter_map(|item| {
            let rank = rank_field(
                item,
                &["ranking_period_rank", "rank", "net_rank", "current_rank"],
            )?;
            let team = text_field(item, &["team_name", "name", "teamName", "team"])?;

            let mut record = SourceRecord::new(rank, team);
            if let Some(conference) =
                text_field(item, &["conf_name", "conference_name", "conference"])
            {
                record = record.with_conference(conference);
            }
            let wins = text_field(item, &["wins", "team_wins"]);
            let losses = text_field(item, &["losses", "team_losses"]);
            let win_loss = match (wins, losses) {
                (Some(w), Some(l)) => Some(format!("{w}-{l}")),
                _ => text_field(item, &["record"]),
            };
            if let Some(win_loss) = win_loss {
                record = record.with_record(win_loss);
            }
            Some(record)
        })
        .collect();

    Ok(records)
}
