//! Warren Nolan compare-rankings page
//!
//! One table with a column per rating system. The page is fetched once per
//! aggregation and split into one list per column; each column is gated
//! and deduplicated on its own, so a renamed header only costs that source.

use scraper::Html;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument, warn};

use super::FetchContext;
use super::extract::parse_leading_int;
use super::html::{body_rows, element_text, header_index, last_link_text};
use super::strategy::{SourceFetch, StrategyAttempt, finalize_records, passes_gate};
use crate::constants::strategy_timeout;
use crate::data_fetcher::api::{
    ContentKind, WARREN_NOLAN_REFERER, build_compare_rankings_url, fetch_text,
};
use crate::data_fetcher::models::{RankingSource, SourceRecord};
use crate::error::AppError;

const STRATEGY_NAME: &str = "warren nolan compare-rankings";

/// Header spellings per column source, most specific first
pub const COLUMN_HEADERS: [(RankingSource, &[&str]); 6] = [
    (RankingSource::Pom, &["POM", "KenPom", "KP"]),
    (RankingSource::Sor, &["SOR"]),
    (RankingSource::Kpi, &["KPI"]),
    (RankingSource::Elo, &["ELO"]),
    (RankingSource::Sag, &["SAG", "Sagarin"]),
    (RankingSource::Wab, &["WAB"]),
];

/// Header spellings of the BPI column, used by the BPI fetcher
pub const BPI_HEADERS: &[&str] = &["BPI"];

/// Fetches the compare page once and returns one [`SourceFetch`] per
/// column source, in [`COLUMN_HEADERS`] order.
#[instrument(skip(ctx))]
pub async fn fetch_compare_columns(ctx: &FetchContext) -> Vec<SourceFetch> {
    let page = load_compare_page(ctx).await;
    split_compare_columns(page.as_deref())
}

/// Downloads the compare page under the large-page timeout. The result is
/// shared by every consumer of the page within one aggregation.
pub async fn load_compare_page(ctx: &FetchContext) -> Result<String, AppError> {
    let timeout = std::time::Duration::from_secs(strategy_timeout::LARGE_PAGE_SECONDS);
    match tokio::time::timeout(timeout, fetch_compare_page(ctx)).await {
        Ok(result) => result,
        Err(_) => Err(AppError::strategy_timeout(
            STRATEGY_NAME,
            strategy_timeout::LARGE_PAGE_SECONDS,
        )),
    }
}

/// Splits an already loaded compare page into the column sources
pub fn split_compare_columns(page: Result<&str, &AppError>) -> Vec<SourceFetch> {
    let html = match page {
        Ok(html) => html,
        Err(e) => {
            warn!("[Compare] page fetch failed: {e}");
            return COLUMN_HEADERS
                .iter()
                .map(|(source, _)| failed(*source, e.to_string()))
                .collect();
        }
    };

    let mut columns = match parse_compare_columns(html, &COLUMN_HEADERS) {
        Ok(columns) => columns,
        Err(e) => {
            warn!("[Compare] page parse failed: {e}");
            return COLUMN_HEADERS
                .iter()
                .map(|(source, _)| failed(*source, e.to_string()))
                .collect();
        }
    };

    COLUMN_HEADERS
        .iter()
        .map(|(source, _)| match columns.remove(source) {
            Some(records) => gate_column(*source, records),
            None => {
                warn!("[{}] column not found on compare page", source.label());
                failed(*source, "column not found".to_string())
            }
        })
        .collect()
}

async fn fetch_compare_page(ctx: &FetchContext) -> Result<String, AppError> {
    let url = build_compare_rankings_url(&ctx.endpoints.warren_nolan, ctx.season);
    fetch_text(
        &ctx.client,
        &url,
        ContentKind::Html,
        Some(WARREN_NOLAN_REFERER),
    )
    .await
}

fn gate_column(source: RankingSource, records: Vec<SourceRecord>) -> SourceFetch {
    let records = finalize_records(source, records);
    if passes_gate(source, records.len()) {
        info!("[{}] {} loaded {} entries", source.label(), STRATEGY_NAME, records.len());
        SourceFetch {
            source,
            records,
            strategy: Some(STRATEGY_NAME),
            failures: Vec::new(),
        }
    } else {
        warn!(
            "[{}] compare column has too few entries ({})",
            source.label(),
            records.len()
        );
        failed(source, format!("only {} usable entries", records.len()))
    }
}

fn failed(source: RankingSource, outcome: String) -> SourceFetch {
    SourceFetch {
        failures: vec![StrategyAttempt {
            strategy: STRATEGY_NAME,
            outcome,
        }],
        ..SourceFetch::empty(source)
    }
}

/// Extracts every requested column present on the page. Sources whose
/// header is missing are absent from the result.
pub(crate) fn parse_compare_columns(
    html: &str,
    wanted: &[(RankingSource, &[&str])],
) -> Result<BTreeMap<RankingSource, Vec<SourceRecord>>, AppError> {
    let document = Html::parse_document(html);
    let rows = body_rows(&document)?;
    let mut columns = BTreeMap::new();

    for (source, headers) in wanted {
        let Some(index) = header_index(&document, headers)? else {
            continue;
        };
        debug!("[{}] compare column at index {index}", source.label());

        let records = rows
            .iter()
            .filter(|cells| cells.len() > index)
            .filter_map(|cells| {
                let team = last_link_text(&cells[0]).unwrap_or_else(|| element_text(&cells[0]));
                let rank = parse_leading_int(&element_text(&cells[index]))?;
                (team.chars().count() > 1).then(|| SourceRecord::new(rank, team))
            })
            .collect();
        columns.insert(*source, records);
    }

    Ok(columns)
}

/// Extracts a single column, failing when its header is missing
pub(crate) fn parse_compare_column(
    html: &str,
    source: RankingSource,
    headers: &[&str],
) -> Result<Vec<SourceRecord>, AppError> {
    parse_compare_columns(html, &[(source, headers)])?
        .remove(&source)
        .ok_or_else(|| {
            AppError::html_parse(
                format!("{} column not found", headers.join("/")),
                "compare-rankings",
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::scrapers::test_support::{compare_page, fetch_context};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_parse_compare_columns_by_header_alias() {
        let html = r#"<table>
            <thead><tr><th>Team</th><th>KenPom</th><th>SAG</th></tr></thead>
            <tbody>
              <tr><td><a>logo</a><a>Florida</a></td><td>3</td><td>5</td></tr>
              <tr><td>Tennessee</td><td>4</td><td></td></tr>
            </tbody></table>"#;

        let columns = parse_compare_columns(html, &COLUMN_HEADERS).unwrap();
        assert_eq!(columns.len(), 2);

        let pom = &columns[&RankingSource::Pom];
        assert_eq!(pom[0], SourceRecord::new(3, "Florida"));
        assert_eq!(pom[1], SourceRecord::new(4, "Tennessee"));

        // Blank cells are skipped rather than ranked
        assert_eq!(columns[&RankingSource::Sag].len(), 1);
        assert!(!columns.contains_key(&RankingSource::Wab));
    }

    #[test]
    fn test_parse_compare_column_missing_header_is_error() {
        let html = "<table><thead><tr><th>Team</th></tr></thead><tbody></tbody></table>";
        let result = parse_compare_column(html, RankingSource::Bpi, BPI_HEADERS);
        assert!(matches!(result, Err(AppError::HtmlParse { .. })));
    }

    #[tokio::test]
    async fn test_fetch_compare_columns_gates_each_column() {
        let mock_server = MockServer::start().await;
        // Page carries POM, SOR, KPI, ELO and SAG; WAB is missing
        Mock::given(method("GET"))
            .and(path("/basketball/2025/compare-rankings"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(compare_page(80, &["BPI", "POM", "SOR", "KPI", "ELO", "SAG"])),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let ctx = fetch_context(&mock_server.uri(), 2025);
        let fetches = fetch_compare_columns(&ctx).await;

        assert_eq!(fetches.len(), 6);
        for fetch in &fetches[..5] {
            assert_eq!(fetch.records.len(), 80, "{:?}", fetch.source);
            assert_eq!(fetch.strategy, Some(STRATEGY_NAME));
        }
        assert_eq!(fetches[5].source, RankingSource::Wab);
        assert!(fetches[5].records.is_empty());
        assert_eq!(fetches[5].failures[0].outcome, "column not found");
    }

    #[tokio::test]
    async fn test_fetch_compare_columns_page_failure_fails_all() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let ctx = fetch_context(&mock_server.uri(), 2025);
        let fetches = fetch_compare_columns(&ctx).await;
        assert_eq!(fetches.len(), 6);
        assert!(fetches.iter().all(|fetch| !fetch.is_success()));
    }
}
