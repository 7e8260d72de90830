//! AP Top 25 and USA Today Coaches polls
//!
//! Both polls come from the same ESPN rankings payload, with the NCAA.com
//! poll pages as fallback.

use scraper::Html;
use serde_json::Value;
use tracing::instrument;

use super::FetchContext;
use super::extract::{parse_leading_int, rank_field, text_field};
use super::html::{body_rows, first_link_text};
use super::strategy::{SourceFetch, Strategy, run_strategies};
use crate::constants::{POLL_SIZE, strategy_timeout};
use crate::data_fetcher::api::{
    ContentKind, ESPN_REFERER, NCAA_REFERER, build_espn_rankings_url, build_ncaa_poll_url,
    fetch_json_value, fetch_text,
};
use crate::data_fetcher::models::{RankingSource, SourceRecord};
use crate::error::AppError;

/// The two human polls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Poll {
    Ap,
    Coaches,
}

impl Poll {
    pub fn source(self) -> RankingSource {
        match self {
            Poll::Ap => RankingSource::Ap,
            Poll::Coaches => RankingSource::Coaches,
        }
    }

    fn ncaa_slug(self) -> &'static str {
        match self {
            Poll::Ap => "associated-press",
            Poll::Coaches => "usa-today-coaches",
        }
    }

    /// Whether an ESPN `rankings[]` entry is this poll
    fn matches(self, type_field: &str, name: &str) -> bool {
        match self {
            Poll::Ap => {
                type_field == "ap" || name.contains("associated press") || name.contains("ap top")
            }
            Poll::Coaches => {
                type_field == "coaches"
                    || type_field == "usatoday"
                    || name.contains("coaches")
                    || name.contains("usa today")
            }
        }
    }
}

#[instrument(skip(ctx))]
pub async fn fetch_poll(ctx: &FetchContext, poll: Poll) -> SourceFetch {
    let strategies = vec![
        Strategy::new(
            "espn rankings json",
            strategy_timeout::JSON_API_SECONDS,
            espn_rankings(ctx, poll),
        ),
        Strategy::new(
            "ncaa.com poll page",
            strategy_timeout::HTML_PAGE_SECONDS,
            ncaa_poll_page(ctx, poll),
        ),
    ];
    run_strategies(poll.source(), strategies).await
}

async fn espn_rankings(ctx: &FetchContext, poll: Poll) -> Result<Vec<SourceRecord>, AppError> {
    let url = build_espn_rankings_url(&ctx.endpoints.espn_site);
    let payload = fetch_json_value(&ctx.client, &url, Some(ESPN_REFERER)).await?;
    Ok(parse_espn_poll(&payload, poll))
}

async fn ncaa_poll_page(ctx: &FetchContext, poll: Poll) -> Result<Vec<SourceRecord>, AppError> {
    let url = build_ncaa_poll_url(&ctx.endpoints.ncaa, poll.ncaa_slug());
    let html = fetch_text(&ctx.client, &url, ContentKind::Html, Some(NCAA_REFERER)).await?;
    parse_ncaa_poll_page(&html)
}

/// Picks the requested poll out of ESPN's `rankings[]` array
pub(crate) fn parse_espn_poll(payload: &Value, poll: Poll) -> Vec<SourceRecord> {
    let Some(rankings) = payload.get("rankings").and_then(Value::as_array) else {
        return Vec::new();
    };

    let selected = rankings.iter().find(|entry| {
        let type_field = text_field(entry, &["type"])
            .unwrap_or_default()
            .to_lowercase();
        let name = text_field(entry, &["name", "shortName", "type"])
            .unwrap_or_default()
            .to_lowercase();
        poll.matches(&type_field, &name)
    });

    let Some(ranks) = selected
        .and_then(|entry| entry.get("ranks"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    ranks
        .iter()
        .filter_map(|entry| {
            let rank = rank_field(entry, &["current", "rank"])?;
            let team_object = entry.get("team")?;
            let team = text_field(
                team_object,
                &["shortDisplayName", "location", "displayName", "name"],
            )?;
            (team.chars().count() > 1).then(|| SourceRecord::new(rank, team))
        })
        .collect()
}

/// NCAA.com poll table: rank, then school. The school cell may carry
/// first-place votes on a second line, so only the first text line is used.
pub(crate) fn parse_ncaa_poll_page(html: &str) -> Result<Vec<SourceRecord>, AppError> {
    let document = Html::parse_document(html);
    let mut records = Vec::new();

    for cells in body_rows(&document)? {
        if cells.len() < 2 {
            continue;
        }
        let Some(rank) = parse_leading_int(&cells[0].text().collect::<String>()) else {
            continue;
        };
        if !(1..=POLL_SIZE).contains(&rank) {
            continue;
        }
        let team = first_link_text(&cells[1]).unwrap_or_else(|| {
            cells[1]
                .text()
                .map(str::trim)
                .find(|line| !line.is_empty())
                .unwrap_or_default()
                .to_string()
        });
        if team.chars().count() > 1 {
            records.push(SourceRecord::new(rank, team));
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::scrapers::test_support::{espn_rankings_payload, fetch_context};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_parse_espn_poll_selects_by_type_and_name() {
        let payload = json!({
            "rankings": [
                {"name": "AP Top 25", "type": "ap", "ranks": [
                    {"current": 1, "points": 1550, "team": {"shortDisplayName": "Auburn"}},
                    {"current": 2, "team": {"location": "Duke"}}
                ]},
                {"name": "USA Today Coaches Poll", "type": "usa", "ranks": [
                    {"rank": "1", "team": {"displayName": "Duke Blue Devils"}},
                    {"current": 0, "team": {"shortDisplayName": "Zero"}}
                ]}
            ]
        });

        let ap = parse_espn_poll(&payload, Poll::Ap);
        assert_eq!(ap, vec![SourceRecord::new(1, "Auburn"), SourceRecord::new(2, "Duke")]);

        let coaches = parse_espn_poll(&payload, Poll::Coaches);
        assert_eq!(coaches, vec![SourceRecord::new(1, "Duke Blue Devils")]);
    }

    #[test]
    fn test_parse_espn_poll_missing_poll_is_empty() {
        let payload = json!({"rankings": [{"name": "Other", "type": "x", "ranks": []}]});
        assert!(parse_espn_poll(&payload, Poll::Ap).is_empty());
        assert!(parse_espn_poll(&json!({}), Poll::Coaches).is_empty());
    }

    #[test]
    fn test_parse_ncaa_poll_page_first_line_and_range() {
        let html = r#"<table><tbody>
            <tr><td>1</td><td>Auburn<br/>(55)</td></tr>
            <tr><td>2</td><td><a href="/d">Duke</a> (5)</td></tr>
            <tr><td>26</td><td>Outside</td></tr>
        </tbody></table>"#;

        let records = parse_ncaa_poll_page(html).unwrap();
        assert_eq!(
            records,
            vec![SourceRecord::new(1, "Auburn"), SourceRecord::new(2, "Duke")]
        );
    }

    #[tokio::test]
    async fn test_fetch_poll_from_espn() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/apis/site/v2/sports/basketball/mens-college-basketball/rankings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(espn_rankings_payload(&[
                "Auburn", "Duke", "Houston",
            ])))
            .mount(&mock_server)
            .await;

        let ctx = fetch_context(&mock_server.uri(), 2025);
        let ap = fetch_poll(&ctx, Poll::Ap).await;
        let coaches = fetch_poll(&ctx, Poll::Coaches).await;

        assert_eq!(ap.records.len(), 3);
        assert_eq!(ap.source, RankingSource::Ap);
        // The coaches list in the fixture is reversed
        assert_eq!(coaches.records[0].team, "Houston");
    }

    #[tokio::test]
    async fn test_fetch_poll_falls_back_to_ncaa_page() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/apis/site/v2/sports/basketball/mens-college-basketball/rankings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rankings": []})))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rankings/basketball-men/d1/usa-today-coaches"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                "<table><tbody><tr><td>1</td><td>Florida</td></tr></tbody></table>",
            ))
            .mount(&mock_server)
            .await;

        let ctx = fetch_context(&mock_server.uri(), 2025);
        let fetch = fetch_poll(&ctx, Poll::Coaches).await;
        assert_eq!(fetch.records, vec![SourceRecord::new(1, "Florida")]);
        assert_eq!(fetch.strategy, Some("ncaa.com poll page"));
    }
}
