//! Fixture builders shared by the fetcher tests

use serde_json::{Value, json};

use super::FetchContext;
use crate::config::Endpoints;
use crate::data_fetcher::api::http_client::create_test_http_client;

pub fn fetch_context(base_url: &str, season: i32) -> FetchContext {
    FetchContext::new(create_test_http_client(), Endpoints::all_at(base_url), season)
}

/// NCAA.com-style NET table with `count` ranked schools
pub fn ncaa_net_page(count: u32) -> String {
    let rows: String = (1..=count)
        .map(|rank| {
            format!(
                "<tr><td>{rank}</td><td><a href=\"/school/{rank}\">School {rank}</a></td><td>Conf</td><td>10-2</td></tr>"
            )
        })
        .collect();
    format!("<html><body><table><tbody>{rows}</tbody></table></body></html>")
}

/// Warren Nolan-style NET page with `count` ranked schools
pub fn warren_nolan_net_page(count: u32) -> String {
    let rows: String = (1..=count)
        .map(|rank| {
            format!(
                "<tr><td><a href=\"/logo\"></a><a href=\"/team\">School {rank}</a></td><td>9-3</td><td class=\"cell-right-black\">{rank}</td></tr>"
            )
        })
        .collect();
    format!("<table><tbody>{rows}</tbody></table>")
}

/// Compare-rankings table with one column per header; every column ranks
/// the schools in the same order
pub fn compare_page(count: u32, headers: &[&str]) -> String {
    let head: String = headers.iter().map(|h| format!("<th>{h}</th>")).collect();
    let rows: String = (1..=count)
        .map(|rank| {
            let cells: String = headers.iter().map(|_| format!("<td>{rank}</td>")).collect();
            format!("<tr><td><a href=\"/team\">School {rank}</a></td>{cells}</tr>")
        })
        .collect();
    format!(
        "<table><thead><tr><th>Team</th>{head}</tr></thead><tbody>{rows}</tbody></table>"
    )
}

/// ESPN rankings payload: AP lists `teams` in order, Coaches in reverse
pub fn espn_rankings_payload(teams: &[&str]) -> Value {
    let ranks = |names: Vec<&str>| -> Vec<Value> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| json!({"current": i + 1, "team": {"shortDisplayName": name}}))
            .collect()
    };
    let mut reversed = teams.to_vec();
    reversed.reverse();

    json!({
        "rankings": [
            {"name": "AP Top 25", "type": "ap", "ranks": ranks(teams.to_vec())},
            {"name": "USA Today Coaches Poll", "type": "usa", "ranks": ranks(reversed)}
        ]
    })
}
