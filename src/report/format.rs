//! Plain-text pieces of the report, kept free of terminal styling

use chrono::{DateTime, Local};

use crate::data_fetcher::models::{RankingSource, RankingsData, SourceStatus, TeamRanking};

pub const RANK_WIDTH: usize = 4;
pub const TEAM_WIDTH: usize = 24;
pub const CONFERENCE_WIDTH: usize = 10;
pub const RECORD_WIDTH: usize = 7;
pub const SCORE_WIDTH: usize = 6;
pub const SOURCES_WIDTH: usize = 4;
pub const SOURCE_COLUMN_WIDTH: usize = 8;

pub fn status_symbol(status: SourceStatus) -> &'static str {
    match status {
        SourceStatus::Success => "✓",
        SourceStatus::Error => "✗",
        SourceStatus::Pending => "…",
    }
}

/// `✓ NET`, `✗ ESPN BPI`, ...
pub fn status_pill(source: RankingSource, status: SourceStatus) -> String {
    format!("{} {}", status_symbol(status), source.label())
}

/// e.g. `Updated 16.10.2026 14:03 · 9/11 sources · 362 teams`
pub fn header_line(data: &RankingsData) -> String {
    let updated: DateTime<Local> = data.last_updated.with_timezone(&Local);
    format!(
        "Updated {} · {}/{} sources · {} teams",
        updated.format("%d.%m.%Y %H:%M"),
        data.successful_source_count(),
        RankingSource::ALL.len(),
        data.teams.len()
    )
}

/// Short human form of a cache age, e.g. `12s`, `5m`, `2h 10m`
pub fn format_age(age_ms: u64) -> String {
    let seconds = age_ms / 1000;
    match seconds {
        0..60 => format!("{seconds}s"),
        60..3600 => format!("{}m", seconds / 60),
        _ => format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60),
    }
}

/// Banner naming failed sources. `None` when nothing failed or there is no
/// data to qualify.
pub fn failure_banner(data: &RankingsData) -> Option<String> {
    let failed = data.failed_sources();
    if failed.is_empty() || !data.has_teams() {
        return None;
    }
    let labels: Vec<&str> = failed.iter().map(|source| source.label()).collect();
    Some(format!(
        "Could not load: {}; composite calculated from remaining sources.",
        labels.join(", ")
    ))
}

/// Pads or cuts `text` to exactly `width` characters
pub fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        format!("{text:<width$}")
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

pub fn table_header(selected: &[RankingSource]) -> String {
    let mut line = format!(
        "{:>rw$} {} {} {} {:>sw$} {:>nw$}",
        "#",
        fit("Team", TEAM_WIDTH),
        fit("Conf", CONFERENCE_WIDTH),
        fit("Record", RECORD_WIDTH),
        "Score",
        "Src",
        rw = RANK_WIDTH,
        sw = SCORE_WIDTH,
        nw = SOURCES_WIDTH,
    );
    for source in selected {
        line.push(' ');
        line.push_str(&format!(
            "{:>width$}",
            fit_right(source.label(), SOURCE_COLUMN_WIDTH),
            width = SOURCE_COLUMN_WIDTH
        ));
    }
    line
}

pub fn table_row(position: usize, team: &TeamRanking, selected: &[RankingSource]) -> String {
    let score = team
        .composite
        .map(|score| format!("{score:.1}"))
        .unwrap_or_else(|| "-".to_string());
    let mut line = format!(
        "{:>rw$} {} {} {} {:>sw$} {:>nw$}",
        position,
        fit(&team.team, TEAM_WIDTH),
        fit(team.conference.as_deref().unwrap_or("-"), CONFERENCE_WIDTH),
        fit(team.record.as_deref().unwrap_or("-"), RECORD_WIDTH),
        score,
        team.sources_ranked.unwrap_or(0),
        rw = RANK_WIDTH,
        sw = SCORE_WIDTH,
        nw = SOURCES_WIDTH,
    );
    for source in selected {
        let rank = team
            .rank(*source)
            .map(|rank| rank.to_string())
            .unwrap_or_else(|| "-".to_string());
        line.push(' ');
        line.push_str(&format!("{rank:>width$}", width = SOURCE_COLUMN_WIDTH));
    }
    line
}

fn fit_right(text: &str, width: usize) -> String {
    fit(text, width).trim_end().to_string()
}
