//! Styled terminal output

use crossterm::queue;
use crossterm::style::{
    Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use std::io::Write;

use super::colors::{
    error_fg, header_bg, header_fg, muted_fg, score_fg, status_fg, subheader_fg, text_fg,
    warning_fg,
};
use super::format::{
    failure_banner, format_age, header_line, status_pill, table_header, table_row,
};
use crate::data_fetcher::models::{RankingSource, RankingsData, TeamRanking};
use crate::data_fetcher::team_names::StaleAlias;
use crate::error::AppError;
use crate::service::{RankingsResponse, SourceDiagnostic};

const TITLE: &str = "NCAA MEN'S BASKETBALL · COMPOSITE RANKINGS";

/// Everything the rankings view needs besides the data itself
#[derive(Debug, Clone)]
pub struct ReportOptions<'a> {
    /// Sources shown as columns and used for the composite
    pub selected: &'a [RankingSource],
    /// Rows to print; 0 prints every team
    pub top: usize,
}

/// Prints the header, status pills, failure banner and ranking table.
///
/// `teams` must already carry composite scores for `options.selected`.
pub fn render_rankings<W: Write>(
    out: &mut W,
    response: &RankingsResponse,
    teams: &[TeamRanking],
    options: &ReportOptions<'_>,
) -> Result<(), AppError> {
    let data = &response.data;
    render_title(out)?;

    let mut header = header_line(data);
    if response.from_cache {
        header.push_str(&format!(" · cached {} ago", format_age(response.cache_age_ms)));
    }
    queue!(out, SetForegroundColor(text_fg()), Print(header), Print("\n"))?;
    render_status_pills(out, data)?;

    if let Some(banner) = failure_banner(data) {
        queue!(
            out,
            SetForegroundColor(warning_fg()),
            Print(banner),
            Print("\n")
        )?;
    }
    queue!(out, Print("\n"))?;

    queue!(
        out,
        SetForegroundColor(subheader_fg()),
        SetAttribute(Attribute::Bold),
        Print(table_header(options.selected)),
        SetAttribute(Attribute::Reset),
        Print("\n")
    )?;

    let limit = if options.top == 0 { teams.len() } else { options.top };
    for (index, team) in teams.iter().take(limit).enumerate() {
        let colour = if team.composite.is_some() {
            score_fg()
        } else {
            muted_fg()
        };
        queue!(
            out,
            SetForegroundColor(colour),
            Print(table_row(index + 1, team, options.selected)),
            Print("\n")
        )?;
    }

    if limit < teams.len() {
        queue!(
            out,
            SetForegroundColor(muted_fg()),
            Print(format!("… {} more teams (use --top 0 to show all)\n", teams.len() - limit))
        )?;
    }

    queue!(out, ResetColor)?;
    out.flush()?;
    Ok(())
}

/// Shown instead of the table when no roster could be built
pub fn render_no_data<W: Write>(out: &mut W, data: &RankingsData) -> Result<(), AppError> {
    render_title(out)?;
    render_status_pills(out, data)?;
    queue!(
        out,
        SetForegroundColor(error_fg()),
        Print("No ranking data available. None of the full-ranking sources returned a usable list.\n"),
        SetForegroundColor(muted_fg()),
        Print(format!("Source status: {}\n", data.status_summary())),
        Print("Run with --diagnose to see what each source returned.\n"),
        ResetColor
    )?;
    out.flush()?;
    Ok(())
}

pub fn render_diagnostics<W: Write>(
    out: &mut W,
    diagnostics: &[SourceDiagnostic],
) -> Result<(), AppError> {
    render_title(out)?;
    for diagnostic in diagnostics {
        queue!(
            out,
            SetForegroundColor(status_fg(diagnostic.status)),
            SetAttribute(Attribute::Bold),
            Print(status_pill(diagnostic.source, diagnostic.status)),
            SetAttribute(Attribute::Reset),
            SetForegroundColor(text_fg()),
            Print(format!("  {} entries", diagnostic.count)),
        )?;
        if let Some(strategy) = diagnostic.strategy {
            queue!(out, SetForegroundColor(muted_fg()), Print(format!(" via {strategy}")))?;
        }
        queue!(out, Print("\n"))?;

        for record in &diagnostic.sample {
            queue!(
                out,
                SetForegroundColor(text_fg()),
                Print(format!("    {:>3}. {}\n", record.rank, record.team))
            )?;
        }
        for attempt in &diagnostic.failures {
            queue!(
                out,
                SetForegroundColor(warning_fg()),
                Print(format!("    {}: {}\n", attempt.strategy, attempt.outcome))
            )?;
        }
    }
    queue!(out, ResetColor)?;
    out.flush()?;
    Ok(())
}

pub fn render_stale_aliases<W: Write>(out: &mut W, stale: &[StaleAlias]) -> Result<(), AppError> {
    if stale.is_empty() {
        queue!(
            out,
            SetForegroundColor(subheader_fg()),
            Print("Every alias target is on the current roster.\n"),
            ResetColor
        )?;
        out.flush()?;
        return Ok(());
    }

    queue!(
        out,
        SetForegroundColor(text_fg()),
        Print(format!(
            "{} alias entries point at names missing from the current roster:\n",
            stale.len()
        ))
    )?;
    for entry in stale {
        queue!(
            out,
            SetForegroundColor(warning_fg()),
            Print(format!("  {:<28}", entry.canonical)),
            SetForegroundColor(muted_fg()),
            Print(format!("← \"{}\"\n", entry.alias))
        )?;
    }
    queue!(out, ResetColor)?;
    out.flush()?;
    Ok(())
}

fn render_title<W: Write>(out: &mut W) -> Result<(), AppError> {
    queue!(
        out,
        SetBackgroundColor(header_bg()),
        SetForegroundColor(header_fg()),
        SetAttribute(Attribute::Bold),
        Print(format!(" {TITLE} ")),
        SetAttribute(Attribute::Reset),
        ResetColor,
        Print("\n")
    )?;
    Ok(())
}

fn render_status_pills<W: Write>(out: &mut W, data: &RankingsData) -> Result<(), AppError> {
    for source in RankingSource::ALL {
        let status = data.status(source);
        queue!(
            out,
            SetForegroundColor(status_fg(status)),
            Print(status_pill(source, status)),
            Print("  ")
        )?;
    }
    queue!(out, ResetColor, Print("\n"))?;
    Ok(())
}
