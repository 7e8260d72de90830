use crate::cli::Args;
use cbb_rankings::composite::compute_composite;
use cbb_rankings::config::Config;
use cbb_rankings::data_fetcher::cache::{MemoryCache, RankingsCache};
use cbb_rankings::data_fetcher::scrapers::FetchContext;
use cbb_rankings::error::AppError;
use cbb_rankings::report::{
    ReportOptions, render_diagnostics, render_no_data, render_rankings, render_stale_aliases,
};
use cbb_rankings::service::{RankingsResponse, RankingsService};
use crossterm::{execute, terminal::SetTitle};
use std::io::stdout;
use std::time::Duration;
use tracing::info;

const TERMINAL_TITLE: &str = "CBB RANKINGS";

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.watch == Some(0) {
        return Err(AppError::config_error(
            "--watch interval must be at least one second",
        ));
    }
    if args.json && (args.diagnose || args.audit_aliases) {
        return Err(AppError::config_error(
            "--json cannot be combined with --diagnose or --audit-aliases",
        ));
    }
    if args.diagnose && args.audit_aliases {
        return Err(AppError::config_error(
            "Cannot use both --diagnose and --audit-aliases",
        ));
    }
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;
    Config::display().await?;
    Ok(())
}

/// Handles configuration update commands (--set-log-file, --clear-log-file,
/// --set-season, --clear-season).
///
/// A missing or unreadable config file starts from defaults.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_default();
    apply_config_updates(&mut config, args);
    config.validate()?;

    config.save().await?;
    println!("Config updated successfully!");
    Ok(())
}

fn apply_config_updates(config: &mut Config, args: &Args) {
    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    if let Some(season) = args.new_season {
        config.season = Some(season);
    } else if args.clear_season {
        config.season = None;
        println!("Season override cleared. Season follows the current date.");
    }
}

/// Builds the service with an in-memory cache sized by the configured TTL
pub fn build_service(config: &Config) -> Result<RankingsService<MemoryCache>, AppError> {
    let ctx = FetchContext::from_config(config)?;
    info!("Using season {}", ctx.season);
    let cache = MemoryCache::new(Duration::from_secs(config.cache_ttl_seconds));
    Ok(RankingsService::new(ctx, cache))
}

/// Fetches (or serves cached) rankings and prints them.
///
/// Prints the no-data report and fails with [`AppError::NoRankingData`]
/// when no roster could be built.
pub async fn handle_rankings_command<C: RankingsCache>(
    args: &Args,
    service: &RankingsService<C>,
    force_refresh: bool,
) -> Result<(), AppError> {
    let response = if force_refresh {
        service.force_refresh().await
    } else {
        service.get_or_fetch().await
    };
    print_response(args, &response)
}

fn print_response(args: &Args, response: &RankingsResponse) -> Result<(), AppError> {
    let selected = args.selected_sources();
    let mut out = stdout();

    if !response.data.has_teams() {
        if args.json {
            println!("{}", serde_json::to_string_pretty(response)?);
        } else {
            render_no_data(&mut out, &response.data)?;
        }
        response.require_teams()?;
        return Ok(());
    }

    if args.json {
        let mut selected_response = response.clone();
        selected_response.data.teams = compute_composite(&response.data.teams, &selected);
        println!("{}", serde_json::to_string_pretty(&selected_response)?);
        return Ok(());
    }

    execute!(out, SetTitle(TERMINAL_TITLE))?;
    let teams = compute_composite(&response.data.teams, &selected);
    render_rankings(
        &mut out,
        response,
        &teams,
        &ReportOptions {
            selected: &selected,
            top: args.top,
        },
    )
}

/// Handles the --diagnose command.
pub async fn handle_diagnose_command<C: RankingsCache>(
    service: &RankingsService<C>,
) -> Result<(), AppError> {
    let diagnostics = service.diagnose().await;
    render_diagnostics(&mut stdout(), &diagnostics)
}

/// Handles the --audit-aliases command.
pub async fn handle_audit_aliases_command<C: RankingsCache>(
    service: &RankingsService<C>,
) -> Result<(), AppError> {
    let response = service.get_or_fetch().await;
    if !response.data.has_teams() {
        render_no_data(&mut stdout(), &response.data)?;
        response.require_teams()?;
    }
    // Served from the cache filled above
    let stale = service.stale_aliases().await?;
    render_stale_aliases(&mut stdout(), &stale)
}
