use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

use cbb_rankings::constants::report::DEFAULT_TOP_ROWS;
use cbb_rankings::data_fetcher::models::RankingSource;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Whether the arguments only touch the configuration file
pub fn is_config_update(args: &Args) -> bool {
    args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.new_season.is_some()
        || args.clear_season
}

/// Composite men's college basketball rankings
///
/// Fetches NET, KenPom, Torvik, ESPN BPI, SOR, KPI, ELO, Sagarin, WAB and the
/// AP and Coaches polls, reconciles team names, and ranks every Division I
/// team by a weighted percentile composite.
///
/// Results are cached in memory for the configured TTL (4 hours by default);
/// in --watch mode the cache serves repeated refreshes until it expires.
#[derive(Parser, Debug)]
#[command(author = "Niko Salonen", version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Sources used for the composite and shown as columns, comma separated
    /// (net, pom, torvik, bpi, sor, kpi, elo, sag, wab, ap, coaches).
    /// Defaults to every source.
    #[arg(
        long = "sources",
        short = 's',
        value_delimiter = ',',
        value_name = "LIST",
        help_heading = "Display Options"
    )]
    pub sources: Vec<RankingSource>,

    /// Number of rows to show; 0 shows every team
    #[arg(
        long = "top",
        short = 'n',
        default_value_t = DEFAULT_TOP_ROWS,
        help_heading = "Display Options"
    )]
    pub top: usize,

    /// Print the full response as JSON instead of the table
    #[arg(long = "json", help_heading = "Display Options")]
    pub json: bool,

    /// Ignore the cache and fetch every source again
    #[arg(long = "refresh", short = 'r')]
    pub refresh: bool,

    /// Refresh every SECONDS seconds until interrupted
    #[arg(long = "watch", short = 'w', value_name = "SECONDS")]
    pub watch: Option<u64>,

    /// Fetch every source once and report what each returned
    #[arg(long = "diagnose", help_heading = "Diagnostics")]
    pub diagnose: bool,

    /// List team-name aliases whose target is missing from the current roster
    #[arg(long = "audit-aliases", help_heading = "Diagnostics")]
    pub audit_aliases: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(
        long = "set-log-file",
        value_name = "PATH",
        help_heading = "Configuration",
        conflicts_with = "clear_log_file_path"
    )]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// Pin the season (the year the season ends, e.g. 2025) in config
    #[arg(
        long = "set-season",
        value_name = "YEAR",
        help_heading = "Configuration",
        conflicts_with = "clear_season"
    )]
    pub new_season: Option<i32>,

    /// Clear the pinned season and derive it from the current date
    #[arg(long = "clear-season", help_heading = "Configuration")]
    pub clear_season: bool,

    /// Also write logs to the terminal
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", value_name = "PATH", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// Sources selected for the composite, in priority order
    pub fn selected_sources(&self) -> Vec<RankingSource> {
        if self.sources.is_empty() {
            return RankingSource::ALL.to_vec();
        }
        let mut selected = self.sources.clone();
        selected.sort();
        selected.dedup();
        selected
    }
}
