use crate::cli::Args;
use crate::commands::handle_rankings_command;
use cbb_rankings::data_fetcher::cache::RankingsCache;
use cbb_rankings::error::AppError;
use cbb_rankings::service::RankingsService;
use std::time::Duration;
use tracing::{info, warn};

/// Run the watch application flow.
///
/// - Prints the rankings, then repeats every `interval_seconds`
/// - The first round honours `--refresh`; later rounds are served from the
///   cache until its TTL expires
/// - A round without data is reported and the loop keeps going
/// - Stops on Ctrl+C
pub async fn run_watch<C: RankingsCache>(
    args: &Args,
    service: &RankingsService<C>,
    interval_seconds: u64,
) -> Result<(), AppError> {
    let interval = Duration::from_secs(interval_seconds);
    let mut force_refresh = args.refresh;

    loop {
        match handle_rankings_command(args, service, force_refresh).await {
            Ok(()) => {}
            Err(AppError::NoRankingData { details }) => {
                warn!("Watch round produced no data: {details}");
            }
            Err(e) => return Err(e),
        }
        force_refresh = false;

        println!("\nNext refresh in {interval_seconds}s (Ctrl+C to quit)");
        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = tokio::signal::ctrl_c() => {
                info!("Watch mode interrupted");
                return Ok(());
            }
        }
    }
}
