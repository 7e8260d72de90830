// src/main.rs
mod app;
mod cli;
mod commands;
mod logging;

use cbb_rankings::config::Config;
use cbb_rankings::error::AppError;
use clap::Parser;
use cli::{Args, is_config_update};
use commands::{
    build_service, handle_audit_aliases_command, handle_config_update_command,
    handle_diagnose_command, handle_list_config_command, handle_rankings_command, validate_args,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();
    validate_args(&args)?;

    // The guard must be kept alive for the duration of the program
    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    // Handle configuration operations first; they never touch the network
    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_update(&args) {
        return handle_config_update_command(&args).await;
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;
    let service = build_service(&config)?;

    if args.diagnose {
        return handle_diagnose_command(&service).await;
    }

    if args.audit_aliases {
        return handle_audit_aliases_command(&service).await;
    }

    if let Some(interval) = args.watch {
        return app::run_watch(&args, &service, interval).await;
    }

    handle_rankings_command(&args, &service, args.refresh).await
}
