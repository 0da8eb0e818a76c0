//! # sanscreen CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros; tracing verbosity is mapped from repeated `-v`
//! flags. The backend base URL comes from `--api-base`, then the
//! `SANSCREEN_API_BASE` environment variable, then the local fallback.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sanscreen_client::{ClientConfig, ScreeningClient};

use sanscreen_cli::audit::{run_audit, AuditArgs};
use sanscreen_cli::batches::{run_batches, BatchesArgs};
use sanscreen_cli::decide::{run_decide, run_decisions, DecideArgs, DecisionsArgs};
use sanscreen_cli::detail::{run_detail, DetailArgs};
use sanscreen_cli::history::{run_history, HistoryArgs};
use sanscreen_cli::kpi::{run_kpi, KpiArgs};
use sanscreen_cli::screen::{run_screen, ScreenArgs};
use sanscreen_cli::system::{run_health, run_status};
use sanscreen_cli::upload::{run_upload, UploadArgs};

/// sanscreen — sanctions-screening review client
///
/// Command-line front-end for the screening backend: upload batches of
/// names, review paginated screening results, record clearing decisions
/// with an audit trail, and run single-name screenings.
#[derive(Parser, Debug)]
#[command(name = "sanscreen", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Backend base URL; overrides SANSCREEN_API_BASE.
    #[arg(long, global = true)]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List uploaded batches and their processing status.
    Batches(BatchesArgs),

    /// Upload a CSV/Excel file of names as a new screening batch.
    Upload(UploadArgs),

    /// Show one batch's screening results (paginated, filterable).
    Batch(DetailArgs),

    /// Record a reviewer decision for one (name, sanction) pair.
    Decide(DecideArgs),

    /// List recorded decisions.
    Decisions(DecisionsArgs),

    /// Show the audit history of one decision.
    Audit(AuditArgs),

    /// Screen a single name against the sanctions lists.
    Screen(ScreenArgs),

    /// List prior single screenings for a company.
    History(HistoryArgs),

    /// Per-list sanction data freshness and volume metrics.
    Kpi(KpiArgs),

    /// Show the backend's system status payload.
    Status,

    /// Probe the backend health endpoint.
    Health,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = match &cli.api_base {
        Some(base) => ClientConfig::new(base.clone()),
        None => ClientConfig::from_env(),
    };
    let client = match ScreeningClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(2);
        }
    };
    tracing::debug!(base_url = client.base_url(), "sanscreen CLI starting");

    let result = match cli.command {
        Commands::Batches(args) => run_batches(&client, &args).await,
        Commands::Upload(args) => run_upload(&client, &args).await,
        Commands::Batch(args) => run_detail(&client, &args).await,
        Commands::Decide(args) => run_decide(&client, &args).await,
        Commands::Decisions(args) => run_decisions(&client, &args).await,
        Commands::Audit(args) => run_audit(&client, &args).await,
        Commands::Screen(args) => run_screen(&client, &args).await,
        Commands::History(args) => run_history(&client, &args).await,
        Commands::Kpi(args) => run_kpi(&client, &args).await,
        Commands::Status => run_status(&client).await,
        Commands::Health => run_health(&client).await,
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
