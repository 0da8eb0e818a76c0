//! # Batches Subcommand
//!
//! Lists uploaded batches; with `--watch`, re-polls on the result-view
//! interval. A failed poll keeps the previous snapshot on screen and simply
//! tries again on the next tick.

use anyhow::Result;
use clap::Args;
use tracing::warn;

use sanscreen_client::{BatchSummary, ScreeningClient};
use sanscreen_review::{SnapshotCache, RESULT_VIEW_POLL};

use crate::display::{fmt_opt, fmt_time};

/// Cache key of the (parameterless) batch list view.
pub const BATCH_LIST_KEY: &str = "batch-list";

/// Arguments for the `sanscreen batches` subcommand.
#[derive(Args, Debug)]
pub struct BatchesArgs {
    /// Keep the list on screen and re-poll every 5 seconds.
    #[arg(long)]
    pub watch: bool,
}

/// Execute the batches subcommand.
pub async fn run_batches(client: &ScreeningClient, args: &BatchesArgs) -> Result<u8> {
    if !args.watch {
        let batches = client.list_batches().await?;
        render(&batches);
        return Ok(0);
    }

    let cache: SnapshotCache<Vec<BatchSummary>> = SnapshotCache::new();
    let mut ticker = tokio::time::interval(RESULT_VIEW_POLL);
    loop {
        ticker.tick().await;
        match client.list_batches().await {
            Ok(batches) => {
                cache.insert(BATCH_LIST_KEY, batches.clone());
                render(&batches);
            }
            Err(err) => {
                // Degrade to the last good snapshot; retry on the next tick.
                warn!("batch list poll failed: {err}");
                if let Some(previous) = cache.get(BATCH_LIST_KEY) {
                    render(&previous);
                }
            }
        }
    }
}

fn render(batches: &[BatchSummary]) {
    if batches.is_empty() {
        println!("No batches yet. Upload your first file.");
        return;
    }
    println!(
        "{:<6} {:<28} {:<11} {:>8} {:>8}  {}",
        "ID", "FILENAME", "STATUS", "RECORDS", "FLAGGED", "UPLOADED"
    );
    for batch in batches {
        println!(
            "{:<6} {:<28} {:<11} {:>8} {:>8}  {}",
            batch.id.to_string(),
            batch.filename,
            batch.status.to_string(),
            batch.total_records,
            fmt_opt(&batch.flagged_count),
            fmt_time(&batch.uploaded_at),
        );
    }
}
