//! # KPI Subcommand
//!
//! Per-list freshness and volume metrics: last import, add/update/remove
//! counts over the queried window, and the entity-type breakdown. With
//! `--watch`, re-polls on the slow KPI interval.

use anyhow::Result;
use clap::Args;
use tracing::warn;

use sanscreen_client::{SanctionListKpi, ScreeningClient};
use sanscreen_review::KPI_POLL;

use crate::display::{field, fmt_time, heading};

/// Arguments for the `sanscreen kpi` subcommand.
#[derive(Args, Debug)]
pub struct KpiArgs {
    /// Aggregation window in days.
    #[arg(long, default_value_t = 1)]
    pub days: u32,

    /// Keep the view on screen and re-poll every 60 seconds.
    #[arg(long)]
    pub watch: bool,
}

/// Execute the KPI subcommand.
pub async fn run_kpi(client: &ScreeningClient, args: &KpiArgs) -> Result<u8> {
    if !args.watch {
        render(&client.sanction_list_kpis(args.days).await?, args.days);
        return Ok(0);
    }

    let mut ticker = tokio::time::interval(KPI_POLL);
    loop {
        ticker.tick().await;
        match client.sanction_list_kpis(args.days).await {
            Ok(kpis) => render(&kpis, args.days),
            Err(err) => warn!("KPI poll failed: {err}"),
        }
    }
}

fn render(kpis: &[SanctionListKpi], days: u32) {
    for kpi in kpis {
        heading(&format!("{} list", kpi.source));
        field(
            "Last update",
            kpi.last_update
                .map(|ts| fmt_time(&ts))
                .unwrap_or_else(|| "never".to_string()),
        );
        field("Total records", kpi.total_records);
        field(
            &format!("Changes ({days}d)"),
            format!(
                "+{} ~{} -{}",
                kpi.records_added, kpi.records_updated, kpi.records_removed
            ),
        );
        field(
            "Breakdown",
            format!(
                "{} individuals, {} entities, {} aircraft, {} vessels, {} other",
                kpi.breakdown.individual_count,
                kpi.breakdown.entity_count,
                kpi.breakdown.aircraft_count,
                kpi.breakdown.vessel_count,
                kpi.breakdown.other_count,
            ),
        );
        println!();
    }
}
