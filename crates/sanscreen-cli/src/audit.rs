//! # Audit Subcommand
//!
//! Fetches and prints one decision's audit history through the
//! [`AuditViewer`]: open with fresh entries, render, close — nothing is
//! cached between invocations.

use anyhow::Result;
use clap::Args;

use sanscreen_client::ScreeningClient;
use sanscreen_core::DecisionId;
use sanscreen_review::AuditViewer;

use crate::display::{fmt_time, heading};

/// Arguments for the `sanscreen audit` subcommand.
#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Decision identifier to show history for.
    pub decision_id: i64,
}

/// Execute the audit subcommand.
pub async fn run_audit(client: &ScreeningClient, args: &AuditArgs) -> Result<u8> {
    let id = DecisionId::new(args.decision_id);
    let entries = client.decision_audit(id).await?;

    let mut viewer = AuditViewer::new();
    viewer.open(entries);

    heading(&format!("Audit history for decision {id}"));
    match viewer.entries() {
        Some([]) | None => println!("No audit entries."),
        Some(entries) => {
            for entry in entries {
                let change = match (&entry.old_value, &entry.new_value) {
                    (Some(old), Some(new)) => format!(" {old} -> {new}"),
                    (None, Some(new)) => format!(" -> {new}"),
                    (Some(old), None) => format!(" {old} ->"),
                    (None, None) => String::new(),
                };
                let comment = entry
                    .comment
                    .as_deref()
                    .map(|c| format!(" — {c}"))
                    .unwrap_or_default();
                println!(
                    "[{}] {}{} by {}{}",
                    fmt_time(&entry.timestamp),
                    entry.action,
                    change,
                    entry.user_id,
                    comment,
                );
            }
        }
    }

    viewer.close();
    Ok(0)
}
