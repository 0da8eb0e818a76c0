//! # Search History Subcommand
//!
//! Lists prior single screenings for a company, newest as the backend
//! orders them, with optional reviewer restriction and paging.

use anyhow::Result;
use clap::Args;

use sanscreen_client::{ScreeningClient, SearchLogQuery};
use sanscreen_core::{CompanyId, UserId};

use crate::display::fmt_time;

/// Arguments for the `sanscreen history` subcommand.
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Tenant company UUID to list history for.
    #[arg(long)]
    pub company: String,

    /// Restrict to one reviewer.
    #[arg(long)]
    pub user: Option<String>,

    /// Rows to skip.
    #[arg(long, default_value_t = 0)]
    pub skip: u32,

    /// Page size.
    #[arg(long, default_value_t = 50)]
    pub limit: u32,
}

/// Execute the history subcommand.
pub async fn run_history(client: &ScreeningClient, args: &HistoryArgs) -> Result<u8> {
    let query = SearchLogQuery {
        company_id: CompanyId::parse(&args.company)?,
        user_id: args
            .user
            .as_deref()
            .map(UserId::new)
            .transpose()?,
        skip: args.skip,
        limit: args.limit,
    };

    let entries = client.search_log(&query).await?;
    if entries.is_empty() {
        println!("No previous searches.");
        return Ok(0);
    }
    println!(
        "{:<17} {:<28} {:<11} {:>7}",
        "DATE", "SEARCH TERM", "TYPE", "RESULTS"
    );
    for entry in &entries {
        println!(
            "{:<17} {:<28} {:<11} {:>7}",
            fmt_time(&entry.timestamp),
            entry.search_term,
            entry.search_type.to_string(),
            entry.result_count,
        );
    }
    Ok(0)
}
