//! # Single Screening Subcommand
//!
//! Screens one name against the sanctions lists and prints the matching
//! records. Match rows are backend-shaped; only the commonly present
//! fields are rendered.

use anyhow::Result;
use clap::Args;

use sanscreen_client::{ScreeningClient, SearchType, SingleScreeningRequest};
use sanscreen_core::{CompanyId, UserId};

use crate::display::{heading, json_field};

/// Arguments for the `sanscreen screen` subcommand.
#[derive(Args, Debug)]
pub struct ScreenArgs {
    /// The name to screen.
    pub term: String,

    /// Entity kind: company or individual.
    #[arg(long, default_value = "company")]
    pub search_type: String,

    /// Acting reviewer identifier.
    #[arg(long)]
    pub user: String,

    /// Tenant company UUID the screening runs under.
    #[arg(long)]
    pub company: String,

    /// Fuzzy-match threshold, 0-100.
    #[arg(long, default_value_t = 85)]
    pub threshold: u8,
}

/// Execute the single screening subcommand.
pub async fn run_screen(client: &ScreeningClient, args: &ScreenArgs) -> Result<u8> {
    let request = SingleScreeningRequest {
        search_term: args.term.clone(),
        search_type: args.search_type.parse::<SearchType>()?,
        user_id: UserId::new(args.user.clone())?,
        company_id: CompanyId::parse(&args.company)?,
        threshold: args.threshold,
    };

    match client.single_screening(&request).await {
        Ok(outcome) => {
            heading(&format!(
                "Screening \"{}\" — {} match(es)",
                args.term, outcome.result_count
            ));
            for record in &outcome.matches {
                println!(
                    "{:<4} {:<12} {:<40} {}",
                    json_field(record, "list_type"),
                    json_field(record, "id"),
                    json_field(record, "original_name"),
                    json_field(record, "nationality"),
                );
                let aliases = json_field(record, "alias_names");
                if aliases != "-" {
                    println!("     aliases: {aliases}");
                }
            }
            Ok(0)
        }
        Err(err) => {
            eprintln!("{}", err.display_message());
            Ok(1)
        }
    }
}
