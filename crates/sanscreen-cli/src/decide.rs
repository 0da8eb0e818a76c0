//! # Decision Subcommands
//!
//! `decide` records a reviewer decision for one (input name, sanction)
//! pair; `decisions` lists recorded decisions. The decision verb accepts
//! the unified vocabulary plus the legacy confirm/clear spellings, which
//! are mapped before anything touches the wire.

use anyhow::Result;
use clap::Args;
use tracing::warn;

use sanscreen_client::{Decision, DecisionRequest, ScreeningClient};
use sanscreen_core::{DecisionKind, SanctionId, UserId};
use sanscreen_review::DASHBOARD_POLL;

use crate::display::{fmt_opt, fmt_time};

/// Arguments for the `sanscreen decide` subcommand.
#[derive(Args, Debug)]
pub struct DecideArgs {
    /// The screened input name the decision applies to.
    #[arg(long)]
    pub name: String,

    /// The sanctions-list entry the decision applies to (e.g. EU-123).
    #[arg(long)]
    pub sanction: String,

    /// Verdict: true-match, false-positive, revisit (confirm/clear also
    /// accepted).
    #[arg(long)]
    pub decision: String,

    /// Acting reviewer identifier.
    #[arg(long)]
    pub user: String,

    /// Optional free-text rationale.
    #[arg(long)]
    pub comment: Option<String>,
}

/// Execute the decide subcommand.
pub async fn run_decide(client: &ScreeningClient, args: &DecideArgs) -> Result<u8> {
    let decision = args.decision.parse::<DecisionKind>()?;
    let request = DecisionRequest {
        search_term_normalized: args.name.clone(),
        sanction_id: SanctionId::new(args.sanction.clone())?,
        decision,
        user_id: UserId::new(args.user.clone())?,
        comment: args
            .comment
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from),
    };

    match client.create_decision(&request).await {
        Ok(created) => {
            println!(
                "decision {} recorded: {} for \"{}\" / {}",
                created.id, decision, args.name, request.sanction_id
            );
            Ok(0)
        }
        Err(err) => {
            eprintln!("{}", err.display_message());
            Ok(1)
        }
    }
}

/// Arguments for the `sanscreen decisions` subcommand.
#[derive(Args, Debug)]
pub struct DecisionsArgs {
    /// Include revoked (superseded) decisions.
    #[arg(long)]
    pub all: bool,

    /// Keep the list on screen and re-poll every 10 seconds.
    #[arg(long)]
    pub watch: bool,
}

/// Execute the decisions subcommand.
pub async fn run_decisions(client: &ScreeningClient, args: &DecisionsArgs) -> Result<u8> {
    if !args.watch {
        render(&client.list_decisions(!args.all).await?);
        return Ok(0);
    }

    let mut ticker = tokio::time::interval(DASHBOARD_POLL);
    loop {
        ticker.tick().await;
        match client.list_decisions(!args.all).await {
            Ok(decisions) => render(&decisions),
            Err(err) => warn!("decision list poll failed: {err}"),
        }
    }
}

fn render(decisions: &[Decision]) {
    if decisions.is_empty() {
        println!("No decisions recorded.");
        return;
    }
    println!(
        "{:<6} {:<24} {:<12} {:<15} {:<8} {:<17} COMMENT",
        "ID", "SEARCH TERM", "SANCTION", "DECISION", "REVOKED", "CREATED"
    );
    for decision in decisions {
        println!(
            "{:<6} {:<24} {:<12} {:<15} {:<8} {:<17} {}",
            decision.id.to_string(),
            decision.search_term_normalized,
            decision.sanction_id.to_string(),
            decision.decision.to_string(),
            if decision.revoked { "yes" } else { "no" },
            fmt_time(&decision.created_at),
            fmt_opt(&decision.comment),
        );
    }
}
