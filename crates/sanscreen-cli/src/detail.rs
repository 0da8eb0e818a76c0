//! # Batch Detail Subcommand
//!
//! The paginated, filterable result view for one batch. One-shot by
//! default; with `--watch`, re-polls every 5 seconds. The poll loop goes
//! through [`ReviewSession`], so pager state survives every tick and a
//! failed poll leaves the last snapshot on screen.

use anyhow::Result;
use clap::Args;
use tracing::warn;

use sanscreen_client::ScreeningClient;
use sanscreen_core::{BatchId, MatchStatus};
use sanscreen_review::{ReviewSession, RESULT_VIEW_POLL};

use crate::display::{field, fmt_opt, fmt_time, heading};

/// Arguments for the `sanscreen batch` subcommand.
#[derive(Args, Debug)]
pub struct DetailArgs {
    /// Batch identifier.
    pub id: i64,

    /// 0-based page to show.
    #[arg(long, default_value_t = 0)]
    pub page: u32,

    /// Page size.
    #[arg(long, default_value_t = 20)]
    pub rows: u32,

    /// Status filter: pending, true-match, false-positive, no-match,
    /// revisit, or all.
    #[arg(long, default_value = "pending")]
    pub status: String,

    /// Free-text filter on the input name.
    #[arg(long)]
    pub search: Option<String>,

    /// Keep the view on screen and re-poll every 5 seconds.
    #[arg(long)]
    pub watch: bool,
}

/// Execute the batch detail subcommand.
pub async fn run_detail(client: &ScreeningClient, args: &DetailArgs) -> Result<u8> {
    let mut session = ReviewSession::new(BatchId::new(args.id));
    session.set_status(parse_status_filter(&args.status)?);
    if let Some(search) = &args.search {
        session.set_search(search.clone());
    }
    session.set_rows_per_page(args.rows);
    session.set_page(args.page);

    if !args.watch {
        fetch_into(client, &mut session).await?;
        render(&session);
        return Ok(0);
    }

    let mut ticker = tokio::time::interval(RESULT_VIEW_POLL);
    loop {
        ticker.tick().await;
        if let Err(err) = fetch_into(client, &mut session).await {
            // Last snapshot stays on screen; the next tick retries.
            warn!("result poll failed: {err:#}");
        }
        render(&session);
    }
}

/// Fetch the page the session currently wants and feed it back in. The key
/// is taken before the fetch so a response that outlives a filter change
/// would be dropped by the session.
async fn fetch_into(client: &ScreeningClient, session: &mut ReviewSession) -> Result<()> {
    let key = session.query_key();
    let page = client
        .batch_detail(session.pager().batch_id(), &session.pager().params())
        .await?;
    session.apply_page(&key, page);
    Ok(())
}

/// Map the CLI status argument onto the wire filter; `all` clears it.
fn parse_status_filter(raw: &str) -> Result<Option<MatchStatus>> {
    if raw.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    Ok(Some(raw.parse::<MatchStatus>()?))
}

fn render(session: &ReviewSession) {
    let Some(page) = session.current_page() else {
        println!("No data for the current filter yet.");
        return;
    };

    heading(&format!("Batch {} — {}", page.batch.id, page.batch.filename));
    field("Status", page.batch.status);
    field("Records", page.batch.total_records);
    field("Flagged", fmt_opt(&page.batch.flagged_count));
    field("Uploaded", fmt_time(&page.batch.uploaded_at));

    let pager = session.pager();
    let status = pager
        .status()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "ALL".to_string());
    let search = pager.search().trim();
    field(
        "Filter",
        if search.is_empty() {
            status.clone()
        } else {
            format!("{status}, search \"{search}\"")
        },
    );
    println!();

    if page.results.is_empty() {
        println!("No results found for this filter/search.");
    } else {
        println!("{:<6} {:<30} {:<14} MATCHES", "ID", "INPUT NAME", "STATUS");
        for result in &page.results {
            println!(
                "{:<6} {:<30} {:<14} {}",
                result.id.to_string(),
                result.input_name,
                result.match_status.to_string(),
                if result.matches.is_empty() { "-" } else { "" },
            );
            for hit in &result.matches {
                println!(
                    "       {:>5.1}  {:<12} {}",
                    hit.match_score,
                    hit.sanction_id.to_string(),
                    hit.match_name
                );
            }
        }
    }
    println!();

    let mut nav = Vec::new();
    if session.can_prev() {
        nav.push(format!("prev: --page {}", pager.page() - 1));
    }
    if session.can_next() {
        nav.push(format!("next: --page {}", pager.page() + 1));
    }
    let nav = if nav.is_empty() {
        String::new()
    } else {
        format!("  ({})", nav.join(", "))
    };
    println!(
        "Page {} of {} — {} results{}",
        pager.page() + 1,
        pager.total_pages(page.total).max(1),
        page.total,
        nav,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_filter_all_clears_the_filter() {
        assert_eq!(parse_status_filter("all").unwrap(), None);
        assert_eq!(parse_status_filter("ALL").unwrap(), None);
    }

    #[test]
    fn status_filter_parses_wire_and_kebab_forms() {
        assert_eq!(
            parse_status_filter("TRUE_MATCH").unwrap(),
            Some(MatchStatus::TrueMatch)
        );
        assert_eq!(
            parse_status_filter("false-positive").unwrap(),
            Some(MatchStatus::FalsePositive)
        );
    }

    #[test]
    fn status_filter_rejects_unknown() {
        assert!(parse_status_filter("maybe").is_err());
    }
}
