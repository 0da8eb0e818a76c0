//! # Health & Status Subcommands
//!
//! Connectivity probes: the root health endpoint and the backend's system
//! status payload, printed as returned.

use anyhow::Result;

use sanscreen_client::ScreeningClient;

/// Execute the health subcommand.
pub async fn run_health(client: &ScreeningClient) -> Result<u8> {
    let payload = client.health().await?;
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(0)
}

/// Execute the status subcommand.
pub async fn run_status(client: &ScreeningClient) -> Result<u8> {
    let payload = client.system_status().await?;
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(0)
}
