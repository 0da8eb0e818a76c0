//! # Upload Subcommand
//!
//! Uploads a CSV/Excel file of names as a new screening batch. The server
//! owns column mapping (first column, or a column named Name/Naziv/Ime);
//! nothing is validated client-side. A rejection prints the backend's
//! response body verbatim.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use sanscreen_client::ScreeningClient;

use crate::display::fmt_time;

/// Arguments for the `sanscreen upload` subcommand.
#[derive(Args, Debug)]
pub struct UploadArgs {
    /// CSV or Excel file of business partner names.
    pub file: PathBuf,
}

/// Execute the upload subcommand.
pub async fn run_upload(client: &ScreeningClient, args: &UploadArgs) -> Result<u8> {
    let content = std::fs::read(&args.file)
        .with_context(|| format!("cannot read {}", args.file.display()))?;
    let filename = args
        .file
        .file_name()
        .and_then(|name| name.to_str())
        .context("upload path has no usable filename")?;

    match client.upload_batch(filename, content).await {
        Ok(batch) => {
            println!(
                "batch {} created from {} ({}, uploaded {})",
                batch.id,
                batch.filename,
                batch.status,
                fmt_time(&batch.uploaded_at),
            );
            Ok(0)
        }
        Err(err) => {
            eprintln!("{}", err.display_message());
            Ok(1)
        }
    }
}
