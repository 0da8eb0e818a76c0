//! # sanscreen CLI library
//!
//! Subcommand implementations for the `sanscreen` binary. Each module
//! exposes a clap `Args` struct and an async `run_*` function returning the
//! process exit code; `main.rs` owns parsing, tracing setup, and client
//! construction.
//!
//! Command failures that a view would show inline (upload rejection,
//! decision rejection) print the backend's message and exit nonzero without
//! tearing anything down; everything else propagates as `anyhow` context.

pub mod audit;
pub mod batches;
pub mod decide;
pub mod detail;
pub mod display;
pub mod history;
pub mod kpi;
pub mod screen;
pub mod system;
pub mod upload;
