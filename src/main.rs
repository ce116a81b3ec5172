//! `license-gate` — check a generated license inventory against an allow-list.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]); defaults are the fixed CI paths.
//! 2. Load the permitted-licenses config ([`config::load_config`]).
//! 3. Load the generated inventory ([`inventory::load_inventory`]).
//! 4. Classify every artifact ([`license::classifier::evaluate`]).
//! 5. Write the result document ([`report::result_file`]) and render the report.
//! 6. Exit `0` (nothing rejected) or `1` (at least one [`models::Verdict::Rejected`]).

mod cli;
mod config;
mod inventory;
mod license;
mod models;
mod report;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, ReportFormat};
use config::load_config;
use inventory::load_inventory;
use license::classifier::evaluate;
use models::CheckResult;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // Both inputs must load before anything is reported
    let policy = load_config(&cli.config)?;
    let inventory = load_inventory(&cli.inventory)?;

    let evaluation = evaluate(&policy, &inventory);
    let result = CheckResult::new(&inventory, &evaluation);

    if let Some(path) = cli.result_path() {
        report::result_file::write(path, &result)?;
    }

    match cli.report {
        ReportFormat::Terminal => {
            report::terminal::render(&inventory, &evaluation, &result, cli.verbose);
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    std::process::exit(result.exit_code());
}
