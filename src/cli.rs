use std::path::PathBuf;

use clap::Parser;

use crate::config::DEFAULT_CONFIG_PATH;
use crate::inventory::DEFAULT_INVENTORY_PATH;
use crate::report::result_file::DEFAULT_RESULT_PATH;

#[derive(Parser, Debug)]
#[command(
    name = "license-gate",
    about = "Check a generated license inventory against the permitted licenses",
    version
)]
pub struct Cli {
    /// Permitted-licenses config
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Generated artifact → licenses report
    #[arg(long, value_name = "FILE", default_value = DEFAULT_INVENTORY_PATH)]
    pub inventory: PathBuf,

    /// Where to write the structured result document
    #[arg(long, value_name = "FILE", default_value = DEFAULT_RESULT_PATH)]
    pub result_file: PathBuf,

    /// Only print to the console, do not write the result document
    #[arg(long)]
    pub no_result_file: bool,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Also print a per-artifact verdict table
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Result document path, unless disabled.
    pub fn result_path(&self) -> Option<&PathBuf> {
        (!self.no_result_file).then_some(&self.result_file)
    }
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
