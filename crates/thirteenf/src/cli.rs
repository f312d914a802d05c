use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Sets the level of tracing.
    ///
    /// If no level is provided, progress spinners are shown instead.
    #[arg(short, long, global = true)]
    pub trace: Option<TraceLevel>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download the latest 13F holdings of a company and write them to a `.tsv` file.
    Report {
        /// Ticker or CIK of the filer, e.g. `0000102909`.
        identifier: String,

        /// Path of the `.tsv` report.
        output: PathBuf,

        /// Filing type to select; amendments of it are skipped.
        #[arg(short, long, default_value = thirteenf_spider::edgar::FORM_13F_HR)]
        form_type: String,

        /// Number of recent filings to search.
        #[arg(short, long, default_value_t = thirteenf_spider::edgar::INDEX_COUNT)]
        count: u16,
    },

    /// Read a `.tsv` holdings report back and print it.
    Show {
        /// Path of the `.tsv` report.
        path: PathBuf,
    },
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
#[clap(rename_all = "UPPERCASE")]
pub enum TraceLevel {
    DEBUG,
    ERROR,
    INFO,
    TRACE,
    WARN,
}
