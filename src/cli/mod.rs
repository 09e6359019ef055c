// CLI module for fieldbook
// Author: kelexine (https://github.com/kelexine)

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// fieldbook - Species capture logbook client
#[derive(Parser, Debug)]
#[command(name = "fieldbook", version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Export a capture catalogue to CSV or JSON
    Export {
        /// Catalogue JSON file to read
        #[arg(long)]
        input: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Output file (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Resolve image references to display URLs
    Resolve {
        /// Image references: storage paths, legacy public URLs, or data URIs
        #[arg(required = true)]
        references: Vec<String>,
    },

    /// Check a photo against the pre-upload quality heuristics
    Inspect {
        /// Image file to assess
        file: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}
