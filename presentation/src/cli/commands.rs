//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for assessment reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full report with every question, grouped by section
    Full,
    /// Provenance counts and confidence only
    Summary,
    /// JSON document
    Json,
}

impl From<OutputFormat> for assess_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => assess_domain::OutputFormat::Full,
            OutputFormat::Summary => assess_domain::OutputFormat::Summary,
            OutputFormat::Json => assess_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for anchor-assess
#[derive(Parser, Debug)]
#[command(name = "anchor-assess")]
#[command(author, version, about = "Complete a compliance questionnaire from a few anchor answers")]
#[command(long_about = r#"
Anchor-assess fills in a data-protection questionnaire by prompting for a
small set of anchor questions and deriving the rest.

The run has three phases:
1. Anchor Collection: each unanswered anchor question is prompted in turn
2. Inference: rules cascade the anchor answers across dependent questions
3. Defaults: whatever remains is padded from the defaults table

Every answer carries its provenance and a confidence grade.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./assess.toml       Project-level config
3. ~/.config/anchor-assess/config.toml   Global config

Example:
  anchor-assess
  anchor-assess --answers known.toml -o full
  anchor-assess --defaults-only -o json
"#)]
pub struct Cli {
    /// Pre-seeded answers file (TOML, one [answers] table)
    #[arg(short, long, value_name = "PATH")]
    pub answers: Option<PathBuf>,

    /// Restrict the run to these question ids (can be specified multiple times)
    #[arg(long, value_name = "ID")]
    pub question: Vec<String>,

    /// Skip prompting; fill from existing answers, rules, and defaults only
    #[arg(long)]
    pub defaults_only: bool,

    /// Path to a supplemental catalog file (TOML)
    #[arg(long, value_name = "PATH")]
    pub supplement: Option<PathBuf>,

    /// Write a JSONL audit trail of the run to this path
    #[arg(long, value_name = "PATH")]
    pub audit: Option<PathBuf>,

    /// Output format (defaults to the configured format, then summary)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Validate the catalog, relation table, and configuration, then exit
    #[arg(long)]
    pub check: bool,
}
