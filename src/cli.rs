use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "devmatch",
    version,
    about = "GitHub developer compatibility scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score two accounts and print the compatibility report
    Compare(CompareCommand),
    /// Print per-language repository counts for two accounts
    Languages(LanguagesCommand),
}

#[derive(Args)]
pub struct CompareCommand {
    /// Account document for the first developer
    pub first: PathBuf,
    /// Account document for the second developer
    pub second: PathBuf,
    /// Output format; falls back to the configured format, then md
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Reference time (RFC 3339) for age and recency; defaults to now
    #[arg(long)]
    pub now: Option<String>,
}

#[derive(Args)]
pub struct LanguagesCommand {
    pub first: PathBuf,
    pub second: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
