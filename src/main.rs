mod analyze;
mod cli;
mod config;
mod error;
mod report;
mod source;
mod types;

use crate::error::{DevMatchError, Result};
use crate::types::config::OutputFormatConfig;
use chrono::{DateTime, Utc};
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_now(raw: Option<&str>) -> Result<DateTime<Utc>> {
    match raw {
        Some(value) => DateTime::parse_from_rfc3339(value)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(|e| DevMatchError::InvalidTimestamp(format!("{value}: {e}"))),
        None => Ok(Utc::now()),
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Compare(cmd) => {
            let loaded = config::load_config(Path::new("."))?;
            let now = parse_now(cmd.now.as_deref())?;
            let (first, second) = source::load_pair(&cmd.first, &cmd.second)?;

            let compatibility = analyze::compatibility(&first, &second, &loaded.weights(), now);

            let output_format = match (cmd.format, loaded.output_format()) {
                (Some(cli::ReportFormat::Json), _) => report::OutputFormat::Json,
                (Some(cli::ReportFormat::Md), _) => report::OutputFormat::Md,
                (None, Some(OutputFormatConfig::Json)) => report::OutputFormat::Json,
                (None, _) => report::OutputFormat::Md,
            };
            let rendered =
                report::render(&compatibility, (&first, &second), output_format, now)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Languages(cmd) => {
            let (first, second) = source::load_pair(&cmd.first, &cmd.second)?;
            let overlap = analyze::overlap::language_overlap(&first, &second);

            if overlap.is_empty() {
                println!("languages: none");
                return Ok(exit_code::SUCCESS);
            }

            for (language, counts) in &overlap {
                let marker = if counts.is_shared() { "*" } else { " " };
                println!(
                    "{marker} {language}: {} {} / {} {}",
                    first.login, counts.first, second.login, counts.second
                );
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
