//! sheetboard — year-to-date finance dashboard over a spreadsheet.
//!
//! Pulls the `BAL` (transactions) and `CATX` (category mapping) ranges,
//! derives the summary through `sheetboard-core`, and renders either view
//! to the console or CSV. `--demo` swaps the remote spreadsheet for
//! built-in data.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use sheetboard_core::filter::{FilterPatch, LedgerFilter};
use sheetboard_core::source::{Datasets, SheetRanges, refresh};

mod config;
mod demo;
mod reports;
mod sheets;

use config::Config;
use demo::DemoSource;
use sheets::SheetsClient;

#[derive(Parser)]
#[command(name = "sheetboard", version, about = "Year-to-date finance dashboard over a spreadsheet")]
struct Cli {
    /// Path to the TOML config naming the spreadsheet and ranges.
    #[arg(long, global = true, default_value = "sheetboard.toml")]
    config: PathBuf,

    /// OAuth access token for the Sheets API.
    #[arg(long, global = true, env = "SHEETBOARD_TOKEN")]
    token: Option<String>,

    /// Use the built-in demo data instead of the remote spreadsheet.
    #[arg(long, global = true)]
    demo: bool,

    /// Reference date for the year-to-date window (defaults to today).
    #[arg(long, global = true, value_name = "YYYY-MM-DD")]
    as_of: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the per-category summary table.
    Summary {
        /// Also write the summary to this CSV file.
        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,
    },
    /// Show the transaction ledger.
    Ledger {
        /// Toggle an account filter.
        #[arg(long)]
        account: Option<String>,
        /// Toggle a month filter.
        #[arg(long, value_name = "YYYY-MM")]
        month: Option<String>,
        /// Also write the ledger to this CSV file.
        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let as_of = match &cli.as_of {
        Some(raw) => config::parse_as_of(raw)?,
        None => chrono::Local::now().date_naive(),
    };

    let datasets = fetch_datasets(&cli, as_of).await?;

    match cli.command {
        Command::Summary { csv } => {
            reports::print_summary(&datasets.summary);
            if let Some(path) = csv {
                reports::write_summary_csv(&datasets.summary, &path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("[report] summary written to {}", path.display());
            }
        }
        Command::Ledger { account, month, csv } => {
            let filter = LedgerFilter::default().toggle([FilterPatch { account, month }]);
            reports::print_ledger(&datasets.transactions, &filter);
            if let Some(path) = csv {
                reports::write_ledger_csv(&datasets.transactions, &filter, &path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("[report] ledger written to {}", path.display());
            }
        }
    }

    Ok(())
}

async fn fetch_datasets(cli: &Cli, as_of: NaiveDate) -> Result<Datasets> {
    if cli.demo {
        let source = DemoSource::new(as_of);
        let datasets = refresh(&source, &SheetRanges::default(), as_of).await?;
        println!(
            "[fetch] demo data: {} transactions, {} categorized accounts",
            datasets.transactions.rows.len(),
            datasets.categories.account_categories.len()
        );
        return Ok(datasets);
    }

    let config = Config::load(&cli.config)?;
    let token = cli.token.clone().ok_or(config::ConfigError::MissingToken)?;
    let source = SheetsClient::new(config.spreadsheet_id.clone(), token)?;

    match refresh(&source, &config.ranges, as_of).await {
        Ok(datasets) => {
            println!(
                "[fetch] {}: {} transactions, {} categorized accounts",
                config.spreadsheet_id,
                datasets.transactions.rows.len(),
                datasets.categories.account_categories.len()
            );
            warn_if_empty(&datasets, &config);
            Ok(datasets)
        }
        Err(err) if err.is_auth() => {
            eprintln!("[fetch] {err}");
            eprintln!("[fetch] sign in again and re-run with a fresh token");
            Err(err.into())
        }
        Err(err) => Err(err).context("fetching spreadsheet data"),
    }
}

/// A range whose header lost an expected column parses to zero rows rather
/// than erroring; worth a warning, since the summary will be empty too.
fn warn_if_empty(datasets: &Datasets, config: &Config) {
    if datasets.transactions.rows.is_empty() {
        eprintln!(
            "[fetch] no valid transaction rows in range {} — check its DT/AMNT/ACCT columns",
            config.ranges.transactions
        );
    }
    if datasets.categories.account_categories.is_empty() {
        eprintln!(
            "[fetch] no valid category rows in range {} — check its ACCT/CAT columns",
            config.ranges.categories
        );
    }
}
