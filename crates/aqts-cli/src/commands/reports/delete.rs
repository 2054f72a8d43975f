//! Delete reports command implementation.
//!
//! Deletion is permanent. Reports are removed one at a time and the command
//! stops at the first failure.

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use clap::Args;
use colored::Colorize;

use aqts::{AquariusClient, ReportFilter};

use super::FilterArgs;
use crate::cli::ConnectionArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Allow deleting without any filter (every report)
    #[arg(long)]
    pub all: bool,

    /// Show what would be deleted without deleting
    #[arg(long)]
    pub dry_run: bool,

    /// Skip confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

pub async fn run(connection: &ConnectionArgs, args: DeleteArgs) -> Result<()> {
    if args.filter.is_empty() && !args.all {
        bail!("Refusing to delete every report. Pass a title or folder filter, or --all.");
    }

    let filter = args.filter.to_filter()?;

    let client = crate::commands::connect(connection).await?;
    let result = delete(&client, &filter, &args).await;
    crate::commands::finish(client, result).await
}

async fn delete(client: &AquariusClient, filter: &ReportFilter, args: &DeleteArgs) -> Result<()> {
    let reports = client
        .select_reports(filter)
        .await
        .context("Failed to list reports")?;

    if reports.is_empty() {
        output::notice("No reports matched.");
        return Ok(());
    }

    for report in &reports {
        output::field(&report.report_unique_id, &report.title);
    }

    if args.dry_run {
        eprintln!();
        eprintln!("{} {} reports would be deleted", "Dry run:".dimmed(), reports.len());
        return Ok(());
    }

    // Confirm unless --force
    if !args.force {
        eprint!(
            "This will permanently delete {} reports. Continue? [y/N] ",
            reports.len()
        );
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            eprintln!("Aborted.");
            return Ok(());
        }
    }

    let deleted = client
        .delete_reports(&reports)
        .await
        .context("Failed to delete reports")?;

    output::success(&format!("Deleted {} reports", deleted));

    Ok(())
}
