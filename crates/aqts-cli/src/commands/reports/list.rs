//! List reports command implementation.

use anyhow::{Context, Result};
use clap::Args;

use aqts::{AquariusClient, ReportFilter};

use super::FilterArgs;
use crate::cli::ConnectionArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(connection: &ConnectionArgs, args: ListArgs) -> Result<()> {
    let filter = args.filter.to_filter()?;

    let client = crate::commands::connect(connection).await?;
    let result = list(&client, &filter, args.pretty).await;
    crate::commands::finish(client, result).await
}

async fn list(client: &AquariusClient, filter: &ReportFilter, pretty: bool) -> Result<()> {
    let reports = client
        .select_reports(filter)
        .await
        .context("Failed to list reports")?;

    if reports.is_empty() {
        output::notice("No reports found.");
        return Ok(());
    }

    for report in &reports {
        output::record(report, pretty)?;
    }

    output::total("Reports", reports.len());

    Ok(())
}
