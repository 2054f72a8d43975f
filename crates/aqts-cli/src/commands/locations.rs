//! Locations command implementation.

use anyhow::{Context, Result};
use clap::Args;

use aqts::AquariusClient;

use crate::cli::ConnectionArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct LocationsArgs {
    /// Only show locations whose primary folder equals this
    #[arg(long)]
    pub folder: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(connection: &ConnectionArgs, args: LocationsArgs) -> Result<()> {
    let client = super::connect(connection).await?;
    let result = list(&client, &args).await;
    super::finish(client, result).await
}

async fn list(client: &AquariusClient, args: &LocationsArgs) -> Result<()> {
    let locations = client
        .location_descriptions()
        .await
        .context("Failed to list locations")?;

    let selected: Vec<_> = locations
        .iter()
        .filter(|location| match &args.folder {
            Some(folder) => location.is_in_folder(folder),
            None => true,
        })
        .collect();

    if selected.is_empty() {
        output::notice("No locations found.");
        return Ok(());
    }

    for location in &selected {
        output::record(location, args.pretty)?;
    }

    output::total("Locations", selected.len());

    Ok(())
}
