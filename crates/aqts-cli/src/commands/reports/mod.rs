//! Report subcommand implementations.

mod delete;
mod list;

use anyhow::Result;
use clap::{Args, Subcommand};

use aqts::ReportFilter;

use crate::cli::ConnectionArgs;

#[derive(Args, Debug)]
pub struct ReportsCommand {
    #[command(subcommand)]
    pub command: ReportsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ReportsSubcommand {
    /// List reports
    List(list::ListArgs),

    /// Delete reports (cannot be undone)
    Delete(delete::DeleteArgs),
}

/// Report selection flags shared by list and delete.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Title must contain this text (repeatable)
    #[arg(long = "title-contains", value_name = "TEXT")]
    pub title_contains: Vec<String>,

    /// Title must match this regular expression (repeatable)
    #[arg(long = "title-matches", value_name = "REGEX")]
    pub title_matches: Vec<String>,

    /// Report location must have this primary folder
    #[arg(long)]
    pub folder: Option<String>,
}

impl FilterArgs {
    pub fn is_empty(&self) -> bool {
        self.title_contains.is_empty() && self.title_matches.is_empty() && self.folder.is_none()
    }

    pub fn to_filter(&self) -> Result<ReportFilter> {
        let mut filter = self
            .title_contains
            .iter()
            .fold(ReportFilter::new(), |filter, text| filter.title_contains(text));
        for pattern in &self.title_matches {
            filter = filter.title_matches(pattern)?;
        }
        Ok(match &self.folder {
            Some(folder) => filter.in_folder(folder),
            None => filter,
        })
    }
}

pub async fn handle(connection: &ConnectionArgs, cmd: ReportsCommand) -> Result<()> {
    match cmd.command {
        ReportsSubcommand::List(args) => list::run(connection, args).await,
        ReportsSubcommand::Delete(args) => delete::run(connection, args).await,
    }
}
