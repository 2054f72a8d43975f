//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands::locations::LocationsArgs;
use crate::commands::login::LoginArgs;
use crate::commands::reports::ReportsCommand;
use crate::commands::request::RequestArgs;

/// Command line client for the AQUARIUS Time-Series and Samples APIs.
#[derive(Parser, Debug)]
#[command(name = "aqts")]
#[command(author, version = env!("AQTS_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where to connect and how to log in.
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Deployment target: test, prod or samples
    #[arg(long, global = true, env = "AQTS_TARGET", default_value = "prod")]
    pub target: String,

    /// Host to use instead of the target's host
    #[arg(long, global = true, env = "AQTS_HOST")]
    pub host: Option<String>,

    /// JSON file with "username" and "password" keys
    #[arg(long, global = true, env = "AQTS_CREDENTIALS")]
    pub credentials: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in, show the session endpoints, and log out
    Login(LoginArgs),

    /// List location descriptions
    Locations(LocationsArgs),

    /// List or delete reports
    Reports(ReportsCommand),

    /// Send a raw request through one of the API sessions
    Request(RequestArgs),
}
