//! Subcommand implementations.

pub mod locations;
pub mod login;
pub mod reports;
pub mod request;

use anyhow::{Context, Result};

use aqts::AquariusClient;

use crate::cli::{Cli, Commands, ConnectionArgs};
use crate::{config, output};

pub async fn handle(cli: Cli) -> Result<()> {
    let connection = cli.connection;
    match cli.command {
        Commands::Login(args) => login::run(&connection, args).await,
        Commands::Locations(args) => locations::run(&connection, args).await,
        Commands::Reports(cmd) => reports::handle(&connection, cmd).await,
        Commands::Request(args) => request::run(&connection, args).await,
    }
}

/// Build a client from the connection flags and log in.
pub async fn connect(connection: &ConnectionArgs) -> Result<AquariusClient> {
    let config = config::client_config(connection)?;
    let mut client = AquariusClient::new(config).context("Failed to create client")?;

    if let Err(e) = client.connect().await {
        let rejected = matches!(&e, aqts::Error::Http(http) if http.is_auth_error());
        let err = anyhow::Error::new(e);
        return Err(if rejected {
            err.context("Failed to login (check the username and password, or the samples token)")
        } else {
            err.context("Failed to login")
        });
    }

    Ok(client)
}

/// Log out after a command.
///
/// Returns the command's own error if it failed. A logout failure on top of
/// that is printed here rather than dropped.
pub async fn finish(mut client: AquariusClient, result: Result<()>) -> Result<()> {
    let logout = client.disconnect().await.context("Failed to logout");
    match (result, logout) {
        (Err(command), Err(logout)) => {
            output::error(&format!("{:#}", logout));
            Err(command)
        }
        (result, logout) => result.and(logout),
    }
}
