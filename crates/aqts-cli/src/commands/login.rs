//! Login command implementation.

use anyhow::Result;
use clap::Args;

use crate::cli::ConnectionArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {}

pub async fn run(connection: &ConnectionArgs, _args: LoginArgs) -> Result<()> {
    output::notice("Logging in...");

    let client = super::connect(connection).await?;

    output::success("Logged in successfully");
    println!();
    output::field("Target", &client.target().to_string());
    output::field("Login area", client.primary_area().name());
    for (area, session) in client.sessions() {
        output::field(area.name(), session.base_url());
    }

    super::finish(client, Ok(())).await
}
