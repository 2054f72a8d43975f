//! Raw request command implementation.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde_json::Value;

use aqts::{ApiArea, AquariusClient};

use crate::cli::ConnectionArgs;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Args, Debug)]
pub struct RequestArgs {
    /// API area: publish, acquisition, provisioning or samples
    pub area: ApiArea,

    /// HTTP method
    #[arg(value_enum)]
    pub method: HttpMethod,

    /// Path relative to the area root, e.g. /GetReportList
    pub path: String,

    /// JSON body for POST and PUT
    #[arg(long)]
    pub body: Option<String>,
}

pub async fn run(connection: &ConnectionArgs, args: RequestArgs) -> Result<()> {
    let body = match &args.body {
        Some(raw) => serde_json::from_str(raw).context("Body is not valid JSON")?,
        None => Value::Object(Default::default()),
    };

    let client = super::connect(connection).await?;
    let result = send(&client, &args, &body).await;
    super::finish(client, result).await
}

async fn send(client: &AquariusClient, args: &RequestArgs, body: &Value) -> Result<()> {
    let session = client.session(args.area);

    let response = match args.method {
        HttpMethod::Get => session.get(&args.path).await,
        HttpMethod::Post => session.post(&args.path, body).await,
        HttpMethod::Put => session.put(&args.path, body).await,
        HttpMethod::Delete => session.delete(&args.path).await,
    }
    .with_context(|| format!("Request to {} failed", session.url(&args.path)))?;

    let text = response.text().await.context("Failed to read response")?;
    if !text.is_empty() {
        println!("{}", text);
    }

    Ok(())
}
