//! Client configuration from flags, environment and credential files.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use directories::ProjectDirs;

use aqts::{ClientConfig, Credentials, Login, SamplesToken, Target};

use crate::cli::ConnectionArgs;

pub const USERNAME_VAR: &str = "AQTS_USERNAME";
pub const PASSWORD_VAR: &str = "AQTS_PASSWORD";
pub const SAMPLES_TOKEN_VAR: &str = "AQTS_SAMPLES_TOKEN";

const CREDENTIALS_FILE: &str = "credentials.json";

/// Load a `.env` file from the working directory or its parents, if any.
pub fn load_dotenv() -> Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "Loaded .env");
            Ok(())
        }
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e).context("Failed to load .env file"),
    }
}

/// Default credentials file in the user's config directory.
fn default_credentials_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "aqts").map(|dirs| dirs.config_dir().join(CREDENTIALS_FILE))
}

/// Build the client configuration from the connection flags and the
/// process environment.
pub fn client_config(args: &ConnectionArgs) -> Result<ClientConfig> {
    client_config_with(args, |var| std::env::var(var).ok(), default_credentials_path())
}

fn client_config_with(
    args: &ConnectionArgs,
    env: impl Fn(&str) -> Option<String>,
    default_credentials: Option<PathBuf>,
) -> Result<ClientConfig> {
    let named = Target::from_name(&args.target).context("Invalid target")?;
    let login = resolve_login(&named, args, &env, default_credentials)?;

    let target = match &args.host {
        Some(host) => Target::Custom(host.clone()),
        None => named,
    };

    let mut config = ClientConfig::new(target, login);
    if let Some(secs) = args.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    Ok(config)
}

/// Pick the login for `target`.
///
/// The samples target logs in with an API token. Everything else uses a
/// username and password from, in order: `--credentials`, the environment,
/// the default credentials file.
fn resolve_login(
    target: &Target,
    args: &ConnectionArgs,
    env: &impl Fn(&str) -> Option<String>,
    default_credentials: Option<PathBuf>,
) -> Result<Login> {
    if *target == Target::Samples {
        let token = env(SAMPLES_TOKEN_VAR)
            .with_context(|| format!("{} must be set for the samples target", SAMPLES_TOKEN_VAR))?;
        return Ok(Login::SamplesToken(SamplesToken::new(token)));
    }

    if let Some(path) = &args.credentials {
        let credentials = Credentials::from_json_file(path).context("Failed to load credentials")?;
        return Ok(Login::Password(credentials));
    }

    if let (Some(username), Some(password)) = (env(USERNAME_VAR), env(PASSWORD_VAR)) {
        return Ok(Login::Password(Credentials::new(username, password)));
    }

    if let Some(path) = default_credentials.filter(|p| p.exists()) {
        let credentials = Credentials::from_json_file(&path).context("Failed to load credentials")?;
        return Ok(Login::Password(credentials));
    }

    bail!(
        "No credentials found. Use --credentials <FILE>, or set {} and {}.",
        USERNAME_VAR,
        PASSWORD_VAR
    )
}
