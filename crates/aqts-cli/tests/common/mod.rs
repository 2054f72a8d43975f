use std::path::Path;
use std::process::{Command, Output};

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const PUBLISH: &str = "/AQUARIUS/Publish/v2";
pub const ACQUISITION: &str = "/AQUARIUS/Acquisition/v2";
pub const TOKEN: &str = "cli-token";
pub const SNOW_FOLDER: &str = "Locations.SNOW.Manual Snow Sites";

/// Variables that would leak the caller's configuration into a test run.
const AMBIENT_VARS: &[&str] = &[
    "AQTS_TARGET",
    "AQTS_HOST",
    "AQTS_CREDENTIALS",
    "AQTS_USERNAME",
    "AQTS_PASSWORD",
    "AQTS_SAMPLES_TOKEN",
    "RUST_LOG",
];

/// Build a CLI command isolated in `home`, logging in with env credentials.
pub fn cli_command(args: &[&str], home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_aqts"));
    cmd.args(args);
    for var in AMBIENT_VARS {
        cmd.env_remove(var);
    }
    cmd.current_dir(home);
    cmd.env("HOME", home);
    cmd.env("XDG_CONFIG_HOME", home.join("config"));
    cmd.env("NO_COLOR", "1");
    cmd.env("AQTS_USERNAME", "jsmith");
    cmd.env("AQTS_PASSWORD", "secret123");
    cmd
}

/// Run the CLI off the async runtime so the mock server keeps serving.
pub async fn run_cli(mut cmd: Command) -> Output {
    tokio::task::spawn_blocking(move || cmd.output().expect("Failed to execute CLI"))
        .await
        .expect("CLI task panicked")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Mount a successful login.
pub async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(format!("{PUBLISH}/session")))
        .and(body_json(json!({
            "Username": "jsmith",
            "EncryptedPassword": "secret123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(TOKEN))
        .mount(server)
        .await;
}

/// Mount a successful login and a logout that must be called once.
pub async fn mount_session(server: &MockServer) {
    mount_login(server).await;

    Mock::given(method("DELETE"))
        .and(path(format!("{PUBLISH}/session")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(server)
        .await;
}

/// Mount the location and report lists.
pub async fn mount_records(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("{PUBLISH}/GetLocationDescriptionList")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "LocationDescriptions": [
                {"UniqueId": "mss-1", "Identifier": "1A01P", "PrimaryFolder": SNOW_FOLDER},
                {"UniqueId": "asws-1", "Identifier": "2F05P", "PrimaryFolder": "Locations.SNOW.ASWS"}
            ]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{PUBLISH}/GetReportList")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Reports": [
                {"ReportUniqueId": "r1", "Title": "Snow.1A01P.Weekly Report", "LocationUniqueId": "mss-1"},
                {"ReportUniqueId": "r2", "Title": "Snow.2F05P.Weekly Report", "LocationUniqueId": "asws-1"},
                {"ReportUniqueId": "r3", "Title": "Snow.1A01P.Monthly Report", "LocationUniqueId": "mss-1"},
                {"ReportUniqueId": "r4", "Title": "Snow 1A01P-Weekly Report", "LocationUniqueId": "mss-1"}
            ]
        })))
        .mount(server)
        .await;
}
