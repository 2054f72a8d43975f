//! CLI tests against a mock AQUARIUS server.

mod common;

use serde_json::Value;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{
    ACQUISITION, PUBLISH, SNOW_FOLDER, TOKEN, cli_command, mount_login, mount_records,
    mount_session, run_cli, stderr, stdout,
};

#[tokio::test]
async fn test_login_prints_endpoints() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    let home = TempDir::new().unwrap();

    let output = run_cli(cli_command(&["login", "--host", &server.uri()], home.path())).await;

    assert!(output.status.success(), "login failed: {}", stderr(&output));
    let stdout = stdout(&output);
    assert!(stdout.contains("Logged in successfully"));
    assert!(stdout.contains(&format!("{}{}", server.uri(), PUBLISH)));
    assert!(stdout.contains(&format!("{}/api/v1", server.uri())));
}

#[tokio::test]
async fn test_login_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{PUBLISH}/session")))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid credentials"))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("{PUBLISH}/session")))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;
    let home = TempDir::new().unwrap();

    let output = run_cli(cli_command(&["login", "--host", &server.uri()], home.path())).await;

    assert!(!output.status.success());
    let stderr = stderr(&output);
    assert!(stderr.contains("Failed to login"), "stderr: {}", stderr);
    assert!(stderr.contains("check the username and password"));
    assert!(stderr.contains("HTTP 401: Invalid credentials"));
}

#[tokio::test]
async fn test_unknown_target() {
    let home = TempDir::new().unwrap();

    let output = run_cli(cli_command(&["--target", "staging", "login"], home.path())).await;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("unknown target 'staging'"));
}

#[tokio::test]
async fn test_credentials_file() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    let home = TempDir::new().unwrap();
    let file = home.path().join("creds.json");
    std::fs::write(&file, r#"{"username": "jsmith", "password": "secret123"}"#).unwrap();

    let mut cmd = cli_command(
        &["login", "--host", &server.uri(), "--credentials", file.to_str().unwrap()],
        home.path(),
    );
    cmd.env("AQTS_USERNAME", "someone-else");

    let output = run_cli(cmd).await;
    assert!(output.status.success(), "login failed: {}", stderr(&output));
}

#[tokio::test]
async fn test_locations_in_folder() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    mount_records(&server).await;
    let home = TempDir::new().unwrap();

    let output = run_cli(cli_command(
        &["locations", "--host", &server.uri(), "--folder", SNOW_FOLDER],
        home.path(),
    ))
    .await;

    assert!(output.status.success(), "locations failed: {}", stderr(&output));
    let lines: Vec<Value> = stdout(&output)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["UniqueId"], "mss-1");
}

#[tokio::test]
async fn test_reports_list_filtered() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    mount_records(&server).await;
    let home = TempDir::new().unwrap();

    let output = run_cli(cli_command(
        &[
            "reports",
            "list",
            "--host",
            &server.uri(),
            "--title-contains",
            ".Weekly Report",
            "--folder",
            SNOW_FOLDER,
        ],
        home.path(),
    ))
    .await;

    assert!(output.status.success(), "list failed: {}", stderr(&output));
    let ids: Vec<String> = stdout(&output)
        .lines()
        .map(|line| serde_json::from_str::<Value>(line).unwrap())
        .map(|report| report["ReportUniqueId"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["r1"]);
}

#[tokio::test]
async fn test_reports_list_title_pattern() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    mount_records(&server).await;
    let home = TempDir::new().unwrap();

    let output = run_cli(cli_command(
        &[
            "reports",
            "list",
            "--host",
            &server.uri(),
            "--title-matches",
            "Snow.",
            "--title-matches",
            ".Weekly Report",
            "--folder",
            SNOW_FOLDER,
        ],
        home.path(),
    ))
    .await;

    assert!(output.status.success(), "list failed: {}", stderr(&output));
    let ids: Vec<String> = stdout(&output)
        .lines()
        .map(|line| serde_json::from_str::<Value>(line).unwrap())
        .map(|report| report["ReportUniqueId"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["r1", "r4"]);
}

#[tokio::test]
async fn test_reports_bad_title_pattern() {
    let home = TempDir::new().unwrap();

    let output = run_cli(cli_command(
        &["reports", "list", "--host", "127.0.0.1:9", "--title-matches", "Weekly ("],
        home.path(),
    ))
    .await;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid title pattern 'Weekly ('"));
}

#[tokio::test]
async fn test_reports_delete_forced() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    mount_records(&server).await;

    for (id, expected) in [("r1", 1), ("r2", 0), ("r3", 1), ("r4", 1)] {
        Mock::given(method("DELETE"))
            .and(path(format!("{ACQUISITION}/attachments/reports/{id}")))
            .and(header("X-Authentication-Token", TOKEN))
            .respond_with(ResponseTemplate::new(204))
            .expect(expected)
            .mount(&server)
            .await;
    }
    let home = TempDir::new().unwrap();

    let output = run_cli(cli_command(
        &[
            "reports",
            "delete",
            "--host",
            &server.uri(),
            "--folder",
            SNOW_FOLDER,
            "--force",
        ],
        home.path(),
    ))
    .await;

    assert!(output.status.success(), "delete failed: {}", stderr(&output));
    assert!(stdout(&output).contains("Deleted 3 reports"));
}

#[tokio::test]
async fn test_reports_delete_dry_run() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    mount_records(&server).await;

    Mock::given(method("DELETE"))
        .and(path(format!("{ACQUISITION}/attachments/reports/r1")))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;
    let home = TempDir::new().unwrap();

    let output = run_cli(cli_command(
        &[
            "reports",
            "delete",
            "--host",
            &server.uri(),
            "--title-contains",
            "1A01P",
            "--dry-run",
        ],
        home.path(),
    ))
    .await;

    assert!(output.status.success(), "dry run failed: {}", stderr(&output));
    assert!(stderr(&output).contains("3 reports would be deleted"));
}

#[tokio::test]
async fn test_reports_delete_requires_filter() {
    let home = TempDir::new().unwrap();

    let output = run_cli(cli_command(
        &["reports", "delete", "--host", "127.0.0.1:9", "--force"],
        home.path(),
    ))
    .await;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Refusing to delete every report"));
}

#[tokio::test]
async fn test_raw_request() {
    let server = MockServer::start().await;
    mount_session(&server).await;

    Mock::given(method("POST"))
        .and(path("/AQUARIUS/Provisioning/v1/locations"))
        .and(header("X-Authentication-Token", TOKEN))
        .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"UniqueId":"new"}"#))
        .expect(1)
        .mount(&server)
        .await;
    let home = TempDir::new().unwrap();

    let output = run_cli(cli_command(
        &[
            "request",
            "provisioning",
            "post",
            "/locations",
            "--host",
            &server.uri(),
            "--body",
            r#"{"Name": "New"}"#,
        ],
        home.path(),
    ))
    .await;

    assert!(output.status.success(), "request failed: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), r#"{"UniqueId":"new"}"#);
}

#[tokio::test]
async fn test_raw_request_error_status() {
    let server = MockServer::start().await;
    mount_session(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("{PUBLISH}/GetThing")))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such thing"))
        .mount(&server)
        .await;
    let home = TempDir::new().unwrap();

    let output = run_cli(cli_command(
        &["request", "publish", "get", "/GetThing", "--host", &server.uri()],
        home.path(),
    ))
    .await;

    assert!(!output.status.success());
    let stderr = stderr(&output);
    assert!(stderr.contains("HTTP 404: no such thing"), "stderr: {}", stderr);
    assert_eq!(stderr.matches("no such thing").count(), 1);
}

#[tokio::test]
async fn test_logout_failure_after_command_failure_is_reported() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("{PUBLISH}/GetThing")))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such thing"))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("{PUBLISH}/session")))
        .respond_with(ResponseTemplate::new(503).set_body_string("session store down"))
        .expect(1)
        .mount(&server)
        .await;
    let home = TempDir::new().unwrap();

    let output = run_cli(cli_command(
        &["request", "publish", "get", "/GetThing", "--host", &server.uri()],
        home.path(),
    ))
    .await;

    assert!(!output.status.success());
    let stderr = stderr(&output);
    assert!(stderr.contains("HTTP 404: no such thing"), "stderr: {}", stderr);
    assert!(stderr.contains("Failed to logout"), "stderr: {}", stderr);
    assert!(stderr.contains("HTTP 503: session store down"));
}

#[tokio::test]
async fn test_logout_failure_fails_command() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("DELETE"))
        .and(path(format!("{PUBLISH}/session")))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;
    let home = TempDir::new().unwrap();

    let output = run_cli(cli_command(&["login", "--host", &server.uri()], home.path())).await;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to logout: HTTP 503"));
}
