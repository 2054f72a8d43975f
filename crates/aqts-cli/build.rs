//! Sets `AQTS_VERSION` from `git describe`, falling back to the package version.

use std::process::Command;

fn main() {
    for path in [".git/HEAD", ".git/refs/tags/"] {
        println!("cargo:rerun-if-changed={}", path);
    }

    let version = describe().unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());
    println!("cargo:rustc-env=AQTS_VERSION={}", version);
}

/// `v0.2.0-3-gabc1234-dirty` becomes `0.2.0-3-gabc1234-dirty`.
fn describe() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|output| output.status.success())?;

    let described = String::from_utf8(output.stdout).ok()?;
    let described = described.trim();
    let version = described.strip_prefix('v').unwrap_or(described);

    (!version.is_empty()).then(|| version.to_string())
}
