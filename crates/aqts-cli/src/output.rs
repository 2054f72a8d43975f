//! Terminal output.
//!
//! Records go to stdout as JSON lines so they can be piped; status lines and
//! counts go to stderr.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a `label: value` line.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a dimmed status line to stderr.
pub fn notice(msg: &str) {
    eprintln!("{}", msg.dimmed());
}

/// Print a closing count after a list of records.
pub fn total(label: &str, count: usize) {
    eprintln!();
    eprintln!("{}: {}", label.dimmed(), count);
}

/// Print one record as a JSON line, or as indented JSON with `pretty`.
pub fn record<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
