//! aqts - AQUARIUS API client
//!
//! This library wraps the AQUARIUS Time-Series (and Samples) REST APIs in a
//! small authenticated client. A single login against the primary area
//! yields a token which is attached to the session of every API area.
//!
//! # Example
//!
//! ```no_run
//! use aqts::{AquariusClient, ClientConfig, Credentials, Login, ReportFilter, Target};
//!
//! # async fn example() -> Result<(), aqts::Error> {
//! let credentials = Credentials::from_json_file("credentials.json")?;
//! let config = ClientConfig::new(Target::Prod, Login::Password(credentials));
//!
//! let mut client = AquariusClient::new(config)?;
//! client.connect().await?;
//!
//! let filter = ReportFilter::new().title_contains(".Weekly Report");
//! for report in client.select_reports(&filter).await? {
//!     println!("{}: {}", report.report_unique_id, report.title);
//! }
//!
//! client.disconnect().await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod records;
pub mod types;

// Re-export primary types at crate root for convenience
pub use auth::{AUTH_TOKEN_HEADER, AuthToken, Credentials, Login, SamplesToken};
pub use client::{AquariusClient, ConnectionState};
pub use config::ClientConfig;
pub use error::{Error, HttpError};
pub use http::ApiSession;
pub use records::{LocationDescription, Report, ReportFilter};
pub use types::{ApiArea, Target, create_endpoint};

pub use reqwest;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
