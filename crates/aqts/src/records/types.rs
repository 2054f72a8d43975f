//! Location and report record types.
//!
//! Only the fields used for selection are named; everything else the server
//! sends is kept in `extra` and written back out unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An entry of `GET /GetLocationDescriptionList`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LocationDescription {
    pub unique_id: String,
    pub identifier: Option<String>,
    pub name: Option<String>,
    /// Dotted folder path, e.g. `Locations.SNOW.Manual Snow Sites`.
    pub primary_folder: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LocationDescription {
    /// Whether the primary folder equals `folder` exactly.
    pub fn is_in_folder(&self, folder: &str) -> bool {
        self.primary_folder.as_deref() == Some(folder)
    }
}

/// Response body of `GET /GetLocationDescriptionList`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct LocationDescriptionList {
    #[serde(default)]
    pub location_descriptions: Vec<LocationDescription>,
}

/// An entry of `GET /GetReportList`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Report {
    pub report_unique_id: String,
    #[serde(default)]
    pub title: String,
    pub location_unique_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response body of `GET /GetReportList`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ReportList {
    #[serde(default)]
    pub reports: Vec<Report>,
}
