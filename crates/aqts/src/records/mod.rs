//! Location and report calls.
//!
//! These are ordinary relative paths on the publish and acquisition
//! sessions; the session layer gives them no special treatment.

mod filter;
mod types;

use tracing::{debug, info, instrument};

pub use filter::ReportFilter;
pub use types::{LocationDescription, Report};

use crate::client::AquariusClient;
use crate::error::Error;
use types::{LocationDescriptionList, ReportList};

/// Publish path listing location descriptions.
pub const LOCATION_DESCRIPTIONS_PATH: &str = "/GetLocationDescriptionList";

/// Publish path listing reports.
pub const REPORT_LIST_PATH: &str = "/GetReportList";

/// Acquisition path of a report attachment.
pub fn report_attachment_path(report_unique_id: &str) -> String {
    format!("/attachments/reports/{}", report_unique_id)
}

impl AquariusClient {
    /// Fetch all location descriptions from the publish area.
    #[instrument(skip(self))]
    pub async fn location_descriptions(&self) -> Result<Vec<LocationDescription>, Error> {
        let list: LocationDescriptionList =
            self.publish().get_json(LOCATION_DESCRIPTIONS_PATH).await?;
        debug!(count = list.location_descriptions.len(), "Fetched locations");
        Ok(list.location_descriptions)
    }

    /// Fetch all reports from the publish area.
    #[instrument(skip(self))]
    pub async fn reports(&self) -> Result<Vec<Report>, Error> {
        let list: ReportList = self.publish().get_json(REPORT_LIST_PATH).await?;
        debug!(count = list.reports.len(), "Fetched reports");
        Ok(list.reports)
    }

    /// Fetch reports and keep the ones `filter` selects.
    ///
    /// The location list is only requested when the filter has a folder.
    pub async fn select_reports(&self, filter: &ReportFilter) -> Result<Vec<Report>, Error> {
        let locations = if filter.needs_locations() {
            self.location_descriptions().await?
        } else {
            Vec::new()
        };
        let reports = self.reports().await?;

        Ok(filter
            .select(&reports, &locations)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Delete one report through the acquisition area.
    #[instrument(skip(self))]
    pub async fn delete_report(&self, report_unique_id: &str) -> Result<(), Error> {
        self.acquisition()
            .delete(&report_attachment_path(report_unique_id))
            .await?;
        Ok(())
    }

    /// Delete reports one after another.
    ///
    /// Stops at the first failure; reports before it stay deleted.
    /// Returns the number of reports deleted.
    pub async fn delete_reports<'a, I>(&self, reports: I) -> Result<usize, Error>
    where
        I: IntoIterator<Item = &'a Report>,
    {
        let mut deleted = 0;
        for report in reports {
            self.delete_report(&report.report_unique_id).await?;
            deleted += 1;
        }
        info!(deleted, "Deleted reports");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attachment_path() {
        assert_eq!(report_attachment_path("abc123"), "/attachments/reports/abc123");
    }
}
