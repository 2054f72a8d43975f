//! Report selection.

use std::collections::HashSet;

use regex::Regex;

use super::types::{LocationDescription, Report};
use crate::error::{Error, InvalidInputError};

/// One condition on a report title.
#[derive(Debug, Clone)]
enum TitleRule {
    /// Literal, case-sensitive substring.
    Contains(String),
    /// Regular expression found anywhere in the title.
    Matches(Regex),
}

impl TitleRule {
    fn is_match(&self, title: &str) -> bool {
        match self {
            TitleRule::Contains(text) => title.contains(text.as_str()),
            TitleRule::Matches(regex) => regex.is_match(title),
        }
    }

    fn as_str(&self) -> &str {
        match self {
            TitleRule::Contains(text) => text,
            TitleRule::Matches(regex) => regex.as_str(),
        }
    }
}

/// Selects reports by title and location folder.
///
/// A report matches when its title satisfies every title rule and, if a
/// folder is set, its location is one whose primary folder equals the
/// folder exactly.
///
/// Title rules come in two kinds. [`title_contains`](Self::title_contains)
/// takes literal text. [`title_matches`](Self::title_matches) takes a
/// regular expression searched anywhere in the title, so `.` in
/// `"Snow."` matches any character. The weekly snow report cleanup uses
/// patterns:
///
/// ```
/// use aqts::ReportFilter;
///
/// # fn example() -> Result<(), aqts::Error> {
/// let filter = ReportFilter::new()
///     .title_matches("Snow.")?
///     .title_matches(".Weekly Report")?
///     .in_folder("Locations.SNOW.Manual Snow Sites");
///
/// assert!(filter.needs_locations());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    title_rules: Vec<TitleRule>,
    folder: Option<String>,
}

impl ReportFilter {
    /// A filter that matches every report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the title to contain `text` literally.
    pub fn title_contains(mut self, text: impl Into<String>) -> Self {
        self.title_rules.push(TitleRule::Contains(text.into()));
        self
    }

    /// Require the title to match the regular expression `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::TitlePattern`] if `pattern` does not
    /// compile.
    pub fn title_matches(mut self, pattern: &str) -> Result<Self, Error> {
        let regex = Regex::new(pattern).map_err(|source| InvalidInputError::TitlePattern {
            pattern: pattern.to_string(),
            source,
        })?;
        self.title_rules.push(TitleRule::Matches(regex));
        Ok(self)
    }

    /// Require the report's location to live in `folder`.
    pub fn in_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = Some(folder.into());
        self
    }

    pub fn folder(&self) -> Option<&str> {
        self.folder.as_deref()
    }

    /// The title texts and patterns, in the order they were added.
    pub fn title_rules(&self) -> impl Iterator<Item = &str> {
        self.title_rules.iter().map(TitleRule::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.title_rules.is_empty() && self.folder.is_none()
    }

    /// Whether [`select`](Self::select) needs the location list.
    pub fn needs_locations(&self) -> bool {
        self.folder.is_some()
    }

    pub fn matches_title(&self, title: &str) -> bool {
        self.title_rules.iter().all(|rule| rule.is_match(title))
    }

    /// Pick the matching reports, in the order given.
    ///
    /// `locations` is only consulted when a folder is set.
    pub fn select<'a>(
        &self,
        reports: &'a [Report],
        locations: &[LocationDescription],
    ) -> Vec<&'a Report> {
        let in_folder: Option<HashSet<&str>> = self.folder.as_deref().map(|folder| {
            locations
                .iter()
                .filter(|location| location.is_in_folder(folder))
                .map(|location| location.unique_id.as_str())
                .collect()
        });

        reports
            .iter()
            .filter(|report| self.matches_title(&report.title))
            .filter(|report| match &in_folder {
                Some(ids) => report
                    .location_unique_id
                    .as_deref()
                    .is_some_and(|id| ids.contains(id)),
                None => true,
            })
            .collect()
    }
}
