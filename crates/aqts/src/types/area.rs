//! API area type.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// One API root on an AQUARIUS host.
///
/// Each area gets its own [`ApiSession`](crate::ApiSession) bound to
/// `host + area.path()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiArea {
    Publish,
    Acquisition,
    Provisioning,
    Samples,
}

impl ApiArea {
    /// All areas, in the order the client creates their sessions.
    pub const ALL: [ApiArea; 4] = [
        ApiArea::Publish,
        ApiArea::Acquisition,
        ApiArea::Provisioning,
        ApiArea::Samples,
    ];

    /// Returns the root path of this area, relative to the host.
    pub fn path(&self) -> &'static str {
        match self {
            ApiArea::Publish => "/AQUARIUS/Publish/v2",
            ApiArea::Acquisition => "/AQUARIUS/Acquisition/v2",
            ApiArea::Provisioning => "/AQUARIUS/Provisioning/v1",
            ApiArea::Samples => "/api/v1",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ApiArea::Publish => "publish",
            ApiArea::Acquisition => "acquisition",
            ApiArea::Provisioning => "provisioning",
            ApiArea::Samples => "samples",
        }
    }
}

impl fmt::Display for ApiArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ApiArea {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApiArea::ALL
            .into_iter()
            .find(|area| area.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                InvalidInputError::Area {
                    value: s.to_string(),
                }
                .into()
            })
    }
}
