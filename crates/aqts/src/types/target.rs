//! Deployment target type.

use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, Error};

const TEST_HOST: &str = "https://bcmoe-test.aquaticinformatics.net";
const PROD_HOST: &str = "https://bcmoe-prod.aquaticinformatics.net:443";
const SAMPLES_HOST: &str = "https://bcenv-training.aqsamples.com";

/// A named deployment of the AQUARIUS service.
///
/// The named targets map to fixed hosts. [`Target::Custom`] carries an
/// arbitrary host string, which is passed through
/// [`create_endpoint`](crate::create_endpoint) like any other.
///
/// # Example
///
/// ```
/// use aqts::Target;
///
/// let target: Target = "test".parse().unwrap();
/// assert_eq!(target.host(), "https://bcmoe-test.aquaticinformatics.net");
///
/// assert!("staging".parse::<Target>().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// Test AQUARIUS Time-Series server.
    Test,
    /// Production AQUARIUS Time-Series server.
    Prod,
    /// AQUARIUS Samples training server.
    Samples,
    /// Any other host.
    Custom(String),
}

impl Target {
    /// Resolve a target by name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownTarget`] for names other than
    /// `test`, `prod` and `samples`.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        match name {
            "test" => Ok(Target::Test),
            "prod" => Ok(Target::Prod),
            "samples" => Ok(Target::Samples),
            other => Err(ConfigError::UnknownTarget {
                name: other.to_string(),
            }
            .into()),
        }
    }

    /// Returns the host string for this target.
    pub fn host(&self) -> &str {
        match self {
            Target::Test => TEST_HOST,
            Target::Prod => PROD_HOST,
            Target::Samples => SAMPLES_HOST,
            Target::Custom(host) => host,
        }
    }

    /// Returns the target name, or `custom` for custom hosts.
    pub fn name(&self) -> &str {
        match self {
            Target::Test => "test",
            Target::Prod => "prod",
            Target::Samples => "samples",
            Target::Custom(_) => "custom",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Custom(host) => write!(f, "custom ({})", host),
            other => write!(f, "{} ({})", other.name(), other.host()),
        }
    }
}

impl FromStr for Target {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
