//! New Relic data center regions.
//!
//! Each region serves NerdGraph from its own host. Accounts hosted in the EU
//! data center must use the EU endpoint.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// NerdGraph endpoint for US-hosted accounts.
pub const US_GRAPHQL_ENDPOINT: &str = "https://api.newrelic.com/graphql";

/// NerdGraph endpoint for EU-hosted accounts.
pub const EU_GRAPHQL_ENDPOINT: &str = "https://api.eu.newrelic.com/graphql";

/// The New Relic region an account lives in.
///
/// # Example
///
/// ```rust
/// use nerdgraph::Region;
///
/// let region: Region = "EU".parse().unwrap();
/// assert_eq!(region, Region::Eu);
/// assert_eq!(region.graphql_endpoint(), "https://api.eu.newrelic.com/graphql");
/// assert_eq!(Region::default(), Region::Us);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Region {
    /// United States data center.
    #[default]
    Us,
    /// European Union data center.
    Eu,
}

impl Region {
    /// Returns the NerdGraph endpoint URL for this region.
    #[must_use]
    pub const fn graphql_endpoint(self) -> &'static str {
        match self {
            Self::Us => US_GRAPHQL_ENDPOINT,
            Self::Eu => EU_GRAPHQL_ENDPOINT,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Us => f.write_str("us"),
            Self::Eu => f.write_str("eu"),
        }
    }
}

impl FromStr for Region {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "us" => Ok(Self::Us),
            "eu" => Ok(Self::Eu),
            _ => Err(ConfigError::InvalidRegion {
                region: s.to_string(),
            }),
        }
    }
}
