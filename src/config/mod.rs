//! Configuration types for the NerdGraph client.
//!
//! # Overview
//!
//! - [`NerdGraphConfig`]: settings shared by every client in this crate
//! - [`NerdGraphConfigBuilder`]: builder for [`NerdGraphConfig`]
//! - [`ApiKey`]: a validated, log-masked user API key
//! - [`EndpointUrl`]: a validated endpoint override
//! - [`Region`]: the New Relic data center (US or EU)
//!
//! # Example
//!
//! ```rust
//! use nerdgraph::{ApiKey, NerdGraphConfig, Region};
//!
//! let config = NerdGraphConfig::builder()
//!     .api_key(ApiKey::new("NRAK-123").unwrap())
//!     .region(Region::Eu)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.endpoint(), "https://api.eu.newrelic.com/graphql");
//! ```

mod newtypes;
mod region;

pub use newtypes::{ApiKey, EndpointUrl};
pub use region::{Region, EU_GRAPHQL_ENDPOINT, US_GRAPHQL_ENDPOINT};

use crate::error::ConfigError;

/// Configuration for talking to NerdGraph.
///
/// `NerdGraphConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct NerdGraphConfig {
    api_key: ApiKey,
    region: Region,
    endpoint: Option<EndpointUrl>,
    user_agent_prefix: Option<String>,
}

impl NerdGraphConfig {
    /// Creates a new builder for constructing a `NerdGraphConfig`.
    #[must_use]
    pub fn builder() -> NerdGraphConfigBuilder {
        NerdGraphConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the configured region.
    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// Returns the endpoint override, if configured.
    #[must_use]
    pub const fn endpoint_override(&self) -> Option<&EndpointUrl> {
        self.endpoint.as_ref()
    }

    /// Returns the URL requests are sent to.
    ///
    /// The endpoint override wins over the region's default endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_ref()
            .map_or_else(|| self.region.graphql_endpoint(), AsRef::as_ref)
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify NerdGraphConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NerdGraphConfig>();
};

/// Builder for constructing [`NerdGraphConfig`] instances.
///
/// `api_key` is required. Defaults: `region` is [`Region::Us`], no endpoint
/// override, no user agent prefix.
///
/// # Example
///
/// ```rust
/// use nerdgraph::{ApiKey, EndpointUrl, NerdGraphConfig};
///
/// let config = NerdGraphConfig::builder()
///     .api_key(ApiKey::new("NRAK-123").unwrap())
///     .endpoint(EndpointUrl::new("http://localhost:8080/graphql").unwrap())
///     .user_agent_prefix("dashboards/2.1")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.endpoint(), "http://localhost:8080/graphql");
/// ```
#[derive(Debug, Default)]
pub struct NerdGraphConfigBuilder {
    api_key: Option<ApiKey>,
    region: Option<Region>,
    endpoint: Option<EndpointUrl>,
    user_agent_prefix: Option<String>,
}

impl NerdGraphConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the region.
    #[must_use]
    pub const fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Overrides the endpoint URL derived from the region.
    #[must_use]
    pub fn endpoint(mut self, endpoint: EndpointUrl) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`NerdGraphConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<NerdGraphConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(NerdGraphConfig {
            api_key,
            region: self.region.unwrap_or_default(),
            endpoint: self.endpoint,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
