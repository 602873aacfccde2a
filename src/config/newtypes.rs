//! Validated newtype wrappers for configuration values.
//!
//! Invalid values are rejected on construction with a [`ConfigError`].

use crate::error::ConfigError;
use std::fmt;

/// A validated New Relic user API key.
///
/// The key is sent in the `API-Key` header of every request. Its `Debug`
/// output is masked so it never ends up in logs.
///
/// # Example
///
/// ```rust
/// use nerdgraph::ApiKey;
///
/// let key = ApiKey::new("NRAK-123").unwrap();
/// assert_eq!(key.as_ref(), "NRAK-123");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated GraphQL endpoint URL.
///
/// Only the shape is checked: a scheme followed by `://` and a non-empty host.
///
/// # Example
///
/// ```rust
/// use nerdgraph::EndpointUrl;
///
/// let url = EndpointUrl::new("http://localhost:8080/graphql").unwrap();
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), Some("localhost"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl EndpointUrl {
    /// Creates a new validated endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpointUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().to_string();
        let invalid = |url: &str| ConfigError::InvalidEndpointUrl {
            url: url.to_string(),
        };

        let scheme_end = url.find("://").ok_or_else(|| invalid(&url))?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid(&url));
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(invalid(&url));
        }

        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid(&url));
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl AsRef<str> for EndpointUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for EndpointUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty_string() {
        let result = ApiKey::new("");
        assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_masks_value_in_debug() {
        let key = ApiKey::new("NRAK-super-secret").unwrap();
        let debug_output = format!("{key:?}");
        assert_eq!(debug_output, "ApiKey(*****)");
        assert!(!debug_output.contains("super-secret"));
    }

    #[test]
    fn test_endpoint_url_validates_format() {
        let url = EndpointUrl::new("https://api.newrelic.com/graphql").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), Some("api.newrelic.com"));

        let url = EndpointUrl::new("http://127.0.0.1:4000").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), Some("127.0.0.1"));
    }

    #[test]
    fn test_endpoint_url_trims_whitespace() {
        let url = EndpointUrl::new("  https://api.newrelic.com/graphql ").unwrap();
        assert_eq!(url.as_ref(), "https://api.newrelic.com/graphql");
    }

    #[test]
    fn test_endpoint_url_rejects_invalid() {
        assert!(EndpointUrl::new("api.newrelic.com/graphql").is_err());
        assert!(EndpointUrl::new("https://").is_err());
        assert!(EndpointUrl::new("://api.newrelic.com").is_err());
        assert!(EndpointUrl::new("https:///graphql").is_err());
    }
}
