//! Configuration error types for the NerdGraph client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that an
//! unusable client is rejected before any request is attempted.
//!
//! # Example
//!
//! ```rust
//! use nerdgraph::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring a client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a New Relic user API key.")]
    EmptyApiKey,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Endpoint URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Please provide a URL with scheme and host (e.g., 'https://api.newrelic.com/graphql').")]
    InvalidEndpointUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Region name is not recognized.
    #[error("Invalid region '{region}'. Expected 'us' or 'eu'.")]
    InvalidRegion {
        /// The region string that was provided.
        region: String,
    },

    /// The underlying HTTP client could not be initialized.
    #[error("Failed to initialize HTTP client: {reason}")]
    HttpClientInit {
        /// Description of the initialization failure.
        reason: String,
    },
}
