//! # NerdGraph NRQL Client
//!
//! A Rust client for running NRQL queries through New Relic's NerdGraph
//! GraphQL API, including asynchronous query submission and progress polling.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`NerdGraphConfig`] and [`NerdGraphConfigBuilder`]
//! - A validated, log-masked [`ApiKey`] and US/EU [`Region`] endpoints
//! - [`NrqlClient`] with sync, async-submit and poll operations
//! - Future-based and callback-based completion for every operation
//! - A generic [`GraphqlClient`] for other NerdGraph documents
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nerdgraph::{NrqlClient, QueryOptions};
//!
//! let client = NrqlClient::new("NRAK-your-user-key")?;
//!
//! let options = QueryOptions::nrql(1234567, "SELECT count(*) FROM Transaction SINCE 1 hour ago");
//! let response = client.submit_query(&options)?.await?;
//!
//! if let Some(rows) = response.results() {
//!     println!("{} row(s)", rows.len());
//! }
//! ```
//!
//! ## Callbacks
//!
//! ```rust,ignore
//! use nerdgraph::{NrqlClient, QueryOptions};
//!
//! let options = QueryOptions::nrql(1234567, "SELECT uniques(appName) FROM Transaction");
//! client.submit_query_with_callback(&options, |outcome| match outcome {
//!     Ok(response) => println!("{:?}", response.results()),
//!     Err(e) => eprintln!("NerdGraph request failed: {e}"),
//! })?;
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use nerdgraph::{ApiKey, NerdGraphConfig, Region};
//!
//! let config = NerdGraphConfig::builder()
//!     .api_key(ApiKey::new("NRAK-your-user-key").unwrap())
//!     .region(Region::Eu)
//!     .user_agent_prefix("reports/1.4")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.endpoint(), "https://api.eu.newrelic.com/graphql");
//! ```
//!
//! ## Errors
//!
//! - [`ConfigError`]: invalid configuration, at construction
//! - [`ValidationError`]: missing account, query or query ID, before any request
//! - [`GraphqlError`]: transport failures, through the future or callback
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: newtypes and options are checked before any I/O
//! - **No hidden retries**: one HTTP request per call
//! - **Thread-safe**: all clients are `Send + Sync`

pub mod clients;
pub mod config;
pub mod error;
pub mod nrql;

pub use config::{ApiKey, EndpointUrl, NerdGraphConfig, NerdGraphConfigBuilder, Region};
pub use error::ConfigError;

pub use clients::{
    DataType, GraphqlClient, GraphqlError, HttpClient, HttpError, HttpRequest,
    HttpRequestBuilder, HttpResponse, HttpResponseError, InvalidHttpRequestError,
};

pub use nrql::{
    NrqlClient, NrqlError, NrqlResponse, QueryOptions, QueryProgress, QueryTemplate,
    ValidationError,
};
