//! GraphQL client for NerdGraph.
//!
//! [`GraphqlClient`] wraps a document and its variables into the
//! `{"query": ..., "variables": ...}` envelope and posts it through the
//! [`HttpClient`](crate::clients::HttpClient).
//!
//! # Example
//!
//! ```rust,ignore
//! use nerdgraph::{ApiKey, GraphqlClient, NerdGraphConfig};
//! use serde_json::json;
//!
//! let config = NerdGraphConfig::builder()
//!     .api_key(ApiKey::new("NRAK-...").unwrap())
//!     .build()
//!     .unwrap();
//! let client = GraphqlClient::new(&config)?;
//!
//! let response = client
//!     .query("query { actor { user { name } } }", None)
//!     .await?;
//! println!("User: {}", response.body["data"]["actor"]["user"]["name"]);
//! ```
//!
//! # Response Structure
//!
//! - `data`: the query result data
//! - `errors`: GraphQL errors, still returned with HTTP 200
//!
//! GraphQL-level errors are not turned into [`GraphqlError`]; they are logged
//! and left in the body.

mod client;
mod errors;

pub use client::GraphqlClient;
pub use errors::GraphqlError;
