//! NRQL queries over NerdGraph.
//!
//! # Overview
//!
//! - [`NrqlClient`]: `submit_query` and `poll_query`, each with a callback form
//! - [`QueryOptions`]: account, query or query ID, and the flags that pick a template
//! - [`QueryTemplate`]: the three fixed GraphQL documents and their result paths
//! - [`NrqlResponse`]: extracted results or the full body
//! - [`QueryProgress`]: state of an async query
//! - [`ValidationError`]: options rejected before sending
//!
//! # Templates
//!
//! | Options | Template | Results read from |
//! |---------|----------|-------------------|
//! | default | [`NRQL_QUERY`] | `data.actor.account.nrql.results` |
//! | `async: true` | [`NRQL_ASYNC_QUERY`] | `data.actor.account.nrql.results` |
//! | `poll: true` | [`NRQL_POLL_QUERY`] | `data.actor.account.nrqlQueryProgress.results` |
//!
//! The client never re-polls on its own. Use
//! [`QueryProgress::retry_after_duration`] to schedule the next poll.

mod client;
mod errors;
mod options;
mod results;
mod templates;

pub use client::NrqlClient;
pub use errors::{NrqlError, ValidationError};
pub use options::QueryOptions;
pub use results::{NrqlResponse, QueryProgress};
pub use templates::{QueryTemplate, NRQL_ASYNC_QUERY, NRQL_POLL_QUERY, NRQL_QUERY};
