//! HTTP and GraphQL client layers for NerdGraph.
//!
//! # Overview
//!
//! - [`HttpClient`]: sends one authenticated POST to the GraphQL endpoint
//! - [`HttpRequest`]: a request body plus optional extra headers
//! - [`HttpResponse`]: status, headers and parsed JSON body
//! - [`HttpError`]: transport failures (network errors, non-2xx responses)
//! - [`graphql::GraphqlClient`]: wraps documents and variables into the
//!   GraphQL request envelope
//!
//! The NRQL operations in [`crate::nrql`] are built on top of these layers.
//!
//! # No Retries
//!
//! Every request is attempted exactly once. Callers that want to retry or
//! re-poll schedule that themselves.

mod errors;
pub mod graphql;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

pub use graphql::{GraphqlClient, GraphqlError};
