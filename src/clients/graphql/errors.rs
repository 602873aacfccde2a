//! GraphQL-specific error types.
//!
//! Only HTTP-level failures are errors. NerdGraph reports query problems
//! (bad NRQL, unknown account) with status 200 and an `errors` array in the
//! body, which callers inspect themselves.

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for GraphQL operations.
///
/// # Example
///
/// ```rust
/// use nerdgraph::clients::graphql::GraphqlError;
/// use nerdgraph::clients::{HttpError, HttpResponseError};
///
/// let http_error = HttpError::Response(HttpResponseError {
///     code: 401,
///     message: r#"{"errors":[{"message":"Unauthorized"}]}"#.to_string(),
///     error_reference: None,
/// });
/// let graphql_error: GraphqlError = http_error.into();
/// assert!(graphql_error.to_string().contains("Unauthorized"));
/// ```
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// An HTTP-level error occurred: network failure, non-2xx response, or
    /// an invalid request.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl GraphqlError {
    /// Returns the HTTP status code when the server answered with one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
        }
    }
}
