//! HTTP response type returned by [`HttpClient`](crate::clients::HttpClient).

use std::collections::HashMap;

/// An HTTP response from NerdGraph.
///
/// Header names are lowercased; a header may carry several values.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed JSON response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the GraphQL `errors` array from the body, if present and non-empty.
    ///
    /// NerdGraph reports query-level problems (bad NRQL, unknown account)
    /// with a 200 status and an `errors` array next to `data`.
    #[must_use]
    pub fn graphql_errors(&self) -> Option<&Vec<serde_json::Value>> {
        self.body
            .get("errors")
            .and_then(serde_json::Value::as_array)
            .filter(|errors| !errors.is_empty())
    }
}
