//! GraphQL client implementation for NerdGraph.

use std::collections::HashMap;

use crate::clients::graphql::GraphqlError;
use crate::clients::{DataType, HttpClient, HttpRequest, HttpResponse};
use crate::config::NerdGraphConfig;
use crate::error::ConfigError;

/// GraphQL client for NerdGraph.
///
/// `GraphqlClient` is `Send + Sync` and `Clone`; clones share the underlying
/// HTTP connection pool.
#[derive(Clone, Debug)]
pub struct GraphqlClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientInit`] if the HTTP client cannot be
    /// initialized.
    pub fn new(config: &NerdGraphConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
        })
    }

    /// Returns the endpoint URL queries are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.http_client.endpoint()
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Executes a GraphQL document against NerdGraph.
    ///
    /// # Arguments
    ///
    /// * `query` - The GraphQL document
    /// * `variables` - Optional variables for the document
    /// * `headers` - Optional extra headers to include in the request
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] for network errors and non-2xx
    /// responses. GraphQL-level errors come back in `response.body["errors"]`.
    pub async fn query(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
        headers: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, GraphqlError> {
        let body = serde_json::json!({
            "query": query,
            "variables": variables
        });

        let mut builder = HttpRequest::builder()
            .body(body)
            .body_type(DataType::Json);
        if let Some(extra_headers) = headers {
            builder = builder.extra_headers(extra_headers);
        }

        let request = builder.build().map_err(|e| GraphqlError::Http(e.into()))?;
        let response = self.http_client.request(request).await?;

        if let Some(errors) = response.graphql_errors() {
            tracing::warn!(
                "NerdGraph returned {} GraphQL error(s): {}",
                errors.len(),
                serde_json::Value::Array(errors.clone())
            );
        }

        Ok(response)
    }
}
