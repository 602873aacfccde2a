//! Per-call options for NRQL operations.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Options for a single NRQL call.
///
/// The recognized fields select the behavior of the call; every set field,
/// plus the free-form `extra` variables, is also sent as a GraphQL variable.
/// Unset fields are left out of the variables.
///
/// Options can be deserialized from the same JSON shape they are sent as,
/// which makes saved query definitions easy to load.
///
/// # Example
///
/// ```rust
/// use nerdgraph::QueryOptions;
/// use serde_json::json;
///
/// let options = QueryOptions::nrql(42, "SELECT count(*) FROM Transaction")
///     .with_async(true)
///     .with_complete_response(true);
///
/// assert_eq!(
///     options.variables(),
///     json!({
///         "account": 42,
///         "query": "SELECT count(*) FROM Transaction",
///         "async": true,
///         "completeResponse": true
///     })
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryOptions {
    /// New Relic account ID. Required by every operation.
    pub account: Option<u64>,
    /// NRQL query. Required when submitting.
    pub query: Option<String>,
    /// ID of an async query. Required when polling.
    pub query_id: Option<String>,
    /// Submit the query for background execution.
    #[serde(rename = "async")]
    pub async_query: Option<bool>,
    /// Use the progress template. Set by [`NrqlClient::poll_query`](crate::NrqlClient::poll_query).
    pub poll: Option<bool>,
    /// Return the full response body instead of the extracted results.
    pub complete_response: Option<bool>,
    /// Additional GraphQL variables, forwarded as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QueryOptions {
    /// Options for running `query` against `account`.
    #[must_use]
    pub fn nrql(account: u64, query: impl Into<String>) -> Self {
        Self {
            account: Some(account),
            query: Some(query.into()),
            ..Self::default()
        }
    }

    /// Options for polling the async query `query_id` on `account`.
    #[must_use]
    pub fn progress(account: u64, query_id: impl Into<String>) -> Self {
        Self {
            account: Some(account),
            query_id: Some(query_id.into()),
            ..Self::default()
        }
    }

    /// Sets the `async` flag.
    #[must_use]
    pub const fn with_async(mut self, async_query: bool) -> Self {
        self.async_query = Some(async_query);
        self
    }

    /// Sets the `completeResponse` flag.
    #[must_use]
    pub const fn with_complete_response(mut self, complete_response: bool) -> Self {
        self.complete_response = Some(complete_response);
        self
    }

    /// Adds an extra GraphQL variable.
    #[must_use]
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// Returns `true` when the full response body was requested.
    #[must_use]
    pub fn wants_complete_response(&self) -> bool {
        self.complete_response == Some(true)
    }

    /// Builds the GraphQL `variables` object for these options.
    ///
    /// Named fields override extra variables of the same name.
    #[must_use]
    pub fn variables(&self) -> Value {
        let mut variables = self.extra.clone();

        if let Some(account) = self.account {
            variables.insert("account".to_string(), Value::from(account));
        }
        if let Some(query) = &self.query {
            variables.insert("query".to_string(), Value::from(query.as_str()));
        }
        if let Some(query_id) = &self.query_id {
            variables.insert("queryId".to_string(), Value::from(query_id.as_str()));
        }
        if let Some(async_query) = self.async_query {
            variables.insert("async".to_string(), Value::from(async_query));
        }
        if let Some(poll) = self.poll {
            variables.insert("poll".to_string(), Value::from(poll));
        }
        if let Some(complete_response) = self.complete_response {
            variables.insert(
                "completeResponse".to_string(),
                Value::from(complete_response),
            );
        }

        Value::Object(variables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_options_are_empty() {
        let options = QueryOptions::default();
        assert_eq!(options.variables(), json!({}));
        assert!(!options.wants_complete_response());
    }

    #[test]
    fn test_nrql_options_variables() {
        let options = QueryOptions::nrql(7, "SELECT 1");
        assert_eq!(
            options.variables(),
            json!({"account": 7, "query": "SELECT 1"})
        );
    }

    #[test]
    fn test_progress_options_variables() {
        let options = QueryOptions::progress(7, "abc");
        assert_eq!(
            options.variables(),
            json!({"account": 7, "queryId": "abc"})
        );
    }

    #[test]
    fn test_extra_variables_are_forwarded_but_cannot_shadow_fields() {
        let options = QueryOptions::nrql(7, "SELECT 1")
            .with_variable("timeout", 30)
            .with_variable("account", 999);

        let variables = options.variables();
        assert_eq!(variables["timeout"], json!(30));
        assert_eq!(variables["account"], json!(7));
    }

    #[test]
    fn test_deserializes_from_wire_names() {
        let options: QueryOptions = serde_json::from_value(json!({
            "account": 1,
            "query": "SELECT 1",
            "async": true,
            "completeResponse": true,
            "label": "nightly"
        }))
        .unwrap();

        assert_eq!(options.account, Some(1));
        assert_eq!(options.async_query, Some(true));
        assert!(options.wants_complete_response());
        assert_eq!(options.extra.get("label"), Some(&json!("nightly")));
    }

    #[test]
    fn test_variables_match_deserialized_input() {
        let input = json!({"account": 3, "queryId": "q-9", "poll": true});
        let options: QueryOptions = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(options.variables(), input);
    }
}
