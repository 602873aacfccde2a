//! Values produced by NRQL operations.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// The outcome of a successful NRQL call.
///
/// Which variant comes back is decided by
/// [`QueryOptions::complete_response`](crate::QueryOptions::complete_response).
#[derive(Clone, Debug, PartialEq)]
pub enum NrqlResponse {
    /// The `results` array of the response, or `None` when the response has
    /// no such array (missing account, pending async query, GraphQL errors).
    Results(Option<Vec<Value>>),
    /// The full response body.
    Complete(Value),
}

impl NrqlResponse {
    /// Returns the extracted results, if this is a `Results` response that has any.
    #[must_use]
    pub fn results(&self) -> Option<&[Value]> {
        match self {
            Self::Results(results) => results.as_deref(),
            Self::Complete(_) => None,
        }
    }

    /// Returns the full body, if this is a `Complete` response.
    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        match self {
            Self::Complete(body) => Some(body),
            Self::Results(_) => None,
        }
    }

    /// Converts the response into a single JSON value.
    ///
    /// Results become a JSON array, missing results become `null`.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Results(Some(results)) => Value::Array(results),
            Self::Results(None) => Value::Null,
            Self::Complete(body) => body,
        }
    }
}

/// Execution state of an async NRQL query, from the `queryProgress` block.
///
/// # Example
///
/// ```rust
/// use nerdgraph::QueryProgress;
/// use serde_json::json;
///
/// let progress: QueryProgress = serde_json::from_value(json!({
///     "queryId": "abc",
///     "completed": false,
///     "retryAfter": 2,
///     "retryDeadline": 1700000060000_i64,
///     "resultExpiration": 1700000600000_i64
/// })).unwrap();
///
/// assert!(!progress.is_completed());
/// assert_eq!(progress.retry_after_duration().unwrap().as_secs(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryProgress {
    /// ID to poll with. Absent when the query finished synchronously.
    pub query_id: Option<String>,
    /// Whether the query has finished.
    pub completed: Option<bool>,
    /// Seconds to wait before polling again.
    pub retry_after: Option<u64>,
    /// Epoch milliseconds after which polling is no longer accepted.
    pub retry_deadline: Option<i64>,
    /// Epoch milliseconds after which the results are discarded.
    pub result_expiration: Option<i64>,
}

impl QueryProgress {
    /// Returns `true` once the query has finished.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed == Some(true)
    }

    /// Returns the suggested wait before the next poll.
    #[must_use]
    pub fn retry_after_duration(&self) -> Option<Duration> {
        self.retry_after.map(Duration::from_secs)
    }

    /// Returns the retry deadline as a timestamp.
    #[must_use]
    pub fn retry_deadline_at(&self) -> Option<DateTime<Utc>> {
        self.retry_deadline.and_then(DateTime::<Utc>::from_timestamp_millis)
    }

    /// Returns the result expiration as a timestamp.
    #[must_use]
    pub fn result_expiration_at(&self) -> Option<DateTime<Utc>> {
        self.result_expiration
            .and_then(DateTime::<Utc>::from_timestamp_millis)
    }

    /// Returns `true` if `now` is past the retry deadline.
    ///
    /// A progress block without a deadline never expires.
    #[must_use]
    pub fn is_past_deadline(&self, now: DateTime<Utc>) -> bool {
        self.retry_deadline_at()
            .is_some_and(|deadline| now > deadline)
    }
}
