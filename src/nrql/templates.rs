//! Fixed GraphQL documents for NRQL queries and the rule choosing between them.

use serde_json::Value;

use crate::nrql::options::QueryOptions;
use crate::nrql::results::QueryProgress;

/// Runs an NRQL query and waits for its results.
pub const NRQL_QUERY: &str = r"query ($account: Int!, $query: Nrql!) {
  actor {
    account(id: $account) {
      name
      nrql(query: $query) {
        results
      }
    }
    user {
      name
      id
    }
  }
}";

/// Submits an NRQL query for background execution.
pub const NRQL_ASYNC_QUERY: &str = r"query ($account: Int!, $query: Nrql!) {
  actor {
    account(id: $account) {
      name
      nrql(query: $query, async: true) {
        results
        queryProgress {
          queryId
          completed
          retryAfter
          retryDeadline
          resultExpiration
        }
      }
    }
    user {
      name
      id
    }
  }
}";

/// Fetches the progress (and, once complete, the results) of an async query.
pub const NRQL_POLL_QUERY: &str = r"query ($account: Int!, $queryId: ID!) {
  actor {
    account(id: $account) {
      nrqlQueryProgress(queryId: $queryId) {
        results
        queryProgress {
          queryId
          completed
          retryAfter
          retryDeadline
          resultExpiration
        }
      }
    }
  }
}";

/// Which of the three NRQL documents a call uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryTemplate {
    /// Blocking query, [`NRQL_QUERY`].
    Sync,
    /// Async submission, [`NRQL_ASYNC_QUERY`].
    AsyncSubmit,
    /// Progress poll, [`NRQL_POLL_QUERY`].
    Poll,
}

impl QueryTemplate {
    /// Chooses the template for the given options.
    ///
    /// `poll` wins over `async`; with neither set the sync template is used.
    #[must_use]
    pub fn select(options: &QueryOptions) -> Self {
        if options.poll == Some(true) {
            Self::Poll
        } else if options.async_query == Some(true) {
            Self::AsyncSubmit
        } else {
            Self::Sync
        }
    }

    /// Returns the GraphQL document for this template.
    #[must_use]
    pub const fn document(self) -> &'static str {
        match self {
            Self::Sync => NRQL_QUERY,
            Self::AsyncSubmit => NRQL_ASYNC_QUERY,
            Self::Poll => NRQL_POLL_QUERY,
        }
    }

    /// JSON pointer to the object holding `results` and `queryProgress`.
    const fn result_root(self) -> &'static str {
        match self {
            Self::Sync | Self::AsyncSubmit => "/data/actor/account/nrql",
            Self::Poll => "/data/actor/account/nrqlQueryProgress",
        }
    }

    /// Returns the `results` array of a response body, if there is one.
    ///
    /// Missing intermediate fields, `null` and non-array values all yield `None`.
    #[must_use]
    pub fn extract_results(self, body: &Value) -> Option<Vec<Value>> {
        body.pointer(self.result_root())
            .and_then(|root| root.get("results"))
            .and_then(Value::as_array)
            .cloned()
    }

    /// Like [`extract_results`](Self::extract_results), but moves the array
    /// out of the body instead of cloning it.
    pub(crate) fn take_results(self, mut body: Value) -> Option<Vec<Value>> {
        match body
            .pointer_mut(self.result_root())
            .and_then(|root| root.get_mut("results"))
            .map(Value::take)
        {
            Some(Value::Array(results)) => Some(results),
            _ => None,
        }
    }

    /// Returns the `queryProgress` block of a response body, if there is one.
    ///
    /// Sync responses never carry one.
    #[must_use]
    pub fn extract_progress(self, body: &Value) -> Option<QueryProgress> {
        if self == Self::Sync {
            return None;
        }
        body.pointer(self.result_root())
            .and_then(|root| root.get("queryProgress"))
            .filter(|progress| !progress.is_null())
            .and_then(|progress| serde_json::from_value(progress.clone()).ok())
    }
}
