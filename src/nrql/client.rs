//! The NRQL client.

use std::future::Future;

use crate::clients::graphql::{GraphqlClient, GraphqlError};
use crate::config::{ApiKey, NerdGraphConfig};
use crate::error::ConfigError;
use crate::nrql::errors::ValidationError;
use crate::nrql::options::QueryOptions;
use crate::nrql::results::NrqlResponse;
use crate::nrql::templates::QueryTemplate;

/// Client for running NRQL queries through NerdGraph.
///
/// Every operation validates its options synchronously and then either
/// returns a future for the single HTTP call, or hands that future to the
/// Tokio runtime and reports the outcome to a callback.
///
/// # Thread Safety
///
/// `NrqlClient` is `Send + Sync` and holds only immutable state, so a single
/// instance can serve concurrent calls. Clones share the connection pool.
///
/// # Example
///
/// ```rust,ignore
/// use nerdgraph::{NrqlClient, QueryOptions};
///
/// let client = NrqlClient::new("NRAK-...")?;
///
/// let options = QueryOptions::nrql(42, "SELECT count(*) FROM Transaction");
/// let response = client.submit_query(&options)?.await?;
/// println!("{:?}", response.results());
/// ```
///
/// # Async Queries
///
/// Submit with `async: true` and `completeResponse: true` to get the query
/// ID back, then poll until the progress block says the query completed:
///
/// ```rust,ignore
/// use nerdgraph::{NrqlClient, QueryOptions, QueryTemplate};
///
/// let options = QueryOptions::nrql(42, "SELECT count(*) FROM Transaction SINCE 1 week ago")
///     .with_async(true)
///     .with_complete_response(true);
/// let body = client.submit_query(&options)?.await?.into_value();
///
/// let progress = QueryTemplate::AsyncSubmit.extract_progress(&body);
/// if let Some(query_id) = progress.and_then(|p| p.query_id) {
///     let mut poll = QueryOptions::progress(42, query_id);
///     let results = client.poll_query(&mut poll)?.await?;
/// }
/// ```
#[derive(Clone, Debug)]
pub struct NrqlClient {
    graphql: GraphqlClient,
}

// Verify NrqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NrqlClient>();
};

impl NrqlClient {
    /// Creates a client for the US region with the given API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty, or
    /// [`ConfigError::HttpClientInit`] if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let config = NerdGraphConfig::builder()
            .api_key(ApiKey::new(api_key)?)
            .build()?;
        Self::with_config(&config)
    }

    /// Creates a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientInit`] if the HTTP client cannot be built.
    pub fn with_config(config: &NerdGraphConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            graphql: GraphqlClient::new(config)?,
        })
    }

    /// Returns the endpoint URL queries are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.graphql.endpoint()
    }

    /// Runs an NRQL query, or submits it for background execution when
    /// `options.async_query` is set.
    ///
    /// The options are validated before anything else happens; the returned
    /// future performs the request when awaited. The future resolves to the
    /// full body when `options.complete_response` is set and to the extracted
    /// results otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingAccount`] or
    /// [`ValidationError::MissingQuery`] synchronously. Transport failures are
    /// reported by the future as the unmodified [`GraphqlError`].
    pub fn submit_query(
        &self,
        options: &QueryOptions,
    ) -> Result<
        impl Future<Output = Result<NrqlResponse, GraphqlError>> + Send + 'static,
        ValidationError,
    > {
        validate_account(options)?;
        if is_blank(options.query.as_deref()) {
            return Err(ValidationError::MissingQuery);
        }
        Ok(self.call(options))
    }

    /// Callback form of [`submit_query`](Self::submit_query).
    ///
    /// The request runs on the current Tokio runtime and `callback` receives
    /// its outcome. Nothing awaitable is returned.
    ///
    /// # Errors
    ///
    /// Validation errors are returned synchronously and the callback is not
    /// invoked.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime.
    pub fn submit_query_with_callback<F>(
        &self,
        options: &QueryOptions,
        callback: F,
    ) -> Result<(), ValidationError>
    where
        F: FnOnce(Result<NrqlResponse, GraphqlError>) + Send + 'static,
    {
        let pending = self.submit_query(options)?;
        deliver(pending, callback);
        Ok(())
    }

    /// Polls the progress of an async query.
    ///
    /// Sets `options.poll` to `true` before sending, which selects the
    /// progress template. Results are taken from `nrqlQueryProgress`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingAccount`] or
    /// [`ValidationError::MissingQueryId`] synchronously, leaving `options`
    /// untouched. Transport failures are reported by the future.
    pub fn poll_query(
        &self,
        options: &mut QueryOptions,
    ) -> Result<
        impl Future<Output = Result<NrqlResponse, GraphqlError>> + Send + 'static,
        ValidationError,
    > {
        validate_account(options)?;
        if is_blank(options.query_id.as_deref()) {
            return Err(ValidationError::MissingQueryId);
        }
        options.poll = Some(true);
        Ok(self.call(options))
    }

    /// Callback form of [`poll_query`](Self::poll_query).
    ///
    /// # Errors
    ///
    /// Validation errors are returned synchronously and the callback is not
    /// invoked.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime.
    pub fn poll_query_with_callback<F>(
        &self,
        options: &mut QueryOptions,
        callback: F,
    ) -> Result<(), ValidationError>
    where
        F: FnOnce(Result<NrqlResponse, GraphqlError>) + Send + 'static,
    {
        let pending = self.poll_query(options)?;
        deliver(pending, callback);
        Ok(())
    }

    /// Builds the request for validated options and returns the future that sends it.
    fn call(
        &self,
        options: &QueryOptions,
    ) -> impl Future<Output = Result<NrqlResponse, GraphqlError>> + Send + 'static {
        let template = QueryTemplate::select(options);
        let variables = options.variables();
        let complete_response = options.wants_complete_response();
        let graphql = self.graphql.clone();

        tracing::debug!(
            "Sending {:?} NRQL request to {} for account {:?}",
            template,
            graphql.endpoint(),
            options.account
        );

        async move {
            let response = graphql
                .query(template.document(), Some(variables), None)
                .await?;

            if complete_response {
                Ok(NrqlResponse::Complete(response.body))
            } else {
                Ok(NrqlResponse::Results(template.take_results(response.body)))
            }
        }
    }
}

fn validate_account(options: &QueryOptions) -> Result<(), ValidationError> {
    match options.account {
        Some(account) if account > 0 => Ok(()),
        _ => Err(ValidationError::MissingAccount),
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

/// Drives `pending` on the Tokio runtime and hands its output to `callback`.
fn deliver<Fut, F>(pending: Fut, callback: F)
where
    Fut: Future + Send + 'static,
    Fut::Output: Send,
    F: FnOnce(Fut::Output) + Send + 'static,
{
    tokio::spawn(async move {
        callback(pending.await);
    });
}
