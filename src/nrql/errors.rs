//! NRQL error types.
//!
//! [`ValidationError`] is returned synchronously, before any request is
//! built. Transport failures arrive later through the returned future or the
//! callback as a [`GraphqlError`]. [`NrqlError`] joins the two for callers
//! that want a single `?`-able type.

use crate::clients::graphql::GraphqlError;
use thiserror::Error;

/// Options rejected before any request is sent.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// No account ID was given.
    #[error("Missing account: provide a New Relic account ID.")]
    MissingAccount,

    /// No NRQL query was given.
    #[error("Missing query: provide an NRQL query.")]
    MissingQuery,

    /// No async query ID was given for a poll.
    #[error("Missing query ID: provide the query ID returned by an async query.")]
    MissingQueryId,
}

/// Any failure of an NRQL operation.
///
/// # Example
///
/// ```rust,ignore
/// use nerdgraph::{NrqlClient, NrqlError, NrqlResponse, QueryOptions};
///
/// async fn count(client: &NrqlClient) -> Result<NrqlResponse, NrqlError> {
///     let options = QueryOptions::nrql(42, "SELECT count(*) FROM Transaction");
///     Ok(client.submit_query(&options)?.await?)
/// }
/// ```
#[derive(Debug, Error)]
pub enum NrqlError {
    /// The options were rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request failed in transport.
    #[error(transparent)]
    Graphql(#[from] GraphqlError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_name_the_missing_field() {
        assert!(ValidationError::MissingAccount
            .to_string()
            .contains("account"));
        assert!(ValidationError::MissingQuery.to_string().contains("query"));
        assert!(ValidationError::MissingQueryId
            .to_string()
            .contains("query ID"));
    }

    #[test]
    fn test_nrql_error_from_validation() {
        let error: NrqlError = ValidationError::MissingQuery.into();
        assert!(matches!(
            error,
            NrqlError::Validation(ValidationError::MissingQuery)
        ));
        assert_eq!(error.to_string(), ValidationError::MissingQuery.to_string());
    }

    #[test]
    fn test_error_implements_std_error() {
        let _: &dyn std::error::Error = &ValidationError::MissingAccount;
        let _: &dyn std::error::Error = &NrqlError::Validation(ValidationError::MissingAccount);
    }
}
