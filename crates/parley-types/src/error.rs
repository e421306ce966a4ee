use thiserror::Error;

/// Errors from repository operations (used by trait definitions in parley-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error: {0}")]
    Connection(String),

    #[error("query error: {0}")]
    Query(String),
}

/// Errors surfaced by the relay to the HTTP layer.
///
/// Provider failures are NOT represented here: the relay converts them into
/// user-visible diagnostic replies so a broken upstream never breaks the
/// chat endpoint.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("no message provided")]
    EmptyMessage,

    #[error("persistence is not enabled")]
    PersistenceDisabled,

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }

    #[test]
    fn test_relay_error_wraps_repository_error() {
        let err = RelayError::from(RepositoryError::Connection("refused".to_string()));
        assert!(err.to_string().contains("refused"));
    }

    #[test]
    fn test_empty_message_display() {
        assert_eq!(RelayError::EmptyMessage.to_string(), "no message provided");
    }
}
