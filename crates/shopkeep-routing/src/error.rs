use shopkeep_core::Error as CoreError;
use std::result::Result as StdResult;
use thiserror::Error;

/// Result type for routing operations.
pub type Result<T> = StdResult<T, RoutingError>;

/// Errors raised while routing a query.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// The query was empty or whitespace only.
    ///
    /// Never escapes [`IntentRouter::answer`](crate::IntentRouter::answer); it
    /// becomes the prompt-for-input message.
    #[error("Query is empty")]
    EmptyQuery,

    /// Loading the catalog or configuration failed.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}
