//! Error Types
//!
//! One error kind per remote operation, each wrapping the transport-level
//! cause. Network failures and non-2xx responses are not told apart by
//! callers; both surface as the operation's kind.

use thiserror::Error;

/// Why a single HTTP exchange with the todo service failed
#[derive(Debug, Error)]
pub enum TransportError {
    /// Request could not be sent or the connection failed
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Service answered with a non-success status code
    #[error("unexpected status {0}")]
    Status(u16),

    /// Response body was not the expected JSON shape
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Delete answered 2xx but reported the todo as not deleted
    #[error("todo {0} was not deleted")]
    NotDeleted(u32),
}

/// Todo client errors, one variant per operation
#[derive(Debug, Error)]
pub enum TodoApiError {
    #[error("failed to fetch todos: {0}")]
    Fetch(#[source] TransportError),

    #[error("failed to create todo: {0}")]
    Create(#[source] TransportError),

    #[error("failed to update todo: {0}")]
    Update(#[source] TransportError),

    #[error("failed to delete todo: {0}")]
    Delete(#[source] TransportError),
}

impl TodoApiError {
    pub fn transport(&self) -> &TransportError {
        match self {
            TodoApiError::Fetch(e)
            | TodoApiError::Create(e)
            | TodoApiError::Update(e)
            | TodoApiError::Delete(e) => e,
        }
    }
}

pub type ApiResult<T> = Result<T, TodoApiError>;

/// Rejected task text, caught before any remote call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("task text is empty")]
    Empty,

    #[error("task text is {len} characters, limit is {max}")]
    TooLong { len: usize, max: usize },
}

/// Failure of a user-triggered task action
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] TodoApiError),
}
