//! Todo Service Commands
//!
//! Typed bindings to the remote todo service. Components and the mutation
//! coordinator talk to [`TodoApi`], never to HTTP directly.

mod todo;

#[cfg(test)]
mod mock;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{CreateTodoPayload, DeletedTodo, Todo, TodosPage, UpdateTodoPayload};

pub use todo::HttpTodoApi;

#[cfg(test)]
pub use mock::{Call, MockTodoApi};

/// Remote todo service contract
///
/// One call per remote capability. No retries and no timeouts beyond the
/// transport defaults. Futures are not `Send`: the browser runs everything
/// on one event loop.
#[async_trait(?Send)]
pub trait TodoApi {
    /// Fetch a single bounded page of todos, returned as-is
    async fn list(&self) -> ApiResult<TodosPage>;

    /// Fetch one todo by id
    async fn get(&self, id: u32) -> ApiResult<Todo>;

    /// Create a todo; the service assigns the id
    async fn create(&self, payload: &CreateTodoPayload) -> ApiResult<Todo>;

    /// Partially update a todo; an unknown id is an error
    async fn update(&self, id: u32, payload: &UpdateTodoPayload) -> ApiResult<Todo>;

    /// Delete a todo
    async fn remove(&self, id: u32) -> ApiResult<DeletedTodo>;
}
