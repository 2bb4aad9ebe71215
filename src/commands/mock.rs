//! In-memory [`TodoApi`] for tests

use std::{cell::RefCell, rc::Rc};

use async_trait::async_trait;

use super::TodoApi;
use crate::error::{ApiResult, TodoApiError, TransportError};
use crate::models::{CreateTodoPayload, DeletedTodo, Todo, TodosPage, UpdateTodoPayload};

/// Remote call recorded by [`MockTodoApi`]
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Get(u32),
    Create(CreateTodoPayload),
    Update(u32, UpdateTodoPayload),
    Remove(u32),
}

#[derive(Default)]
struct MockState {
    todos: Vec<Todo>,
    next_id: u32,
    fail_all: bool,
    keep_on_delete: bool,
    calls: Vec<Call>,
}

/// Mimics the remote service: unknown ids fail, created ids count up
/// from a fixed start the way the public demo service does.
#[derive(Clone)]
pub struct MockTodoApi {
    state: Rc<RefCell<MockState>>,
}

impl MockTodoApi {
    pub fn new(todos: Vec<Todo>) -> Self {
        let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self { state: Rc::new(RefCell::new(MockState { todos, next_id, ..Default::default() })) }
    }

    /// Service always answers with the same id for new todos
    pub fn with_fixed_create_id(self, id: u32) -> Self {
        self.state.borrow_mut().next_id = id;
        self
    }

    /// Make every following call fail with a 500
    pub fn set_failing(&self, failing: bool) {
        self.state.borrow_mut().fail_all = failing;
    }

    /// Answer deletes with `isDeleted: false`
    pub fn set_keep_on_delete(&self, keep: bool) {
        self.state.borrow_mut().keep_on_delete = keep;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    fn record(&self, call: Call) -> Result<(), TransportError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(call);
        if state.fail_all {
            return Err(TransportError::Status(500));
        }
        Ok(())
    }

    fn find(&self, id: u32) -> Result<Todo, TransportError> {
        self.state
            .borrow()
            .todos
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(TransportError::Status(404))
    }
}

#[async_trait(?Send)]
impl TodoApi for MockTodoApi {
    async fn list(&self) -> ApiResult<TodosPage> {
        self.record(Call::List).map_err(TodoApiError::Fetch)?;
        let todos = self.state.borrow().todos.clone();
        let total = todos.len() as u32;
        Ok(TodosPage { todos, total, skip: 0, limit: 30 })
    }

    async fn get(&self, id: u32) -> ApiResult<Todo> {
        self.record(Call::Get(id)).map_err(TodoApiError::Fetch)?;
        self.find(id).map_err(TodoApiError::Fetch)
    }

    async fn create(&self, payload: &CreateTodoPayload) -> ApiResult<Todo> {
        self.record(Call::Create(payload.clone())).map_err(TodoApiError::Create)?;
        // Like the public demo service, nothing is persisted
        let id = self.state.borrow().next_id;
        Ok(Todo { id, todo: payload.todo.clone(), completed: payload.completed, user_id: payload.user_id })
    }

    async fn update(&self, id: u32, payload: &UpdateTodoPayload) -> ApiResult<Todo> {
        self.record(Call::Update(id, payload.clone())).map_err(TodoApiError::Update)?;
        let mut todo = self.find(id).map_err(TodoApiError::Update)?;
        if let Some(text) = &payload.todo {
            todo.todo = text.clone();
        }
        if let Some(completed) = payload.completed {
            todo.completed = completed;
        }
        Ok(todo)
    }

    async fn remove(&self, id: u32) -> ApiResult<DeletedTodo> {
        self.record(Call::Remove(id)).map_err(TodoApiError::Delete)?;
        let todo = self.find(id).map_err(TodoApiError::Delete)?;
        let is_deleted = !self.state.borrow().keep_on_delete;
        Ok(DeletedTodo { todo, is_deleted, deleted_on: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_mirrors_service_errors() {
        let api = MockTodoApi::new(vec![Todo { id: 1, todo: "Test".into(), completed: false, user_id: 1 }]);

        assert_eq!(api.get(1).await.unwrap().todo, "Test");
        assert!(matches!(api.get(2).await, Err(TodoApiError::Fetch(TransportError::Status(404)))));

        api.set_failing(true);
        assert!(matches!(api.list().await, Err(TodoApiError::Fetch(TransportError::Status(500)))));
        assert_eq!(api.calls(), vec![Call::Get(1), Call::Get(2), Call::List]);
    }
}
