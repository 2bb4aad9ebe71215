//! Frontend Models
//!
//! Data structures matching the remote todo service, plus the
//! client-only kanban status that the service knows nothing about.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Maximum length of a todo text, in characters
pub const MAX_TODO_LEN: usize = 200;

/// Todo record (matches the remote service)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub todo: String,
    pub completed: bool,
    #[serde(rename = "userId")]
    pub user_id: u32,
}

/// Kanban column a todo is displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TodoStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TodoStatus {
    /// Column order on the board
    pub const ALL: [TodoStatus; 3] = [TodoStatus::Todo, TodoStatus::InProgress, TodoStatus::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Todo => "todo",
            TodoStatus::InProgress => "in-progress",
            TodoStatus::Done => "done",
        }
    }

    /// Status implied by the server-side completion flag
    pub fn from_completed(completed: bool) -> Self {
        if completed {
            TodoStatus::Done
        } else {
            TodoStatus::Todo
        }
    }
}

/// Todo with its derived display status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedTodo {
    #[serde(flatten)]
    pub todo: Todo,
    pub status: TodoStatus,
}

impl EnrichedTodo {
    pub fn id(&self) -> u32 {
        self.todo.id
    }

    pub fn text(&self) -> &str {
        &self.todo.todo
    }

    pub fn completed(&self) -> bool {
        self.todo.completed
    }
}

/// One page of todos as returned by `GET /todos`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TodosPage {
    pub todos: Vec<Todo>,
    pub total: u32,
    pub skip: u32,
    pub limit: u32,
}

/// Body of `POST /todos/add`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTodoPayload {
    pub todo: String,
    pub completed: bool,
    #[serde(rename = "userId")]
    pub user_id: u32,
}

/// Body of `PUT /todos/{id}`; absent fields are left out of the request
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateTodoPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl UpdateTodoPayload {
    pub fn text(todo: impl Into<String>) -> Self {
        Self { todo: Some(todo.into()), completed: None }
    }

    pub fn completed(completed: bool) -> Self {
        Self { todo: None, completed: Some(completed) }
    }
}

/// Response of `DELETE /todos/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedTodo {
    #[serde(flatten)]
    pub todo: Todo,
    #[serde(rename = "isDeleted")]
    pub is_deleted: bool,
    #[serde(rename = "deletedOn", default, skip_serializing_if = "Option::is_none")]
    pub deleted_on: Option<String>,
}

/// Which view renders the todo collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Kanban,
    List,
}

/// Validated text of a task being created or edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft(String);

impl TaskDraft {
    /// Trim and validate user input
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty);
        }
        let len = trimmed.chars().count();
        if len > MAX_TODO_LEN {
            return Err(ValidationError::TooLong { len, max: MAX_TODO_LEN });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
