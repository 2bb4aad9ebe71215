//! Todo Cache
//!
//! The working list: the last fetched page of todos, patched in place by
//! confirmed mutations so the UI does not wait for the next refetch.

use crate::models::{Todo, TodosPage};

/// Load status of the todo list query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    Ready,
    /// Last fetch failed; previously loaded todos are kept
    Failed(String),
}

/// Working copy of the remote todo list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoCache {
    todos: Vec<Todo>,
    total: u32,
    load_state: LoadState,
}

impl TodoCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: u32) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    pub fn is_error(&self) -> bool {
        matches!(self.load_state, LoadState::Failed(_))
    }

    // ========================
    // Query Lifecycle
    // ========================

    pub fn begin_loading(&mut self) {
        self.load_state = LoadState::Loading;
    }

    /// Replace everything with an authoritative page
    pub fn replace(&mut self, page: TodosPage) {
        self.todos = page.todos;
        self.total = page.total;
        self.load_state = LoadState::Ready;
    }

    pub fn fail_loading(&mut self, reason: impl Into<String>) {
        self.load_state = LoadState::Failed(reason.into());
    }

    // ========================
    // Mutation Patches
    // ========================

    /// Put a newly created todo in front of the list, returning the stored copy
    ///
    /// The service id is kept unless another entry already uses it; then a
    /// placeholder one above the largest known id is assigned. Placeholders
    /// are only locally unique and disappear with the next `replace`.
    pub fn prepend_created(&mut self, mut todo: Todo) -> Todo {
        if self.contains(todo.id) {
            let placeholder = self.todos.iter().map(|t| t.id).max().unwrap_or(0).saturating_add(1);
            log::debug!("[CACHE] id {} already listed, using placeholder {}", todo.id, placeholder);
            todo.id = placeholder;
        }
        self.todos.insert(0, todo.clone());
        self.total = self.total.saturating_add(1);
        todo
    }

    /// Merge returned fields into the entry with `id`; false if not listed
    pub fn merge_updated(&mut self, id: u32, updated: &Todo) -> bool {
        match self.todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.todo = updated.todo.clone();
                todo.completed = updated.completed;
                todo.user_id = updated.user_id;
                true
            }
            None => false,
        }
    }

    /// Drop the entry with `id`; false if not listed
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        let removed = self.todos.len() != before;
        if removed {
            self.total = self.total.saturating_sub(1);
        }
        removed
    }
}
