//! Global Todo State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! the reactive [`TodoSession`]: the coordinator writes through it and the
//! visible list is a memo over three of its fields.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::cache::TodoCache;
use crate::models::{EnrichedTodo, ViewMode};
use crate::overlay::StatusOverlay;
use crate::query::{enrich, StatusCounts};
use crate::session::{MutationStates, TodoSession};

/// Session state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Working list fetched from the service
    pub cache: TodoCache,
    /// Kanban status chosen by the user, per todo id
    pub overlay: StatusOverlay,
    /// Free-text filter
    pub search_query: String,
    pub active_view: ViewMode,
    pub mutations: MutationStates,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

impl TodoSession for TodoStore {
    fn update_cache<R>(&self, f: impl FnOnce(&mut TodoCache) -> R) -> R {
        f(&mut *self.cache().write())
    }

    fn update_overlay<R>(&self, f: impl FnOnce(&mut StatusOverlay) -> R) -> R {
        f(&mut *self.overlay().write())
    }

    fn update_mutations<R>(&self, f: impl FnOnce(&mut MutationStates) -> R) -> R {
        f(&mut *self.mutations().write())
    }
}

// ========================
// Store Helper Functions
// ========================

/// Enriched, filtered todos; recomputed when the list, overlay or query changes
pub fn visible_todos(store: TodoStore) -> Memo<Vec<EnrichedTodo>> {
    Memo::new(move |_| {
        let cache = store.cache().read();
        let overlay = store.overlay().read();
        let query = store.search_query().read();
        enrich(cache.todos(), &*overlay, query.as_str())
    })
}

/// Column totals of the visible todos
pub fn status_counts(todos: Memo<Vec<EnrichedTodo>>) -> Memo<StatusCounts> {
    Memo::new(move |_| todos.with(|todos| StatusCounts::of(todos)))
}

pub fn store_set_search_query(store: &TodoStore, query: String) {
    store.search_query().set(query);
}

pub fn store_set_active_view(store: &TodoStore, view: ViewMode) {
    store.active_view().set(view);
}

pub fn store_is_loading(store: &TodoStore) -> bool {
    store.cache().read().is_loading()
}

pub fn store_is_error(store: &TodoStore) -> bool {
    store.cache().read().is_error()
}
