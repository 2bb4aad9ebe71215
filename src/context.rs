//! Application Context
//!
//! Wires store, HTTP client and coordinator together and hands view
//! components one `Copy` handle via the Leptos Context API. Actions spawn
//! the async mutation with `spawn_local` and return immediately; results
//! arrive through the store and the toast queue.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands::HttpTodoApi;
use crate::config::ApiConfig;
use crate::coordinator::MutationCoordinator;
use crate::error::ValidationError;
use crate::models::{CreateTodoPayload, EnrichedTodo, TaskDraft, TodoStatus, UpdateTodoPayload, ViewMode};
use crate::notify::{LogNotifier, MutationKind, Notification, Notifier};
use crate::query::StatusCounts;
use crate::store::{
    status_counts, store_is_error, store_is_loading, store_set_active_view, store_set_search_query,
    visible_todos, TodoState, TodoStateStoreFields, TodoStore,
};

/// Coordinator as wired in the browser
pub type TodoCoordinator = MutationCoordinator<HttpTodoApi, TodoStore, ToastNotifier>;

/// Queue of notifications waiting to be shown as toasts
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    pub toasts: RwSignal<Vec<Notification>>,
}

impl ToastNotifier {
    pub fn new() -> Self {
        Self { toasts: RwSignal::new(Vec::new()) }
    }

    /// Remove the toast at `index` once shown
    pub fn dismiss(&self, index: usize) {
        self.toasts.update(|toasts| {
            if index < toasts.len() {
                toasts.remove(index);
            }
        });
    }
}

impl Default for ToastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        LogNotifier.notify(notification.clone());
        self.toasts.update(|toasts| toasts.push(notification));
    }
}

/// Todo state and actions provided via context
#[derive(Clone, Copy)]
pub struct TodoContext {
    pub store: TodoStore,
    pub toasts: ToastNotifier,
    /// Enriched, search-filtered todos for the board and the list
    pub todos: Memo<Vec<EnrichedTodo>>,
    pub counts: Memo<StatusCounts>,
    coordinator: StoredValue<Rc<TodoCoordinator>, LocalStorage>,
}

impl TodoContext {
    pub fn new(config: ApiConfig) -> Self {
        let store = Store::new(TodoState::default());
        let toasts = ToastNotifier::new();
        let user_id = config.default_user_id;
        let coordinator = MutationCoordinator::new(HttpTodoApi::new(config), store, toasts)
            .with_default_user_id(user_id);
        let todos = visible_todos(store);
        Self {
            store,
            toasts,
            todos,
            counts: status_counts(todos),
            coordinator: StoredValue::new_local(Rc::new(coordinator)),
        }
    }

    fn coordinator(&self) -> Rc<TodoCoordinator> {
        self.coordinator.get_value()
    }

    // ========================
    // Queries
    // ========================

    /// Refetch the todo list
    pub fn refresh(&self) {
        let coordinator = self.coordinator();
        spawn_local(async move {
            if let Err(e) = coordinator.refresh().await {
                log::debug!("[TODOS] Refresh failed, list shows error state: {}", e);
            }
        });
    }

    pub fn is_loading(&self) -> bool {
        store_is_loading(&self.store)
    }

    pub fn is_error(&self) -> bool {
        store_is_error(&self.store)
    }

    /// Whether a mutation of `kind` is running; views disable their trigger
    pub fn is_pending(&self, kind: MutationKind) -> bool {
        self.store.mutations().read().is_pending(kind)
    }

    pub fn active_view(&self) -> ViewMode {
        self.store.active_view().get()
    }

    pub fn set_active_view(&self, view: ViewMode) {
        store_set_active_view(&self.store, view);
    }

    pub fn set_search_query(&self, query: String) {
        store_set_search_query(&self.store, query);
    }

    // ========================
    // Mutations
    // ========================

    pub fn create_todo(&self, payload: CreateTodoPayload) {
        let coordinator = self.coordinator();
        spawn_local(async move {
            if let Err(e) = coordinator.create(payload).await {
                log::debug!("[TODOS] Create reported via toast: {}", e);
            }
        });
    }

    pub fn update_todo(&self, id: u32, payload: UpdateTodoPayload) {
        let coordinator = self.coordinator();
        spawn_local(async move {
            if let Err(e) = coordinator.update(id, payload).await {
                log::debug!("[TODOS] Update of {} reported via toast: {}", id, e);
            }
        });
    }

    pub fn delete_todo(&self, id: u32) {
        let coordinator = self.coordinator();
        spawn_local(async move {
            if let Err(e) = coordinator.delete(id).await {
                log::debug!("[TODOS] Delete of {} reported via toast: {}", id, e);
            }
        });
    }

    /// Submit the task dialog; invalid text is reported back synchronously
    pub fn save_task(&self, editing: Option<u32>, text: &str) -> Result<(), ValidationError> {
        let draft = TaskDraft::parse(text)?;
        let coordinator = self.coordinator();
        spawn_local(async move {
            if let Err(e) = coordinator.save_task(editing, draft.as_str()).await {
                log::debug!("[TODOS] Save reported via toast: {}", e);
            }
        });
        Ok(())
    }

    pub fn toggle_complete(&self, todo: EnrichedTodo) {
        let coordinator = self.coordinator();
        spawn_local(async move {
            if let Err(e) = coordinator.toggle_complete(&todo).await {
                log::debug!("[TODOS] Toggle of {} reported via toast: {}", todo.id(), e);
            }
        });
    }

    /// Drag or "move to" menu: local reclassification only
    pub fn move_to(&self, id: u32, status: TodoStatus) {
        self.coordinator().move_to(id, status);
    }
}

/// Create the todo context, provide it and the store, and start the first fetch
pub fn provide_todos(config: ApiConfig) -> TodoContext {
    let ctx = TodoContext::new(config);
    provide_context(ctx.store);
    provide_context(ctx);
    ctx.refresh();
    ctx
}

/// Get the todo context
pub fn use_todos() -> TodoContext {
    expect_context::<TodoContext>()
}
