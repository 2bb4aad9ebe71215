//! Mutation Coordinator
//!
//! Issues create/update/delete against the todo service and applies the
//! confirmed result to the session: working list, status overlay and
//! mutation state. A failed call changes neither the list nor the overlay.
//!
//! Responses for the same id may land out of order; whichever is applied
//! last wins. No version check is made.

use crate::commands::TodoApi;
use crate::config::DEFAULT_USER_ID;
use crate::error::{ActionError, ApiResult, TodoApiError, TransportError};
use crate::models::{
    CreateTodoPayload, DeletedTodo, EnrichedTodo, TaskDraft, Todo, TodoStatus, UpdateTodoPayload,
};
use crate::notify::{MutationKind, Notification, Notifier, Outcome};
use crate::session::TodoSession;

/// Drives remote mutations and keeps the session consistent with them
pub struct MutationCoordinator<A, S, N> {
    api: A,
    session: S,
    notifier: N,
    default_user_id: u32,
}

impl<A: TodoApi, S: TodoSession, N: Notifier> MutationCoordinator<A, S, N> {
    pub fn new(api: A, session: S, notifier: N) -> Self {
        Self { api, session, notifier, default_user_id: DEFAULT_USER_ID }
    }

    /// Owner of todos created through [`Self::save_task`]
    pub fn with_default_user_id(mut self, user_id: u32) -> Self {
        self.default_user_id = user_id;
        self
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    // ========================
    // Query
    // ========================

    /// Refetch the list; the overlay is left alone
    pub async fn refresh(&self) -> ApiResult<()> {
        self.session.update_cache(|cache| cache.begin_loading());
        match self.api.list().await {
            Ok(page) => {
                log::info!("[TODOS] Loaded {} of {} todos", page.todos.len(), page.total);
                self.session.update_cache(|cache| cache.replace(page));
                Ok(())
            }
            Err(e) => {
                log::warn!("[TODOS] {}", e);
                self.session.update_cache(|cache| cache.fail_loading(e.to_string()));
                Err(e)
            }
        }
    }

    // ========================
    // Mutations
    // ========================

    /// Create a todo and put it at the front of the working list
    ///
    /// Ids get reused once an unsaved create is dropped by a refresh, so a
    /// stale overlay entry for the stored id is cleared.
    pub async fn create(&self, payload: CreateTodoPayload) -> ApiResult<Todo> {
        self.begin(MutationKind::Create);
        let result = self.api.create(&payload).await.map(|todo| {
            let stored = self.session.update_cache(|cache| cache.prepend_created(todo));
            self.session.update_overlay(|overlay| overlay.remove(stored.id));
            stored
        });
        self.settle(MutationKind::Create, &result);
        result
    }

    /// Update a todo; a `completed` change re-syncs the overlay on success
    pub async fn update(&self, id: u32, payload: UpdateTodoPayload) -> ApiResult<Todo> {
        self.begin(MutationKind::Update);
        let result = self.api.update(id, &payload).await;
        if let Ok(updated) = &result {
            if !self.session.update_cache(|cache| cache.merge_updated(id, updated)) {
                log::debug!("[TODOS] Updated todo {} is not in the working list", id);
            }
            if let Some(completed) = payload.completed {
                let status = TodoStatus::from_completed(completed);
                self.session.update_overlay(|overlay| overlay.set(id, status));
            }
        }
        self.settle(MutationKind::Update, &result);
        result
    }

    /// Delete a todo and drop it, with its overlay entry, from the session
    pub async fn delete(&self, id: u32) -> ApiResult<DeletedTodo> {
        self.begin(MutationKind::Delete);
        let result = self.api.remove(id).await.and_then(|deleted| {
            if deleted.is_deleted {
                Ok(deleted)
            } else {
                Err(TodoApiError::Delete(TransportError::NotDeleted(id)))
            }
        });
        if result.is_ok() {
            self.session.update_cache(|cache| cache.remove(id));
            self.session.update_overlay(|overlay| overlay.remove(id));
        }
        self.settle(MutationKind::Delete, &result);
        result
    }

    // ========================
    // Task Actions
    // ========================

    /// Create (`editing == None`) or rename a task from dialog input
    ///
    /// Blank or overlong text is rejected before any remote call.
    pub async fn save_task(&self, editing: Option<u32>, text: &str) -> Result<Todo, ActionError> {
        let draft = TaskDraft::parse(text)?;
        let todo = match editing {
            Some(id) => self.update(id, UpdateTodoPayload::text(draft.into_inner())).await?,
            None => {
                let payload = CreateTodoPayload {
                    todo: draft.into_inner(),
                    completed: false,
                    user_id: self.default_user_id,
                };
                self.create(payload).await?
            }
        };
        Ok(todo)
    }

    /// Flip the completion flag of a displayed todo
    pub async fn toggle_complete(&self, todo: &EnrichedTodo) -> ApiResult<Todo> {
        self.update(todo.id(), UpdateTodoPayload::completed(!todo.completed())).await
    }

    /// Reclassify locally; the service is not told
    pub fn move_to(&self, id: u32, status: TodoStatus) {
        log::debug!("[TODOS] Moving {} to {}", id, status.as_str());
        self.session.update_overlay(|overlay| overlay.set(id, status));
    }

    fn begin(&self, kind: MutationKind) {
        self.session.update_mutations(|states| states.get_mut(kind).begin());
    }

    fn settle<T>(&self, kind: MutationKind, result: &ApiResult<T>) {
        let notification = match result {
            Ok(_) => Notification::success(kind),
            Err(e) => {
                log::warn!("[TODOS] {}", e);
                Notification::failure(kind, e.to_string())
            }
        };
        let outcome = if result.is_ok() { Outcome::Succeeded } else { Outcome::Failed };
        self.session.update_mutations(|states| states.get_mut(kind).settle(outcome));
        self.notifier.notify(notification);
    }
}
