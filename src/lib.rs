//! TaskFlow Frontend Core
//!
//! Headless state layer for the TaskFlow kanban/list UI: typed client for
//! the remote todo service, session-only status overlay, enrichment and
//! search, and the mutation coordinator that keeps them consistent. View
//! components call [`provide_todos`] once and [`use_todos`] wherever they
//! render or mutate todos.

pub mod cache;
pub mod commands;
pub mod config;
pub mod context;
pub mod coordinator;
pub mod error;
pub mod models;
pub mod notify;
pub mod overlay;
pub mod query;
pub mod session;
pub mod store;

pub use config::ApiConfig;
pub use context::{provide_todos, use_todos, TodoContext};
pub use error::{ActionError, TodoApiError, TransportError, ValidationError};
pub use models::{EnrichedTodo, Todo, TodoStatus, ViewMode};

/// Install the panic hook and browser console logging
#[cfg(target_arch = "wasm32")]
pub fn init() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    })
    .ok();
}
