//! Session State
//!
//! The mutable state a session owns: working list, status overlay, search
//! term and per-kind mutation state. [`TodoSession`] is the seam the
//! coordinator writes through, so the same coordinator drives either the
//! reactive store or the plain [`LocalSession`].

use std::{cell::RefCell, rc::Rc};

use crate::cache::TodoCache;
use crate::models::EnrichedTodo;
use crate::notify::{MutationKind, Outcome};
use crate::overlay::StatusOverlay;
use crate::query::enrich;

/// Whether any mutation of a kind is running
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MutationPhase {
    #[default]
    Idle,
    InFlight,
}

/// State machine of one mutation kind
///
/// Goes `Idle -> InFlight -> settled -> Idle`. Overlapping calls of the same
/// kind are counted, not deduplicated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MutationState {
    in_flight: u32,
    last_outcome: Option<Outcome>,
}

impl MutationState {
    pub fn begin(&mut self) {
        self.in_flight += 1;
    }

    pub fn settle(&mut self, outcome: Outcome) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.last_outcome = Some(outcome);
    }

    pub fn phase(&self) -> MutationPhase {
        if self.in_flight > 0 {
            MutationPhase::InFlight
        } else {
            MutationPhase::Idle
        }
    }

    pub fn is_pending(&self) -> bool {
        self.phase() == MutationPhase::InFlight
    }

    pub fn in_flight(&self) -> u32 {
        self.in_flight
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }
}

/// One [`MutationState`] per kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MutationStates {
    pub create: MutationState,
    pub update: MutationState,
    pub delete: MutationState,
}

impl MutationStates {
    pub fn get(&self, kind: MutationKind) -> &MutationState {
        match kind {
            MutationKind::Create => &self.create,
            MutationKind::Update => &self.update,
            MutationKind::Delete => &self.delete,
        }
    }

    pub fn get_mut(&mut self, kind: MutationKind) -> &mut MutationState {
        match kind {
            MutationKind::Create => &mut self.create,
            MutationKind::Update => &mut self.update,
            MutationKind::Delete => &mut self.delete,
        }
    }

    pub fn is_pending(&self, kind: MutationKind) -> bool {
        self.get(kind).is_pending()
    }
}

/// Write access to session state for the mutation coordinator
///
/// Each call is one synchronous step of a single-threaded event loop;
/// implementations never hold a borrow across an await.
pub trait TodoSession {
    fn update_cache<R>(&self, f: impl FnOnce(&mut TodoCache) -> R) -> R;

    fn update_overlay<R>(&self, f: impl FnOnce(&mut StatusOverlay) -> R) -> R;

    fn update_mutations<R>(&self, f: impl FnOnce(&mut MutationStates) -> R) -> R;
}

/// Snapshot of everything a [`LocalSession`] holds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionData {
    pub cache: TodoCache,
    pub overlay: StatusOverlay,
    pub mutations: MutationStates,
    pub search_query: String,
}

/// Non-reactive session state, for hosts without a Leptos runtime
#[derive(Debug, Clone, Default)]
pub struct LocalSession {
    inner: Rc<RefCell<SessionData>>,
}

impl LocalSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> SessionData {
        self.inner.borrow().clone()
    }

    pub fn set_search_query(&self, query: impl Into<String>) {
        self.inner.borrow_mut().search_query = query.into();
    }

    /// Enriched, search-filtered todos
    pub fn visible_todos(&self) -> Vec<EnrichedTodo> {
        let data = self.inner.borrow();
        enrich(data.cache.todos(), &data.overlay, &data.search_query)
    }
}

impl TodoSession for LocalSession {
    fn update_cache<R>(&self, f: impl FnOnce(&mut TodoCache) -> R) -> R {
        f(&mut self.inner.borrow_mut().cache)
    }

    fn update_overlay<R>(&self, f: impl FnOnce(&mut StatusOverlay) -> R) -> R {
        f(&mut self.inner.borrow_mut().overlay)
    }

    fn update_mutations<R>(&self, f: impl FnOnce(&mut MutationStates) -> R) -> R {
        f(&mut self.inner.borrow_mut().mutations)
    }
}
