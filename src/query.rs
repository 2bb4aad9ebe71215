//! Enrichment & Query Engine
//!
//! Pure functions turning the raw todo list, the status overlay and the
//! search term into the view-ready collection. Recomputed from scratch on
//! every input change; the reactive store memoizes the result.

use crate::models::{EnrichedTodo, Todo, TodoStatus};
use crate::overlay::StatusOverlay;

/// Display status of one todo
///
/// An overlay entry wins; otherwise the server completion flag decides.
/// A `Done` overlay does not imply `completed`: the overlay drives display,
/// `completed` is what the server knows.
pub fn derive_status(todo: &Todo, overlay: &StatusOverlay) -> TodoStatus {
    overlay.get(todo.id).unwrap_or_else(|| TodoStatus::from_completed(todo.completed))
}

/// Merge todos with the overlay and filter by search term, keeping server order
///
/// The search is a case-insensitive substring match on the todo text only;
/// an empty term matches everything.
pub fn enrich(todos: &[Todo], overlay: &StatusOverlay, query: &str) -> Vec<EnrichedTodo> {
    let needle = query.to_lowercase();
    todos
        .iter()
        .filter(|todo| needle.is_empty() || todo.todo.to_lowercase().contains(&needle))
        .map(|todo| EnrichedTodo { todo: todo.clone(), status: derive_status(todo, overlay) })
        .collect()
}

/// Kanban columns in [`TodoStatus::ALL`] order, each keeping input order
pub fn group_by_status(todos: &[EnrichedTodo]) -> [(TodoStatus, Vec<EnrichedTodo>); 3] {
    TodoStatus::ALL.map(|status| {
        let column = todos.iter().filter(|t| t.status == status).cloned().collect();
        (status, column)
    })
}

/// Per-column totals for the board headers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
}

impl StatusCounts {
    pub fn of(todos: &[EnrichedTodo]) -> Self {
        todos.iter().fold(Self::default(), |mut counts, t| {
            match t.status {
                TodoStatus::Todo => counts.todo += 1,
                TodoStatus::InProgress => counts.in_progress += 1,
                TodoStatus::Done => counts.done += 1,
            }
            counts
        })
    }

    pub fn get(&self, status: TodoStatus) -> usize {
        match status {
            TodoStatus::Todo => self.todo,
            TodoStatus::InProgress => self.in_progress,
            TodoStatus::Done => self.done,
        }
    }

    pub fn total(&self) -> usize {
        self.todo + self.in_progress + self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn make_todo(id: u32, text: &str, completed: bool) -> Todo {
        Todo { id, todo: text.to_string(), completed, user_id: 1 }
    }

    fn sample() -> Vec<Todo> {
        vec![
            make_todo(1, "Do something nice for someone you care about", false),
            make_todo(2, "Memorize a poem", true),
            make_todo(3, "Watch a classic movie", false),
            make_todo(4, "Buy MILK and eggs", false),
        ]
    }

    #[test]
    fn test_status_from_completed() {
        let overlay = StatusOverlay::new();
        let enriched = enrich(&sample(), &overlay, "");
        let statuses: Vec<_> = enriched.iter().map(|t| t.status).collect();
        assert_eq!(
            statuses,
            vec![TodoStatus::Todo, TodoStatus::Done, TodoStatus::Todo, TodoStatus::Todo]
        );
    }

    #[test]
    fn test_overlay_wins_over_completed() {
        let overlay: StatusOverlay =
            [(2, TodoStatus::InProgress), (3, TodoStatus::Done)].into_iter().collect();
        let enriched = enrich(&sample(), &overlay, "");

        assert_eq!(enriched[1].status, TodoStatus::InProgress);
        assert!(enriched[1].completed());
        // done column without the completion flag
        assert_eq!(enriched[2].status, TodoStatus::Done);
        assert!(!enriched[2].completed());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let overlay = StatusOverlay::new();
        let ids: Vec<_> = enrich(&sample(), &overlay, "milk").iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec![4]);

        let ids: Vec<_> = enrich(&sample(), &overlay, "A ").iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_search_without_match() {
        assert!(enrich(&sample(), &StatusOverlay::new(), "zebra").is_empty());
    }

    #[test]
    fn test_orphaned_overlay_entries_are_inert() {
        let overlay: StatusOverlay = [(99, TodoStatus::Done)].into_iter().collect();
        let enriched = enrich(&sample(), &overlay, "");
        assert_eq!(enriched.len(), 4);
        assert!(enriched.iter().all(|t| t.id() != 99));
    }

    #[test]
    fn test_group_by_status_keeps_order() {
        let overlay: StatusOverlay = [(3, TodoStatus::InProgress)].into_iter().collect();
        let enriched = enrich(&sample(), &overlay, "");
        let [(todo, todo_col), (progress, progress_col), (done, done_col)] = group_by_status(&enriched);

        assert_eq!(todo, TodoStatus::Todo);
        assert_eq!(todo_col.iter().map(|t| t.id()).collect::<Vec<_>>(), vec![1, 4]);
        assert_eq!(progress, TodoStatus::InProgress);
        assert_eq!(progress_col.iter().map(|t| t.id()).collect::<Vec<_>>(), vec![3]);
        assert_eq!(done, TodoStatus::Done);
        assert_eq!(done_col.iter().map(|t| t.id()).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_status_counts() {
        let overlay: StatusOverlay = [(1, TodoStatus::InProgress)].into_iter().collect();
        let counts = StatusCounts::of(&enrich(&sample(), &overlay, ""));
        assert_eq!(counts, StatusCounts { todo: 2, in_progress: 1, done: 1 });
        assert_eq!(counts.get(TodoStatus::Todo), 2);
        assert_eq!(counts.total(), 4);
    }

    fn status_strategy() -> impl Strategy<Value = TodoStatus> {
        prop_oneof![Just(TodoStatus::Todo), Just(TodoStatus::InProgress), Just(TodoStatus::Done)]
    }

    fn todos_strategy() -> impl Strategy<Value = Vec<Todo>> {
        prop::collection::vec((0u32..40, "[a-zA-Z ]{0,12}", any::<bool>()), 0..24)
            .prop_map(|rows| rows.into_iter().map(|(id, text, done)| make_todo(id, &text, done)).collect::<Vec<_>>())
    }

    fn overlay_strategy() -> impl Strategy<Value = StatusOverlay> {
        prop::collection::hash_map(0u32..40, status_strategy(), 0..16)
            .prop_map(|entries| entries.into_iter().collect::<StatusOverlay>())
    }

    proptest! {
        #[test]
        fn prop_empty_query_keeps_every_todo(todos in todos_strategy(), overlay in overlay_strategy()) {
            let enriched = enrich(&todos, &overlay, "");
            prop_assert_eq!(enriched.len(), todos.len());
            for (raw, item) in todos.iter().zip(&enriched) {
                prop_assert_eq!(&item.todo, raw);
                let expected = match overlay.get(raw.id) {
                    Some(status) => status,
                    None if raw.completed => TodoStatus::Done,
                    None => TodoStatus::Todo,
                };
                prop_assert_eq!(item.status, expected);
            }
        }

        #[test]
        fn prop_query_is_ordered_subsequence(
            todos in todos_strategy(),
            overlay in overlay_strategy(),
            query in "[a-zA-Z ]{0,3}"
        ) {
            let all = enrich(&todos, &overlay, "");
            let expected: Vec<_> = all
                .into_iter()
                .filter(|t| t.todo.todo.to_lowercase().contains(&query.to_lowercase()))
                .collect();
            prop_assert_eq!(enrich(&todos, &overlay, &query), expected);
        }

        #[test]
        fn prop_repeated_overlay_write_is_idempotent(
            todos in todos_strategy(),
            overlay in overlay_strategy(),
            id in 0u32..40,
            status in status_strategy()
        ) {
            let mut once = overlay.clone();
            once.set(id, status);
            let mut twice = overlay;
            twice.set(id, status);
            twice.set(id, status);
            prop_assert_eq!(enrich(&todos, &once, ""), enrich(&todos, &twice, ""));
        }
    }
}
