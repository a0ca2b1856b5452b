use uuid::Uuid;

use crate::{Action, IdSource, RandomIds, Task};

/// Which end of the list newly created tasks land on.
///
/// The default is `Append` (new tasks at the end). `Prepend` is the other
/// policy some task list frontends want; it only changes where `Create`
/// inserts, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertOrder {
    #[default]
    Append,
    Prepend,
}

/// The task list reducer.
///
/// Holds policy only — an [`IdSource`] for fresh ids and the [`InsertOrder`]
/// for creation. The list itself is passed in and handed back on every
/// [`Store::apply`] call, so callers own the current state and the reducer
/// stays trivially testable.
#[derive(Debug, Clone)]
pub struct Store<I = RandomIds> {
    ids: I,
    order: InsertOrder,
}

impl Store<RandomIds> {
    pub fn new() -> Self {
        Self::with_ids(RandomIds)
    }
}

impl Default for Store<RandomIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdSource> Store<I> {
    pub fn with_ids(ids: I) -> Self {
        Self {
            ids,
            order: InsertOrder::default(),
        }
    }

    pub fn insert_order(mut self, order: InsertOrder) -> Self {
        self.order = order;
        self
    }

    /// Computes the next list state. Total for every action: a missing id or
    /// a blank title leaves the list unchanged. Edited entries are newly
    /// constructed `Task` values; untouched entries carry over as-is.
    pub fn apply(&mut self, tasks: &[Task], action: Action) -> Vec<Task> {
        match action {
            Action::Create { title, details } => {
                if title.trim().is_empty() {
                    return tasks.to_vec();
                }
                let task = Task::new(self.ids.next_id(), title, details);
                let mut next = Vec::with_capacity(tasks.len() + 1);
                match self.order {
                    InsertOrder::Append => {
                        next.extend_from_slice(tasks);
                        next.push(task);
                    }
                    InsertOrder::Prepend => {
                        next.push(task);
                        next.extend_from_slice(tasks);
                    }
                }
                next
            }
            Action::EditTitle { id, title } => {
                if title.trim().is_empty() {
                    return tasks.to_vec();
                }
                replace(tasks, id, |prev| Task {
                    title: title.clone(),
                    ..prev.clone()
                })
            }
            Action::EditDetails { id, details } => replace(tasks, id, |prev| Task {
                details: details.clone(),
                ..prev.clone()
            }),
            Action::Check { id, complete } => replace(tasks, id, |prev| Task {
                complete,
                ..prev.clone()
            }),
            Action::Delete { id } => tasks.iter().filter(|t| t.id != id).cloned().collect(),
            Action::ClearCompleted => tasks.iter().filter(|t| !t.complete).cloned().collect(),
            Action::Clear => Vec::new(),
        }
    }
}

fn replace(tasks: &[Task], id: Uuid, make: impl Fn(&Task) -> Task) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| if task.id == id { make(task) } else { task.clone() })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    use super::*;
    use crate::SequentialIds;

    fn store() -> Store<SequentialIds> {
        Store::with_ids(SequentialIds::default())
    }

    fn create(title: &str) -> Action {
        Action::Create {
            title: title.into(),
            details: String::new(),
        }
    }

    fn seeded(store: &mut Store<SequentialIds>, titles: &[&str]) -> Vec<Task> {
        let mut tasks = Vec::new();
        for title in titles {
            tasks = store.apply(&tasks, create(title));
        }
        tasks
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn create_appends_by_default() {
        let mut store = store();
        let tasks = seeded(&mut store, &["first", "second", "third"]);
        assert_eq!(titles(&tasks), ["first", "second", "third"]);
    }

    #[test]
    fn create_prepends_when_configured() {
        let mut store = store().insert_order(InsertOrder::Prepend);
        let tasks = seeded(&mut store, &["first", "second", "third"]);
        assert_eq!(titles(&tasks), ["third", "second", "first"]);
    }

    #[test]
    fn create_starts_tasks_incomplete() {
        let mut store = store();
        let tasks = store.apply(
            &[],
            Action::Create {
                title: "Buy milk".into(),
                details: "two liters".into(),
            },
        );
        assert_eq!(tasks.len(), 1);
        assert!(!tasks[0].complete);
        assert_eq!(tasks[0].details, "two liters");
    }

    #[test]
    fn create_rejects_blank_titles() {
        let mut store = store();
        let tasks = seeded(&mut store, &["keep me"]);
        let next = store.apply(&tasks, create(""));
        assert_eq!(next, tasks);
        let next = store.apply(&tasks, create("   \t"));
        assert_eq!(next, tasks);
    }

    #[test]
    fn created_ids_are_pairwise_distinct() {
        let mut store = store();
        let tasks = seeded(&mut store, &["a", "b", "c", "d", "e"]);
        let ids: HashSet<Uuid> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), tasks.len());
    }

    #[test]
    fn edit_title_preserves_identity() {
        let mut store = store();
        let tasks = store.apply(
            &[],
            Action::Create {
                title: "Wash car".into(),
                details: "use the good sponge".into(),
            },
        );
        let tasks = store.apply(
            &tasks,
            Action::Check {
                id: tasks[0].id,
                complete: true,
            },
        );
        let before = tasks[0].clone();

        let tasks = store.apply(
            &tasks,
            Action::EditTitle {
                id: before.id,
                title: "Wash the car".into(),
            },
        );
        assert_eq!(tasks[0].id, before.id);
        assert_eq!(tasks[0].details, before.details);
        assert_eq!(tasks[0].complete, before.complete);
        assert_eq!(tasks[0].title, "Wash the car");
    }

    #[test]
    fn edit_title_with_unknown_id_changes_nothing() {
        let mut store = store();
        let tasks = seeded(&mut store, &["only"]);
        let next = store.apply(
            &tasks,
            Action::EditTitle {
                id: Uuid::from_u128(999),
                title: "ghost".into(),
            },
        );
        assert_eq!(next, tasks);
    }

    #[test]
    fn edit_title_keeps_previous_title_when_blank() {
        let mut store = store();
        let tasks = seeded(&mut store, &["Wash car"]);
        let next = store.apply(
            &tasks,
            Action::EditTitle {
                id: tasks[0].id,
                title: "  ".into(),
            },
        );
        assert_eq!(next[0].title, "Wash car");
    }

    #[test]
    fn edit_details_replaces_only_details() {
        let mut store = store();
        let tasks = seeded(&mut store, &["groceries"]);
        let next = store.apply(
            &tasks,
            Action::EditDetails {
                id: tasks[0].id,
                details: "milk, eggs".into(),
            },
        );
        assert_eq!(next[0].details, "milk, eggs");
        assert_eq!(next[0].title, tasks[0].title);
        assert_eq!(next[0].id, tasks[0].id);
        assert_eq!(next[0].complete, tasks[0].complete);
    }

    #[test]
    fn details_may_be_cleared_to_empty() {
        let mut store = store();
        let tasks = store.apply(
            &[],
            Action::Create {
                title: "groceries".into(),
                details: "milk".into(),
            },
        );
        let next = store.apply(
            &tasks,
            Action::EditDetails {
                id: tasks[0].id,
                details: String::new(),
            },
        );
        assert_eq!(next[0].details, "");
    }

    #[test]
    fn check_sets_and_clears_the_flag() {
        let mut store = store();
        let tasks = seeded(&mut store, &["laundry"]);
        let id = tasks[0].id;

        let tasks = store.apply(&tasks, Action::Check { id, complete: true });
        assert!(tasks[0].complete);
        let tasks = store.apply(&tasks, Action::Check { id, complete: false });
        assert!(!tasks[0].complete);
    }

    #[test]
    fn check_with_unknown_id_changes_nothing() {
        let mut store = store();
        let tasks = seeded(&mut store, &["laundry"]);
        let next = store.apply(
            &tasks,
            Action::Check {
                id: Uuid::from_u128(999),
                complete: true,
            },
        );
        assert_eq!(next, tasks);
    }

    #[test]
    fn delete_removes_only_the_matching_task() {
        let mut store = store();
        let tasks = seeded(&mut store, &["a", "b", "c"]);
        let next = store.apply(&tasks, Action::Delete { id: tasks[1].id });
        assert_eq!(titles(&next), ["a", "c"]);
    }

    #[test]
    fn delete_with_unknown_id_changes_nothing() {
        let mut store = store();
        let tasks = seeded(&mut store, &["a"]);
        let next = store.apply(
            &tasks,
            Action::Delete {
                id: Uuid::from_u128(999),
            },
        );
        assert_eq!(next, tasks);
    }

    #[test]
    fn clear_completed_preserves_remaining_order() {
        let mut store = store();
        let tasks = seeded(&mut store, &["t1", "t2", "t3", "t4"]);
        let tasks = store.apply(
            &tasks,
            Action::Check {
                id: tasks[1].id,
                complete: true,
            },
        );
        let tasks = store.apply(
            &tasks,
            Action::Check {
                id: tasks[2].id,
                complete: true,
            },
        );

        let next = store.apply(&tasks, Action::ClearCompleted);
        assert_eq!(titles(&next), ["t1", "t4"]);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut store = store();
        let tasks = seeded(&mut store, &["a", "b"]);
        let cleared = store.apply(&tasks, Action::Clear);
        assert!(cleared.is_empty());
        assert_eq!(store.apply(&cleared, Action::Clear), cleared);
    }

    #[test]
    fn untouched_tasks_carry_over_unchanged() {
        let mut store = store();
        let tasks = seeded(&mut store, &["a", "b", "c"]);
        let next = store.apply(
            &tasks,
            Action::EditTitle {
                id: tasks[1].id,
                title: "b2".into(),
            },
        );
        assert_eq!(next[0], tasks[0]);
        assert_eq!(next[2], tasks[2]);
    }
}
