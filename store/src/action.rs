use uuid::Uuid;

/// A request to transform the task list.
///
/// Every variant is total over any list: lookups that miss leave the list
/// unchanged rather than failing.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Insert a new task. Where it lands is governed by
    /// [`crate::InsertOrder`].
    Create { title: String, details: String },
    /// Replace the title of the matching task. A blank title keeps the
    /// previous one.
    EditTitle { id: Uuid, title: String },
    /// Replace the free-text details of the matching task.
    EditDetails { id: Uuid, details: String },
    /// Set the complete flag on the matching task.
    Check { id: Uuid, complete: bool },
    /// Remove the matching task.
    Delete { id: Uuid },
    /// Remove every completed task, keeping the rest in order.
    ClearCompleted,
    /// Empty the list.
    Clear,
}
