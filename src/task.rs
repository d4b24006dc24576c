//! The task record.

use std::fmt;

/// Name of the placeholder task shown when no task file exists yet.
pub const DEFAULT_TASK_NAME: &str = "Create a Task";

/// A named to-do item with a completion flag.
///
/// Tasks are values: marking one complete produces a new `Task` via
/// [`Task::completed`] rather than flipping the flag in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Task {
    name: String,
    is_complete: bool,
}

impl Task {
    /// Create a new, incomplete task.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_status(name, false)
    }

    /// Create a task with an explicit completion flag.
    #[must_use]
    pub fn with_status(name: impl Into<String>, is_complete: bool) -> Self {
        Self {
            name: name.into(),
            is_complete,
        }
    }

    /// The placeholder task used to seed a fresh task file.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::new(DEFAULT_TASK_NAME)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// A copy of this task with the completion flag set.
    #[must_use]
    pub fn completed(&self) -> Self {
        Self {
            name: self.name.clone(),
            is_complete: true,
        }
    }

    /// Human-readable status label.
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.is_complete {
            "Completed"
        } else {
            "Incomplete"
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.status_label())
    }
}
