//! Pure operations over a task sequence.
//!
//! None of these touch the file system. Callers persist the returned
//! sequence themselves.

use std::fmt;

use crate::codec::DELIMITER;
use crate::error::{Result, TaskListError};
use crate::task::Task;

/// Append a new, incomplete task.
#[must_use]
pub fn add_task(tasks: &[Task], name: &str) -> Vec<Task> {
    let mut next = tasks.to_vec();
    next.push(Task::new(name));
    next
}

/// Mark the task at a 1-based position complete.
///
/// # Errors
///
/// Returns [`TaskListError::InvalidTaskNumber`] when the position is 0 or
/// past the end. The input sequence is untouched either way.
pub fn complete_task(tasks: &[Task], one_based_index: usize) -> Result<Vec<Task>> {
    let target = one_based_index
        .checked_sub(1)
        .filter(|idx| *idx < tasks.len())
        .ok_or(TaskListError::InvalidTaskNumber {
            number: one_based_index,
            len: tasks.len(),
        })?;

    Ok(tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            if idx == target {
                task.completed()
            } else {
                task.clone()
            }
        })
        .collect())
}

/// Keep only incomplete tasks, in their original order.
#[must_use]
pub fn remove_completed(tasks: &[Task]) -> Vec<Task> {
    tasks.iter().filter(|t| !t.is_complete()).cloned().collect()
}

/// Why a task name was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRejection {
    /// Empty or whitespace only.
    Blank,
    /// Contains the file format delimiter.
    ContainsDelimiter,
}

impl fmt::Display for NameRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameRejection::Blank => write!(f, "You are trying to add nothing."),
            NameRejection::ContainsDelimiter => {
                write!(f, "Task names cannot contain '{DELIMITER}'.")
            }
        }
    }
}

/// Check a user-entered task name before it is added.
pub fn validate_task_name(input: &str) -> std::result::Result<&str, NameRejection> {
    if input.trim().is_empty() {
        Err(NameRejection::Blank)
    } else if input.contains(DELIMITER) {
        Err(NameRejection::ContainsDelimiter)
    } else {
        Ok(input)
    }
}

/// Parse a 1-based task number typed by the user.
#[must_use]
pub fn parse_task_number(input: &str) -> Option<usize> {
    input.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Vec<Task> {
        vec![Task::new("A"), Task::new("B"), Task::new("C")]
    }

    #[test]
    fn test_add_task_appends_incomplete() {
        let tasks = add_task(&[Task::with_status("A", true)], "B");
        assert_eq!(tasks, vec![Task::with_status("A", true), Task::new("B")]);
    }

    #[test]
    fn test_add_task_allows_duplicates() {
        let tasks = add_task(&[Task::new("A")], "A");
        assert_eq!(tasks.len(), 2);
    }

    #[test]
    fn test_complete_task_by_index() {
        let tasks = complete_task(&abc(), 2).unwrap();
        assert_eq!(
            tasks,
            vec![
                Task::new("A"),
                Task::with_status("B", true),
                Task::new("C")
            ]
        );
    }

    #[test]
    fn test_complete_task_out_of_bounds() {
        let tasks = abc();
        for idx in [0, 4, usize::MAX] {
            let err = complete_task(&tasks, idx).unwrap_err();
            assert!(matches!(
                err,
                TaskListError::InvalidTaskNumber { number, len: 3 } if number == idx
            ));
        }
        assert_eq!(tasks, abc());
    }

    #[test]
    fn test_complete_task_on_empty_sequence() {
        assert!(complete_task(&[], 1).is_err());
    }

    #[test]
    fn test_complete_already_complete_is_noop() {
        let tasks = vec![Task::with_status("A", true)];
        assert_eq!(complete_task(&tasks, 1).unwrap(), tasks);
    }

    #[test]
    fn test_remove_completed_preserves_order() {
        let tasks = vec![
            Task::with_status("A", true),
            Task::new("B"),
            Task::with_status("C", true),
            Task::new("D"),
        ];
        assert_eq!(
            remove_completed(&tasks),
            vec![Task::new("B"), Task::new("D")]
        );
    }

    #[test]
    fn test_remove_completed_is_idempotent() {
        let tasks = vec![
            Task::with_status("A", true),
            Task::new("B"),
            Task::with_status("C", true),
        ];
        let once = remove_completed(&tasks);
        let twice = remove_completed(&once);
        assert_eq!(once, vec![Task::new("B")]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_validate_task_name() {
        assert_eq!(validate_task_name("Buy milk"), Ok("Buy milk"));
        assert_eq!(validate_task_name(""), Err(NameRejection::Blank));
        assert_eq!(validate_task_name("  \t "), Err(NameRejection::Blank));
        assert_eq!(
            validate_task_name("time: 5pm"),
            Err(NameRejection::ContainsDelimiter)
        );
    }

    #[test]
    fn test_parse_task_number() {
        assert_eq!(parse_task_number("2"), Some(2));
        assert_eq!(parse_task_number(" 3 "), Some(3));
        assert_eq!(parse_task_number("0"), Some(0));
        assert_eq!(parse_task_number("-1"), None);
        assert_eq!(parse_task_number("two"), None);
        assert_eq!(parse_task_number(""), None);
    }
}
